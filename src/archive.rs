use std::{
    fs::File,
    io::{self, BufReader, Read, Seek, SeekFrom},
    path::{Path, PathBuf},
};

use log::debug;

use crate::error::RepackerError;

const BUFFER_SIZE: usize = 4096;

/// An input archive opened read-only for the duration of a session.
///
/// The source path is kept alongside the stream since some formats
/// (rar) can only be extracted from a path on disk.
#[derive(Debug)]
pub struct ArchiveFile {
    path: PathBuf,
    reader: BufReader<File>,
}

impl ArchiveFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, RepackerError> {
        let path = path.as_ref().to_path_buf();

        let file = match File::open(&path) {
            Ok(f) => f,
            Err(source) => return Err(RepackerError::Open { path, source }),
        };

        debug!("Opened {}", path.display());

        Ok(ArchiveFile {
            path,
            reader: BufReader::with_capacity(BUFFER_SIZE, file),
        })
    }

    /// Display name, the path as given on the command line. Bytes that are
    /// not valid UTF-8 come out as U+FFFD; `path()` keeps the exact path.
    pub fn name(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Read for ArchiveFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl Seek for ArchiveFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.reader.seek(pos)
    }
}

/// Open every path in order, failing on the first one that can't be read.
pub fn open_all<I, P>(paths: I) -> Result<Vec<ArchiveFile>, RepackerError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths.into_iter().map(ArchiveFile::open).collect()
}
