use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use log::{debug, info};
use walkdir::WalkDir;

use crate::{
    archive::ArchiveFile,
    detection,
    error::{InputError, RepackerError},
    extraction,
};

pub const TEMP_DIR_PREFIX: &str = "comics-repacker-";

/// Directory name for the archive at `index`, zero padded to four digits.
pub fn extraction_dir_name(index: usize) -> String {
    format!("{:04}", index)
}

#[derive(Debug)]
pub struct SessionReport {
    /// Where the archives were unpacked. Removed by the time `run` returns.
    pub workdir: PathBuf,
    pub extracted: usize,
}

/// One pass over a fixed list of archives: report their types, unpack
/// each into its own numbered folder of a temporary directory and wait
/// for the user before cleaning up.
pub struct Session {
    archives: Vec<ArchiveFile>,
}

impl Session {
    pub fn new(archives: Vec<ArchiveFile>) -> Self {
        Session { archives }
    }

    pub fn print_archive_info<W: Write>(&mut self, output: &mut W) -> Result<(), RepackerError> {
        for archive in self.archives.iter_mut() {
            let detected = detection::detect(archive)?;

            writeln!(
                output,
                "{} {} {}",
                archive.name(),
                detected.mime_type,
                detected.description
            )
            .map_err(InputError::OutputFailed)?;
        }

        Ok(())
    }

    /// Unpack archive `i` into `workdir/{i:04}`, stopping at the first failure.
    pub fn extract_archives(&mut self, workdir: &Path) -> Result<usize, RepackerError> {
        for (i, archive) in self.archives.iter_mut().enumerate() {
            let destination = workdir.join(extraction_dir_name(i));
            Self::extract_archive(archive, &destination)?;
        }

        Ok(self.archives.len())
    }

    pub fn extract_archive(
        archive: &mut ArchiveFile,
        destination: &Path,
    ) -> Result<(), RepackerError> {
        let mime_type = detection::mime_type(archive)?;
        extraction::extract(archive, &mime_type, destination)?;

        let files = WalkDir::new(destination)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .count();
        info!("{}: {} files extracted", archive.name(), files);

        Ok(())
    }

    pub fn run<R, W>(mut self, mut input: R, mut output: W) -> Result<SessionReport, RepackerError>
    where
        R: BufRead,
        W: Write,
    {
        self.print_archive_info(&mut output)?;

        // Dropping the guard removes the directory on every early return below.
        let tmp = tempfile::Builder::new()
            .prefix(TEMP_DIR_PREFIX)
            .tempdir()
            .map_err(RepackerError::Workspace)?;
        let workdir = tmp.path().to_path_buf();
        debug!("Created {}", workdir.display());

        writeln!(
            output,
            "Using {} as temporary working directory",
            workdir.display()
        )
        .map_err(InputError::OutputFailed)?;

        let extracted = self.extract_archives(&workdir)?;

        write!(output, "Press Enter to continue...").map_err(InputError::OutputFailed)?;
        output.flush().map_err(InputError::OutputFailed)?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .map_err(InputError::UserInputFailed)?;

        // Closed stdin is not an acknowledgment.
        if read == 0 {
            return Err(InputError::UserInputFailed(io::ErrorKind::UnexpectedEof.into()).into());
        }

        tmp.close().map_err(RepackerError::Workspace)?;
        debug!("Removed {}", workdir.display());

        writeln!(output, "Done.").map_err(InputError::OutputFailed)?;

        Ok(SessionReport { workdir, extracted })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_names_are_zero_padded() {
        assert_eq!(extraction_dir_name(0), "0000");
        assert_eq!(extraction_dir_name(7), "0007");
        assert_eq!(extraction_dir_name(42), "0042");
        assert_eq!(extraction_dir_name(9999), "9999");
        assert_eq!(extraction_dir_name(12345), "12345");
    }

    #[test]
    fn empty_session_still_pauses() {
        let mut out = Vec::new();
        let report = Session::new(Vec::new())
            .run(&b"\n"[..], &mut out)
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Using "));
        assert!(out.contains("Press Enter to continue..."));
        assert!(out.ends_with("Done.\n"));
        assert_eq!(report.extracted, 0);
        assert!(!report.workdir.exists());
    }

    #[test]
    fn end_of_input_is_not_acknowledgment() {
        let mut out = Vec::new();
        let result = Session::new(Vec::new()).run(&b""[..], &mut out);

        match result {
            Err(RepackerError::Input(InputError::UserInputFailed(e))) => {
                assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof)
            }
            other => panic!("Expected input error, got {:?}", other),
        }

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Press Enter to continue..."));
        assert!(!out.contains("Done."));

        let workdir = out
            .lines()
            .find_map(|l| l.strip_prefix("Using "))
            .and_then(|l| l.strip_suffix(" as temporary working directory"))
            .expect("workdir line missing");
        assert!(!Path::new(workdir).exists());
    }
}
