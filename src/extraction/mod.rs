pub mod cbr;
pub mod cbz;

pub use cbr::RarAlgorithm;
pub use cbz::ZipAlgorithm;

use std::{fs, path::Path};

use log::info;

use crate::{archive::ArchiveFile, error::ExtractionError};

/// Unpacks every entry of an archive below `destination`.
pub trait ExtractionAlgorithm {
    fn extract(&self, archive: &mut ArchiveFile, destination: &Path)
        -> Result<(), ExtractionError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    Rar,
}

/// Detected MIME types mapped to the format able to unpack them.
pub const MIME_TYPES: &[(&str, ArchiveFormat)] = &[
    ("application/zip", ArchiveFormat::Zip),
    ("application/x-rar", ArchiveFormat::Rar),
];

impl ArchiveFormat {
    pub fn from_mime_type(mime_type: &str) -> Option<Self> {
        MIME_TYPES
            .iter()
            .find(|(mime, _)| *mime == mime_type)
            .map(|(_, format)| *format)
    }

    pub fn algorithm(self) -> Box<dyn ExtractionAlgorithm> {
        match self {
            ArchiveFormat::Zip => Box::new(ZipAlgorithm::new()),
            ArchiveFormat::Rar => Box::new(RarAlgorithm::new()),
        }
    }
}

impl TryFrom<&str> for ArchiveFormat {
    type Error = ExtractionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        ArchiveFormat::from_mime_type(value)
            .ok_or_else(|| ExtractionError::Unsupported(value.to_owned()))
    }
}

/// Extract `archive` into `destination` using the extractor registered
/// for `mime_type`.
///
/// Unsupported types are rejected before anything is written, so no
/// destination directory is left behind for them. A failure part way
/// through leaves whatever was already unpacked in place.
pub fn extract(
    archive: &mut ArchiveFile,
    mime_type: &str,
    destination: &Path,
) -> Result<(), ExtractionError> {
    let format = ArchiveFormat::try_from(mime_type)?;

    info!(
        "Extracting {} as {:?} into {}",
        archive.name(),
        format,
        destination.display()
    );

    fs::create_dir_all(destination)?;

    format.algorithm().extract(archive, destination)
}
