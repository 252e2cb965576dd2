use std::path::Path;

use log::debug;
use unrar::Archive;

use crate::{archive::ArchiveFile, error::ExtractionError};

use super::ExtractionAlgorithm;

/// Rar extraction. unrar only works on files, so the archive is reopened
/// from its source path and the open stream is left untouched.
pub struct RarAlgorithm {}

impl RarAlgorithm {
    pub fn new() -> RarAlgorithm {
        RarAlgorithm {}
    }
}

impl Default for RarAlgorithm {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionAlgorithm for RarAlgorithm {
    fn extract(
        &self,
        archive: &mut ArchiveFile,
        destination: &Path,
    ) -> Result<(), ExtractionError> {
        let mut rar = Archive::new(archive.path()).open_for_processing()?;

        while let Some(header) = rar.read_header()? {
            debug!("rar entry {}", header.entry().filename.display());
            rar = header.extract_with_base(destination)?;
        }

        Ok(())
    }
}
