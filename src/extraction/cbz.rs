use std::path::Path;

use log::debug;
use zip::ZipArchive;

use crate::{archive::ArchiveFile, error::ExtractionError};

use super::ExtractionAlgorithm;

/// Zip extraction straight from the already open stream.
pub struct ZipAlgorithm {}

impl ZipAlgorithm {
    pub fn new() -> ZipAlgorithm {
        ZipAlgorithm {}
    }
}

impl Default for ZipAlgorithm {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionAlgorithm for ZipAlgorithm {
    fn extract(
        &self,
        archive: &mut ArchiveFile,
        destination: &Path,
    ) -> Result<(), ExtractionError> {
        let mut zip = ZipArchive::new(archive)?;

        debug!("{} zip entries", zip.len());

        // Entry names that would escape `destination` are refused by the zip crate.
        zip.extract(destination)?;

        Ok(())
    }
}
