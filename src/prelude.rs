pub use crate::archive::ArchiveFile;
pub use crate::detection::{DetectedType, Sniffer};
pub use crate::error::RepackerError;
pub use crate::extraction::{ArchiveFormat, ExtractionAlgorithm};
pub use crate::session::{Session, SessionReport};

pub type Result<T> = std::result::Result<T, RepackerError>;
