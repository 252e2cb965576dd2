use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RepackerError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Detection(DetectionError),
    #[error(transparent)]
    Extraction(ExtractionError),
    #[error("Temporary working directory: {0}")]
    Workspace(std::io::Error),
    #[error(transparent)]
    Input(InputError),
    #[error(transparent)]
    FailedToInitialiseLogger(log::SetLoggerError),
}

impl From<DetectionError> for RepackerError {
    fn from(value: DetectionError) -> Self {
        RepackerError::Detection(value)
    }
}

impl From<ExtractionError> for RepackerError {
    fn from(value: ExtractionError) -> Self {
        RepackerError::Extraction(value)
    }
}

impl From<InputError> for RepackerError {
    fn from(value: InputError) -> Self {
        RepackerError::Input(value)
    }
}

impl From<log::SetLoggerError> for RepackerError {
    fn from(value: log::SetLoggerError) -> Self {
        RepackerError::FailedToInitialiseLogger(value)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("Failed to sniff archive type: {0}")]
    IOError(std::io::Error),
}

impl From<std::io::Error> for DetectionError {
    fn from(value: std::io::Error) -> Self {
        DetectionError::IOError(value)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Unsupported input archive format: {0}")]
    Unsupported(String),
    #[error("Failed to extract zip archive: {0}")]
    Zip(zip::result::ZipError),
    #[error("Failed to extract rar archive: {0}")]
    Rar(unrar::error::UnrarError),
    #[error(transparent)]
    IOError(std::io::Error),
}

impl From<zip::result::ZipError> for ExtractionError {
    fn from(value: zip::result::ZipError) -> Self {
        ExtractionError::Zip(value)
    }
}

impl From<unrar::error::UnrarError> for ExtractionError {
    fn from(value: unrar::error::UnrarError) -> Self {
        ExtractionError::Rar(value)
    }
}

impl From<std::io::Error> for ExtractionError {
    fn from(value: std::io::Error) -> Self {
        ExtractionError::IOError(value)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to get user input: {0}")]
    UserInputFailed(std::io::Error),
    #[error("Failed to write output: {0}")]
    OutputFailed(std::io::Error),
}
