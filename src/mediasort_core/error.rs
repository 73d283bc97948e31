use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediasortError {
    // Startup errors
    #[error("Configuration error: {0}")]
    StartupConfig(String),

    #[error("Invalid date format template: {0}")]
    InvalidTemplate(String),

    // Filesystem errors
    #[error("Directory walker error: {0}")]
    Traversal(#[from] walkdir::Error),

    #[error("Failed to transfer {from} -> {to}: {error}")]
    Transfer {
        from: PathBuf,
        to: PathBuf,
        #[source]
        error: std::io::Error,
    },

    #[error("Destination already exists: {0}")]
    DestinationExists(PathBuf),

    #[error("Source and destination are the same file: {0}")]
    SameFile(PathBuf),

    // Metadata errors
    #[error("Exiftool error: {0}")]
    Exiftool(String),

    #[error("Date parsing error: {0}")]
    InvalidDateFormat(String),

    #[error("Failed to extract metadata from {path}: {reason}")]
    MetadataExtraction { path: PathBuf, reason: String },

    #[error("No date in filename: {0}")]
    NoDateFound(String),

    #[error("No capture date in metadata or filename of {0}")]
    DateResolution(PathBuf),

    #[error("Failed to write metadata to {path}: {reason}")]
    Backfill { path: PathBuf, reason: String },
}

/// Result type for mediasort operations.
pub type Result<T> = std::result::Result<T, MediasortError>;
