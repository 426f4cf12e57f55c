use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Named component {name}({class}) does not extend from an extensible class")]
    Validation { name: String, class: String },
    #[error("Malformed @{annotation} on {class}: {reason}")]
    MalformedAnnotation {
        class: String,
        annotation: String,
        reason: String,
    },
    #[error("Registry {path} is out of date with the scanned classes")]
    OutOfDate { path: String },
    #[error("Invalid class file {origin}: {message}")]
    ClassFormat { origin: String, message: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, ScanError>;
