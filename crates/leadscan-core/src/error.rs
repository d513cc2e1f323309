//! Error types for the leadscan-core library.

use thiserror::Error;

/// Main error type for the leadscan library.
#[derive(Error, Debug)]
pub enum LeadscanError {
    /// Field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Record store error.
    #[error("record store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to turning a scanned payload into fields.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The scan delivered no payload.
    #[error("empty scan payload")]
    Empty,

    /// The payload could not be parsed as the expected structured shape.
    #[error("malformed payload: {0}")]
    Malformed(String),

    /// A required field is absent from the structured payload.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// The pattern template produced no match on the payload.
    #[error("pattern did not match payload")]
    NoMatch,

    /// The pattern template is not a valid regular expression.
    #[error("invalid pattern template: {0}")]
    Template(#[from] regex::Error),
}

/// Errors reported by a record store collaborator.
///
/// The submission pipeline surfaces these verbatim as user-facing message
/// text; the store decides what detail to include.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store received the request and refused it.
    #[error("record store rejected the request: {0}")]
    Rejected(String),

    /// The store could not be reached at all.
    #[error("record store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for the leadscan library.
pub type Result<T> = std::result::Result<T, LeadscanError>;
