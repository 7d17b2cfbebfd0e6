//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Contact list reading or writing failed.
    #[error("contact list error: {0}")]
    Csv(#[from] verteiler_csv::Error),

    /// The contact store rejected an operation.
    #[error("store error: {0}")]
    Store(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
