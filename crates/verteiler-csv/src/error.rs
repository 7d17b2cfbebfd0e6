//! Error types for contact list exchange.

/// Result type alias for exchange operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading contact lists.
///
/// The first three variants describe the shape of the whole file and are
/// raised once, before any record is parsed. [`Error::InvalidRecord`]
/// points at a single offending data line.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A mandatory header column is absent.
    #[error("missing mandatory columns: {}", .missing.join(", "))]
    InvalidColumns {
        /// Names of the mandatory columns not found in the header.
        missing: Vec<String>,
    },

    /// No candidate separator splits the header into more than one field.
    #[error("unrecognized file format: no field separator found")]
    InvalidFileFormat,

    /// The input contains no text at all.
    #[error("input is empty")]
    NoContent,

    /// A data line could not be converted into a contact record.
    #[error("invalid record at line {line}: {reason}")]
    InvalidRecord {
        /// 1-based index of the offending logical data line.
        line: usize,
        /// Why the line was rejected.
        reason: String,
    },
}
