//! Field separator detection.

use crate::error::{Error, Result};
use crate::schema::Attribute;

/// Candidate separators, tried in priority order.
const SEPARATOR_CANDIDATES: [char; 2] = [',', ';'];

/// Text layout of one contact list file.
///
/// The quote and record-break characters are fixed for every file; only
/// the field separator varies and is inferred from the header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    /// Field separator.
    pub separator: char,
}

impl Dialect {
    /// Quote character wrapping fields that contain the separator or a
    /// record break.
    pub const QUOTE: char = '"';

    /// Record break character terminating a logical line.
    pub const RECORD_BREAK: char = '\n';

    /// Creates a dialect with the given field separator.
    #[must_use]
    pub const fn new(separator: char) -> Self {
        Self { separator }
    }

    /// Infers the dialect from the header line of `input`.
    ///
    /// Only the text before the first record break is inspected. Each
    /// candidate separator is tried in priority order; the first one that
    /// splits the header into more than one field wins. The accepted
    /// candidate must then expose every mandatory attribute column as a
    /// literal field value.
    ///
    /// # Errors
    ///
    /// - [`Error::NoContent`] when `input` is empty.
    /// - [`Error::InvalidFileFormat`] when no candidate yields more than
    ///   one field.
    /// - [`Error::InvalidColumns`] when the accepted candidate's split is
    ///   missing a mandatory column.
    pub fn sniff(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(Error::NoContent);
        }

        let header = input.split(Self::RECORD_BREAK).next().unwrap_or(input);
        for separator in SEPARATOR_CANDIDATES {
            let columns: Vec<&str> = header.split(separator).collect();
            if columns.len() < 2 {
                continue;
            }

            let missing: Vec<String> = Attribute::mandatory()
                .filter(|attribute| !columns.contains(&attribute.column_name()))
                .map(|attribute| attribute.column_name().to_string())
                .collect();
            if missing.is_empty() {
                return Ok(Self::new(separator));
            }
            return Err(Error::InvalidColumns { missing });
        }

        Err(Error::InvalidFileFormat)
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self::new(SEPARATOR_CANDIDATES[0])
    }
}
