//! Contact list reading.

use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::fields::split_fields;
use crate::lines::LogicalLines;
use crate::record::ContactRecord;
use crate::schema::HeaderSchema;

/// Streaming contact list reader.
///
/// [`Reader::new`] sniffs the dialect and consumes the header line;
/// iteration then yields one [`ContactRecord`] result per logical data
/// line. Data lines are numbered from 1, so a failed line can be shown
/// to the user by index.
///
/// The reader holds no state beyond the current parse: dialect and
/// schema are derived once and immutable afterwards.
#[derive(Debug)]
pub struct Reader<'a> {
    dialect: Dialect,
    schema: HeaderSchema,
    lines: LogicalLines<'a>,
    line: usize,
    produced: usize,
    limit: Option<usize>,
}

impl<'a> Reader<'a> {
    /// Sniffs the dialect of `input` and parses its header line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoContent`], [`Error::InvalidFileFormat`], or
    /// [`Error::InvalidColumns`] when the input's shape is unusable;
    /// these abort before any record is parsed.
    pub fn new(input: &'a str) -> Result<Self> {
        let dialect = Dialect::sniff(input)?;
        Self::with_dialect(input, dialect)
    }

    /// Builds a reader for input whose dialect is already known,
    /// skipping separator sniffing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoContent`] for empty input and
    /// [`Error::InvalidColumns`] when the header is missing a mandatory
    /// column.
    pub fn with_dialect(input: &'a str, dialect: Dialect) -> Result<Self> {
        let mut lines = LogicalLines::new(input);
        let header = lines.next().ok_or(Error::NoContent)?;
        let fields = split_fields(header, dialect.separator);
        let schema = HeaderSchema::from_header_fields(&fields)?;
        Ok(Self {
            dialect,
            schema,
            lines,
            line: 0,
            produced: 0,
            limit: None,
        })
    }

    /// Caps the number of records produced; `None` reads everything.
    ///
    /// Iteration stops once the cap is reached, regardless of remaining
    /// input. Used to bound preview size.
    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// The dialect in use.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The header schema derived from the first logical line.
    #[must_use]
    pub const fn schema(&self) -> &HeaderSchema {
        &self.schema
    }

    /// 1-based index of the most recently read data line, 0 before the
    /// first.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Reads every remaining record, stopping at the first invalid line.
    ///
    /// This is the strict validation pass run before an import is
    /// committed: one bad line rejects the whole file.
    ///
    /// # Errors
    ///
    /// Propagates the first [`Error::InvalidRecord`] encountered.
    pub fn read_all(self) -> Result<Vec<ContactRecord>> {
        self.collect()
    }
}

impl Iterator for Reader<'_> {
    type Item = Result<ContactRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.limit.is_some_and(|limit| self.produced >= limit) {
            return None;
        }
        let line = self.lines.next()?;
        self.line += 1;
        let fields = split_fields(line, self.dialect.separator);
        let result = self.schema.build_record(&fields, self.line);
        if result.is_ok() {
            self.produced += 1;
        }
        Some(result)
    }
}
