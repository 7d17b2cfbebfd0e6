//! Header schema mapping.
//!
//! The header line fixes the meaning of every column for the rest of the
//! file: a closed vocabulary of attribute names maps to contact fields,
//! and every other header text names a group whose per-row cell flags
//! membership.

use crate::error::{Error, Result};
use crate::record::ContactRecord;
use chrono::NaiveDateTime;

/// Date-time pattern for the created/updated columns.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Cell value flagging group membership in a data row.
pub const GROUP_MEMBER: &str = "1";

/// Cell value written for a non-member group cell on export.
pub const GROUP_NON_MEMBER: &str = "0";

/// The closed set of contact attribute columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    /// First name (`Vorname`), mandatory.
    FirstName,
    /// Last name (`Name`), mandatory.
    LastName,
    /// Email address (`Email`), mandatory.
    Email,
    /// Free-text note (`Notizen`).
    Note,
    /// Creation timestamp (`Erstellt am`).
    CreatedAt,
    /// Last-change timestamp (`Geändert am`).
    UpdatedAt,
}

impl Attribute {
    /// All attributes, in the order the writer emits their columns.
    pub const ALL: [Self; 6] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Note,
        Self::CreatedAt,
        Self::UpdatedAt,
    ];

    /// The header text naming this attribute.
    #[must_use]
    pub const fn column_name(self) -> &'static str {
        match self {
            Self::FirstName => "Vorname",
            Self::LastName => "Name",
            Self::Email => "Email",
            Self::Note => "Notizen",
            Self::CreatedAt => "Erstellt am",
            Self::UpdatedAt => "Geändert am",
        }
    }

    /// Whether the column must be present in every header.
    #[must_use]
    pub const fn is_mandatory(self) -> bool {
        matches!(self, Self::FirstName | Self::LastName | Self::Email)
    }

    /// Attributes whose columns must be present in every header.
    pub fn mandatory() -> impl Iterator<Item = Self> {
        Self::ALL
            .into_iter()
            .filter(|attribute| attribute.is_mandatory())
    }

    /// Resolves a header cell by exact, case-sensitive comparison.
    #[must_use]
    pub fn from_column_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|attribute| attribute.column_name() == name)
    }

    /// Assigns a data cell to the matching record field.
    fn assign(self, record: &mut ContactRecord, value: &str, line: usize) -> Result<()> {
        match self {
            Self::FirstName => record.first_name = non_empty(value),
            Self::LastName => record.last_name = non_empty(value),
            Self::Email => record.email = non_empty(value),
            Self::Note => record.note = non_empty(value),
            Self::CreatedAt => record.created_at = parse_timestamp(self, value, line)?,
            Self::UpdatedAt => record.updated_at = parse_timestamp(self, value, line)?,
        }
        Ok(())
    }
}

/// Meaning of one header column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    /// A column of the fixed attribute vocabulary.
    Attribute(Attribute),
    /// Any other column; its header text names a group.
    Group(String),
}

impl Column {
    fn from_header(name: &str) -> Self {
        Attribute::from_column_name(name)
            .map_or_else(|| Self::Group(name.to_string()), Self::Attribute)
    }
}

/// Positional mapping from columns to record fields, built once per file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSchema {
    columns: Vec<Column>,
}

impl HeaderSchema {
    /// Builds the schema from the tokenized header line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColumns`] when a mandatory attribute
    /// column is absent.
    pub fn from_header_fields(fields: &[&str]) -> Result<Self> {
        let columns: Vec<Column> = fields
            .iter()
            .map(|name| Column::from_header(name))
            .collect();

        let missing: Vec<String> = Attribute::mandatory()
            .filter(|attribute| !columns.contains(&Column::Attribute(*attribute)))
            .map(|attribute| attribute.column_name().to_string())
            .collect();
        if missing.is_empty() {
            Ok(Self { columns })
        } else {
            Err(Error::InvalidColumns { missing })
        }
    }

    /// Number of columns in the header.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// The columns in header order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Names of the group columns, in header order.
    pub fn group_columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().filter_map(|column| match column {
            Column::Group(name) => Some(name.as_str()),
            Column::Attribute(_) => None,
        })
    }

    /// Whether the header defines any group columns.
    #[must_use]
    pub fn has_group_columns(&self) -> bool {
        self.group_columns().next().is_some()
    }

    /// Converts one tokenized data line into a record.
    ///
    /// The field count must equal the column count, or fall short by
    /// exactly one: the final column may be omitted when its cell is
    /// empty. Fields map positionally; an attribute cell sets the record
    /// field, a group cell whose trimmed value is [`GROUP_MEMBER`] adds
    /// the group name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRecord`] at the 1-based `line` when the
    /// field count is off or an attribute value fails to parse.
    pub fn build_record(&self, fields: &[&str], line: usize) -> Result<ContactRecord> {
        let expected = self.columns.len();
        if fields.len() != expected && fields.len() + 1 != expected {
            return Err(Error::InvalidRecord {
                line,
                reason: format!("expected {expected} fields, found {}", fields.len()),
            });
        }

        let mut record = ContactRecord::new();
        for (column, value) in self.columns.iter().zip(fields) {
            match column {
                Column::Attribute(attribute) => attribute.assign(&mut record, value, line)?,
                Column::Group(name) => {
                    if value.trim() == GROUP_MEMBER {
                        record.add_group(name.clone());
                    }
                }
            }
        }
        Ok(record)
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_timestamp(
    attribute: Attribute,
    value: &str,
    line: usize,
) -> Result<Option<NaiveDateTime>> {
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map(Some)
        .map_err(|_| Error::InvalidRecord {
            line,
            reason: format!(
                "unparsable timestamp {value:?} in column {:?}",
                attribute.column_name()
            ),
        })
}
