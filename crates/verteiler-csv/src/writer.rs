//! Contact list writing.

use crate::dialect::Dialect;
use crate::record::ContactRecord;
use crate::schema::{Attribute, GROUP_MEMBER, GROUP_NON_MEMBER, TIMESTAMP_FORMAT};
use chrono::NaiveDateTime;
use std::borrow::Cow;

/// Serializes contact records into delimited text.
///
/// The inverse of [`crate::Reader`]: one header line carrying the
/// attribute columns in vocabulary order followed by one column per
/// known group, then one data line per record. Group cells carry the
/// boolean literals [`GROUP_MEMBER`] and [`GROUP_NON_MEMBER`], which is
/// what the reader understands.
///
/// A field is wrapped in quotes exactly when it contains the separator
/// or a record break. An embedded quote character is not escaped and
/// will not survive a round trip; the dialect has no escape for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Writer {
    dialect: Dialect,
}

impl Writer {
    /// Creates a writer emitting the given dialect.
    #[must_use]
    pub const fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Serializes `records`, emitting one trailing header column and one
    /// cell per record for every name in `groups`.
    ///
    /// Membership cells follow the order of `groups`; a record's
    /// membership in a group absent from `groups` is silently dropped.
    #[must_use]
    pub fn write(&self, groups: &[String], records: &[ContactRecord]) -> String {
        let mut out = String::new();
        self.write_header(&mut out, groups);
        for record in records {
            self.write_record(&mut out, groups, record);
        }
        out
    }

    fn write_header(&self, out: &mut String, groups: &[String]) {
        let cells = Attribute::ALL
            .iter()
            .map(|attribute| Cow::Borrowed(attribute.column_name()))
            .chain(groups.iter().map(|name| Cow::Borrowed(name.as_str())));
        self.write_line(out, cells);
    }

    fn write_record(&self, out: &mut String, groups: &[String], record: &ContactRecord) {
        let cells = Attribute::ALL
            .iter()
            .map(|attribute| attribute_cell(record, *attribute))
            .chain(groups.iter().map(|name| {
                if record.in_group(name) {
                    Cow::Borrowed(GROUP_MEMBER)
                } else {
                    Cow::Borrowed(GROUP_NON_MEMBER)
                }
            }));
        self.write_line(out, cells);
    }

    fn write_line<'c>(&self, out: &mut String, cells: impl Iterator<Item = Cow<'c, str>>) {
        for (index, cell) in cells.enumerate() {
            if index > 0 {
                out.push(self.dialect.separator);
            }
            out.push_str(&self.escape(&cell));
        }
        out.push(Dialect::RECORD_BREAK);
    }

    /// Quotes `value` when it contains the separator or a record break.
    fn escape<'v>(&self, value: &'v str) -> Cow<'v, str> {
        if value.contains(self.dialect.separator) || value.contains(Dialect::RECORD_BREAK) {
            let quote = Dialect::QUOTE;
            Cow::Owned(format!("{quote}{value}{quote}"))
        } else {
            Cow::Borrowed(value)
        }
    }
}

fn attribute_cell(record: &ContactRecord, attribute: Attribute) -> Cow<'_, str> {
    match attribute {
        Attribute::FirstName => Cow::Borrowed(record.first_name.as_deref().unwrap_or("")),
        Attribute::LastName => Cow::Borrowed(record.last_name.as_deref().unwrap_or("")),
        Attribute::Email => Cow::Borrowed(record.email.as_deref().unwrap_or("")),
        Attribute::Note => Cow::Borrowed(record.note.as_deref().unwrap_or("")),
        Attribute::CreatedAt => timestamp_cell(record.created_at),
        Attribute::UpdatedAt => timestamp_cell(record.updated_at),
    }
}

fn timestamp_cell(stamp: Option<NaiveDateTime>) -> Cow<'static, str> {
    stamp.map_or(Cow::Borrowed(""), |stamp| {
        Cow::Owned(stamp.format(TIMESTAMP_FORMAT).to_string())
    })
}
