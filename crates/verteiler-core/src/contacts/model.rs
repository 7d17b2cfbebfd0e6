//! Contact and group models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use verteiler_csv::ContactRecord;

/// Unique identifier for a stored contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactId(pub i64);

impl ContactId {
    /// Create a new contact ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ContactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a stored group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub i64);

impl GroupId {
    /// Create a new group ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A contact group (one mailing list).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Unique identifier.
    pub id: GroupId,
    /// Display name, unique within the store.
    pub name: String,
}

impl Group {
    /// Create a new group.
    #[must_use]
    pub fn new(id: GroupId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A stored contact.
///
/// Text attributes use the empty string for "unset"; `id` is `None`
/// until the store has persisted the contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier (None for unsaved contacts).
    pub id: Option<ContactId>,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Free-text note.
    pub note: String,
    /// Creation timestamp.
    pub created_at: Option<NaiveDateTime>,
    /// Last-change timestamp.
    pub updated_at: Option<NaiveDateTime>,
    /// Names of the groups this contact belongs to.
    pub groups: BTreeSet<String>,
}

impl Contact {
    /// Create a new empty contact.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a display string for the contact.
    ///
    /// "First Last", with unset parts omitted.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl From<&ContactRecord> for Contact {
    fn from(record: &ContactRecord) -> Self {
        Self {
            id: None,
            first_name: record.first_name.clone().unwrap_or_default(),
            last_name: record.last_name.clone().unwrap_or_default(),
            email: record.email.clone().unwrap_or_default(),
            note: record.note.clone().unwrap_or_default(),
            created_at: record.created_at,
            updated_at: record.updated_at,
            groups: record.groups.clone(),
        }
    }
}

impl From<&Contact> for ContactRecord {
    fn from(contact: &Contact) -> Self {
        Self {
            first_name: non_empty(&contact.first_name),
            last_name: non_empty(&contact.last_name),
            email: non_empty(&contact.email),
            note: non_empty(&contact.note),
            created_at: contact.created_at,
            updated_at: contact.updated_at,
            groups: contact.groups.clone(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
