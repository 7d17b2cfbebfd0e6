//! Parsed contact records.

use chrono::NaiveDateTime;
use std::collections::BTreeSet;

/// One contact parsed from, or serialized into, a contact list.
///
/// An attribute whose cell was empty stays `None`; group membership is
/// carried as the set of group names whose columns were flagged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContactRecord {
    /// First name (`Vorname` column).
    pub first_name: Option<String>,
    /// Last name (`Name` column).
    pub last_name: Option<String>,
    /// Email address (`Email` column).
    pub email: Option<String>,
    /// Free-text note (`Notizen` column).
    pub note: Option<String>,
    /// Creation timestamp (`Erstellt am` column).
    pub created_at: Option<NaiveDateTime>,
    /// Last-change timestamp (`Geändert am` column).
    pub updated_at: Option<NaiveDateTime>,
    /// Names of the groups this contact belongs to.
    pub groups: BTreeSet<String>,
}

impl ContactRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the contact to the named group.
    pub fn add_group(&mut self, name: impl Into<String>) {
        self.groups.insert(name.into());
    }

    /// Checks membership in the named group.
    #[must_use]
    pub fn in_group(&self, name: &str) -> bool {
        self.groups.contains(name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_empty() {
        let record = ContactRecord::new();
        assert!(record.first_name.is_none());
        assert!(record.groups.is_empty());
    }

    #[test]
    fn test_group_membership() {
        let mut record = ContactRecord::new();
        record.add_group("InfoMail");
        assert!(record.in_group("InfoMail"));
        assert!(!record.in_group("Newsletter"));
    }

    #[test]
    fn test_adding_a_group_twice_is_idempotent() {
        let mut record = ContactRecord::new();
        record.add_group("InfoMail");
        record.add_group("InfoMail");
        assert_eq!(record.groups.len(), 1);
    }
}
