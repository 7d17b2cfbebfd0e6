//! Contact storage interfaces.
//!
//! The persistence engine itself lives outside this crate; the services
//! only see these traits. All operations are synchronous and already
//! validated. Failures surface as [`crate::Error::Store`] and are never
//! retried here.

use super::model::{Contact, ContactId, Group, GroupId};
use crate::Result;

/// Write-side store operations the import commit path relies on.
pub trait ContactStore {
    /// Checks whether a contact with this first and last name exists.
    ///
    /// # Errors
    ///
    /// Returns an error when the store lookup fails.
    fn contact_exists(&self, first_name: &str, last_name: &str) -> Result<bool>;

    /// Looks up a group by its display name.
    ///
    /// # Errors
    ///
    /// Returns an error when the store lookup fails.
    fn group_by_name(&self, name: &str) -> Result<Option<Group>>;

    /// Groups newly imported contacts fall back to when the imported
    /// file defines no group columns.
    ///
    /// # Errors
    ///
    /// Returns an error when the store lookup fails.
    fn default_groups(&self) -> Result<Vec<Group>>;

    /// Persists `contact` with memberships in `groups`, returning the
    /// stored contact with its identifier assigned.
    ///
    /// # Errors
    ///
    /// Returns an error when the store write fails.
    fn create_contact(&mut self, contact: Contact, groups: &[Group]) -> Result<Contact>;
}

/// Read-side store operations the export path relies on.
pub trait ContactSource {
    /// All groups known to the store, in display order.
    ///
    /// # Errors
    ///
    /// Returns an error when the store lookup fails.
    fn all_groups(&self) -> Result<Vec<Group>>;

    /// All stored contacts.
    ///
    /// # Errors
    ///
    /// Returns an error when the store lookup fails.
    fn all_contacts(&self) -> Result<Vec<Contact>>;
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    contacts: Vec<Contact>,
    groups: Vec<Group>,
    default_group_ids: Vec<GroupId>,
    next_id: i64,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a group and returns it.
    pub fn add_group(&mut self, name: impl Into<String>) -> Group {
        self.next_id += 1;
        let group = Group::new(GroupId::new(self.next_id), name);
        self.groups.push(group.clone());
        group
    }

    /// Adds a group and marks it as a default for imports whose file
    /// defines no group columns.
    pub fn add_default_group(&mut self, name: impl Into<String>) -> Group {
        let group = self.add_group(name);
        self.default_group_ids.push(group.id);
        group
    }

    /// The stored contacts, in creation order.
    #[must_use]
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }
}

impl ContactStore for MemoryStore {
    fn contact_exists(&self, first_name: &str, last_name: &str) -> Result<bool> {
        Ok(self
            .contacts
            .iter()
            .any(|contact| contact.first_name == first_name && contact.last_name == last_name))
    }

    fn group_by_name(&self, name: &str) -> Result<Option<Group>> {
        Ok(self.groups.iter().find(|group| group.name == name).cloned())
    }

    fn default_groups(&self) -> Result<Vec<Group>> {
        Ok(self
            .groups
            .iter()
            .filter(|group| self.default_group_ids.contains(&group.id))
            .cloned()
            .collect())
    }

    fn create_contact(&mut self, mut contact: Contact, groups: &[Group]) -> Result<Contact> {
        self.next_id += 1;
        contact.id = Some(ContactId::new(self.next_id));
        contact.groups = groups.iter().map(|group| group.name.clone()).collect();
        self.contacts.push(contact.clone());
        Ok(contact)
    }
}

impl ContactSource for MemoryStore {
    fn all_groups(&self) -> Result<Vec<Group>> {
        Ok(self.groups.clone())
    }

    fn all_contacts(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.clone())
    }
}
