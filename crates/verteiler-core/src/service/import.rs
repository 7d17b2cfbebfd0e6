//! Contact list import.
//!
//! The commit path: parse, skip duplicates and unparsable lines,
//! resolve groups, persist. Deliberately more forgiving than the strict
//! preview pass behind [`preview`]; the two paths stay separate because
//! their failure policies differ.

use tracing::{debug, warn};
use verteiler_csv::{ContactRecord, LogicalLines, Reader};

use crate::contacts::{Contact, ContactStore, Group};
use crate::error::Result;

/// Observer receiving progress notifications during an import.
///
/// Notifications arrive synchronously and in order on the caller's
/// thread, interleaved with the parse loop: one
/// [`import_started`](ImportObserver::import_started), one
/// [`line_processed`](ImportObserver::line_processed) per logical line
/// (the header included), and one
/// [`import_finished`](ImportObserver::import_finished). All methods
/// default to doing nothing.
pub trait ImportObserver {
    /// Called once with the total logical line count, before any line
    /// is processed.
    fn import_started(&mut self, total_lines: usize) {
        let _ = total_lines;
    }

    /// Called after each processed logical line.
    fn line_processed(&mut self, lines_done: usize) {
        let _ = lines_done;
    }

    /// Called once after the last line, with the newly created contacts.
    fn import_finished(&mut self, created: &[Contact]) {
        let _ = created;
    }
}

/// Observer that ignores every notification.
impl ImportObserver for () {}

/// Summary of a committed import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportOutcome {
    /// Contacts newly created by this import.
    pub created: Vec<Contact>,
    /// Data lines skipped because an identically named contact exists.
    pub skipped_duplicates: usize,
    /// Data lines skipped because they could not be parsed.
    pub skipped_invalid: usize,
}

/// Parses `input` without touching any store, capped at `limit` records.
///
/// The strict validation pass shown to the user before committing: the
/// first invalid line rejects the whole file.
///
/// # Errors
///
/// Propagates every [`verteiler_csv::Error`], including the first
/// invalid record.
pub fn preview(input: &str, limit: Option<usize>) -> Result<Vec<ContactRecord>> {
    let records = Reader::new(input)?.with_limit(limit).read_all()?;
    Ok(records)
}

/// Imports `input` into `store`.
///
/// Sniffing and header errors abort the whole operation before any
/// record is parsed. Afterwards each data line is handled on its own:
/// unparsable lines and duplicates (same first and last name as a
/// stored contact) are logged, counted, and skipped. Group names
/// resolve through the store; when the header defines no group columns
/// at all, new contacts join the store's default groups instead.
///
/// # Errors
///
/// Propagates sniffing/header errors and store failures unchanged.
/// Contacts created before a store failure stay created; there is no
/// transaction spanning the file.
pub fn import<S, O>(store: &mut S, input: &str, observer: &mut O) -> Result<ImportOutcome>
where
    S: ContactStore,
    O: ImportObserver,
{
    let total_lines = LogicalLines::new(input).count();
    let reader = Reader::new(input)?;

    observer.import_started(total_lines);
    let mut lines_done = 1; // the header
    observer.line_processed(lines_done);

    let default_groups = if reader.schema().has_group_columns() {
        None
    } else {
        Some(store.default_groups()?)
    };

    let mut outcome = ImportOutcome::default();
    for parsed in reader {
        lines_done += 1;
        match parsed {
            Ok(record) => commit_record(store, record, default_groups.as_deref(), &mut outcome)?,
            Err(error) => {
                warn!("skipping line: {error}");
                outcome.skipped_invalid += 1;
            }
        }
        observer.line_processed(lines_done);
    }

    observer.import_finished(&outcome.created);
    Ok(outcome)
}

fn commit_record<S: ContactStore>(
    store: &mut S,
    record: ContactRecord,
    default_groups: Option<&[Group]>,
    outcome: &mut ImportOutcome,
) -> Result<()> {
    let contact = Contact::from(&record);
    if store.contact_exists(&contact.first_name, &contact.last_name)? {
        debug!("skipping duplicate contact {}", contact.display_name());
        outcome.skipped_duplicates += 1;
        return Ok(());
    }

    let groups = match default_groups {
        Some(defaults) => defaults.to_vec(),
        None => resolve_groups(store, &record)?,
    };
    let created = store.create_contact(contact, &groups)?;
    outcome.created.push(created);
    Ok(())
}

fn resolve_groups<S: ContactStore>(store: &S, record: &ContactRecord) -> Result<Vec<Group>> {
    let mut groups = Vec::new();
    for name in &record.groups {
        match store.group_by_name(name)? {
            Some(group) => groups.push(group),
            None => warn!("unknown group {name:?}, membership dropped"),
        }
    }
    Ok(groups)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::contacts::MemoryStore;
    use crate::error::Error;

    #[derive(Default)]
    struct RecordingObserver {
        events: Vec<String>,
    }

    impl ImportObserver for RecordingObserver {
        fn import_started(&mut self, total_lines: usize) {
            self.events.push(format!("started {total_lines}"));
        }

        fn line_processed(&mut self, lines_done: usize) {
            self.events.push(format!("line {lines_done}"));
        }

        fn import_finished(&mut self, created: &[Contact]) {
            self.events.push(format!("finished {}", created.len()));
        }
    }

    /// Store whose writes start failing after a set number of successes.
    struct FlakyStore {
        inner: MemoryStore,
        remaining_writes: usize,
    }

    impl ContactStore for FlakyStore {
        fn contact_exists(&self, first_name: &str, last_name: &str) -> Result<bool> {
            self.inner.contact_exists(first_name, last_name)
        }

        fn group_by_name(&self, name: &str) -> Result<Option<Group>> {
            self.inner.group_by_name(name)
        }

        fn default_groups(&self) -> Result<Vec<Group>> {
            self.inner.default_groups()
        }

        fn create_contact(&mut self, contact: Contact, groups: &[Group]) -> Result<Contact> {
            if self.remaining_writes == 0 {
                return Err(Error::Store("disk full".to_string()));
            }
            self.remaining_writes -= 1;
            self.inner.create_contact(contact, groups)
        }
    }

    #[test]
    fn test_import_creates_contacts() {
        let mut store = MemoryStore::new();
        let input = "Vorname,Name,Email\nPeter,Neumeyer,pm@test.de\n";
        let outcome = import(&mut store, input, &mut ()).unwrap();
        assert_eq!(outcome.created.len(), 1);
        assert_eq!(store.contacts().len(), 1);
        assert_eq!(store.contacts()[0].email, "pm@test.de");
        assert!(store.contacts()[0].id.is_some());
    }

    #[test]
    fn test_duplicates_are_skipped() {
        let mut store = MemoryStore::new();
        let input = "Vorname,Name,Email\nPeter,Neumeyer,pm@test.de\n";
        import(&mut store, input, &mut ()).unwrap();

        let outcome = import(&mut store, input, &mut ()).unwrap();
        assert!(outcome.created.is_empty());
        assert_eq!(outcome.skipped_duplicates, 1);
        assert_eq!(store.contacts().len(), 1);
    }

    #[test]
    fn test_bad_lines_are_skipped_not_fatal() {
        let mut store = MemoryStore::new();
        let input = "Vorname,Name,Email\na,b,c\nno separator here\nd,e,f\n";
        let outcome = import(&mut store, input, &mut ()).unwrap();
        assert_eq!(outcome.created.len(), 2);
        assert_eq!(outcome.skipped_invalid, 1);
        assert_eq!(store.contacts().len(), 2);
    }

    #[test]
    fn test_sniffing_failure_aborts_before_any_record() {
        let mut store = MemoryStore::new();
        let error = import(&mut store, "", &mut ()).unwrap_err();
        assert!(matches!(
            error,
            Error::Csv(verteiler_csv::Error::NoContent)
        ));
        assert!(store.contacts().is_empty());
    }

    #[test]
    fn test_group_columns_resolve_through_the_store() {
        let mut store = MemoryStore::new();
        store.add_group("InfoMail");
        let input = "Vorname,Name,Email,InfoMail,Unbekannt\na,b,c,1,1\n";
        let outcome = import(&mut store, input, &mut ()).unwrap();
        // "Unbekannt" is not in the store, so only InfoMail sticks.
        let groups: Vec<&String> = outcome.created[0].groups.iter().collect();
        assert_eq!(groups, vec!["InfoMail"]);
    }

    #[test]
    fn test_default_groups_apply_without_group_columns() {
        let mut store = MemoryStore::new();
        store.add_default_group("Alle");
        store.add_group("InfoMail");
        let outcome = import(&mut store, "Vorname,Name,Email\na,b,c\n", &mut ()).unwrap();
        assert!(outcome.created[0].groups.contains("Alle"));
        assert!(!outcome.created[0].groups.contains("InfoMail"));
    }

    #[test]
    fn test_default_groups_do_not_apply_when_group_columns_exist() {
        let mut store = MemoryStore::new();
        store.add_default_group("Alle");
        store.add_group("InfoMail");
        let input = "Vorname,Name,Email,InfoMail\na,b,c,0\n";
        let outcome = import(&mut store, input, &mut ()).unwrap();
        assert!(outcome.created[0].groups.is_empty());
    }

    #[test]
    fn test_observer_event_order() {
        let mut store = MemoryStore::new();
        let mut observer = RecordingObserver::default();
        let input = "Vorname,Name,Email\na,b,c\nd,e,f\n";
        import(&mut store, input, &mut observer).unwrap();
        assert_eq!(
            observer.events,
            vec!["started 3", "line 1", "line 2", "line 3", "finished 2"]
        );
    }

    #[test]
    fn test_store_failure_propagates_and_keeps_earlier_contacts() {
        let mut store = FlakyStore {
            inner: MemoryStore::new(),
            remaining_writes: 1,
        };
        let input = "Vorname,Name,Email\na,b,c\nd,e,f\n";
        let error = import(&mut store, input, &mut ()).unwrap_err();
        assert!(matches!(error, Error::Store(_)));
        assert_eq!(store.inner.contacts().len(), 1);
    }

    #[test]
    fn test_preview_is_strict() {
        let input = "Vorname,Name,Email\na,b,c\nno separator here\n";
        let error = preview(input, None).unwrap_err();
        assert!(matches!(
            error,
            Error::Csv(verteiler_csv::Error::InvalidRecord { line: 2, .. })
        ));
    }

    #[test]
    fn test_preview_respects_the_limit() {
        let input = "Vorname,Name,Email\na,b,c\nd,e,f\ng,h,i\n";
        assert_eq!(preview(input, Some(2)).unwrap().len(), 2);
        assert_eq!(preview(input, Some(0)).unwrap().len(), 0);
        assert_eq!(preview(input, None).unwrap().len(), 3);
    }
}
