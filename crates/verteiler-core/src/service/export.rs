//! Contact list export.

use verteiler_csv::{ContactRecord, Writer};

use crate::contacts::ContactSource;
use crate::error::Result;

/// Serializes every stored contact, with one trailing column per group
/// known to the store.
///
/// Runs independently of any import and shares no state with it; the
/// layout comes from [`Writer::default`].
///
/// # Errors
///
/// Propagates store failures; serialization itself cannot fail.
pub fn export<S: ContactSource>(source: &S) -> Result<String> {
    let group_names: Vec<String> = source
        .all_groups()?
        .into_iter()
        .map(|group| group.name)
        .collect();
    let records: Vec<ContactRecord> = source
        .all_contacts()?
        .iter()
        .map(ContactRecord::from)
        .collect();
    Ok(Writer::default().write(&group_names, &records))
}
