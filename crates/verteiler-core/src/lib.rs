//! # verteiler-core
//!
//! Core business logic for the Verteiler mailing-list manager.
//!
//! This crate provides:
//! - Contact and group domain models
//! - Store interfaces consumed by the services (the persistence engine
//!   itself lives elsewhere)
//! - **Import** - commit a parsed contact list into a store, skipping
//!   duplicates, with synchronous progress reporting
//! - **Export** - serialize a store's contacts back into delimited text

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod contacts;
mod error;
pub mod service;

pub use contacts::{Contact, ContactId, ContactSource, ContactStore, Group, GroupId, MemoryStore};
pub use error::{Error, Result};
pub use service::{ImportObserver, ImportOutcome, export, import, preview};
