//! Import and export services.
//!
//! This module provides the service layer that drives the exchange
//! engine against a contact store: the best-effort commit path for
//! imports and the read-only export path.

pub mod export;
pub mod import;

pub use export::export;
pub use import::{ImportObserver, ImportOutcome, import, preview};
