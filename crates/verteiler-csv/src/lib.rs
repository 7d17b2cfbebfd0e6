//! # verteiler-csv
//!
//! Delimited-text contact list parsing and generation for Verteiler.
//!
//! ## Features
//!
//! - **Dialect sniffing**: comma/semicolon detection from the header line
//! - **Reading**: quoted fields may carry embedded separators and line breaks
//! - **Schema mapping**: fixed attribute vocabulary plus dynamic group columns
//! - **Writing**: the inverse serialization with quote-when-needed escaping
//!
//! ## Quick Start
//!
//! ### Reading a contact list
//!
//! ```ignore
//! use verteiler_csv::Reader;
//!
//! let text = "Vorname,Name,Email\nPeter,Neumeyer,pm@test.de\n";
//! let records = Reader::new(text)?.read_all()?;
//! assert_eq!(records[0].email.as_deref(), Some("pm@test.de"));
//! ```
//!
//! ### Previewing the first lines only
//!
//! ```ignore
//! use verteiler_csv::Reader;
//!
//! let preview = Reader::new(text)?.with_limit(Some(20)).read_all()?;
//! ```
//!
//! ### Writing a contact list
//!
//! ```ignore
//! use verteiler_csv::{ContactRecord, Writer};
//!
//! let mut record = ContactRecord::new();
//! record.first_name = Some("Petra".to_string());
//! record.add_group("InfoMail");
//!
//! let text = Writer::default().write(&["InfoMail".to_string()], &[record]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod dialect;
mod error;
mod fields;
mod lines;
mod reader;
mod record;
mod schema;
mod writer;

pub use dialect::Dialect;
pub use error::{Error, Result};
pub use fields::split_fields;
pub use lines::LogicalLines;
pub use reader::Reader;
pub use record::ContactRecord;
pub use schema::{Attribute, Column, GROUP_MEMBER, GROUP_NON_MEMBER, HeaderSchema, TIMESTAMP_FORMAT};
pub use writer::Writer;
