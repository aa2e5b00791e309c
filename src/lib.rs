// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Signature Contact Harvester
//!
//! Builds address-book entries from an archive of email bodies by finding
//! the signature blocks at the end of each message.
//!
//! # Pipeline
//!
//! - Quoted `>` lines and, optionally, corpus-wide boilerplate are removed
//! - `Name <address> wrote:` headers seed the contact list with known people
//! - A line naming a known person opens a signature; the lines after it are
//!   searched for skype and twitter handles, phone numbers, email addresses
//!   and web addresses
//! - Contacts are rendered as vCards or JSON records
//!
//! # Example
//!
//! ```rust
//! use email_contacts::{ContactQuery, Extractor, ParseOptions};
//!
//! let corpus = "On Jun 15, Rob James <james@gmail.com> wrote:\n\
//!               \n\
//!               Cheers\n\
//!               Rob\n\
//!               Mobile: 0791 234 567\n";
//!
//! let mut extractor = Extractor::new();
//! extractor.load_str(corpus);
//! extractor.parse(&ParseOptions::default()).unwrap();
//!
//! let found = extractor.contacts().search(&ContactQuery::new().firstname("Rob"));
//! assert_eq!(found.len(), 1);
//! println!("{:?}", found[0].phone);
//! ```

mod config;
mod error;
mod export;
mod extractor;
pub mod matchers;
mod names;
pub mod preprocess;
mod signature;
mod types;

pub use config::ParseOptions;
pub use error::{ExtractError, Result};
pub use export::{ExportFormat, to_vcard};
pub use extractor::Extractor;
pub use names::find_names;
pub use signature::{SignatureEnd, SignaturePolicy, extract_fields, find_signatures};
pub use types::*;
