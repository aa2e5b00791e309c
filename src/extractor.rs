//! Extraction pipeline over one loaded corpus

use crate::config::ParseOptions;
use crate::error::{ExtractError, Result};
use crate::export::ExportFormat;
use crate::names::find_names;
use crate::preprocess::{load_lines, remove_high_frequency_lines, remove_thread_lines, split_lines};
use crate::signature::find_signatures;
use crate::types::ContactList;
use std::path::Path;
use tracing::{debug, info};

/// Holds the corpus lines and the contacts found in them.
///
/// ```rust
/// use email_contacts::{Extractor, ExportFormat, ParseOptions};
///
/// let mut extractor = Extractor::new();
/// extractor.load_str("Rob James <rob@example.com> wrote:\n\nRob\nSkype: rob.james123\n");
/// extractor.parse(&ParseOptions::default()).unwrap();
///
/// let contact = extractor.contacts().iter().next().unwrap();
/// assert_eq!(contact.skype.as_deref(), Some("rob.james123"));
/// let cards = extractor.dump(ExportFormat::VCard).unwrap();
/// assert!(cards[0].starts_with("BEGIN:VCARD"));
/// ```
#[derive(Debug, Default)]
pub struct Extractor {
    lines: Option<Vec<String>>,
    contacts: ContactList,
}

impl Extractor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the corpus file, replacing anything loaded before
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.lines = Some(load_lines(path)?);
        Ok(())
    }

    /// Load a corpus already held in memory
    pub fn load_str(&mut self, text: &str) {
        self.lines = Some(split_lines(text));
    }

    /// Current working lines, if a corpus is loaded
    #[must_use]
    pub fn lines(&self) -> Option<&[String]> {
        self.lines.as_deref()
    }

    /// Clean the loaded lines, harvest names, then scan for signatures
    pub fn parse(&mut self, options: &ParseOptions) -> Result<()> {
        let mut lines = self.lines.take().ok_or(ExtractError::NotLoaded)?;

        if options.ignore_threads {
            lines = remove_thread_lines(lines);
        }

        if options.remove_duplicates {
            lines = remove_high_frequency_lines(lines, options.high_frequency_threshold);
        }

        let names = find_names(&lines, &mut self.contacts);
        debug!("Harvested {names} names from {} lines", lines.len());

        let signatures = find_signatures(&lines, &mut self.contacts, &options.signature);
        info!(
            "Found {} contacts, {signatures} signatures",
            self.contacts.len()
        );

        self.lines = Some(lines);
        Ok(())
    }

    #[must_use]
    pub const fn contacts(&self) -> &ContactList {
        &self.contacts
    }

    /// Render every contact, in discovery order
    pub fn dump(&self, format: ExportFormat) -> Result<Vec<String>> {
        self.contacts
            .iter()
            .map(|contact| format.render(contact))
            .collect()
    }
}
