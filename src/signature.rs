//! Signature detection state machine
//!
//! Walks the cleaned lines once. Outside a signature it looks for a short
//! line naming a known contact; inside one it attaches whatever skype,
//! twitter, phone, email and url values it finds to that contact until a
//! line suggests the signature is over.

use crate::matchers::{
    looks_like_reply_header, match_email, match_phones, match_skype, match_twitter, match_url,
};
use crate::types::{Contact, ContactList, ContactQuery};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Limits that decide where a signature starts and stops
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignaturePolicy {
    /// Longest line (in tokens) that may open a signature
    pub signoff_token_limit: usize,

    /// Longest line (in tokens) allowed inside a signature
    pub line_token_limit: usize,

    /// Most non-blank lines a signature may span
    pub line_count_limit: usize,

    /// Valedictions that usually come right before a signature
    pub signoffs: Vec<String>,
}

impl Default for SignaturePolicy {
    fn default() -> Self {
        Self {
            signoff_token_limit: 3,
            line_token_limit: 10,
            line_count_limit: 15,
            signoffs: [
                "regards",
                "cheers",
                "thanks",
                "kind regards",
                "rgds",
                "best regards",
                "many thanks",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl SignaturePolicy {
    /// Short enough to be a name or a signoff
    #[must_use]
    pub const fn may_open_signature(&self, token_count: usize) -> bool {
        token_count <= self.signoff_token_limit
    }

    #[must_use]
    pub fn is_signoff(&self, line: &str) -> bool {
        let line = line.trim().to_lowercase();
        self.signoffs.iter().any(|signoff| *signoff == line)
    }

    #[must_use]
    pub const fn line_too_long(&self, token_count: usize) -> bool {
        token_count > self.line_token_limit
    }

    #[must_use]
    pub const fn block_too_long(&self, line_count: usize) -> bool {
        line_count > self.line_count_limit
    }

    /// Header-like text or a truncated address means a quoted message has begun
    #[must_use]
    pub fn starts_quoted_block(line: &str) -> bool {
        looks_like_reply_header(line) || line.contains("...")
    }

    /// Why the current signature should be abandoned at this line, if at all
    #[must_use]
    pub fn end_of_signature(
        &self,
        line: &str,
        token_count: usize,
        line_count: usize,
    ) -> Option<SignatureEnd> {
        if self.line_too_long(token_count) {
            Some(SignatureEnd::LineTooLong)
        } else if self.block_too_long(line_count) {
            Some(SignatureEnd::TooManyLines)
        } else if Self::starts_quoted_block(line) {
            Some(SignatureEnd::QuotedBlock)
        } else {
            None
        }
    }
}

/// Reason a signature scan stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureEnd {
    LineTooLong,
    TooManyLines,
    QuotedBlock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    OutsideSignature,
    InsideSignature { contact: usize, line_count: usize },
}

/// Scan `lines` for signatures of known contacts and enrich them in place.
///
/// Returns the number of signatures entered.
pub fn find_signatures<S: AsRef<str>>(
    lines: &[S],
    contacts: &mut ContactList,
    policy: &SignaturePolicy,
) -> usize {
    let mut state = ScanState::OutsideSignature;
    let mut entered = 0;

    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();

        state = match state {
            ScanState::OutsideSignature => {
                if !policy.may_open_signature(tokens.len()) {
                    continue;
                }

                match resolve_contact(contacts, &tokens) {
                    Some(contact) => {
                        trace!("Signature start for contact #{contact}: {line}");
                        entered += 1;
                        ScanState::InsideSignature {
                            contact,
                            line_count: 0,
                        }
                    }
                    None => {
                        if policy.is_signoff(line) {
                            trace!("Signoff seen: {line}");
                        }
                        ScanState::OutsideSignature
                    }
                }
            }
            ScanState::InsideSignature {
                contact,
                line_count,
            } => {
                let line_count = line_count + 1;

                if let Some(reason) = policy.end_of_signature(line, tokens.len(), line_count) {
                    trace!("Signature end ({reason:?}) at line {line_count}");
                    ScanState::OutsideSignature
                } else {
                    if let Some(found) = contacts.get_mut(contact) {
                        extract_fields(line, found);
                    }
                    ScanState::InsideSignature {
                        contact,
                        line_count,
                    }
                }
            }
        };
    }

    debug!("Entered {entered} signatures");
    entered
}

/// Position of the single contact the line names, if it is unambiguous
fn resolve_contact(contacts: &ContactList, tokens: &[&str]) -> Option<usize> {
    let first = *tokens.first()?;
    let last = if tokens.len() >= 2 {
        tokens[tokens.len() - 1]
    } else {
        ""
    };

    let mut matches = contacts.search_positions(&ContactQuery::new().firstname(first));
    if matches.len() > 1 {
        matches = contacts.search_positions(&ContactQuery::new().firstname(first).lastname(last));
        if matches.len() != 1 {
            trace!("Ambiguous name {first} {last}, skipping");
            return None;
        }
    }

    matches.first().copied()
}

/// Attach the fields found on one signature line.
///
/// Skype and twitter handles claim the whole line. Phone numbers do not, so
/// an email address or url on the same line is still picked up.
pub fn extract_fields(line: &str, contact: &mut Contact) {
    if let Some(skype) = match_skype(line) {
        trace!("skype {skype} -> {contact}");
        contact.set_skype(skype);
        return;
    }

    if let Some(twitter) = match_twitter(line) {
        trace!("twitter {twitter} -> {contact}");
        contact.set_twitter(twitter);
        return;
    }

    for phone in match_phones(line) {
        if contact.add_phone(phone) {
            trace!("phone added to {contact}");
        }
    }

    if let Some(email) = match_email(line)
        && contact.add_email(email)
    {
        trace!("email added to {contact}");
    }

    if let Some(url) = match_url(line)
        && !url.contains('@')
        && contact.add_url(url)
    {
        trace!("url added to {contact}");
    }
}
