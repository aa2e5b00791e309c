//! Rendering contacts for an address book

use crate::error::{ExtractError, Result};
use crate::types::Contact;
use std::fmt;
use std::str::FromStr;

/// vCard content lines are folded once they exceed this many octets
const MAX_LINE_OCTETS: usize = 75;

/// Output rendering for a contact
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// vCard 3.0 text
    #[default]
    VCard,
    /// Pretty-printed JSON object with every field, `null` when never observed
    Dict,
}

impl ExportFormat {
    pub fn render(self, contact: &Contact) -> Result<String> {
        match self {
            Self::VCard => Ok(to_vcard(contact)),
            Self::Dict => Ok(serde_json::to_string_pretty(contact)?),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vcard" => Ok(Self::VCard),
            "dict" => Ok(Self::Dict),
            _ => Err(ExtractError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VCard => f.write_str("vcard"),
            Self::Dict => f.write_str("dict"),
        }
    }
}

/// Serialize a contact as a vCard.
///
/// Skype and twitter handles have no vCard 3.0 property of their own and are
/// written as extra EMAIL lines. TEL lines carry no TYPE parameter.
#[must_use]
pub fn to_vcard(contact: &Contact) -> String {
    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!(
            "N:{};{};;;",
            escape(contact.lastname.as_deref().unwrap_or_default()),
            escape(&contact.firstname)
        ),
        format!("FN:{}", escape(&contact.full_name())),
    ];

    for handle in [&contact.skype, &contact.twitter].into_iter().flatten() {
        lines.push(format!("EMAIL:{}", escape(handle)));
    }
    for email in contact.email.iter().flatten() {
        lines.push(format!("EMAIL:{}", escape(email)));
    }
    for url in contact.url.iter().flatten() {
        lines.push(format!("URL:{url}"));
    }
    for phone in contact.phone.iter().flatten() {
        lines.push(format!("TEL:{}", escape(&phone.number)));
    }
    lines.push("END:VCARD".to_string());

    lines.iter().map(|line| fold(line) + "\r\n").collect()
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(ch),
        }
    }
    out
}

fn fold(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut width = 0;

    for ch in line.chars() {
        let len = ch.len_utf8();
        if width + len > MAX_LINE_OCTETS {
            out.push_str("\r\n ");
            width = 1;
        }
        out.push(ch);
        width += len;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text_values() {
        assert_eq!(escape("a,b;c\\d"), "a\\,b\\;c\\\\d");
    }

    #[test]
    fn test_fold_long_lines() {
        let line = format!("URL:{}", "x".repeat(100));
        let folded = fold(&line);
        let parts: Vec<&str> = folded.split("\r\n").collect();

        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].len(), 75);
        assert!(parts[1].starts_with(' '));
        assert_eq!(folded.replace("\r\n ", ""), line);
    }

    #[test]
    fn test_short_lines_untouched() {
        assert_eq!(fold("FN:Rob James"), "FN:Rob James");
    }
}
