//! Pattern recognizers for single lines of signature text
//!
//! Every matcher is a pure function over one line. A miss is `None` or an
//! empty `Vec`, never an error.

use crate::types::{PhoneNumber, PhoneType};
use regex::Regex;
use std::sync::LazyLock;

// Regex patterns
static REPLY_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<name>[a-zA-Z][a-zA-Z0-9 ]+) <(?P<email>[a-zA-Z0-9._+-]*[a-zA-Z0-9_+-]@[a-zA-Z0-9._-]+\.[a-zA-Z0-9._-]+)> wrote:",
    )
    .unwrap()
});

static RELAXED_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[a-zA-Z][a-zA-Z0-9 ]+ <?[a-zA-Z0-9._+-]+@[a-zA-Z0-9._-]+\.[a-zA-Z0-9._-]+>? (?:wrote:)?",
    )
    .unwrap()
});

static SKYPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[Ss]kype:\s*(?P<skype>[a-zA-Z][a-zA-Z0-9_,.\-]{5,32})").unwrap()
});

// A bare handle only counts when the line starts with '@'.
static TWITTER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[Tt]witter.*:\s*(?P<labelled>@?[a-zA-Z_.]{1,15})|^(?P<bare>@[a-zA-Z_.]{1,15})")
        .unwrap()
});

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9_.+\-]+@[a-zA-Z0-9_.\-]+\.[a-zA-Z]+").unwrap()
});

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?://|www\.)?[a-zA-Z]+\.[a-zA-Z./]+").unwrap()
});

/// Number layouts seen in signatures, tried in order at each position
const PHONE_SHAPES: &[&str] = &[
    r"[0-9]{4}\s[0-9]{3}\s[0-9]{3}",
    r"\+[0-9]{2}\s[0-9]\s[0-9]{4}\s[0-9]{4}",
    r"[0-9]{10}",
    r"\(\+[0-9]{2}\)\s[0-9]{4}\s[0-9]{3}\s[0-9]{3}",
    r"\+\s[0-9]{2}\s\([0-9]\)\s[0-9]{3}\s[0-9]{3}\s[0-9]{3}",
    r"[0-9]{4}\s[0-9]{6}",
    r"\+[0-9]{2}\s[0-9]{3}\s[0-9]{3}\s[0-9]{3}",
    r"\+[0-9]{11}",
    r"[0-9]\.[0-9]{3}\.[0-9]{3}\.[0-9]{4}",
    r"[0-9]{4}\s[0-9]\s[0-9]{5}",
    r"[0-9]{3}\.[0-9]{3}\.[0-9]{4}",
    r"[0-9]{4}\.[0-9]{3}\.[0-9]{3}",
    r"[0-9]{2}\s[0-9]{4}\s[0-9]{4}",
    r"[0-9]{4}\s[0-9]{4}",
    r"\([0-9]{2}\)\s[0-9]{4}\s[0-9]{4}",
];

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?P<label>[a-zA-Z:()./ *]+|^)\s*(?P<number>{})",
        PHONE_SHAPES.join("|")
    ))
    .unwrap()
});

const MOBILE_LABELS: &[&str] = &["(M)", "Cell/Mobile:", "m:", "Mobile:"];
const FAX_LABELS: &[&str] = &["(F)", "f:", "Fax:"];

// Single letters only count when they are the whole label
const MOBILE_LETTER: &str = "M";
const FAX_LETTER: &str = "F";

/// Name and address captured from a `Name <address> wrote:` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyHeader {
    pub name: String,
    pub email: String,
}

/// Match the strict reply header `Name <local@domain.tld> wrote:` anywhere in the line
#[must_use]
pub fn match_reply_header(line: &str) -> Option<ReplyHeader> {
    let caps = REPLY_HEADER_REGEX.captures(line)?;
    Some(ReplyHeader {
        name: caps["name"].to_string(),
        email: caps["email"].to_string(),
    })
}

/// Looser header shape: brackets and the trailing `wrote:` are optional
#[must_use]
pub fn looks_like_reply_header(line: &str) -> bool {
    RELAXED_HEADER_REGEX.is_match(line)
}

#[must_use]
pub fn match_skype(line: &str) -> Option<String> {
    SKYPE_REGEX
        .captures(line)
        .map(|caps| caps["skype"].to_string())
}

/// Twitter handle after a `Twitter...:` label, or a line starting with `@handle`
#[must_use]
pub fn match_twitter(line: &str) -> Option<String> {
    let caps = TWITTER_REGEX.captures(line)?;
    caps.name("labelled")
        .or_else(|| caps.name("bare"))
        .map(|m| m.as_str().to_string())
}

/// Every distinct phone number on the line, typed by the label before it
#[must_use]
pub fn match_phones(line: &str) -> Vec<PhoneNumber> {
    let mut numbers: Vec<PhoneNumber> = Vec::new();

    for caps in PHONE_REGEX.captures_iter(line) {
        let label = caps.name("label").map_or("", |m| m.as_str());
        let number = PhoneNumber::new(classify_phone(label), &caps["number"]);

        if !numbers.contains(&number) {
            numbers.push(number);
        }
    }

    numbers
}

#[must_use]
pub fn match_email(line: &str) -> Option<String> {
    EMAIL_REGEX.find(line).map(|m| m.as_str().to_string())
}

/// First web address on the line that is not the domain half of an email address
#[must_use]
pub fn match_url(line: &str) -> Option<String> {
    URL_REGEX
        .find_iter(line)
        .find(|m| !enclosing_token(line, m.start(), m.end()).contains('@'))
        .map(|m| m.as_str().to_string())
}

/// The whitespace-delimited token containing `start..end`
fn enclosing_token(line: &str, start: usize, end: usize) -> &str {
    let token_start = line[..start]
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(idx, c)| idx + c.len_utf8());
    let token_end = line[end..]
        .find(char::is_whitespace)
        .map_or(line.len(), |idx| end + idx);
    &line[token_start..token_end]
}

/// Phone type from the text captured in front of a number
#[must_use]
pub fn classify_phone(label: &str) -> PhoneType {
    let label = label.trim();

    if label == MOBILE_LETTER || MOBILE_LABELS.iter().any(|l| label_matches(label, l)) {
        PhoneType::Mobile
    } else if label == FAX_LETTER || FAX_LABELS.iter().any(|l| label_matches(label, l)) {
        PhoneType::Fax
    } else {
        PhoneType::Work
    }
}

/// `label` is exactly `known`, or ends with it as a separate word
fn label_matches(label: &str, known: &str) -> bool {
    label
        .strip_suffix(known)
        .is_some_and(|head| head.is_empty() || head.ends_with(char::is_whitespace))
}
