//! Contact records and the registry they are collected in

use serde::{Deserialize, Serialize};
use std::fmt;

/// A person discovered in the corpus.
///
/// Every optional field distinguishes "never observed" (`None`) from an
/// observed value. List fields are created on first observation and never
/// hold duplicates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Given name, always present
    pub firstname: String,

    /// Family name (empty when the header only carried one token)
    pub lastname: Option<String>,

    /// Middle names joined by a single space
    pub othernames: Option<String>,

    /// Email addresses in discovery order
    pub email: Option<Vec<String>>,

    /// Phone numbers in discovery order
    pub phone: Option<Vec<PhoneNumber>>,

    /// Skype handle, last match wins
    pub skype: Option<String>,

    /// Twitter handle, last match wins
    pub twitter: Option<String>,

    /// Web addresses in discovery order
    pub url: Option<Vec<String>>,
}

impl Contact {
    pub fn new(firstname: impl Into<String>) -> Self {
        Self {
            firstname: firstname.into(),
            ..Self::default()
        }
    }

    /// Build a contact from a display name such as `"John Michael Doe"`.
    ///
    /// The first token is the first name, the last token the last name
    /// (when there are at least two) and anything between is `othernames`.
    /// Both `lastname` and `othernames` are always set, possibly empty.
    /// Returns `None` for a blank name.
    #[must_use]
    pub fn from_display_name(name: &str) -> Option<Self> {
        let parts: Vec<&str> = name.split_whitespace().collect();
        let (first, rest) = parts.split_first()?;

        let last = if parts.len() >= 2 {
            parts[parts.len() - 1]
        } else {
            ""
        };
        let other = if parts.len() > 2 {
            rest[..rest.len() - 1].join(" ")
        } else {
            String::new()
        };

        Some(Self {
            firstname: (*first).to_string(),
            lastname: Some(last.to_string()),
            othernames: Some(other),
            ..Self::default()
        })
    }

    #[must_use]
    pub fn with_email(mut self, address: impl Into<String>) -> Self {
        self.add_email(address);
        self
    }

    /// Append an email address unless already known. Returns true if added.
    pub fn add_email(&mut self, address: impl Into<String>) -> bool {
        push_unique(&mut self.email, address.into())
    }

    /// Append a web address unless already known. Returns true if added.
    pub fn add_url(&mut self, url: impl Into<String>) -> bool {
        push_unique(&mut self.url, url.into())
    }

    /// Append a phone number unless the same type and number is already known.
    pub fn add_phone(&mut self, phone: PhoneNumber) -> bool {
        push_unique(&mut self.phone, phone)
    }

    pub fn set_skype(&mut self, handle: impl Into<String>) {
        self.skype = Some(handle.into());
    }

    pub fn set_twitter(&mut self, handle: impl Into<String>) {
        self.twitter = Some(handle.into());
    }

    /// Name parts joined by single spaces, skipping empty parts
    #[must_use]
    pub fn full_name(&self) -> String {
        [
            Some(self.firstname.as_str()),
            self.othernames.as_deref(),
            self.lastname.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

fn push_unique<T: PartialEq>(field: &mut Option<Vec<T>>, value: T) -> bool {
    let values = field.get_or_insert_with(Vec::new);
    if values.contains(&value) {
        false
    } else {
        values.push(value);
        true
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Contact firstname -> {}", self.firstname)?;
        if let Some(lastname) = &self.lastname {
            write!(f, " lastname -> {lastname}")?;
        }
        write!(f, ">")
    }
}

/// Phone number found in a signature
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhoneNumber {
    #[serde(rename = "type")]
    pub phone_type: PhoneType,
    pub number: String,
}

impl PhoneNumber {
    pub fn new(phone_type: PhoneType, number: impl Into<String>) -> Self {
        Self {
            phone_type,
            number: number.into(),
        }
    }
}

/// Type of phone number, judged from the label in front of it
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PhoneType {
    Mobile,
    Fax,
    #[default]
    Work,
}

impl PhoneType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Fax => "fax",
            Self::Work => "work",
        }
    }
}

impl fmt::Display for PhoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact-match search criteria over a [`ContactList`].
///
/// Unset criteria are ignored; set criteria are AND-ed together and compared
/// by plain equality. A criterion on a field the contact never observed does
/// not match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactQuery<'a> {
    firstname: Option<&'a str>,
    lastname: Option<&'a str>,
    othernames: Option<&'a str>,
    email: Option<&'a [String]>,
}

impl<'a> ContactQuery<'a> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            firstname: None,
            lastname: None,
            othernames: None,
            email: None,
        }
    }

    #[must_use]
    pub const fn firstname(mut self, value: &'a str) -> Self {
        self.firstname = Some(value);
        self
    }

    #[must_use]
    pub const fn lastname(mut self, value: &'a str) -> Self {
        self.lastname = Some(value);
        self
    }

    #[must_use]
    pub const fn othernames(mut self, value: &'a str) -> Self {
        self.othernames = Some(value);
        self
    }

    /// Match the whole email list, order included
    #[must_use]
    pub const fn email(mut self, value: &'a [String]) -> Self {
        self.email = Some(value);
        self
    }

    #[must_use]
    pub fn matches(&self, contact: &Contact) -> bool {
        self.firstname
            .is_none_or(|first| contact.firstname == first)
            && self
                .lastname
                .is_none_or(|last| contact.lastname.as_deref() == Some(last))
            && self
                .othernames
                .is_none_or(|other| contact.othernames.as_deref() == Some(other))
            && self
                .email
                .is_none_or(|email| contact.email.as_deref() == Some(email))
    }
}

/// Insertion-ordered collection of contacts with linear exact-match search
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ContactList {
    contacts: Vec<Contact>,
}

impl ContactList {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            contacts: Vec::new(),
        }
    }

    pub fn add(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// All contacts matching every criterion of `query`, in insertion order
    #[must_use]
    pub fn search(&self, query: &ContactQuery<'_>) -> Vec<&Contact> {
        self.contacts.iter().filter(|c| query.matches(c)).collect()
    }

    /// Positions of the matching contacts, for callers that mutate afterwards
    #[must_use]
    pub fn search_positions(&self, query: &ContactQuery<'_>) -> Vec<usize> {
        self.contacts
            .iter()
            .enumerate()
            .filter(|(_, c)| query.matches(c))
            .map(|(idx, _)| idx)
            .collect()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Contact> {
        self.contacts.get(idx)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut Contact> {
        self.contacts.get_mut(idx)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.contacts.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }
}

impl<'a> IntoIterator for &'a ContactList {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
