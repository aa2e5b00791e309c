//! Seeding the contact list from quoted-reply headers
//!
//! Lines such as `On Jun 15, 9:06 am, Rob James <james@gmail.com> wrote:`
//! tell us who took part in a conversation. Those names are what the
//! signature scan later looks for.

use crate::matchers::match_reply_header;
use crate::types::{Contact, ContactList, ContactQuery};
use tracing::{debug, trace};

/// Quoting software shortens addresses to `james...@gmail.com`
const ELLIPSIS: &str = "...";

/// Add a contact for every distinct reply header found in `lines`.
///
/// Returns how many contacts were added.
pub fn find_names<S: AsRef<str>>(lines: &[S], contacts: &mut ContactList) -> usize {
    let mut added = 0;

    for line in lines {
        let Some(header) = match_reply_header(line.as_ref()) else {
            continue;
        };

        if header.email.contains(ELLIPSIS) {
            trace!("Skipping truncated address {}", header.email);
            continue;
        }

        let Some(contact) = Contact::from_display_name(&header.name) else {
            continue;
        };

        let email = std::slice::from_ref(&header.email);
        let query = ContactQuery::new()
            .firstname(&contact.firstname)
            .lastname(contact.lastname.as_deref().unwrap_or_default())
            .othernames(contact.othernames.as_deref().unwrap_or_default())
            .email(email);

        if contacts.search(&query).is_empty() {
            let contact = contact.with_email(header.email.clone());
            debug!("Found name {} <{}>", contact.full_name(), header.email);
            contacts.add(contact);
            added += 1;
        }
    }

    added
}
