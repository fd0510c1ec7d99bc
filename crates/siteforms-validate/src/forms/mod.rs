//! The contact and newsletter forms.

pub mod contact;
pub mod newsletter;

pub use contact::{contact_rules, validate_contact, ContactRecord, ContactValidator};
pub use newsletter::{newsletter_rules, validate_newsletter, NewsletterRecord};
