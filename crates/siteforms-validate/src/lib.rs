//! # siteforms validation
//!
//! Rule tables and validators for the site's contact and newsletter forms.
//! Validation is a pure function of the record: every field is evaluated,
//! each field reports at most one message, and nothing is remembered between
//! calls.
//!
//! ## Example
//!
//! ```rust
//! use siteforms_validate::prelude::*;
//!
//! let record = ContactRecord {
//!     company_name: "A".to_string(),
//!     ..ContactRecord::default()
//! };
//!
//! let result = validate_contact(&record);
//! assert!(!result.is_valid());
//! assert_eq!(
//!     result.message("companyName").as_deref(),
//!     Some("Company name must be at least 2 characters")
//! );
//! ```
//!
//! ## Rules
//!
//! - `required` - non-empty
//! - `length(min, max)` - character length bounds
//! - `regex` - pattern match
//! - `email` - email syntax
//! - `word_count(min)` - whitespace-separated words
//! - `file_size(max)` / `file_type(allowed)` - attachment gating
//! - `accepted` - checkbox must be ticked
//!
//! ## Error Format
//!
//! A [`ValidationResult`] serializes as a map of field name to message, with
//! `null` for valid fields:
//!
//! ```json
//! {"companyName": null, "email": "Invalid email address"}
//! ```

mod error;
mod file;
pub mod forms;
mod limits;
pub mod rules;
mod table;
mod traits;

#[cfg(test)]
mod tests;

pub use error::{RuleError, ValidationResult};
pub use file::{FileUpload, MIB};
pub use forms::{
    contact_rules, newsletter_rules, validate_contact, validate_newsletter, ContactRecord,
    ContactValidator, NewsletterRecord,
};
pub use limits::FormLimits;
pub use table::{FieldRules, FieldSchema, RuleTable};
pub use traits::{SerializableRule, Validate, ValidationRule};

/// Prelude module for validation
pub mod prelude {
    pub use crate::error::{RuleError, ValidationResult};
    pub use crate::file::{FileUpload, MIB};
    pub use crate::forms::{
        validate_contact, validate_newsletter, ContactRecord, ContactValidator, NewsletterRecord,
    };
    pub use crate::limits::FormLimits;
    pub use crate::rules::*;
    pub use crate::table::{FieldRules, RuleTable};
    pub use crate::traits::{SerializableRule, Validate, ValidationRule};
}
