//! Newsletter sign-up record and rule table.

use crate::error::ValidationResult;
use crate::rules::{EmailRule, RequiredRule};
use crate::table::{FieldRules, RuleTable};
use crate::traits::Validate;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Newsletter form field names.
pub mod fields {
    pub const EMAIL: &str = "email";
}

/// A newsletter sign-up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsletterRecord {
    pub email: String,
}

impl NewsletterRecord {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Build the newsletter rule table.
pub fn newsletter_rules() -> RuleTable<NewsletterRecord> {
    RuleTable::new().field(
        fields::EMAIL,
        |r: &NewsletterRecord| r.email.as_str(),
        FieldRules::new()
            .rule(RequiredRule::with_message("Email is required"))
            .rule(EmailRule::with_message("Invalid email")),
    )
}

/// Validate a newsletter sign-up.
pub fn validate_newsletter(record: &NewsletterRecord) -> ValidationResult {
    static RULES: OnceLock<RuleTable<NewsletterRecord>> = OnceLock::new();
    RULES.get_or_init(newsletter_rules).evaluate(record)
}

impl Validate for NewsletterRecord {
    fn validate(&self) -> ValidationResult {
        validate_newsletter(self)
    }
}
