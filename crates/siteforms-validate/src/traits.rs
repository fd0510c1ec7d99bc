//! Core validation traits.

use crate::error::{RuleError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for validating a whole record.
///
/// Implementations evaluate every field and never stop at the first failing
/// field, so the returned result covers the full record.
///
/// ## Example
///
/// ```rust
/// use siteforms_validate::prelude::*;
///
/// let record = NewsletterRecord::new("not-an-email");
/// let result = record.validate();
///
/// assert!(!result.is_valid());
/// assert_eq!(result.message("email").as_deref(), Some("Invalid email"));
/// ```
pub trait Validate {
    /// Validate the record.
    fn validate(&self) -> ValidationResult;

    /// Validate and return the record if valid.
    fn validated(self) -> Result<Self, ValidationResult>
    where
        Self: Sized,
    {
        self.validate().into_result()?;
        Ok(self)
    }
}

/// Trait for individual validation rules.
///
/// Each rule validates a single value and returns a `RuleError` on failure.
///
/// ## Example
///
/// ```rust
/// use siteforms_validate::prelude::*;
///
/// #[derive(Debug)]
/// struct NoDigitsRule;
///
/// impl ValidationRule<str> for NoDigitsRule {
///     fn validate(&self, value: &str) -> Result<(), RuleError> {
///         if value.chars().any(|c| c.is_ascii_digit()) {
///             Err(RuleError::new("no_digits", "Digits are not allowed"))
///         } else {
///             Ok(())
///         }
///     }
///
///     fn rule_name(&self) -> &'static str {
///         "no_digits"
///     }
/// }
///
/// assert!(NoDigitsRule.validate("Acme").is_ok());
/// assert!(NoDigitsRule.validate("Acme 2").is_err());
/// ```
pub trait ValidationRule<T: ?Sized>: Debug + Send + Sync {
    /// Validate the value against this rule.
    fn validate(&self, value: &T) -> Result<(), RuleError>;

    /// Get the rule name/code for error reporting.
    fn rule_name(&self) -> &'static str;

    /// Describe the rule as data.
    fn spec(&self) -> SerializableRule {
        SerializableRule::Custom {
            name: self.rule_name().to_string(),
        }
    }
}

/// Serializable description of a rule.
///
/// Used to export a rule table so another front end can mirror it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SerializableRule {
    /// Non-empty value
    Required {
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Character length bounds
    Length {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Regex pattern
    Regex {
        pattern: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Email syntax
    Email {
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Minimum number of whitespace-separated words
    WordCount {
        min: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Maximum attached file size in bytes
    FileSize {
        max: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Allowed attached file content types
    FileType {
        allowed: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Boolean must be true
    Accepted {
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// A rule with no data description
    Custom { name: String },
}

impl SerializableRule {
    /// Pretty print the rule definition.
    pub fn pretty_print(&self) -> String {
        fn msg(message: &Option<String>) -> String {
            message
                .as_ref()
                .map(|m| format!(", message = \"{}\"", m))
                .unwrap_or_default()
        }

        match self {
            SerializableRule::Required { message } => {
                format!("#[validate(required{})]", msg(message))
            }
            SerializableRule::Length { min, max, message } => {
                let mut parts = Vec::new();
                if let Some(min) = min {
                    parts.push(format!("min = {}", min));
                }
                if let Some(max) = max {
                    parts.push(format!("max = {}", max));
                }
                format!("#[validate(length({}){})]", parts.join(", "), msg(message))
            }
            SerializableRule::Regex { pattern, message } => {
                format!("#[validate(regex = \"{}\"{})]", pattern, msg(message))
            }
            SerializableRule::Email { message } => {
                format!("#[validate(email{})]", msg(message))
            }
            SerializableRule::WordCount { min, message } => {
                format!("#[validate(word_count(min = {}){})]", min, msg(message))
            }
            SerializableRule::FileSize { max, message } => {
                format!("#[validate(file_size(max = {}){})]", max, msg(message))
            }
            SerializableRule::FileType { allowed, message } => {
                format!(
                    "#[validate(file_type(allowed = [{}]){})]",
                    allowed
                        .iter()
                        .map(|t| format!("\"{}\"", t))
                        .collect::<Vec<_>>()
                        .join(", "),
                    msg(message)
                )
            }
            SerializableRule::Accepted { message } => {
                format!("#[validate(accepted{})]", msg(message))
            }
            SerializableRule::Custom { name } => format!("#[validate(custom = \"{}\")]", name),
        }
    }
}
