//! Field validation rules.
//!
//! Every rule is a small serializable struct with an optional custom message.
//! Shape rules (length, pattern, email, word count) do not treat an empty
//! value specially; pair them with [`RequiredRule`] first in a field's rule
//! list so an empty value reports "required" and nothing else.

use crate::error::RuleError;
use crate::file::FileUpload;
use crate::traits::{SerializableRule, ValidationRule};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use validator::ValidateEmail;

/// Required (non-empty) validation rule.
///
/// A string is missing only when it is empty; whitespace is left to the shape
/// rules that follow. An `Option` is missing when it is `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RequiredRule {
    /// Custom error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RequiredRule {
    /// Create a new required rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a required rule with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    fn error(&self) -> RuleError {
        let message = self
            .message
            .clone()
            .unwrap_or_else(|| "This field is required".to_string());
        RuleError::new("required", message)
    }
}

impl ValidationRule<str> for RequiredRule {
    fn validate(&self, value: &str) -> Result<(), RuleError> {
        if value.is_empty() {
            Err(self.error())
        } else {
            Ok(())
        }
    }

    fn rule_name(&self) -> &'static str {
        "required"
    }

    fn spec(&self) -> SerializableRule {
        SerializableRule::Required {
            message: self.message.clone(),
        }
    }
}

impl<T> ValidationRule<Option<T>> for RequiredRule
where
    T: std::fmt::Debug + Send + Sync,
{
    fn validate(&self, value: &Option<T>) -> Result<(), RuleError> {
        match value {
            Some(_) => Ok(()),
            None => Err(self.error()),
        }
    }

    fn rule_name(&self) -> &'static str {
        "required"
    }

    fn spec(&self) -> SerializableRule {
        SerializableRule::Required {
            message: self.message.clone(),
        }
    }
}

/// String length validation rule.
///
/// Length is counted in characters, not bytes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LengthRule {
    /// Minimum length (inclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<usize>,
    /// Maximum length (inclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
    /// Custom error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LengthRule {
    /// Create a length rule with min and max bounds.
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            message: None,
        }
    }

    /// Create a length rule with only a minimum.
    pub fn min(min: usize) -> Self {
        Self {
            min: Some(min),
            max: None,
            message: None,
        }
    }

    /// Create a length rule with only a maximum.
    pub fn max(max: usize) -> Self {
        Self {
            min: None,
            max: Some(max),
            message: None,
        }
    }

    /// Set a custom error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ValidationRule<str> for LengthRule {
    fn validate(&self, value: &str) -> Result<(), RuleError> {
        let len = value.chars().count();

        if let Some(min) = self.min {
            if len < min {
                let message = self
                    .message
                    .clone()
                    .unwrap_or_else(|| format!("Length must be at least {min} characters"));
                return Err(RuleError::new("length", message)
                    .param("min", min)
                    .param("max", self.max)
                    .param("actual", len));
            }
        }

        if let Some(max) = self.max {
            if len > max {
                let message = self
                    .message
                    .clone()
                    .unwrap_or_else(|| format!("Length must be at most {max} characters"));
                return Err(RuleError::new("length", message)
                    .param("min", self.min)
                    .param("max", max)
                    .param("actual", len));
            }
        }

        Ok(())
    }

    fn rule_name(&self) -> &'static str {
        "length"
    }

    fn spec(&self) -> SerializableRule {
        SerializableRule::Length {
            min: self.min,
            max: self.max,
            message: self.message.clone(),
        }
    }
}

/// Regex pattern validation rule.
///
/// The pattern is compiled on first use. An invalid pattern fails every value
/// with a `regex` error naming the pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegexRule {
    /// The regex pattern
    pub pattern: String,
    /// Compiled regex, `None` when the pattern does not compile
    #[serde(skip)]
    compiled: OnceLock<Option<Regex>>,
    /// Custom error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PartialEq for RegexRule {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.message == other.message
    }
}

impl RegexRule {
    /// Create a new regex rule.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            compiled: OnceLock::new(),
            message: None,
        }
    }

    /// Set a custom error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn regex(&self) -> Option<&Regex> {
        self.compiled
            .get_or_init(|| Regex::new(&self.pattern).ok())
            .as_ref()
    }
}

impl ValidationRule<str> for RegexRule {
    fn validate(&self, value: &str) -> Result<(), RuleError> {
        let Some(regex) = self.regex() else {
            return Err(RuleError::new(
                "regex",
                format!("Invalid regex pattern: {}", self.pattern),
            ));
        };

        if regex.is_match(value) {
            Ok(())
        } else {
            let message = self
                .message
                .clone()
                .unwrap_or_else(|| format!("Value does not match pattern: {}", self.pattern));
            Err(RuleError::new("regex", message).param("pattern", self.pattern.clone()))
        }
    }

    fn rule_name(&self) -> &'static str {
        "regex"
    }

    fn spec(&self) -> SerializableRule {
        SerializableRule::Regex {
            pattern: self.pattern.clone(),
            message: self.message.clone(),
        }
    }
}

/// Email format validation rule.
///
/// Syntax follows the HTML5 email definition as implemented by the
/// `validator` crate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EmailRule {
    /// Custom error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl EmailRule {
    /// Create a new email rule with default message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an email rule with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

impl ValidationRule<str> for EmailRule {
    fn validate(&self, value: &str) -> Result<(), RuleError> {
        if !value.is_empty() && value.validate_email() {
            Ok(())
        } else {
            let message = self
                .message
                .clone()
                .unwrap_or_else(|| "Invalid email format".to_string());
            Err(RuleError::new("email", message))
        }
    }

    fn rule_name(&self) -> &'static str {
        "email"
    }

    fn spec(&self) -> SerializableRule {
        SerializableRule::Email {
            message: self.message.clone(),
        }
    }
}

/// Minimum word count rule.
///
/// The value is trimmed and split on runs of whitespace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordCountRule {
    /// Minimum number of words (inclusive)
    pub min: usize,
    /// Custom error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl WordCountRule {
    pub fn min(min: usize) -> Self {
        Self { min, message: None }
    }

    /// Set a custom error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ValidationRule<str> for WordCountRule {
    fn validate(&self, value: &str) -> Result<(), RuleError> {
        let words = value.split_whitespace().count();
        if words >= self.min {
            return Ok(());
        }

        let message = self
            .message
            .clone()
            .unwrap_or_else(|| format!("Must contain at least {} words", self.min));
        Err(RuleError::new("word_count", message)
            .param("min", self.min)
            .param("actual", words))
    }

    fn rule_name(&self) -> &'static str {
        "word_count"
    }

    fn spec(&self) -> SerializableRule {
        SerializableRule::WordCount {
            min: self.min,
            message: self.message.clone(),
        }
    }
}

/// Maximum file size rule. An absent file passes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileSizeRule {
    /// Maximum size in bytes (inclusive)
    pub max: u64,
    /// Custom error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FileSizeRule {
    pub fn max(max: u64) -> Self {
        Self { max, message: None }
    }

    /// Set a custom error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ValidationRule<FileUpload> for FileSizeRule {
    fn validate(&self, value: &FileUpload) -> Result<(), RuleError> {
        if value.size <= self.max {
            return Ok(());
        }

        let message = self
            .message
            .clone()
            .unwrap_or_else(|| format!("File must be at most {} bytes", self.max));
        Err(RuleError::new("file_size", message)
            .param("max", self.max)
            .param("actual", value.size))
    }

    fn rule_name(&self) -> &'static str {
        "file_size"
    }

    fn spec(&self) -> SerializableRule {
        SerializableRule::FileSize {
            max: self.max,
            message: self.message.clone(),
        }
    }
}

impl ValidationRule<Option<FileUpload>> for FileSizeRule {
    fn validate(&self, value: &Option<FileUpload>) -> Result<(), RuleError> {
        match value {
            Some(file) => <Self as ValidationRule<FileUpload>>::validate(self, file),
            None => Ok(()),
        }
    }

    fn rule_name(&self) -> &'static str {
        "file_size"
    }

    fn spec(&self) -> SerializableRule {
        <Self as ValidationRule<FileUpload>>::spec(self)
    }
}

/// Allowed content type rule. An empty allow-list accepts any type; an
/// absent file passes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FileTypeRule {
    /// Allowed MIME types, `type/*` wildcards permitted
    #[serde(default)]
    pub allowed: Vec<String>,
    /// Custom error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FileTypeRule {
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
            message: None,
        }
    }

    /// Set a custom error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ValidationRule<FileUpload> for FileTypeRule {
    fn validate(&self, value: &FileUpload) -> Result<(), RuleError> {
        if self.allowed.is_empty() || self.allowed.iter().any(|t| value.matches_type(t)) {
            return Ok(());
        }

        let message = self
            .message
            .clone()
            .unwrap_or_else(|| format!("File type must be one of: {}", self.allowed.join(", ")));
        Err(RuleError::new("file_type", message)
            .param("allowed", &self.allowed)
            .param("actual", &value.content_type))
    }

    fn rule_name(&self) -> &'static str {
        "file_type"
    }

    fn spec(&self) -> SerializableRule {
        SerializableRule::FileType {
            allowed: self.allowed.clone(),
            message: self.message.clone(),
        }
    }
}

impl ValidationRule<Option<FileUpload>> for FileTypeRule {
    fn validate(&self, value: &Option<FileUpload>) -> Result<(), RuleError> {
        match value {
            Some(file) => <Self as ValidationRule<FileUpload>>::validate(self, file),
            None => Ok(()),
        }
    }

    fn rule_name(&self) -> &'static str {
        "file_type"
    }

    fn spec(&self) -> SerializableRule {
        <Self as ValidationRule<FileUpload>>::spec(self)
    }
}

/// Checkbox rule: the value must be `true`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AcceptedRule {
    /// Custom error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AcceptedRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an accepted rule with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

impl ValidationRule<bool> for AcceptedRule {
    fn validate(&self, value: &bool) -> Result<(), RuleError> {
        if *value {
            Ok(())
        } else {
            let message = self
                .message
                .clone()
                .unwrap_or_else(|| "This field must be accepted".to_string());
            Err(RuleError::new("accepted", message))
        }
    }

    fn rule_name(&self) -> &'static str {
        "accepted"
    }

    fn spec(&self) -> SerializableRule {
        SerializableRule::Accepted {
            message: self.message.clone(),
        }
    }
}
