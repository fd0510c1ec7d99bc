//! Rule errors and per-record validation results.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Error from a single validation rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleError {
    /// The validation rule code (e.g., "required", "length", "email")
    pub code: String,
    /// Human-readable error message, may contain `{param}` placeholders
    pub message: String,
    /// Optional parameters for message interpolation
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub params: HashMap<String, serde_json::Value>,
}

impl RuleError {
    /// Create a new rule error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: HashMap::new(),
        }
    }

    /// Add a parameter to the error.
    pub fn param(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.params.insert(key.into(), v);
        }
        self
    }

    /// Interpolate parameters into the message.
    ///
    /// Replaces `{param_name}` placeholders with actual values.
    pub fn interpolate_message(&self) -> String {
        let mut result = self.message.clone();
        for (key, value) in &self.params {
            let placeholder = format!("{{{}}}", key);
            let replacement = match value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                _ => value.to_string(),
            };
            result = result.replace(&placeholder, &replacement);
        }
        result
    }
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.interpolate_message())
    }
}

impl std::error::Error for RuleError {}

/// Outcome of validating one record.
///
/// Holds one entry per field of the rule table, in table order. A field with
/// no error is valid. The record is valid when no entry carries an error.
///
/// Serializes as a map of field name to message (or `null`):
///
/// ```json
/// { "companyName": "Company name must be at least 2 characters", "address": null }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    entries: Vec<(String, Option<RuleError>)>,
}

impl ValidationResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for a field, replacing any earlier outcome.
    pub fn set(&mut self, field: impl Into<String>, error: Option<RuleError>) {
        let field = field.into();
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = error,
            None => self.entries.push((field, error)),
        }
    }

    /// True iff no field carries an error.
    pub fn is_valid(&self) -> bool {
        self.entries.iter().all(|(_, error)| error.is_none())
    }

    /// Number of fields carrying an error.
    pub fn error_count(&self) -> usize {
        self.entries.iter().filter(|(_, e)| e.is_some()).count()
    }

    /// Get the error for a field, if any.
    pub fn error(&self, field: &str) -> Option<&RuleError> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .and_then(|(_, error)| error.as_ref())
    }

    /// Get the rendered error message for a field, if any.
    pub fn message(&self, field: &str) -> Option<String> {
        self.error(field).map(RuleError::interpolate_message)
    }

    /// All field names in evaluation order.
    pub fn field_names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Iterate over failing fields and their errors.
    pub fn errors(&self) -> impl Iterator<Item = (&str, &RuleError)> {
        self.entries
            .iter()
            .filter_map(|(name, error)| error.as_ref().map(|e| (name.as_str(), e)))
    }

    /// Convert to Result - Ok if valid, Err otherwise.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "Validation passed")
        } else {
            write!(f, "Validation failed: {} error(s)", self.error_count())
        }
    }
}

impl std::error::Error for ValidationResult {}

impl Serialize for ValidationResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, error) in &self.entries {
            map.serialize_entry(field, &error.as_ref().map(RuleError::interpolate_message))?;
        }
        map.end()
    }
}
