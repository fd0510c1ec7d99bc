//! Rule tables: field name -> ordered list of rules.

use crate::error::{RuleError, ValidationResult};
use crate::traits::{SerializableRule, ValidationRule};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered rules for one field.
///
/// Rules run in insertion order and the first failure is the field's error.
/// Put [`RequiredRule`](crate::rules::RequiredRule) first so an empty value
/// never also reports a shape error.
pub struct FieldRules<T: ?Sized> {
    rules: Vec<Box<dyn ValidationRule<T>>>,
}

impl<T: ?Sized> Default for FieldRules<T> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<T: ?Sized> FieldRules<T> {
    /// Create an empty rule list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule.
    pub fn rule<V>(mut self, rule: V) -> Self
    where
        V: ValidationRule<T> + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Run the rules, returning the first failure.
    pub fn check(&self, value: &T) -> Option<RuleError> {
        self.rules.iter().find_map(|rule| rule.validate(value).err())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn specs(&self) -> Vec<SerializableRule> {
        self.rules.iter().map(|rule| rule.spec()).collect()
    }
}

impl<T: ?Sized> fmt::Debug for FieldRules<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rules.iter()).finish()
    }
}

/// Type-erased field of a table.
trait FieldCheck<R>: Send + Sync {
    fn name(&self) -> &'static str;
    fn check(&self, record: &R) -> Option<RuleError>;
    fn schema(&self) -> FieldSchema;
}

struct Field<T: ?Sized, F> {
    name: &'static str,
    accessor: F,
    rules: FieldRules<T>,
}

impl<R, T, F> FieldCheck<R> for Field<T, F>
where
    T: ?Sized,
    F: Fn(&R) -> &T + Send + Sync,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn check(&self, record: &R) -> Option<RuleError> {
        self.rules.check((self.accessor)(record))
    }

    fn schema(&self) -> FieldSchema {
        FieldSchema {
            field: self.name.to_string(),
            rules: self.rules.specs(),
        }
    }
}

/// A field of an exported rule table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldSchema {
    pub field: String,
    pub rules: Vec<SerializableRule>,
}

/// Rule table for a record type.
///
/// Every field is evaluated on each call, so the result always covers the
/// whole table. Fields without rules are still listed and always pass.
///
/// ## Example
///
/// ```rust
/// use siteforms_validate::prelude::*;
///
/// struct Signup {
///     handle: String,
/// }
///
/// let table = RuleTable::<Signup>::new().field(
///     "handle",
///     |s| s.handle.as_str(),
///     FieldRules::new()
///         .rule(RequiredRule::with_message("Handle is required"))
///         .rule(LengthRule::min(3).with_message("Handle is too short")),
/// );
///
/// let result = table.evaluate(&Signup { handle: "ab".to_string() });
/// assert_eq!(result.message("handle").as_deref(), Some("Handle is too short"));
/// ```
pub struct RuleTable<R> {
    fields: Vec<Box<dyn FieldCheck<R>>>,
}

impl<R> Default for RuleTable<R> {
    fn default() -> Self {
        Self { fields: Vec::new() }
    }
}

impl<R: 'static> RuleTable<R> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field. A later field with the same name replaces the earlier one
    /// in the result, keeping the earlier position.
    pub fn field<T, F>(mut self, name: &'static str, accessor: F, rules: FieldRules<T>) -> Self
    where
        T: ?Sized + 'static,
        F: Fn(&R) -> &T + Send + Sync + 'static,
    {
        self.fields.push(Box::new(Field {
            name,
            accessor,
            rules,
        }));
        self
    }

    /// Validate a record against every field.
    pub fn evaluate(&self, record: &R) -> ValidationResult {
        let mut result = ValidationResult::new();
        for field in &self.fields {
            result.set(field.name(), field.check(record));
        }
        result
    }

    /// Field names in evaluation order.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|field| field.name()).collect()
    }

    /// Describe the table as data.
    pub fn schema(&self) -> Vec<FieldSchema> {
        self.fields.iter().map(|field| field.schema()).collect()
    }
}

impl<R> fmt::Debug for RuleTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleTable")
            .field(
                "fields",
                &self.fields.iter().map(|field| field.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{AcceptedRule, LengthRule, RequiredRule};

    struct Profile {
        name: String,
        bio: String,
        terms: bool,
    }

    fn table() -> RuleTable<Profile> {
        RuleTable::new()
            .field(
                "name",
                |p: &Profile| p.name.as_str(),
                FieldRules::new()
                    .rule(RequiredRule::with_message("Name is required"))
                    .rule(LengthRule::min(3).with_message("Name is too short")),
            )
            .field("bio", |p: &Profile| p.bio.as_str(), FieldRules::new())
            .field(
                "terms",
                |p: &Profile| &p.terms,
                FieldRules::new().rule(AcceptedRule::with_message("Accept the terms")),
            )
    }

    #[test]
    fn evaluates_every_field() {
        let profile = Profile {
            name: String::new(),
            bio: String::new(),
            terms: false,
        };

        let result = table().evaluate(&profile);
        assert_eq!(result.field_names(), vec!["name", "bio", "terms"]);
        assert_eq!(result.error_count(), 2);
        assert!(result.error("bio").is_none());
    }

    #[test]
    fn first_failing_rule_wins() {
        let profile = Profile {
            name: String::new(),
            bio: String::new(),
            terms: true,
        };

        let result = table().evaluate(&profile);
        assert_eq!(result.message("name").as_deref(), Some("Name is required"));

        let profile = Profile {
            name: "Al".to_string(),
            ..profile
        };
        let result = table().evaluate(&profile);
        assert_eq!(result.message("name").as_deref(), Some("Name is too short"));
    }

    #[test]
    fn schema_lists_rules_in_order() {
        let schema = table().schema();
        assert_eq!(schema.len(), 3);
        assert_eq!(schema[0].field, "name");
        assert_eq!(
            schema[0].rules,
            vec![
                SerializableRule::Required {
                    message: Some("Name is required".to_string())
                },
                SerializableRule::Length {
                    min: Some(3),
                    max: None,
                    message: Some("Name is too short".to_string())
                },
            ]
        );
        assert!(schema[1].rules.is_empty());
    }
}
