//! Form lifecycle: edits, touched state and gated submission.
//!
//! The controller owns one in-progress record and the result of validating
//! it. Both are replaced wholesale after every change, blur and submit
//! attempt. Touched state only decides which errors are shown; it never
//! changes what the validator returns.

use crate::submit::{Receipt, SubmitError, Submitter};
use siteforms_validate::{
    ContactRecord, ContactValidator, NewsletterRecord, RuleError, Validate, ValidationResult,
};
use std::collections::HashSet;
use std::fmt;

type ValidateFn<R> = Box<dyn Fn(&R) -> ValidationResult + Send + Sync>;

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The record was valid and the submitter accepted it.
    Submitted(Receipt),
    /// The record was invalid; the submitter was not called.
    Rejected(ValidationResult),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

/// Drives a single form.
pub struct FormController<R> {
    record: R,
    result: ValidationResult,
    touched: HashSet<String>,
    submit_attempted: bool,
    validate: ValidateFn<R>,
}

/// Controller for the contact form.
pub type ContactForm = FormController<ContactRecord>;

/// Controller for the newsletter form.
pub type NewsletterForm = FormController<NewsletterRecord>;

impl<R: Validate + 'static> FormController<R> {
    /// Create a controller that validates with the record's own rules.
    pub fn new(record: R) -> Self {
        Self::with_validator(record, |r: &R| r.validate())
    }
}

impl FormController<ContactRecord> {
    /// Create a contact form controller using a configured validator.
    pub fn contact(record: ContactRecord, validator: ContactValidator) -> Self {
        Self::with_validator(record, move |r: &ContactRecord| validator.validate(r))
    }
}

impl<R> FormController<R> {
    /// Create a controller with a custom validation function.
    pub fn with_validator<F>(record: R, validate: F) -> Self
    where
        F: Fn(&R) -> ValidationResult + Send + Sync + 'static,
    {
        let result = validate(&record);
        Self {
            record,
            result,
            touched: HashSet::new(),
            submit_attempted: false,
            validate: Box::new(validate),
        }
    }

    /// The in-progress record.
    pub fn record(&self) -> &R {
        &self.record
    }

    /// The latest validation result, including errors not yet shown.
    pub fn result(&self) -> &ValidationResult {
        &self.result
    }

    /// Apply an edit to the record and re-validate.
    pub fn change<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut R),
    {
        edit(&mut self.record);
        self.revalidate();
    }

    /// Mark a field as touched and re-validate.
    pub fn blur(&mut self, field: &str) {
        self.touched.insert(field.to_string());
        self.revalidate();
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    /// The error to display for a field: only once it was touched or a
    /// submit was attempted.
    pub fn visible_error(&self, field: &str) -> Option<&RuleError> {
        if self.submit_attempted || self.is_touched(field) {
            self.result.error(field)
        } else {
            None
        }
    }

    /// Rendered form of [`visible_error`](Self::visible_error).
    pub fn visible_message(&self, field: &str) -> Option<String> {
        self.visible_error(field).map(RuleError::interpolate_message)
    }

    /// Whether the submit button should be enabled.
    pub fn can_submit(&self) -> bool {
        self.result.is_valid()
    }

    /// Attempt a submit.
    ///
    /// Every field becomes touched. The submitter is only called when the
    /// freshly validated record is valid.
    pub fn submit<S>(&mut self, submitter: &S) -> Result<SubmitOutcome, SubmitError>
    where
        S: Submitter<R>,
    {
        self.submit_attempted = true;
        self.revalidate();
        let fields: Vec<String> = self
            .result
            .field_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        self.touched.extend(fields);

        if !self.result.is_valid() {
            tracing::warn!(
                errors = self.result.error_count(),
                "submit refused, form has errors"
            );
            return Ok(SubmitOutcome::Rejected(self.result.clone()));
        }

        submitter.submit(&self.record).map(SubmitOutcome::Submitted)
    }

    /// Replace the record with a fresh one and forget interaction state.
    pub fn reset(&mut self)
    where
        R: Default,
    {
        self.record = R::default();
        self.touched.clear();
        self.submit_attempted = false;
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.result = (self.validate)(&self.record);
        tracing::debug!(
            errors = self.result.error_count(),
            valid = self.result.is_valid(),
            "form revalidated"
        );
    }
}

impl<R: fmt::Debug> fmt::Debug for FormController<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormController")
            .field("record", &self.record)
            .field("result", &self.result)
            .field("touched", &self.touched)
            .field("submit_attempted", &self.submit_attempted)
            .finish()
    }
}
