//! Submission boundary.
//!
//! A [`Submitter`] receives a record that already passed validation. The
//! stock [`AlertSubmitter`] only renders the record back to the user; a real
//! deployment swaps in a submitter that sends it somewhere.

use serde::Serialize;
use thiserror::Error;

/// Errors a submitter can report.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The receiving side refused the record.
    #[error("Submission rejected: {0}")]
    Rejected(String),
    /// The record could not be rendered.
    #[error("Failed to render submission: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Acknowledgement for an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Text shown to the user
    pub message: String,
}

/// Receives fully validated records.
pub trait Submitter<R> {
    /// Submit a record. Callers guarantee the record is valid.
    fn submit(&self, record: &R) -> Result<Receipt, SubmitError>;
}

/// Placeholder submitter that shows the record back as pretty JSON.
#[derive(Debug, Clone, Default)]
pub struct AlertSubmitter;

impl AlertSubmitter {
    pub fn new() -> Self {
        Self
    }
}

impl<R: Serialize> Submitter<R> for AlertSubmitter {
    fn submit(&self, record: &R) -> Result<Receipt, SubmitError> {
        let message = serde_json::to_string_pretty(record)?;
        tracing::info!(bytes = message.len(), "submission accepted");
        Ok(Receipt { message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use siteforms_validate::{ContactRecord, FileUpload, NewsletterRecord};

    #[test]
    fn alert_renders_record() {
        let receipt = AlertSubmitter::new()
            .submit(&NewsletterRecord::new("reader@example.com"))
            .unwrap();
        assert_eq!(receipt.message, "{\n  \"email\": \"reader@example.com\"\n}");
    }

    #[test]
    fn alert_renders_file_metadata_only() {
        let record = ContactRecord {
            file: Some(FileUpload::new("deck.pdf", "application/pdf", 2048)),
            ..ContactRecord::default()
        };

        let receipt = AlertSubmitter::new().submit(&record).unwrap();
        let json: serde_json::Value = serde_json::from_str(&receipt.message).unwrap();
        assert_eq!(json["file"]["name"], "deck.pdf");
        assert_eq!(json["file"]["size"], 2048);
        assert_eq!(json["agreedToNda"], false);
    }

    struct ClosedList;

    impl Submitter<NewsletterRecord> for ClosedList {
        fn submit(&self, _: &NewsletterRecord) -> Result<Receipt, SubmitError> {
            Err(SubmitError::Rejected("list is closed".to_string()))
        }
    }

    #[test]
    fn rejection_message() {
        let err = ClosedList
            .submit(&NewsletterRecord::new("reader@example.com"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Submission rejected: list is closed");
    }
}
