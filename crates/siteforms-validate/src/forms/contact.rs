//! Contact form record and rule table.

use crate::error::ValidationResult;
use crate::file::FileUpload;
use crate::limits::FormLimits;
use crate::rules::{
    AcceptedRule, EmailRule, FileSizeRule, FileTypeRule, LengthRule, RegexRule, RequiredRule,
    WordCountRule,
};
use crate::table::{FieldRules, RuleTable};
use crate::traits::Validate;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Contact form field names, as used in results.
pub mod fields {
    pub const COMPANY_NAME: &str = "companyName";
    pub const NATURE_OF_BUSINESS: &str = "natureOfBusiness";
    pub const ADDRESS: &str = "address";
    pub const POSTCODE: &str = "postcode";
    pub const CONTACT_NAME: &str = "contactName";
    pub const CONTACT_PHONE: &str = "contactPhone";
    pub const EMAIL: &str = "email";
    pub const LINKEDIN: &str = "linkedin";
    pub const IDEA: &str = "idea";
    pub const FILE: &str = "file";
    pub const AGREED_TO_NDA: &str = "agreedToNda";

    /// All fields in form order.
    pub const ALL: [&str; 11] = [
        COMPANY_NAME,
        NATURE_OF_BUSINESS,
        ADDRESS,
        POSTCODE,
        CONTACT_NAME,
        CONTACT_PHONE,
        EMAIL,
        LINKEDIN,
        IDEA,
        FILE,
        AGREED_TO_NDA,
    ];
}

/// A contact form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactRecord {
    pub company_name: String,
    pub nature_of_business: Option<String>,
    pub address: String,
    pub postcode: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub email: String,
    pub linkedin: Option<String>,
    pub idea: String,
    pub file: Option<FileUpload>,
    pub agreed_to_nda: bool,
}

/// Build the contact rule table for the given limits.
pub fn contact_rules(limits: &FormLimits) -> RuleTable<ContactRecord> {
    RuleTable::new()
        .field(
            fields::COMPANY_NAME,
            |r: &ContactRecord| r.company_name.as_str(),
            FieldRules::new()
                .rule(RequiredRule::with_message("Company name is required"))
                .rule(LengthRule::min(limits.company_name_min_length).with_message(format!(
                    "Company name must be at least {} characters",
                    limits.company_name_min_length
                ))),
        )
        .field(
            fields::NATURE_OF_BUSINESS,
            |r: &ContactRecord| &r.nature_of_business,
            FieldRules::new(),
        )
        .field(
            fields::ADDRESS,
            |r: &ContactRecord| r.address.as_str(),
            FieldRules::new()
                .rule(RequiredRule::with_message("Address is required"))
                .rule(LengthRule::min(limits.address_min_length).with_message(format!(
                    "Address must be at least {} characters",
                    limits.address_min_length
                ))),
        )
        .field(
            fields::POSTCODE,
            |r: &ContactRecord| r.postcode.as_str(),
            FieldRules::new()
                .rule(RequiredRule::with_message("Postcode is required"))
                .rule(
                    RegexRule::new(format!(
                        "^[0-9]{{{},{}}}$",
                        limits.postcode_min_digits, limits.postcode_max_digits
                    ))
                    .with_message(format!(
                        "Postcode must be {}–{} digits",
                        limits.postcode_min_digits, limits.postcode_max_digits
                    )),
                ),
        )
        .field(
            fields::CONTACT_NAME,
            |r: &ContactRecord| r.contact_name.as_str(),
            FieldRules::new()
                .rule(RequiredRule::with_message("Contact name is required"))
                .rule(
                    WordCountRule::min(2)
                        .with_message("Please enter at least first and last name"),
                ),
        )
        .field(
            fields::CONTACT_PHONE,
            |r: &ContactRecord| r.contact_phone.as_str(),
            FieldRules::new()
                .rule(RequiredRule::with_message("Contact phone is required"))
                .rule(
                    RegexRule::new(format!("^[0-9]{{{},}}$", limits.phone_min_digits))
                        .with_message(format!(
                            "Contact phone must be at least {} digits",
                            limits.phone_min_digits
                        )),
                ),
        )
        .field(
            fields::EMAIL,
            |r: &ContactRecord| r.email.as_str(),
            FieldRules::new()
                .rule(RequiredRule::with_message("Email is required"))
                .rule(EmailRule::with_message("Invalid email address")),
        )
        .field(
            fields::LINKEDIN,
            |r: &ContactRecord| &r.linkedin,
            FieldRules::new(),
        )
        .field(
            fields::IDEA,
            |r: &ContactRecord| r.idea.as_str(),
            FieldRules::new()
                .rule(RequiredRule::with_message("Idea is required"))
                .rule(LengthRule::min(limits.idea_min_length).with_message(format!(
                    "Idea description must be at least {} characters",
                    limits.idea_min_length
                ))),
        )
        .field(
            fields::FILE,
            |r: &ContactRecord| &r.file,
            FieldRules::new()
                .rule(FileSizeRule::max(limits.max_file_size).with_message(format!(
                    "File size is too large (max {})",
                    limits.max_file_size_label()
                )))
                .rule(
                    FileTypeRule::new(limits.allowed_file_types.iter().cloned())
                        .with_message("File type is not allowed"),
                ),
        )
        .field(
            fields::AGREED_TO_NDA,
            |r: &ContactRecord| &r.agreed_to_nda,
            FieldRules::new().rule(AcceptedRule::with_message("You must agree to NDA")),
        )
}

fn default_rules() -> &'static RuleTable<ContactRecord> {
    static RULES: OnceLock<RuleTable<ContactRecord>> = OnceLock::new();
    RULES.get_or_init(|| contact_rules(&FormLimits::default()))
}

/// Validate a contact record against the default limits.
pub fn validate_contact(record: &ContactRecord) -> ValidationResult {
    default_rules().evaluate(record)
}

/// Contact validator bound to a specific set of limits.
#[derive(Debug)]
pub struct ContactValidator {
    rules: RuleTable<ContactRecord>,
}

impl ContactValidator {
    pub fn new(limits: &FormLimits) -> Self {
        Self {
            rules: contact_rules(limits),
        }
    }

    pub fn validate(&self, record: &ContactRecord) -> ValidationResult {
        self.rules.evaluate(record)
    }

    pub fn rules(&self) -> &RuleTable<ContactRecord> {
        &self.rules
    }
}

impl Default for ContactValidator {
    fn default() -> Self {
        Self::new(&FormLimits::default())
    }
}

impl Validate for ContactRecord {
    fn validate(&self) -> ValidationResult {
        validate_contact(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::MIB;

    fn valid_record() -> ContactRecord {
        ContactRecord {
            company_name: "Ac".to_string(),
            address: "123 Main St".to_string(),
            postcode: "12345".to_string(),
            contact_name: "Jo Lee".to_string(),
            contact_phone: "1234567890".to_string(),
            email: "jo@x.com".to_string(),
            idea: "x".repeat(30),
            file: None,
            agreed_to_nda: true,
            ..ContactRecord::default()
        }
    }

    #[test]
    fn valid_record_passes() {
        let result = validate_contact(&valid_record());
        assert!(result.is_valid());
        assert_eq!(result.error_count(), 0);
    }

    #[test]
    fn result_covers_all_fields() {
        let result = validate_contact(&ContactRecord::default());
        assert_eq!(result.field_names(), fields::ALL.to_vec());
    }

    #[test]
    fn empty_record_reports_required_messages() {
        let result = validate_contact(&ContactRecord::default());

        assert_eq!(
            result.message(fields::COMPANY_NAME).as_deref(),
            Some("Company name is required")
        );
        assert_eq!(result.message(fields::ADDRESS).as_deref(), Some("Address is required"));
        assert_eq!(result.message(fields::POSTCODE).as_deref(), Some("Postcode is required"));
        assert_eq!(
            result.message(fields::CONTACT_NAME).as_deref(),
            Some("Contact name is required")
        );
        assert_eq!(
            result.message(fields::CONTACT_PHONE).as_deref(),
            Some("Contact phone is required")
        );
        assert_eq!(result.message(fields::EMAIL).as_deref(), Some("Email is required"));
        assert_eq!(result.message(fields::IDEA).as_deref(), Some("Idea is required"));
        assert_eq!(
            result.message(fields::AGREED_TO_NDA).as_deref(),
            Some("You must agree to NDA")
        );
        assert!(result.error(fields::NATURE_OF_BUSINESS).is_none());
        assert!(result.error(fields::LINKEDIN).is_none());
        assert!(result.error(fields::FILE).is_none());
        assert_eq!(result.error_count(), 8);
    }

    #[test]
    fn custom_limits_change_rules_and_messages() {
        let limits = FormLimits {
            idea_min_length: 40,
            max_file_size: 2 * MIB,
            allowed_file_types: vec!["application/pdf".to_string()],
            ..FormLimits::default()
        };
        let validator = ContactValidator::new(&limits);

        let mut record = valid_record();
        record.file = Some(FileUpload::new("deck.zip", "application/zip", MIB));
        let result = validator.validate(&record);
        assert_eq!(
            result.message(fields::IDEA).as_deref(),
            Some("Idea description must be at least 40 characters")
        );
        assert_eq!(result.message(fields::FILE).as_deref(), Some("File type is not allowed"));

        record.file = Some(FileUpload::new("deck.pdf", "application/pdf", 2 * MIB + 1));
        let result = validator.validate(&record);
        assert_eq!(
            result.message(fields::FILE).as_deref(),
            Some("File size is too large (max 2MB)")
        );
    }

    #[test]
    fn default_validator_matches_free_function() {
        let record = ContactRecord {
            company_name: "A".to_string(),
            ..valid_record()
        };
        assert_eq!(ContactValidator::default().validate(&record), validate_contact(&record));
    }

    #[test]
    fn record_deserializes_from_camel_case() {
        let record: ContactRecord = serde_json::from_str(
            r#"{
                "companyName": "Acme",
                "contactName": "Jane Doe",
                "agreedToNda": true,
                "file": {"name": "deck.pdf", "contentType": "application/pdf", "size": 1024}
            }"#,
        )
        .unwrap();

        assert_eq!(record.company_name, "Acme");
        assert_eq!(record.contact_name, "Jane Doe");
        assert!(record.agreed_to_nda);
        assert_eq!(record.file.as_ref().map(|f| f.size), Some(1024));
        assert!(record.linkedin.is_none());
    }
}
