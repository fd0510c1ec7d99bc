//! Property-based tests for the form validators.

#[cfg(test)]
mod property_tests {
    use crate::file::{FileUpload, MIB};
    use crate::forms::contact::fields;
    use crate::forms::{validate_contact, validate_newsletter, ContactRecord, NewsletterRecord};
    use proptest::prelude::*;

    fn valid_record() -> ContactRecord {
        ContactRecord {
            company_name: "Ac".to_string(),
            address: "123 Main St".to_string(),
            postcode: "12345".to_string(),
            contact_name: "Jo Lee".to_string(),
            contact_phone: "1234567890".to_string(),
            email: "jo@x.com".to_string(),
            idea: "x".repeat(30),
            agreed_to_nda: true,
            ..ContactRecord::default()
        }
    }

    fn file_strategy() -> impl Strategy<Value = Option<FileUpload>> {
        prop_oneof![
            Just(None),
            (0u64..=20 * MIB, "[a-z]{1,8}/[a-z]{1,8}")
                .prop_map(|(size, ty)| Some(FileUpload::new("upload", ty, size))),
        ]
    }

    // Arbitrary text, including empty, whitespace and non-ASCII
    fn text() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            Just("   ".to_string()),
            "\\PC{0,40}",
            "[0-9]{0,14}",
        ]
    }

    prop_compose! {
        fn arbitrary_record()(
            company_name in text(),
            nature_of_business in proptest::option::of(text()),
            address in text(),
            postcode in text(),
            contact_name in text(),
            contact_phone in text(),
            email in text(),
            linkedin in proptest::option::of(text()),
            idea in text(),
            file in file_strategy(),
            agreed_to_nda in any::<bool>(),
        ) -> ContactRecord {
            ContactRecord {
                company_name,
                nature_of_business,
                address,
                postcode,
                contact_name,
                contact_phone,
                email,
                linkedin,
                idea,
                file,
                agreed_to_nda,
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        // Total: every record yields a result covering all fields
        #[test]
        fn contact_validation_is_total(record in arbitrary_record()) {
            let result = validate_contact(&record);
            prop_assert_eq!(result.field_names(), fields::ALL.to_vec());
            prop_assert_eq!(result.is_valid(), result.error_count() == 0);
        }

        // Deterministic and idempotent
        #[test]
        fn contact_validation_is_idempotent(record in arbitrary_record()) {
            prop_assert_eq!(validate_contact(&record), validate_contact(&record));
        }

        // Unruled fields never carry errors
        #[test]
        fn optional_text_fields_never_fail(record in arbitrary_record()) {
            let result = validate_contact(&record);
            prop_assert!(result.error(fields::NATURE_OF_BUSINESS).is_none());
            prop_assert!(result.error(fields::LINKEDIN).is_none());
        }

        // Required fires only for empty values
        #[test]
        fn required_only_for_empty_values(record in arbitrary_record()) {
            let result = validate_contact(&record);
            for (field, value) in [
                (fields::COMPANY_NAME, &record.company_name),
                (fields::ADDRESS, &record.address),
                (fields::POSTCODE, &record.postcode),
                (fields::CONTACT_NAME, &record.contact_name),
                (fields::CONTACT_PHONE, &record.contact_phone),
                (fields::EMAIL, &record.email),
                (fields::IDEA, &record.idea),
            ] {
                let is_required = result.error(field).is_some_and(|e| e.code == "required");
                prop_assert_eq!(is_required, value.is_empty());
            }
        }

        #[test]
        fn postcode_digit_bounds(len in 1usize..14) {
            let record = ContactRecord {
                postcode: "7".repeat(len),
                ..valid_record()
            };
            let valid = validate_contact(&record).error(fields::POSTCODE).is_none();
            prop_assert_eq!(valid, (4..=10).contains(&len));
        }

        #[test]
        fn phone_digit_bounds(len in 1usize..20) {
            let record = ContactRecord {
                contact_phone: "5".repeat(len),
                ..valid_record()
            };
            let valid = validate_contact(&record).error(fields::CONTACT_PHONE).is_none();
            prop_assert_eq!(valid, len >= 10);
        }

        #[test]
        fn file_size_bound(size in (10 * MIB - 64)..(10 * MIB + 64)) {
            let record = ContactRecord {
                file: Some(FileUpload::new("deck.pdf", "application/pdf", size)),
                ..valid_record()
            };
            let valid = validate_contact(&record).is_valid();
            prop_assert_eq!(valid, size <= 10 * MIB);
        }

        #[test]
        fn generated_emails_are_accepted(
            user in "[a-z][a-z0-9]{0,10}",
            domain in "[a-z]{1,10}",
            tld in "[a-z]{2,4}",
        ) {
            let email = format!("{}@{}.{}", user, domain, tld);
            prop_assert!(validate_newsletter(&NewsletterRecord::new(email)).is_valid());
        }

        #[test]
        fn strings_without_at_sign_are_rejected(value in "[a-z0-9.]{1,20}") {
            let result = validate_newsletter(&NewsletterRecord::new(value));
            let message = result.message("email");
            prop_assert_eq!(message.as_deref(), Some("Invalid email"));
        }
    }
}
