//! Integration tests for formcheck-validation

use formcheck_validation::*;
use proptest::prelude::*;
use std::collections::HashMap;

#[test]
fn test_is_empty_examples() {
    assert!(FormatValidator::is_empty(""));
    assert!(FormatValidator::is_empty("   \t\n"));
    assert!(!FormatValidator::is_empty("a"));
}

#[test]
fn test_is_phone_examples() {
    assert!(FormatValidator::is_phone("123-456-7890"));
    assert!(!FormatValidator::is_phone("12345"));
}

#[test]
fn test_is_zip_examples() {
    assert!(FormatValidator::is_zip("12345"));
    assert!(FormatValidator::is_zip("123456789"));
    assert!(!FormatValidator::is_zip("1234"));
    for len in 6..=8 {
        assert!(!FormatValidator::is_zip(&"1".repeat(len)), "{} digits", len);
    }
}

#[test]
fn test_is_credit_card_examples() {
    assert!(FormatValidator::is_credit_card("4111111111111111"));
    assert!(!FormatValidator::is_credit_card("4111111111111112"));
    assert!(!FormatValidator::is_credit_card("123"));
}

#[test]
fn test_contains_examples() {
    assert!(FormatValidator::contains("hello world", "world"));
    assert!(!FormatValidator::contains("hello", "xyz"));
}

#[test]
fn test_contact_form() {
    let form = ValidationBuilder::new()
        .field(ValidationRules::for_field("name").required().add(NotBlank::validate))
        .field(ValidationRules::for_field("email").required().add(IsEmail::validate))
        .field(ValidationRules::for_field("phone").add(IsPhone::validate))
        .field(ValidationRules::for_field("zip").add(IsZip::validate))
        .field(ValidationRules::for_field("card").add(IsCreditCard::validate));

    let mut data = HashMap::new();
    data.insert("name".to_string(), "Jane Roe".to_string());
    data.insert("email".to_string(), "jane.roe@example.com".to_string());
    data.insert("phone".to_string(), "(555) 010-9999".to_string());
    data.insert("zip".to_string(), "94107".to_string());
    data.insert("card".to_string(), "4111111111111111".to_string());
    assert!(form.validate(&data).is_ok());

    data.insert("card".to_string(), "4111111111111112".to_string());
    data.remove("email");
    let errors = ValidationErrors::from(form.validate(&data).unwrap_err());
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.field_errors("email")[0].constraint, "required");
    assert_eq!(errors.field_errors("card")[0].constraint, "isCreditCard");

    let json = errors.to_json();
    assert_eq!(json["errors"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_validation_error_creation() {
    let error = ValidationError::new("email", "invalid email format");

    assert_eq!(error.field, "email");
    assert_eq!(error.message, "invalid email format");
    assert_eq!(error.constraint, "custom");
}

proptest! {
    #[test]
    fn prop_predicates_are_idempotent(s in ".{0,32}") {
        prop_assert_eq!(FormatValidator::is_email(&s), FormatValidator::is_email(&s));
        prop_assert_eq!(FormatValidator::is_empty(&s), FormatValidator::is_empty(&s));
        prop_assert_eq!(FormatValidator::is_phone(&s), FormatValidator::is_phone(&s));
        prop_assert_eq!(FormatValidator::is_zip(&s), FormatValidator::is_zip(&s));
        prop_assert_eq!(FormatValidator::is_credit_card(&s), FormatValidator::is_credit_card(&s));
        prop_assert_eq!(FormatValidator::contains(&s, "@"), FormatValidator::contains(&s, "@"));
    }

    #[test]
    fn prop_non_digit_cards_rejected(s in "[0-9]{3,10}[^0-9][0-9]{3,8}") {
        prop_assert!(!FormatValidator::is_credit_card(&s));
    }

    #[test]
    fn prop_contains_own_substring(s in ".{0,24}", start in 0usize..24, len in 0usize..8) {
        let chars: Vec<char> = s.chars().collect();
        let start = start.min(chars.len());
        let end = (start + len).min(chars.len());
        let search: String = chars[start..end].iter().collect();
        prop_assert!(FormatValidator::contains(&s, &search));
    }

    #[test]
    fn prop_whitespace_only_is_empty(s in "[ \t\r\n]{0,16}") {
        prop_assert!(FormatValidator::is_empty(&s));
        prop_assert!(NotBlank::validate(&s, "field").is_err());
    }
}
