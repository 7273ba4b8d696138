// Field validators built on the format predicates

use crate::{FormatValidator, ValidationError};

/// Rejects values that are empty or whitespace only.
pub struct NotBlank;

impl NotBlank {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        if FormatValidator::is_empty(value) {
            Err(
                ValidationError::new(field, format!("{} should not be blank", field))
                    .with_constraint("notBlank"),
            )
        } else {
            Ok(())
        }
    }
}

/// Validates email format
pub struct IsEmail;

impl IsEmail {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        if FormatValidator::is_email(value) {
            Ok(())
        } else {
            Err(
                ValidationError::new(field, format!("{} must be a valid email", field))
                    .with_constraint("isEmail")
                    .with_value(value),
            )
        }
    }
}

/// Validates that a value carries at least ten digits
pub struct IsPhone;

impl IsPhone {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        if FormatValidator::is_phone(value) {
            Ok(())
        } else {
            Err(
                ValidationError::new(field, format!("{} must be a valid phone number", field))
                    .with_constraint("isPhone")
                    .with_value(value),
            )
        }
    }
}

/// Validates a five or nine digit zip code
pub struct IsZip;

impl IsZip {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        if FormatValidator::is_zip(value) {
            Ok(())
        } else {
            Err(
                ValidationError::new(field, format!("{} must be a valid zip code", field))
                    .with_constraint("isZip")
                    .with_value(value),
            )
        }
    }
}

/// Validates a card number with the Luhn checksum.
///
/// The rejected value is never attached to the error.
pub struct IsCreditCard;

impl IsCreditCard {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        if FormatValidator::is_credit_card(value) {
            Ok(())
        } else {
            Err(ValidationError::new(
                field,
                format!("{} must be a valid credit card number", field),
            )
            .with_constraint("isCreditCard"))
        }
    }
}

/// Requires a fixed substring, e.g. `Contains("@company.com")`
pub struct Contains<'a>(pub &'a str);

impl Contains<'_> {
    pub fn validate(&self, value: &str, field: &str) -> Result<(), ValidationError> {
        if FormatValidator::contains(value, self.0) {
            Ok(())
        } else {
            Err(
                ValidationError::new(field, format!("{} must contain '{}'", field, self.0))
                    .with_constraint("contains")
                    .with_value(value),
            )
        }
    }
}
