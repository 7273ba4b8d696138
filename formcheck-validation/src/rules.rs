// Validation rules builder

use crate::ValidationError;
use formcheck_log::debug;
use std::collections::HashMap;
use std::sync::Arc;

type ValidatorFn = Arc<dyn Fn(&str, &str) -> Result<(), ValidationError> + Send + Sync>;

/// Ordered list of checks for one form field.
///
/// Every rule runs; failures are collected rather than short-circuited so
/// the submitter sees all problems with a field at once.
#[derive(Clone)]
pub struct ValidationRules {
    field: String,
    required: bool,
    validators: Vec<ValidatorFn>,
}

impl ValidationRules {
    pub fn for_field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            required: false,
            validators: Vec::new(),
        }
    }

    /// Report a `required` error when the field is missing from the form.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Append a check. Field validators plug in directly, e.g.
    /// `.add(IsEmail::validate)`.
    #[allow(clippy::should_implement_trait)]
    pub fn add<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str, &str) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.validators.push(Arc::new(validator));
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Run every check against `value`.
    pub fn validate(&self, value: &str) -> Result<(), Vec<ValidationError>> {
        let errors: Vec<ValidationError> = self
            .validators
            .iter()
            .filter_map(|validator| validator(value, &self.field).err())
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            for error in &errors {
                debug!(
                    target: "formcheck::rules",
                    "field '{}' failed {}",
                    error.field,
                    error.constraint
                );
            }
            Err(errors)
        }
    }

    fn missing(&self) -> ValidationError {
        ValidationError::new(&self.field, format!("{} is required", self.field))
            .with_constraint("required")
    }
}

/// Validates a whole form submitted as field name to value pairs.
#[derive(Clone, Default)]
pub struct ValidationBuilder {
    rules: Vec<ValidationRules>,
}

impl ValidationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, rules: ValidationRules) -> Self {
        self.rules.push(rules);
        self
    }

    /// Validate every configured field present in `data`.
    ///
    /// Absent fields are skipped unless their rules are
    /// [`required`](ValidationRules::required). Fields in `data` without
    /// rules are ignored.
    pub fn validate(&self, data: &HashMap<String, String>) -> Result<(), Vec<ValidationError>> {
        let mut all_errors = Vec::new();

        for rule in &self.rules {
            match data.get(&rule.field) {
                Some(value) => {
                    if let Err(mut errors) = rule.validate(value) {
                        all_errors.append(&mut errors);
                    }
                }
                None if rule.required => {
                    debug!(target: "formcheck::rules", "field '{}' is missing", rule.field);
                    all_errors.push(rule.missing());
                }
                None => {}
            }
        }

        if all_errors.is_empty() {
            Ok(())
        } else {
            Err(all_errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::*;

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_validation_rules() {
        let rules = ValidationRules::for_field("email")
            .add(NotBlank::validate)
            .add(IsEmail::validate);

        assert!(rules.validate("test@example.com").is_ok());
        assert_eq!(rules.validate("invalid").unwrap_err().len(), 1);
        // blank fails both rules
        assert_eq!(rules.validate("  ").unwrap_err().len(), 2);
    }

    #[test]
    fn test_rules_accessors() {
        let optional = ValidationRules::for_field("phone").add(IsPhone::validate);
        assert_eq!(optional.field(), "phone");
        assert!(!optional.is_required());

        let required = ValidationRules::for_field("card").required();
        assert_eq!(required.field(), "card");
        assert!(required.is_required());
    }

    #[test]
    fn test_rules_with_closure() {
        let corporate = Contains("@acme.io");
        let rules = ValidationRules::for_field("email")
            .add(IsEmail::validate)
            .add(move |value, field| corporate.validate(value, field));

        assert!(rules.validate("jo@acme.io").is_ok());
        let errors = rules.validate("jo@other.io").unwrap_err();
        assert_eq!(errors[0].constraint, "contains");
    }

    #[test]
    fn test_validation_builder() {
        let builder = ValidationBuilder::new()
            .field(ValidationRules::for_field("name").add(NotBlank::validate))
            .field(ValidationRules::for_field("email").add(IsEmail::validate))
            .field(ValidationRules::for_field("zip").add(IsZip::validate));

        let data = form(&[("name", "John"), ("email", "john@example.com"), ("zip", "12345")]);
        assert!(builder.validate(&data).is_ok());

        let data = form(&[("name", " "), ("email", "john@"), ("zip", "1234")]);
        let errors = builder.validate(&data).unwrap_err();
        let constraints: Vec<_> = errors.iter().map(|e| e.constraint.as_str()).collect();
        assert_eq!(constraints, vec!["notBlank", "isEmail", "isZip"]);
    }

    #[test]
    fn test_optional_field_skipped() {
        let builder =
            ValidationBuilder::new().field(ValidationRules::for_field("phone").add(IsPhone::validate));

        assert!(builder.validate(&HashMap::new()).is_ok());
    }

    #[test]
    fn test_required_field_missing() {
        let builder = ValidationBuilder::new()
            .field(ValidationRules::for_field("card").required().add(IsCreditCard::validate));

        let errors = builder.validate(&form(&[("other", "x")])).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "card");
        assert_eq!(errors[0].constraint, "required");
    }
}
