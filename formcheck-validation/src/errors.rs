// Validation errors

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A single failed constraint on a form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Field name that failed validation
    pub field: String,

    /// Human readable message
    pub message: String,

    /// Constraint identifier, e.g. `isEmail`
    pub constraint: String,

    /// Offending value, when it is safe to echo back
    pub value: Option<String>,
}

impl ValidationError {
    /// Create an error with the `custom` constraint.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            constraint: "custom".to_string(),
            value: None,
        }
    }

    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = constraint.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Every failed constraint of a form, in validation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Errors recorded against one field.
    pub fn field_errors(&self, field: &str) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// `{"errors": [{"field", "message", "constraint", "value"}, ...]}`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "errors": self.errors })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::new(errors)
    }
}

/// Failure to turn a submitted payload into a valid form.
#[derive(Error, Debug)]
pub enum FormError {
    #[error("Malformed form payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Form validation failed with {} error(s)", .0.len())]
    Invalid(ValidationErrors),
}

impl FormError {
    /// JSON body suitable for returning to the submitter.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            FormError::Malformed(e) => serde_json::json!({
                "errors": [{
                    "field": serde_json::Value::Null,
                    "message": e.to_string(),
                    "constraint": "malformed",
                    "value": serde_json::Value::Null,
                }]
            }),
            FormError::Invalid(errors) => errors.to_json(),
        }
    }
}

impl From<Vec<ValidationError>> for FormError {
    fn from(errors: Vec<ValidationError>) -> Self {
        FormError::Invalid(errors.into())
    }
}

pub type FormResult<T> = std::result::Result<T, FormError>;
