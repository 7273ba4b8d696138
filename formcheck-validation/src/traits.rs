// Validation traits

use crate::ValidationError;

/// A form or DTO that knows how to check its own fields.
pub trait Validate {
    /// Return every failed constraint, or `Ok(())` when the value is valid.
    fn validate(&self) -> Result<(), Vec<ValidationError>>;
}
