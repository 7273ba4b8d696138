//! Form input validation for formcheck
//!
//! Two layers:
//!
//! - [`FormatValidator`]: pure `bool` predicates for email, phone, zip,
//!   credit card (Luhn), blank and substring checks.
//! - Field validators, [`ValidationRules`] and [`FormPipe`]: wrap the
//!   predicates into per-field errors for whole forms.
//!
//! # Examples
//!
//! ## Predicates
//!
//! ```
//! use formcheck_validation::FormatValidator;
//!
//! assert!(FormatValidator::is_zip("12345"));
//! assert!(!FormatValidator::is_zip("1234"));
//! assert!(!FormatValidator::is_credit_card("4111111111111112"));
//! assert!(FormatValidator::contains("hello world", "world"));
//! ```
//!
//! ## Whole forms
//!
//! ```
//! use formcheck_validation::{IsEmail, IsPhone, NotBlank, ValidationBuilder, ValidationRules};
//! use std::collections::HashMap;
//!
//! let form = ValidationBuilder::new()
//!     .field(ValidationRules::for_field("name").required().add(NotBlank::validate))
//!     .field(ValidationRules::for_field("email").required().add(IsEmail::validate))
//!     .field(ValidationRules::for_field("phone").add(IsPhone::validate));
//!
//! let mut data = HashMap::new();
//! data.insert("name".to_string(), "Jane".to_string());
//! data.insert("email".to_string(), "jane@example".to_string());
//!
//! let errors = form.validate(&data).unwrap_err();
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].constraint, "isEmail");
//! ```
//!
//! ## Typed forms
//!
//! ```
//! use formcheck_validation::{FormPipe, IsZip, Validate, ValidationError};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Address {
//!     zip: String,
//! }
//!
//! impl Validate for Address {
//!     fn validate(&self) -> Result<(), Vec<ValidationError>> {
//!         IsZip::validate(&self.zip, "zip").map_err(|e| vec![e])
//!     }
//! }
//!
//! let address: Address = FormPipe::parse(br#"{"zip":"12345-6789"}"#).unwrap();
//! assert_eq!(address.zip, "12345-6789");
//! ```

mod errors;
mod format;
mod pipe;
mod rules;
mod traits;
mod validators;

pub use errors::*;
pub use format::*;
pub use pipe::*;
pub use rules::*;
pub use traits::*;
pub use validators::*;
