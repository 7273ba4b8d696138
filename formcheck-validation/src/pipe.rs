// Decode-then-validate pipe for submitted forms

use crate::{FormError, FormResult, Validate};
use formcheck_log::debug;
use serde::de::DeserializeOwned;

/// Turns a raw JSON form submission into a validated value.
pub struct FormPipe;

impl FormPipe {
    /// Decode `body` as JSON and run [`Validate`] on the result.
    pub fn parse<T>(body: &[u8]) -> FormResult<T>
    where
        T: DeserializeOwned + Validate,
    {
        let form: T = serde_json::from_slice(body).map_err(|e| {
            debug!(target: "formcheck::pipe", "rejected malformed payload: {}", e);
            FormError::from(e)
        })?;

        form.validate()?;
        Ok(form)
    }

    /// Like [`parse`](Self::parse) for an already-decoded JSON value.
    pub fn from_value<T>(value: serde_json::Value) -> FormResult<T>
    where
        T: DeserializeOwned + Validate,
    {
        let form: T = serde_json::from_value(value)?;
        form.validate()?;
        Ok(form)
    }
}

/// Validate a form inside a function returning [`FormResult`].
#[macro_export]
macro_rules! validate {
    ($form:expr) => {
        $crate::Validate::validate(&$form).map_err($crate::FormError::from)?
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IsEmail, IsZip, NotBlank, ValidationError};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Deserialize, Serialize)]
    struct Signup {
        name: String,
        email: String,
        zip: String,
    }

    impl Validate for Signup {
        fn validate(&self) -> Result<(), Vec<ValidationError>> {
            let errors: Vec<_> = [
                NotBlank::validate(&self.name, "name"),
                IsEmail::validate(&self.email, "email"),
                IsZip::validate(&self.zip, "zip"),
            ]
            .into_iter()
            .filter_map(Result::err)
            .collect();

            if errors.is_empty() { Ok(()) } else { Err(errors) }
        }
    }

    #[test]
    fn test_parse_valid() {
        let body = br#"{"name":"Jane","email":"jane@example.com","zip":"12345"}"#;
        let form: Signup = FormPipe::parse(body).unwrap();
        assert_eq!(form.name, "Jane");
    }

    #[test]
    fn test_parse_invalid() {
        let body = br#"{"name":"","email":"jane","zip":"1"}"#;
        match FormPipe::parse::<Signup>(body) {
            Err(FormError::Invalid(errors)) => {
                assert_eq!(errors.len(), 3);
                assert_eq!(errors.field_errors("zip")[0].constraint, "isZip");
            }
            other => panic!("expected invalid form, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_malformed() {
        let err = FormPipe::parse::<Signup>(b"{not json").unwrap_err();
        assert!(matches!(err, FormError::Malformed(_)));
        assert_eq!(err.to_json()["errors"][0]["constraint"], "malformed");
    }

    #[test]
    fn test_from_value() {
        let value = serde_json::json!({"name": "Jo", "email": "jo@acme.io", "zip": "123456789"});
        assert!(FormPipe::from_value::<Signup>(value).is_ok());
    }

    #[test]
    fn test_validate_macro() {
        fn check(form: Signup) -> FormResult<()> {
            validate!(form);
            Ok(())
        }

        let bad = Signup {
            name: "Jo".into(),
            email: "jo@acme.io".into(),
            zip: "12".into(),
        };
        assert!(matches!(check(bad), Err(FormError::Invalid(_))));
    }
}
