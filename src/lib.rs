// formcheck - stateless validators for form input
//
// Re-exports the validation crate at the root; the text helpers and the
// logger are available behind the `text` and `log` features.

pub use formcheck_validation::*;

#[cfg(feature = "text")]
pub use formcheck_text;

#[cfg(feature = "log")]
pub use formcheck_log;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Contains, FormError, FormPipe, FormatValidator, IsCreditCard, IsEmail, IsPhone, IsZip,
        NotBlank, Validate, ValidationBuilder, ValidationError, ValidationErrors, ValidationRules,
    };
}
