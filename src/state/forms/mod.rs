//! Form domain layer
//!
//! Field values, focus order, per-field errors and the validation schema
//! for the sign-in screen.

mod field;
mod form_state;
mod validation;

pub use field::FormField;
pub use form_state::{Form, SignInFocus, SignInForm};
pub use validation::{field_errors, validate, FieldErrors, SignInFormData};

#[cfg(test)]
pub use validation::{EMAIL_INVALID, EMAIL_REQUIRED, PASSWORD_REQUIRED};
