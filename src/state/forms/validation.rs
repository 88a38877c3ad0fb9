//! Declarative validation for the sign-in form
//!
//! Every rule of every field is evaluated; failures are collected in order
//! rather than stopping at the first one.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;

pub const EMAIL_REQUIRED: &str = "E-mail obrigatorio.";
pub const EMAIL_INVALID: &str = "Digite um e-mail valido.";
pub const PASSWORD_REQUIRED: &str = "Senha obrigatória.";

/// Non-ASCII letters allowed anywhere in an address
const INTL: &str = r"\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}";

/// Dot-atom local part, dotted domain ending in a label that starts and ends
/// with a letter. Case-insensitive.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let atom = format!(r"[a-z0-9!#$%&'*+\-/=?^_`{{|}}~{INTL}]+");
    let label = format!(r"[a-z0-9{INTL}](?:[a-z0-9\-._~{INTL}]*[a-z0-9{INTL}])?");
    let tld = format!(r"[a-z{INTL}](?:[a-z0-9\-._~{INTL}]*[a-z{INTL}])?");
    let pattern = format!(r"(?i)^{atom}(?:\.{atom})*@(?:{label}\.)+{tld}$");
    Regex::new(&pattern).expect("email pattern is a valid regex")
});

/// Field name to message, one entry per failing field
pub type FieldErrors = BTreeMap<String, String>;

/// Values captured from the form at submit time
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SignInFormData {
    pub email: String,
    pub password: String,
}

impl SignInFormData {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Look up a value by field name
    pub fn get(&self, field: &str) -> Option<&str> {
        match field {
            "email" => Some(&self.email),
            "password" => Some(&self.password),
            _ => None,
        }
    }
}

impl std::fmt::Debug for SignInFormData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignInFormData")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A single check applied to a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must be non-empty
    Required(&'static str),
    /// Value must look like an email address; empty values pass
    Email(&'static str),
}

impl Rule {
    /// Returns the failure message, or None when the value passes
    fn check(&self, value: &str) -> Option<&'static str> {
        match *self {
            Rule::Required(message) => value.is_empty().then_some(message),
            Rule::Email(message) => {
                (!value.is_empty() && !EMAIL_RE.is_match(value)).then_some(message)
            }
        }
    }
}

/// Rules attached to one named field
#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    pub field: &'static str,
    pub rules: &'static [Rule],
}

pub const SIGN_IN_SCHEMA: &[FieldSchema] = &[
    FieldSchema {
        field: "email",
        rules: &[Rule::Required(EMAIL_REQUIRED), Rule::Email(EMAIL_INVALID)],
    },
    FieldSchema {
        field: "password",
        rules: &[Rule::Required(PASSWORD_REQUIRED)],
    },
];

/// One failed rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// All rule failures found in one validation pass
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .violations.len())]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

/// Run a schema against the form data, collecting every violation
pub fn validate_with(
    schema: &[FieldSchema],
    data: &SignInFormData,
) -> Result<(), ValidationError> {
    let violations: Vec<FieldViolation> = schema
        .iter()
        .flat_map(|entry| {
            let value = data.get(entry.field).unwrap_or_default();
            entry
                .rules
                .iter()
                .filter_map(move |rule| rule.check(value))
                .map(move |message| FieldViolation {
                    field: entry.field.to_string(),
                    message: message.to_string(),
                })
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { violations })
    }
}

/// Validate sign-in data against [`SIGN_IN_SCHEMA`]
pub fn validate(data: &SignInFormData) -> Result<(), ValidationError> {
    validate_with(SIGN_IN_SCHEMA, data)
}

/// Convert a validation error into a field mapping, keeping the first message per field
pub fn field_errors(err: &ValidationError) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for violation in &err.violations {
        errors
            .entry(violation.field.clone())
            .or_insert_with(|| violation.message.clone());
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors_for(email: &str, password: &str) -> FieldErrors {
        match validate(&SignInFormData::new(email, password)) {
            Ok(()) => FieldErrors::new(),
            Err(err) => field_errors(&err),
        }
    }

    mod schema {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_form_reports_both_fields() {
            let expected: FieldErrors = [
                ("email".to_string(), EMAIL_REQUIRED.to_string()),
                ("password".to_string(), PASSWORD_REQUIRED.to_string()),
            ]
            .into_iter()
            .collect();
            assert_eq!(errors_for("", ""), expected);
        }

        #[test]
        fn test_empty_email_only_reports_required() {
            let err = validate(&SignInFormData::new("", "x")).unwrap_err();
            assert_eq!(
                err.violations,
                vec![FieldViolation {
                    field: "email".to_string(),
                    message: EMAIL_REQUIRED.to_string(),
                }]
            );
        }

        #[test]
        fn test_malformed_email_reports_invalid_format_only() {
            let errors = errors_for("not-an-email", "x");
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.get("email").map(String::as_str), Some(EMAIL_INVALID));
            assert!(errors.get("password").is_none());
        }

        #[test]
        fn test_valid_data_passes() {
            assert!(validate(&SignInFormData::new("a@b.com", "x")).is_ok());
        }

        #[test]
        fn test_malformed_email_and_missing_password() {
            let errors = errors_for("a@", "");
            assert_eq!(errors.get("email").map(String::as_str), Some(EMAIL_INVALID));
            assert_eq!(
                errors.get("password").map(String::as_str),
                Some(PASSWORD_REQUIRED)
            );
        }

        #[test]
        fn test_whitespace_password_counts_as_present() {
            assert!(validate(&SignInFormData::new("a@b.com", " ")).is_ok());
        }
    }

    mod email_format {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_accepts_common_addresses() {
            for email in [
                "a@b.com",
                "first.last@example.com.br",
                "user+tag@sub.domain.io",
                "o'neil@example.org",
                "Ana.Souza@Example.COM",
            ] {
                assert!(EMAIL_RE.is_match(email), "{email} should be valid");
            }
        }

        #[test]
        fn test_rejects_malformed_addresses() {
            for email in [
                "not-an-email",
                "a@b",
                "@b.com",
                "a@.com",
                "a b@c.com",
                "a@b.com ",
                "a@-b.com",
            ] {
                assert!(!EMAIL_RE.is_match(email), "{email} should be invalid");
            }
        }

        #[test]
        fn test_accepts_accented_addresses() {
            for email in ["josé@exemplo.com.br", "joao@exemplo.ção.br", "ñandú@ejemplo.es"] {
                assert!(EMAIL_RE.is_match(email), "{email} should be valid");
            }
        }

        #[test]
        fn test_local_part_dots_must_separate_atoms() {
            for email in [".a@b.com", "a.@b.com", "a..b@c.com"] {
                assert!(!EMAIL_RE.is_match(email), "{email} should be invalid");
            }
        }

        #[test]
        fn test_top_level_label_starts_and_ends_with_letter() {
            assert!(!EMAIL_RE.is_match("a@b.co1"));
            assert!(!EMAIL_RE.is_match("a@b.123"));
            assert!(EMAIL_RE.is_match("a@b.c0m"));
        }

        #[test]
        fn test_accented_email_passes_the_form_schema() {
            assert_eq!(validate(&SignInFormData::new("josé@exemplo.com.br", "x")), Ok(()));
            assert_eq!(
                errors_for("a..b@c.com", "x").get("email").map(String::as_str),
                Some(EMAIL_INVALID)
            );
        }
    }

    mod mapping {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_first_message_per_field_wins() {
            let err = ValidationError {
                violations: vec![
                    FieldViolation {
                        field: "email".to_string(),
                        message: "first".to_string(),
                    },
                    FieldViolation {
                        field: "email".to_string(),
                        message: "second".to_string(),
                    },
                ],
            };
            let errors = field_errors(&err);
            assert_eq!(errors.len(), 1);
            assert_eq!(errors["email"], "first");
        }

        #[test]
        fn test_custom_schema_collects_all_rules() {
            const STRICT: &[FieldSchema] = &[FieldSchema {
                field: "email",
                rules: &[Rule::Required("a"), Rule::Required("b")],
            }];
            let err = validate_with(STRICT, &SignInFormData::default()).unwrap_err();
            assert_eq!(err.violations.len(), 2);
            assert_eq!(err.to_string(), "2 field(s) failed validation");
        }

        #[test]
        fn test_unknown_field_is_treated_as_empty() {
            const SCHEMA: &[FieldSchema] = &[FieldSchema {
                field: "nickname",
                rules: &[Rule::Required("needed")],
            }];
            assert!(validate_with(SCHEMA, &SignInFormData::new("a@b.com", "x")).is_err());
        }

        #[test]
        fn test_debug_redacts_password() {
            let data = SignInFormData::new("a@b.com", "hunter2");
            let debug = format!("{data:?}");
            assert!(debug.contains("a@b.com"));
            assert!(!debug.contains("hunter2"));
        }
    }
}
