//! Form controller for the sign-in screen

use super::field::FormField;
use super::validation::{FieldErrors, SignInFormData};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    /// The focused text input, or None when focus is on a button
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
}

/// Focusable elements of the sign-in screen, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignInFocus {
    #[default]
    Email,
    Password,
    SubmitButton,
    ForgotPassword,
    CreateAccount,
}

impl SignInFocus {
    pub const ALL: [SignInFocus; 5] = [
        SignInFocus::Email,
        SignInFocus::Password,
        SignInFocus::SubmitButton,
        SignInFocus::ForgotPassword,
        SignInFocus::CreateAccount,
    ];

    pub fn index(self) -> usize {
        match self {
            Self::Email => 0,
            Self::Password => 1,
            Self::SubmitButton => 2,
            Self::ForgotPassword => 3,
            Self::CreateAccount => 4,
        }
    }

    /// Out of range indices clamp to the last element
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    pub fn is_text_input(self) -> bool {
        matches!(self, Self::Email | Self::Password)
    }
}

/// Email/password form with per-field error state
#[derive(Debug, Clone)]
pub struct SignInForm {
    pub email: FormField,
    pub password: FormField,
    pub active_field_index: usize,
}

impl SignInForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text("email", "E-mail", "✉"),
            password: FormField::secret("password", "Senha", "🔒"),
            active_field_index: 0,
        }
    }

    pub fn focus(&self) -> SignInFocus {
        SignInFocus::from_index(self.active_field_index)
    }

    pub fn set_focus(&mut self, focus: SignInFocus) {
        self.set_active_field(focus.index());
    }

    /// Snapshot of the current values
    pub fn data(&self) -> SignInFormData {
        SignInFormData::new(self.email.as_text(), self.password.as_text())
    }

    /// Replace every field error with the given mapping; an empty map clears them
    pub fn set_errors(&mut self, errors: &FieldErrors) {
        for field in [&mut self.email, &mut self.password] {
            field.set_error(errors.get(&field.name).cloned());
        }
    }

    /// Errors currently shown, keyed by field name
    #[cfg(test)]
    pub fn errors(&self) -> FieldErrors {
        [&self.email, &self.password]
            .into_iter()
            .filter_map(|field| {
                field
                    .error()
                    .map(|message| (field.name.clone(), message.to_string()))
            })
            .collect()
    }

    #[cfg(test)]
    pub fn has_errors(&self) -> bool {
        self.email.has_error() || self.password.has_error()
    }

    /// Type into the focused input; ignored when a button has focus
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.get_active_field_mut() {
            field.push_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.pop_char();
        }
    }

    /// Reset values, errors and focus
    pub fn clear(&mut self) {
        self.email.clear();
        self.password.clear();
        self.active_field_index = 0;
    }
}

impl Default for SignInForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignInForm {
    fn field_count(&self) -> usize {
        SignInFocus::ALL.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.focus() {
            SignInFocus::Email => Some(&mut self.email),
            SignInFocus::Password => Some(&mut self.password),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors(pairs: &[(&str, &str)]) -> FieldErrors {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_focus_is_email() {
            let form = SignInForm::new();
            assert_eq!(form.focus(), SignInFocus::Email);
        }

        #[test]
        fn test_next_field_walks_tab_order_and_wraps() {
            let mut form = SignInForm::new();
            let mut seen = vec![form.focus()];
            for _ in 0..SignInFocus::ALL.len() {
                form.next_field();
                seen.push(form.focus());
            }
            assert_eq!(
                seen,
                vec![
                    SignInFocus::Email,
                    SignInFocus::Password,
                    SignInFocus::SubmitButton,
                    SignInFocus::ForgotPassword,
                    SignInFocus::CreateAccount,
                    SignInFocus::Email,
                ]
            );
        }

        #[test]
        fn test_prev_field_wraps_to_last() {
            let mut form = SignInForm::new();
            form.prev_field();
            assert_eq!(form.focus(), SignInFocus::CreateAccount);
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = SignInForm::new();
            form.set_active_field(100);
            assert_eq!(form.focus(), SignInFocus::CreateAccount);
        }

        #[test]
        fn test_index_round_trips() {
            for focus in SignInFocus::ALL {
                assert_eq!(SignInFocus::from_index(focus.index()), focus);
            }
        }

        #[test]
        fn test_only_inputs_are_text() {
            assert!(SignInFocus::Email.is_text_input());
            assert!(SignInFocus::Password.is_text_input());
            assert!(!SignInFocus::SubmitButton.is_text_input());
            assert!(!SignInFocus::CreateAccount.is_text_input());
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_input_goes_to_focused_field() {
            let mut form = SignInForm::new();
            form.input_char('a');
            form.set_focus(SignInFocus::Password);
            form.input_char('x');
            form.input_char('y');
            form.backspace();
            assert_eq!(form.data(), SignInFormData::new("a", "x"));
        }

        #[test]
        fn test_input_on_button_is_ignored() {
            let mut form = SignInForm::new();
            form.set_focus(SignInFocus::SubmitButton);
            form.input_char('z');
            form.backspace();
            assert_eq!(form.data(), SignInFormData::default());
            assert!(form.get_active_field_mut().is_none());
        }

        #[test]
        fn test_password_is_secret() {
            let form = SignInForm::new();
            assert!(form.password.is_secret);
            assert!(!form.email.is_secret);
        }

        #[test]
        fn test_clear_resets_everything() {
            let mut form = SignInForm::new();
            form.email.set_text("a@b.com");
            form.set_focus(SignInFocus::Password);
            form.set_errors(&errors(&[("password", "Senha obrigatória.")]));
            form.clear();
            assert_eq!(form.data(), SignInFormData::default());
            assert!(!form.has_errors());
            assert_eq!(form.focus(), SignInFocus::Email);
        }
    }

    mod error_state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_set_errors_assigns_by_name() {
            let mut form = SignInForm::new();
            form.set_errors(&errors(&[("email", "E-mail obrigatorio.")]));
            assert_eq!(form.email.error(), Some("E-mail obrigatorio."));
            assert!(form.password.error().is_none());
        }

        #[test]
        fn test_set_errors_replaces_previous_errors() {
            let mut form = SignInForm::new();
            form.set_errors(&errors(&[
                ("email", "E-mail obrigatorio."),
                ("password", "Senha obrigatória."),
            ]));
            form.set_errors(&errors(&[("password", "Senha obrigatória.")]));
            assert_eq!(form.errors(), errors(&[("password", "Senha obrigatória.")]));
        }

        #[test]
        fn test_empty_mapping_clears_errors() {
            let mut form = SignInForm::new();
            form.set_errors(&errors(&[("email", "E-mail obrigatorio.")]));
            form.set_errors(&FieldErrors::new());
            assert!(!form.has_errors());
            assert!(form.errors().is_empty());
        }

        #[test]
        fn test_unknown_field_names_are_ignored() {
            let mut form = SignInForm::new();
            form.set_errors(&errors(&[("nickname", "nope")]));
            assert!(!form.has_errors());
        }
    }
}
