//! Form field value objects

/// Character used to mask secret field values
const SECRET_MASK: char = '•';

/// A single text input with its configuration, value and error state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Key used by validation and the error mapping
    pub name: String,
    /// Placeholder shown while the field is empty
    pub placeholder: String,
    /// Glyph drawn in front of the value
    pub icon: &'static str,
    pub value: String,
    /// Masks the value when rendered (password entry)
    pub is_secret: bool,
    error: Option<String>,
}

impl FormField {
    /// Create a new plain text field
    pub fn text(name: &str, placeholder: &str, icon: &'static str) -> Self {
        Self {
            name: name.to_string(),
            placeholder: placeholder.to_string(),
            icon,
            value: String::new(),
            is_secret: false,
            error: None,
        }
    }

    /// Create a new field whose value is masked on screen
    pub fn secret(name: &str, placeholder: &str, icon: &'static str) -> Self {
        Self {
            is_secret: true,
            ..Self::text(name, placeholder, icon)
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value, ignoring control characters
    pub fn push_char(&mut self, c: char) {
        if !c.is_control() {
            self.value.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the value and any error
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Value as it should appear on screen
    pub fn display_value(&self) -> String {
        if self.is_secret {
            std::iter::repeat(SECRET_MASK)
                .take(self.value.chars().count())
                .collect()
        } else {
            self.value.clone()
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn set_error(&mut self, message: Option<String>) {
        self.error = message;
    }
}
