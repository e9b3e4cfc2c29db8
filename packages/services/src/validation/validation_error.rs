use models::form_state::{FieldErrors, FormField};
use std::collections::BTreeMap;
use std::fmt;

/// A mapping of field names to their validation error messages
pub type ValidationErrors = BTreeMap<String, String>;

/// Field-level errors for a whole form, keyed by wire name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationError {
    pub errors: ValidationErrors,
}

impl ValidationError {
    /// Create a new validation error with a single field and message
    pub fn new(field: &str, message: &str) -> Self {
        let mut errors = ValidationErrors::new();
        errors.insert(field.to_string(), message.to_string());
        Self { errors }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Get a comma-separated list of all error messages
    pub fn to_string_list(&self) -> String {
        self.errors
            .values()
            .cloned()
            .collect::<Vec<String>>()
            .join(", ")
    }
}

impl<F: FormField> From<&FieldErrors<F>> for ValidationError {
    fn from(errors: &FieldErrors<F>) -> Self {
        Self {
            errors: errors.by_name(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_list())
    }
}

impl std::error::Error for ValidationError {}
