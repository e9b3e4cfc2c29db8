pub mod field_validators;
pub mod password;
pub mod rules;
pub mod validation_error;

// Re-export common types and functions
pub use field_validators::FieldValidator;
pub use password::{password_strength, PasswordStrength, PasswordValidationError};
pub use rules::{FormSchema, RuleContext, RuleResult, ValidationRule};
pub use validation_error::{ValidationError, ValidationErrors};
