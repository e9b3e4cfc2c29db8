use models::form_state::FieldValue;
use models::kinds::{FormKind, OptionalSection, Screen, SubmitPhase};
use serde::Serialize;

use crate::validation::PasswordStrength;

/// What a renderer needs to draw one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSnapshot {
    pub name: &'static str,
    pub value: FieldValue,
    /// Only set once the field was touched or a submit was attempted.
    pub error: Option<String>,
    pub required: bool,
    pub section: Option<OptionalSection>,
    pub visible: bool,
    pub revealed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionSnapshot {
    pub section: OptionalSection,
    pub title: &'static str,
    pub visible: bool,
}

/// Render state of a whole form at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSnapshot {
    pub kind: FormKind,
    pub fields: Vec<FieldSnapshot>,
    pub sections: Vec<SectionSnapshot>,
    pub can_submit: bool,
    pub phase: SubmitPhase,
    pub success_message: Option<String>,
    pub form_error: Option<String>,
    pub redirect: Option<Screen>,
    pub password_strength: Option<PasswordStrength>,
}

impl FormSnapshot {
    pub fn field(&self, name: &str) -> Option<&FieldSnapshot> {
        self.fields.iter().find(|field| field.name == name)
    }
}
