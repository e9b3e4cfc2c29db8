use async_graphql::SimpleObject;
use models::kinds::{FormKind, OptionalSection, Screen, SubmitPhase};
use services::{FieldSnapshot, FormSnapshot, PasswordStrength, SectionSnapshot};
use uuid::Uuid;

use super::field_value::FieldValueView;

#[derive(SimpleObject, Debug, Clone)]
pub struct PasswordStrengthView {
    pub score: u8,
    pub max_score: u8,
    pub label: String,
}

impl From<PasswordStrength> for PasswordStrengthView {
    fn from(strength: PasswordStrength) -> Self {
        PasswordStrengthView {
            score: strength.score,
            max_score: PasswordStrength::MAX_SCORE,
            label: strength.label.to_string(),
        }
    }
}

#[derive(SimpleObject, Debug, Clone)]
pub struct FieldView {
    pub name: String,
    pub value: FieldValueView,
    pub error: Option<String>,
    pub required: bool,
    pub section: Option<OptionalSection>,
    pub visible: bool,
    /// Password inputs only: plain text instead of masked.
    pub revealed: bool,
}

impl From<FieldSnapshot> for FieldView {
    fn from(field: FieldSnapshot) -> Self {
        FieldView {
            name: field.name.to_string(),
            value: field.value.into(),
            error: field.error,
            required: field.required,
            section: field.section,
            visible: field.visible,
            revealed: field.revealed,
        }
    }
}

#[derive(SimpleObject, Debug, Clone)]
pub struct SectionView {
    pub section: OptionalSection,
    pub title: String,
    pub visible: bool,
}

impl From<SectionSnapshot> for SectionView {
    fn from(section: SectionSnapshot) -> Self {
        SectionView {
            section: section.section,
            title: section.title.to_string(),
            visible: section.visible,
        }
    }
}

#[derive(SimpleObject, Debug, Clone)]
pub struct FormView {
    pub session_id: Uuid,
    pub kind: FormKind,
    pub fields: Vec<FieldView>,
    pub sections: Vec<SectionView>,
    pub can_submit: bool,
    pub phase: SubmitPhase,
    pub success_message: Option<String>,
    pub form_error: Option<String>,
    pub redirect: Option<Screen>,
    pub password_strength: Option<PasswordStrengthView>,
}

impl FormView {
    pub fn new(session_id: Uuid, snapshot: FormSnapshot) -> Self {
        FormView {
            session_id,
            kind: snapshot.kind,
            fields: snapshot.fields.into_iter().map(FieldView::from).collect(),
            sections: snapshot.sections.into_iter().map(SectionView::from).collect(),
            can_submit: snapshot.can_submit,
            phase: snapshot.phase,
            success_message: snapshot.success_message,
            form_error: snapshot.form_error,
            redirect: snapshot.redirect,
            password_strength: snapshot.password_strength.map(PasswordStrengthView::from),
        }
    }
}
