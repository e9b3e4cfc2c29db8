use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::kinds::OptionalSection;

/// The current value of a single input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    List(Vec<String>),
}

impl FieldValue {
    pub fn empty_text() -> Self {
        FieldValue::Text(String::new())
    }

    /// Text content, or an empty string for flags and lists.
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(text) => text.as_str(),
            _ => "",
        }
    }

    pub fn as_flag(&self) -> bool {
        matches!(self, FieldValue::Flag(true))
    }

    pub fn as_list(&self) -> &[String] {
        match self {
            FieldValue::List(items) => items.as_slice(),
            _ => &[],
        }
    }

    /// Whitespace-only text, an unchecked flag and an empty list are all blank.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Flag(checked) => !checked,
            FieldValue::List(items) => items.is_empty(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

/// Whether a field must be filled in before the form can be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Optional,
    /// Optional, and only rendered and validated while the section is shown.
    Section(OptionalSection),
}

/// A field of one particular form.
pub trait FormField: Copy + Eq + Ord + Hash + Debug + Send + Sync + 'static {
    /// Every field of the form, in display order.
    const ALL: &'static [Self];

    fn name(self) -> &'static str;

    fn requirement(self) -> Requirement;

    fn default_value(self) -> FieldValue {
        FieldValue::empty_text()
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.name() == name)
    }

    fn is_required(self) -> bool {
        self.requirement() == Requirement::Required
    }

    fn section(self) -> Option<OptionalSection> {
        match self.requirement() {
            Requirement::Section(section) => Some(section),
            _ => None,
        }
    }
}

/// Current values of every field of one form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<F: FormField> {
    values: BTreeMap<F, FieldValue>,
}

impl<F: FormField> FormState<F> {
    pub fn new() -> Self {
        let values = F::ALL
            .iter()
            .map(|field| (*field, field.default_value()))
            .collect();
        Self { values }
    }

    pub fn get(&self, field: F) -> &FieldValue {
        // every field is seeded in `new`, so the lookup cannot miss
        &self.values[&field]
    }

    pub fn text(&self, field: F) -> &str {
        self.get(field).as_text()
    }

    pub fn set(&mut self, field: F, value: impl Into<FieldValue>) {
        self.values.insert(field, value.into());
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &FieldValue)> {
        self.values.iter().map(|(field, value)| (*field, value))
    }
}

impl<F: FormField> Default for FormState<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FormField> Serialize for FormState<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (field, value) in &self.values {
            map.serialize_entry(field.name(), value)?;
        }
        map.end()
    }
}

/// Validation message per field; a missing entry means the field is clean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<F: FormField> {
    errors: BTreeMap<F, String>,
}

impl<F: FormField> FieldErrors<F> {
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Records `error` for `field`, or clears the field when there is none.
    pub fn set(&mut self, field: F, error: Option<String>) {
        match error {
            Some(message) if !message.is_empty() => {
                self.errors.insert(field, message);
            }
            _ => {
                self.errors.remove(&field);
            }
        }
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }

    /// Errors keyed by wire name.
    pub fn by_name(&self) -> BTreeMap<String, String> {
        self.errors
            .iter()
            .map(|(field, message)| (field.name().to_string(), message.clone()))
            .collect()
    }
}

impl<F: FormField> Default for FieldErrors<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fields the user has interacted with at least once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TouchedSet<F: FormField> {
    fields: BTreeSet<F>,
}

impl<F: FormField> TouchedSet<F> {
    pub fn new() -> Self {
        Self {
            fields: BTreeSet::new(),
        }
    }

    pub fn touch(&mut self, field: F) {
        self.fields.insert(field);
    }

    pub fn contains(&self, field: F) -> bool {
        self.fields.contains(&field)
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<F: FormField> Default for TouchedSet<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patient_registration::PatientField;

    #[test]
    fn test_new_state_uses_field_defaults() {
        let state = FormState::<PatientField>::new();

        assert_eq!(state.text(PatientField::FirstName), "");
        assert_eq!(
            state.get(PatientField::MedicalHistory),
            &FieldValue::List(vec![])
        );
        assert_eq!(state.iter().count(), PatientField::ALL.len());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = FormState::<PatientField>::new();
        state.set(PatientField::City, "Springfield");
        state.set(
            PatientField::MedicalHistory,
            vec!["Asthma".to_string()],
        );

        state.reset();

        assert_eq!(state, FormState::new());
    }

    #[test]
    fn test_blank_values() {
        assert!(FieldValue::from("   ").is_blank());
        assert!(FieldValue::from(false).is_blank());
        assert!(FieldValue::List(vec![]).is_blank());
        assert!(!FieldValue::from(" a ").is_blank());
        assert!(!FieldValue::from(true).is_blank());
    }

    #[test]
    fn test_state_serializes_by_wire_name() {
        let mut state = FormState::<PatientField>::new();
        state.set(PatientField::Email, "jane@example.com");

        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["email"], "jane@example.com");
        assert_eq!(json["medical_history"], serde_json::json!([]));
    }

    #[test]
    fn test_field_errors_ignore_empty_messages() {
        let mut errors = FieldErrors::<PatientField>::new();
        errors.set(PatientField::Zip, Some("Invalid ZIP".to_string()));
        errors.set(PatientField::City, Some(String::new()));

        assert_eq!(errors.get(PatientField::Zip), Some("Invalid ZIP"));
        assert_eq!(errors.get(PatientField::City), None);

        errors.set(PatientField::Zip, None);
        assert!(errors.is_empty());
    }
}
