use async_graphql::{OneofObject, SimpleObject};
use models::form_state::FieldValue;

/// Exactly one of text, checked or items.
#[derive(OneofObject, Debug, Clone)]
pub enum FieldValueInput {
    Text(String),
    Checked(bool),
    Items(Vec<String>),
}

impl From<FieldValueInput> for FieldValue {
    fn from(input: FieldValueInput) -> Self {
        match input {
            FieldValueInput::Text(text) => FieldValue::Text(text),
            FieldValueInput::Checked(checked) => FieldValue::Flag(checked),
            FieldValueInput::Items(items) => FieldValue::List(items),
        }
    }
}

/// A field value with only the member matching its input type set.
#[derive(SimpleObject, Debug, Clone, Default)]
pub struct FieldValueView {
    pub text: Option<String>,
    pub checked: Option<bool>,
    pub items: Option<Vec<String>>,
}

impl From<FieldValue> for FieldValueView {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Text(text) => FieldValueView {
                text: Some(text),
                ..Default::default()
            },
            FieldValue::Flag(checked) => FieldValueView {
                checked: Some(checked),
                ..Default::default()
            },
            FieldValue::List(items) => FieldValueView {
                items: Some(items),
                ..Default::default()
            },
        }
    }
}
