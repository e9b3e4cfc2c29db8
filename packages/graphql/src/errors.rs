use async_graphql::SimpleObject;
use services::{DirectoryError, GatewayError, UnknownField, ValidationError};
use std::fmt;

#[derive(SimpleObject, Debug)]
pub struct AuthError {
    pub message: String,
}

impl From<GatewayError> for AuthError {
    fn from(e: GatewayError) -> Self {
        AuthError { message: e.to_string() }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

#[derive(SimpleObject, Debug, Clone)]
pub struct FieldMessage {
    pub field: String,
    pub message: String,
}

#[derive(SimpleObject, Debug)]
pub struct ValidationErrorType {
    pub message: String,
    pub fields: Vec<FieldMessage>,
}

impl From<ValidationError> for ValidationErrorType {
    fn from(e: ValidationError) -> Self {
        ValidationErrorType {
            message: e.to_string_list(),
            fields: e
                .errors
                .into_iter()
                .map(|(field, message)| FieldMessage { field, message })
                .collect(),
        }
    }
}

impl From<UnknownField> for ValidationErrorType {
    fn from(e: UnknownField) -> Self {
        ValidationErrorType {
            message: e.to_string(),
            fields: vec![FieldMessage {
                field: e.0,
                message: "Unknown field".to_string(),
            }],
        }
    }
}

/// The form session is missing or cannot take the request right now.
#[derive(SimpleObject, Debug)]
pub struct SessionError {
    pub message: String,
}

impl SessionError {
    pub fn not_found() -> Self {
        SessionError {
            message: "Form session not found".to_string(),
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

#[derive(SimpleObject, Debug)]
pub struct DirectoryErrorType {
    pub message: String,
}

impl From<DirectoryError> for DirectoryErrorType {
    fn from(e: DirectoryError) -> Self {
        DirectoryErrorType { message: e.to_string() }
    }
}
