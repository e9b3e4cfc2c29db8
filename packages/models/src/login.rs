use crate::form_state::{FieldValue, FormField, Requirement};

/// Provider sign-in accepts either an email address or a phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProviderLoginField {
    Identifier,
    Password,
    RememberMe,
}

impl FormField for ProviderLoginField {
    const ALL: &'static [Self] = &[
        ProviderLoginField::Identifier,
        ProviderLoginField::Password,
        ProviderLoginField::RememberMe,
    ];

    fn name(self) -> &'static str {
        match self {
            ProviderLoginField::Identifier => "identifier",
            ProviderLoginField::Password => "password",
            ProviderLoginField::RememberMe => "remember_me",
        }
    }

    fn requirement(self) -> Requirement {
        match self {
            ProviderLoginField::RememberMe => Requirement::Optional,
            _ => Requirement::Required,
        }
    }

    fn default_value(self) -> FieldValue {
        match self {
            ProviderLoginField::RememberMe => FieldValue::Flag(false),
            _ => FieldValue::empty_text(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PatientLoginField {
    Email,
    Password,
}

impl FormField for PatientLoginField {
    const ALL: &'static [Self] = &[PatientLoginField::Email, PatientLoginField::Password];

    fn name(self) -> &'static str {
        match self {
            PatientLoginField::Email => "email",
            PatientLoginField::Password => "password",
        }
    }

    fn requirement(self) -> Requirement {
        Requirement::Required
    }
}
