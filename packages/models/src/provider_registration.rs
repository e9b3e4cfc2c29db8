use crate::form_state::{FieldValue, FormField, Requirement};

pub const SPECIALIZATIONS: [&str; 10] = [
    "Cardiology",
    "Pediatrics",
    "Dermatology",
    "General Medicine",
    "Orthopedics",
    "Gynecology",
    "Neurology",
    "Psychiatry",
    "Radiology",
    "Other",
];

pub const PRACTICE_TYPES: [&str; 4] = ["Private Practice", "Clinic", "Hospital", "Other"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProviderField {
    FirstName,
    LastName,
    Email,
    Phone,
    ProfilePhoto,
    License,
    Specialization,
    Experience,
    Degree,
    ClinicName,
    ClinicAddress,
    PracticeType,
    Password,
    ConfirmPassword,
    Terms,
}

impl FormField for ProviderField {
    const ALL: &'static [Self] = &[
        ProviderField::FirstName,
        ProviderField::LastName,
        ProviderField::Email,
        ProviderField::Phone,
        ProviderField::ProfilePhoto,
        ProviderField::License,
        ProviderField::Specialization,
        ProviderField::Experience,
        ProviderField::Degree,
        ProviderField::ClinicName,
        ProviderField::ClinicAddress,
        ProviderField::PracticeType,
        ProviderField::Password,
        ProviderField::ConfirmPassword,
        ProviderField::Terms,
    ];

    fn name(self) -> &'static str {
        match self {
            ProviderField::FirstName => "first_name",
            ProviderField::LastName => "last_name",
            ProviderField::Email => "email",
            ProviderField::Phone => "phone",
            ProviderField::ProfilePhoto => "profile_photo",
            ProviderField::License => "license",
            ProviderField::Specialization => "specialization",
            ProviderField::Experience => "experience",
            ProviderField::Degree => "degree",
            ProviderField::ClinicName => "clinic_name",
            ProviderField::ClinicAddress => "clinic_address",
            ProviderField::PracticeType => "practice_type",
            ProviderField::Password => "password",
            ProviderField::ConfirmPassword => "confirm_password",
            ProviderField::Terms => "terms",
        }
    }

    fn requirement(self) -> Requirement {
        Requirement::Required
    }

    fn default_value(self) -> FieldValue {
        match self {
            ProviderField::Terms => FieldValue::Flag(false),
            _ => FieldValue::empty_text(),
        }
    }
}
