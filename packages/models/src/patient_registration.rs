use crate::form_state::{FieldValue, FormField, Requirement};
use crate::kinds::OptionalSection;

pub const GENDER_OPTIONS: [(&str, &str); 4] = [
    ("male", "Male"),
    ("female", "Female"),
    ("other", "Other"),
    ("prefer_not_to_say", "Prefer not to say"),
];

pub const MEDICAL_CONDITIONS: [&str; 6] = [
    "Diabetes",
    "Hypertension",
    "Asthma",
    "Heart Disease",
    "Allergies",
    "Other",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PatientField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Password,
    ConfirmPassword,
    DateOfBirth,
    Gender,
    Street,
    City,
    State,
    Zip,
    EmergencyName,
    EmergencyPhone,
    EmergencyRelationship,
    InsuranceProvider,
    InsurancePolicy,
    MedicalHistory,
}

impl FormField for PatientField {
    const ALL: &'static [Self] = &[
        PatientField::FirstName,
        PatientField::LastName,
        PatientField::Email,
        PatientField::PhoneNumber,
        PatientField::Password,
        PatientField::ConfirmPassword,
        PatientField::DateOfBirth,
        PatientField::Gender,
        PatientField::Street,
        PatientField::City,
        PatientField::State,
        PatientField::Zip,
        PatientField::EmergencyName,
        PatientField::EmergencyPhone,
        PatientField::EmergencyRelationship,
        PatientField::InsuranceProvider,
        PatientField::InsurancePolicy,
        PatientField::MedicalHistory,
    ];

    fn name(self) -> &'static str {
        match self {
            PatientField::FirstName => "first_name",
            PatientField::LastName => "last_name",
            PatientField::Email => "email",
            PatientField::PhoneNumber => "phone_number",
            PatientField::Password => "password",
            PatientField::ConfirmPassword => "confirm_password",
            PatientField::DateOfBirth => "date_of_birth",
            PatientField::Gender => "gender",
            PatientField::Street => "street",
            PatientField::City => "city",
            PatientField::State => "state",
            PatientField::Zip => "zip",
            PatientField::EmergencyName => "emergency_name",
            PatientField::EmergencyPhone => "emergency_phone",
            PatientField::EmergencyRelationship => "emergency_relationship",
            PatientField::InsuranceProvider => "insurance_provider",
            PatientField::InsurancePolicy => "insurance_policy",
            PatientField::MedicalHistory => "medical_history",
        }
    }

    fn requirement(self) -> Requirement {
        match self {
            PatientField::EmergencyName
            | PatientField::EmergencyPhone
            | PatientField::EmergencyRelationship => {
                Requirement::Section(OptionalSection::EmergencyContact)
            }
            PatientField::InsuranceProvider | PatientField::InsurancePolicy => {
                Requirement::Section(OptionalSection::Insurance)
            }
            PatientField::MedicalHistory => Requirement::Section(OptionalSection::MedicalHistory),
            _ => Requirement::Required,
        }
    }

    fn default_value(self) -> FieldValue {
        match self {
            PatientField::MedicalHistory => FieldValue::List(Vec::new()),
            _ => FieldValue::empty_text(),
        }
    }
}
