use async_graphql::Enum;
use serde::{Deserialize, Serialize};

/// Collapsible groups of optional fields on the patient registration form.
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OptionalSection {
    EmergencyContact,
    Insurance,
    MedicalHistory,
}

impl OptionalSection {
    pub const ALL: [OptionalSection; 3] = [
        OptionalSection::EmergencyContact,
        OptionalSection::Insurance,
        OptionalSection::MedicalHistory,
    ];

    pub fn title(self) -> &'static str {
        match self {
            OptionalSection::EmergencyContact => "Emergency Contact",
            OptionalSection::Insurance => "Insurance Info",
            OptionalSection::MedicalHistory => "Medical History",
        }
    }
}

#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Portal {
    Provider,
    Patient,
}

/// The four screens that hold a form.
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormKind {
    ProviderLogin,
    PatientLogin,
    ProviderRegistration,
    PatientRegistration,
}

impl FormKind {
    pub fn portal(self) -> Portal {
        match self {
            FormKind::ProviderLogin | FormKind::ProviderRegistration => Portal::Provider,
            FormKind::PatientLogin | FormKind::PatientRegistration => Portal::Patient,
        }
    }

    pub fn is_login(self) -> bool {
        matches!(self, FormKind::ProviderLogin | FormKind::PatientLogin)
    }
}

/// Where the client should navigate next.
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    ProviderLogin,
    ProviderRegistration,
    ProviderDashboard,
    PatientLogin,
    PatientRegistration,
    PatientDashboard,
}

impl Portal {
    pub fn dashboard(self) -> Screen {
        match self {
            Portal::Provider => Screen::ProviderDashboard,
            Portal::Patient => Screen::PatientDashboard,
        }
    }
}

#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting,
    Succeeded,
    Failed,
}
