pub mod directory;
pub mod form_state;
pub mod kinds;
pub mod login;
pub mod patient_registration;
pub mod provider_registration;

pub mod prelude {
    pub use crate::directory::{DirectoryMember, DirectoryTab, MemberRole, RowAction};
    pub use crate::form_state::{
        FieldErrors, FieldValue, FormField, FormState, Requirement, TouchedSet,
    };
    pub use crate::kinds::{FormKind, OptionalSection, Portal, Screen, SubmitPhase};
    pub use crate::login::{PatientLoginField, ProviderLoginField};
    pub use crate::patient_registration::PatientField;
    pub use crate::provider_registration::ProviderField;
}
