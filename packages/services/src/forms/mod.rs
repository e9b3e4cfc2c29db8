pub mod controller;
pub mod login;
pub mod registration;
pub mod snapshot;

pub use controller::{FormController, SubmitError, UnknownField};
pub use login::{PatientLogin, PatientLoginController, ProviderLogin, ProviderLoginController};
pub use registration::{
    PatientRegistration, PatientRegistrationController, ProviderRegistration,
    ProviderRegistrationController,
};
pub use snapshot::{FieldSnapshot, FormSnapshot, SectionSnapshot};
