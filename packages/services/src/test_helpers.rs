use std::sync::Arc;

use chrono::NaiveDate;
use models::patient_registration::PatientField;
use models::provider_registration::ProviderField;

use crate::clock::{Clock, FixedClock};
use crate::forms::{PatientRegistrationController, ProviderRegistrationController};
use crate::validation::RuleContext;

pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

pub fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(fixed_today()))
}

pub fn fixed_context() -> RuleContext {
    RuleContext {
        today: fixed_today(),
    }
}

pub fn patient_form() -> PatientRegistrationController {
    PatientRegistrationController::with_clock(fixed_clock())
}

/// A patient form whose required fields all pass; optional sections stay hidden.
pub fn filled_patient_form() -> PatientRegistrationController {
    let mut form = patient_form();
    form.on_change(PatientField::FirstName, "Jane");
    form.on_change(PatientField::LastName, "Doe");
    form.on_change(PatientField::Email, "jane.doe@example.com");
    form.on_change(PatientField::PhoneNumber, "5551234567");
    form.on_change(PatientField::Password, "Secur3#Pass");
    form.on_change(PatientField::ConfirmPassword, "Secur3#Pass");
    form.on_change(PatientField::DateOfBirth, "1990-05-14");
    form.on_change(PatientField::Gender, "female");
    form.on_change(PatientField::Street, "742 Evergreen Terrace");
    form.on_change(PatientField::City, "Springfield");
    form.on_change(PatientField::State, "Oregon");
    form.on_change(PatientField::Zip, "97403");
    form
}

pub fn filled_provider_form() -> ProviderRegistrationController {
    let mut form = ProviderRegistrationController::with_clock(fixed_clock());
    form.on_change(ProviderField::FirstName, "Gregory");
    form.on_change(ProviderField::LastName, "House");
    form.on_change(ProviderField::Email, "g.house@example.com");
    form.on_change(ProviderField::Phone, "+15551234567");
    form.on_change(ProviderField::ProfilePhoto, "portrait.png");
    form.on_change(ProviderField::License, "MD-123456");
    form.on_change(ProviderField::Specialization, "Cardiology");
    form.on_change(ProviderField::Experience, "12");
    form.on_change(ProviderField::Degree, "MD");
    form.on_change(ProviderField::ClinicName, "Princeton-Plainsboro");
    form.on_change(ProviderField::ClinicAddress, "1 Hospital Plaza, Princeton");
    form.on_change(ProviderField::PracticeType, "Clinic");
    form.on_change(ProviderField::Password, "Secur3#Pass");
    form.on_change(ProviderField::ConfirmPassword, "Secur3#Pass");
    form.on_change(ProviderField::Terms, true);
    form
}
