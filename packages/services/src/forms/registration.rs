use models::form_state::{FieldValue, FormState};
use models::kinds::FormKind;
use models::patient_registration::{PatientField, GENDER_OPTIONS, MEDICAL_CONDITIONS};
use models::provider_registration::{ProviderField, PRACTICE_TYPES, SPECIALIZATIONS};

use super::controller::FormController;
use crate::validation::field_validators::{DateOfBirthError, FieldValidator, MINIMUM_PATIENT_AGE};
use crate::validation::password::{
    validate_patient_password, validate_provider_password, PasswordValidationError,
};
use crate::validation::rules::any_value;
use crate::validation::{FormSchema, RuleContext, RuleResult, ValidationRule};

pub type PatientRegistrationController = FormController<PatientRegistration>;
pub type ProviderRegistrationController = FormController<ProviderRegistration>;

fn check(passed: bool, message: &'static str) -> RuleResult {
    if passed {
        Ok(())
    } else {
        Err(message)
    }
}

/// Rule table of the patient sign-up screen.
pub struct PatientRegistration;

type PatientState = FormState<PatientField>;

fn patient_name(value: &FieldValue, _: &PatientState, _: &RuleContext) -> RuleResult {
    check(
        FieldValidator::has_length_between(value.as_text(), 2, 50),
        "2-50 characters required",
    )
}

fn patient_email(value: &FieldValue, _: &PatientState, _: &RuleContext) -> RuleResult {
    check(FieldValidator::is_email(value.as_text()), "Invalid email")
}

fn patient_phone(value: &FieldValue, _: &PatientState, _: &RuleContext) -> RuleResult {
    check(FieldValidator::is_phone(value.as_text()), "Invalid phone")
}

fn patient_password(value: &FieldValue, _: &PatientState, _: &RuleContext) -> RuleResult {
    validate_patient_password(value.as_text().trim())
        .map_err(|_| "Min 8 chars, upper/lower, number or symbol")
}

fn patient_confirm_password(value: &FieldValue, form: &PatientState, _: &RuleContext) -> RuleResult {
    check(
        value.as_text() == form.text(PatientField::Password),
        "Passwords do not match",
    )
}

fn patient_date_of_birth(value: &FieldValue, _: &PatientState, context: &RuleContext) -> RuleResult {
    match FieldValidator::validate_date_of_birth(value.as_text(), context.today, MINIMUM_PATIENT_AGE) {
        Ok(_) => Ok(()),
        Err(DateOfBirthError::Unparseable) => Err("Invalid date"),
        Err(DateOfBirthError::TooYoung) => Err("Must be at least 13 years old"),
    }
}

fn patient_gender(value: &FieldValue, _: &PatientState, _: &RuleContext) -> RuleResult {
    let known = GENDER_OPTIONS.iter().any(|(code, _)| *code == value.as_text().trim());
    check(known, "Invalid selection")
}

fn patient_street(value: &FieldValue, _: &PatientState, _: &RuleContext) -> RuleResult {
    check(FieldValidator::has_length_at_most(value.as_text(), 200), "Max 200 chars")
}

fn max_100(value: &FieldValue, _: &PatientState, _: &RuleContext) -> RuleResult {
    check(FieldValidator::has_length_at_most(value.as_text(), 100), "Max 100 chars")
}

fn max_50(value: &FieldValue, _: &PatientState, _: &RuleContext) -> RuleResult {
    check(FieldValidator::has_length_at_most(value.as_text(), 50), "Max 50 chars")
}

fn patient_zip(value: &FieldValue, _: &PatientState, _: &RuleContext) -> RuleResult {
    check(FieldValidator::is_postal_code(value.as_text()), "Invalid ZIP")
}

fn patient_medical_history(value: &FieldValue, _: &PatientState, _: &RuleContext) -> RuleResult {
    let known = value
        .as_list()
        .iter()
        .all(|condition| MEDICAL_CONDITIONS.contains(&condition.as_str()));
    check(known, "Unknown condition")
}

impl FormSchema for PatientRegistration {
    type Field = PatientField;

    const KIND: FormKind = FormKind::PatientRegistration;

    fn rule(field: PatientField) -> ValidationRule<PatientField> {
        match field {
            PatientField::FirstName | PatientField::LastName => patient_name,
            PatientField::Email => patient_email,
            PatientField::PhoneNumber | PatientField::EmergencyPhone => patient_phone,
            PatientField::Password => patient_password,
            PatientField::ConfirmPassword => patient_confirm_password,
            PatientField::DateOfBirth => patient_date_of_birth,
            PatientField::Gender => patient_gender,
            PatientField::Street => patient_street,
            PatientField::City | PatientField::EmergencyName => max_100,
            PatientField::State | PatientField::EmergencyRelationship => max_50,
            PatientField::Zip => patient_zip,
            PatientField::InsuranceProvider | PatientField::InsurancePolicy => any_value,
            PatientField::MedicalHistory => patient_medical_history,
        }
    }

    fn strength_field() -> Option<PatientField> {
        Some(PatientField::Password)
    }

    fn success_message() -> &'static str {
        "Registration successful! (Simulated)"
    }
}

/// Rule table of the provider sign-up screen.
pub struct ProviderRegistration;

type ProviderState = FormState<ProviderField>;

fn provider_email(value: &FieldValue, _: &ProviderState, _: &RuleContext) -> RuleResult {
    check(FieldValidator::is_email(value.as_text()), "Invalid email")
}

fn provider_phone(value: &FieldValue, _: &ProviderState, _: &RuleContext) -> RuleResult {
    check(FieldValidator::is_phone(value.as_text()), "Invalid phone number")
}

fn provider_license(value: &FieldValue, _: &ProviderState, _: &RuleContext) -> RuleResult {
    check(
        FieldValidator::is_license_number(value.as_text()),
        "Invalid license number",
    )
}

fn provider_specialization(value: &FieldValue, _: &ProviderState, _: &RuleContext) -> RuleResult {
    check(
        FieldValidator::is_one_of(value.as_text(), &SPECIALIZATIONS),
        "Invalid specialization",
    )
}

fn provider_experience(value: &FieldValue, _: &ProviderState, _: &RuleContext) -> RuleResult {
    check(
        FieldValidator::is_years_of_experience(value.as_text()),
        "Invalid experience",
    )
}

fn provider_practice_type(value: &FieldValue, _: &ProviderState, _: &RuleContext) -> RuleResult {
    check(
        FieldValidator::is_one_of(value.as_text(), &PRACTICE_TYPES),
        "Invalid practice type",
    )
}

fn provider_password(value: &FieldValue, _: &ProviderState, _: &RuleContext) -> RuleResult {
    validate_provider_password(value.as_text()).map_err(|e| match e {
        PasswordValidationError::TooShort => "Min 8 characters",
        _ => "At least one special character",
    })
}

fn provider_confirm_password(value: &FieldValue, form: &ProviderState, _: &RuleContext) -> RuleResult {
    check(
        value.as_text() == form.text(ProviderField::Password),
        "Passwords must match",
    )
}

impl FormSchema for ProviderRegistration {
    type Field = ProviderField;

    const KIND: FormKind = FormKind::ProviderRegistration;

    fn rule(field: ProviderField) -> ValidationRule<ProviderField> {
        match field {
            ProviderField::Email => provider_email,
            ProviderField::Phone => provider_phone,
            ProviderField::License => provider_license,
            ProviderField::Specialization => provider_specialization,
            ProviderField::Experience => provider_experience,
            ProviderField::PracticeType => provider_practice_type,
            ProviderField::Password => provider_password,
            ProviderField::ConfirmPassword => provider_confirm_password,
            ProviderField::FirstName
            | ProviderField::LastName
            | ProviderField::ProfilePhoto
            | ProviderField::Degree
            | ProviderField::ClinicName
            | ProviderField::ClinicAddress
            | ProviderField::Terms => any_value,
        }
    }

    fn required_message(field: ProviderField) -> &'static str {
        match field {
            ProviderField::FirstName => "First name is required",
            ProviderField::LastName => "Last name is required",
            ProviderField::Email => "Email is required",
            ProviderField::Phone => "Phone number is required",
            ProviderField::ProfilePhoto => "Profile photo is required",
            ProviderField::License => "Medical license number is required",
            ProviderField::Specialization => "Specialization is required",
            ProviderField::Experience => "Experience is required",
            ProviderField::Degree => "Medical degree is required",
            ProviderField::ClinicName => "Clinic/Hospital name is required",
            ProviderField::ClinicAddress => "Clinic address is required",
            ProviderField::PracticeType => "Practice type is required",
            ProviderField::Password => "Password is required",
            ProviderField::ConfirmPassword => "Confirm your password",
            ProviderField::Terms => "You must accept the terms",
        }
    }

    fn strength_field() -> Option<ProviderField> {
        Some(ProviderField::Password)
    }

    fn success_message() -> &'static str {
        "Registration Successful! Please check your email for verification and next steps."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::controller::SubmitError;
    use crate::gateway::{SimulatedGateway, SubmitOutcome};
    use crate::test_helpers::*;
    use models::form_state::{FormField, FormState};
    use models::kinds::{OptionalSection, SubmitPhase};
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_valid_patient_registration_resets_form() {
        let mut form = filled_patient_form();
        let gateway = SimulatedGateway::new();
        assert!(form.can_submit());

        let started = tokio::time::Instant::now();
        let outcome = form.submit(&gateway).await;

        assert_eq!(outcome, Ok(SubmitOutcome::Registered));
        assert!(started.elapsed() >= Duration::from_millis(1200));
        assert_eq!(form.phase(), SubmitPhase::Succeeded);
        assert_eq!(
            form.success_message(),
            Some("Registration successful! (Simulated)")
        );
        assert_eq!(form.state(), &FormState::new());
        assert!(form.errors().is_empty());
        assert!(form.touched().is_empty());
        assert_eq!(form.displayed_error(PatientField::FirstName), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mismatched_confirmation_blocks_submit() {
        let mut form = filled_patient_form();
        form.on_change(PatientField::ConfirmPassword, "Different#Pass9");
        let gateway = SimulatedGateway::new();

        assert!(!form.can_submit());
        let result = form.submit(&gateway).await;

        assert!(matches!(result, Err(SubmitError::Invalid(_))));
        assert_eq!(
            form.displayed_error(PatientField::ConfirmPassword),
            Some("Passwords do not match")
        );
        assert_eq!(form.phase(), SubmitPhase::Editing);
        assert_eq!(form.success_message(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_optional_section_blocks_only_while_shown() {
        let mut form = filled_patient_form();
        form.toggle_section(OptionalSection::EmergencyContact);
        form.on_change(PatientField::EmergencyPhone, "12");
        let gateway = SimulatedGateway::new();

        let result = form.submit(&gateway).await;
        assert!(matches!(result, Err(SubmitError::Invalid(_))));
        assert_eq!(
            form.displayed_error(PatientField::EmergencyPhone),
            Some("Invalid phone")
        );

        form.toggle_section(OptionalSection::EmergencyContact);
        assert_eq!(form.submit(&gateway).await, Ok(SubmitOutcome::Registered));
    }

    #[test]
    fn test_patient_rules() {
        let context = fixed_context();
        let mut state = filled_patient_form().state().clone();
        let check = |state: &FormState<PatientField>, field| {
            PatientRegistration::check(field, state, &context)
        };

        for field in PatientField::ALL {
            assert_eq!(check(&state, *field), None, "{field:?}");
        }

        state.set(PatientField::FirstName, "J");
        assert_eq!(check(&state, PatientField::FirstName), Some("2-50 characters required"));
        state.set(PatientField::Password, "weakpass");
        assert_eq!(
            check(&state, PatientField::Password),
            Some("Min 8 chars, upper/lower, number or symbol")
        );
        state.set(PatientField::DateOfBirth, "2020-01-01");
        assert_eq!(
            check(&state, PatientField::DateOfBirth),
            Some("Must be at least 13 years old")
        );
        state.set(PatientField::DateOfBirth, "01/01/1990");
        assert_eq!(check(&state, PatientField::DateOfBirth), Some("Invalid date"));
        state.set(PatientField::Gender, "unknown");
        assert_eq!(check(&state, PatientField::Gender), Some("Invalid selection"));
        state.set(PatientField::State, "x".repeat(51));
        assert_eq!(check(&state, PatientField::State), Some("Max 50 chars"));
        state.set(PatientField::MedicalHistory, vec!["Flu".to_string()]);
        assert_eq!(
            check(&state, PatientField::MedicalHistory),
            Some("Unknown condition")
        );
        state.set(PatientField::EmergencyName, "");
        assert_eq!(check(&state, PatientField::EmergencyName), None);
    }

    #[test]
    fn test_malformed_emails_report_format_error() {
        let context = fixed_context();
        let mut state = FormState::<PatientField>::new();
        for email in ["jane", "jane.example.com", "jane@example", "jane@"] {
            state.set(PatientField::Email, email);
            assert_eq!(
                PatientRegistration::check(PatientField::Email, &state, &context),
                Some("Invalid email"),
                "{email}"
            );
        }
    }

    #[test]
    fn test_provider_rules() {
        let context = fixed_context();
        let mut state = filled_provider_form().state().clone();
        let check = |state: &FormState<ProviderField>, field| {
            ProviderRegistration::check(field, state, &context)
        };

        for field in ProviderField::ALL {
            assert_eq!(check(&state, *field), None, "{field:?}");
        }

        state.set(ProviderField::Terms, false);
        assert_eq!(check(&state, ProviderField::Terms), Some("You must accept the terms"));
        state.set(ProviderField::ProfilePhoto, "");
        assert_eq!(
            check(&state, ProviderField::ProfilePhoto),
            Some("Profile photo is required")
        );
        state.set(ProviderField::License, "12");
        assert_eq!(check(&state, ProviderField::License), Some("Invalid license number"));
        state.set(ProviderField::Experience, "75");
        assert_eq!(check(&state, ProviderField::Experience), Some("Invalid experience"));
        state.set(ProviderField::Specialization, "Astrology");
        assert_eq!(
            check(&state, ProviderField::Specialization),
            Some("Invalid specialization")
        );
        state.set(ProviderField::Password, "short!");
        assert_eq!(check(&state, ProviderField::Password), Some("Min 8 characters"));
        state.set(ProviderField::Password, "longenough");
        assert_eq!(
            check(&state, ProviderField::Password),
            Some("At least one special character")
        );
        state.set(ProviderField::Password, "long_enough-1");
        assert_eq!(
            check(&state, ProviderField::Password),
            Some("At least one special character")
        );
        assert_eq!(
            check(&state, ProviderField::ConfirmPassword),
            Some("Passwords must match")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_provider_registration_succeeds() {
        let mut form = filled_provider_form();
        let gateway = SimulatedGateway::new();

        assert_eq!(form.submit(&gateway).await, Ok(SubmitOutcome::Registered));
        assert!(form
            .success_message()
            .unwrap()
            .starts_with("Registration Successful!"));
        assert_eq!(form.value(ProviderField::Terms), &FieldValue::Flag(false));
    }
}
