use models::form_state::{FieldValue, FormState};
use models::kinds::FormKind;
use models::login::{PatientLoginField, ProviderLoginField};

use super::controller::FormController;
use crate::validation::field_validators::FieldValidator;
use crate::validation::rules::any_value;
use crate::validation::{FormSchema, RuleContext, RuleResult, ValidationRule};

pub type ProviderLoginController = FormController<ProviderLogin>;
pub type PatientLoginController = FormController<PatientLogin>;

pub const PROVIDER_MIN_PASSWORD_LENGTH: usize = 6;

const LOGIN_SUCCESS_MESSAGE: &str = "Login successful! Redirecting...";

/// Provider sign-in: email or phone, and a password of six or more characters.
pub struct ProviderLogin;

fn provider_identifier(
    value: &FieldValue,
    _: &FormState<ProviderLoginField>,
    _: &RuleContext,
) -> RuleResult {
    if FieldValidator::is_email_or_phone(value.as_text()) {
        Ok(())
    } else {
        Err("Enter a valid email or phone number.")
    }
}

fn provider_password(
    value: &FieldValue,
    _: &FormState<ProviderLoginField>,
    _: &RuleContext,
) -> RuleResult {
    if value.as_text().chars().count() >= PROVIDER_MIN_PASSWORD_LENGTH {
        Ok(())
    } else {
        Err("Password must be at least 6 characters.")
    }
}

impl FormSchema for ProviderLogin {
    type Field = ProviderLoginField;

    const KIND: FormKind = FormKind::ProviderLogin;

    fn rule(field: ProviderLoginField) -> ValidationRule<ProviderLoginField> {
        match field {
            ProviderLoginField::Identifier => provider_identifier,
            ProviderLoginField::Password => provider_password,
            ProviderLoginField::RememberMe => any_value,
        }
    }

    fn required_message(field: ProviderLoginField) -> &'static str {
        match field {
            ProviderLoginField::Password => "Password must be at least 6 characters.",
            _ => "Enter a valid email or phone number.",
        }
    }

    fn success_message() -> &'static str {
        LOGIN_SUCCESS_MESSAGE
    }
}

/// Patient sign-in: an email address and any non-blank password.
pub struct PatientLogin;

fn patient_email(
    value: &FieldValue,
    _: &FormState<PatientLoginField>,
    _: &RuleContext,
) -> RuleResult {
    if FieldValidator::is_email(value.as_text()) {
        Ok(())
    } else {
        Err("Enter a valid email.")
    }
}

impl FormSchema for PatientLogin {
    type Field = PatientLoginField;

    const KIND: FormKind = FormKind::PatientLogin;

    fn rule(field: PatientLoginField) -> ValidationRule<PatientLoginField> {
        match field {
            PatientLoginField::Email => patient_email,
            PatientLoginField::Password => any_value,
        }
    }

    fn required_message(field: PatientLoginField) -> &'static str {
        match field {
            PatientLoginField::Email => "Email is required.",
            PatientLoginField::Password => "Password is required.",
        }
    }

    fn success_message() -> &'static str {
        LOGIN_SUCCESS_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::controller::SubmitError;
    use crate::gateway::{GatewayError, SimulatedGateway, SubmitOutcome};
    use crate::test_helpers::*;
    use models::kinds::{Screen, SubmitPhase};
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_provider_demo_login_navigates_to_dashboard() {
        let mut form = ProviderLoginController::with_clock(fixed_clock());
        form.on_change(ProviderLoginField::Identifier, "provider@example.com");
        form.on_change(ProviderLoginField::Password, "password123");
        let gateway = SimulatedGateway::new();
        assert!(form.can_submit());

        let started = tokio::time::Instant::now();
        let outcome = form.submit(&gateway).await;

        assert_eq!(outcome, Ok(SubmitOutcome::SignedIn(Screen::ProviderDashboard)));
        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert_eq!(form.redirect(), Some(Screen::ProviderDashboard));
        assert_eq!(form.form_error(), None);
        assert_eq!(form.phase(), SubmitPhase::Succeeded);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_patient_sees_invalid_credentials() {
        let mut form = PatientLoginController::with_clock(fixed_clock());
        form.on_change(PatientLoginField::Email, "bad@x.com");
        form.on_change(PatientLoginField::Password, "x");
        let gateway = SimulatedGateway::new();

        let outcome = form.submit(&gateway).await;

        assert_eq!(
            outcome,
            Err(SubmitError::Gateway(GatewayError::InvalidCredentials))
        );
        assert!(form.form_error().unwrap().starts_with("Invalid credentials"));
        assert_eq!(form.redirect(), None);
        assert_eq!(form.phase(), SubmitPhase::Failed);
        // values survive a failed attempt
        assert_eq!(form.value(PatientLoginField::Email).as_text(), "bad@x.com");
    }

    #[tokio::test(start_paused = true)]
    async fn test_next_attempt_clears_banner() {
        let mut form = PatientLoginController::with_clock(fixed_clock());
        form.on_change(PatientLoginField::Email, "patient@example.com");
        form.on_change(PatientLoginField::Password, "wrongpass");
        let gateway = SimulatedGateway::new();
        assert!(form.submit(&gateway).await.is_err());

        form.on_change(PatientLoginField::Password, " password123 ");
        let outcome = form.submit(&gateway).await;

        assert_eq!(outcome, Ok(SubmitOutcome::SignedIn(Screen::PatientDashboard)));
        assert_eq!(form.form_error(), None);
        assert_eq!(form.success_message(), Some("Login successful! Redirecting..."));
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_provider_password_never_reaches_gateway() {
        let mut form = ProviderLoginController::with_clock(fixed_clock());
        form.on_change(ProviderLoginField::Identifier, "bad@x.com");
        form.on_change(ProviderLoginField::Password, "x");
        let gateway = SimulatedGateway::new();

        let started = tokio::time::Instant::now();
        let outcome = form.submit(&gateway).await;

        assert!(matches!(outcome, Err(SubmitError::Invalid(_))));
        assert_eq!(started.elapsed(), Duration::ZERO);
        assert_eq!(
            form.displayed_error(ProviderLoginField::Password),
            Some("Password must be at least 6 characters.")
        );
    }

    #[test]
    fn test_provider_identifier_accepts_phone() {
        let mut form = ProviderLoginController::with_clock(fixed_clock());
        form.on_change(ProviderLoginField::Identifier, "+15551234567");
        form.on_blur(ProviderLoginField::Identifier);
        assert_eq!(form.displayed_error(ProviderLoginField::Identifier), None);

        form.on_change(ProviderLoginField::Identifier, "provider");
        assert_eq!(
            form.displayed_error(ProviderLoginField::Identifier),
            Some("Enter a valid email or phone number.")
        );
    }

    #[test]
    fn test_patient_blur_on_empty_fields() {
        let mut form = PatientLoginController::with_clock(fixed_clock());
        form.on_blur(PatientLoginField::Email);
        form.on_blur(PatientLoginField::Password);

        assert_eq!(form.displayed_error(PatientLoginField::Email), Some("Email is required."));
        assert_eq!(
            form.displayed_error(PatientLoginField::Password),
            Some("Password is required.")
        );
        assert!(!form.can_submit());

        form.on_change(PatientLoginField::Email, "test@example.com");
        form.on_change(PatientLoginField::Password, "secret");
        assert!(form.can_submit());
    }

    #[test]
    fn test_remember_me_is_optional() {
        let mut form = ProviderLoginController::with_clock(fixed_clock());
        form.on_change(ProviderLoginField::Identifier, "provider@example.com");
        form.on_change(ProviderLoginField::Password, "password123");
        assert!(form.can_submit());

        form.on_change(ProviderLoginField::RememberMe, true);
        let submission = form.begin_submit().unwrap();
        assert_eq!(submission.fields["remember_me"], FieldValue::Flag(true));
    }
}
