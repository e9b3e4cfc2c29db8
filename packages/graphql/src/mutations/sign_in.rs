use async_graphql::{Context, InputObject, Object, Result, SimpleObject, Union};
use models::kinds::{Portal, Screen};
use models::login::{PatientLoginField, ProviderLoginField};
use services::{
    Clock, GatewayError, PatientLoginController, ProviderLoginController, SimulatedGateway,
    SubmitError, SubmitOutcome,
};
use std::sync::Arc;

use crate::errors::{AuthError, ValidationErrorType};

#[derive(InputObject)]
pub struct SignInInput {
    pub portal: Portal,
    /// Email, or phone number on the provider portal
    pub identifier: String,
    pub password: String,
    pub remember_me: Option<bool>,
}

#[derive(SimpleObject)]
pub struct SignedIn {
    pub redirect: Screen,
    pub message: String,
}

#[derive(Union)]
pub enum SignInResult {
    SignedIn(SignedIn),
    ValidationError(ValidationErrorType),
    AuthError(AuthError),
}

impl SignInResult {
    fn from_submit(
        result: Result<SubmitOutcome, SubmitError>,
        message: Option<&str>,
    ) -> Self {
        match result {
            Ok(SubmitOutcome::SignedIn(redirect)) => SignInResult::SignedIn(SignedIn {
                redirect,
                message: message.unwrap_or_default().to_string(),
            }),
            Ok(SubmitOutcome::Registered) => SignInResult::AuthError(AuthError {
                message: "Unexpected registration outcome".to_string(),
            }),
            Err(SubmitError::Invalid(errors)) => SignInResult::ValidationError(errors.into()),
            Err(SubmitError::Gateway(GatewayError::Rejected(errors))) => {
                SignInResult::ValidationError(errors.into())
            }
            Err(e) => SignInResult::AuthError(AuthError { message: e.to_string() }),
        }
    }
}

/// Runs a whole login form in one request without keeping a session.
pub(super) async fn sign_in(ctx: &Context<'_>, input: SignInInput) -> Result<SignInResult> {
    let gateway = ctx.data::<SimulatedGateway>()?;
    let clock = ctx.data::<Arc<dyn Clock>>()?.clone();

    let result = match input.portal {
        Portal::Provider => {
            let mut form = ProviderLoginController::with_clock(clock);
            form.on_change(ProviderLoginField::Identifier, input.identifier);
            form.on_change(ProviderLoginField::Password, input.password);
            form.on_change(ProviderLoginField::RememberMe, input.remember_me.unwrap_or(false));
            let outcome = form.submit(gateway).await;
            SignInResult::from_submit(outcome, form.success_message())
        }
        Portal::Patient => {
            let mut form = PatientLoginController::with_clock(clock);
            form.on_change(PatientLoginField::Email, input.identifier);
            form.on_change(PatientLoginField::Password, input.password);
            let outcome = form.submit(gateway).await;
            SignInResult::from_submit(outcome, form.success_message())
        }
    };
    Ok(result)
}

#[derive(Default)]
pub struct SignInMutation;

#[Object]
impl SignInMutation {
    async fn sign_in(&self, ctx: &Context<'_>, input: SignInInput) -> Result<SignInResult> {
        sign_in(ctx, input).await
    }
}
