use async_graphql::{Context, Object, Result, Union};
use models::kinds::{FormKind, OptionalSection};
use services::{gateway, GatewayError, SimulatedGateway, SubmitError};
use uuid::Uuid;

use crate::errors::{AuthError, SessionError, ValidationErrorType};
use crate::types::{FieldValueInput, FormView};
use crate::utilities::FormSessions;

#[derive(Union)]
pub enum FormMutationResult {
    Form(FormView),
    ValidationError(ValidationErrorType),
    AuthError(AuthError),
    SessionError(SessionError),
}

fn form_result(
    sessions: &FormSessions,
    session_id: Uuid,
    result: Result<(), ValidationErrorType>,
) -> FormMutationResult {
    match result {
        Ok(()) => match sessions.snapshot(&session_id) {
            Some(snapshot) => FormMutationResult::Form(FormView::new(session_id, snapshot)),
            None => FormMutationResult::SessionError(SessionError::not_found()),
        },
        Err(e) => FormMutationResult::ValidationError(e),
    }
}

#[derive(Default)]
pub struct FormMutation;

#[Object]
impl FormMutation {
    /// Starts a fresh form session with default values
    async fn open_form(&self, ctx: &Context<'_>, kind: FormKind) -> Result<FormView> {
        let sessions = ctx.data::<FormSessions>()?;
        let (session_id, snapshot) = sessions.open(kind);
        Ok(FormView::new(session_id, snapshot))
    }

    async fn change_field(
        &self,
        ctx: &Context<'_>,
        session_id: Uuid,
        field: String,
        value: FieldValueInput,
    ) -> Result<FormMutationResult> {
        let sessions = ctx.data::<FormSessions>()?;
        Ok(
            match sessions.with_session(&session_id, |s| s.change(&field, value.into())) {
                Ok(changed) => form_result(sessions, session_id, changed.map_err(Into::into)),
                Err(e) => FormMutationResult::SessionError(e),
            },
        )
    }

    async fn blur_field(
        &self,
        ctx: &Context<'_>,
        session_id: Uuid,
        field: String,
    ) -> Result<FormMutationResult> {
        let sessions = ctx.data::<FormSessions>()?;
        Ok(match sessions.with_session(&session_id, |s| s.blur(&field)) {
            Ok(blurred) => form_result(sessions, session_id, blurred.map_err(Into::into)),
            Err(e) => FormMutationResult::SessionError(e),
        })
    }

    async fn toggle_section(
        &self,
        ctx: &Context<'_>,
        session_id: Uuid,
        section: OptionalSection,
    ) -> Result<FormMutationResult> {
        let sessions = ctx.data::<FormSessions>()?;
        Ok(
            match sessions.with_session(&session_id, |s| s.toggle_section(section)) {
                Ok(Some(_)) => form_result(sessions, session_id, Ok(())),
                Ok(None) => FormMutationResult::SessionError(SessionError {
                    message: format!("This form has no {} section", section.title()),
                }),
                Err(e) => FormMutationResult::SessionError(e),
            },
        )
    }

    async fn toggle_password_visibility(
        &self,
        ctx: &Context<'_>,
        session_id: Uuid,
        field: String,
    ) -> Result<FormMutationResult> {
        let sessions = ctx.data::<FormSessions>()?;
        Ok(
            match sessions.with_session(&session_id, |s| s.toggle_reveal(&field)) {
                Ok(toggled) => {
                    form_result(sessions, session_id, toggled.map(|_| ()).map_err(Into::into))
                }
                Err(e) => FormMutationResult::SessionError(e),
            },
        )
    }

    /// Validates the form and, when it passes, runs the simulated remote call
    async fn submit_form(&self, ctx: &Context<'_>, session_id: Uuid) -> Result<FormMutationResult> {
        let sessions = ctx.data::<FormSessions>()?;
        let portal_gateway = ctx.data::<SimulatedGateway>()?;

        let submission = match sessions.with_session(&session_id, |s| s.begin_submit()) {
            Ok(Ok(submission)) => submission,
            Ok(Err(SubmitError::Invalid(errors))) => {
                return Ok(FormMutationResult::ValidationError(errors.into()))
            }
            Ok(Err(e)) => {
                return Ok(FormMutationResult::SessionError(SessionError {
                    message: e.to_string(),
                }))
            }
            Err(e) => return Ok(FormMutationResult::SessionError(e)),
        };

        let result = gateway::send(portal_gateway, submission).await;

        Ok(
            match sessions.with_session(&session_id, |s| s.finish_submit(result)) {
                Ok(Err(SubmitError::Gateway(e @ GatewayError::InvalidCredentials))) => {
                    FormMutationResult::AuthError(e.into())
                }
                Ok(_) => form_result(sessions, session_id, Ok(())),
                Err(e) => {
                    tracing::warn!(session_id = %session_id, "form closed during submission");
                    FormMutationResult::SessionError(e)
                }
            },
        )
    }

    async fn close_form(&self, ctx: &Context<'_>, session_id: Uuid) -> Result<bool> {
        let sessions = ctx.data::<FormSessions>()?;
        Ok(sessions.close(&session_id))
    }
}
