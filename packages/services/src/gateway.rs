use models::form_state::FieldValue;
use models::kinds::{FormKind, Portal, Screen};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::time::Duration;

use crate::validation::ValidationError;

pub const PROVIDER_DEMO_ACCOUNT: (&str, &str) = ("provider@example.com", "password123");
pub const PATIENT_DEMO_ACCOUNT: (&str, &str) = ("patient@example.com", "password123");

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials. Please try again.";

/// Values of the active fields of a form, keyed by wire name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub kind: FormKind,
    pub fields: BTreeMap<&'static str, FieldValue>,
}

impl Submission {
    pub fn text(&self, name: &str) -> &str {
        self.fields.get(name).map(FieldValue::as_text).unwrap_or("")
    }

    /// Login pair carried by this submission; patient input is trimmed first.
    pub fn credentials(&self) -> Credentials {
        let identifier = if self.fields.contains_key("identifier") {
            self.text("identifier")
        } else {
            self.text("email")
        };
        let credentials = Credentials::new(identifier, self.text("password"));
        match self.kind.portal() {
            Portal::Patient => credentials.sanitized(),
            Portal::Provider => credentials,
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub identifier: String,
    pub password: String,
}

impl Credentials {
    pub fn new(identifier: &str, password: &str) -> Self {
        Credentials {
            identifier: identifier.to_string(),
            password: password.to_string(),
        }
    }

    pub fn sanitized(self) -> Self {
        Credentials {
            identifier: self.identifier.trim().to_string(),
            password: self.password.trim().to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GatewayError {
    InvalidCredentials,
    /// The remote side refused individual fields.
    Rejected(ValidationError),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::InvalidCredentials => f.write_str(INVALID_CREDENTIALS_MESSAGE),
            GatewayError::Rejected(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for GatewayError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    SignedIn(Screen),
    Registered,
}

/// The remote collaborator behind the login and registration screens.
pub trait PortalGateway: Send + Sync {
    fn sign_in(
        &self,
        portal: Portal,
        credentials: Credentials,
    ) -> impl Future<Output = Result<Screen, GatewayError>> + Send;

    fn register(
        &self,
        submission: Submission,
    ) -> impl Future<Output = Result<(), GatewayError>> + Send;
}

/// Routes a submission to the matching gateway call.
pub async fn send<G: PortalGateway>(
    gateway: &G,
    submission: Submission,
) -> Result<SubmitOutcome, GatewayError> {
    if submission.kind.is_login() {
        let portal = submission.kind.portal();
        let screen = gateway.sign_in(portal, submission.credentials()).await?;
        Ok(SubmitOutcome::SignedIn(screen))
    } else {
        gateway.register(submission).await?;
        Ok(SubmitOutcome::Registered)
    }
}

/// Stands in for the backend: waits a fixed delay, then decides locally.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Option<Duration>,
    accounts: Vec<(Portal, Credentials)>,
}

impl SimulatedGateway {
    pub fn new() -> Self {
        SimulatedGateway {
            delay: None,
            accounts: vec![
                (
                    Portal::Provider,
                    Credentials::new(PROVIDER_DEMO_ACCOUNT.0, PROVIDER_DEMO_ACCOUNT.1),
                ),
                (
                    Portal::Patient,
                    Credentials::new(PATIENT_DEMO_ACCOUNT.0, PATIENT_DEMO_ACCOUNT.1),
                ),
            ],
        }
    }

    /// Uses `delay` for every portal instead of the per-portal defaults.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn delay_for(&self, portal: Portal) -> Duration {
        self.delay.unwrap_or(match portal {
            Portal::Provider => Duration::from_millis(1500),
            Portal::Patient => Duration::from_millis(1200),
        })
    }

    fn accepts(&self, portal: Portal, credentials: &Credentials) -> bool {
        self.accounts
            .iter()
            .any(|(account_portal, account)| *account_portal == portal && account == credentials)
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl PortalGateway for SimulatedGateway {
    async fn sign_in(&self, portal: Portal, credentials: Credentials) -> Result<Screen, GatewayError> {
        let delay = self.delay_for(portal);
        tracing::debug!(?portal, delay_ms = delay.as_millis() as u64, "simulated sign-in");
        tokio::time::sleep(delay).await;

        if !self.accepts(portal, &credentials) {
            tracing::warn!(?portal, "signin failed: invalid credentials");
            return Err(GatewayError::InvalidCredentials);
        }
        tracing::info!(?portal, "signin success");
        Ok(portal.dashboard())
    }

    async fn register(&self, submission: Submission) -> Result<(), GatewayError> {
        let delay = self.delay_for(submission.kind.portal());
        tracing::debug!(kind = ?submission.kind, delay_ms = delay.as_millis() as u64, "simulated registration");
        tokio::time::sleep(delay).await;

        tracing::info!(kind = ?submission.kind, fields = submission.fields.len(), "registration accepted");
        Ok(())
    }
}
