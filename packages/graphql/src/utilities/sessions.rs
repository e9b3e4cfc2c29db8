use dashmap::DashMap;
use models::form_state::FieldValue;
use models::kinds::{FormKind, OptionalSection};
use services::{
    Clock, FormSnapshot, GatewayError, PatientLoginController, PatientRegistrationController,
    ProviderLoginController, ProviderRegistrationController, Submission, SubmitError,
    SubmitOutcome, UnknownField,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use uuid::Uuid;

use crate::errors::SessionError;

/// One open form screen.
pub enum FormSession {
    ProviderLogin(ProviderLoginController),
    PatientLogin(PatientLoginController),
    ProviderRegistration(ProviderRegistrationController),
    PatientRegistration(PatientRegistrationController),
}

macro_rules! with_form {
    ($session:expr, $form:ident => $body:expr) => {
        match $session {
            FormSession::ProviderLogin($form) => $body,
            FormSession::PatientLogin($form) => $body,
            FormSession::ProviderRegistration($form) => $body,
            FormSession::PatientRegistration($form) => $body,
        }
    };
}

impl FormSession {
    pub fn open(kind: FormKind, clock: Arc<dyn Clock>) -> Self {
        match kind {
            FormKind::ProviderLogin => {
                FormSession::ProviderLogin(ProviderLoginController::with_clock(clock))
            }
            FormKind::PatientLogin => {
                FormSession::PatientLogin(PatientLoginController::with_clock(clock))
            }
            FormKind::ProviderRegistration => FormSession::ProviderRegistration(
                ProviderRegistrationController::with_clock(clock),
            ),
            FormKind::PatientRegistration => FormSession::PatientRegistration(
                PatientRegistrationController::with_clock(clock),
            ),
        }
    }

    pub fn snapshot(&self) -> FormSnapshot {
        with_form!(self, form => form.snapshot())
    }

    pub fn change(&mut self, field: &str, value: FieldValue) -> Result<(), UnknownField> {
        with_form!(self, form => form.change_named(field, value))
    }

    pub fn blur(&mut self, field: &str) -> Result<(), UnknownField> {
        with_form!(self, form => form.blur_named(field))
    }

    pub fn toggle_reveal(&mut self, field: &str) -> Result<bool, UnknownField> {
        with_form!(self, form => form.toggle_reveal_named(field))
    }

    /// `None` when the form has no such section.
    pub fn toggle_section(&mut self, section: OptionalSection) -> Option<bool> {
        match self {
            FormSession::PatientRegistration(form) => {
                if PatientRegistrationController::has_section(section) {
                    Some(form.toggle_section(section))
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    pub fn begin_submit(&mut self) -> Result<Submission, SubmitError> {
        with_form!(self, form => form.begin_submit())
    }

    pub fn finish_submit(
        &mut self,
        result: Result<SubmitOutcome, GatewayError>,
    ) -> Result<SubmitOutcome, SubmitError> {
        with_form!(self, form => form.finish_submit(result))
    }
}

/// Most sessions kept at once; opening one more evicts the least recently used.
pub const MAX_OPEN_SESSIONS: usize = 10_000;
/// Sessions untouched for this long are dropped on the next open.
pub const SESSION_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

struct SessionEntry {
    session: FormSession,
    last_touched: Instant,
}

/// Open form sessions keyed by id.
///
/// Entry guards are only held inside the closures passed to [`Self::with_session`],
/// never across an await.
pub struct FormSessions {
    sessions: Arc<DashMap<Uuid, SessionEntry>>,
    clock: Arc<dyn Clock>,
    idle_timeout: Duration,
    max_sessions: usize,
}

impl FormSessions {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_limits(clock, SESSION_IDLE_TIMEOUT, MAX_OPEN_SESSIONS)
    }

    pub fn with_limits(clock: Arc<dyn Clock>, idle_timeout: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            clock,
            idle_timeout,
            max_sessions: max_sessions.max(1),
        }
    }

    pub fn open(&self, kind: FormKind) -> (Uuid, FormSnapshot) {
        self.evict_idle();
        while self.sessions.len() >= self.max_sessions {
            if !self.evict_oldest() {
                break;
            }
        }

        let id = Uuid::new_v4();
        let session = FormSession::open(kind, self.clock.clone());
        let snapshot = session.snapshot();
        self.sessions.insert(
            id,
            SessionEntry {
                session,
                last_touched: Instant::now(),
            },
        );
        tracing::debug!(session_id = %id, ?kind, "form session opened");
        (id, snapshot)
    }

    fn evict_idle(&self) {
        let now = Instant::now();
        let before = self.sessions.len();
        self.sessions
            .retain(|_, entry| now.duration_since(entry.last_touched) < self.idle_timeout);
        let evicted = before.saturating_sub(self.sessions.len());
        if evicted > 0 {
            tracing::debug!(evicted, "idle form sessions dropped");
        }
    }

    fn evict_oldest(&self) -> bool {
        let oldest = self
            .sessions
            .iter()
            .min_by_key(|entry| entry.last_touched)
            .map(|entry| *entry.key());
        match oldest {
            Some(id) => {
                tracing::debug!(session_id = %id, "form session evicted");
                self.sessions.remove(&id).is_some()
            }
            None => false,
        }
    }

    pub fn snapshot(&self, id: &Uuid) -> Option<FormSnapshot> {
        self.sessions.get(id).map(|entry| entry.session.snapshot())
    }

    pub fn with_session<T>(
        &self,
        id: &Uuid,
        f: impl FnOnce(&mut FormSession) -> T,
    ) -> Result<T, SessionError> {
        let mut entry = self.sessions.get_mut(id).ok_or_else(SessionError::not_found)?;
        entry.last_touched = Instant::now();
        Ok(f(&mut entry.session))
    }

    pub fn close(&self, id: &Uuid) -> bool {
        self.sessions.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
