use std::collections::BTreeSet;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use models::form_state::{FieldErrors, FieldValue, FormField, FormState, TouchedSet};
use models::kinds::{OptionalSection, Screen, SubmitPhase};

use super::snapshot::{FieldSnapshot, FormSnapshot, SectionSnapshot};
use crate::clock::{Clock, SystemClock};
use crate::gateway::{self, GatewayError, PortalGateway, Submission, SubmitOutcome};
use crate::validation::{FormSchema, PasswordStrength, RuleContext, ValidationError};

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// A submission is already in flight.
    InFlight,
    Invalid(ValidationError),
    Gateway(GatewayError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::InFlight => f.write_str("A submission is already in progress"),
            SubmitError::Invalid(e) => write!(f, "{}", e),
            SubmitError::Gateway(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SubmitError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown field: {}", self.0)
    }
}

impl std::error::Error for UnknownField {}

/// State and event handlers behind one form screen.
pub struct FormController<S: FormSchema> {
    state: FormState<S::Field>,
    errors: FieldErrors<S::Field>,
    touched: TouchedSet<S::Field>,
    visible_sections: BTreeSet<OptionalSection>,
    revealed: BTreeSet<S::Field>,
    submit_attempted: bool,
    phase: SubmitPhase,
    success_message: Option<String>,
    form_error: Option<String>,
    redirect: Option<Screen>,
    clock: Arc<dyn Clock>,
    _schema: PhantomData<fn() -> S>,
}

impl<S: FormSchema> FormController<S> {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        FormController {
            state: FormState::new(),
            errors: FieldErrors::new(),
            touched: TouchedSet::new(),
            visible_sections: BTreeSet::new(),
            revealed: BTreeSet::new(),
            submit_attempted: false,
            phase: SubmitPhase::Editing,
            success_message: None,
            form_error: None,
            redirect: None,
            clock,
            _schema: PhantomData,
        }
    }

    fn context(&self) -> RuleContext {
        RuleContext {
            today: self.clock.today(),
        }
    }

    pub fn state(&self) -> &FormState<S::Field> {
        &self.state
    }

    pub fn value(&self, field: S::Field) -> &FieldValue {
        self.state.get(field)
    }

    pub fn errors(&self) -> &FieldErrors<S::Field> {
        &self.errors
    }

    pub fn touched(&self) -> &TouchedSet<S::Field> {
        &self.touched
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    /// Banner error not tied to a single field.
    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    pub fn redirect(&self) -> Option<Screen> {
        self.redirect
    }

    /// Whether any field of this form belongs to `section`.
    pub fn has_section(section: OptionalSection) -> bool {
        S::Field::ALL
            .iter()
            .any(|field| field.section() == Some(section))
    }

    pub fn is_section_visible(&self, section: OptionalSection) -> bool {
        self.visible_sections.contains(&section)
    }

    /// Whether the field is rendered and validated right now.
    pub fn is_active(&self, field: S::Field) -> bool {
        field
            .section()
            .map_or(true, |section| self.is_section_visible(section))
    }

    pub fn is_revealed(&self, field: S::Field) -> bool {
        self.revealed.contains(&field)
    }

    pub fn on_change(&mut self, field: S::Field, value: impl Into<FieldValue>) {
        self.state.set(field, value);
        if self.touched.contains(field) {
            self.validate_field(field);
        }
    }

    pub fn on_blur(&mut self, field: S::Field) {
        self.touched.touch(field);
        self.validate_field(field);
    }

    fn validate_field(&mut self, field: S::Field) {
        let error = if self.is_active(field) {
            S::check(field, &self.state, &self.context()).map(str::to_string)
        } else {
            None
        };
        self.errors.set(field, error);
    }

    /// Shows or hides an optional section, returning its new visibility.
    pub fn toggle_section(&mut self, section: OptionalSection) -> bool {
        if self.visible_sections.remove(&section) {
            for field in S::Field::ALL.iter().copied() {
                if field.section() == Some(section) {
                    self.errors.set(field, None);
                }
            }
            false
        } else {
            self.visible_sections.insert(section);
            true
        }
    }

    /// Flips between masked and plain text for a password input.
    pub fn toggle_reveal(&mut self, field: S::Field) -> bool {
        if self.revealed.remove(&field) {
            false
        } else {
            self.revealed.insert(field);
            true
        }
    }

    /// The error to render under `field`, hidden until the user interacted with it.
    pub fn displayed_error(&self, field: S::Field) -> Option<&str> {
        if self.touched.contains(field) || self.submit_attempted {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// False while a submission is in flight or any required field fails its rule.
    pub fn can_submit(&self) -> bool {
        if self.phase == SubmitPhase::Submitting {
            return false;
        }
        let context = self.context();
        S::Field::ALL
            .iter()
            .copied()
            .filter(|field| field.is_required())
            .all(|field| S::check(field, &self.state, &context).is_none())
    }

    pub fn password_strength(&self) -> Option<PasswordStrength> {
        S::strength_field().map(|field| PasswordStrength::of(self.state.text(field)))
    }

    /// Touches and validates every active field, then enters `Submitting`.
    ///
    /// On validation failure nothing changes apart from the displayed errors.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitError> {
        if self.phase == SubmitPhase::Submitting {
            return Err(SubmitError::InFlight);
        }
        self.submit_attempted = true;
        self.form_error = None;

        let context = self.context();
        for field in S::Field::ALL.iter().copied() {
            if self.is_active(field) {
                self.touched.touch(field);
                let error = S::check(field, &self.state, &context).map(str::to_string);
                self.errors.set(field, error);
            } else {
                self.errors.set(field, None);
            }
        }

        if !self.errors.is_empty() {
            tracing::debug!(kind = ?S::KIND, errors = self.errors.len(), "submit blocked by validation");
            return Err(SubmitError::Invalid(ValidationError::from(&self.errors)));
        }

        self.phase = SubmitPhase::Submitting;
        self.success_message = None;
        self.redirect = None;
        tracing::info!(kind = ?S::KIND, "form submitted");
        Ok(self.submission())
    }

    fn submission(&self) -> Submission {
        let fields = self
            .state
            .iter()
            .filter(|(field, _)| self.is_active(*field))
            .map(|(field, value)| (field.name(), value.clone()))
            .collect();
        Submission {
            kind: S::KIND,
            fields,
        }
    }

    /// Applies the gateway's answer to a submission started with [`Self::begin_submit`].
    pub fn finish_submit(
        &mut self,
        result: Result<SubmitOutcome, GatewayError>,
    ) -> Result<SubmitOutcome, SubmitError> {
        match result {
            Ok(SubmitOutcome::Registered) => {
                self.state.reset();
                self.errors.clear();
                self.touched.clear();
                self.revealed.clear();
                self.submit_attempted = false;
                self.phase = SubmitPhase::Succeeded;
                self.success_message = Some(S::success_message().to_string());
                Ok(SubmitOutcome::Registered)
            }
            Ok(SubmitOutcome::SignedIn(screen)) => {
                self.phase = SubmitPhase::Succeeded;
                self.redirect = Some(screen);
                self.success_message = Some(S::success_message().to_string());
                Ok(SubmitOutcome::SignedIn(screen))
            }
            Err(GatewayError::Rejected(rejected)) => {
                self.phase = SubmitPhase::Failed;
                for (name, message) in &rejected.errors {
                    if let Some(field) = S::Field::from_name(name) {
                        self.errors.set(field, Some(message.clone()));
                    }
                }
                Err(SubmitError::Gateway(GatewayError::Rejected(rejected)))
            }
            Err(e) => {
                self.phase = SubmitPhase::Failed;
                self.form_error = Some(e.to_string());
                Err(SubmitError::Gateway(e))
            }
        }
    }

    /// Validates, performs the simulated call, and applies its outcome.
    pub async fn submit<G: PortalGateway>(
        &mut self,
        gateway: &G,
    ) -> Result<SubmitOutcome, SubmitError> {
        let submission = self.begin_submit()?;
        let result = gateway::send(gateway, submission).await;
        self.finish_submit(result)
    }

    pub fn field(name: &str) -> Result<S::Field, UnknownField> {
        S::Field::from_name(name).ok_or_else(|| UnknownField(name.to_string()))
    }

    pub fn change_named(
        &mut self,
        name: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), UnknownField> {
        let field = Self::field(name)?;
        self.on_change(field, value);
        Ok(())
    }

    pub fn blur_named(&mut self, name: &str) -> Result<(), UnknownField> {
        let field = Self::field(name)?;
        self.on_blur(field);
        Ok(())
    }

    pub fn toggle_reveal_named(&mut self, name: &str) -> Result<bool, UnknownField> {
        let field = Self::field(name)?;
        Ok(self.toggle_reveal(field))
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let fields = S::Field::ALL
            .iter()
            .copied()
            .map(|field| FieldSnapshot {
                name: field.name(),
                value: self.state.get(field).clone(),
                error: self.displayed_error(field).map(str::to_string),
                required: field.is_required(),
                section: field.section(),
                visible: self.is_active(field),
                revealed: self.is_revealed(field),
            })
            .collect();

        let sections = OptionalSection::ALL
            .iter()
            .copied()
            .filter(|section| Self::has_section(*section))
            .map(|section| SectionSnapshot {
                section,
                title: section.title(),
                visible: self.is_section_visible(section),
            })
            .collect();

        FormSnapshot {
            kind: S::KIND,
            fields,
            sections,
            can_submit: self.can_submit(),
            phase: self.phase,
            success_message: self.success_message.clone(),
            form_error: self.form_error.clone(),
            redirect: self.redirect,
            password_strength: self.password_strength(),
        }
    }
}

impl<S: FormSchema> Default for FormController<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: FormSchema> fmt::Debug for FormController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormController")
            .field("kind", &S::KIND)
            .field("phase", &self.phase)
            .field("errors", &self.errors)
            .field("touched", &self.touched)
            .field("visible_sections", &self.visible_sections)
            .finish_non_exhaustive()
    }
}
