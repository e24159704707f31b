use types::{DASHBOARD_PATH, LoginFormData, LoginOutcome, ValidationErrors, validation};

use crate::Authenticator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    /// A login request is in flight.
    Submitting,
    /// Login accepted. The form stays locked until it is torn down.
    Succeeded,
}

/// Everything the login form knows, independent of how it is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    email: String,
    password: String,
    errors: ValidationErrors,
    server_error: Option<String>,
    phase: Phase,
}

impl LoginState {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn server_error(&self) -> Option<&str> {
        self.server_error.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Inputs and the submit button are disabled while this is true.
    pub fn is_submitting(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn set_email(&mut self, email: String) {
        if !self.is_submitting() {
            self.email = email;
        }
    }

    pub fn set_password(&mut self, password: String) {
        if !self.is_submitting() {
            self.password = password;
        }
    }

    /// Validate the fields and, if they pass, lock the form and hand back the
    /// payload to send. Returns `None` when invalid or already submitting.
    pub fn begin_submit(&mut self) -> Option<LoginFormData> {
        if self.is_submitting() {
            return None;
        }

        let errors = validation::validate(&self.email, &self.password);
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }

        self.errors = ValidationErrors::default();
        self.server_error = None;
        self.phase = Phase::Submitting;

        Some(LoginFormData::new(self.email.clone(), self.password.clone()))
    }

    /// Apply the answer to an in-flight submission. Returns the path to
    /// navigate to on success.
    pub fn resolve(&mut self, outcome: LoginOutcome) -> Option<&'static str> {
        if self.phase != Phase::Submitting {
            return None;
        }

        match outcome {
            LoginOutcome::Success => {
                self.phase = Phase::Succeeded;
                Some(DASHBOARD_PATH)
            }
            LoginOutcome::Failure { error } => {
                self.server_error = Some(error);
                self.phase = Phase::Idle;
                None
            }
        }
    }
}

/// Somewhere a [`LoginState`] lives, borrowed only for the length of `f`.
pub trait UpdateState {
    fn update<R>(&mut self, f: impl FnOnce(&mut LoginState) -> R) -> R;
}

impl UpdateState for &mut LoginState {
    fn update<R>(&mut self, f: impl FnOnce(&mut LoginState) -> R) -> R {
        f(self)
    }
}

/// Run one full submission: validate, authenticate, apply the result.
///
/// The state is not borrowed across the authentication call, so a UI can
/// render the locked form while it is pending.
pub async fn submit<S, A>(mut state: S, auth: &A) -> Option<&'static str>
where
    S: UpdateState,
    A: Authenticator,
{
    let Some(data) = state.update(LoginState::begin_submit) else {
        tracing::debug!("login form not submitted");
        return None;
    };

    let outcome = auth.authenticate(data).await;
    tracing::debug!(success = outcome.is_success(), "login finished");

    state.update(|s| s.resolve(outcome))
}
