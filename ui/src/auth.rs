use types::{LoginFormData, LoginOutcome};

/// Something that can check a set of credentials.
#[allow(async_fn_in_trait)]
pub trait Authenticator {
    async fn authenticate(&self, data: LoginFormData) -> LoginOutcome;
}

/// Authenticates through the `/api/login` server function.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerAuthenticator;

impl Authenticator for ServerAuthenticator {
    async fn authenticate(&self, data: LoginFormData) -> LoginOutcome {
        match api::login(data).await {
            Ok(outcome) => outcome,
            Err(error) => {
                tracing::warn!(%error, "login request failed");
                LoginOutcome::failure(error.to_string())
            }
        }
    }
}
