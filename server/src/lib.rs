mod auth;
mod config;

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;
use types::{LoginFormData, LoginOutcome, Result, err};

pub use crate::auth::{AuthClient, SignIn};
pub use crate::config::Config;

/// Shown when the auth service could not give an answer at all.
pub const SERVICE_UNAVAILABLE: &str = "Authentication service unavailable";

static AUTH_CLIENT: OnceLock<AuthClient> = OnceLock::new();

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Load configuration and build the auth client. Later calls are no-ops.
pub fn init() -> Result<()> {
    if AUTH_CLIENT.get().is_some() {
        return Ok(());
    }

    install(&AUTH_CLIENT, Config::from_env()?);
    Ok(())
}

/// Put a client built from `config` into `slot` unless one is already there.
/// Returns whether this call's client was kept.
fn install(slot: &OnceLock<AuthClient>, config: Config) -> bool {
    let client = AuthClient::new(config.auth_url, config.auth_api_key);
    let base_url = client.base_url().clone();

    match slot.set(client) {
        Ok(()) => {
            tracing::info!(auth_url = %base_url, "using auth service");
            true
        }
        Err(_) => {
            tracing::warn!(
                auth_url = %base_url,
                "auth client already installed by a concurrent init, keeping the first"
            );
            false
        }
    }
}

fn auth_client() -> Result<&'static AuthClient> {
    AUTH_CLIENT
        .get()
        .ok_or_else(|| err!("server not initialized"))
}

/// Sign a user in with the configured auth service.
pub async fn authenticate(data: LoginFormData) -> LoginOutcome {
    match auth_client() {
        Ok(client) => authenticate_with(client, &data).await,
        Err(error) => {
            tracing::error!(%error, "login attempted before init");
            LoginOutcome::failure(SERVICE_UNAVAILABLE)
        }
    }
}

pub async fn authenticate_with(client: &AuthClient, data: &LoginFormData) -> LoginOutcome {
    // The browser checks these too, but requests can come from anywhere.
    if let Some(error) = data.validate().first() {
        tracing::warn!(email = %data.email, %error, "rejected malformed login");
        return LoginOutcome::failure(error.to_string());
    }

    tracing::info!(email = %data.email, "login attempt");

    match client.sign_in_with_password(data).await {
        Ok(SignIn::Accepted) => {
            tracing::info!(email = %data.email, "login succeeded");
            LoginOutcome::Success
        }
        Ok(SignIn::Rejected(message)) => {
            tracing::warn!(email = %data.email, %message, "login rejected");
            LoginOutcome::failure(message)
        }
        Err(error) => {
            tracing::error!(?error, "auth service request failed");
            LoginOutcome::failure(SERVICE_UNAVAILABLE)
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Url;
    use secrecy::SecretString;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn mock_token_endpoint(status: u16, body: serde_json::Value, calls: u64) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .expect(calls)
            .mount(&server)
            .await;
        server
    }

    fn client_for(server: &MockServer) -> AuthClient {
        AuthClient::new(
            Url::parse(&server.uri()).unwrap(),
            SecretString::from("anon-key"),
        )
    }

    fn config(url: &str) -> Config {
        Config {
            auth_url: Url::parse(url).unwrap(),
            auth_api_key: SecretString::from("anon-key"),
        }
    }

    #[test]
    fn second_install_keeps_first_client() {
        let slot = OnceLock::new();

        assert!(install(&slot, config("https://first.example.com")));
        assert!(!install(&slot, config("https://second.example.com")));

        assert_eq!(
            slot.get().unwrap().base_url().as_str(),
            "https://first.example.com/"
        );
    }

    #[tokio::test]
    async fn rejection_without_message_is_generic() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = authenticate_with(
            &client_for(&server),
            &LoginFormData::new("test@example.com", "password123"),
        )
        .await;

        assert_eq!(outcome, LoginOutcome::failure(SERVICE_UNAVAILABLE));
    }

    #[tokio::test]
    async fn rejection_with_html_body_is_generic() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(403).set_body_string("<html>Forbidden</html>"),
            )
            .mount(&server)
            .await;

        let outcome = authenticate_with(
            &client_for(&server),
            &LoginFormData::new("test@example.com", "password123"),
        )
        .await;

        assert_eq!(outcome, LoginOutcome::failure(SERVICE_UNAVAILABLE));
    }

    #[tokio::test]
    async fn accepted_credentials_succeed() {
        let server = mock_token_endpoint(200, json!({ "access_token": "token" }), 1).await;

        let outcome = authenticate_with(
            &client_for(&server),
            &LoginFormData::new("test@example.com", "password123"),
        )
        .await;

        assert_eq!(outcome, LoginOutcome::Success);
    }

    #[tokio::test]
    async fn rejected_credentials_surface_message() {
        let server =
            mock_token_endpoint(400, json!({ "msg": "Invalid login credentials" }), 1).await;

        let outcome = authenticate_with(
            &client_for(&server),
            &LoginFormData::new("test@example.com", "password123"),
        )
        .await;

        assert_eq!(outcome, LoginOutcome::failure("Invalid login credentials"));
    }

    #[tokio::test]
    async fn upstream_failure_is_generic() {
        let server = mock_token_endpoint(500, json!({ "msg": "boom" }), 1).await;

        let outcome = authenticate_with(
            &client_for(&server),
            &LoginFormData::new("test@example.com", "password123"),
        )
        .await;

        assert_eq!(outcome, LoginOutcome::failure(SERVICE_UNAVAILABLE));
    }

    #[tokio::test]
    async fn malformed_payload_never_reaches_service() {
        let server = mock_token_endpoint(200, json!({}), 0).await;

        let outcome = authenticate_with(
            &client_for(&server),
            &LoginFormData::new("invalidexample.com", "password123"),
        )
        .await;

        assert_eq!(outcome, LoginOutcome::failure("Invalid email"));
    }
}
