use eyre::{Result, WrapErr, eyre};
use reqwest::{Client, RequestBuilder, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use types::LoginFormData;

/// What the auth service said about a set of credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignIn {
    Accepted,
    /// Rejected with the service's own message, e.g. "Invalid login credentials".
    Rejected(String),
}

/// Error body of the password grant. Different service versions put the
/// message in different fields.
#[derive(Debug, Deserialize)]
struct RejectionBody {
    msg: Option<String>,
    error_description: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl RejectionBody {
    fn into_message(self) -> Option<String> {
        self.msg
            .or(self.error_description)
            .or(self.message)
            .or(self.error)
            .filter(|m| !m.is_empty())
    }
}

#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    base_url: Url,
    api_key: SecretString,
}

impl AuthClient {
    pub fn new(mut base_url: Url, api_key: SecretString) -> Self {
        // Relative joins replace the last segment unless the path ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn post(&self, path: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(path)?;

        Ok(self
            .client
            .post(url)
            .header("apikey", self.api_key.expose_secret()))
    }

    /// Exchange an email and password for a session with the auth service.
    ///
    /// A 4xx answer carrying a message is a rejection; anything else that is
    /// not a 2xx is an error.
    pub async fn sign_in_with_password(&self, data: &LoginFormData) -> Result<SignIn> {
        let response = self
            .post("auth/v1/token")?
            .query(&[("grant_type", "password")])
            .json(&json!({
                "email": data.email,
                "password": data.password.expose_secret(),
            }))
            .send()
            .await
            .wrap_err("failed to reach auth service")?;

        let status = response.status();
        if status.is_success() {
            return Ok(SignIn::Accepted);
        }

        let body = response
            .bytes()
            .await
            .wrap_err("failed to read auth service response")?;

        if status.is_client_error() {
            if let Some(message) = serde_json::from_slice::<RejectionBody>(&body)
                .ok()
                .and_then(RejectionBody::into_message)
            {
                return Ok(SignIn::Rejected(message));
            }
        }

        Err(eyre!(
            "auth service returned {}: {}",
            status,
            String::from_utf8_lossy(&body)
        ))
    }
}
