use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::validation::{self, ValidationErrors};

/// Where the browser is sent once a login succeeds.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// The form-data payload handed to the authentication service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginFormData {
    pub email: String,
    #[serde(with = "secret_string")]
    pub password: SecretString,
}

impl LoginFormData {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Run the field rules against this payload.
    pub fn validate(&self) -> ValidationErrors {
        validation::validate(&self.email, self.password.expose_secret())
    }
}

/// Result of an authentication attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginOutcome {
    Success,
    Failure { error: String },
}

impl LoginOutcome {
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

mod secret_string {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use secrecy::ExposeSecret;
        serializer.serialize_str(secret.expose_secret())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.into())
    }
}
