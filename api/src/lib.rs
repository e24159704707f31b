use dioxus::prelude::*;
use types::{LoginFormData, LoginOutcome};

/// Sign in with an email and password.
///
/// Rejections come back as [`LoginOutcome::Failure`] rather than an error, so
/// the form can show the message as-is.
#[post("/api/login")]
pub async fn login(form: LoginFormData) -> ServerFnResult<LoginOutcome> {
    Ok(server::authenticate(form).await)
}
