//! Shared components for the Cosmos front-end.

mod auth;
mod login_form;
mod spinner;

pub use auth::{Authenticator, ServerAuthenticator};
pub use login_form::{LoginForm, LoginFormView, LoginState, Phase, UpdateState, submit};
pub use spinner::LoadingSpinner;
