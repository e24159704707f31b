mod error;
mod login;
pub mod validation;

pub use error::{Error, Result};
pub use login::{DASHBOARD_PATH, LoginFormData, LoginOutcome};
pub use validation::{Field, FieldError, ValidationErrors};

// FIXME: We can do this better I think.
#[doc(hidden)]
pub use eyre::eyre as internal_eyre_dont_use;
