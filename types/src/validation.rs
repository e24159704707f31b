//! Field rules shared by the login form and the server.

use std::{collections::BTreeMap, fmt, sync::LazyLock};

use regex::Regex;

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    // local-part "@" domain "." tld, no whitespace and a single '@'
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required(Field),
    InvalidFormat,
    TooShort,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required(Field::Email) => write!(f, "Email required"),
            FieldError::Required(Field::Password) => write!(f, "Password required"),
            FieldError::InvalidFormat => write!(f, "Invalid email"),
            FieldError::TooShort => write!(
                f,
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            ),
        }
    }
}

/// One error per failing field, rebuilt from scratch on every check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The first failing field in form order.
    pub fn first(&self) -> Option<FieldError> {
        self.0.values().next().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }
}

pub fn validate_email(email: &str) -> Option<FieldError> {
    if email.is_empty() {
        Some(FieldError::Required(Field::Email))
    } else if !EMAIL_SHAPE.is_match(email) {
        Some(FieldError::InvalidFormat)
    } else {
        None
    }
}

pub fn validate_password(password: &str) -> Option<FieldError> {
    if password.is_empty() {
        Some(FieldError::Required(Field::Password))
    } else if password.encode_utf16().count() < MIN_PASSWORD_LEN {
        // UTF-16 units, the same length a browser reports for the input value
        Some(FieldError::TooShort)
    } else {
        None
    }
}

/// Check both fields. Each field is checked even when the other fails.
pub fn validate(email: &str, password: &str) -> ValidationErrors {
    let mut errors = BTreeMap::new();
    if let Some(error) = validate_email(email) {
        errors.insert(Field::Email, error);
    }
    if let Some(error) = validate_password(password) {
        errors.insert(Field::Password, error);
    }
    ValidationErrors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(errors: &ValidationErrors) -> Vec<String> {
        errors.iter().map(|(_, e)| e.to_string()).collect()
    }

    #[test]
    fn empty_fields_report_both_required() {
        let errors = validate("", "");
        assert_eq!(messages(&errors), ["Email required", "Password required"]);
    }

    #[test]
    fn email_without_at_sign_is_invalid() {
        let errors = validate("invalidexample.com", "password123");
        assert_eq!(messages(&errors), ["Invalid email"]);
        assert_eq!(errors.get(Field::Password), None);
    }

    #[test]
    fn short_password_is_rejected() {
        let errors = validate("test@example.com", "pass");
        assert_eq!(
            messages(&errors),
            ["Password must be at least 6 characters"]
        );
    }

    #[test]
    fn valid_input_has_no_errors() {
        assert!(validate("test@example.com", "password123").is_empty());
        assert!(validate("a@b.co", "sixsix").is_empty());
    }

    #[test]
    fn email_shape_edge_cases() {
        for bad in ["test@example", "@example.com", "te st@example.com", "a@@b.com", "a@b."] {
            assert_eq!(validate_email(bad), Some(FieldError::InvalidFormat), "{bad}");
        }
        assert_eq!(validate_email("first.last@mail.example.org"), None);
    }

    #[test]
    fn password_length_counts_utf16_units() {
        assert_eq!(validate_password("pässw"), Some(FieldError::TooShort));
        assert_eq!(validate_password("pässwö"), None);
        // Each emoji is a surrogate pair.
        assert_eq!(validate_password("😀😀😀"), None);
        assert_eq!(validate_password("😀😀"), Some(FieldError::TooShort));
    }

    #[test]
    fn both_fields_fail_independently() {
        let errors = validate("nope", "abc");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.first(), Some(FieldError::InvalidFormat));
        assert_eq!(errors.get(Field::Password), Some(FieldError::TooShort));
    }
}
