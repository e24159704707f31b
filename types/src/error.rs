pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A flattened error message, chain included.
#[derive(Debug, Clone)]
pub struct Error {
    /// The error message (includes the chain from eyre's Debug output)
    pub message: String,
}

/// Build an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from($crate::internal_eyre_dont_use!($($arg)*))
    };
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl From<eyre::Report> for Error {
    fn from(report: eyre::Report) -> Self {
        // The Debug representation includes the error chain
        Self {
            message: format!("{:?}", report),
        }
    }
}
