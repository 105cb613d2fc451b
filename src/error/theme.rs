use thiserror::Error;

/// Converts into `ServerFnError` through its blanket `std::error::Error` impl.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The identifier is not one of the known theme names.
    #[error("Invalid theme: {0:?} (expected \"light\" or \"dark\")")]
    InvalidTheme(String),
}

impl ThemeError {
    pub fn invalid(value: impl Into<String>) -> Self {
        Self::InvalidTheme(value.into())
    }
}
