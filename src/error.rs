/// Error type returned by the strict lookups ([`try_env`], [`require_env`]
/// and their [`Env`] counterparts).
///
/// The infallible accessors never produce these: an unset variable is a
/// normal outcome there, not a failure.
///
/// [`try_env`]: crate::env::try_env
/// [`require_env`]: crate::env::require_env
/// [`Env`]: crate::env::Env
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    #[error("environment variable name is empty")]
    EmptyName,

    #[error("invalid environment variable name {name:?}: must not contain '=' or NUL")]
    InvalidName { name: String },

    #[error("environment variable {name} is not valid unicode")]
    NotUnicode { name: String },

    #[error("environment variable {name} is not set")]
    Missing { name: String },
}

/// Error type returned when installing the global `tracing` subscriber.
#[derive(thiserror::Error, Debug)]
pub enum InitError {
    #[error("a global tracing subscriber is already installed")]
    AlreadyInstalled(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Check that `name` can exist in a process environment table.
pub(crate) fn validate_name(name: &str) -> Result<(), EnvError> {
    if name.is_empty() {
        return Err(EnvError::EmptyName);
    }
    if name.contains('=') || name.contains('\0') {
        return Err(EnvError::InvalidName { name: name.to_string() });
    }
    Ok(())
}
