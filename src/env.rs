//! Environment variable accessors.
//!
//! The free functions read the process environment; [`Env`] does the same
//! over any [`EnvSource`]. An unset variable is a normal outcome: callers
//! get `None`, or their default back unchanged.

use crate::error::{validate_name, EnvError};
use crate::source::{EnvSource, ProcessEnv};
use crate::value::EnvValue;

/// Log level for [`init_tracing`](crate::init::init_tracing), e.g. `debug`.
pub const ENV_ACCESSOR_LOG_ENV: &str = "ENV_ACCESSOR_LOG";

/// Set to `0` or `false` to disable ANSI colors in log output.
pub const ENV_ACCESSOR_LOG_ANSI_ENV: &str = "ENV_ACCESSOR_LOG_ANSI";

/// Accessor over an [`EnvSource`].
///
/// `Env::process()` reads the running process's environment and is what the
/// free functions in this module use. Each call reads the source afresh;
/// nothing is cached.
#[derive(Debug, Clone, Copy, Default)]
pub struct Env<S = ProcessEnv> {
    source: S,
}

impl Env<ProcessEnv> {
    pub const fn process() -> Self {
        Env { source: ProcessEnv }
    }
}

impl<S: EnvSource> Env<S> {
    pub fn new(source: S) -> Self {
        Env { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Value of `name`, or `None` when it is unset.
    ///
    /// An empty string value counts as set. Names that cannot exist in an
    /// environment (empty, or containing `=` or NUL) are reported as unset.
    pub fn get(&self, name: &str) -> Option<String> {
        if let Err(err) = validate_name(name) {
            tracing::debug!(name, error = %err, "unusable environment variable name, treating as unset");
            return None;
        }

        let raw = self.source.var_os(name);
        tracing::trace!(name, found = raw.is_some(), "environment lookup");

        raw.map(|raw| match raw.into_string() {
            Ok(value) => value,
            Err(raw) => {
                tracing::warn!(name, "environment variable is not valid unicode, converting lossily");
                raw.to_string_lossy().into_owned()
            }
        })
    }

    /// Value of `name`, or `default` when it is unset.
    pub fn get_or(&self, name: &str, default: impl Into<String>) -> String {
        self.get(name).unwrap_or_else(|| default.into())
    }

    /// Value of `name`, or `default` of any type, returned unchanged, when
    /// it is unset.
    pub fn value_or<T>(&self, name: &str, default: T) -> EnvValue<T> {
        match self.get(name) {
            Some(value) => EnvValue::Set(value),
            None => EnvValue::Default(default),
        }
    }

    /// Like [`Env::value_or`], but the default is only computed on a miss.
    pub fn value_or_else<T, F>(&self, name: &str, default: F) -> EnvValue<T>
    where
        F: FnOnce() -> T,
    {
        match self.get(name) {
            Some(value) => EnvValue::Set(value),
            None => EnvValue::Default(default()),
        }
    }

    /// Strict lookup.
    ///
    /// **Returns**
    /// - `Ok(Some(value))` if `name` is set to valid unicode.
    /// - `Ok(None)` if `name` is unset.
    /// - `Err(..)` if `name` is empty or contains `=`/NUL, or if the value
    ///   is not valid unicode.
    pub fn try_get(&self, name: &str) -> Result<Option<String>, EnvError> {
        validate_name(name)?;

        let raw = self.source.var_os(name);
        tracing::trace!(name, found = raw.is_some(), "environment lookup");

        match raw {
            None => Ok(None),
            Some(raw) => raw
                .into_string()
                .map(Some)
                .map_err(|_| EnvError::NotUnicode { name: name.to_string() }),
        }
    }

    /// Value of a variable the caller cannot do without.
    pub fn require(&self, name: &str) -> Result<String, EnvError> {
        self.try_get(name)?
            .ok_or_else(|| EnvError::Missing { name: name.to_string() })
    }
}

/// Read an environment variable, `None` if it is unset.
pub fn env(name: &str) -> Option<String> {
    Env::process().get(name)
}

/// Read an environment variable or fall back to a provided default.
pub fn env_or(name: &str, default: impl Into<String>) -> String {
    Env::process().get_or(name, default)
}

/// Read an environment variable or hand back `default` as-is.
///
/// ```
/// use env_accessor::{env_value, EnvValue};
///
/// let verbose = env_value("ENV_ACCESSOR_DOC_UNSET", false);
/// assert_eq!(verbose, EnvValue::Default(false));
/// ```
pub fn env_value<T>(name: &str, default: T) -> EnvValue<T> {
    Env::process().value_or(name, default)
}

/// Read an environment variable, computing the default only when needed.
pub fn env_or_else<T, F>(name: &str, default: F) -> EnvValue<T>
where
    F: FnOnce() -> T,
{
    Env::process().value_or_else(name, default)
}

/// Strict variant of [`env`]; see [`Env::try_get`].
pub fn try_env(name: &str) -> Result<Option<String>, EnvError> {
    Env::process().try_get(name)
}

/// Read an environment variable that must be set.
pub fn require_env(name: &str) -> Result<String, EnvError> {
    Env::process().require(name)
}
