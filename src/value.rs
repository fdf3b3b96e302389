use std::fmt;

/// Result of a lookup that was given a default of arbitrary type.
///
/// A hit always carries the variable's string value; a miss hands back the
/// caller's default exactly as supplied. No conversion happens in either
/// direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum EnvValue<T> {
    /// The variable is set; this is its value.
    Set(String),
    /// The variable is unset; this is the caller's default.
    Default(T),
}

impl<T> EnvValue<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, EnvValue::Set(_))
    }

    pub fn is_default(&self) -> bool {
        matches!(self, EnvValue::Default(_))
    }

    /// The variable's value, if it was set.
    pub fn as_set(&self) -> Option<&str> {
        match self {
            EnvValue::Set(value) => Some(value),
            EnvValue::Default(_) => None,
        }
    }

    /// The default, if the lookup missed.
    pub fn into_default(self) -> Option<T> {
        match self {
            EnvValue::Set(_) => None,
            EnvValue::Default(default) => Some(default),
        }
    }

    pub fn map_default<U, F>(self, f: F) -> EnvValue<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            EnvValue::Set(value) => EnvValue::Set(value),
            EnvValue::Default(default) => EnvValue::Default(f(default)),
        }
    }
}

impl<T: Into<String>> EnvValue<T> {
    /// Collapse into a plain string when the default is string-like.
    pub fn into_string(self) -> String {
        match self {
            EnvValue::Set(value) => value,
            EnvValue::Default(default) => default.into(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for EnvValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvValue::Set(value) => f.write_str(value),
            EnvValue::Default(default) => default.fmt(f),
        }
    }
}
