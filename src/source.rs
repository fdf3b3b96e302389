use std::collections::BTreeMap;
use std::ffi::OsString;
use std::sync::Arc;

/// Read-only table of environment variables consulted by [`Env`].
///
/// Implementations only answer "what is the value of `name`"; they never
/// mutate the table and must not cache on behalf of the caller. The process
/// environment ([`ProcessEnv`]) is the usual source, [`MapEnv`] keeps an
/// in-memory table for embedding and tests.
///
/// [`Env`]: crate::env::Env
pub trait EnvSource: Send + Sync {
    /// Raw value of `name`, or `None` if the source does not define it.
    ///
    /// **Parameters**
    /// - `name`: variable name as given by the caller. Names reaching this
    ///   method have already been validated (non-empty, no `=` or NUL).
    fn var_os(&self, name: &str) -> Option<OsString>;

    /// Consult `self` first and fall back to `next` for names `self` does
    /// not define.
    fn chain<N>(self, next: N) -> Chain<Self, N>
    where
        Self: Sized,
        N: EnvSource,
    {
        Chain { first: self, second: next }
    }
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var_os(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name)
    }
}

/// In-memory variable table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: BTreeMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert; a later value for the same name replaces the
    /// earlier one.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        MapEnv {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn var_os(&self, name: &str) -> Option<OsString> {
        self.vars.get(name).map(OsString::from)
    }
}

/// Two sources consulted in order; see [`EnvSource::chain`].
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A: EnvSource, B: EnvSource> EnvSource for Chain<A, B> {
    fn var_os(&self, name: &str) -> Option<OsString> {
        self.first.var_os(name).or_else(|| self.second.var_os(name))
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn var_os(&self, name: &str) -> Option<OsString> {
        (**self).var_os(name)
    }
}

impl<S: EnvSource + ?Sized> EnvSource for Box<S> {
    fn var_os(&self, name: &str) -> Option<OsString> {
        (**self).var_os(name)
    }
}

impl<S: EnvSource + ?Sized> EnvSource for Arc<S> {
    fn var_os(&self, name: &str) -> Option<OsString> {
        (**self).var_os(name)
    }
}
