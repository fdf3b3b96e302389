use crate::env::{Env, ENV_ACCESSOR_LOG_ANSI_ENV, ENV_ACCESSOR_LOG_ENV};
use crate::error::InitError;
use crate::source::{EnvSource, ProcessEnv};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

/// Configuration of the console logger installed by [`init_tracing`].
///
/// **Fields**
/// - `level`: most verbose level that gets printed. Lookups log at
///   `TRACE`, rejected names at `DEBUG`, lossy values at `WARN`.
/// - `with_target`: print the event target (module path).
/// - `ansi`: colorize output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TracingConfig {
    pub level: LevelFilter,
    pub with_target: bool,
    pub ansi: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::INFO,
            with_target: true,
            ansi: true,
        }
    }
}

impl TracingConfig {
    /// Build the config from the process environment.
    pub fn from_env() -> Self {
        Self::from_source(ProcessEnv)
    }

    /// Build the config from `source`.
    ///
    /// Reads [`ENV_ACCESSOR_LOG_ENV`] (`off`, `error`, `warn`, `info`,
    /// `debug`, `trace`) and [`ENV_ACCESSOR_LOG_ANSI_ENV`]. Values that do
    /// not parse keep the default.
    pub fn from_source<S: EnvSource>(source: S) -> Self {
        let env = Env::new(source);
        let defaults = Self::default();

        let level = env
            .get(ENV_ACCESSOR_LOG_ENV)
            .and_then(|raw| raw.trim().parse::<LevelFilter>().ok())
            .unwrap_or(defaults.level);

        let ansi = match env.get(ENV_ACCESSOR_LOG_ANSI_ENV) {
            Some(raw) => !matches!(raw.trim().to_ascii_lowercase().as_str(), "0" | "false"),
            None => defaults.ansi,
        };

        Self { level, ansi, ..defaults }
    }
}

/// Install a `fmt` subscriber as the global default using `config`.
///
/// **Returns**
/// - `Ok(())` once the subscriber is installed.
/// - `Err(InitError::AlreadyInstalled)` if another global subscriber was
///   installed first.
pub fn init_tracing_with_config(config: TracingConfig) -> Result<(), InitError> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(config.with_target)
        .with_ansi(config.ansi);

    let subscriber = Registry::default().with(fmt_layer).with(config.level);
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Install the global subscriber configured from the process environment.
///
/// Equivalent to `init_tracing_with_config(TracingConfig::from_env())`.
pub fn init_tracing() -> Result<(), InitError> {
    init_tracing_with_config(TracingConfig::from_env())
}
