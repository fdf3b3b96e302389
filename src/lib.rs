pub mod env;
pub mod error;
pub mod init;
pub mod source;
pub mod value;

pub use env::{env, env_or, env_or_else, env_value, require_env, try_env, Env};
pub use error::{EnvError, InitError};
pub use source::{Chain, EnvSource, MapEnv, ProcessEnv};
pub use value::EnvValue;
