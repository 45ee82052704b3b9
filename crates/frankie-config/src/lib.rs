//! # F.R.A.N.K.I.E. Config
//!
//! TOML configuration with `${VAR}` expansion and environment overrides.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::{ConfigLoader, env_keys};
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
