//! Configuration loading with environment variable support.
//!
//! Limits for the contact form can be tuned through `SITEFORMS_*` variables,
//! optionally read from a `.env` file first.
//!
//! # Example
//!
//! ```no_run
//! use siteforms::config::{load_dotenv, load_limits};
//!
//! // SITEFORMS_IDEA_MIN_LENGTH=50
//! // SITEFORMS_ALLOWED_FILE_TYPES=application/pdf,image/*
//! load_dotenv();
//! let limits = load_limits().expect("invalid SITEFORMS_* configuration");
//! ```

use serde::de::DeserializeOwned;
use siteforms_validate::FormLimits;
use thiserror::Error;

/// Prefix for all siteforms environment variables.
pub const ENV_PREFIX: &str = "SITEFORMS";

/// Error type for configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable deserialization failed.
    #[error("Configuration error: {0}")]
    Env(#[from] envy::Error),
    /// The loaded values are inconsistent.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Typed configuration deserialized from environment variables.
///
/// Field names map to SCREAMING_SNAKE_CASE variables.
#[derive(Debug, Clone)]
pub struct Config<T>(pub T);

impl<T: DeserializeOwned> Config<T> {
    /// Load configuration from variables starting with `{prefix}_`.
    pub fn from_env_prefixed(prefix: &str) -> Result<Self, ConfigError> {
        envy::prefixed(format!("{}_", prefix))
            .from_env::<T>()
            .map(Config)
            .map_err(ConfigError::from)
    }

    /// Get the inner configuration value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Config<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Load the contact form limits from `SITEFORMS_*` variables.
///
/// Unset variables keep their defaults.
pub fn load_limits() -> Result<FormLimits, ConfigError> {
    load_limits_prefixed(ENV_PREFIX)
}

fn load_limits_prefixed(prefix: &str) -> Result<FormLimits, ConfigError> {
    let limits = Config::<FormLimits>::from_env_prefixed(prefix)?.into_inner();
    check_limits(&limits)?;
    tracing::debug!(?limits, "loaded form limits");
    Ok(limits)
}

/// Environment loading for [`FormLimits`].
///
/// ```no_run
/// use siteforms::config::LimitsFromEnv;
/// use siteforms::FormLimits;
///
/// let limits = FormLimits::from_env().expect("invalid SITEFORMS_* configuration");
/// ```
pub trait LimitsFromEnv: Sized {
    /// Load from `SITEFORMS_*` variables, same as [`load_limits`].
    fn from_env() -> Result<Self, ConfigError>;

    /// Load from variables starting with `{prefix}_`.
    fn from_env_prefixed(prefix: &str) -> Result<Self, ConfigError>;
}

impl LimitsFromEnv for FormLimits {
    fn from_env() -> Result<Self, ConfigError> {
        load_limits()
    }

    fn from_env_prefixed(prefix: &str) -> Result<Self, ConfigError> {
        load_limits_prefixed(prefix)
    }
}

fn check_limits(limits: &FormLimits) -> Result<(), ConfigError> {
    if limits.postcode_min_digits > limits.postcode_max_digits {
        return Err(ConfigError::Invalid(format!(
            "postcode_min_digits ({}) exceeds postcode_max_digits ({})",
            limits.postcode_min_digits, limits.postcode_max_digits
        )));
    }
    Ok(())
}

/// Load environment variables from a `.env` file.
///
/// A missing file is ignored and existing variables are not overridden.
pub fn load_dotenv() {
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }
}

/// Load environment variables from a specific file path.
pub fn load_dotenv_from<P: AsRef<std::path::Path>>(path: P) {
    if let Err(e) = dotenvy::from_path(path.as_ref()) {
        tracing::debug!(error = %e, path = %path.as_ref().display(), "env file not loaded");
    }
}
