// system-tests/src/config/env.rs
// ============================================================================
// Module: System Test Environment
// Description: Environment-backed configuration for system tests.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: currency-verifier
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid silent
//! misconfiguration. Invalid UTF-8 fails closed. The valid access key is only
//! required by suites that need it; its absence is reported when credentials
//! are requested, not at load time.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

use currency_verifier::AccessKey;
use currency_verifier::ClientConfig;
use currency_verifier::Credentials;
use currency_verifier::client::DEFAULT_BASE_URL;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Key sent by invalid-key scenarios when no override is configured.
pub const DEFAULT_INVALID_ACCESS_KEY: &str = "invalid-access-key";

/// Environment keys for system test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemTestEnv {
    /// Optional run root override.
    RunRoot,
    /// Optional API base URL override.
    BaseUrl,
    /// Access key the API accepts.
    AccessKey,
    /// Optional override for the key invalid-key scenarios send.
    InvalidAccessKey,
    /// Optional override for the access key parameter name.
    AccessKeyParam,
    /// Optional timeout override in seconds (positive integer).
    TimeoutSeconds,
}

impl SystemTestEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RunRoot => "CURRENCY_VERIFIER_RUN_ROOT",
            Self::BaseUrl => "CURRENCY_VERIFIER_BASE_URL",
            Self::AccessKey => "CURRENCY_VERIFIER_ACCESS_KEY",
            Self::InvalidAccessKey => "CURRENCY_VERIFIER_INVALID_ACCESS_KEY",
            Self::AccessKeyParam => "CURRENCY_VERIFIER_ACCESS_KEY_PARAM",
            Self::TimeoutSeconds => "CURRENCY_VERIFIER_TIMEOUT_SEC",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed system test configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SystemTestConfig {
    /// Optional run root override.
    pub run_root: Option<PathBuf>,
    /// Optional API base URL override.
    pub base_url: Option<String>,
    /// Access key the API accepts.
    pub access_key: Option<AccessKey>,
    /// Optional invalid key override.
    pub invalid_access_key: Option<AccessKey>,
    /// Optional access key parameter name override.
    pub access_key_param: Option<String>,
    /// Optional timeout override in seconds (positive integer).
    pub timeout: Option<Duration>,
}

impl SystemTestConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is empty,
    /// or fails validation (for example, an invalid timeout).
    pub fn load() -> Result<Self, String> {
        let run_root = read_env_nonempty(SystemTestEnv::RunRoot.as_str())?.map(PathBuf::from);
        let base_url = read_env_nonempty(SystemTestEnv::BaseUrl.as_str())?;
        let access_key = read_env_nonempty(SystemTestEnv::AccessKey.as_str())?.map(AccessKey::new);
        let invalid_access_key =
            read_env_nonempty(SystemTestEnv::InvalidAccessKey.as_str())?.map(AccessKey::new);
        let access_key_param = read_env_nonempty(SystemTestEnv::AccessKeyParam.as_str())?;
        let timeout = read_env_nonempty(SystemTestEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(SystemTestEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        Ok(Self {
            run_root,
            base_url,
            access_key,
            invalid_access_key,
            access_key_param,
            timeout,
        })
    }

    /// Builds the client configuration, applying overrides over defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL is unusable.
    pub fn client_config(&self) -> Result<ClientConfig, String> {
        let base_url = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let mut config = ClientConfig::new(base_url)
            .map_err(|err| format!("{}: {err}", SystemTestEnv::BaseUrl.as_str()))?;
        if let Some(param) = &self.access_key_param {
            config = config.with_access_key_param(param.trim());
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        Ok(config)
    }

    /// Returns the key invalid-key scenarios send.
    #[must_use]
    pub fn invalid_key(&self) -> AccessKey {
        self.invalid_access_key
            .clone()
            .unwrap_or_else(|| AccessKey::new(DEFAULT_INVALID_ACCESS_KEY))
    }

    /// Returns both keys for building the scenario catalog.
    ///
    /// # Errors
    ///
    /// Returns an error when no valid access key is configured, or when the
    /// valid and invalid keys are the same.
    pub fn credentials(&self) -> Result<Credentials, String> {
        let valid = self
            .access_key
            .clone()
            .ok_or_else(|| format!("{} must be set", SystemTestEnv::AccessKey.as_str()))?;
        let invalid = self.invalid_key();
        if valid == invalid {
            return Err(format!(
                "{} must differ from {}",
                SystemTestEnv::InvalidAccessKey.as_str(),
                SystemTestEnv::AccessKey.as_str()
            ));
        }
        Ok(Credentials {
            valid,
            invalid,
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is missing, non-numeric, or zero.
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{name} must be a positive integer number of seconds"));
    }
    let secs: u64 = trimmed
        .parse()
        .map_err(|_| format!("{name} must be a positive integer number of seconds"))?;
    if secs == 0 {
        return Err(format!("{name} must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}
