// banktest-config/src/config.rs
// ============================================================================
// Module: Suite Configuration
// Description: Endpoint and timeout resolution for the banktest suite.
// Purpose: Produce an explicit settings value for the external runner.
// Dependencies: serde, std, thiserror
// ============================================================================

//! ## Overview
//! Resolution is a single pass: classify the requested environment, pick the
//! matching endpoint pair, attach the fixed HTTP timeouts. The result is an
//! explicit value the caller threads into whatever issues requests later;
//! nothing here writes process-global state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::environment::EnvironmentSelection;
use crate::environment::SUITE_ENV_VAR;
use crate::environment::SuiteEnvironment;
use crate::environment::read_env_strict;
use crate::log::SelectionLog;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Client service base URL for locally started services.
pub const DEV_CLIENT_APP_URL: &str = "http://localhost:8080/api";
/// Transaction service base URL for locally started services.
pub const DEV_TRANSACTION_APP_URL: &str = "http://localhost:8081/api";
/// Client service base URL on the Docker Compose network.
pub const DOCKER_CLIENT_APP_URL: &str = "http://clientapp:8080/api";
/// Transaction service base URL on the Docker Compose network.
pub const DOCKER_TRANSACTION_APP_URL: &str = "http://transactionapp:8081/api";
/// Connect and read timeout applied to every resolution, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Base URLs of the two services under test.
///
/// Serialized field names are the wire contract consumed by the external
/// runner; both fields are always present and non-empty after resolution.
/// No well-formedness validation is applied to the URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEndpoints {
    /// Client service base URL.
    pub client_app_url: String,
    /// Transaction service base URL.
    pub transaction_app_url: String,
}

impl ServiceEndpoints {
    /// Returns the endpoint pair for an environment.
    #[must_use]
    pub fn for_environment(environment: SuiteEnvironment) -> Self {
        match environment {
            SuiteEnvironment::Dev => Self {
                client_app_url: DEV_CLIENT_APP_URL.to_string(),
                transaction_app_url: DEV_TRANSACTION_APP_URL.to_string(),
            },
            SuiteEnvironment::Docker => Self {
                client_app_url: DOCKER_CLIENT_APP_URL.to_string(),
                transaction_app_url: DOCKER_TRANSACTION_APP_URL.to_string(),
            },
        }
    }
}

/// HTTP timeouts handed to whatever component issues requests.
///
/// The values travel with the settings instead of being installed as
/// process-global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpTimeouts {
    /// Connect timeout in milliseconds.
    #[serde(rename = "connectTimeout")]
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds.
    #[serde(rename = "readTimeout")]
    pub read_timeout_ms: u64,
}

impl HttpTimeouts {
    /// Connect timeout as a [`Duration`].
    #[must_use]
    pub const fn connect(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Read timeout as a [`Duration`].
    #[must_use]
    pub const fn read(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self {
            connect_timeout_ms: DEFAULT_TIMEOUT_MS,
            read_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Resolved settings for one suite run.
///
/// Serializes to the flat document the external runner consumes: the two
/// endpoint keys plus `connectTimeout` and `readTimeout`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteSettings {
    /// Classification of the requested environment.
    #[serde(skip)]
    pub selection: EnvironmentSelection,
    /// Service base URLs in effect.
    #[serde(flatten)]
    pub endpoints: ServiceEndpoints,
    /// HTTP timeouts in effect.
    #[serde(flatten)]
    pub timeouts: HttpTimeouts,
}

impl SuiteSettings {
    /// Resolves settings for a raw environment value.
    ///
    /// Total and infallible: unknown and missing values keep the `dev`
    /// endpoints. Two calls with equal input return structurally equal
    /// settings.
    #[must_use]
    pub fn resolve(env: Option<&str>) -> Self {
        let selection = EnvironmentSelection::classify(env);
        let endpoints = ServiceEndpoints::for_environment(selection.environment());
        Self {
            selection,
            endpoints,
            timeouts: HttpTimeouts::default(),
        }
    }

    /// Resolves settings for a raw value, emitting selection records.
    ///
    /// The raw value is always recorded. A selection record follows for
    /// recognized environments and for the explicit `dev` fallback, but not
    /// for unrecognized names.
    ///
    /// # Errors
    ///
    /// Returns an error when a log record cannot be written.
    pub fn resolve_logged<W: Write>(
        env: Option<&str>,
        log: &SelectionLog<W>,
    ) -> Result<Self, ConfigError> {
        log.observed(env)?;
        let settings = Self::resolve(env);
        if !settings.selection.is_unrecognized() {
            log.selected(&settings.selection)?;
        }
        Ok(settings)
    }

    /// Resolves settings from `BANKTEST_ENV`, emitting selection records.
    ///
    /// # Errors
    ///
    /// Returns an error when `BANKTEST_ENV` holds invalid UTF-8 or a log
    /// record cannot be written.
    pub fn from_process_env<W: Write>(log: &SelectionLog<W>) -> Result<Self, ConfigError> {
        let raw = read_env_strict(SUITE_ENV_VAR)?;
        Self::resolve_logged(raw.as_deref(), log)
    }

    /// Returns the environment these settings target.
    #[must_use]
    pub const fn environment(&self) -> SuiteEnvironment {
        self.selection.environment()
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while resolving suite settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Process-environment value was not usable.
    #[error("environment error: {0}")]
    Env(String),
    /// Selection log record could not be written.
    #[error("selection log error: {0}")]
    Log(String),
}
