// banktest-config/src/environment.rs
// ============================================================================
// Module: Suite Environment
// Description: Environment classification for the banktest suite.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: serde, std
// ============================================================================

//! ## Overview
//! Environment names are classified with exact matching: `dev` and `docker`
//! are recognized, a missing or blank value falls back to `dev`, and any other
//! value keeps the `dev` endpoints without claiming recognition. Invalid UTF-8
//! in the process environment fails closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::config::ConfigError;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Process-environment variable naming the requested suite environment.
pub const SUITE_ENV_VAR: &str = "BANKTEST_ENV";

// ============================================================================
// SECTION: Environment Types
// ============================================================================

/// Deployment contexts the suite knows how to target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuiteEnvironment {
    /// Locally started services on loopback ports.
    Dev,
    /// Services reachable under Docker Compose network hostnames.
    Docker,
}

impl SuiteEnvironment {
    /// Returns the canonical lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Docker => "docker",
        }
    }
}

/// Outcome of classifying a raw environment input.
///
/// Classification never fails: unknown and missing values both behave as
/// [`SuiteEnvironment::Dev`] for endpoint selection, but are kept distinct so
/// callers can log the fallback explicitly and stay silent on unknown names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentSelection {
    /// Input named a known environment exactly.
    Recognized(SuiteEnvironment),
    /// Input was absent or blank; the suite falls back to `dev`.
    Defaulted,
    /// Input named no known environment; `dev` endpoints stay in effect.
    Unrecognized(String),
}

impl EnvironmentSelection {
    /// Classifies a raw environment value.
    ///
    /// Matching is exact and case sensitive: `DEV` is unrecognized.
    #[must_use]
    pub fn classify(raw: Option<&str>) -> Self {
        let Some(value) = raw else {
            return Self::Defaulted;
        };
        if value.trim().is_empty() {
            return Self::Defaulted;
        }
        match value {
            "dev" => Self::Recognized(SuiteEnvironment::Dev),
            "docker" => Self::Recognized(SuiteEnvironment::Docker),
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// Returns the environment this selection behaves as.
    #[must_use]
    pub const fn environment(&self) -> SuiteEnvironment {
        match self {
            Self::Recognized(environment) => *environment,
            Self::Defaulted | Self::Unrecognized(_) => SuiteEnvironment::Dev,
        }
    }

    /// Returns true when the suite fell back to `dev` for lack of input.
    #[must_use]
    pub const fn is_defaulted(&self) -> bool {
        matches!(self, Self::Defaulted)
    }

    /// Returns true when the input named no known environment.
    #[must_use]
    pub const fn is_unrecognized(&self) -> bool {
        matches!(self, Self::Unrecognized(_))
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
pub fn read_env_strict(name: &str) -> Result<Option<String>, ConfigError> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string()
            .map(Some)
            .map_err(|_| ConfigError::Env(format!("{name} must be valid UTF-8")))
    })
}
