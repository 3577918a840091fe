// banktest-config/src/log.rs
// ============================================================================
// Module: Selection Log
// Description: Structured log sink for environment-selection records.
// Purpose: Record resolution outcomes without dispatching anything.
// Dependencies: serde_json, std
// ============================================================================

//! ## Overview
//! `SelectionLog` writes one JSON record per line to a caller-supplied writer.
//! Every resolution records the raw value it observed; recognized and
//! defaulted selections additionally record the environment that was settled
//! on. Unrecognized names produce no selection record.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::sync::Mutex;

use serde_json::json;

use crate::config::ConfigError;
use crate::environment::EnvironmentSelection;
use crate::environment::SUITE_ENV_VAR;

// ============================================================================
// SECTION: Selection Log
// ============================================================================

/// Structured JSON-lines sink for environment-selection records.
pub struct SelectionLog<W: Write> {
    /// Output writer for log records.
    writer: Mutex<W>,
}

impl<W: Write> SelectionLog<W> {
    /// Creates a sink over a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the sink and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error when the writer mutex is poisoned.
    pub fn into_inner(self) -> Result<W, ConfigError> {
        self.writer
            .into_inner()
            .map_err(|_| ConfigError::Log("log writer mutex poisoned".to_string()))
    }

    /// Records the raw environment value observed for a resolution.
    ///
    /// # Errors
    ///
    /// Returns an error when the record cannot be written.
    pub fn observed(&self, raw: Option<&str>) -> Result<(), ConfigError> {
        self.write_record(&json!({
            "event": "environment_observed",
            "variable": SUITE_ENV_VAR,
            "value": raw,
        }))
    }

    /// Records the environment a resolution settled on.
    ///
    /// Callers skip this for unrecognized names; the observed record already
    /// captures the raw value in that case.
    ///
    /// # Errors
    ///
    /// Returns an error when the record cannot be written.
    pub fn selected(&self, selection: &EnvironmentSelection) -> Result<(), ConfigError> {
        let environment = selection.environment();
        let label = environment.as_str().to_ascii_uppercase();
        self.write_record(&json!({
            "event": "environment_selected",
            "environment": environment.as_str(),
            "defaulted": selection.is_defaulted(),
            "message": format!("Running tests in {label} environment"),
        }))
    }

    /// Writes one record as a JSON line.
    fn write_record(&self, record: &serde_json::Value) -> Result<(), ConfigError> {
        let mut guard = self
            .writer
            .lock()
            .map_err(|_| ConfigError::Log("log writer mutex poisoned".to_string()))?;
        serde_json::to_writer(&mut *guard, record).map_err(|err| ConfigError::Log(err.to_string()))?;
        guard.write_all(b"\n").map_err(|err| ConfigError::Log(err.to_string()))?;
        drop(guard);
        Ok(())
    }
}
