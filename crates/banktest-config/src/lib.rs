// banktest-config/src/lib.rs
// ============================================================================
// Module: Banktest Config Library
// Description: Environment resolution and HTTP settings for the banktest suite.
// Purpose: Single source of truth for suite endpoint and timeout selection.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! `banktest-config` resolves which deployment of the banking services a test
//! run targets. It classifies the `BANKTEST_ENV` value, selects the matching
//! service base URLs, and hands the caller an explicit settings value
//! (endpoints plus HTTP timeouts) together with structured selection records.
//! Nothing here mutates process-global state; the external runner threads the
//! returned settings into whatever issues requests later.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod environment;
pub mod log;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use environment::*;
pub use log::SelectionLog;
