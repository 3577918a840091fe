// banktest-cli/src/main_tests.rs
// ============================================================================
// Module: CLI Main Helpers Tests
// Description: Unit tests for argument parsing and document rendering.
// Purpose: Ensure both output encodings carry the runner contract keys.
// Dependencies: banktest-cli main helpers
// ============================================================================

//! ## Overview
//! Validates `render_settings` output encodings and clap argument parsing.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use banktest_config::SuiteSettings;
use clap::Parser;
use serde_json::Value;

use super::Cli;
use super::Commands;
use super::OutputFormat;
use super::render_settings;

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn json_rendering_carries_runner_keys() {
    let settings = SuiteSettings::resolve(Some("docker"));
    let rendered = render_settings(&settings, OutputFormat::Json).expect("rendering should succeed");
    let document: Value = serde_json::from_str(&rendered).expect("document should parse");
    assert_eq!(document["clientAppUrl"], "http://clientapp:8080/api");
    assert_eq!(document["transactionAppUrl"], "http://transactionapp:8081/api");
    assert_eq!(document["connectTimeout"], 10_000);
    assert_eq!(document["readTimeout"], 10_000);
}

#[test]
fn toml_rendering_carries_runner_keys() {
    let settings = SuiteSettings::resolve(Some("dev"));
    let rendered = render_settings(&settings, OutputFormat::Toml).expect("rendering should succeed");
    assert!(rendered.contains(r#"clientAppUrl = "http://localhost:8080/api""#));
    assert!(rendered.contains(r#"transactionAppUrl = "http://localhost:8081/api""#));
    assert!(rendered.contains("connectTimeout = 10000"));
    assert!(rendered.contains("readTimeout = 10000"));
}

#[test]
fn resolve_flags_parse() {
    let cli = Cli::try_parse_from(["banktest", "resolve", "--env", "docker", "--format", "toml"])
        .expect("arguments should parse");
    let Some(Commands::Resolve(command)) = cli.command else {
        panic!("expected resolve command");
    };
    assert_eq!(command.env.as_deref(), Some("docker"));
    assert_eq!(command.format, OutputFormat::Toml);
    assert_eq!(command.output, None);
}

#[test]
fn format_defaults_to_json() {
    let cli = Cli::try_parse_from(["banktest", "resolve"]).expect("arguments should parse");
    let Some(Commands::Resolve(command)) = cli.command else {
        panic!("expected resolve command");
    };
    assert_eq!(command.format, OutputFormat::Json);
}

#[test]
fn unknown_formats_are_rejected() {
    assert!(Cli::try_parse_from(["banktest", "resolve", "--format", "yaml"]).is_err());
}

#[test]
fn version_flag_parses_without_subcommand() {
    let cli = Cli::try_parse_from(["banktest", "--version"]).expect("arguments should parse");
    assert!(cli.show_version);
    assert!(cli.command.is_none());
}
