// banktest-cli/src/main.rs
// ============================================================================
// Module: Banktest CLI Entry Point
// Description: Command dispatcher for suite configuration resolution.
// Purpose: Emit the resolved settings document for an external test runner.
// Dependencies: banktest-config, clap, serde_json, thiserror, toml
// ============================================================================

//! ## Overview
//! The banktest CLI resolves which deployment of the banking services a test
//! run targets and prints the settings document the external runner consumes.
//! The document goes to stdout (or a file); selection records go to stderr as
//! JSON lines.

// ============================================================================
// SECTION: Modules
// ============================================================================

#[cfg(test)]
mod main_tests;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use banktest_config::SelectionLog;
use banktest_config::SuiteSettings;
use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Definition
// ============================================================================

/// Top-level banktest CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "banktest", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the suite configuration for an environment.
    Resolve(ResolveCommand),
}

/// Output encodings for the resolved settings document.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// JSON object with the runner's expected keys.
    Json,
    /// TOML table with the runner's expected keys.
    Toml,
}

/// Arguments for the `resolve` command.
#[derive(Args, Debug)]
struct ResolveCommand {
    /// Environment name to resolve (defaults to the `BANKTEST_ENV` variable).
    #[arg(long, value_name = "NAME")]
    env: Option<String>,
    /// Output encoding for the settings document.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
    /// Optional output path for the settings document (defaults to stdout).
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for user-facing error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&format!("banktest {version}"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Resolve(command) => command_resolve(&command),
    }
}

/// Prints top-level CLI help.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Resolve Command
// ============================================================================

/// Executes the `resolve` command.
fn command_resolve(command: &ResolveCommand) -> CliResult<ExitCode> {
    let log = SelectionLog::new(std::io::stderr());
    let settings = match command.env.as_deref() {
        Some(env) => SuiteSettings::resolve_logged(Some(env), &log),
        None => SuiteSettings::from_process_env(&log),
    }
    .map_err(|err| CliError::new(format!("resolve failed: {err}")))?;

    let document = render_settings(&settings, command.format)?;
    match command.output.as_deref() {
        Some(path) => {
            fs::write(path, document.as_bytes()).map_err(|err| {
                CliError::new(format!("write failed for {}: {err}", path.display()))
            })?;
            write_stdout_line(&format!("settings written to {}", path.display()))
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        }
        None => {
            write_stdout_line(document.trim_end_matches('\n'))
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Renders the settings document in the requested encoding.
fn render_settings(settings: &SuiteSettings, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(settings)
            .map_err(|err| CliError::new(format!("JSON encoding failed: {err}"))),
        OutputFormat::Toml => toml::to_string(settings)
            .map_err(|err| CliError::new(format!("TOML encoding failed: {err}"))),
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output error message for a stream.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write to {stream}: {error}")
}

/// Emits an error to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
