//! CLI module for the example harness
//!
//! Invoked with no arguments, the harness compiles every `examples/*.pris`
//! file with `target/debug/pris` and exits with the first failing compiler's
//! exit code (or 0).
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::harness;
use crate::report::ConsoleReporter;
use crate::version::HARNESS_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<HarnessError> for CliError {
    fn from(err: HarnessError) -> Self {
        // Debug formatting of a miette report renders the full diagnostic
        CliError::failure(format!("{:?}", miette::Report::new(err)))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Compile every Pris example with the locally built compiler
#[derive(Parser, Debug)]
#[command(name = "pris-examples")]
#[command(version = HARNESS_VERSION)]
#[command(about = "Compile every Pris example and stop at the first failure", long_about = None)]
pub struct Cli {
    /// Compiler binary (default: target/debug/pris in the repository)
    #[arg(long = "tool", value_name = "PATH")]
    pub tool_path: Option<PathBuf>,

    /// Directory to scan (default: examples/ in the repository)
    #[arg(long = "examples-dir", value_name = "DIR")]
    pub examples_dir: Option<PathBuf>,

    /// Only files whose name ends with this are compiled (default: .pris)
    #[arg(long, value_name = "SUFFIX", value_parser = parse_suffix)]
    pub suffix: Option<String>,
}

impl Cli {
    /// Harness configuration with any overrides applied.
    pub fn config(&self) -> HarnessConfig {
        let mut config = HarnessConfig::default();
        if let Some(tool) = &self.tool_path {
            config = config.with_tool_path(tool);
        }
        if let Some(dir) = &self.examples_dir {
            config = config.with_examples_dir(dir);
        }
        if let Some(suffix) = &self.suffix {
            config = config.with_suffix(suffix);
        }
        config
    }
}

fn parse_suffix(raw: &str) -> Result<String, String> {
    if raw.is_empty() {
        Err("suffix must not be empty".to_string())
    } else {
        Ok(raw.to_string())
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code != ExitCode::SUCCESS {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Check the examples and turn the outcome into the harness's exit code.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.config();
    let mut reporter = ConsoleReporter::stdout();
    let outcome = harness::check_examples(&config, &mut reporter)?;
    Ok(ExitCode(outcome.exit_code()))
}

// ============================================================================
// Tests
// ============================================================================
