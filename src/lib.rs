#![forbid(unsafe_code)]
//! Pris example harness
//!
//! Compiles every example in the repository's `examples/` directory with the
//! locally built `target/debug/pris`, one at a time, printing `OK <path>` for
//! each success. The first failure prints the compiler's combined output and
//! ends the run with the compiler's exit code.
//!
//! - [`discovery`] lists the candidate files
//! - [`runner`] invokes the compiler and captures its output
//! - [`harness`] drives the fail-fast loop
//! - [`report`] prints results
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` with `?` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod harness;
pub mod report;
pub mod runner;
pub mod version;

pub use config::HarnessConfig;
pub use discovery::{InputFile, discover};
pub use error::{HarnessError, HarnessResult};
pub use harness::{BatchOutcome, check_examples, run_batch};
pub use report::{ConsoleReporter, Reporter};
pub use runner::{Classification, ProcessExecutor, RunResult, ToolExecutor};
