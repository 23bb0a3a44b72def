//! Harness errors
//!
//! A child that runs and exits non-zero is *not* an error here: it is a
//! [`RunResult`](crate::runner::RunResult) classified as failed. The variants
//! below cover everything that stops the harness before it can classify a run.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Fatal errors raised while discovering, running, or reporting examples.
#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    #[error("cannot read examples directory '{}'", dir.display())]
    #[diagnostic(code(harness::discovery))]
    Discovery {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot launch '{}'", tool.display())]
    #[diagnostic(
        code(harness::launch),
        help("build the compiler first (`cargo build`) or pass --tool <PATH>")
    )]
    Launch {
        tool: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("lost the output of '{}'", tool.display())]
    #[diagnostic(code(harness::capture))]
    Capture {
        tool: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write report")]
    #[diagnostic(code(harness::report))]
    Report {
        #[from]
        source: io::Error,
    },
}

/// Result type for harness operations.
pub type HarnessResult<T> = Result<T, HarnessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discovery_message_names_directory() {
        let err = HarnessError::Discovery {
            dir: PathBuf::from("examples"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(err.to_string(), "cannot read examples directory 'examples'");
    }

    #[test]
    fn test_launch_has_help() {
        let err = HarnessError::Launch {
            tool: PathBuf::from("target/debug/pris"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.help().is_some());
        assert_eq!(err.code().map(|c| c.to_string()).as_deref(), Some("harness::launch"));
    }

    #[test]
    fn test_io_error_converts_to_report() {
        let err: HarnessError = io::Error::from(io::ErrorKind::BrokenPipe).into();
        assert!(matches!(err, HarnessError::Report { .. }));
    }
}
