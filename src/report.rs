//! Reporting run results
//!
//! The harness prints one line per checked example:
//!
//! ```text
//! OK /repo/examples/title.pris
//! FAILED /repo/examples/broken.pris
//!
//! <everything the compiler printed>
//! ```
//!
//! Reporting is behind the [`Reporter`] trait so the batch loop does not care
//! where the lines go.

use std::io::{self, Write};

use crate::runner::RunResult;

/// Receives each result as soon as it is classified.
pub trait Reporter {
    /// Called for a run that exited 0
    fn on_ok(&mut self, result: &RunResult) -> io::Result<()>;

    /// Called for the first run that exited non-zero; nothing follows it
    fn on_failed(&mut self, result: &RunResult) -> io::Result<()>;
}

/// Plain-text reporter, stdout by default.
pub struct ConsoleReporter<W: Write = io::Stdout> {
    out: W,
}

impl ConsoleReporter {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn on_ok(&mut self, result: &RunResult) -> io::Result<()> {
        writeln!(self.out, "OK {}", result.input)?;
        self.out.flush()
    }

    fn on_failed(&mut self, result: &RunResult) -> io::Result<()> {
        writeln!(self.out, "FAILED {}", result.input)?;
        writeln!(self.out)?;
        self.out.write_all(result.output.as_bytes())?;
        if !result.output.is_empty() && !result.output.ends_with('\n') {
            writeln!(self.out)?;
        }
        self.out.flush()
    }
}
