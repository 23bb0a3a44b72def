//! Running the compiler on one example
//!
//! ## Output capture
//!
//! The child gets the write end of a single anonymous pipe as both stdout and
//! stderr, so diagnostics and normal output interleave exactly as the
//! compiler wrote them. The parent drains the read end to EOF and only then
//! waits; waiting first could deadlock once the child fills the pipe buffer.
//!
//! ## Exit codes
//!
//! Codes are passed through untouched. On Unix a child killed by a signal is
//! reported as the negated signal number.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use crate::discovery::InputFile;
use crate::error::{HarnessError, HarnessResult};

/// Whether one compiler run passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Ok,
    Failed,
}

impl Classification {
    pub fn from_exit_code(code: i32) -> Self {
        if code == 0 {
            Classification::Ok
        } else {
            Classification::Failed
        }
    }
}

/// Outcome of running the compiler on one example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub input: InputFile,
    pub exit_code: i32,
    /// Merged stdout and stderr, decoded lossily as UTF-8
    pub output: String,
    pub classification: Classification,
}

impl RunResult {
    pub fn new(input: InputFile, exit_code: i32, output: impl Into<String>) -> Self {
        Self {
            input,
            exit_code,
            output: output.into(),
            classification: Classification::from_exit_code(exit_code),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.classification == Classification::Ok
    }
}

/// Runs the external tool against a single input.
///
/// The batch logic only sees this trait, so it can be driven without spawning
/// anything.
pub trait ToolExecutor {
    fn execute(&self, input: &InputFile) -> HarnessResult<RunResult>;
}

/// Spawns the compiler as a child process (the real thing).
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    tool: PathBuf,
}

impl ProcessExecutor {
    pub fn new(tool: impl Into<PathBuf>) -> Self {
        Self { tool: tool.into() }
    }

    pub fn tool(&self) -> &Path {
        &self.tool
    }
}

impl ToolExecutor for ProcessExecutor {
    #[tracing::instrument(skip_all, fields(input = %input))]
    fn execute(&self, input: &InputFile) -> HarnessResult<RunResult> {
        let capture_err = |source: io::Error| HarnessError::Capture {
            tool: self.tool.clone(),
            source,
        };

        let (mut reader, writer) = io::pipe().map_err(capture_err)?;

        // The Command owns the parent's copies of the write end; it must be
        // gone before draining or the read never sees EOF.
        let mut child = {
            let stderr = writer.try_clone().map_err(capture_err)?;
            Command::new(&self.tool)
                .arg(input.path())
                .stdin(Stdio::null())
                .stdout(writer)
                .stderr(stderr)
                .spawn()
                .map_err(|source| HarnessError::Launch {
                    tool: self.tool.clone(),
                    source,
                })?
        };

        let mut raw = Vec::new();
        let drained = reader.read_to_end(&mut raw);
        drop(reader);

        let status = child.wait().map_err(capture_err)?;
        drained.map_err(capture_err)?;

        let exit_code = exit_code_of(status);
        tracing::debug!(exit_code, output_len = raw.len(), "compiler exited");

        Ok(RunResult::new(
            input.clone(),
            exit_code,
            String::from_utf8_lossy(&raw),
        ))
    }
}

/// Exit code of a finished child; signal deaths map to `-signal` on Unix.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }

    1
}
