//! The batch loop
//!
//! Examples are checked one at a time, in discovery order, and the batch
//! stops at the first failure. The examples processed before an abort are
//! exactly the discovered prefix up to and including the failing one.

use crate::config::HarnessConfig;
use crate::discovery::{self, InputFile};
use crate::error::HarnessResult;
use crate::report::Reporter;
use crate::runner::{ProcessExecutor, RunResult, ToolExecutor};

/// How a batch ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Every discovered example compiled
    Passed { checked: usize },
    /// `failure` was the first example that did not; `checked` includes it
    Failed { checked: usize, failure: RunResult },
}

impl BatchOutcome {
    /// Exit code for the harness process.
    pub fn exit_code(&self) -> i32 {
        match self {
            BatchOutcome::Passed { .. } => 0,
            BatchOutcome::Failed { failure, .. } => failure.exit_code,
        }
    }

    /// Number of compiler invocations made.
    pub fn checked(&self) -> usize {
        match self {
            BatchOutcome::Passed { checked } | BatchOutcome::Failed { checked, .. } => *checked,
        }
    }
}

/// Check every input in order, stopping at the first failure.
///
/// ## Errors
///
/// Discovery, launch, capture, and report errors abort the batch immediately
/// and are returned as-is. A compiler that runs and exits non-zero is not an
/// error; it ends the batch with [`BatchOutcome::Failed`].
pub fn run_batch<I, E, R>(inputs: I, executor: &E, reporter: &mut R) -> HarnessResult<BatchOutcome>
where
    I: IntoIterator<Item = HarnessResult<InputFile>>,
    E: ToolExecutor + ?Sized,
    R: Reporter + ?Sized,
{
    let mut checked = 0;

    for input in inputs {
        let input = input?;
        let result = executor.execute(&input)?;
        checked += 1;

        if result.is_ok() {
            reporter.on_ok(&result)?;
        } else {
            tracing::info!(input = %result.input, exit_code = result.exit_code, "stopping at first failure");
            reporter.on_failed(&result)?;
            return Ok(BatchOutcome::Failed {
                checked,
                failure: result,
            });
        }
    }

    Ok(BatchOutcome::Passed { checked })
}

/// Discover the configured examples and run the configured compiler on each.
pub fn check_examples<R>(config: &HarnessConfig, reporter: &mut R) -> HarnessResult<BatchOutcome>
where
    R: Reporter + ?Sized,
{
    tracing::info!(
        dir = %config.examples_dir.display(),
        suffix = %config.suffix,
        tool = %config.tool_path.display(),
        "checking examples"
    );

    let inputs = discovery::discover(&config.examples_dir, &config.suffix)?;
    let executor = ProcessExecutor::new(&config.tool_path);
    let outcome = run_batch(inputs, &executor, reporter)?;

    tracing::info!(checked = outcome.checked(), exit_code = outcome.exit_code(), "done");
    Ok(outcome)
}
