//! Harness configuration
//!
//! Everything is fixed relative to the harness's own root: the compiler is the
//! debug build at `target/debug/pris` and the inputs are `examples/*.pris`.
//! The three fields can be overridden from the command line; the defaults
//! reproduce the fixed layout.

use std::path::{Path, PathBuf};

/// Directory containing this crate's `Cargo.toml`, captured at compile time.
pub const HARNESS_ROOT: &str = env!("CARGO_MANIFEST_DIR");

/// Compiler binary, relative to the root.
pub const DEFAULT_TOOL: &str = "target/debug/pris";

/// Examples directory, relative to the root.
pub const DEFAULT_EXAMPLES_DIR: &str = "examples";

/// File-name suffix of Pris sources.
pub const DEFAULT_SUFFIX: &str = ".pris";

/// Where to find the compiler, which directory to scan, and which files to pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Executable invoked once per example
    pub tool_path: PathBuf,
    /// Directory scanned for examples (not recursive)
    pub examples_dir: PathBuf,
    /// Entries are kept iff their file name ends with this
    pub suffix: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::for_root(HARNESS_ROOT)
    }
}

impl HarnessConfig {
    /// Default layout resolved against `root`.
    pub fn for_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            tool_path: root.join(DEFAULT_TOOL),
            examples_dir: root.join(DEFAULT_EXAMPLES_DIR),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }

    /// Override the compiler binary
    pub fn with_tool_path(mut self, tool_path: impl Into<PathBuf>) -> Self {
        self.tool_path = tool_path.into();
        self
    }

    /// Override the examples directory
    pub fn with_examples_dir(mut self, examples_dir: impl Into<PathBuf>) -> Self {
        self.examples_dir = examples_dir.into();
        self
    }

    /// Override the file-name suffix
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}
