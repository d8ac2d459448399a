//! Error handling for the `glintc` driver.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the `glintc` binary.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("failed to read {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse fixture {0}: {1}")]
    Fixture(PathBuf, #[source] serde_json::Error),

    /// Not a hard failure, recorded so `main` can map it to exit code 1.
    #[error("compilation failed: {0} error(s), {1} warning(s)")]
    CompilationFailed(u32, u32),
}

pub type Result<T> = std::result::Result<T, DriverError>;
