//! Error types for testprocess

use std::io;
use std::num::ParseIntError;
use thiserror::Error;

/// Result type alias for testprocess operations
pub type Result<T> = std::result::Result<T, TestProcessError>;

/// Main error type for testprocess
#[derive(Error, Debug)]
pub enum TestProcessError {
    /// Bad arguments for one of the dispatch flags
    #[error("Usage error: {0}")]
    Usage(#[from] UsageError),

    /// Argument collection failed before dispatch
    #[error("Argument error: {}", .0.kind())]
    Cli(#[from] clap::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Argument errors detected while classifying the command line
#[derive(Error, Debug)]
pub enum UsageError {
    #[error("'-rc' requires an integer exit code")]
    MissingReturnCode,

    #[error("Invalid exit code '{value}': {source}")]
    InvalidReturnCode {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Invalid exit code '{0}': not valid unicode")]
    NonUnicodeReturnCode(String),
}

/// Specialized result type for argument classification
pub type UsageResult<T> = std::result::Result<T, UsageError>;

impl TestProcessError {
    /// Exit status the process terminates with when this error reaches `main`
    pub fn exit_code(&self) -> i32 {
        match self {
            TestProcessError::Usage(_) => 2,
            TestProcessError::Cli(e) => e.exit_code(),
            TestProcessError::Io(_) => 1,
        }
    }
}
