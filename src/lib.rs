//! Testprocess - a helper executable for process-spawning tests
//!
//! Test harnesses launch this binary to check how they deal with exit codes,
//! output on stderr and processes that die abnormally.

// Public modules
pub mod action;
pub mod cli;
pub mod crash;
pub mod error;
pub mod ui;

// Re-export commonly used types
pub use action::Action;
pub use error::{Result, TestProcessError};

/// Current version of testprocess
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Line written by the stdout and stderr actions (without the newline)
pub const GREETING: &str = "Hello World !";
