//! CLI interface and argument parsing
//!
//! This module collects the command line through clap and hands it to the
//! action dispatcher.

pub mod app;

// Re-export main types
pub use app::*;
