//! Diagnostic output
//!
//! Harnesses compare stderr byte for byte, so diagnostics stay quiet unless
//! asked for through the environment.

use colored::Colorize;
use std::env;
use std::io::{self, Write};

/// Environment variable selecting the diagnostic verbosity
pub const VERBOSITY_ENV: &str = "TESTPROCESS_VERBOSITY";

/// Verbosity levels for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    Silent = 0,
    #[default]
    Quiet = 1,
    Normal = 2,
    Verbose = 3,
}

impl Verbosity {
    /// Parse a level name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "silent" => Some(Verbosity::Silent),
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            _ => None,
        }
    }

    /// Read the level from [`VERBOSITY_ENV`], falling back to the default
    pub fn from_env() -> Self {
        env::var(VERBOSITY_ENV)
            .ok()
            .and_then(|value| Self::from_name(&value))
            .unwrap_or_default()
    }
}

/// Writes prefixed diagnostic lines gated by a verbosity level
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    pub verbosity: Verbosity,
}

impl Reporter {
    pub fn new(verbosity: Verbosity) -> Self {
        Reporter { verbosity }
    }

    /// Print error message
    pub fn print_error<W: Write>(&self, w: &mut W, message: &str) -> io::Result<()> {
        if self.verbosity >= Verbosity::Quiet {
            writeln!(w, "{} {}", "[ERROR]".red().bold(), message)?;
        }
        Ok(())
    }

    /// Print info message
    pub fn print_info<W: Write>(&self, w: &mut W, message: &str) -> io::Result<()> {
        if self.verbosity >= Verbosity::Normal {
            writeln!(w, "{} {}", "[INFO]".cyan(), message)?;
        }
        Ok(())
    }

    /// Print debug message (only in verbose mode)
    pub fn print_debug<W: Write>(&self, w: &mut W, message: &str) -> io::Result<()> {
        if self.verbosity >= Verbosity::Verbose {
            writeln!(w, "{} {}", "[DEBUG]".dimmed(), message)?;
        }
        Ok(())
    }
}
