//! Main CLI application

use crate::action::Action;
use crate::error::TestProcessError;
use crate::ui::{Reporter, Verbosity};
use clap::{value_parser, Arg, ArgAction, Command};
use std::env;
use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};

/// Id of the positional collecting every argument after the program name
const ARGS_ID: &str = "args";

/// CLI application
pub struct App {
    /// The clap command
    command: Command,
    /// Diagnostic output
    reporter: Reporter,
}

impl App {
    /// Create a new app, taking verbosity from the environment
    pub fn new() -> Self {
        App {
            command: build_command(),
            reporter: Reporter::new(Verbosity::from_env()),
        }
    }

    /// Override the verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.reporter = Reporter::new(verbosity);
        self
    }

    /// Run against the given argv (program name included) and streams.
    ///
    /// Returns the exit status the process should terminate with.
    pub fn run_from<I, T, O, E>(
        self,
        argv: I,
        out: &mut O,
        err: &mut E,
    ) -> Result<i32, TestProcessError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
        O: Write,
        E: Write,
    {
        let matches = self.command.try_get_matches_from(literal_argv(argv))?;
        let args: Vec<OsString> = matches
            .get_many::<OsString>(ARGS_ID)
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        let action = Action::from_args(&args)?;
        self.reporter
            .print_debug(err, &format!("Selected action: {}", action))?;

        let code = action.execute(out, err)?;
        self.reporter
            .print_info(err, &format!("Exiting with status {}", code))?;

        Ok(code)
    }

    /// Same as [`App::run_from`], reporting a failed run on `err`.
    ///
    /// The returned error is always the one from the run, even when the
    /// report itself cannot be written.
    pub fn run_reporting<I, T, O, E>(
        self,
        argv: I,
        out: &mut O,
        err: &mut E,
    ) -> Result<i32, TestProcessError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
        O: Write,
        E: Write,
    {
        let reporter = self.reporter;
        let result = self.run_from(argv, out, err);
        if let Err(e) = &result {
            // Nowhere left to report a broken stderr.
            let _ = reporter.print_error(err, &e.to_string());
        }
        result
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the clap command.
///
/// Help and version flags are disabled and every token after the program
/// name is collected raw, so the dispatcher sees the command line unchanged.
pub fn build_command() -> Command {
    Command::new("testprocess")
        .about("Helper executable for testing process spawning")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new(ARGS_ID)
                .value_name("ARGS")
                .help("-rc <N> | -stderr | -error")
                .value_parser(value_parser!(OsString))
                .num_args(0..)
                .action(ArgAction::Append)
                .trailing_var_arg(true),
        )
}

/// Put an escape separator right after the program name.
///
/// Clap then takes every following token as a value, including a literal
/// `--` and tokens that are not valid unicode.
fn literal_argv<I, T>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut argv = argv.into_iter().map(Into::into);
    let Some(program) = argv.next() else {
        return Vec::new();
    };

    let mut literal = vec![program, OsString::from("--")];
    literal.extend(argv);
    literal
}

/// Run the CLI application with the process arguments and stdio
pub fn run() -> Result<i32, TestProcessError> {
    let stdout = io::stdout();
    let stderr = io::stderr();

    // Diagnostics go to stderr, so its terminal state decides on colors.
    colored::control::set_override(stderr.is_terminal() && env::var_os("NO_COLOR").is_none());

    App::new().run_reporting(env::args_os(), &mut stdout.lock(), &mut stderr.lock())
}
