//! Action dispatch
//!
//! The first argument selects what the process does; everything else about
//! the run follows from that choice.

use crate::crash;
use crate::error::{Result, UsageError, UsageResult};
use crate::GREETING;
use std::ffi::OsStr;
use std::fmt;
use std::io::Write;

/// Flag selecting [`Action::ReturnCode`]
pub const RETURN_CODE_FLAG: &str = "-rc";

/// Flag selecting [`Action::Stderr`]
pub const STDERR_FLAG: &str = "-stderr";

/// Flag selecting [`Action::Crash`]
pub const CRASH_FLAG: &str = "-error";

/// What a single run of the process does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Print the greeting to stdout and exit 0
    Stdout,
    /// Print the greeting to stderr and exit 0
    Stderr,
    /// Exit with the given status and no output
    ReturnCode(i32),
    /// Terminate abnormally through a null pointer dereference
    Crash,
}

impl Action {
    /// Classify the arguments following the program name.
    ///
    /// Only the first two arguments are looked at and they are compared
    /// byte for byte. Unknown flags, including ones that are not valid
    /// unicode, select the default [`Action::Stdout`].
    pub fn from_args<S: AsRef<OsStr>>(args: &[S]) -> UsageResult<Self> {
        let Some(first) = args.first() else {
            return Ok(Action::Stdout);
        };

        match first.as_ref().to_str() {
            Some(RETURN_CODE_FLAG) => {
                let value = args.get(1).ok_or(UsageError::MissingReturnCode)?;
                parse_return_code(value.as_ref()).map(Action::ReturnCode)
            }
            Some(STDERR_FLAG) => Ok(Action::Stderr),
            Some(CRASH_FLAG) => Ok(Action::Crash),
            _ => Ok(Action::Stdout),
        }
    }

    /// Perform the action and return the exit status for the process.
    ///
    /// Both streams are flushed before returning. [`Action::Crash`] does not
    /// return.
    pub fn execute<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> Result<i32> {
        let code = match self {
            Action::Stdout => {
                writeln!(out, "{}", GREETING)?;
                0
            }
            Action::Stderr => {
                writeln!(err, "{}", GREETING)?;
                0
            }
            Action::ReturnCode(code) => *code,
            Action::Crash => crash::null_dereference(),
        };

        out.flush()?;
        err.flush()?;
        Ok(code)
    }

    /// Short label for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Action::Stdout => "stdout",
            Action::Stderr => "stderr",
            Action::ReturnCode(_) => "return-code",
            Action::Crash => "crash",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::ReturnCode(code) => write!(f, "{} ({})", self.name(), code),
            _ => f.write_str(self.name()),
        }
    }
}

/// Parse the value given to `-rc`
fn parse_return_code(value: &OsStr) -> UsageResult<i32> {
    let value = value
        .to_str()
        .ok_or_else(|| UsageError::NonUnicodeReturnCode(value.to_string_lossy().into_owned()))?;
    value
        .trim()
        .parse::<i32>()
        .map_err(|source| UsageError::InvalidReturnCode {
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(action: Action) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = action.execute(&mut out, &mut err).unwrap();
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_no_args_selects_stdout() {
        let args: Vec<String> = Vec::new();
        assert_eq!(Action::from_args(&args).unwrap(), Action::Stdout);
    }

    #[test]
    fn test_flags() {
        assert_eq!(Action::from_args(&["-stderr"]).unwrap(), Action::Stderr);
        assert_eq!(Action::from_args(&["-error"]).unwrap(), Action::Crash);
        assert_eq!(
            Action::from_args(&["-rc", "17"]).unwrap(),
            Action::ReturnCode(17)
        );
    }

    #[test]
    fn test_unknown_flag_falls_through() {
        assert_eq!(Action::from_args(&["-xyz"]).unwrap(), Action::Stdout);
        assert_eq!(Action::from_args(&["--help"]).unwrap(), Action::Stdout);
        assert_eq!(Action::from_args(&["rc", "3"]).unwrap(), Action::Stdout);
    }

    #[test]
    fn test_flags_are_case_sensitive() {
        assert_eq!(Action::from_args(&["-STDERR"]).unwrap(), Action::Stdout);
    }

    #[test]
    fn test_only_first_argument_selects() {
        assert_eq!(
            Action::from_args(&["-xyz", "-stderr"]).unwrap(),
            Action::Stdout
        );
        assert_eq!(
            Action::from_args(&["-stderr", "-error"]).unwrap(),
            Action::Stderr
        );
    }

    #[test]
    fn test_return_code_ignores_extra_args() {
        assert_eq!(
            Action::from_args(&["-rc", "5", "-stderr"]).unwrap(),
            Action::ReturnCode(5)
        );
    }

    #[test]
    fn test_return_code_signed() {
        assert_eq!(
            Action::from_args(&["-rc", "-1"]).unwrap(),
            Action::ReturnCode(-1)
        );
        assert_eq!(
            Action::from_args(&["-rc", "+42"]).unwrap(),
            Action::ReturnCode(42)
        );
    }

    #[test]
    fn test_return_code_missing() {
        let result = Action::from_args(&["-rc"]);
        assert!(matches!(result, Err(UsageError::MissingReturnCode)));
    }

    #[test]
    fn test_return_code_invalid() {
        let result = Action::from_args(&["-rc", "abc"]);
        match result {
            Err(UsageError::InvalidReturnCode { value, .. }) => assert_eq!(value, "abc"),
            other => panic!("unexpected result: {:?}", other),
        }

        let result = Action::from_args(&["-rc", "99999999999"]);
        assert!(matches!(result, Err(UsageError::InvalidReturnCode { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_args() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let garbage = OsString::from_vec(vec![0xff, 0xfe]);

        let args = vec![garbage.clone(), OsString::from("-stderr")];
        assert_eq!(Action::from_args(&args).unwrap(), Action::Stdout);

        let args = vec![
            OsString::from("-rc"),
            OsString::from("7"),
            garbage.clone(),
        ];
        assert_eq!(Action::from_args(&args).unwrap(), Action::ReturnCode(7));

        let args = vec![OsString::from("-rc"), garbage];
        assert!(matches!(
            Action::from_args(&args),
            Err(UsageError::NonUnicodeReturnCode(_))
        ));
    }

    #[test]
    fn test_separator_is_not_a_flag() {
        assert_eq!(
            Action::from_args(&["--", "-rc", "3"]).unwrap(),
            Action::Stdout
        );
    }

    #[test]
    fn test_execute_stdout() {
        let (code, out, err) = run(Action::Stdout);
        assert_eq!(code, 0);
        assert_eq!(out, "Hello World !\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_execute_stderr() {
        let (code, out, err) = run(Action::Stderr);
        assert_eq!(code, 0);
        assert!(out.is_empty());
        assert_eq!(err, "Hello World !\n");
    }

    #[test]
    fn test_execute_return_code() {
        let (code, out, err) = run(Action::ReturnCode(17));
        assert_eq!(code, 17);
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::ReturnCode(3).to_string(), "return-code (3)");
        assert_eq!(Action::Crash.to_string(), "crash");
    }
}
