//! Common test utilities

use assert_cmd::Command;
use testprocess::ui::VERBOSITY_ENV;

/// Command for the compiled binary with diagnostics at their default level
pub fn testprocess_cmd() -> Command {
    let mut cmd = Command::cargo_bin("testprocess").unwrap();
    cmd.env_remove(VERBOSITY_ENV).env("NO_COLOR", "1");
    cmd
}
