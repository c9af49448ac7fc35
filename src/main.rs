use std::process;

fn main() {
    // Errors are already reported on stderr by the app.
    match testprocess::cli::run() {
        Ok(code) => process::exit(code),
        Err(e) => process::exit(e.exit_code()),
    }
}
