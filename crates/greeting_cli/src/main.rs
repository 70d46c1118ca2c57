//! `greet` entry point.
//!
//! # Responsibility
//! - Read the local wall-clock hour and hand it to the invocation path.
//! - Keep logging on stderr so stdout stays a single greeting line.

mod cli;

use chrono::Timelike;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = greeting_core::init_logging(greeting_core::default_log_level()) {
        eprintln!("warning: logging disabled: {err}");
    }
    log::info!(
        "event=cli_start module=cli status=ok core_version={}",
        greeting_core::core_version()
    );

    let hour = chrono::Local::now().hour();
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let status = cli::run(
        std::env::args_os(),
        hour,
        &mut stdout.lock(),
        &mut stderr.lock(),
    );
    ExitCode::from(status)
}
