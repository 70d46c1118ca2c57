//! Argument parsing and the single invocation path.
//!
//! # Responsibility
//! - Take the first argument after the program name as the name.
//! - Render the greeting for an injected hour onto the given writers.
//!
//! # Invariants
//! - No flags exist. `-x`, `--help` and `--` are all names.
//! - Arguments after the name are ignored.
//! - Stdout carries only the greeting line.
//! - A missing name never reaches the generator and exits with status 1.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use greeting_core::GreetingError;
use log::{info, warn};
use std::error::Error;
use std::ffi::OsString;
use std::fmt::{Display, Formatter};
use std::io::Write;

pub const EXIT_OK: u8 = 0;
pub const EXIT_USAGE: u8 = 1;

/// Prints a greeting that depends on the time of day.
#[derive(Debug, Parser)]
#[command(
    name = "greet",
    about,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Name to greet. Used verbatim, may be empty.
    #[arg(allow_hyphen_values = true)]
    pub name: OsString,
    /// Ignored trailing arguments.
    #[arg(hide = true, allow_hyphen_values = true)]
    pub rest: Vec<OsString>,
}

/// Failures handled at the entry point.
#[derive(Debug)]
pub enum CliError {
    MissingArgument,
    Usage(String),
    Greeting(GreetingError),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingArgument => write!(f, "missing required argument <NAME>"),
            Self::Usage(message) => write!(f, "{message}"),
            Self::Greeting(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Greeting(err) => Some(err),
            Self::MissingArgument | Self::Usage(_) => None,
        }
    }
}

impl From<GreetingError> for CliError {
    fn from(value: GreetingError) -> Self {
        Self::Greeting(value)
    }
}

/// Runs one invocation and returns the process exit status.
///
/// `args` includes the program name, as `std::env::args_os` yields it.
pub fn run<I, T>(args: I, hour: u32, out: &mut impl Write, err: &mut impl Write) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let cli = match Cli::try_parse_from(positional_only(args)) {
        Ok(cli) => cli,
        Err(parse_err) => match parse_err.kind() {
            ErrorKind::MissingRequiredArgument => {
                return report_usage_error(err, &CliError::MissingArgument);
            }
            _ => {
                let message = parse_err.render().to_string();
                return report_usage_error(err, &CliError::Usage(message));
            }
        },
    };

    match greet(&cli, hour) {
        Ok(line) => match writeln!(out, "{line}") {
            Ok(()) => {
                info!(
                    "event=greeting_printed module=cli status=ok hour={hour} ignored_args={}",
                    cli.rest.len()
                );
                EXIT_OK
            }
            Err(io_err) => {
                warn!("event=greeting_printed module=cli status=error error={io_err}");
                EXIT_USAGE
            }
        },
        Err(greet_err) => {
            warn!("event=greeting_failed module=cli status=error error={greet_err}");
            let _ = writeln!(err, "error: {greet_err}");
            EXIT_USAGE
        }
    }
}

/// Puts `--` right after the program name so the parser reads every user
/// argument as a positional value, a literal `--` included.
fn positional_only<I, T>(args: I) -> impl Iterator<Item = OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let program = args.next().unwrap_or_else(|| OsString::from("greet"));
    [program, OsString::from("--")].into_iter().chain(args)
}

fn greet(cli: &Cli, hour: u32) -> Result<String, CliError> {
    // Invalid UTF-8 is kept as U+FFFD rather than rejected.
    let name = cli.name.to_string_lossy();
    Ok(greeting_core::generate(&name, hour)?)
}

fn report_usage_error(err: &mut impl Write, cli_err: &CliError) -> u8 {
    warn!("event=args_rejected module=cli status=error kind={}", error_kind(cli_err));
    match cli_err {
        CliError::Usage(rendered) => {
            let _ = write!(err, "{rendered}");
        }
        other => {
            let usage = Cli::command().render_usage();
            let _ = writeln!(err, "error: {other}\n\n{usage}");
        }
    }
    EXIT_USAGE
}

fn error_kind(cli_err: &CliError) -> &'static str {
    match cli_err {
        CliError::MissingArgument => "missing_argument",
        CliError::Usage(_) => "usage",
        CliError::Greeting(_) => "greeting",
    }
}
