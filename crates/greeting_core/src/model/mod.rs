//! Greeting domain model.
//!
//! # Responsibility
//! - Map an hour of the day onto one of four fixed periods.
//! - Hold the fixed phrase tables for every supported locale.
//!
//! # Invariants
//! - Period boundaries are 6/12/18/22 and are half-open `[start, end)`.
//! - Boundaries are identical for every locale.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod locale;
pub mod time_of_day;

pub type GreetingResult<T> = Result<T, GreetingError>;

/// Errors raised while resolving greeting inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GreetingError {
    /// Hour is not within `[0, 23]`.
    HourOutOfRange { hour: u32 },
}

impl Display for GreetingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HourOutOfRange { hour } => {
                write!(f, "hour {hour} is out of range; expected 0..=23")
            }
        }
    }
}

impl Error for GreetingError {}
