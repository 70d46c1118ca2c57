//! Core logic for the time-of-day greeting.
//! This crate owns the hour boundaries and the greeting templates.

pub mod greeting;
pub mod logging;
pub mod model;

pub use greeting::{generate, generate_localized};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::locale::Locale;
pub use model::time_of_day::{TimeOfDay, MAX_HOUR};
pub use model::{GreetingError, GreetingResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
