//! Greeting composition.
//!
//! # Responsibility
//! - Compose `"{phrase}, {name}!"` from an injected hour and a caller name.
//!
//! # Invariants
//! - `name` is reproduced verbatim. No trimming, casing or validation.
//! - The wall clock is never read here; callers pass the hour in.

use crate::model::locale::Locale;
use crate::model::time_of_day::TimeOfDay;
use crate::model::GreetingResult;
use log::debug;

/// Builds the English greeting for `name` at `hour`.
///
/// # Errors
/// - Returns `HourOutOfRange` when `hour > 23`.
pub fn generate(name: &str, hour: u32) -> GreetingResult<String> {
    generate_localized(name, hour, Locale::English)
}

/// Builds the greeting for `name` at `hour` using the `locale` templates.
///
/// # Errors
/// - Returns `HourOutOfRange` when `hour > 23`.
pub fn generate_localized(name: &str, hour: u32, locale: Locale) -> GreetingResult<String> {
    let period = TimeOfDay::from_hour(hour)?;
    debug!(
        "event=greeting_generate module=greeting status=ok hour={} period={} locale={} name_chars={}",
        hour,
        period.as_str(),
        locale,
        name.chars().count()
    );
    Ok(format!(
        "{}, {}{}!",
        period.phrase(locale),
        name,
        locale.name_suffix()
    ))
}

#[cfg(test)]
mod tests {
    use super::{generate, generate_localized};
    use crate::model::locale::Locale;
    use crate::model::GreetingError;

    #[test]
    fn morning_greeting_for_alice() {
        assert_eq!(generate("Alice", 9).unwrap(), "Good morning, Alice!");
    }

    #[test]
    fn empty_name_in_the_evening() {
        assert_eq!(generate("", 20).unwrap(), "Good evening, !");
    }

    #[test]
    fn korean_template_appends_honorific() {
        assert_eq!(
            generate_localized("민수", 14, Locale::Korean).unwrap(),
            "좋은 오후예요, 민수님!"
        );
    }

    #[test]
    fn out_of_range_hour_fails_fast() {
        assert_eq!(
            generate("Alice", 99),
            Err(GreetingError::HourOutOfRange { hour: 99 })
        );
    }
}
