//! Hour-to-period lookup.
//!
//! # Invariants
//! - Ranges are checked in table order and the first match wins.
//! - Any valid hour not covered by the table is `LateNight`.

use crate::model::locale::Locale;
use crate::model::{GreetingError, GreetingResult};

/// Largest hour accepted by [`TimeOfDay::from_hour`].
pub const MAX_HOUR: u32 = 23;

/// Half-open `[start, end)` hour ranges, evaluated in order.
const PERIOD_TABLE: [(u32, u32, TimeOfDay); 3] = [
    (6, 12, TimeOfDay::Morning),
    (12, 18, TimeOfDay::Afternoon),
    (18, 22, TimeOfDay::Evening),
];

/// Period of the day a greeting is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    /// `[6, 12)`
    Morning,
    /// `[12, 18)`
    Afternoon,
    /// `[18, 22)`
    Evening,
    /// `[22, 24)` and `[0, 6)`
    LateNight,
}

impl TimeOfDay {
    /// Resolves the period for a wall-clock hour.
    ///
    /// # Errors
    /// - Returns `HourOutOfRange` when `hour > 23`.
    pub fn from_hour(hour: u32) -> GreetingResult<Self> {
        if hour > MAX_HOUR {
            return Err(GreetingError::HourOutOfRange { hour });
        }
        let period = PERIOD_TABLE
            .iter()
            .find(|(start, end, _)| (*start..*end).contains(&hour))
            .map(|(_, _, period)| *period)
            .unwrap_or(Self::LateNight);
        Ok(period)
    }

    /// Fixed phrase for this period in the given locale.
    pub fn phrase(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::English, Self::Morning) => "Good morning",
            (Locale::English, Self::Afternoon) => "Good afternoon",
            (Locale::English, Self::Evening) => "Good evening",
            (Locale::English, Self::LateNight) => "Late night greeting",
            (Locale::Korean, Self::Morning) => "좋은 아침이에요",
            (Locale::Korean, Self::Afternoon) => "좋은 오후예요",
            (Locale::Korean, Self::Evening) => "좋은 저녁이에요",
            (Locale::Korean, Self::LateNight) => "늦은 시간이네요",
        }
    }

    /// Stable lowercase label used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::LateNight => "late_night",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TimeOfDay, MAX_HOUR};
    use crate::model::GreetingError;

    #[test]
    fn boundaries_are_half_open() {
        assert_eq!(TimeOfDay::from_hour(5), Ok(TimeOfDay::LateNight));
        assert_eq!(TimeOfDay::from_hour(6), Ok(TimeOfDay::Morning));
        assert_eq!(TimeOfDay::from_hour(11), Ok(TimeOfDay::Morning));
        assert_eq!(TimeOfDay::from_hour(12), Ok(TimeOfDay::Afternoon));
        assert_eq!(TimeOfDay::from_hour(17), Ok(TimeOfDay::Afternoon));
        assert_eq!(TimeOfDay::from_hour(18), Ok(TimeOfDay::Evening));
        assert_eq!(TimeOfDay::from_hour(21), Ok(TimeOfDay::Evening));
        assert_eq!(TimeOfDay::from_hour(22), Ok(TimeOfDay::LateNight));
        assert_eq!(TimeOfDay::from_hour(0), Ok(TimeOfDay::LateNight));
        assert_eq!(TimeOfDay::from_hour(MAX_HOUR), Ok(TimeOfDay::LateNight));
    }

    #[test]
    fn rejects_hour_past_end_of_day() {
        assert_eq!(
            TimeOfDay::from_hour(24),
            Err(GreetingError::HourOutOfRange { hour: 24 })
        );
    }
}
