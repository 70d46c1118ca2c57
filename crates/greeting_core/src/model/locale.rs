//! Template set selection.

use std::fmt::{Display, Formatter};

/// Fixed template set used to render a greeting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// `"{phrase}, {name}!"`
    #[default]
    English,
    /// `"{phrase}, {name}님!"`
    Korean,
}

impl Locale {
    /// Short tag used in log events.
    pub fn as_tag(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Korean => "ko",
        }
    }

    /// Suffix appended directly after the name, before `!`.
    pub(crate) fn name_suffix(self) -> &'static str {
        match self {
            Self::English => "",
            Self::Korean => "님",
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}
