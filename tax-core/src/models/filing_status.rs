use std::fmt;

use serde::{Deserialize, Serialize};

/// Filing category that selects which bracket table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingStatus {
    Single,
    Joint,
    HeadOfHousehold,
}

impl FilingStatus {
    /// Every status, in the order the reference tables are listed.
    pub const ALL: [FilingStatus; 3] = [Self::Single, Self::Joint, Self::HeadOfHousehold];

    /// Canonical lower-case label, as typed at the prompt and used in CSV files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Joint => "joint",
            Self::HeadOfHousehold => "head of household",
        }
    }

    /// Parses free-text input.
    ///
    /// Matching is case-insensitive, ignores surrounding whitespace and
    /// treats any run of inner whitespace as a single space.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        match normalized.as_str() {
            "single" => Some(Self::Single),
            "joint" => Some(Self::Joint),
            "head of household" => Some(Self::HeadOfHousehold),
            _ => None,
        }
    }
}

impl fmt::Display for FilingStatus {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let name = match self {
            Self::Single => "Single",
            Self::Joint => "Joint",
            Self::HeadOfHousehold => "Head of Household",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_canonical_labels() {
        for status in FilingStatus::ALL {
            assert_eq!(FilingStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(FilingStatus::parse("SINGLE"), Some(FilingStatus::Single));
        assert_eq!(FilingStatus::parse("Joint"), Some(FilingStatus::Joint));
        assert_eq!(
            FilingStatus::parse("Head Of Household"),
            Some(FilingStatus::HeadOfHousehold)
        );
    }

    #[test]
    fn parse_collapses_whitespace() {
        assert_eq!(
            FilingStatus::parse("  head   of\thousehold "),
            Some(FilingStatus::HeadOfHousehold)
        );
    }

    #[test]
    fn parse_rejects_unknown_labels() {
        assert_eq!(FilingStatus::parse("married"), None);
        assert_eq!(FilingStatus::parse(""), None);
        assert_eq!(FilingStatus::parse("headofhousehold"), None);
    }

    #[test]
    fn display_uses_title_case() {
        assert_eq!(FilingStatus::HeadOfHousehold.to_string(), "Head of Household");
    }
}
