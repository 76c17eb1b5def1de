//! Government tier classification for office titles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The level of government an office belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Federal,
    State,
    Local,
}

impl Tier {
    /// All tiers in display order.
    pub const ALL: [Self; 3] = [Self::Federal, Self::State, Self::Local];

    /// Classify an office title by case-insensitive keyword rules.
    ///
    /// Rules are checked in order and the first match wins:
    ///
    /// 1. federal: "president" or "senate", or both "representative" and "u.s."
    /// 2. state: "governor", "state senate", "state house" or "state representative"
    /// 3. local: anything else
    ///
    /// Because rule 1 matches any "senate", titles such as
    /// "State Senate District 5" classify as [`Tier::Federal`].
    #[must_use]
    pub fn classify(office: &str) -> Self {
        let lower = office.to_lowercase();
        let has = |needle: &str| lower.contains(needle);

        if has("president") || has("senate") || (has("representative") && has("u.s.")) {
            return Self::Federal;
        }

        if has("governor")
            || has("state senate")
            || has("state house")
            || has("state representative")
        {
            return Self::State;
        }

        Self::Local
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Federal => "federal",
            Self::State => "state",
            Self::Local => "local",
        }
    }

    /// Section heading used when grouping records.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Federal => "Federal",
            Self::State => "State",
            Self::Local => "Local",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tier '{0}', expected federal, state or local")]
pub struct ParseTierError(pub String);

impl FromStr for Tier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "federal" => Ok(Self::Federal),
            "state" => Ok(Self::State),
            "local" => Ok(Self::Local),
            _ => Err(ParseTierError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn federal_titles() {
        let cases = [
            "President of the United States",
            "Vice President of the United States",
            "U.S. Representative",
            "Representative in Congress (U.S.)",
            "United States Senate",
        ];

        for title in cases {
            assert_eq!(Tier::classify(title), Tier::Federal, "title '{title}'");
        }
    }

    #[test]
    fn state_titles() {
        let cases = [
            "Governor of California",
            "Lieutenant Governor",
            "State House District 12",
            "State Representative District 4",
        ];

        for title in cases {
            assert_eq!(Tier::classify(title), Tier::State, "title '{title}'");
        }
    }

    #[test]
    fn local_titles() {
        let cases = ["Mayor", "County Sheriff", "City Council Member", "", "Representative"];

        for title in cases {
            assert_eq!(Tier::classify(title), Tier::Local, "title '{title}'");
        }
    }

    #[test]
    fn senator_is_not_a_senate_match() {
        // Keyword matching is by substring; "senator" does not contain "senate".
        assert_eq!(Tier::classify("U.S. Senator"), Tier::Local);
        assert_eq!(Tier::classify("U.S. Senate"), Tier::Federal);
    }

    #[test]
    fn state_senate_classifies_as_federal() {
        // "senate" alone satisfies the federal rule before the state rules run.
        assert_eq!(Tier::classify("State Senate District 5"), Tier::Federal);
        assert_eq!(Tier::classify("CA State Senate"), Tier::Federal);
    }

    #[test]
    fn classification_ignores_case() {
        assert_eq!(Tier::classify("u.s. REPRESENTATIVE"), Tier::Federal);
        assert_eq!(Tier::classify("GOVERNOR"), Tier::State);
    }

    #[test]
    fn us_and_representative_are_order_independent() {
        assert_eq!(Tier::classify("Representative, U.S. House"), Tier::Federal);
        assert_eq!(Tier::classify("U.S. House Representative"), Tier::Federal);
    }

    #[test]
    fn parse_round_trips_display() {
        for tier in Tier::ALL {
            assert_eq!(tier.to_string().parse::<Tier>(), Ok(tier));
        }
        assert_eq!("  Federal ".parse::<Tier>(), Ok(Tier::Federal));
        assert!("national".parse::<Tier>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Tier::State).unwrap();
        assert_eq!(json, "\"state\"");
    }
}
