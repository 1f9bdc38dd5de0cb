//! Difficulty tiers and the range-top bounds they allow.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A named difficulty level with a fixed allowed range-top interval.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum DifficultyTier {
    Easy,
    Medium,
    Hard,
}

impl DifficultyTier {
    /// Every tier, in menu order.
    pub const ALL: [DifficultyTier; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Inclusive `(low, high)` bounds on the range-top for this tier.
    pub const fn bounds(self) -> (u32, u32) {
        match self {
            Self::Easy => (20, 30),
            Self::Medium => (100, 200),
            Self::Hard => (500, 1000),
        }
    }

    /// Whether `range_top` is an allowed range-top for this tier.
    pub fn admits(self, range_top: i64) -> bool {
        let (low, high) = self.bounds();
        (i64::from(low)..=i64::from(high)).contains(&range_top)
    }

    pub fn hint(self) -> RangeHint {
        let (low, high) = self.bounds();
        RangeHint {
            tier: self,
            low,
            high,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raised when text names no known tier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown difficulty '{0}', expected one of: easy, medium, hard")]
pub struct UnknownTier(pub String);

impl FromStr for DifficultyTier {
    type Err = UnknownTier;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownTier(s.to_string()))
    }
}

/// Bounds of a tier, handed to the presentation layer as a hint.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct RangeHint {
    pub tier: DifficultyTier,
    pub low: u32,
    pub high: u32,
}

impl fmt::Display for RangeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "For {} difficulty, enter a range between {} and {}.",
            self.tier, self.low, self.high
        )
    }
}
