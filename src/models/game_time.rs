//! In-game date representation
//!
//! A `GameTime` is the (year, season, day) triple the game stores in its save
//! metadata. It renders two ways:
//!
//! - compact `YY-S-DD` (zero-padded year and day, 1-based season digit), used
//!   in archive filenames where string order must equal chronological order
//! - human `Day D of Season, Year Y`, used for display

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SdsmError, SdsmResult};

/// One of the four seasons of the in-game calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Resolve a 0-based season index (0 = Spring .. 3 = Winter)
    pub fn from_index(index: i64) -> SdsmResult<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| SdsmError::InvalidSeason(index.to_string()))
    }

    /// Resolve a season name
    ///
    /// Matching is case-sensitive. The capitalized display name and the
    /// all-lowercase form the game writes into its save files are accepted.
    pub fn from_name(name: &str) -> SdsmResult<Self> {
        Self::ALL
            .into_iter()
            .find(|season| name == season.name() || name == season.key())
            .ok_or_else(|| SdsmError::InvalidSeason(name.to_string()))
    }

    /// 0-based index
    pub fn index(self) -> usize {
        self as usize
    }

    /// 1-based digit used in the compact form
    pub fn digit(self) -> usize {
        self.index() + 1
    }

    /// Capitalized display name
    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }

    /// Lowercase form stored by the game in `currentSeason`
    fn key(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An immutable in-game date
///
/// Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameTime {
    pub year: u32,
    pub season: Season,
    pub day: u32,
}

impl GameTime {
    pub fn new(year: u32, season: Season, day: u32) -> Self {
        Self { year, season, day }
    }

    /// Sortable compact form, e.g. `01-2-05`
    pub fn compact(&self) -> String {
        format!("{:02}-{}-{:02}", self.year, self.season.digit(), self.day)
    }

    /// Human-readable form, e.g. `Day 5 of Summer, Year 1`
    pub fn human(&self) -> String {
        format!("Day {} of {}, Year {}", self.day, self.season, self.year)
    }

    /// Parse the compact form back into a `GameTime`
    ///
    /// Returns `None` when the string is not of the form `YY-S-DD` or the
    /// season digit is outside 1..=4.
    pub fn parse_compact(s: &str) -> Option<Self> {
        let mut parts = s.trim().split('-');
        let year = parts.next()?;
        let season = parts.next()?;
        let day = parts.next()?;
        if parts.next().is_some() || year.len() < 2 || season.len() != 1 || day.len() < 2 {
            return None;
        }

        let year: u32 = year.parse().ok()?;
        let digit: i64 = season.parse().ok()?;
        let day: u32 = day.parse().ok()?;
        let season = Season::from_index(digit - 1).ok()?;

        Some(Self { year, season, day })
    }
}

impl fmt::Display for GameTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.compact())
    }
}
