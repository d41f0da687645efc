//! Level and date-to-level mapping types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Canonical key format for a calendar date
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Format a date as its `YYYY-MM-DD` lookup key
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Discrete intensity of a day's activity, 0 (no data) through 5 (maximum)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Level(u8);

impl Level {
    pub const NONE: Level = Level(0);
    pub const MAX: Level = Level(5);

    /// Number of distinct levels (palette size)
    pub const COUNT: usize = 6;

    /// Clamp any raw value into `[0, 5]`
    pub fn clamp(raw: i64) -> Self {
        Self(raw.clamp(0, Self::MAX.0 as i64) as u8)
    }

    /// Palette index for this level
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Classify a day's tally.
    ///
    /// - nothing expected: no data (0)
    /// - none completed: 1
    /// - fewer than half: 2
    /// - at least half but not all: 3
    /// - all completed: 4, or 5 when the extra goal was met too
    pub fn classify(completed: u8, total: u8, extra: bool) -> Self {
        if total == 0 {
            return Self::NONE;
        }
        let completed = completed.min(total);
        if completed == 0 {
            Self(1)
        } else if completed == total {
            if extra {
                Self(5)
            } else {
                Self(4)
            }
        } else if (completed as u16) * 2 < total as u16 {
            Self(2)
        } else {
            Self(3)
        }
    }
}

/// Raw per-day tally as stored by the host app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DayTally {
    pub completed: u8,
    pub total: u8,
    #[serde(default)]
    pub extra: bool,
}

impl DayTally {
    pub fn level(self) -> Level {
        Level::classify(self.completed, self.total, self.extra)
    }
}

/// Date key to raw level mapping.
///
/// Values are kept as given; clamping happens at lookup so that
/// out-of-range data is tolerated rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DateLevelMap {
    levels: HashMap<String, i64>,
}

impl DateLevelMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, raw: i64) {
        self.levels.insert(key.into(), raw);
    }

    /// Raw value stored under `key`, unclamped
    pub fn get(&self, key: &str) -> Option<i64> {
        self.levels.get(key).copied()
    }

    /// Clamped level for a date; absent dates are Level 0
    pub fn level_for(&self, date: NaiveDate) -> Level {
        self.get(&date_key(date))
            .map(Level::clamp)
            .unwrap_or(Level::NONE)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl FromIterator<(String, i64)> for DateLevelMap {
    fn from_iter<I: IntoIterator<Item = (String, i64)>>(iter: I) -> Self {
        Self {
            levels: iter.into_iter().collect(),
        }
    }
}
