//! Roster settings.
//!
//! Missing fields default once at deserialization time; `sanitized` clamps
//! limits so downstream code never re-checks them.

use serde::{Deserialize, Serialize};

use super::ShiftKind;

/// Default consecutive day-shift limit.
pub const DEFAULT_MAX_DAY_STREAK: u32 = 3;
/// Default consecutive night-shift limit.
pub const DEFAULT_MAX_NIGHT_STREAK: u32 = 2;
/// Default consecutive any-shift limit.
pub const DEFAULT_MAX_ANY_STREAK: u32 = 3;

/// User-facing roster settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Consecutive-shift limits.
    pub max_streak: MaxStreak,
    /// Presentation hint only.
    pub use_worker_colors: bool,
}

/// Consecutive-shift limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaxStreak {
    #[serde(rename = "D")]
    pub day: u32,
    #[serde(rename = "N")]
    pub night: u32,
    #[serde(rename = "ANY")]
    pub any: u32,
}

impl Default for MaxStreak {
    fn default() -> Self {
        Self {
            day: DEFAULT_MAX_DAY_STREAK,
            night: DEFAULT_MAX_NIGHT_STREAK,
            any: DEFAULT_MAX_ANY_STREAK,
        }
    }
}

impl MaxStreak {
    /// Limit for one shift kind, never below 1.
    #[inline]
    pub fn limit(&self, kind: ShiftKind) -> usize {
        let raw = match kind {
            ShiftKind::Day => self.day,
            ShiftKind::Night => self.night,
        };
        raw.max(1) as usize
    }

    /// Combined limit, never below 1.
    #[inline]
    pub fn any_limit(&self) -> usize {
        self.any.max(1) as usize
    }
}

impl Settings {
    /// Creates settings with the given streak limits.
    pub fn with_max_streak(mut self, day: u32, night: u32, any: u32) -> Self {
        self.max_streak = MaxStreak { day, night, any };
        self
    }

    /// Returns a copy with every limit at least 1.
    pub fn sanitized(&self) -> Self {
        Self {
            max_streak: MaxStreak {
                day: self.max_streak.day.max(1),
                night: self.max_streak.night.max(1),
                any: self.max_streak.any.max(1),
            },
            use_worker_colors: self.use_worker_colors,
        }
    }
}
