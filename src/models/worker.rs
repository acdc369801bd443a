//! Worker model.
//!
//! Workers are the people who staff the roster. Each worker has an hour
//! budget, a per-shift hour grant, a shift preference, and optional
//! per-weekday shift blocks.
//!
//! # Weekday indexing
//! Weekdays are indexed 0..=6 starting at Sunday, matching
//! `chrono::Weekday::num_days_from_sunday`.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::ShiftKind;

/// Default monthly hour budget.
pub const DEFAULT_MAX_HOURS: f64 = 168.0;
/// Default hours granted per shift.
pub const DEFAULT_SHIFT_HOURS: f64 = 12.0;

/// Weekday index → shift kinds refused on that weekday.
pub type BlockedShifts = BTreeMap<u8, BTreeSet<ShiftKind>>;

/// A rostered worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    /// Unique, stable identifier.
    pub id: String,
    /// Default row position.
    #[serde(default)]
    pub order: i64,
    /// Display name.
    pub name: String,
    /// Monthly hour budget.
    pub max_hours: f64,
    /// Hours granted per assigned shift.
    pub shift_hours: f64,
    /// Day/night preference.
    #[serde(default)]
    pub preference: Preference,
    /// Whether `max_hours` stays a hard ceiling when the cap is relaxed.
    #[serde(default)]
    pub enforce_hour_cap: bool,
    /// Shifts refused per weekday.
    #[serde(default)]
    pub blocked_shifts: BlockedShifts,
    /// Refuses any shift on Saturday or Sunday.
    #[serde(default)]
    pub no_weekends: bool,
    /// Display color (`#rrggbb`). Not used by the engine.
    #[serde(default)]
    pub color: String,
}

/// Shift preference.
///
/// `OnlyDays`/`OnlyNights` are hard exclusions in the engine; the other
/// variants only weight the score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preference {
    #[default]
    Balanced,
    PreferDays,
    PreferNights,
    OnlyDays,
    OnlyNights,
}

impl Preference {
    /// Parses the wire name (`"prefer-days"`, ...).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "balanced" => Some(Self::Balanced),
            "prefer-days" => Some(Self::PreferDays),
            "prefer-nights" => Some(Self::PreferNights),
            "only-days" => Some(Self::OnlyDays),
            "only-nights" => Some(Self::OnlyNights),
            _ => None,
        }
    }

    /// Whether this preference forbids the given shift kind outright.
    pub fn excludes(self, kind: ShiftKind) -> bool {
        matches!(
            (self, kind),
            (Self::OnlyNights, ShiftKind::Day) | (Self::OnlyDays, ShiftKind::Night)
        )
    }
}

impl Worker {
    /// Creates a worker with default hours (168h budget, 12h shifts).
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            order: 0,
            name: String::new(),
            max_hours: DEFAULT_MAX_HOURS,
            shift_hours: DEFAULT_SHIFT_HOURS,
            preference: Preference::Balanced,
            enforce_hour_cap: false,
            blocked_shifts: BlockedShifts::new(),
            no_weekends: false,
            color: String::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the row order.
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    /// Sets the monthly hour budget.
    pub fn with_max_hours(mut self, max_hours: f64) -> Self {
        self.max_hours = max_hours;
        self
    }

    /// Sets the hours granted per shift.
    pub fn with_shift_hours(mut self, shift_hours: f64) -> Self {
        self.shift_hours = shift_hours;
        self
    }

    /// Sets the preference.
    pub fn with_preference(mut self, preference: Preference) -> Self {
        self.preference = preference;
        self
    }

    /// Makes the hour budget a hard ceiling.
    pub fn with_hour_cap(mut self, enforce: bool) -> Self {
        self.enforce_hour_cap = enforce;
        self
    }

    /// Blocks a shift kind on a weekday (0 = Sunday).
    pub fn with_blocked(mut self, weekday: u8, kind: ShiftKind) -> Self {
        self.blocked_shifts.entry(weekday).or_default().insert(kind);
        self
    }

    /// Opts out of weekend shifts.
    pub fn with_no_weekends(mut self, no_weekends: bool) -> Self {
        self.no_weekends = no_weekends;
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Whether `kind` is blocked on `weekday` (0 = Sunday).
    pub fn is_blocked(&self, weekday: u8, kind: ShiftKind) -> bool {
        self.blocked_shifts
            .get(&weekday)
            .is_some_and(|kinds| kinds.contains(&kind))
    }

    /// Whether assigning one more shift on top of `total_hours` would
    /// exceed the budget.
    #[inline]
    pub fn would_exceed(&self, total_hours: f64) -> bool {
        total_hours + self.shift_hours > self.max_hours
    }
}
