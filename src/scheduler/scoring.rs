//! Candidate scoring for the assignment engine.
//!
//! # Score Convention
//! **Lower score = better candidate.** Every eligible worker is scored and
//! the minimum wins; ties go to the worker listed first.
//!
//! # Terms
//!
//! | Term | Default effect |
//! |------|----------------|
//! | Load | `(total - target) * 12`, minus `min(target - total, 12)` when under target |
//! | Idle | `-4` per idle day, capped at 5 days |
//! | Block | `-35` while a run is below its target length, `+30` past it, `-12` for a next-day kind switch |
//! | Night run | `+18` per night already in the current run |
//! | Balance | `+12` per excess of the requested kind, plus `1` (D) / `1.2` (N) per shift of that kind |
//! | Preference | see [`PreferenceWeights`] |
//! | Adjacency | `+10` N after N, `+5` D after D |
//! | Order | `+0.01` per row position |

use serde::{Deserialize, Serialize};

use super::ledger::WorkerLedger;
use crate::models::{run_before, Preference, ShiftKind, ShiftSymbol};

/// Tunable weights for the candidate score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringWeights {
    /// Multiplier on the distance from target hours.
    pub load: f64,
    /// Maximum extra bonus for being under target.
    pub underload_cap: f64,
    /// Bonus per idle day since the last assignment.
    pub idle_bonus: f64,
    /// Idle days counted toward the bonus.
    pub idle_cap_days: usize,
    /// Added when extending a run still below its target length.
    pub block_continue: f64,
    /// Added when extending a run at or past its target length.
    pub block_overrun: f64,
    /// Added when the worker had a shift yesterday that is not a run of
    /// the requested kind.
    pub short_turnaround: f64,
    /// Added per night already in the current night run.
    pub night_run: f64,
    /// Multiplier on the day/night imbalance toward the requested kind.
    pub balance: f64,
    /// Added per day shift already held (day requests).
    pub day_count: f64,
    /// Added per night shift already held (night requests).
    pub night_count: f64,
    /// Added for a night following a night.
    pub night_adjacency: f64,
    /// Added for a day following a day.
    pub day_adjacency: f64,
    /// Multiplier on row position.
    pub order_tiebreak: f64,
    /// Scale of the uniform random jitter. Zero disables it.
    pub jitter: f64,
    /// Preference offsets.
    pub preference: PreferenceWeights,
}

/// Score offset per preference and requested kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceWeights {
    pub prefer_days: KindOffset,
    pub prefer_nights: KindOffset,
    pub only_days: KindOffset,
    pub only_nights: KindOffset,
}

/// Offsets applied to day and night requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KindOffset {
    pub day: f64,
    pub night: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            load: 12.0,
            underload_cap: 12.0,
            idle_bonus: 4.0,
            idle_cap_days: 5,
            block_continue: -35.0,
            block_overrun: 30.0,
            short_turnaround: -12.0,
            night_run: 18.0,
            balance: 12.0,
            day_count: 1.0,
            night_count: 1.2,
            night_adjacency: 10.0,
            day_adjacency: 5.0,
            order_tiebreak: 0.01,
            jitter: 0.0,
            preference: PreferenceWeights::default(),
        }
    }
}

impl Default for PreferenceWeights {
    fn default() -> Self {
        Self {
            prefer_days: KindOffset { day: -12.0, night: 10.0 },
            prefer_nights: KindOffset { day: 10.0, night: -20.0 },
            only_days: KindOffset { day: -40.0, night: 80.0 },
            only_nights: KindOffset { day: 70.0, night: -60.0 },
        }
    }
}

impl KindOffset {
    #[inline]
    fn for_kind(self, kind: ShiftKind) -> f64 {
        match kind {
            ShiftKind::Day => self.day,
            ShiftKind::Night => self.night,
        }
    }
}

impl PreferenceWeights {
    /// Offset for a preference when requesting `kind`.
    pub fn offset(&self, preference: Preference, kind: ShiftKind) -> f64 {
        match preference {
            Preference::Balanced => 0.0,
            Preference::PreferDays => self.prefer_days.for_kind(kind),
            Preference::PreferNights => self.prefer_nights.for_kind(kind),
            Preference::OnlyDays => self.only_days.for_kind(kind),
            Preference::OnlyNights => self.only_nights.for_kind(kind),
        }
    }
}

/// Deterministic part of a candidate's score for `kind` on `index`.
pub(crate) fn score(
    ledger: &WorkerLedger<'_>,
    kind: ShiftKind,
    index: usize,
    target_hours: f64,
    weights: &ScoringWeights,
) -> f64 {
    let symbol = kind.symbol();
    let mut score = ledger.total_hours;

    let load_gap = ledger.total_hours - target_hours;
    score += load_gap * weights.load;
    if load_gap < 0.0 {
        score -= (-load_gap).min(weights.underload_cap);
    }

    let idle = ledger.idle_days(index);
    if idle > 0 {
        score -= idle.min(weights.idle_cap_days as isize) as f64 * weights.idle_bonus;
    }

    let run = run_before(&ledger.slots, index, symbol);
    let continuing = run > 0 && ledger.assigned_yesterday(index);
    if continuing {
        if ledger.block.is_below_target(kind) {
            score += weights.block_continue;
        } else {
            score += weights.block_overrun;
        }
    } else if idle <= 1 {
        score += weights.short_turnaround;
    }

    let days = ledger.day_count as f64;
    let nights = ledger.night_count as f64;
    let previous = index.checked_sub(1).and_then(|i| ledger.slots[i]);
    match kind {
        ShiftKind::Day => {
            score += (days - nights).max(0.0) * weights.balance;
            score += days * weights.day_count;
            if previous == Some(ShiftSymbol::Day) {
                score += weights.day_adjacency;
            }
        }
        ShiftKind::Night => {
            score += run as f64 * weights.night_run;
            score += (nights - days).max(0.0) * weights.balance;
            score += nights * weights.night_count;
            if previous == Some(ShiftSymbol::Night) {
                score += weights.night_adjacency;
            }
        }
    }

    score += weights.preference.offset(ledger.worker.preference, kind);
    score += ledger.position as f64 * weights.order_tiebreak;
    score
}
