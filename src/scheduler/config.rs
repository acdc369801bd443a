//! Engine configuration.

use serde::{Deserialize, Serialize};

use super::ScoringWeights;
use crate::models::ShiftKind;

/// Inclusive range of run lengths the engine aims for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRange {
    pub min: usize,
    pub max: usize,
}

/// Target run-length ranges per shift kind.
///
/// Each new run draws a target from its range, clipped to the active
/// streak limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockTargets {
    #[serde(rename = "D")]
    pub day: BlockRange,
    #[serde(rename = "N")]
    pub night: BlockRange,
}

impl Default for BlockTargets {
    fn default() -> Self {
        Self {
            day: BlockRange { min: 1, max: 3 },
            night: BlockRange { min: 1, max: 2 },
        }
    }
}

impl BlockTargets {
    /// The configured range for `kind`.
    pub fn range(&self, kind: ShiftKind) -> BlockRange {
        match kind {
            ShiftKind::Day => self.day,
            ShiftKind::Night => self.night,
        }
    }

    /// Bounds `(lo, hi)` for `kind` clipped to `streak_limit`, with
    /// `1 <= lo <= hi <= streak_limit`.
    pub fn clipped(&self, kind: ShiftKind, streak_limit: usize) -> (usize, usize) {
        let limit = streak_limit.max(1);
        let range = self.range(kind);
        let lo = range.min.clamp(1, limit);
        let hi = range.max.min(limit).max(lo);
        (lo, hi)
    }
}

/// Full engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Candidate scoring weights.
    pub weights: ScoringWeights,
    /// Run-length targets.
    pub block_targets: BlockTargets,
}
