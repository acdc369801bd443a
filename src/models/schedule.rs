//! Schedule (roster matrix) model.
//!
//! A schedule is a day × worker matrix of shift symbols. Each row carries
//! a parallel lock vector; a locked slot is authoritative and survives
//! regeneration.

use serde::{Deserialize, Serialize};

use super::{ScheduleDay, ShiftSymbol, Slot};

/// A complete monthly roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Day metadata, one per day of the month.
    pub days: Vec<ScheduleDay>,
    /// One row per worker.
    pub rows: Vec<ScheduleRow>,
    /// Per-worker totals at build time.
    #[serde(default)]
    pub summary: Vec<SummaryEntry>,
    /// Warnings emitted while building (forced assignments).
    #[serde(default)]
    pub warnings: Vec<String>,
    /// Cells assigned only by ignoring a shift block.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forced_cells: Vec<CellRef>,
}

/// One worker's slots for the month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRow {
    /// Worker ID.
    pub id: String,
    /// Worker name (denormalized for display).
    pub name: String,
    /// Slot values, one per day.
    pub slots: Vec<Slot>,
    /// Lock flags, one per day.
    #[serde(default)]
    pub locks: Vec<bool>,
}

/// A (row, day) cell reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRef {
    pub row_id: String,
    pub day_index: usize,
}

/// Per-worker totals derived from a filled matrix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryEntry {
    /// Worker ID.
    pub row_id: String,
    /// Worker name.
    pub name: String,
    /// Hours from D and N shifts.
    pub total_hours: f64,
    /// Number of N shifts.
    pub nights_assigned: usize,
    /// Number of D shifts.
    pub day_count: usize,
    /// Number of N shifts.
    pub night_count: usize,
    /// Number of U (holiday) slots.
    pub holiday_count: usize,
    /// Hours above the worker's budget.
    pub overtime_hours: f64,
    /// Local warnings for this worker.
    pub warnings: Vec<String>,
}

impl CellRef {
    /// Creates a cell reference.
    pub fn new(row_id: impl Into<String>, day_index: usize) -> Self {
        Self {
            row_id: row_id.into(),
            day_index,
        }
    }
}

impl ScheduleRow {
    /// Creates an empty, unlocked row for `days` days.
    pub fn empty(id: impl Into<String>, name: impl Into<String>, days: usize) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slots: vec![None; days],
            locks: vec![false; days],
        }
    }

    /// Creates an unlocked row from slot values.
    pub fn with_slots(id: impl Into<String>, name: impl Into<String>, slots: Vec<Slot>) -> Self {
        let locks = vec![false; slots.len()];
        Self {
            id: id.into(),
            name: name.into(),
            slots,
            locks,
        }
    }

    /// Sets the lock vector.
    pub fn locked_at(mut self, locks: Vec<bool>) -> Self {
        self.locks = locks;
        self
    }

    /// Slot value at `day_index` (empty when out of range).
    #[inline]
    pub fn slot(&self, day_index: usize) -> Slot {
        self.slots.get(day_index).copied().flatten()
    }

    /// Whether the cell at `day_index` is locked.
    #[inline]
    pub fn is_locked(&self, day_index: usize) -> bool {
        self.locks.get(day_index).copied().unwrap_or(false)
    }

    /// Counts slots holding `symbol`.
    pub fn count(&self, symbol: ShiftSymbol) -> usize {
        self.slots.iter().filter(|s| **s == Some(symbol)).count()
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of days in the rostered month.
    #[inline]
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Finds a row by worker ID.
    pub fn row(&self, row_id: &str) -> Option<&ScheduleRow> {
        self.rows.iter().find(|r| r.id == row_id)
    }

    /// Finds a row by worker ID (mutable).
    pub fn row_mut(&mut self, row_id: &str) -> Option<&mut ScheduleRow> {
        self.rows.iter_mut().find(|r| r.id == row_id)
    }

    /// Whether any row holds `symbol` on `day_index`.
    pub fn is_covered(&self, day_index: usize, symbol: ShiftSymbol) -> bool {
        self.rows.iter().any(|r| r.slot(day_index) == Some(symbol))
    }

    /// Number of rows holding `symbol` on `day_index`.
    pub fn holders(&self, day_index: usize, symbol: ShiftSymbol) -> usize {
        self.rows
            .iter()
            .filter(|r| r.slot(day_index) == Some(symbol))
            .count()
    }

    /// Whether the cell was filled by a forced assignment.
    pub fn is_forced(&self, row_id: &str, day_index: usize) -> bool {
        self.forced_cells
            .iter()
            .any(|c| c.row_id == row_id && c.day_index == day_index)
    }

    /// Row IDs in display order.
    pub fn row_ids(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.id.as_str()).collect()
    }
}
