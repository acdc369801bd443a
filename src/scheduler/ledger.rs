//! Per-worker running state during a build.

use crate::models::{ScheduleRow, ShiftKind, ShiftSymbol, Slot, Worker};

/// `last_assigned` for a worker with no shift yet.
const NEVER_ASSIGNED: isize = -5;

/// The run the worker is currently building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct BlockState {
    pub kind: Option<ShiftKind>,
    pub length: usize,
    pub target: usize,
}

impl BlockState {
    /// Whether a run of `kind` is in progress and still short of its target.
    #[inline]
    pub fn is_below_target(&self, kind: ShiftKind) -> bool {
        self.kind == Some(kind) && self.length < self.target
    }
}

/// Working copy of one row plus the totals the scorer reads.
#[derive(Debug, Clone)]
pub(crate) struct WorkerLedger<'a> {
    pub worker: &'a Worker,
    /// Position in the worker list (tie-breaker).
    pub position: usize,
    pub slots: Vec<Slot>,
    pub locks: Vec<bool>,
    pub total_hours: f64,
    pub day_count: usize,
    pub night_count: usize,
    pub last_assigned: isize,
    pub block: BlockState,
}

impl<'a> WorkerLedger<'a> {
    /// Seeds a ledger from the worker's previous row.
    ///
    /// Only locked slots survive; running totals count locked D/N slots.
    pub fn seed(
        worker: &'a Worker,
        position: usize,
        previous: Option<&ScheduleRow>,
        days: usize,
    ) -> Self {
        let mut slots = vec![None; days];
        let mut locks = vec![false; days];
        if let Some(row) = previous {
            for i in 0..days {
                if row.is_locked(i) {
                    locks[i] = true;
                    slots[i] = row.slot(i);
                }
            }
        }

        let mut ledger = Self {
            worker,
            position,
            slots,
            locks,
            total_hours: 0.0,
            day_count: 0,
            night_count: 0,
            last_assigned: NEVER_ASSIGNED,
            block: BlockState::default(),
        };

        for i in 0..days {
            let Some(kind) = ledger.slots[i].and_then(ShiftSymbol::kind) else {
                continue;
            };
            ledger.total_hours += worker.shift_hours;
            match kind {
                ShiftKind::Day => ledger.day_count += 1,
                ShiftKind::Night => ledger.night_count += 1,
            }
            ledger.last_assigned = i as isize;
        }
        ledger
    }

    /// Days since the last assignment (may be negative when a later day
    /// was seeded from a lock).
    #[inline]
    pub fn idle_days(&self, index: usize) -> isize {
        index as isize - self.last_assigned
    }

    /// Whether the worker's last assignment was the day before `index`.
    #[inline]
    pub fn assigned_yesterday(&self, index: usize) -> bool {
        self.last_assigned == index as isize - 1
    }

    /// Whether assigning `kind` on `index` extends the current block.
    #[inline]
    pub fn continues_block(&self, kind: ShiftKind, index: usize) -> bool {
        self.assigned_yesterday(index) && self.block.kind == Some(kind)
    }

    /// Records an assignment. `new_target` starts a fresh block; `None`
    /// extends the current one.
    pub fn assign(&mut self, kind: ShiftKind, index: usize, new_target: Option<usize>) {
        self.slots[index] = Some(kind.symbol());
        self.total_hours += self.worker.shift_hours;
        match kind {
            ShiftKind::Day => self.day_count += 1,
            ShiftKind::Night => self.night_count += 1,
        }
        match new_target {
            None => self.block.length += 1,
            Some(target) => {
                self.block = BlockState {
                    kind: Some(kind),
                    length: 1,
                    target,
                }
            }
        }
        self.last_assigned = index as isize;
    }

    /// Consumes the ledger into an output row.
    pub fn into_row(self) -> ScheduleRow {
        ScheduleRow {
            id: self.worker.id.clone(),
            name: self.worker.name.clone(),
            slots: self.slots,
            locks: self.locks,
        }
    }
}
