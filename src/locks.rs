//! Lock and manual-override operations on a [`Schedule`].
//!
//! Locked cells are copied verbatim into the next build. These operations
//! only prepare that seed; none of them touches the engine.
//!
//! Every operation returns whether the matrix changed.

use crate::models::{Schedule, ScheduleRow, ShiftSymbol, Slot};

impl ScheduleRow {
    /// Grows the lock vector to cover every slot.
    fn fit_locks(&mut self) {
        if self.locks.len() < self.slots.len() {
            self.locks.resize(self.slots.len(), false);
        }
    }

    fn all_locked(&self) -> bool {
        !self.slots.is_empty() && (0..self.slots.len()).all(|i| self.is_locked(i))
    }
}

impl Schedule {
    /// Flips the lock on one cell.
    pub fn toggle_cell_lock(&mut self, row_id: &str, day_index: usize) -> bool {
        let Some(row) = self.row_mut(row_id) else {
            return false;
        };
        if day_index >= row.slots.len() {
            return false;
        }
        row.fit_locks();
        row.locks[day_index] = !row.locks[day_index];
        true
    }

    /// Unlocks the whole row when every cell is locked; locks it otherwise.
    pub fn toggle_row_lock(&mut self, row_id: &str) -> bool {
        let Some(row) = self.row_mut(row_id) else {
            return false;
        };
        let target = !row.all_locked();
        row.locks = vec![target; row.slots.len()];
        true
    }

    /// Unlocks the column when every row has it locked; locks it otherwise.
    pub fn toggle_column_lock(&mut self, day_index: usize) -> bool {
        if self.rows.is_empty() {
            return false;
        }
        let target = !self.rows.iter().all(|row| row.is_locked(day_index));
        let mut changed = false;
        for row in &mut self.rows {
            row.fit_locks();
            if let Some(lock) = row.locks.get_mut(day_index) {
                *lock = target;
                changed = true;
            }
        }
        changed
    }

    /// Sets every cell of every row to `locked`.
    pub fn set_all_locks(&mut self, locked: bool) -> bool {
        for row in &mut self.rows {
            row.locks = vec![locked; row.slots.len()];
        }
        !self.rows.is_empty()
    }

    /// Overwrites one cell. Rejected when the cell is locked or out of range.
    pub fn update_slot_value(&mut self, row_id: &str, day_index: usize, value: Slot) -> bool {
        let Some(row) = self.row_mut(row_id) else {
            return false;
        };
        if day_index >= row.slots.len() || row.is_locked(day_index) {
            return false;
        }
        row.slots[day_index] = value;
        true
    }

    /// As [`Schedule::update_slot_value`], parsing free text; anything but
    /// `D`, `N` or `U` clears the cell.
    pub fn set_slot_from_str(&mut self, row_id: &str, day_index: usize, value: &str) -> bool {
        self.update_slot_value(row_id, day_index, ShiftSymbol::parse(value.trim()))
    }

    /// Number of locked cells across all rows.
    pub fn locked_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| (0..row.slots.len()).filter(|&i| row.is_locked(i)).count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{month_days, Schedule, ScheduleRow, ShiftSymbol, Slot};

    const D: Slot = Some(ShiftSymbol::Day);
    const N: Slot = Some(ShiftSymbol::Night);
    const U: Slot = Some(ShiftSymbol::Holiday);

    fn sample() -> Schedule {
        Schedule {
            days: month_days(3, 2025)[..3].to_vec(),
            rows: vec![
                ScheduleRow::with_slots("w1", "Alex", vec![D, N, None]),
                ScheduleRow::with_slots("w2", "Bea", vec![N, None, D]),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_toggle_cell_lock_resizes() {
        let mut s = sample();
        s.rows[0].locks.clear();
        assert!(s.toggle_cell_lock("w1", 2));
        assert_eq!(s.rows[0].locks, vec![false, false, true]);
        assert!(s.toggle_cell_lock("w1", 2));
        assert!(!s.rows[0].locks[2]);

        assert!(!s.toggle_cell_lock("w1", 3));
        assert!(!s.toggle_cell_lock("ghost", 0));
    }

    #[test]
    fn test_toggle_row_lock_all_or_nothing() {
        let mut s = sample();
        s.rows[0].locks[1] = true;
        assert!(s.toggle_row_lock("w1"));
        assert_eq!(s.rows[0].locks, vec![true; 3]);
        assert!(s.toggle_row_lock("w1"));
        assert_eq!(s.rows[0].locks, vec![false; 3]);
    }

    #[test]
    fn test_toggle_column_lock() {
        let mut s = sample();
        s.rows[1].locks[0] = true;
        assert!(s.toggle_column_lock(0));
        assert!(s.rows.iter().all(|r| r.locks[0]));
        assert!(s.toggle_column_lock(0));
        assert!(s.rows.iter().all(|r| !r.locks[0]));
        assert!(!s.toggle_column_lock(9));
    }

    #[test]
    fn test_set_all_locks() {
        let mut s = sample();
        assert!(s.set_all_locks(true));
        assert_eq!(s.locked_count(), 6);
        assert!(s.set_all_locks(false));
        assert_eq!(s.locked_count(), 0);
    }

    #[test]
    fn test_update_slot_respects_locks() {
        let mut s = sample();
        assert!(s.update_slot_value("w1", 2, U));
        assert_eq!(s.rows[0].slots[2], U);

        s.toggle_cell_lock("w1", 0);
        assert!(!s.update_slot_value("w1", 0, N));
        assert_eq!(s.rows[0].slots[0], D);
        assert!(!s.update_slot_value("w1", 5, N));
    }

    #[test]
    fn test_set_slot_from_str_coerces_unknown() {
        let mut s = sample();
        assert!(s.set_slot_from_str("w2", 0, "X"));
        assert_eq!(s.rows[1].slots[0], None);
        assert!(s.set_slot_from_str("w2", 1, " D "));
        assert_eq!(s.rows[1].slots[1], D);
    }
}
