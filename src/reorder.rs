//! Manual row reordering.
//!
//! Moves one worker's row next to another in both the schedule and the
//! worker list, then renumbers `order` so the next build keeps the layout.

use serde::{Deserialize, Serialize};

use crate::models::{Schedule, Worker};

/// Where the moved row lands relative to the target row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    #[default]
    Before,
    After,
}

impl Placement {
    /// Parses `"after"`; anything else is `Before`.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("after") {
            Self::After
        } else {
            Self::Before
        }
    }
}

/// Moves `source_id` before or after `target_id`.
///
/// Rows keep their slots and locks. Returns `false` without touching
/// anything when either ID is missing from the schedule or both are equal.
pub fn reorder(
    schedule: &mut Schedule,
    workers: &mut Vec<Worker>,
    source_id: &str,
    target_id: &str,
    placement: Placement,
) -> bool {
    if source_id.is_empty() || target_id.is_empty() || source_id == target_id {
        return false;
    }
    if !move_by_id(&mut schedule.rows, |r| r.id.as_str(), source_id, target_id, placement) {
        return false;
    }
    if move_by_id(workers, |w| w.id.as_str(), source_id, target_id, placement) {
        for (index, worker) in workers.iter_mut().enumerate() {
            worker.order = index as i64;
        }
    }
    tracing::debug!(source_id, target_id, ?placement, "reordered rows");
    true
}

fn move_by_id<T>(
    items: &mut Vec<T>,
    id_of: impl Fn(&T) -> &str,
    source_id: &str,
    target_id: &str,
    placement: Placement,
) -> bool {
    let from = items.iter().position(|item| id_of(item) == source_id);
    let target = items.iter().position(|item| id_of(item) == target_id);
    let (Some(from), Some(target)) = (from, target) else {
        return false;
    };

    let item = items.remove(from);
    let base = if from < target { target - 1 } else { target };
    let insert_at = match placement {
        Placement::Before => base,
        Placement::After => base + 1,
    };
    items.insert(insert_at.min(items.len()), item);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{month_days, ScheduleRow, ShiftSymbol};

    fn setup() -> (Schedule, Vec<Worker>) {
        let ids = ["a", "b", "c", "d"];
        let schedule = Schedule {
            days: month_days(1, 2025)[..2].to_vec(),
            rows: ids
                .iter()
                .map(|id| {
                    ScheduleRow::with_slots(*id, id.to_uppercase(), vec![Some(ShiftSymbol::Day), None])
                })
                .collect(),
            ..Default::default()
        };
        let workers = ids
            .iter()
            .enumerate()
            .map(|(i, id)| Worker::new(*id).with_order(i as i64))
            .collect();
        (schedule, workers)
    }

    fn ids(schedule: &Schedule) -> Vec<&str> {
        schedule.row_ids()
    }

    #[test]
    fn test_move_down_before() {
        let (mut s, mut w) = setup();
        assert!(reorder(&mut s, &mut w, "a", "c", Placement::Before));
        assert_eq!(ids(&s), vec!["b", "a", "c", "d"]);
        let worker_ids: Vec<&str> = w.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(worker_ids, vec!["b", "a", "c", "d"]);
        assert!(w.iter().enumerate().all(|(i, w)| w.order == i as i64));
    }

    #[test]
    fn test_move_down_after() {
        let (mut s, mut w) = setup();
        assert!(reorder(&mut s, &mut w, "a", "c", Placement::After));
        assert_eq!(ids(&s), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_move_up() {
        let (mut s, mut w) = setup();
        assert!(reorder(&mut s, &mut w, "d", "b", Placement::Before));
        assert_eq!(ids(&s), vec!["a", "d", "b", "c"]);
        assert!(reorder(&mut s, &mut w, "c", "a", Placement::After));
        assert_eq!(ids(&s), vec!["a", "c", "d", "b"]);
    }

    #[test]
    fn test_move_to_end() {
        let (mut s, mut w) = setup();
        assert!(reorder(&mut s, &mut w, "b", "d", Placement::After));
        assert_eq!(ids(&s), vec!["a", "c", "d", "b"]);
    }

    #[test]
    fn test_rejected_moves() {
        let (mut s, mut w) = setup();
        let before = s.clone();
        assert!(!reorder(&mut s, &mut w, "a", "a", Placement::Before));
        assert!(!reorder(&mut s, &mut w, "a", "zz", Placement::After));
        assert!(!reorder(&mut s, &mut w, "", "b", Placement::After));
        assert_eq!(s, before);
        assert!(w.iter().enumerate().all(|(i, w)| w.order == i as i64));
    }

    #[test]
    fn test_slots_travel_with_row() {
        let (mut s, mut w) = setup();
        s.rows[0].locks[0] = true;
        reorder(&mut s, &mut w, "a", "d", Placement::After);
        let moved = s.row("a").unwrap();
        assert_eq!(moved.slots[0], Some(ShiftSymbol::Day));
        assert!(moved.locks[0]);
        assert_eq!(s.rows[3].id, "a");
    }

    #[test]
    fn test_placement_parse() {
        assert_eq!(Placement::parse("after"), Placement::After);
        assert_eq!(Placement::parse("before"), Placement::Before);
        assert_eq!(Placement::parse("sideways"), Placement::Before);
    }
}
