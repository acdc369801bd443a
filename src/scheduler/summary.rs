//! Per-worker hour totals and budget warnings.
//!
//! Computes the summary table from a filled matrix and the worker list.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total hours | (D + N) * shift hours |
//! | Overtime | max(0, total - max hours) |
//! | Counts | number of D, N, U slots |
//!
//! Local warnings are raised for an empty row, for totals above the
//! monthly ceiling, and for totals above the worker's own budget.

use std::collections::HashMap;

use crate::models::{
    Schedule, ShiftSymbol, SummaryEntry, Worker, DEFAULT_MAX_HOURS, DEFAULT_SHIFT_HOURS,
};

/// Absolute monthly ceiling, independent of any worker's budget.
pub const MONTHLY_HOUR_CEILING: f64 = 168.0;

/// Computes one summary entry per row, in row order.
///
/// Rows whose worker is missing fall back to 12 h shifts and a 168 h budget.
pub fn summarize(schedule: &Schedule, workers: &[Worker]) -> Vec<SummaryEntry> {
    let by_id: HashMap<&str, &Worker> = workers.iter().map(|w| (w.id.as_str(), w)).collect();

    schedule
        .rows
        .iter()
        .map(|row| {
            let worker = by_id.get(row.id.as_str());
            let shift_hours = worker.map_or(DEFAULT_SHIFT_HOURS, |w| w.shift_hours);
            let max_hours = worker.map_or(DEFAULT_MAX_HOURS, |w| w.max_hours);

            let day_count = row.count(ShiftSymbol::Day);
            let night_count = row.count(ShiftSymbol::Night);
            let holiday_count = row.count(ShiftSymbol::Holiday);
            let total_hours = (day_count + night_count) as f64 * shift_hours;
            let overtime_hours = (total_hours - max_hours).max(0.0);

            let mut warnings = Vec::new();
            if total_hours == 0.0 {
                warnings.push(format!("{} has no shifts assigned.", row.name));
            }
            if total_hours > MONTHLY_HOUR_CEILING {
                warnings.push(format!(
                    "{} exceeds the {}h monthly ceiling by {}h.",
                    row.name,
                    MONTHLY_HOUR_CEILING,
                    total_hours - MONTHLY_HOUR_CEILING
                ));
            }
            if total_hours > max_hours {
                warnings.push(format!(
                    "{} is scheduled for {}h against a limit of {}h.",
                    row.name, total_hours, max_hours
                ));
            }

            SummaryEntry {
                row_id: row.id.clone(),
                name: row.name.clone(),
                total_hours,
                nights_assigned: night_count,
                day_count,
                night_count,
                holiday_count,
                overtime_hours,
                warnings,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{month_days, ScheduleRow, Slot};

    const D: Slot = Some(ShiftSymbol::Day);
    const N: Slot = Some(ShiftSymbol::Night);
    const U: Slot = Some(ShiftSymbol::Holiday);

    fn one_row(slots: Vec<Slot>) -> Schedule {
        Schedule {
            days: month_days(1, 2025)[..slots.len()].to_vec(),
            rows: vec![ScheduleRow::with_slots("w1", "Alex", slots)],
            ..Default::default()
        }
    }

    #[test]
    fn test_summary_over_budget() {
        let workers = vec![Worker::new("w1")
            .with_name("Alex")
            .with_shift_hours(12.0)
            .with_max_hours(18.0)];
        let summary = summarize(&one_row(vec![D, N, U]), &workers);

        let entry = &summary[0];
        assert!((entry.total_hours - 24.0).abs() < 1e-10);
        assert!((entry.overtime_hours - 6.0).abs() < 1e-10);
        assert_eq!(entry.day_count, 1);
        assert_eq!(entry.night_count, 1);
        assert_eq!(entry.nights_assigned, 1);
        assert_eq!(entry.holiday_count, 1);
        assert_eq!(entry.warnings.len(), 1);
        assert!(entry.warnings[0].contains("24h"));
    }

    #[test]
    fn test_summary_empty_row() {
        let workers = vec![Worker::new("w1").with_name("Alex")];
        let summary = summarize(&one_row(vec![None, U, None]), &workers);
        assert_eq!(summary[0].warnings, vec!["Alex has no shifts assigned."]);
        assert!((summary[0].overtime_hours).abs() < 1e-10);
    }

    #[test]
    fn test_summary_monthly_ceiling() {
        // 15 shifts * 12h = 180h with a 200h budget: only the ceiling trips.
        let workers = vec![Worker::new("w1").with_name("Alex").with_max_hours(200.0)];
        let summary = summarize(&one_row(vec![D; 15]), &workers);
        assert_eq!(summary[0].warnings.len(), 1);
        assert!(summary[0].warnings[0].contains("168h monthly ceiling by 12h"));
    }

    #[test]
    fn test_summary_unknown_worker_defaults() {
        let summary = summarize(&one_row(vec![D, D]), &[]);
        assert!((summary[0].total_hours - 24.0).abs() < 1e-10);
        assert!(summary[0].warnings.is_empty());
    }
}
