//! Post-hoc rule checks over a filled roster.
//!
//! Turns a matrix into warnings and highlighted cells. Nothing here mutates
//! the schedule; hand edits made after a build are analyzed the same way as
//! engine output.
//!
//! # Checks
//!
//! | Check | Flags |
//! |-------|-------|
//! | Coverage | days missing a D or an N holder |
//! | Night→Day | an N immediately followed by a D in one row |
//! | Blocked shift | a D/N on a weekday the worker blocked for that kind |
//! | Streaks | same-kind or combined runs longer than the configured limit |

use std::collections::{BTreeSet, HashMap, HashSet};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::{
    format_date, format_date_range, CellRef, Schedule, ScheduleRow, Settings, ShiftSymbol,
    SummaryEntry, Worker,
};
use crate::scheduler::summarize;

/// Days with a missing shift.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageReport {
    pub missing_day_indexes: Vec<usize>,
    pub warnings: Vec<String>,
}

/// Highlighted cells plus their warnings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CellReport {
    pub cells: Vec<CellRef>,
    pub warnings: Vec<String>,
}

/// Everything the presentation layer needs to flag problems.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub coverage: CoverageReport,
    pub night_to_day: CellReport,
    pub blocked_day: CellReport,
    pub streaks: CellReport,
    /// Totals recomputed from the current matrix.
    pub summary: Vec<SummaryEntry>,
    /// Build warnings followed by every check's warnings, in check order.
    pub warnings: Vec<String>,
}

/// Union of highlighted columns and cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSet {
    pub columns: BTreeSet<usize>,
    pub cells: BTreeSet<CellRef>,
}

impl HighlightSet {
    /// Whether the column for `day_index` is flagged.
    pub fn has_column(&self, day_index: usize) -> bool {
        self.columns.contains(&day_index)
    }

    /// Whether a single cell is flagged.
    pub fn has_cell(&self, row_id: &str, day_index: usize) -> bool {
        self.cells.contains(&CellRef::new(row_id, day_index))
    }
}

impl Insights {
    /// Columns from coverage gaps and cells from the per-row checks.
    pub fn highlights(&self) -> HighlightSet {
        HighlightSet {
            columns: self.coverage.missing_day_indexes.iter().copied().collect(),
            cells: self
                .night_to_day
                .cells
                .iter()
                .chain(&self.blocked_day.cells)
                .chain(&self.streaks.cells)
                .cloned()
                .collect(),
        }
    }

    /// Whether any check raised a warning.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Runs every check against `schedule`.
///
/// Dates come from `schedule.days`; `month`/`year` date the cells of rows
/// that run past the day metadata.
pub fn analyze(
    schedule: &Schedule,
    month: u32,
    year: i32,
    workers: &[Worker],
    settings: &Settings,
) -> Insights {
    let settings = settings.sanitized();
    let coverage = coverage(schedule);
    let period = Period { month, year };
    let night_to_day = night_to_day(schedule, period);
    let blocked_day = blocked_shifts(schedule, period, workers);
    let streaks = streaks(schedule, period, &settings);
    let summary = summarize(schedule, workers);

    tracing::debug!(
        month,
        year,
        gaps = coverage.missing_day_indexes.len(),
        night_to_day = night_to_day.warnings.len(),
        blocked = blocked_day.warnings.len(),
        streaks = streaks.warnings.len(),
        "analyzed roster"
    );

    let warnings = schedule
        .warnings
        .iter()
        .chain(&coverage.warnings)
        .chain(&night_to_day.warnings)
        .chain(&blocked_day.warnings)
        .chain(&streaks.warnings)
        .chain(summary.iter().flat_map(|entry| &entry.warnings))
        .cloned()
        .collect();

    Insights {
        coverage,
        night_to_day,
        blocked_day,
        streaks,
        summary,
        warnings,
    }
}

/// The rostered month, for cells past the day metadata.
#[derive(Debug, Clone, Copy)]
struct Period {
    month: u32,
    year: i32,
}

impl Period {
    fn date_of(self, schedule: &Schedule, day_index: usize) -> Option<NaiveDate> {
        match schedule.days.get(day_index) {
            Some(day) => Some(day.date),
            None => {
                let day = u32::try_from(day_index + 1).ok()?;
                NaiveDate::from_ymd_opt(self.year, self.month, day)
            }
        }
    }

    fn label(self, schedule: &Schedule, day_index: usize) -> String {
        self.date_of(schedule, day_index)
            .map_or_else(|| format!("day {}", day_index + 1), format_date)
    }
}

fn coverage(schedule: &Schedule) -> CoverageReport {
    let mut report = CoverageReport::default();
    for index in 0..schedule.day_count() {
        let missing: Vec<&str> = [ShiftSymbol::Day, ShiftSymbol::Night]
            .into_iter()
            .filter(|symbol| !schedule.is_covered(index, *symbol))
            .map(ShiftSymbol::label)
            .collect();
        if missing.is_empty() {
            continue;
        }
        report.missing_day_indexes.push(index);
        report.warnings.push(format!(
            "{} missing coverage: {}.",
            format_date(schedule.days[index].date),
            missing.join(" and ")
        ));
    }
    report
}

fn night_to_day(schedule: &Schedule, period: Period) -> CellReport {
    let mut report = CellReport::default();
    let mut seen = HashSet::new();

    for row in &schedule.rows {
        for index in 1..row.slots.len() {
            if row.slots[index - 1] != Some(ShiftSymbol::Night)
                || row.slots[index] != Some(ShiftSymbol::Day)
            {
                continue;
            }
            for cell in [CellRef::new(&*row.id, index), CellRef::new(&*row.id, index - 1)] {
                if seen.insert(cell.clone()) {
                    report.cells.push(cell);
                }
            }
            report.warnings.push(format!(
                "{} N→D transition for {}.",
                period.label(schedule, index),
                row.name
            ));
        }
    }
    report
}

fn blocked_shifts(schedule: &Schedule, period: Period, workers: &[Worker]) -> CellReport {
    let mut report = CellReport::default();
    let by_id: HashMap<&str, &Worker> = workers.iter().map(|w| (w.id.as_str(), w)).collect();

    for row in &schedule.rows {
        let Some(worker) = by_id.get(row.id.as_str()) else {
            continue;
        };
        if worker.blocked_shifts.is_empty() {
            continue;
        }
        for (index, slot) in row.slots.iter().enumerate() {
            let Some(kind) = slot.and_then(ShiftSymbol::kind) else {
                continue;
            };
            let Some(date) = period.date_of(schedule, index) else {
                continue;
            };
            let weekday = date.weekday().num_days_from_sunday() as u8;
            if !worker.is_blocked(weekday, kind) {
                continue;
            }
            report.cells.push(CellRef::new(&*row.id, index));
            if !schedule.is_forced(&row.id, index) {
                report.warnings.push(format!(
                    "{} {} is blocked from {} shifts on this weekday.",
                    format_date(date),
                    worker.name,
                    kind
                ));
            }
        }
    }
    report
}

/// Kind of run being tracked by the streak scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunKind {
    Same(ShiftSymbol),
    Any,
}

impl RunKind {
    fn limit(self, settings: &Settings) -> usize {
        match self {
            Self::Same(symbol) => symbol
                .kind()
                .map_or(usize::MAX, |kind| settings.max_streak.limit(kind)),
            Self::Any => settings.max_streak.any_limit(),
        }
    }

    fn noun(self) -> &'static str {
        match self {
            Self::Same(ShiftSymbol::Day) => "days",
            Self::Same(ShiftSymbol::Night) => "nights",
            Self::Same(ShiftSymbol::Holiday) | Self::Any => "shifts",
        }
    }
}

fn streaks(schedule: &Schedule, period: Period, settings: &Settings) -> CellReport {
    let mut report = CellReport::default();
    let mut seen = HashSet::new();

    for row in &schedule.rows {
        for (kind, start, end) in overlong_runs(row, settings) {
            for index in start..=end {
                let cell = CellRef::new(&*row.id, index);
                if seen.insert(cell.clone()) {
                    report.cells.push(cell);
                }
            }
            let range = match (period.date_of(schedule, start), period.date_of(schedule, end)) {
                (Some(a), Some(b)) => format_date_range(a, b),
                _ => format!("{}-{}", start + 1, end + 1),
            };
            report.warnings.push(format!(
                "{} works {} consecutive {} ({}).",
                row.name,
                end - start + 1,
                kind.noun(),
                range
            ));
        }
    }
    report
}

/// Inclusive `(kind, start, end)` for each run longer than its limit.
///
/// Same-kind runs are listed first, then combined D/N runs.
fn overlong_runs(row: &ScheduleRow, settings: &Settings) -> Vec<(RunKind, usize, usize)> {
    let working = |slot: &Option<ShiftSymbol>| slot.and_then(ShiftSymbol::kind).is_some();
    let mut found = Vec::new();

    let mut index = 0;
    while index < row.slots.len() {
        let symbol = match row.slots[index] {
            Some(symbol) if symbol.kind().is_some() => symbol,
            _ => {
                index += 1;
                continue;
            }
        };
        let start = index;
        while index < row.slots.len() && row.slots[index] == Some(symbol) {
            index += 1;
        }
        let kind = RunKind::Same(symbol);
        if index - start > kind.limit(settings) {
            found.push((kind, start, index - 1));
        }
    }

    let any_limit = RunKind::Any.limit(settings);
    let mut index = 0;
    while index < row.slots.len() {
        if !working(&row.slots[index]) {
            index += 1;
            continue;
        }
        let start = index;
        while index < row.slots.len() && working(&row.slots[index]) {
            index += 1;
        }
        if index - start > any_limit {
            found.push((RunKind::Any, start, index - 1));
        }
    }
    found
}
