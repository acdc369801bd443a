//! Greedy Day/Night assignment engine.
//!
//! # Algorithm
//!
//! 1. Seed each worker's row from the previous schedule (locked slots only).
//! 2. For each day in order, staff the day shift, then the night shift,
//!    unless the shift is already held (e.g. by a lock).
//! 3. For each shift, filter eligible workers and pick the lowest score.
//!    Eligibility relaxes in three passes: strict hour cap, per-worker
//!    hour cap, and finally ignoring weekday shift blocks (forced).
//! 4. A shift nobody can take stays empty and surfaces as a coverage gap.
//!
//! # Complexity
//! O(d * w * d) where d=days, w=workers (the run checks scan back).

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use super::config::{BlockTargets, EngineConfig};
use super::ledger::WorkerLedger;
use super::scoring::{self, ScoringWeights};
use crate::models::{
    format_date, month_days, run_before, CellRef, Schedule, ScheduleDay, ScheduleRow, Settings,
    ShiftKind, ShiftSymbol, SummaryEntry, Worker, DEFAULT_SHIFT_HOURS,
};

/// Input container for a build.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Workers to roster, in row order.
    pub workers: Vec<Worker>,
    /// Month (1-12).
    pub month: u32,
    /// Year.
    pub year: i32,
    /// Rows from a previous schedule; their locked cells are kept.
    pub previous_rows: Vec<ScheduleRow>,
    /// Streak limits.
    pub settings: Settings,
}

impl ScheduleRequest {
    /// Creates a request with default settings and no previous rows.
    pub fn new(workers: Vec<Worker>, month: u32, year: i32) -> Self {
        Self {
            workers,
            month,
            year,
            previous_rows: Vec::new(),
            settings: Settings::default(),
        }
    }

    /// Sets the previous rows to seed locks from.
    pub fn with_previous_rows(mut self, rows: Vec<ScheduleRow>) -> Self {
        self.previous_rows = rows;
        self
    }

    /// Sets the settings.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }
}

/// Eligibility tier used when resolving a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SolvePass {
    /// Every worker's own `max_hours` is a hard ceiling.
    Strict,
    /// Only workers with `enforce_hour_cap` keep the ceiling.
    RelaxedCap,
    /// As `RelaxedCap`, ignoring weekday shift blocks.
    Forced,
}

impl SolvePass {
    const ALL: [SolvePass; 3] = [Self::Strict, Self::RelaxedCap, Self::Forced];
}

/// Day/Night roster engine.
///
/// # Example
///
/// ```
/// use u_roster::models::Worker;
/// use u_roster::scheduler::{RosterEngine, ScheduleRequest};
///
/// let workers = vec![
///     Worker::new("w1").with_name("Alex"),
///     Worker::new("w2").with_name("Bea"),
///     Worker::new("w3").with_name("Cem"),
/// ];
/// let request = ScheduleRequest::new(workers, 2, 2025);
///
/// let schedule = RosterEngine::new().build_seeded(&request, 7);
/// assert_eq!(schedule.days.len(), 28);
/// assert_eq!(schedule.rows.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RosterEngine {
    config: EngineConfig,
}

impl RosterEngine {
    /// Creates an engine with default weights and block targets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the scoring weights.
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.config.weights = weights;
        self
    }

    /// Sets the run-length targets.
    pub fn with_block_targets(mut self, block_targets: BlockTargets) -> Self {
        self.config.block_targets = block_targets;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Builds a schedule for `month`/`year`.
    ///
    /// Rows in `previous_rows` are matched by worker ID; their locked cells
    /// are copied verbatim and never changed. All other cells start empty.
    /// `rng` drives block-length targets and the optional jitter.
    ///
    /// An empty worker list yields a schedule with days and no rows.
    pub fn build<R: Rng>(
        &self,
        workers: &[Worker],
        month: u32,
        year: i32,
        previous_rows: &[ScheduleRow],
        settings: &Settings,
        rng: &mut R,
    ) -> Schedule {
        let days = month_days(month, year);
        let previous: HashMap<&str, &ScheduleRow> = previous_rows
            .iter()
            .map(|row| (row.id.as_str(), row))
            .collect();

        let ledgers: Vec<WorkerLedger<'_>> = workers
            .iter()
            .enumerate()
            .map(|(position, worker)| {
                WorkerLedger::seed(
                    worker,
                    position,
                    previous.get(worker.id.as_str()).copied(),
                    days.len(),
                )
            })
            .collect();

        let target_hours = target_hours(workers, days.len());
        debug!(
            month,
            year,
            workers = workers.len(),
            days = days.len(),
            target_hours,
            "building roster"
        );

        let mut solver = Solver {
            ledgers,
            settings: settings.sanitized(),
            config: &self.config,
            target_hours,
            rng,
            warnings: Vec::new(),
            forced_cells: Vec::new(),
        };
        for day in &days {
            for kind in ShiftKind::ALL {
                solver.assign_shift(kind, day);
            }
        }

        let Solver {
            ledgers,
            warnings,
            forced_cells,
            ..
        } = solver;
        let summary = ledgers.iter().map(summary_entry).collect();
        let rows = ledgers.into_iter().map(WorkerLedger::into_row).collect();

        Schedule {
            days,
            rows,
            summary,
            warnings,
            forced_cells,
        }
    }

    /// Builds from a request.
    pub fn build_request<R: Rng>(&self, request: &ScheduleRequest, rng: &mut R) -> Schedule {
        self.build(
            &request.workers,
            request.month,
            request.year,
            &request.previous_rows,
            &request.settings,
            rng,
        )
    }

    /// Builds from a request with a seeded RNG; identical inputs and seed
    /// give identical schedules.
    pub fn build_seeded(&self, request: &ScheduleRequest, seed: u64) -> Schedule {
        let mut rng = StdRng::seed_from_u64(seed);
        self.build_request(request, &mut rng)
    }
}

/// Fair per-worker hour budget: two shifts a day split evenly.
pub fn target_hours(workers: &[Worker], days: usize) -> f64 {
    if workers.is_empty() {
        return days as f64 * 2.0 * DEFAULT_SHIFT_HOURS;
    }
    let count = workers.len() as f64;
    let average_shift = workers.iter().map(|w| w.shift_hours).sum::<f64>() / count;
    days as f64 * 2.0 * average_shift / count
}

struct Solver<'a, R> {
    ledgers: Vec<WorkerLedger<'a>>,
    settings: Settings,
    config: &'a EngineConfig,
    target_hours: f64,
    rng: &'a mut R,
    warnings: Vec<String>,
    forced_cells: Vec<CellRef>,
}

impl<R: Rng> Solver<'_, R> {
    fn assign_shift(&mut self, kind: ShiftKind, day: &ScheduleDay) {
        let index = day.index();
        let symbol = kind.symbol();
        if self.ledgers.iter().any(|l| l.slots[index] == Some(symbol)) {
            return;
        }

        let mut chosen = None;
        for pass in SolvePass::ALL {
            if let Some(position) = self.pick(kind, day, pass) {
                chosen = Some((position, pass));
                break;
            }
        }
        let Some((position, pass)) = chosen else {
            debug!(date = %day.date, shift = %kind, "no eligible worker");
            return;
        };

        let new_target = if self.ledgers[position].continues_block(kind, index) {
            None
        } else {
            let limit = self.settings.max_streak.limit(kind);
            let (lo, hi) = self.config.block_targets.clipped(kind, limit);
            Some(self.rng.random_range(lo..=hi))
        };

        let ledger = &mut self.ledgers[position];
        ledger.assign(kind, index, new_target);

        if pass == SolvePass::Forced {
            let worker = ledger.worker;
            warn!(
                worker = %worker.id,
                date = %day.date,
                shift = %kind,
                "assigned over a weekday shift block"
            );
            self.warnings.push(format!(
                "{} assigned {} to {} despite a shift block.",
                format_date(day.date),
                kind,
                worker.name
            ));
            self.forced_cells.push(CellRef::new(worker.id.clone(), index));
        }
    }

    /// Lowest-scoring eligible worker for `pass`, if any.
    fn pick(&mut self, kind: ShiftKind, day: &ScheduleDay, pass: SolvePass) -> Option<usize> {
        let index = day.index();
        let weights = &self.config.weights;
        let mut best: Option<(usize, f64)> = None;

        for (position, ledger) in self.ledgers.iter().enumerate() {
            if !is_available(ledger, kind, day, pass, &self.settings) {
                continue;
            }
            let mut score = scoring::score(ledger, kind, index, self.target_hours, weights);
            if weights.jitter > 0.0 {
                score += weights.jitter * self.rng.random::<f64>();
            }
            match best {
                Some((_, best_score)) if score >= best_score => {}
                _ => best = Some((position, score)),
            }
        }
        best.map(|(position, _)| position)
    }
}

fn is_available(
    ledger: &WorkerLedger<'_>,
    kind: ShiftKind,
    day: &ScheduleDay,
    pass: SolvePass,
    settings: &Settings,
) -> bool {
    let index = day.index();
    let worker = ledger.worker;

    if ledger.locks[index] || ledger.slots[index].is_some() {
        return false;
    }
    if worker.no_weekends && day.is_weekend() {
        return false;
    }
    if run_before(&ledger.slots, index, kind.symbol()) >= settings.max_streak.limit(kind) {
        return false;
    }
    if kind == ShiftKind::Day && index > 0 && ledger.slots[index - 1] == Some(ShiftSymbol::Night)
    {
        return false;
    }
    if worker.preference.excludes(kind) {
        return false;
    }
    if pass != SolvePass::Forced && worker.is_blocked(day.weekday(), kind) {
        return false;
    }

    let exceeds = worker.would_exceed(ledger.total_hours);
    match pass {
        SolvePass::Strict => !exceeds,
        SolvePass::RelaxedCap | SolvePass::Forced => !(worker.enforce_hour_cap && exceeds),
    }
}

fn summary_entry(ledger: &WorkerLedger<'_>) -> SummaryEntry {
    let worker = ledger.worker;
    SummaryEntry {
        row_id: worker.id.clone(),
        name: worker.name.clone(),
        total_hours: ledger.total_hours,
        nights_assigned: ledger.night_count,
        day_count: ledger.day_count,
        night_count: ledger.night_count,
        holiday_count: ledger
            .slots
            .iter()
            .filter(|s| **s == Some(ShiftSymbol::Holiday))
            .count(),
        overtime_hours: (ledger.total_hours - worker.max_hours).max(0.0),
        warnings: Vec::new(),
    }
}
