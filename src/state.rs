//! Caller-owned roster state.
//!
//! Bundles the worker list, settings, notes and the active schedule, and
//! wires them through the engine, the analyzer and the reorderer. The
//! core keeps no globals; everything lives here.

use rand::Rng;

use crate::insights::{analyze, Insights};
use crate::io::ImportedRoster;
use crate::models::{Schedule, Settings, Worker};
use crate::ports::{ScheduleSink, WorkerStore};
use crate::reorder::{reorder, Placement};
use crate::scheduler::{summarize, RosterEngine};
use crate::validation::{retain_known_rows, validate_roster, ValidationError};

/// Failure of a state-level operation.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// The worker list or period failed validation.
    #[error("invalid roster: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),
    /// The operation needs a built schedule.
    #[error("no schedule has been built")]
    NoActiveSchedule,
    /// A [`WorkerStore`] call failed.
    #[error("worker store failed: {0}")]
    Store(String),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// The schedule on screen and the period it covers.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSchedule {
    pub schedule: Schedule,
    pub month: u32,
    pub year: i32,
}

/// Everything a session holds between operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterState {
    pub workers: Vec<Worker>,
    pub settings: Settings,
    pub current: Option<ActiveSchedule>,
    pub notes: String,
}

impl RosterState {
    /// Creates a state with no schedule.
    pub fn new(workers: Vec<Worker>, settings: Settings) -> Self {
        Self {
            workers,
            settings,
            current: None,
            notes: String::new(),
        }
    }

    /// Loads workers and settings from `store`.
    pub fn load<S: WorkerStore>(store: &S) -> Result<Self, RosterError> {
        let workers = store
            .load_workers()
            .map_err(|e| RosterError::Store(e.to_string()))?;
        let settings = store
            .load_settings()
            .map_err(|e| RosterError::Store(e.to_string()))?;
        Ok(Self::new(workers, settings.sanitized()))
    }

    /// Writes workers and settings to `store`.
    pub fn save<S: WorkerStore>(&self, store: &mut S) -> Result<(), RosterError> {
        store
            .save_workers(&self.workers)
            .map_err(|e| RosterError::Store(e.to_string()))?;
        store
            .save_settings(&self.settings)
            .map_err(|e| RosterError::Store(e.to_string()))
    }

    /// Builds a new schedule for `month`/`year`, keeping locked cells of
    /// the current one for workers still on the roster.
    ///
    /// On a validation failure the current schedule is cleared when the
    /// roster is empty and kept otherwise.
    pub fn regenerate<R: Rng>(
        &mut self,
        engine: &RosterEngine,
        month: u32,
        year: i32,
        rng: &mut R,
    ) -> Result<&Schedule, RosterError> {
        if let Err(errors) = validate_roster(&self.workers, month, year) {
            if self.workers.is_empty() {
                self.current = None;
            }
            return Err(RosterError::Invalid(errors));
        }

        let previous = self
            .current
            .as_ref()
            .map(|active| retain_known_rows(&active.schedule.rows, &self.workers))
            .unwrap_or_default();
        let schedule = engine.build(
            &self.workers,
            month,
            year,
            &previous,
            &self.settings,
            rng,
        );

        let active = self.current.insert(ActiveSchedule {
            schedule,
            month,
            year,
        });
        Ok(&active.schedule)
    }

    /// Analyzes the active schedule, refreshing its summary first.
    pub fn insights(&mut self) -> Result<Insights, RosterError> {
        let active = self.current.as_mut().ok_or(RosterError::NoActiveSchedule)?;
        active.schedule.summary = summarize(&active.schedule, &self.workers);
        Ok(analyze(
            &active.schedule,
            active.month,
            active.year,
            &self.workers,
            &self.settings,
        ))
    }

    /// Moves a row in the active schedule and the worker list. Returns
    /// `false` when nothing moved, including when there is no schedule.
    pub fn reorder_rows(&mut self, source_id: &str, target_id: &str, placement: Placement) -> bool {
        let Some(active) = self.current.as_mut() else {
            return false;
        };
        reorder(
            &mut active.schedule,
            &mut self.workers,
            source_id,
            target_id,
            placement,
        )
    }

    /// Replaces workers, schedule and (when present) notes with an import.
    pub fn apply_import(&mut self, imported: ImportedRoster) {
        self.workers = imported.workers;
        self.current = Some(ActiveSchedule {
            schedule: imported.schedule,
            month: imported.month,
            year: imported.year,
        });
        if let Some(notes) = imported.notes {
            self.notes = notes;
        }
    }

    /// Hands the active schedule and fresh insights to `sink`.
    pub fn publish<S: ScheduleSink>(&mut self, sink: &mut S) -> Result<(), RosterError> {
        let insights = self.insights()?;
        let active = self.current.as_ref().ok_or(RosterError::NoActiveSchedule)?;
        sink.present(&active.schedule, &insights);
        Ok(())
    }
}
