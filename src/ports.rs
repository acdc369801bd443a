//! Collaborator interfaces implemented outside the core.
//!
//! Rendering and persistence stay with the caller; the core only needs
//! somewhere to hand a finished roster and somewhere to keep the roster
//! inputs between sessions.

use crate::insights::Insights;
use crate::models::{Schedule, Settings, Worker};

/// Receives a schedule and its analysis for display or export.
pub trait ScheduleSink {
    /// Presents a schedule with its warnings and highlights.
    fn present(&mut self, schedule: &Schedule, insights: &Insights);
}

/// Durable storage for the worker list and settings.
pub trait WorkerStore {
    /// Storage failure.
    type Error: std::error::Error;

    fn load_workers(&self) -> Result<Vec<Worker>, Self::Error>;

    fn save_workers(&mut self, workers: &[Worker]) -> Result<(), Self::Error>;

    fn load_settings(&self) -> Result<Settings, Self::Error>;

    fn save_settings(&mut self, settings: &Settings) -> Result<(), Self::Error>;
}
