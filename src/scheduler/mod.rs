//! Roster engine and summary aggregation.
//!
//! Provides the greedy Day/Night assignment engine, its tunable scoring,
//! and per-worker hour totals.
//!
//! # Algorithm
//!
//! `RosterEngine` walks the month day by day and staffs each shift with the
//! lowest-scoring eligible worker. Eligibility relaxes in three passes
//! (strict cap, per-worker cap, forced over weekday blocks). It is not
//! optimal, but it is fast and respects every hard rule it can.
//!
//! # Summary
//!
//! `summarize` recomputes hours, overtime and D/N/U counts from any matrix,
//! including one edited by hand after the build.

mod config;
mod engine;
mod ledger;
mod scoring;
mod summary;

pub use config::{BlockRange, BlockTargets, EngineConfig};
pub use engine::{target_hours, RosterEngine, ScheduleRequest};
pub use scoring::{KindOffset, PreferenceWeights, ScoringWeights};
pub use summary::{summarize, MONTHLY_HOUR_CEILING};
