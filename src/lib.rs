//! Monthly Day/Night shift rostering.
//!
//! Fills a day × worker matrix with day (`D`) and night (`N`) shifts,
//! honoring hour budgets, consecutive-shift limits, weekday shift blocks,
//! preferences and user-locked cells, then reports every rule the result
//! still breaks.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Worker`, `Schedule`, `ScheduleRow`,
//!   `ScheduleDay`, `Settings`, shift symbols and the month calendar
//! - **`scheduler`**: `RosterEngine` (greedy allocator), scoring weights,
//!   `summarize`
//! - **`locks`**: Cell/row/column locks and manual slot edits on `Schedule`
//! - **`insights`**: Coverage, night→day, blocked-shift and streak checks
//! - **`reorder`**: Row moves that keep worker order in sync
//! - **`validation`**: Roster integrity checks (duplicate IDs, hours, period)
//! - **`io`**: Import normalization and the export payload
//! - **`state`**: Caller-owned session state tying the pieces together
//! - **`ports`**: Traits for rendering and persistence collaborators
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use u_roster::models::{Settings, Worker};
//! use u_roster::scheduler::RosterEngine;
//! use u_roster::state::RosterState;
//!
//! let workers = vec![
//!     Worker::new("w1").with_name("Alex"),
//!     Worker::new("w2").with_name("Bea").with_order(1),
//!     Worker::new("w3").with_name("Cem").with_order(2),
//! ];
//! let mut state = RosterState::new(workers, Settings::default());
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! state.regenerate(&RosterEngine::new(), 3, 2025, &mut rng).unwrap();
//! let insights = state.insights().unwrap();
//! assert_eq!(insights.summary.len(), 3);
//! ```
//!
//! # References
//!
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review of
//!   applications, methods and models"
//! - Burke et al. (2004), "The State of the Art of Nurse Rostering"

pub mod insights;
pub mod io;
pub mod locks;
pub mod models;
pub mod ports;
pub mod reorder;
pub mod scheduler;
pub mod state;
pub mod validation;
