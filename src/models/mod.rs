//! Rostering domain models.
//!
//! Provides the data types exchanged between the engine, the analyzer,
//! and the presentation layer.
//!
//! # Wire Shape
//!
//! | Type | JSON |
//! |------|------|
//! | Worker | `{ id, order, name, maxHours, shiftHours, preference, enforceHourCap, blockedShifts, color }` |
//! | Schedule | `{ days, rows, summary, warnings, forcedCells }` |
//! | Settings | `{ maxStreak: { D, N, ANY }, useWorkerColors }` |

mod calendar;
mod schedule;
mod settings;
mod shift;
mod worker;

pub use calendar::{
    days_in_month, format_date, format_date_range, month_days, ScheduleDay, DAY_NAMES,
};
pub use schedule::{CellRef, Schedule, ScheduleRow, SummaryEntry};
pub use settings::{MaxStreak, Settings};
pub use shift::{run_before, ShiftKind, ShiftSymbol, Slot};
pub use worker::{BlockedShifts, Preference, Worker, DEFAULT_MAX_HOURS, DEFAULT_SHIFT_HOURS};
