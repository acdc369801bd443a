//! Input validation for roster builds.
//!
//! Checks structural integrity of the worker list and the target period
//! before building. Detects:
//! - An empty roster
//! - Duplicate worker IDs
//! - Non-positive or non-finite hour budgets and shift lengths
//! - Weekday blocks outside 0..=6
//! - A month/year with no calendar
//!
//! The engine itself never rejects input; these checks run at the state
//! layer so a bad record surfaces as an error instead of an odd roster.

use std::collections::{HashMap, HashSet};

use crate::models::{days_in_month, ScheduleRow, Worker};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No workers to roster.
    EmptyRoster,
    /// Two workers share the same ID.
    DuplicateId,
    /// `max_hours` or `shift_hours` is not a positive finite number.
    InvalidHours,
    /// A blocked-shift key is not a weekday index.
    InvalidWeekday,
    /// The month/year pair has no days.
    InvalidPeriod,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster build request.
///
/// Checks:
/// 1. At least one worker
/// 2. No duplicate worker IDs
/// 3. Positive, finite `max_hours` and `shift_hours`
/// 4. Weekday block keys in 0..=6
/// 5. A valid month (1-12) in a representable year
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(workers: &[Worker], month: u32, year: i32) -> ValidationResult {
    let mut errors = Vec::new();

    if days_in_month(month, year) == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidPeriod,
            format!("No calendar for {year}-{month:02}"),
        ));
    }

    if workers.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRoster,
            "Roster has no workers",
        ));
    }

    let mut ids = HashSet::new();
    for worker in workers {
        if !ids.insert(worker.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate worker ID: {}", worker.id),
            ));
        }

        for (field, value) in [
            ("maxHours", worker.max_hours),
            ("shiftHours", worker.shift_hours),
        ] {
            if !value.is_finite() || value <= 0.0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidHours,
                    format!("Worker '{}' has invalid {field}: {value}", worker.id),
                ));
            }
        }

        for &weekday in worker.blocked_shifts.keys() {
            if weekday > 6 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidWeekday,
                    format!("Worker '{}' blocks unknown weekday {weekday}", worker.id),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Keeps only rows whose ID belongs to a current worker, renaming each to
/// the worker's current name.
pub fn retain_known_rows(rows: &[ScheduleRow], workers: &[Worker]) -> Vec<ScheduleRow> {
    let names: HashMap<&str, &str> = workers
        .iter()
        .map(|w| (w.id.as_str(), w.name.as_str()))
        .collect();

    rows.iter()
        .filter_map(|row| {
            let name = names.get(row.id.as_str())?;
            let mut row = row.clone();
            row.name = (*name).to_string();
            Some(row)
        })
        .collect()
}
