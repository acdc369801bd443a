//! Normalization of untrusted roster JSON.
//!
//! Every function here accepts loosely shaped input (hand-edited exports,
//! older saves) and produces well-formed models. Records that cannot be
//! repaired are dropped with a `warn!`, never an error; only a payload
//! missing its top-level structure is rejected.

use serde_json::{Map, Value};
use tracing::warn;

use super::ImportError;
use crate::models::{
    month_days, BlockedShifts, MaxStreak, Preference, Schedule, ScheduleRow, Settings, ShiftKind,
    ShiftSymbol, Worker, DEFAULT_MAX_HOURS, DEFAULT_SHIFT_HOURS,
};

/// Smallest accepted monthly budget.
pub const MIN_MAX_HOURS: f64 = 12.0;
/// Smallest accepted shift length.
pub const MIN_SHIFT_HOURS: f64 = 4.0;

/// Colors handed to workers whose stored color is not `#rrggbb`.
pub const PALETTE: [&str; 8] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
];

/// A fully normalized import.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedRoster {
    pub workers: Vec<Worker>,
    pub schedule: Schedule,
    pub month: u32,
    pub year: i32,
    /// `None` when the payload carried no string notes.
    pub notes: Option<String>,
}

/// Parses `text` and normalizes it with [`import_payload`].
pub fn import_json(text: &str, month: u32, year: i32) -> Result<ImportedRoster, ImportError> {
    let value: Value = serde_json::from_str(text)?;
    import_payload(&value, month, year)
}

/// Normalizes an export document.
///
/// `month`/`year` are used when the payload has no valid period of its
/// own. Fails when the payload is not an object or lacks `workers` or
/// `schedule`.
pub fn import_payload(value: &Value, month: u32, year: i32) -> Result<ImportedRoster, ImportError> {
    let object = value.as_object().ok_or(ImportError::InvalidStructure)?;
    let workers = object
        .get("workers")
        .and_then(Value::as_array)
        .ok_or(ImportError::MissingField("workers"))?;
    let schedule = object
        .get("schedule")
        .filter(|v| truthy(v))
        .ok_or(ImportError::MissingField("schedule"))?;

    let month = number(object.get("month"))
        .filter(|m| (1.0..=12.0).contains(m))
        .map_or(month, |m| m as u32);
    let year = number(object.get("year"))
        .filter(|y| *y != 0.0 && y.abs() < 100_000.0)
        .map_or(year, |y| y as i32);

    Ok(ImportedRoster {
        workers: normalize_workers(workers),
        schedule: normalize_schedule(schedule, month, year),
        month,
        year,
        notes: object.get("notes").and_then(Value::as_str).map(str::to_string),
    })
}

/// Repairs a list of worker records, sorted by `order`.
///
/// Records without a string `id` and `name` are dropped.
pub fn normalize_workers(records: &[Value]) -> Vec<Worker> {
    let mut workers: Vec<Worker> = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let worker = normalize_worker(record, index);
            if worker.is_none() {
                warn!(index, "dropping worker record without id/name");
            }
            worker
        })
        .collect();
    workers.sort_by_key(|w| w.order);
    workers
}

fn normalize_worker(record: &Value, index: usize) -> Option<Worker> {
    let object = record.as_object()?;
    let id = object.get("id").and_then(Value::as_str)?;
    let name = object.get("name").and_then(Value::as_str)?;

    let order = number(object.get("order")).map_or(index as i64, |o| o as i64);
    let preference = object
        .get("preference")
        .and_then(Value::as_str)
        .and_then(Preference::parse)
        .unwrap_or_default();
    let color = object
        .get("color")
        .and_then(Value::as_str)
        .filter(|c| is_hex_color(c))
        .map_or_else(|| PALETTE[index % PALETTE.len()].to_string(), str::to_string);

    let mut worker = Worker::new(id)
        .with_name(name)
        .with_order(order)
        .with_max_hours(bounded(object.get("maxHours"), MIN_MAX_HOURS, DEFAULT_MAX_HOURS))
        .with_shift_hours(bounded(
            object.get("shiftHours"),
            MIN_SHIFT_HOURS,
            DEFAULT_SHIFT_HOURS,
        ))
        .with_preference(preference)
        .with_hour_cap(object.get("enforceHourCap").is_some_and(truthy))
        .with_no_weekends(object.get("noWeekends").is_some_and(truthy))
        .with_color(color);
    worker.blocked_shifts = normalize_blocked_shifts(object.get("blockedShifts"));
    Some(worker)
}

/// Keeps numeric weekday keys 0..=6 with at least one D/N entry.
pub fn normalize_blocked_shifts(raw: Option<&Value>) -> BlockedShifts {
    let mut blocked = BlockedShifts::new();
    let Some(map) = raw.and_then(Value::as_object) else {
        return blocked;
    };
    for (key, value) in map {
        let Ok(weekday) = key.trim().parse::<u8>() else {
            continue;
        };
        if weekday > 6 {
            continue;
        }
        let kinds: Vec<ShiftKind> = value
            .as_array()
            .into_iter()
            .flatten()
            .filter_map(|v| v.as_str().and_then(ShiftSymbol::parse))
            .filter_map(ShiftSymbol::kind)
            .collect();
        if !kinds.is_empty() {
            blocked.entry(weekday).or_default().extend(kinds);
        }
    }
    blocked
}

/// Rebuilds a schedule for `month`/`year` from a loose value.
///
/// Days are regenerated from the calendar. Rows need a string `id` and
/// `name`; slots and locks are cut or padded to the month, unknown symbols
/// become empty and locks follow JSON truthiness.
pub fn normalize_schedule(raw: &Value, month: u32, year: i32) -> Schedule {
    let days = month_days(month, year);
    let len = days.len();
    let rows = raw
        .get("rows")
        .and_then(Value::as_array)
        .map(|rows| {
            rows.iter()
                .filter_map(|row| normalize_row(row, len))
                .collect()
        })
        .unwrap_or_default();

    Schedule {
        days,
        rows,
        ..Default::default()
    }
}

fn normalize_row(row: &Value, len: usize) -> Option<ScheduleRow> {
    let id = row.get("id").and_then(Value::as_str)?;
    let name = row.get("name").and_then(Value::as_str)?;
    let empty = Vec::new();
    let slots = row.get("slots").and_then(Value::as_array).unwrap_or(&empty);
    let locks = row.get("locks").and_then(Value::as_array).unwrap_or(&empty);

    let slots = (0..len)
        .map(|i| slots.get(i).and_then(Value::as_str).and_then(ShiftSymbol::parse))
        .collect();
    let locks = (0..len).map(|i| locks.get(i).is_some_and(truthy)).collect();
    Some(ScheduleRow::with_slots(id, name, slots).locked_at(locks))
}

/// Reads settings, defaulting any missing or sub-1 streak limit.
pub fn normalize_settings(raw: &Value) -> Settings {
    let defaults = MaxStreak::default();
    let streak = raw.get("maxStreak").and_then(Value::as_object);
    let limit = |key: &str, fallback: u32| {
        number(streak.and_then(|s: &Map<String, Value>| s.get(key)))
            .filter(|n| *n >= 1.0)
            .map_or(fallback, |n| n.min(u32::MAX as f64) as u32)
    };

    Settings {
        max_streak: MaxStreak {
            day: limit("D", defaults.day),
            night: limit("N", defaults.night),
            any: limit("ANY", defaults.any),
        },
        use_worker_colors: raw.get("useWorkerColors").is_some_and(truthy),
    }
}

/// Whether `value` is `#rrggbb`.
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Finite number from a JSON number or numeric string.
fn number(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn bounded(value: Option<&Value>, min: f64, fallback: f64) -> f64 {
    number(value).filter(|n| *n >= min).unwrap_or(fallback)
}

/// JSON truthiness: `false`, `null`, `0` and `""` are false.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schedule_slots_normalized_and_padded() {
        let raw = json!({
            "rows": [
                { "id": "w1", "name": "Alex", "slots": ["D", "X"], "locks": [1, 0, "yes"] },
                { "id": 7, "name": "Bad id" },
                { "name": "No id" }
            ]
        });
        let schedule = normalize_schedule(&raw, 2, 2025);

        assert_eq!(schedule.days.len(), 28);
        assert_eq!(schedule.rows.len(), 1);
        let row = &schedule.rows[0];
        assert_eq!(row.slots[0], Some(ShiftSymbol::Day));
        assert_eq!(row.slots[1], None);
        assert_eq!(row.slots.len(), 28);
        assert_eq!(&row.locks[..4], &[true, false, true, false]);
        assert_eq!(row.locks.len(), 28);
    }

    #[test]
    fn test_schedule_slots_truncated() {
        let raw = json!({ "rows": [{ "id": "w1", "name": "A", "slots": vec!["N"; 40] }] });
        let schedule = normalize_schedule(&raw, 4, 2025);
        assert_eq!(schedule.rows[0].slots.len(), 30);
        assert!(schedule.summary.is_empty());
    }

    #[test]
    fn test_workers_normalized() {
        let records = vec![
            json!({
                "id": "b", "name": "Bea", "order": 1, "maxHours": 5, "shiftHours": "8",
                "preference": "only-nights", "enforceHourCap": 1, "color": "#ABCDEF",
                "blockedShifts": { "0": ["D", "X"], "2": [], "9": ["N"], "x": ["D"] }
            }),
            json!({ "id": "a", "name": "Alex", "preference": "sideways", "color": "red" }),
            json!({ "id": "c" }),
            json!("not a record"),
        ];
        let workers = normalize_workers(&records);

        assert_eq!(workers.len(), 2);
        // "a" has no order and takes its index (1); stable sort keeps "b" first.
        assert_eq!(workers[0].id, "b");
        assert_eq!(workers[1].id, "a");
        assert_eq!(workers[1].order, 1);

        let bea = &workers[0];
        assert!((bea.max_hours - DEFAULT_MAX_HOURS).abs() < 1e-10);
        assert!((bea.shift_hours - 8.0).abs() < 1e-10);
        assert_eq!(bea.preference, Preference::OnlyNights);
        assert!(bea.enforce_hour_cap);
        assert_eq!(bea.color, "#ABCDEF");
        assert_eq!(bea.blocked_shifts.len(), 1);
        assert!(bea.is_blocked(0, ShiftKind::Day));

        let alex = &workers[1];
        assert_eq!(alex.preference, Preference::Balanced);
        assert!(is_hex_color(&alex.color));
        assert!(!alex.no_weekends);
    }

    #[test]
    fn test_settings_defaults() {
        let s = normalize_settings(&json!({ "maxStreak": { "D": 0, "N": "4" }, "useWorkerColors": true }));
        assert_eq!(s.max_streak.day, 3);
        assert_eq!(s.max_streak.night, 4);
        assert_eq!(s.max_streak.any, 3);
        assert!(s.use_worker_colors);

        assert_eq!(normalize_settings(&Value::Null), Settings::default());
    }

    #[test]
    fn test_payload_requires_workers_and_schedule() {
        assert!(matches!(
            import_payload(&json!({ "schedule": {} }), 1, 2025),
            Err(ImportError::MissingField("workers"))
        ));
        assert!(matches!(
            import_payload(&json!({ "workers": [] }), 1, 2025),
            Err(ImportError::MissingField("schedule"))
        ));
        assert!(matches!(
            import_payload(&json!([1, 2]), 1, 2025),
            Err(ImportError::InvalidStructure)
        ));
        assert!(matches!(import_json("{oops", 1, 2025), Err(ImportError::Json(_))));
    }

    #[test]
    fn test_payload_period_fallback() {
        let payload = json!({ "workers": [], "schedule": { "rows": [] }, "month": 0, "notes": "hi" });
        let imported = import_payload(&payload, 3, 2024).unwrap();
        assert_eq!((imported.month, imported.year), (3, 2024));
        assert_eq!(imported.schedule.days.len(), 31);
        assert_eq!(imported.notes.as_deref(), Some("hi"));

        let payload = json!({ "workers": [], "schedule": {}, "month": 2, "year": 2024 });
        let imported = import_payload(&payload, 3, 2025).unwrap();
        assert_eq!(imported.schedule.days.len(), 29);
        assert_eq!(imported.notes, None);
    }

    #[test]
    fn test_hex_color() {
        assert!(is_hex_color("#00ff7A"));
        assert!(!is_hex_color("#00ff7"));
        assert!(!is_hex_color("00ff7AA"));
        assert!(!is_hex_color("#00ff7G"));
    }
}
