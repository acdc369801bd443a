//! Export document for the active roster.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Schedule, Worker};
use crate::state::{RosterError, RosterState};

/// Current payload format.
pub const EXPORT_VERSION: &str = "1.0.0";

/// Everything needed to restore a roster later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub month: u32,
    pub year: i32,
    pub notes: String,
    pub workers: Vec<Worker>,
    pub schedule: Schedule,
}

impl ExportPayload {
    /// Snapshots `state`. Fails when no schedule has been built.
    pub fn from_state(state: &RosterState, exported_at: DateTime<Utc>) -> Result<Self, RosterError> {
        let active = state.current.as_ref().ok_or(RosterError::NoActiveSchedule)?;
        Ok(Self {
            version: EXPORT_VERSION.to_string(),
            exported_at,
            month: active.month,
            year: active.year,
            notes: state.notes.clone(),
            workers: state.workers.clone(),
            schedule: active.schedule.clone(),
        })
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::import_json;
    use crate::models::{Settings, ShiftSymbol};
    use crate::scheduler::RosterEngine;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn built_state() -> RosterState {
        let workers = vec![
            Worker::new("w1").with_name("Alex").with_color("#112233"),
            Worker::new("w2").with_name("Bea").with_order(1).with_color("#445566"),
        ];
        let mut state = RosterState::new(workers, Settings::default());
        state.notes = "Swap on the 14th".into();
        let mut rng = StdRng::seed_from_u64(3);
        state
            .regenerate(&RosterEngine::new(), 2, 2025, &mut rng)
            .unwrap();
        state
    }

    #[test]
    fn test_export_requires_schedule() {
        let state = RosterState::new(vec![Worker::new("w1")], Settings::default());
        let at = Utc.with_ymd_and_hms(2025, 2, 1, 8, 0, 0).unwrap();
        assert!(matches!(
            ExportPayload::from_state(&state, at),
            Err(RosterError::NoActiveSchedule)
        ));
    }

    #[test]
    fn test_export_shape() {
        let state = built_state();
        let at = Utc.with_ymd_and_hms(2025, 2, 1, 8, 0, 0).unwrap();
        let payload = ExportPayload::from_state(&state, at).unwrap();
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["version"], "1.0.0");
        assert_eq!(value["exportedAt"], "2025-02-01T08:00:00Z");
        assert_eq!(value["month"], 2);
        assert_eq!(value["notes"], "Swap on the 14th");
        assert_eq!(value["workers"][0]["maxHours"], 168.0);
        assert_eq!(value["schedule"]["days"][0]["date"], "2025-02-01");
        assert_eq!(value["schedule"]["days"][0]["isSaturday"], true);
    }

    #[test]
    fn test_export_then_import_restores_rows() {
        let mut state = built_state();
        if let Some(active) = state.current.as_mut() {
            active.schedule.toggle_cell_lock("w1", 0);
            active.schedule.update_slot_value("w2", 5, Some(ShiftSymbol::Holiday));
        }
        let at = Utc.with_ymd_and_hms(2025, 2, 1, 8, 0, 0).unwrap();
        let text = ExportPayload::from_state(&state, at).unwrap().to_json().unwrap();

        let imported = import_json(&text, 1, 2000).unwrap();
        let active = state.current.as_ref().unwrap();
        assert_eq!((imported.month, imported.year), (2, 2025));
        assert_eq!(imported.workers, state.workers);
        assert_eq!(imported.schedule.rows, active.schedule.rows);
        assert_eq!(imported.notes.as_deref(), Some("Swap on the 14th"));
    }
}
