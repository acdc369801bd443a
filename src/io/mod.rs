//! JSON import and export of a whole roster.
//!
//! # Wire Shape
//!
//! | Field | Content |
//! |-------|---------|
//! | `version` | payload format, currently `1.0.0` |
//! | `exportedAt` | RFC 3339 UTC timestamp |
//! | `month`, `year` | rostered period |
//! | `notes` | free text |
//! | `workers` | worker records |
//! | `schedule` | days, rows, summary, warnings |

mod export;
mod import;

pub use export::{ExportPayload, EXPORT_VERSION};
pub use import::{
    import_json, import_payload, is_hex_color, normalize_blocked_shifts, normalize_schedule,
    normalize_settings, normalize_workers, ImportedRoster, MIN_MAX_HOURS, MIN_SHIFT_HOURS,
    PALETTE,
};

/// Failure to read an import payload.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The payload is not a JSON object.
    #[error("import payload must be a JSON object")]
    InvalidStructure,
    /// A required top-level field is missing or empty.
    #[error("import payload is missing `{0}`")]
    MissingField(&'static str),
}
