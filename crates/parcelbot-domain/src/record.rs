//! Shipment tracking records
//!
//! A `TrackingRecord` is one row of the tabular tracking dataset. Records are
//! loaded once at startup and never mutated afterwards; the dataset crate
//! owns loading and lookup.

use serde::{Deserialize, Serialize};

/// Rendered in place of an absent `note` field.
///
/// The dataset's note column is optional; user-facing output must never show
/// an empty note, so callers substitute this fixed text.
pub const NOTE_PLACEHOLDER: &str = "Geen opmerking";

/// One row of the shipment tracking dataset.
///
/// The `code` field is the external track & trace identifier and acts as the
/// lookup key. Matching on it is case-insensitive and exact; the remaining
/// fields are free-form display strings taken from the source file as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingRecord {
    /// Track & trace code, the case-insensitive lookup key
    pub code: String,

    /// Logistics company responsible for the shipment
    pub carrier: String,

    /// Expected arrival, free-form date/time text
    pub expected_arrival: String,

    /// Free-form status label such as "In transit"
    pub status: String,

    /// Optional remark; absent notes render as [`NOTE_PLACEHOLDER`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl TrackingRecord {
    /// The note text for display, substituting the fixed placeholder when
    /// the source row had none.
    pub fn note_or_placeholder(&self) -> &str {
        self.note.as_deref().unwrap_or(NOTE_PLACEHOLDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(note: Option<&str>) -> TrackingRecord {
        TrackingRecord {
            code: "3SAB123456789NL".to_string(),
            carrier: "PostNL".to_string(),
            expected_arrival: "2024-05-01".to_string(),
            status: "In transit".to_string(),
            note: note.map(String::from),
        }
    }

    #[test]
    fn test_note_present() {
        let r = record(Some("Bezorgd bij buren"));
        assert_eq!(r.note_or_placeholder(), "Bezorgd bij buren");
    }

    #[test]
    fn test_note_absent_renders_placeholder() {
        let r = record(None);
        assert_eq!(r.note_or_placeholder(), NOTE_PLACEHOLDER);
    }

    #[test]
    fn test_serde_skips_absent_note() {
        let json = serde_json::to_string(&record(None)).unwrap();
        assert!(!json.contains("note"));
    }
}
