//! Reply variants and their user-facing rendering

use parcelbot_domain::TrackingRecord;

/// The outcome of one resolver decision, before rendering.
///
/// Naming the branch keeps the formatting testable separately from the
/// decision procedure; every variant renders to displayable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A tracking code resolved to a dataset row
    TrackingFound(TrackingRecord),
    /// A tracking code was extracted but is absent from the dataset
    TrackingMiss {
        /// The extracted code, echoed so the user can verify it
        code: String,
    },
    /// The provider answered a non-tracking question
    Generated(String),
    /// The provider call failed
    ProviderFailed {
        /// Display text of the underlying fault
        reason: String,
    },
}

impl Reply {
    /// Render the reply to the text shown to the user.
    pub fn render(&self) -> String {
        match self {
            Reply::TrackingFound(record) => format!(
                "\u{1F4E6} PAKKET GEVONDEN - {code}\n\
                 \n\
                 Vervoerder: {carrier}\n\
                 Verwacht: {expected}\n\
                 Status: {status}\n\
                 Opmerking: {note}\n\
                 \n\
                 Voor meer informatie, bezoek de website van {carrier}",
                code = record.code,
                carrier = record.carrier,
                expected = record.expected_arrival,
                status = record.status,
                note = record.note_or_placeholder(),
            ),
            Reply::TrackingMiss { code } => format!(
                "\u{274C} Ik kan geen informatie vinden over tracking code: {code}. \
                 Controleer of de code correct is."
            ),
            Reply::Generated(text) => text.clone(),
            Reply::ProviderFailed { reason } => {
                format!("Sorry, er ging iets mis: {reason}")
            }
        }
    }
}
