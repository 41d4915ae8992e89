//! Tab-separated tracking dataset loading and lookup

use parcelbot_domain::TrackingRecord;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Column headers the source file must carry.
const COL_CODE: &str = "TrackTraceCode";
const COL_CARRIER: &str = "Vervoerder";
const COL_EXPECTED: &str = "VerwachtAankomsttijdstip";
const COL_STATUS: &str = "Status";
const COL_NOTE: &str = "Opmerking";

/// Why a dataset source could not be used.
///
/// Internal to the load path: `TrackingDataset::load` converts any of these
/// into an empty dataset, it never fails startup.
#[derive(Error, Debug)]
pub(crate) enum LoadError {
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("empty file")]
    Empty,

    #[error("missing column '{0}' in header")]
    MissingColumn(&'static str),
}

/// How a dataset load went.
///
/// Both arms leave the caller with a usable dataset; `Unavailable` just makes
/// the degradation visible so the harness can log or display it.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The source file parsed; `rows` records are available.
    Loaded {
        /// Number of records loaded
        rows: usize,
    },
    /// The source file was missing or corrupt; the dataset is empty.
    Unavailable {
        /// Human-readable description of what went wrong
        reason: String,
    },
}

/// The in-memory shipment dataset.
///
/// An ordered collection of [`TrackingRecord`], looked up by track & trace
/// code with case-insensitive exact equality. Loaded once, read-only
/// afterwards; lookups against an empty dataset miss rather than error, and
/// the caller cannot distinguish "not loaded" from "not present".
#[derive(Debug, Default)]
pub struct TrackingDataset {
    records: Vec<TrackingRecord>,
}

impl TrackingDataset {
    /// A dataset with no records.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a dataset directly from records. Used by tests and callers that
    /// source rows elsewhere.
    pub fn from_records(records: Vec<TrackingRecord>) -> Self {
        Self { records }
    }

    /// Load the dataset from a tab-separated file.
    ///
    /// A missing or unparsable file degrades to an empty dataset; the
    /// returned [`LoadOutcome`] says which way it went.
    pub fn load(path: impl AsRef<Path>) -> (Self, LoadOutcome) {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(dataset) => {
                let rows = dataset.records.len();
                info!(path = %path.display(), rows, "tracking dataset loaded");
                (dataset, LoadOutcome::Loaded { rows })
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "tracking dataset unavailable, continuing with empty dataset");
                (
                    Self::empty(),
                    LoadOutcome::Unavailable {
                        reason: e.to_string(),
                    },
                )
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self, LoadError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse tab-separated content with a header row. Columns are located by
    /// header name, not position.
    fn parse(contents: &str) -> Result<Self, LoadError> {
        let mut lines = contents.lines();
        let header = lines.next().ok_or(LoadError::Empty)?;
        let columns: Vec<&str> = header.split('\t').map(str::trim).collect();

        let col = |name: &'static str| {
            columns
                .iter()
                .position(|c| *c == name)
                .ok_or(LoadError::MissingColumn(name))
        };

        let idx_code = col(COL_CODE)?;
        let idx_carrier = col(COL_CARRIER)?;
        let idx_expected = col(COL_EXPECTED)?;
        let idx_status = col(COL_STATUS)?;
        // Note column is optional in the source
        let idx_note = columns.iter().position(|c| *c == COL_NOTE);

        let mut records = Vec::new();
        for (lineno, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let cells: Vec<&str> = line.split('\t').map(str::trim).collect();

            let cell = |idx: usize| cells.get(idx).copied().filter(|c| !c.is_empty());

            match (
                cell(idx_code),
                cell(idx_carrier),
                cell(idx_expected),
                cell(idx_status),
            ) {
                (Some(code), Some(carrier), Some(expected), Some(status)) => {
                    records.push(TrackingRecord {
                        code: code.to_string(),
                        carrier: carrier.to_string(),
                        expected_arrival: expected.to_string(),
                        status: status.to_string(),
                        note: idx_note.and_then(cell).map(String::from),
                    });
                }
                _ => {
                    warn!(line = lineno + 2, "skipping row with missing required cells");
                }
            }
        }

        Ok(Self { records })
    }

    /// Resolve a code to its record.
    ///
    /// Case-insensitive exact match; the first matching row wins when the
    /// source contains duplicates. An empty dataset always misses.
    pub fn lookup(&self, code: &str) -> Option<&TrackingRecord> {
        self.records
            .iter()
            .find(|r| r.code.eq_ignore_ascii_case(code))
    }

    /// All records, in source order. The harness uses this for its
    /// sample-rows view.
    pub fn records(&self) -> &[TrackingRecord] {
        &self.records
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}
