//! Parcelbot Tracking
//!
//! Track & trace support: pulling candidate tracking codes out of free-form
//! user text, and resolving codes against the tabular shipment dataset.
//!
//! # Overview
//!
//! ```text
//! Utterance → CodeExtractor → code → TrackingDataset → TrackingRecord
//! ```
//!
//! The dataset is loaded once at startup and is read-only afterwards. A
//! missing or corrupt source file degrades to an empty dataset; lookups
//! against it simply miss, startup never fails on the data path.
//!
//! # Example
//!
//! ```
//! use parcelbot_tracking::{CodeExtractor, TrackingDataset};
//!
//! let extractor = CodeExtractor::new();
//! let code = extractor.extract("Waar is mijn pakket met code 3SAB123456789NL?");
//! assert_eq!(code.as_deref(), Some("3SAB123456789NL"));
//!
//! let dataset = TrackingDataset::empty();
//! assert!(dataset.lookup("3SAB123456789NL").is_none());
//! ```

#![warn(missing_docs)]

mod dataset;
mod extract;

pub use dataset::{LoadOutcome, TrackingDataset};
pub use extract::CodeExtractor;
