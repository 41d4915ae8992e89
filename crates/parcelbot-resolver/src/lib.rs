//! Parcelbot Resolver
//!
//! Decides, per user utterance, between the tracking-lookup path and the
//! generative-answer path, and always produces displayable text.
//!
//! # Architecture
//!
//! ```text
//! Utterance → CodeExtractor ─┬─ code → TrackingDataset ─┬─ hit  → status card
//!                            │                          └─ miss → not-found text
//!                            └─ none → preamble + utterance → TextGenerator
//! ```
//!
//! The resolver holds only read-only state (the immutable dataset and the
//! configured provider) and is stateless across calls, so a single instance
//! can serve any number of independent sessions. Every failure mode is
//! absorbed into a successful string return; `respond` has no error path
//! visible to its caller.

#![warn(missing_docs)]

mod preamble;
mod reply;
mod resolver;

pub use preamble::PREAMBLE;
pub use reply::Reply;
pub use resolver::Resolver;
