//! Parcelbot Domain Layer
//!
//! This crate contains the core domain model for parcelbot. It defines the
//! fundamental concepts and trait interfaces that all other layers depend
//! upon.
//!
//! ## Key Concepts
//!
//! - **TrackingRecord**: one row of the shipment dataset, keyed by its
//!   track & trace code
//! - **ChatTurn**: one entry of a session's chat log, owned by the
//!   presentation layer
//! - **TextGenerator**: the seam between the resolver and whichever
//!   generative-text backend is configured
//!
//! ## Architecture
//!
//! - Pure domain logic only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chat;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use chat::{ChatRole, ChatTurn};
pub use record::{TrackingRecord, NOTE_PLACEHOLDER};
pub use traits::TextGenerator;
