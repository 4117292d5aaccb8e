//! Core types for Mistward: tags, character themes, and roll outcomes.
//!
//! This crate defines the data model the engine operates on. It is
//! independent of any driver — you can construct a [`CharacterSheet`]
//! programmatically or deserialize one from JSON.

/// Error types used throughout the workspace.
pub mod error;
/// Roll outcome records and tier classification.
pub mod outcome;
/// Character sheets and themes loaded from the tag catalog.
pub mod sheet;
/// Tag types and lifecycle states.
pub mod tag;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export roll outcome types.
pub use outcome::{RollOutcome, Tier};
/// Re-export catalog types.
pub use sheet::{CharacterSheet, Theme};
/// Re-export tag types.
pub use tag::{Persistence, Tag, TagKind, TagState};
