//! Tag economy and roll resolution engine for Mistward.
//!
//! Provides the tag registry (power/weakness tags from the character sheet
//! plus player-created story tags), the power calculator, 2d6+power roll
//! resolution with three-tier outcomes, a session driver with a journal,
//! a read-only stage mirror for game-master presentation pushes, and JSON
//! snapshot persistence.

pub mod config;
pub mod error;
pub mod journal;
pub mod power;
pub mod registry;
pub mod roll;
pub mod session;
pub mod snapshot;
pub mod stage;

pub use config::{ConsumePolicy, EngineConfig};
pub use error::{EngineError, EngineResult};
pub use registry::TagRegistry;
pub use session::Session;
pub use stage::{StageMirror, StageSnapshot};
