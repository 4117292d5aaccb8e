//! Read-only mirror of presentation state pushed by the game-master console.
//!
//! The mirror is a passive subscriber: an external authority publishes
//! scene/music/character snapshots at arbitrary times, and the mirror only
//! ever stores the latest one for display. Last write wins; no ordering
//! guarantees are needed and the tag economy never contends with it.

use std::fmt;

use serde::{Deserialize, Serialize};

use mw_core::{CoreError, CoreResult};

/// How the current scene is presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenePresentation {
    /// An image URL.
    Image(String),
    /// A text description.
    Text(String),
}

impl fmt::Display for ScenePresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image(url) => write!(f, "scene image: {url}"),
            Self::Text(text) => write!(f, "scene: {text}"),
        }
    }
}

/// One presentation snapshot from the game-master console.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageSnapshot {
    /// The current scene, as image or text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<ScenePresentation>,
    /// URL of the music currently playing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music_url: Option<String>,
    /// Image URL of the spotlighted character.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_image: Option<String>,
}

impl StageSnapshot {
    /// Whether the snapshot carries nothing at all.
    pub fn is_empty(&self) -> bool {
        self.scene.is_none() && self.music_url.is_none() && self.character_image.is_none()
    }
}

impl fmt::Display for StageSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::new();
        if let Some(scene) = &self.scene {
            lines.push(scene.to_string());
        }
        if let Some(url) = &self.music_url {
            lines.push(format!("music: {url}"));
        }
        if let Some(url) = &self.character_image {
            lines.push(format!("character: {url}"));
        }
        write!(f, "{}", lines.join("\n"))
    }
}

/// Holds the latest presentation snapshot for display.
#[derive(Debug, Clone, Default)]
pub struct StageMirror {
    latest: Option<StageSnapshot>,
}

impl StageMirror {
    /// Create an empty mirror.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a snapshot, replacing whatever was shown before.
    ///
    /// The only validation is a presence check: a snapshot carrying nothing
    /// is rejected with `InvalidInput`.
    pub fn ingest(&mut self, snapshot: StageSnapshot) -> CoreResult<()> {
        if snapshot.is_empty() {
            return Err(CoreError::InvalidInput("empty stage snapshot".into()));
        }
        self.latest = Some(snapshot);
        Ok(())
    }

    /// The latest snapshot, if any has been published.
    pub fn current(&self) -> Option<&StageSnapshot> {
        self.latest.as_ref()
    }

    /// Drop the stored snapshot.
    pub fn clear(&mut self) {
        self.latest = None;
    }
}
