//! Narrative tags and their lifecycle states.
//!
//! Power and weakness tags come from the character sheet and live for the
//! whole session — they can be burnt and bulk-recovered but never deleted.
//! Story tags are created ad hoc during play and destroyed either by the
//! player or by roll-triggered consumption.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    /// A reusable positive descriptor; +1 to power when selected.
    Power,
    /// A reusable negative descriptor; -1 to power when selected.
    Weakness,
    /// A session-scoped descriptor; +1 to power simply by existing.
    Story,
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Power => write!(f, "power"),
            Self::Weakness => write!(f, "weakness"),
            Self::Story => write!(f, "story"),
        }
    }
}

/// How long a story tag survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persistence {
    /// Survives rolls until the player removes it.
    Ongoing,
    /// Consumed after one roll.
    Temporary,
}

impl fmt::Display for Persistence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ongoing => write!(f, "ongoing"),
            Self::Temporary => write!(f, "temporary"),
        }
    }
}

/// The lifecycle state of a tag.
///
/// `Selected` and `Burnt` are mutually exclusive: burning a selected tag
/// moves it straight to `Burnt`, which also removes it from the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagState {
    /// Usable but not contributing to the next roll.
    Available,
    /// Contributing to the next roll.
    Selected,
    /// Permanently disabled; reversible only via bulk recovery.
    Burnt,
    /// Spent by a roll. Terminal — consumed story tags leave the registry.
    Consumed,
}

impl fmt::Display for TagState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Selected => write!(f, "selected"),
            Self::Burnt => write!(f, "burnt"),
            Self::Consumed => write!(f, "consumed"),
        }
    }
}

/// A narrative descriptor with a lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name, unique across the union of all pools.
    pub name: String,
    /// Which pool the tag belongs to.
    pub kind: TagKind,
    /// Story tags only: whether the tag survives rolls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistence: Option<Persistence>,
    /// Current lifecycle state.
    pub state: TagState,
}

impl Tag {
    /// Create an available power tag.
    pub fn power(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TagKind::Power,
            persistence: None,
            state: TagState::Available,
        }
    }

    /// Create an available weakness tag.
    pub fn weakness(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TagKind::Weakness,
            persistence: None,
            state: TagState::Available,
        }
    }

    /// Create an available story tag.
    pub fn story(name: impl Into<String>, persistence: Persistence) -> Self {
        Self {
            name: name.into(),
            kind: TagKind::Story,
            persistence: Some(persistence),
            state: TagState::Available,
        }
    }

    /// Whether this tag is currently selected for the next roll.
    pub fn is_selected(&self) -> bool {
        self.state == TagState::Selected
    }

    /// Whether this tag has been burnt.
    pub fn is_burnt(&self) -> bool {
        self.state == TagState::Burnt
    }

    /// Whether this is a story tag.
    pub fn is_story(&self) -> bool {
        self.kind == TagKind::Story
    }

    /// Whether this is a temporary story tag (consumed after one roll).
    pub fn is_temporary(&self) -> bool {
        self.persistence == Some(Persistence::Temporary)
    }

    /// Whether the tag can be toggled into or out of the selection.
    pub fn is_selectable(&self) -> bool {
        matches!(self.state, TagState::Available | TagState::Selected)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_start_available() {
        assert_eq!(Tag::power("Sharp Tongue").state, TagState::Available);
        assert_eq!(Tag::weakness("Glass Jaw").state, TagState::Available);
        assert_eq!(
            Tag::story("Momentary Courage", Persistence::Temporary).state,
            TagState::Available
        );
    }

    #[test]
    fn persistence_only_on_story_tags() {
        assert!(Tag::power("Sharp Tongue").persistence.is_none());
        assert!(Tag::weakness("Glass Jaw").persistence.is_none());
        assert_eq!(
            Tag::story("Wired In", Persistence::Ongoing).persistence,
            Some(Persistence::Ongoing)
        );
    }

    #[test]
    fn temporary_detection() {
        assert!(Tag::story("Momentary Courage", Persistence::Temporary).is_temporary());
        assert!(!Tag::story("Wired In", Persistence::Ongoing).is_temporary());
        assert!(!Tag::power("Sharp Tongue").is_temporary());
    }

    #[test]
    fn selectable_states() {
        let mut tag = Tag::power("Sharp Tongue");
        assert!(tag.is_selectable());
        tag.state = TagState::Selected;
        assert!(tag.is_selectable());
        tag.state = TagState::Burnt;
        assert!(!tag.is_selectable());
        tag.state = TagState::Consumed;
        assert!(!tag.is_selectable());
    }

    #[test]
    fn display() {
        assert_eq!(Tag::power("Sharp Tongue").to_string(), "Sharp Tongue (power)");
        assert_eq!(TagState::Burnt.to_string(), "burnt");
        assert_eq!(Persistence::Temporary.to_string(), "temporary");
    }

    #[test]
    fn serde_roundtrip() {
        let tag = Tag::story("Momentary Courage", Persistence::Temporary);
        let json = serde_json::to_string(&tag).unwrap();
        let back: Tag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tag);
    }

    #[test]
    fn serde_omits_absent_persistence() {
        let json = serde_json::to_string(&Tag::power("Sharp Tongue")).unwrap();
        assert!(!json.contains("persistence"));
    }
}
