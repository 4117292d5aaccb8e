//! The tag registry: the mutable session state of the tag economy.
//!
//! Owns three pools — power and weakness tags built from the character
//! sheet, and player-created story tags. Selection is part of each tag's
//! state, so there is never an intermediate moment where a burnt tag is
//! still selected.

use serde::{Deserialize, Serialize};

use mw_core::{CharacterSheet, CoreError, CoreResult, Persistence, Tag, TagKind, TagState};

/// The three tag pools and their per-tag state.
///
/// Power and weakness tags are never deleted, only burnt and bulk-recovered.
/// Story tags are created and destroyed dynamically. Iteration order is
/// stable: power tags in catalog order, then weakness tags, then story tags
/// in creation order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagRegistry {
    power: Vec<Tag>,
    weakness: Vec<Tag>,
    story: Vec<Tag>,
}

impl TagRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a character sheet's tag catalog.
    ///
    /// The sheet is trusted as-is: a name appearing in both a power list and
    /// a weakness list is a data-entry error the registry does not repair
    /// (the power calculator scores such names as weak).
    pub fn from_sheet(sheet: &CharacterSheet) -> Self {
        Self {
            power: sheet.power_tag_names().map(Tag::power).collect(),
            weakness: sheet.weakness_tag_names().map(Tag::weakness).collect(),
            story: Vec::new(),
        }
    }

    fn find_tag_mut(&mut self, name: &str) -> Option<&mut Tag> {
        self.power
            .iter_mut()
            .chain(self.weakness.iter_mut())
            .chain(self.story.iter_mut())
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Find a tag by name (case-insensitive), searching power, weakness,
    /// then story pools.
    pub fn find(&self, name: &str) -> Option<&Tag> {
        self.all_tags().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Whether any pool holds a tag with this name (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Add a player-created story tag in state `Available`.
    ///
    /// Fails with `InvalidInput` if the name is empty or already present in
    /// any pool.
    pub fn add_story_tag(&mut self, name: &str, persistence: Persistence) -> CoreResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::InvalidInput("story tag name is empty".into()));
        }
        if self.contains(name) {
            return Err(CoreError::InvalidInput(format!(
                "tag already exists: \"{name}\""
            )));
        }
        self.story.push(Tag::story(name, persistence));
        Ok(())
    }

    /// Flip a tag between `Available` and `Selected`. Returns the new state.
    ///
    /// Burnt and consumed tags cannot be toggled (`InvalidState`).
    pub fn toggle_select(&mut self, name: &str) -> CoreResult<TagState> {
        let tag = self
            .find_tag_mut(name)
            .ok_or_else(|| CoreError::NotFound(name.to_string()))?;
        tag.state = match tag.state {
            TagState::Available => TagState::Selected,
            TagState::Selected => TagState::Available,
            TagState::Burnt => {
                return Err(CoreError::InvalidState(format!(
                    "cannot select burnt tag \"{}\"",
                    tag.name
                )));
            }
            TagState::Consumed => {
                return Err(CoreError::InvalidState(format!(
                    "cannot select consumed tag \"{}\"",
                    tag.name
                )));
            }
        };
        Ok(tag.state)
    }

    /// Burn a tag. Returns `true` if the state changed, `false` if the tag
    /// was already burnt (burning is idempotent).
    ///
    /// A selected tag is deselected in the same assignment — no intermediate
    /// state is observable. Confirmation prompts are the driver's concern;
    /// a caller that decides not to proceed simply does not call this.
    pub fn burn(&mut self, name: &str) -> CoreResult<bool> {
        let tag = self
            .find_tag_mut(name)
            .ok_or_else(|| CoreError::NotFound(name.to_string()))?;
        if tag.state == TagState::Burnt {
            return Ok(false);
        }
        tag.state = TagState::Burnt;
        Ok(true)
    }

    /// Reset every burnt tag to `Available`. Returns how many were recovered.
    ///
    /// Selection state is not restored: a tag burnt while selected comes
    /// back available, not selected.
    pub fn recover_all_burnt(&mut self) -> usize {
        let mut recovered = 0;
        for tag in self
            .power
            .iter_mut()
            .chain(self.weakness.iter_mut())
            .chain(self.story.iter_mut())
        {
            if tag.state == TagState::Burnt {
                tag.state = TagState::Available;
                recovered += 1;
            }
        }
        recovered
    }

    /// Delete a story tag outright, regardless of its selection or
    /// persistence state. This is an explicit player action, distinct from
    /// roll-triggered consumption.
    pub fn remove_story_tag(&mut self, name: &str) -> CoreResult<Tag> {
        let tag = self
            .find(name)
            .ok_or_else(|| CoreError::NotFound(name.to_string()))?;
        if tag.kind != TagKind::Story {
            return Err(CoreError::InvalidState(format!(
                "\"{}\" is a {} tag, not a story tag",
                tag.name, tag.kind
            )));
        }
        let idx = self
            .story
            .iter()
            .position(|t| t.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CoreError::NotFound(name.to_string()))?;
        Ok(self.story.remove(idx))
    }

    /// Remove temporary story tags after a roll, returning them with state
    /// `Consumed`. With `only_selected`, tags not selected for the roll
    /// survive.
    pub fn consume_temporary(&mut self, only_selected: bool) -> Vec<Tag> {
        let (mut consumed, kept): (Vec<Tag>, Vec<Tag>) = self
            .story
            .drain(..)
            .partition(|t| t.is_temporary() && (!only_selected || t.is_selected()));
        self.story = kept;
        for tag in &mut consumed {
            tag.state = TagState::Consumed;
        }
        consumed
    }

    /// All tags in stable order: power, weakness, story.
    pub fn all_tags(&self) -> impl Iterator<Item = &Tag> {
        self.power
            .iter()
            .chain(self.weakness.iter())
            .chain(self.story.iter())
    }

    /// The ordered union of non-burnt power tags, non-burnt weakness tags,
    /// and all current story tags.
    pub fn list_available(&self) -> Vec<&Tag> {
        self.power
            .iter()
            .chain(self.weakness.iter())
            .filter(|t| !t.is_burnt())
            .chain(self.story.iter())
            .collect()
    }

    /// Tags currently selected for the next roll, in stable order.
    pub fn selected(&self) -> impl Iterator<Item = &Tag> {
        self.all_tags().filter(|t| t.is_selected())
    }

    /// Names of the currently selected tags.
    pub fn selected_names(&self) -> Vec<&str> {
        self.selected().map(|t| t.name.as_str()).collect()
    }

    /// All current story tags, in creation order.
    pub fn story_tags(&self) -> &[Tag] {
        &self.story
    }

    /// Number of currently-held story tags, selected or not.
    pub fn story_count(&self) -> usize {
        self.story.len()
    }

    /// Number of currently burnt tags.
    pub fn burnt_count(&self) -> usize {
        self.all_tags().filter(|t| t.is_burnt()).count()
    }

    /// Whether the name matches a tag in the weakness pool. Used by the
    /// power calculator for the weakness-dominant tie-break.
    pub fn is_weakness(&self, name: &str) -> bool {
        self.weakness
            .iter()
            .any(|t| t.name.eq_ignore_ascii_case(name))
    }
}
