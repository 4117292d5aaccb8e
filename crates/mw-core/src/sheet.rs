//! Character sheets: the read-only tag catalog a session starts from.
//!
//! A sheet is loaded once at session start and treated as immutable.
//! Older sheet files write a theme's weakness as a single string rather
//! than a list; [`WeaknessTags`] accepts both forms.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// One or more weakness tag names.
///
/// Deserializes from either `"Glass Jaw"` or `["Glass Jaw", "Hot Headed"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeaknessTags {
    /// A single weakness tag, as older sheet files write it.
    One(String),
    /// A list of weakness tags.
    Many(Vec<String>),
}

impl WeaknessTags {
    /// The weakness tag names, regardless of input form.
    pub fn names(&self) -> &[String] {
        match self {
            Self::One(name) => std::slice::from_ref(name),
            Self::Many(names) => names,
        }
    }
}

impl Default for WeaknessTags {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

/// A character theme: a named group of power tags and weakness tags.
///
/// The descriptive fields are display-only and never touch the roll logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name.
    pub name: String,
    /// Power tag names, in catalog order.
    #[serde(default)]
    pub power_tags: Vec<String>,
    /// Weakness tag name(s).
    #[serde(default)]
    pub weakness_tags: WeaknessTags,
    /// The mystery or identity statement driving the theme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mystery: Option<String>,
    /// Free-form display text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A character sheet: the immutable catalog a session's registry is built
/// from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSheet {
    /// Character name.
    pub name: String,
    /// Themes, in sheet order.
    #[serde(default)]
    pub themes: Vec<Theme>,
}

impl CharacterSheet {
    /// Create an empty sheet with the given character name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            themes: Vec::new(),
        }
    }

    /// Parse a sheet from JSON.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| CoreError::InvalidInput(format!("malformed character sheet: {e}")))
    }

    /// All power tag names across themes, in sheet order.
    pub fn power_tag_names(&self) -> impl Iterator<Item = &str> {
        self.themes
            .iter()
            .flat_map(|t| t.power_tags.iter())
            .map(String::as_str)
    }

    /// All weakness tag names across themes, in sheet order.
    pub fn weakness_tag_names(&self) -> impl Iterator<Item = &str> {
        self.themes
            .iter()
            .flat_map(|t| t.weakness_tags.names().iter())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET_JSON: &str = r#"{
        "name": "Nyx",
        "themes": [
            {
                "name": "Street Fighter",
                "power_tags": ["Sharp Tongue", "Quick Reflexes"],
                "weakness_tags": "Glass Jaw",
                "mystery": "Who taught me to fight?"
            },
            {
                "name": "Whispers of the Veil",
                "power_tags": ["Second Sight"],
                "weakness_tags": ["Distracted", "Haunted"]
            }
        ]
    }"#;

    #[test]
    fn parse_sheet() {
        let sheet = CharacterSheet::from_json(SHEET_JSON).unwrap();
        assert_eq!(sheet.name, "Nyx");
        assert_eq!(sheet.themes.len(), 2);
    }

    #[test]
    fn weakness_single_string_form() {
        let sheet = CharacterSheet::from_json(SHEET_JSON).unwrap();
        assert_eq!(sheet.themes[0].weakness_tags.names(), ["Glass Jaw"]);
    }

    #[test]
    fn weakness_list_form() {
        let sheet = CharacterSheet::from_json(SHEET_JSON).unwrap();
        assert_eq!(
            sheet.themes[1].weakness_tags.names(),
            ["Distracted", "Haunted"]
        );
    }

    #[test]
    fn tag_name_iteration_preserves_sheet_order() {
        let sheet = CharacterSheet::from_json(SHEET_JSON).unwrap();
        let power: Vec<&str> = sheet.power_tag_names().collect();
        assert_eq!(power, ["Sharp Tongue", "Quick Reflexes", "Second Sight"]);
        let weak: Vec<&str> = sheet.weakness_tag_names().collect();
        assert_eq!(weak, ["Glass Jaw", "Distracted", "Haunted"]);
    }

    #[test]
    fn malformed_json_is_invalid_input() {
        let err = CharacterSheet::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn missing_themes_defaults_empty() {
        let sheet = CharacterSheet::from_json(r#"{"name": "Drifter"}"#).unwrap();
        assert!(sheet.themes.is_empty());
    }

    #[test]
    fn serde_roundtrip() {
        let sheet = CharacterSheet::from_json(SHEET_JSON).unwrap();
        let json = serde_json::to_string(&sheet).unwrap();
        let back = CharacterSheet::from_json(&json).unwrap();
        assert_eq!(back, sheet);
    }
}
