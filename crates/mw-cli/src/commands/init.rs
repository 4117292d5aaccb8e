use std::fs;
use std::path::{Path, PathBuf};

use mw_core::sheet::WeaknessTags;
use mw_core::{CharacterSheet, Theme};

pub fn run(name: &str, output: Option<&Path>) -> Result<(), String> {
    let default_path = PathBuf::from(format!("{}.json", name.to_lowercase().replace(' ', "-")));
    let path = output.unwrap_or(&default_path);

    if path.exists() {
        return Err(format!("{} already exists", path.display()));
    }

    let sheet = template_sheet(name);
    let json = serde_json::to_string_pretty(&sheet).map_err(|e| e.to_string())?;
    fs::write(path, json).map_err(|e| format!("cannot write {}: {e}", path.display()))?;

    println!("Created character sheet '{name}' at {}", path.display());
    Ok(())
}

fn template_sheet(name: &str) -> CharacterSheet {
    CharacterSheet {
        name: name.to_string(),
        themes: vec![
            Theme {
                name: "Street Fighter".to_string(),
                power_tags: vec![
                    "Sharp Tongue".to_string(),
                    "Quick Reflexes".to_string(),
                    "Never Backs Down".to_string(),
                ],
                weakness_tags: WeaknessTags::One("Glass Jaw".to_string()),
                mystery: Some("Who taught me to fight?".to_string()),
                description: Some("Edit this theme to fit your character.".to_string()),
            },
            Theme {
                name: "Whispers of the Veil".to_string(),
                power_tags: vec!["Second Sight".to_string(), "Read the Room".to_string()],
                weakness_tags: WeaknessTags::Many(vec![
                    "Distracted".to_string(),
                    "Haunted".to_string(),
                ]),
                mystery: None,
                description: None,
            },
        ],
    }
}
