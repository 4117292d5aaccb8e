pub mod init;
pub mod play;
pub mod show;

use std::path::Path;

use mw_core::CharacterSheet;

/// Load and parse a character sheet JSON file.
fn load_sheet(path: &Path) -> Result<CharacterSheet, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    CharacterSheet::from_json(&json).map_err(|e| e.to_string())
}
