//! A chronological log of session events with text and markdown export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged session event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JournalEntry {
    /// A roll was resolved.
    RollResolved {
        /// The move the roll was made for, if the session models moves.
        move_name: Option<String>,
        /// First die.
        die1: u32,
        /// Second die.
        die2: u32,
        /// Power modifier at resolution.
        power: i32,
        /// Roll total.
        total: i32,
        /// Tier name.
        tier: String,
        /// Names of story tags consumed by the roll.
        consumed: Vec<String>,
        /// When the roll happened.
        timestamp: DateTime<Utc>,
    },
    /// A tag was burnt.
    TagBurnt {
        /// Tag name.
        name: String,
        /// When it was burnt.
        timestamp: DateTime<Utc>,
    },
    /// All burnt tags were recovered.
    TagsRecovered {
        /// How many tags were restored.
        count: usize,
        /// When the recovery happened.
        timestamp: DateTime<Utc>,
    },
    /// A story tag was created.
    StoryTagAdded {
        /// Tag name.
        name: String,
        /// Whether the tag is ongoing (survives rolls).
        ongoing: bool,
        /// When it was added.
        timestamp: DateTime<Utc>,
    },
    /// A story tag was removed by the player.
    StoryTagRemoved {
        /// Tag name.
        name: String,
        /// When it was removed.
        timestamp: DateTime<Utc>,
    },
    /// A free-form player note.
    Note {
        /// Note text.
        text: String,
        /// When the note was taken.
        timestamp: DateTime<Utc>,
    },
}

/// A chronological log of session events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the journal as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Session Journal\n\n");
        for entry in &self.entries {
            match entry {
                JournalEntry::RollResolved {
                    move_name,
                    die1,
                    die2,
                    power,
                    total,
                    tier,
                    consumed,
                    ..
                } => {
                    let label = move_name.as_deref().unwrap_or("roll");
                    out.push_str(&format!(
                        "**Roll** ({label}): [{die1}, {die2}] {power:+} = {total} — **{tier}**\n"
                    ));
                    if !consumed.is_empty() {
                        out.push_str(&format!("  *Consumed*: {}\n", consumed.join(", ")));
                    }
                    out.push('\n');
                }
                JournalEntry::TagBurnt { name, .. } => {
                    out.push_str(&format!("**Burnt**: {name}\n\n"));
                }
                JournalEntry::TagsRecovered { count, .. } => {
                    out.push_str(&format!("**Recovered** {count} burnt tag(s)\n\n"));
                }
                JournalEntry::StoryTagAdded { name, ongoing, .. } => {
                    let kind = if *ongoing { "ongoing" } else { "temporary" };
                    out.push_str(&format!("**Story tag** ({kind}): {name}\n\n"));
                }
                JournalEntry::StoryTagRemoved { name, .. } => {
                    out.push_str(&format!("**Story tag removed**: {name}\n\n"));
                }
                JournalEntry::Note { text, .. } => {
                    out.push_str(&format!("> {text}\n\n"));
                }
            }
        }
        out
    }

    /// Export the journal as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Session Journal\n===============\n\n");
        for entry in &self.entries {
            match entry {
                JournalEntry::RollResolved {
                    move_name,
                    die1,
                    die2,
                    power,
                    total,
                    tier,
                    consumed,
                    ..
                } => {
                    let label = move_name.as_deref().unwrap_or("roll");
                    out.push_str(&format!(
                        "Roll ({label}): [{die1}, {die2}] {power:+} = {total} — {tier}\n"
                    ));
                    if !consumed.is_empty() {
                        out.push_str(&format!("  Consumed: {}\n", consumed.join(", ")));
                    }
                    out.push('\n');
                }
                JournalEntry::TagBurnt { name, .. } => {
                    out.push_str(&format!("Burnt: {name}\n\n"));
                }
                JournalEntry::TagsRecovered { count, .. } => {
                    out.push_str(&format!("Recovered {count} burnt tag(s)\n\n"));
                }
                JournalEntry::StoryTagAdded { name, ongoing, .. } => {
                    let kind = if *ongoing { "ongoing" } else { "temporary" };
                    out.push_str(&format!("Story tag ({kind}): {name}\n\n"));
                }
                JournalEntry::StoryTagRemoved { name, .. } => {
                    out.push_str(&format!("Story tag removed: {name}\n\n"));
                }
                JournalEntry::Note { text, .. } => {
                    out.push_str(&format!("Note: {text}\n\n"));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_journal() {
        let j = Journal::new();
        assert!(j.is_empty());
        assert_eq!(j.len(), 0);
    }

    #[test]
    fn append_and_query() {
        let mut j = Journal::new();
        j.append(JournalEntry::Note {
            text: "The Gatekeeper knows".to_string(),
            timestamp: Utc::now(),
        });
        assert_eq!(j.len(), 1);
    }

    #[test]
    fn export_markdown_roll() {
        let mut j = Journal::new();
        j.append(JournalEntry::RollResolved {
            move_name: Some("Face Danger".to_string()),
            die1: 4,
            die2: 5,
            power: 2,
            total: 11,
            tier: "Full".to_string(),
            consumed: vec!["Momentary Courage".to_string()],
            timestamp: Utc::now(),
        });
        let md = j.export_markdown();
        assert!(md.contains("**Roll** (Face Danger): [4, 5] +2 = 11 — **Full**"));
        assert!(md.contains("*Consumed*: Momentary Courage"));
    }

    #[test]
    fn export_text_roll_without_move() {
        let mut j = Journal::new();
        j.append(JournalEntry::RollResolved {
            move_name: None,
            die1: 2,
            die2: 3,
            power: -1,
            total: 4,
            tier: "Miss".to_string(),
            consumed: Vec::new(),
            timestamp: Utc::now(),
        });
        let txt = j.export_text();
        assert!(txt.contains("Roll (roll): [2, 3] -1 = 4 — Miss"));
        assert!(!txt.contains("Consumed"));
    }

    #[test]
    fn export_markdown_tag_lifecycle() {
        let mut j = Journal::new();
        j.append(JournalEntry::StoryTagAdded {
            name: "Wired In".to_string(),
            ongoing: true,
            timestamp: Utc::now(),
        });
        j.append(JournalEntry::TagBurnt {
            name: "Glass Jaw".to_string(),
            timestamp: Utc::now(),
        });
        j.append(JournalEntry::TagsRecovered {
            count: 1,
            timestamp: Utc::now(),
        });
        let md = j.export_markdown();
        assert!(md.contains("**Story tag** (ongoing): Wired In"));
        assert!(md.contains("**Burnt**: Glass Jaw"));
        assert!(md.contains("**Recovered** 1 burnt tag(s)"));
    }

    #[test]
    fn serde_roundtrip() {
        let mut j = Journal::new();
        j.append(JournalEntry::StoryTagRemoved {
            name: "Wired In".to_string(),
            timestamp: Utc::now(),
        });
        let json = serde_json::to_string(&j).unwrap();
        let back: Journal = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 1);
    }
}
