//! Interactive session driver over the tag economy.
//!
//! `Session` owns the registry, the seeded dice rng, the current move, the
//! journal, and the stage mirror, and exposes both a typed API and a
//! line-oriented `process` command surface for REPL drivers. Every
//! operation completes synchronously before returning; there is no
//! background work and no queuing.

use std::path::Path;

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;

use mw_core::{CharacterSheet, CoreError, Persistence, RollOutcome, Tag, TagKind, TagState};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::journal::{Journal, JournalEntry};
use crate::power::current_power;
use crate::registry::TagRegistry;
use crate::roll;
use crate::snapshot::RegistrySnapshot;
use crate::stage::{StageMirror, StageSnapshot};

/// An interactive session for one character.
pub struct Session {
    character_name: String,
    registry: TagRegistry,
    config: EngineConfig,
    rng: StdRng,
    current_move: Option<String>,
    journal: Journal,
    stage: StageMirror,
}

impl Session {
    /// Start a session from a character sheet.
    pub fn new(sheet: &CharacterSheet, config: EngineConfig) -> Self {
        let registry = TagRegistry::from_sheet(sheet);
        Self::from_registry(sheet.name.clone(), registry, config)
    }

    /// Start a session from an already-built registry, e.g. one restored
    /// from a snapshot.
    pub fn from_registry(
        character_name: String,
        registry: TagRegistry,
        config: EngineConfig,
    ) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            character_name,
            registry,
            config,
            rng,
            current_move: None,
            journal: Journal::new(),
            stage: StageMirror::new(),
        }
    }

    /// The character this session belongs to.
    pub fn character_name(&self) -> &str {
        &self.character_name
    }

    /// The tag registry.
    pub fn registry(&self) -> &TagRegistry {
        &self.registry
    }

    /// The session journal.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// The stage mirror.
    pub fn stage(&self) -> &StageMirror {
        &self.stage
    }

    /// The currently selected move, if any.
    pub fn current_move(&self) -> Option<&str> {
        self.current_move.as_deref()
    }

    /// The power modifier the next roll would use.
    pub fn power(&self) -> i32 {
        current_power(&self.registry)
    }

    /// Create a story tag.
    pub fn add_story_tag(&mut self, name: &str, persistence: Persistence) -> EngineResult<()> {
        self.registry.add_story_tag(name, persistence)?;
        self.journal.append(JournalEntry::StoryTagAdded {
            name: name.trim().to_string(),
            ongoing: persistence == Persistence::Ongoing,
            timestamp: Utc::now(),
        });
        Ok(())
    }

    /// Toggle a tag between available and selected. Returns the new state.
    pub fn toggle_select(&mut self, name: &str) -> EngineResult<TagState> {
        Ok(self.registry.toggle_select(name)?)
    }

    /// Burn a tag. The caller has already confirmed the action; a caller
    /// that aborts simply never invokes this.
    pub fn burn(&mut self, name: &str) -> EngineResult<bool> {
        let changed = self.registry.burn(name)?;
        if changed {
            self.journal.append(JournalEntry::TagBurnt {
                name: name.to_string(),
                timestamp: Utc::now(),
            });
        }
        Ok(changed)
    }

    /// Recover every burnt tag. Returns how many were restored.
    pub fn recover_all_burnt(&mut self) -> usize {
        let count = self.registry.recover_all_burnt();
        if count > 0 {
            self.journal.append(JournalEntry::TagsRecovered {
                count,
                timestamp: Utc::now(),
            });
        }
        count
    }

    /// Remove a story tag outright.
    pub fn remove_story_tag(&mut self, name: &str) -> EngineResult<Tag> {
        let removed = self.registry.remove_story_tag(name)?;
        self.journal.append(JournalEntry::StoryTagRemoved {
            name: removed.name.clone(),
            timestamp: Utc::now(),
        });
        Ok(removed)
    }

    /// Select the move the next roll is made for.
    pub fn select_move(&mut self, name: &str) {
        self.current_move = Some(name.to_string());
    }

    /// Resolve a 2d6+power roll against the current registry state.
    ///
    /// When the move gate is enabled, fails with `PreconditionFailed` until
    /// a move has been selected. The move is cleared once the roll
    /// resolves; the next roll needs a fresh selection.
    pub fn roll(&mut self) -> EngineResult<RollOutcome> {
        if self.config.require_move && self.current_move.is_none() {
            return Err(CoreError::PreconditionFailed("no move selected".into()).into());
        }
        let move_name = self.current_move.take();
        let (outcome, consumed) = roll::resolve(
            &mut self.registry,
            &mut self.rng,
            self.config.consume_policy,
        );
        self.journal.append(JournalEntry::RollResolved {
            move_name,
            die1: outcome.die1,
            die2: outcome.die2,
            power: outcome.power,
            total: outcome.total,
            tier: outcome.tier.to_string(),
            consumed: consumed.into_iter().map(|t| t.name).collect(),
            timestamp: Utc::now(),
        });
        Ok(outcome)
    }

    /// Accept a presentation snapshot from the broadcast channel.
    pub fn ingest_stage(&mut self, snapshot: StageSnapshot) -> EngineResult<()> {
        Ok(self.stage.ingest(snapshot)?)
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> EngineResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "tags" => Ok(self.render_tags()),
            "story" => self.do_story(rest),
            "select" => self.do_select(rest),
            "burn" => self.do_burn(rest),
            "recover" => Ok(self.do_recover()),
            "power" => Ok(format!("Power: {:+}", self.power())),
            "move" => self.do_move(rest),
            "roll" => self.do_roll(),
            "stage" => Ok(self.do_stage()),
            "note" => self.do_note(rest),
            "journal" => Ok(self.do_journal_show()),
            "export" => self.do_journal_export(rest),
            "save" => self.do_save(rest),
            "status" => Ok(self.do_status()),
            "help" => Ok(Self::help(rest)),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            _ => Err(EngineError::UnknownCommand(cmd)),
        }
    }

    fn render_tags(&self) -> String {
        let mut out = String::new();
        for (label, kind) in [
            ("Power tags:", TagKind::Power),
            ("Weakness tags:", TagKind::Weakness),
            ("Story tags:", TagKind::Story),
        ] {
            out.push_str(label);
            out.push('\n');
            let mut any = false;
            for (i, tag) in self
                .registry
                .all_tags()
                .filter(|t| t.kind == kind)
                .enumerate()
            {
                any = true;
                out.push_str(&format!("  {}. {}", i + 1, tag.name));
                if let Some(p) = tag.persistence {
                    out.push_str(&format!(" ({p})"));
                }
                if tag.state != TagState::Available {
                    out.push_str(&format!(" [{}]", tag.state));
                }
                out.push('\n');
            }
            if !any {
                out.push_str("  (none)\n");
            }
        }
        out.push_str(&format!("Power: {:+}", self.power()));
        out
    }

    fn do_story(&mut self, rest: &str) -> EngineResult<String> {
        let parts: Vec<&str> = rest.splitn(2, ' ').collect();
        let sub = parts[0].to_lowercase();
        let arg = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match sub.as_str() {
            "add" if !arg.is_empty() => {
                let (persistence, name) = match arg.split_once(' ') {
                    Some(("ongoing", n)) => (Persistence::Ongoing, n.trim()),
                    Some(("temp" | "temporary", n)) => (Persistence::Temporary, n.trim()),
                    _ => (Persistence::Temporary, arg),
                };
                self.add_story_tag(name, persistence)?;
                Ok(format!("Story tag added ({persistence}): {name}"))
            }
            "remove" if !arg.is_empty() => {
                let removed = self.remove_story_tag(arg)?;
                Ok(format!("Story tag removed: {}", removed.name))
            }
            _ => Err(EngineError::InvalidChoice(
                "usage: story add [ongoing|temp] <name> | story remove <name>".to_string(),
            )),
        }
    }

    fn do_select(&mut self, name: &str) -> EngineResult<String> {
        if name.is_empty() {
            return Err(EngineError::InvalidChoice(
                "usage: select <tag name>".to_string(),
            ));
        }
        let state = self.toggle_select(name)?;
        let verb = if state == TagState::Selected {
            "Selected"
        } else {
            "Deselected"
        };
        Ok(format!("{verb}: {name} (power {:+})", self.power()))
    }

    fn do_burn(&mut self, name: &str) -> EngineResult<String> {
        if name.is_empty() {
            return Err(EngineError::InvalidChoice(
                "usage: burn <tag name>".to_string(),
            ));
        }
        if self.burn(name)? {
            Ok(format!("Burnt: {name} (power {:+})", self.power()))
        } else {
            Ok(format!("{name} is already burnt."))
        }
    }

    fn do_recover(&mut self) -> String {
        match self.recover_all_burnt() {
            0 => "No burnt tags to recover.".to_string(),
            n => format!("Recovered {n} burnt tag(s)."),
        }
    }

    fn do_move(&mut self, name: &str) -> EngineResult<String> {
        if name.is_empty() {
            return Err(EngineError::InvalidChoice(
                "usage: move <move name>".to_string(),
            ));
        }
        self.select_move(name);
        Ok(format!("Move selected: {name}"))
    }

    fn do_roll(&mut self) -> EngineResult<String> {
        let move_name = self.current_move.clone();
        let outcome = self.roll()?;
        let label = move_name.unwrap_or_else(|| "Roll".to_string());
        let mut out = format!("{label}: {outcome}");

        // The journal entry just written holds the consumed tag names.
        if let Some(JournalEntry::RollResolved { consumed, .. }) = self.journal.entries().last() {
            if !consumed.is_empty() {
                out.push_str(&format!("\n  Consumed: {}", consumed.join(", ")));
            }
        }
        Ok(out)
    }

    fn do_stage(&self) -> String {
        match self.stage.current() {
            Some(snapshot) => snapshot.to_string(),
            None => "Nothing on stage.".to_string(),
        }
    }

    fn do_note(&mut self, text: &str) -> EngineResult<String> {
        if text.is_empty() {
            return Err(EngineError::InvalidChoice("usage: note <text>".to_string()));
        }
        self.journal.append(JournalEntry::Note {
            text: text.to_string(),
            timestamp: Utc::now(),
        });
        Ok("Note recorded.".to_string())
    }

    fn do_journal_show(&self) -> String {
        if self.journal.is_empty() {
            return "Journal is empty.".to_string();
        }
        let entries = self.journal.entries();
        let start = entries.len().saturating_sub(10);
        let mut recent = Journal::new();
        for e in &entries[start..] {
            recent.append(e.clone());
        }
        format!(
            "Journal ({} entries, showing last {}):\n\n{}",
            entries.len(),
            entries.len() - start,
            recent.export_text().trim_end()
        )
    }

    fn do_journal_export(&self, format: &str) -> EngineResult<String> {
        match format.to_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(self.journal.export_markdown()),
            "text" | "txt" => Ok(self.journal.export_text()),
            other => Err(EngineError::InvalidChoice(format!(
                "unknown format '{other}', use: markdown, text"
            ))),
        }
    }

    fn do_save(&self, path: &str) -> EngineResult<String> {
        if path.is_empty() {
            return Err(EngineError::InvalidChoice("usage: save <path>".to_string()));
        }
        RegistrySnapshot::capture(&self.registry).save_to_path(Path::new(path))?;
        Ok(format!("Saved registry to {path}"))
    }

    fn do_status(&self) -> String {
        let mut out = format!("Character: {}\n", self.character_name);
        out.push_str(&format!("Power: {:+}\n", self.power()));
        out.push_str(&format!(
            "Tags: {} available, {} burnt, {} story\n",
            self.registry.list_available().len(),
            self.registry.burnt_count(),
            self.registry.story_count()
        ));
        match &self.current_move {
            Some(name) => out.push_str(&format!("Move: {name}\n")),
            None => out.push_str("No move selected.\n"),
        }
        out.push_str(&format!("Journal: {} entries", self.journal.len()));
        out
    }

    fn help(topic: &str) -> String {
        match topic.to_lowercase().as_str() {
            "tags" | "story" => "\
Tag Commands:
  tags                          List all tags and their states
  story add [ongoing|temp] <n>  Create a story tag (default: temporary)
  story remove <name>           Delete a story tag
  select <name>                 Toggle a tag into/out of the next roll
  burn <name>                   Permanently disable a tag
  recover                       Restore all burnt tags"
                .to_string(),
            "roll" | "move" => "\
Roll Commands:
  move <name>                   Choose the move for the next roll
  roll                          Roll 2d6 + power (10+ full, 7-9 partial)
  power                         Show the current power modifier"
                .to_string(),
            _ => "\
Session Commands:
  tags                          List tags and states
  story add|remove              Manage story tags
  select <name>                 Toggle tag selection
  burn <name>                   Burn a tag
  recover                       Recover all burnt tags
  power                         Show power modifier
  move <name>                   Select a move
  roll                          Resolve a 2d6+power roll
  stage                         Show the game-master's presentation
  note <text>                   Add a journal note
  journal                       Show recent journal entries
  export [markdown|text]        Export the journal
  save <path>                   Save registry state to a JSON file
  status                        Show session status
  help [tags|roll]              Show help
  quit                          Exit"
                .to_string(),
        }
    }
}
