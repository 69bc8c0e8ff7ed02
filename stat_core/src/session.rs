//! Session records - per-run summary persisted as a JSON list

use crate::stats::CharacterStats;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndGameState {
    Win,
    Loss,
}

/// Summary of one finished run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session_date: String,
    pub highest_level: u32,
    pub outcome: EndGameState,
    pub experience_gained: u32,
    pub waves_completed: u32,
    pub mobs_killed: u32,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Counts waves and kills while a run is in progress
#[derive(Debug, Clone, Default)]
pub struct SessionTracker {
    waves_completed: u32,
    mobs_killed: u32,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_wave(&mut self) {
        self.waves_completed += 1;
    }

    pub fn record_mob_kill(&mut self) {
        self.mobs_killed += 1;
    }

    pub fn waves_completed(&self) -> u32 {
        self.waves_completed
    }

    pub fn mobs_killed(&self) -> u32 {
        self.mobs_killed
    }

    /// Close the run, taking level and experience from the hero's stats
    pub fn finish(
        self,
        session_date: impl Into<String>,
        outcome: EndGameState,
        hero: &CharacterStats,
    ) -> SessionRecord {
        SessionRecord {
            session_date: session_date.into(),
            highest_level: hero.level(),
            outcome,
            experience_gained: hero.experience(),
            waves_completed: self.waves_completed,
            mobs_killed: self.mobs_killed,
        }
    }
}

/// All stored session records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionKeeper {
    sessions: Vec<SessionRecord>,
}

impl SessionKeeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the record list; a missing file is an empty history
    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), SessionError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        log::debug!("Saved {} session records to {:?}", self.sessions.len(), path);
        Ok(())
    }

    pub fn push(&mut self, record: SessionRecord) {
        self.sessions.push(record);
    }

    /// Load, append one record and write back
    pub fn append(path: &Path, record: SessionRecord) -> Result<Self, SessionError> {
        let mut keeper = Self::load(path)?;
        keeper.push(record);
        keeper.save(path)?;
        Ok(keeper)
    }

    pub fn sessions(&self) -> &[SessionRecord] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Highest level reached over all stored runs
    pub fn best_level(&self) -> Option<u32> {
        self.sessions.iter().map(|s| s.highest_level).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CharacterDefinition;
    use crate::progression::{ProgressionLevel, ProgressionTable};
    use tempfile::TempDir;

    fn hero() -> CharacterStats {
        let mut definition = CharacterDefinition::new("hero");
        definition.is_hero = true;
        definition.levels = ProgressionTable::new(vec![
            ProgressionLevel {
                max_health: 100,
                required_xp: 50,
                ..Default::default()
            },
            ProgressionLevel {
                max_health: 120,
                required_xp: 50,
                ..Default::default()
            },
        ]);
        let mut stats = CharacterStats::from_definition(&definition);
        stats.initialize();
        stats
    }

    #[test]
    fn test_finish_reads_hero_progress() {
        let mut stats = hero();
        stats.give_xp(75);

        let mut tracker = SessionTracker::new();
        tracker.record_wave();
        tracker.record_wave();
        for _ in 0..9 {
            tracker.record_mob_kill();
        }

        let record = tracker.finish("2026-10-19", EndGameState::Loss, &stats);
        assert_eq!(record.highest_level, 2);
        assert_eq!(record.experience_gained, 75);
        assert_eq!(record.waves_completed, 2);
        assert_eq!(record.mobs_killed, 9);
        assert_eq!(record.outcome, EndGameState::Loss);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let keeper = SessionKeeper::load(&dir.path().join("sessions.json")).unwrap();
        assert!(keeper.is_empty());
        assert_eq!(keeper.best_level(), None);
    }

    #[test]
    fn test_append_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("saves").join("sessions.json");
        let stats = hero();

        let first = SessionTracker::new().finish("2026-10-18", EndGameState::Win, &stats);
        let second = SessionTracker::new().finish("2026-10-19", EndGameState::Loss, &stats);
        SessionKeeper::append(&path, first.clone()).unwrap();
        SessionKeeper::append(&path, second.clone()).unwrap();

        let keeper = SessionKeeper::load(&path).unwrap();
        assert_eq!(keeper.sessions(), &[first, second]);
        assert_eq!(keeper.best_level(), Some(1));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sessions.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(SessionKeeper::load(&path), Err(SessionError::Json(_))));
    }
}
