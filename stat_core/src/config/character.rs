//! Character definitions - the authored template for a character type

use super::{load_toml, parse_toml, ConfigError};
use crate::progression::ProgressionTable;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Template a character's runtime stats are created from
///
/// A definition is never mutated at runtime; every character gets its own
/// `CharacterStats` built from a copy of these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterDefinition {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Heroes are levelled to the first table row when initialized
    #[serde(default)]
    pub is_hero: bool,

    #[serde(default)]
    pub max_health: i32,
    #[serde(default)]
    pub current_health: i32,
    #[serde(default)]
    pub max_mana: i32,
    #[serde(default)]
    pub current_mana: i32,
    #[serde(default)]
    pub max_wealth: i32,
    #[serde(default)]
    pub current_wealth: i32,
    #[serde(default)]
    pub base_damage: i32,
    #[serde(default)]
    pub base_resistance: f32,
    #[serde(default)]
    pub max_encumbrance: f32,

    #[serde(default)]
    pub levels: ProgressionTable,
}

impl CharacterDefinition {
    /// An empty definition with no stats and no progression
    pub fn new(id: impl Into<String>) -> Self {
        CharacterDefinition {
            id: id.into(),
            name: String::new(),
            is_hero: false,
            max_health: 0,
            current_health: 0,
            max_mana: 0,
            current_mana: 0,
            max_wealth: 0,
            current_wealth: 0,
            base_damage: 0,
            base_resistance: 0.0,
            max_encumbrance: 0.0,
            levels: ProgressionTable::default(),
        }
    }

    /// Load a definition from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let definition: CharacterDefinition = load_toml(path)?;
        definition.validate()?;
        Ok(definition)
    }

    /// Parse a definition from TOML text
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let definition: CharacterDefinition = parse_toml(toml)?;
        definition.validate()?;
        Ok(definition)
    }

    /// Check resource pairs and the progression table
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pairs = [
            ("health", self.current_health, self.max_health),
            ("mana", self.current_mana, self.max_mana),
            ("wealth", self.current_wealth, self.max_wealth),
        ];
        for (resource, current, max) in pairs {
            if current < 0 || current > max {
                return Err(ConfigError::ValidationError(format!(
                    "'{}': current {} {} outside 0..={}",
                    self.id, resource, current, max
                )));
            }
        }
        if self.is_hero && self.levels.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "hero '{}' has no progression levels",
                self.id
            )));
        }
        self.levels
            .validate()
            .map_err(|e| ConfigError::ValidationError(format!("'{}': {}", self.id, e)))
    }
}

/// All character definitions, keyed by id
#[derive(Debug, Default, Clone)]
pub struct CharacterRegistry {
    definitions: HashMap<String, CharacterDefinition>,
}

impl CharacterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.toml` definition in a directory (recursively)
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        registry.load_dir(dir)?;
        Ok(registry)
    }

    fn load_dir(&mut self, dir: &Path) -> Result<(), ConfigError> {
        if !dir.exists() {
            return Ok(());
        }

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                self.load_dir(&path)?;
            } else if path.extension().is_some_and(|ext| ext == "toml") {
                let definition = CharacterDefinition::load_from_path(&path)?;
                self.register(definition)?;
            }
        }
        Ok(())
    }

    /// Add a definition, rejecting duplicate ids
    pub fn register(&mut self, definition: CharacterDefinition) -> Result<(), ConfigError> {
        if self.definitions.contains_key(&definition.id) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate character id '{}'",
                definition.id
            )));
        }
        self.definitions.insert(definition.id.clone(), definition);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&CharacterDefinition> {
        self.definitions.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.definitions.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    const HERO: &str = r#"
id = "hero"
name = "Hero"
is_hero = true

[[levels]]
max_health = 100
max_mana = 50
max_wealth = 500
base_damage = 10
base_resistance = 2.0
max_encumbrance = 30.0
required_xp = 0

[[levels]]
max_health = 125
max_mana = 60
max_wealth = 750
base_damage = 14
base_resistance = 3.0
max_encumbrance = 35.0
required_xp = 100
"#;

    #[test]
    fn test_parse_hero() {
        let hero = CharacterDefinition::from_toml_str(HERO).unwrap();
        assert!(hero.is_hero);
        assert_eq!(hero.levels.len(), 2);
        assert_eq!(hero.max_health, 0);
    }

    #[test]
    fn test_hero_without_levels_is_invalid() {
        let result = CharacterDefinition::from_toml_str("id = \"hero\"\nis_hero = true\n");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_current_above_max_is_invalid() {
        let result = CharacterDefinition::from_toml_str(
            "id = \"goblin\"\nmax_health = 10\ncurrent_health = 20\n",
        );
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_registry_load() {
        let dir = TempDir::new().unwrap();
        let mut file = std::fs::File::create(dir.path().join("hero.toml")).unwrap();
        file.write_all(HERO.as_bytes()).unwrap();
        let mut file = std::fs::File::create(dir.path().join("goblin.toml")).unwrap();
        file.write_all(b"id = \"goblin\"\nmax_health = 30\ncurrent_health = 30\nbase_damage = 4\n")
            .unwrap();

        let registry = CharacterRegistry::load(dir.path()).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("hero"));
        assert_eq!(registry.get("goblin").unwrap().base_damage, 4);
    }

    #[test]
    fn test_registry_rejects_duplicates() {
        let mut registry = CharacterRegistry::new();
        registry.register(CharacterDefinition::new("goblin")).unwrap();
        assert!(registry.register(CharacterDefinition::new("goblin")).is_err());
    }
}
