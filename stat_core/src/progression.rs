//! Progression tables - per-level stat snapshots
//!
//! A table is indexed from 0. Reaching table row `i` puts the character at
//! level `i + 1`; level 0 means the character has never been levelled.
//! `required_xp` values are cumulative experience checkpoints, not deltas.

use serde::{Deserialize, Serialize};

/// Stats granted on reaching one level
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProgressionLevel {
    #[serde(default)]
    pub max_health: i32,
    #[serde(default)]
    pub max_mana: i32,
    #[serde(default)]
    pub max_wealth: i32,
    #[serde(default)]
    pub base_damage: i32,
    #[serde(default)]
    pub base_resistance: f32,
    #[serde(default)]
    pub max_encumbrance: f32,
    /// Total experience needed before this row is entered from the previous one
    #[serde(default)]
    pub required_xp: u32,
}

/// Ordered per-level snapshots for one character type
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressionTable {
    levels: Vec<ProgressionLevel>,
}

impl ProgressionTable {
    pub fn new(levels: Vec<ProgressionLevel>) -> Self {
        ProgressionTable { levels }
    }

    /// Get the row for a table index
    pub fn get(&self, index: usize) -> Option<&ProgressionLevel> {
        self.levels.get(index)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn levels(&self) -> &[ProgressionLevel] {
        &self.levels
    }

    /// Highest level reachable with this table
    pub fn max_level(&self) -> u32 {
        self.levels.len() as u32
    }

    /// Check that every row holds usable values
    pub fn validate(&self) -> Result<(), String> {
        for (index, level) in self.levels.iter().enumerate() {
            if level.max_health < 0 || level.max_mana < 0 || level.max_wealth < 0 {
                return Err(format!("level row {} has a negative resource maximum", index));
            }
            if level.base_damage < 0 {
                return Err(format!("level row {} has negative base_damage", index));
            }
            if level.max_encumbrance < 0.0 || !level.max_encumbrance.is_finite() {
                return Err(format!("level row {} has invalid max_encumbrance", index));
            }
        }
        Ok(())
    }
}

impl From<Vec<ProgressionLevel>> for ProgressionTable {
    fn from(levels: Vec<ProgressionLevel>) -> Self {
        ProgressionTable::new(levels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_levels() {
        #[derive(Deserialize)]
        struct Doc {
            levels: ProgressionTable,
        }

        let doc: Doc = toml::from_str(
            r#"
[[levels]]
max_health = 100
max_mana = 50
base_damage = 10
required_xp = 0

[[levels]]
max_health = 120
max_mana = 60
base_damage = 12
base_resistance = 1.5
required_xp = 100
"#,
        )
        .unwrap();

        assert_eq!(doc.levels.len(), 2);
        assert_eq!(doc.levels.max_level(), 2);
        let second = doc.levels.get(1).unwrap();
        assert_eq!(second.required_xp, 100);
        assert!((second.base_resistance - 1.5).abs() < f32::EPSILON);
        assert_eq!(second.max_wealth, 0);
        assert!(doc.levels.get(2).is_none());
    }

    #[test]
    fn test_validate_rejects_negative_maximum() {
        let table = ProgressionTable::new(vec![ProgressionLevel {
            max_health: -1,
            ..Default::default()
        }]);
        assert!(table.validate().is_err());
        assert!(ProgressionTable::default().validate().is_ok());
    }
}
