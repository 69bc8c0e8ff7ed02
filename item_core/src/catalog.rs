use crate::config::CatalogFileConfig;
use crate::item::{ItemCatalogEntry, ItemInstance};
use crate::{CatalogError, ConfigError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Registry of every item kind, loaded from TOML or JSON files
#[derive(Debug, Default, Clone)]
pub struct ItemCatalog {
    entries: HashMap<String, Arc<ItemCatalogEntry>>,
}

impl ItemCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load all catalog files from a directory (recursively)
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let mut catalog = Self::new();
        catalog.load_dir(dir)?;
        log::debug!("Loaded {} item kinds from {:?}", catalog.len(), dir);
        Ok(catalog)
    }

    /// Parse a catalog from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let path = PathBuf::from("<inline>");
        let config: CatalogFileConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            error: e,
            path: path.clone(),
        })?;
        let mut catalog = Self::new();
        catalog.add_file_config(config, &path)?;
        Ok(catalog)
    }

    fn load_dir(&mut self, dir: &Path) -> Result<(), ConfigError> {
        if !dir.exists() {
            return Ok(());
        }

        let entries = std::fs::read_dir(dir).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(dir.to_path_buf()),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| ConfigError::Io {
                error: e,
                path: Some(dir.to_path_buf()),
            })?;
            let path = entry.path();

            if path.is_dir() {
                self.load_dir(&path)?;
            } else if path.extension().is_some_and(|ext| ext == "toml" || ext == "json") {
                self.load_file(&path)?;
            }
        }

        Ok(())
    }

    fn load_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(path.to_path_buf()),
        })?;

        let config: CatalogFileConfig = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| ConfigError::Json {
                error: e,
                path: path.to_path_buf(),
            })?
        } else {
            toml::from_str(&content).map_err(|e| ConfigError::Parse {
                error: e,
                path: path.to_path_buf(),
            })?
        };

        self.add_file_config(config, path)
    }

    fn add_file_config(&mut self, config: CatalogFileConfig, path: &Path) -> Result<(), ConfigError> {
        for item in config.items {
            let entry = ItemCatalogEntry::from_config(item).map_err(|message| ConfigError::Validation {
                message,
                path: path.to_path_buf(),
            })?;
            if self.entries.contains_key(&entry.id) {
                return Err(ConfigError::Validation {
                    message: format!("duplicate item id '{}'", entry.id),
                    path: path.to_path_buf(),
                });
            }
            self.entries.insert(entry.id.clone(), Arc::new(entry));
        }
        Ok(())
    }

    /// Register an entry built in code, replacing any entry with the same id
    pub fn insert(&mut self, entry: ItemCatalogEntry) -> Arc<ItemCatalogEntry> {
        let entry = Arc::new(entry);
        self.entries.insert(entry.id.clone(), Arc::clone(&entry));
        entry
    }

    /// Get an entry by id
    pub fn get(&self, id: &str) -> Option<&Arc<ItemCatalogEntry>> {
        self.entries.get(id)
    }

    /// Check if an entry exists
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// List all item ids
    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Spawn a fresh instance of an entry into the world
    pub fn spawn(&self, id: &str) -> Result<ItemInstance, CatalogError> {
        let entry = self
            .get(id)
            .ok_or_else(|| CatalogError::UnknownItem(id.to_string()))?;
        Ok(ItemInstance::spawn(Arc::clone(entry)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ArmorSlot, ItemType};
    use std::io::Write;
    use tempfile::TempDir;

    fn create_catalog_file(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    const POTIONS: &str = r#"
[[items]]
id = "health_potion"
name = "Health Potion"
type = "health"
amount = 25
weight = 0.5
stackable = true
icon = "icons/health_potion.png"

[[items]]
id = "mana_potion"
type = "mana"
amount = 20
weight = 0.5
stackable = true
"#;

    #[test]
    fn test_load_directory_recursively() {
        let dir = TempDir::new().unwrap();
        create_catalog_file(dir.path(), "potions.toml", POTIONS);
        std::fs::create_dir(dir.path().join("armor")).unwrap();
        create_catalog_file(
            &dir.path().join("armor"),
            "head.toml",
            r#"
[[items]]
id = "leather_cap"
type = "armor"
armor_slot = "head"
amount = 5
weight = 2.0
indestructible = true
"#,
        );

        let catalog = ItemCatalog::load(dir.path()).unwrap();
        assert_eq!(catalog.len(), 3);

        let cap = catalog.get("leather_cap").unwrap();
        assert_eq!(cap.item_type, ItemType::Armor);
        assert_eq!(cap.armor_slot, Some(ArmorSlot::Head));
        assert!(cap.storable);
    }

    #[test]
    fn test_load_json_file() {
        let dir = TempDir::new().unwrap();
        create_catalog_file(
            dir.path(),
            "coins.json",
            r#"{ "items": [ { "id": "gold", "type": "wealth", "amount": 10, "storable": false } ] }"#,
        );

        let catalog = ItemCatalog::load(dir.path()).unwrap();
        let gold = catalog.get("gold").unwrap();
        assert_eq!(gold.item_type, ItemType::Wealth);
        assert!(!gold.storable);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let catalog = ItemCatalog::load(&dir.path().join("nope")).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let dir = TempDir::new().unwrap();
        create_catalog_file(dir.path(), "a.toml", POTIONS);
        create_catalog_file(dir.path(), "b.toml", POTIONS);

        let result = ItemCatalog::load(dir.path());
        assert!(matches!(result, Err(ConfigError::Validation { .. })));
    }

    #[test]
    fn test_parse_error_reports_path() {
        let dir = TempDir::new().unwrap();
        create_catalog_file(dir.path(), "broken.toml", "[[items]]\nid = 3");

        let result = ItemCatalog::load(dir.path());
        match result {
            Err(ConfigError::Parse { path, .. }) => assert!(path.ends_with("broken.toml")),
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_spawn_unknown_item() {
        let catalog = ItemCatalog::from_toml_str(POTIONS).unwrap();
        assert!(matches!(
            catalog.spawn("elixir"),
            Err(CatalogError::UnknownItem(_))
        ));

        let potion = catalog.spawn("health_potion").unwrap();
        assert_eq!(potion.entry().amount, 25);
        assert_eq!(potion.entry().name, "Health Potion");
    }
}
