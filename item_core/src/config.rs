use crate::types::{ArmorSlot, ItemType};
use serde::Deserialize;

/// A catalog file: any number of `[[items]]` tables
#[derive(Debug, Deserialize)]
pub struct CatalogFileConfig {
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

/// Authored configuration for a single catalog entry
#[derive(Debug, Clone, Deserialize)]
pub struct ItemConfig {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default)]
    pub armor_slot: Option<ArmorSlot>,
    #[serde(default)]
    pub amount: i32,
    #[serde(default)]
    pub weight: f32,
    #[serde(default)]
    pub stackable: bool,
    #[serde(default)]
    pub indestructible: bool,
    #[serde(default = "default_storable")]
    pub storable: bool,
    #[serde(default)]
    pub icon: String,
}

fn default_storable() -> bool {
    true
}
