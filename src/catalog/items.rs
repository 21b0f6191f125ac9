//! Item catalog: every token a player can hold.
//!
//! Ids are assigned sequentially from 1 in a fixed order, so the catalog
//! is the same on every run and matches what the game client expects.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use super::names::{ClassName, Kingdom};

/// Shared token that raises how many kingdoms a run may enter.
pub const PROGRESSIVE_REGION: &str = "Progressive Region";

/// Synthetic token held once the goal is complete.
pub const VICTORY: &str = "Victory";

/// Filler item.
pub const GOLD: &str = "Gold";

pub const XP: &str = "XP";
pub const TREASURESPHERE: &str = "Treasuresphere";

pub const ITEMSET_NAMES: [&str; 25] = [
    "Arcane Set",
    "Night Set",
    "Timespace Set",
    "Wind Set",
    "Bloodwolf Set",
    "Assassin Set",
    "Rockdragon Set",
    "Flame Set",
    "Gem Set",
    "Lightning Set",
    "Shrine Set",
    "Lucky Set",
    "Life Set",
    "Poison Set",
    "Depth Set",
    "Darkbite Set",
    "Timegem Set",
    "Youkai Set",
    "Haunted Set",
    "Gladiator Set",
    "Sparkblade Set",
    "Swiftflight Set",
    "Sacredflame Set",
    "Ruins Set",
    "Lakeshrine Set",
];

pub const UPGRADE_NAMES: [&str; 5] = [
    "Emerald Gem",
    "Garnet Gem",
    "Ruby Gem",
    "Sapphire Gem",
    "Opal Gem",
];

const UPGRADE_SLOTS: [&str; 4] = ["Primary", "Secondary", "Special", "Defensive"];

pub const POTION_NAMES: [&str; 17] = [
    "Full Heal Potion",
    "Level Up Potion",
    "Regen Potion",
    "Essence of Spell",
    "Darkness Potion",
    "Quickening Potion",
    "Winged Potion",
    "Essence of Wit",
    "Swifthand Potion",
    "Fire Potion",
    "Strength Potion",
    "Gold Potion",
    "Luck Potion",
    "Essence of Steel",
    "Evasion Potion",
    "Longarm Potion",
    "Vitality Potion",
];

/// Indexed by `ClassName as usize`.
pub const CLASS_VICTORY_NAMES: [&str; ClassName::COUNT] = [
    "Victory - Wizard",
    "Victory - Assassin",
    "Victory - Heavyblade",
    "Victory - Dancer",
    "Victory - Druid",
    "Victory - Spellsword",
    "Victory - Sniper",
    "Victory - Bruiser",
    "Victory - Defender",
    "Victory - Ancient",
];

/// Names of the slot-specific gem upgrades ("Primary Emerald Gem", ...).
pub fn specific_upgrade_names() -> Vec<String> {
    UPGRADE_SLOTS
        .iter()
        .flat_map(|slot| UPGRADE_NAMES.iter().map(move |gem| format!("{slot} {gem}")))
        .collect()
}

/// Numeric item identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    /// Create a new item ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item({})", self.0)
    }
}

/// How much an item matters to logic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemClassification {
    /// Unlocks regions or completes the goal.
    Progression,
    /// Progression that should not be moved around by balancing.
    ProgressionSkipBalancing,
    /// Helps the player but is never required.
    Useful,
    Filler,
}

impl ItemClassification {
    /// Does logic depend on this item?
    #[must_use]
    pub fn is_progression(self) -> bool {
        matches!(self, Self::Progression | Self::ProgressionSkipBalancing)
    }
}

/// Named item groups that predicates can count distinct members of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenGroup {
    /// All seven kingdom tokens.
    Kingdoms,
    Classes,
    Itemsets,
    Upgrades,
    Potions,
    /// One synthetic token per class that finished a run.
    ClassVictories,
}

impl TokenGroup {
    /// Member token names.
    #[must_use]
    pub fn members(self) -> Vec<&'static str> {
        match self {
            TokenGroup::Kingdoms => Kingdom::iter().map(Kingdom::name).collect(),
            TokenGroup::Classes => ClassName::iter().map(ClassName::name).collect(),
            TokenGroup::Itemsets => ITEMSET_NAMES.to_vec(),
            TokenGroup::Upgrades => UPGRADE_NAMES.to_vec(),
            TokenGroup::Potions => POTION_NAMES.to_vec(),
            TokenGroup::ClassVictories => CLASS_VICTORY_NAMES.to_vec(),
        }
    }
}

/// One catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    pub classification: ItemClassification,
}

/// Registry of every item, built once and shared by reference.
///
/// ## Example
///
/// ```
/// use kingdom_logic::catalog::{ItemCatalog, ItemId, PROGRESSIVE_REGION};
///
/// let catalog = ItemCatalog::new();
/// assert_eq!(catalog.id("Scholar's Nest"), Some(ItemId::new(1)));
/// assert!(catalog.get_by_name(PROGRESSIVE_REGION).is_some());
/// ```
#[derive(Clone, Debug)]
pub struct ItemCatalog {
    items: Vec<ItemDefinition>,
    by_name: FxHashMap<String, ItemId>,
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemCatalog {
    /// Build the full catalog.
    #[must_use]
    pub fn new() -> Self {
        let mut catalog = Self {
            items: Vec::new(),
            by_name: FxHashMap::default(),
        };

        for kingdom in Kingdom::iter() {
            catalog.register(kingdom.name(), ItemClassification::Progression);
        }
        for class in ClassName::iter() {
            catalog.register(class.name(), ItemClassification::Progression);
        }
        for name in ITEMSET_NAMES {
            catalog.register(name, ItemClassification::Useful);
        }
        for name in UPGRADE_NAMES {
            catalog.register(name, ItemClassification::Useful);
        }
        for name in specific_upgrade_names() {
            catalog.register(name, ItemClassification::Useful);
        }
        for name in POTION_NAMES {
            catalog.register(name, ItemClassification::Useful);
        }
        for name in CLASS_VICTORY_NAMES {
            catalog.register(name, ItemClassification::Progression);
        }
        catalog.register(PROGRESSIVE_REGION, ItemClassification::ProgressionSkipBalancing);
        catalog.register(XP, ItemClassification::Useful);
        catalog.register(TREASURESPHERE, ItemClassification::Useful);
        catalog.register(GOLD, ItemClassification::Filler);

        catalog
    }

    /// Register an item with the next sequential id.
    ///
    /// Panics if the name is already registered.
    fn register(&mut self, name: impl Into<String>, classification: ItemClassification) {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            panic!("Item {name:?} already registered");
        }
        let id = ItemId::new(self.items.len() as u32 + 1);
        self.by_name.insert(name.clone(), id);
        self.items.push(ItemDefinition {
            id,
            name,
            classification,
        });
    }

    /// Look up an item id by name.
    #[must_use]
    pub fn id(&self, name: &str) -> Option<ItemId> {
        self.by_name.get(name).copied()
    }

    /// Get an item by id.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&ItemDefinition> {
        let index = (id.raw() as usize).checked_sub(1)?;
        self.items.get(index)
    }

    /// Get an item by name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&ItemDefinition> {
        self.id(name).and_then(|id| self.get(id))
    }

    /// Classification of a named item. Unknown names are events, which
    /// always count as progression.
    #[must_use]
    pub fn classification(&self, name: &str) -> ItemClassification {
        self.get_by_name(name)
            .map_or(ItemClassification::Progression, |item| item.classification)
    }

    /// Number of catalog items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over all items in id order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.iter()
    }
}
