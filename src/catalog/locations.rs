//! Location catalog: every check a seed can contain.
//!
//! Location names are derived from the area they belong to, so the builder
//! and the catalog share the same naming functions. Ids are sequential from
//! 1 in a fixed order.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use super::names::{ClassName, Kingdom};

/// Name of the always-open area every run starts in.
pub const OUTSKIRTS: &str = "Kingdom Outskirts";

/// Event location granting the victory token.
pub const VICTORY_LOCATION: &str = "Victory";

const OUTSKIRTS_CHECKS: [&str; 5] = [
    "Kingdom Outskirts Battle 1",
    "Kingdom Outskirts Chest 1",
    "Kingdom Outskirts Battle 2",
    "Kingdom Outskirts Chest 2",
    "Kingdom Outskirts Battle 3",
];

const OUTSKIRTS_CHESTS: [&str; 2] = ["Kingdom Outskirts Chest 1", "Kingdom Outskirts Chest 2"];

const KINGDOM_CHECKS: [&str; 5] = ["Battle 1", "Battle 2", "Battle 3", "Chest", "Boss"];

const KEEP_CHECKS: [&str; 4] = ["Battle 1", "Battle 2", "Battle 3", "Chest"];

const CHEST_SLOTS: [&str; 5] = ["Top Left", "Bottom Left", "Middle", "Top Right", "Bottom Right"];

const SHOP_SLOTS: [&str; 9] = [
    "Full Heal Potion Slot",
    "Level Up Slot",
    "Potion 1 Slot",
    "Potion 2 Slot",
    "Potion 3 Slot",
    "Primary Upgrade Slot",
    "Secondary Upgrade Slot",
    "Special Upgrade Slot",
    "Defensive Upgrade Slot",
];

/// A place checks hang off: the outskirts or a kingdom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Area {
    Outskirts,
    Kingdom(Kingdom),
}

impl Area {
    /// Every area in catalog order.
    pub fn all() -> impl Iterator<Item = Area> {
        std::iter::once(Area::Outskirts).chain(Kingdom::iter().map(Area::Kingdom))
    }

    /// Region name of this area.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Area::Outskirts => OUTSKIRTS,
            Area::Kingdom(kingdom) => kingdom.name(),
        }
    }

    /// Does this area hold a chest whose items can be checks?
    #[must_use]
    pub fn has_chest(self) -> bool {
        self != Area::Kingdom(Kingdom::MoonlitPinnacle)
    }

    /// Does this area have its own shop?
    #[must_use]
    pub fn has_shop(self) -> bool {
        matches!(self, Area::Kingdom(k) if k != Kingdom::MoonlitPinnacle)
    }
}

/// Checks any class can obtain in an area.
#[must_use]
pub fn area_checks(area: Area) -> Vec<String> {
    match area {
        Area::Outskirts => OUTSKIRTS_CHECKS.iter().map(|c| (*c).to_string()).collect(),
        Area::Kingdom(Kingdom::PaleKeep) => prefixed(Kingdom::PaleKeep.name(), &KEEP_CHECKS),
        Area::Kingdom(Kingdom::MoonlitPinnacle) => vec!["Shira".to_string()],
        Area::Kingdom(kingdom) => prefixed(kingdom.name(), &KINGDOM_CHECKS),
    }
}

/// Checks tied to finishing an area as a specific class.
#[must_use]
pub fn class_checks(area: Area, class: ClassName) -> Vec<String> {
    area_checks(area)
        .into_iter()
        .map(|check| format!("{check} - {}", class.name()))
        .collect()
}

/// The location holding a class's victory token.
#[must_use]
pub fn class_victory_location(class: ClassName) -> String {
    format!("Shira - {}", class.name())
}

/// One check per item slot of every chest in an area.
#[must_use]
pub fn chest_slot_checks(area: Area) -> Vec<String> {
    let chests: Vec<String> = match area {
        Area::Outskirts => OUTSKIRTS_CHESTS.iter().map(|c| (*c).to_string()).collect(),
        _ if area.has_chest() => vec![format!("{} Chest", area.name())],
        _ => Vec::new(),
    };
    chests
        .iter()
        .flat_map(|chest| CHEST_SLOTS.iter().map(move |slot| format!("{chest} {slot}")))
        .collect()
}

/// Shop checks shared by every kingdom.
#[must_use]
pub fn global_shop_checks() -> Vec<String> {
    SHOP_SLOTS.iter().map(|s| (*s).to_string()).collect()
}

/// Shop checks of one kingdom.
#[must_use]
pub fn regional_shop_checks(kingdom: Kingdom) -> Vec<String> {
    if Area::Kingdom(kingdom).has_shop() {
        prefixed(&format!("{} Shop", kingdom.name()), &SHOP_SLOTS)
    } else {
        Vec::new()
    }
}

fn prefixed(prefix: &str, names: &[&str]) -> Vec<String> {
    names.iter().map(|name| format!("{prefix} {name}")).collect()
}

/// Numeric location identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LocationId(pub u32);

impl LocationId {
    /// Create a new location ID.
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

/// Name → id table for every check.
#[derive(Clone, Debug)]
pub struct LocationCatalog {
    names: Vec<String>,
    by_name: FxHashMap<String, LocationId>,
}

impl Default for LocationCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationCatalog {
    /// Build the full catalog.
    #[must_use]
    pub fn new() -> Self {
        let mut catalog = Self {
            names: Vec::new(),
            by_name: FxHashMap::default(),
        };

        for area in Area::all() {
            catalog.register_all(area_checks(area));
        }
        for area in Area::all() {
            catalog.register_all(chest_slot_checks(area));
        }
        for class in ClassName::iter() {
            for area in Area::all() {
                catalog.register_all(class_checks(area, class));
            }
        }
        catalog.register_all(global_shop_checks());
        for kingdom in Kingdom::iter() {
            catalog.register_all(regional_shop_checks(kingdom));
        }

        catalog
    }

    fn register_all(&mut self, names: Vec<String>) {
        for name in names {
            if self.by_name.contains_key(&name) {
                panic!("Location {name:?} already registered");
            }
            let id = LocationId::new(self.names.len() as u32 + 1);
            self.by_name.insert(name.clone(), id);
            self.names.push(name);
        }
    }

    /// Look up a location id by name. Events have no id.
    #[must_use]
    pub fn id(&self, name: &str) -> Option<LocationId> {
        self.by_name.get(name).copied()
    }

    /// Name of a location id.
    #[must_use]
    pub fn name(&self, id: LocationId) -> Option<&str> {
        let index = (id.raw() as usize).checked_sub(1)?;
        self.names.get(index).map(String::as_str)
    }

    /// Number of catalog locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_checks() {
        assert_eq!(area_checks(Area::Outskirts).len(), 5);
        assert_eq!(
            area_checks(Area::Kingdom(Kingdom::RedDarkhouse)),
            vec![
                "Red Darkhouse Battle 1",
                "Red Darkhouse Battle 2",
                "Red Darkhouse Battle 3",
                "Red Darkhouse Chest",
                "Red Darkhouse Boss",
            ]
        );
        assert_eq!(area_checks(Area::Kingdom(Kingdom::PaleKeep)).len(), 4);
        assert_eq!(area_checks(Area::Kingdom(Kingdom::MoonlitPinnacle)), vec!["Shira"]);
    }

    #[test]
    fn test_class_checks() {
        let checks = class_checks(Area::Kingdom(Kingdom::MoonlitPinnacle), ClassName::Wizard);
        assert_eq!(checks, vec![class_victory_location(ClassName::Wizard)]);
        assert_eq!(checks[0], "Shira - Wizard");
    }

    #[test]
    fn test_chest_and_shop_checks() {
        assert_eq!(chest_slot_checks(Area::Outskirts).len(), 10);
        assert_eq!(
            chest_slot_checks(Area::Kingdom(Kingdom::PaleKeep))[0],
            "The Pale Keep Chest Top Left"
        );
        assert!(chest_slot_checks(Area::Kingdom(Kingdom::MoonlitPinnacle)).is_empty());
        assert_eq!(
            regional_shop_checks(Kingdom::ScholarsNest)[1],
            "Scholar's Nest Shop Level Up Slot"
        );
        assert!(regional_shop_checks(Kingdom::MoonlitPinnacle).is_empty());
    }

    #[test]
    fn test_catalog_ids() {
        let catalog = LocationCatalog::new();

        assert_eq!(catalog.id("Kingdom Outskirts Battle 1"), Some(LocationId::new(1)));
        assert_eq!(catalog.id("Scholar's Nest Battle 1"), Some(LocationId::new(6)));
        assert_eq!(catalog.id("The Pale Keep Battle 1"), Some(LocationId::new(31)));
        assert_eq!(catalog.id("Shira"), Some(LocationId::new(35)));
        assert_eq!(catalog.id("Kingdom Outskirts Chest 1 Top Left"), Some(LocationId::new(36)));
        assert_eq!(
            catalog.id("Kingdom Outskirts Battle 1 - Wizard"),
            Some(LocationId::new(76))
        );
        assert_eq!(catalog.id("Shira - Ancient"), Some(LocationId::new(425)));
        assert_eq!(catalog.id("Full Heal Potion Slot"), Some(LocationId::new(426)));
        assert_eq!(catalog.len(), 425 + 9 + 6 * 9);
        assert_eq!(catalog.name(LocationId::new(35)), Some("Shira"));
        assert!(catalog.id(VICTORY_LOCATION).is_none());
    }
}
