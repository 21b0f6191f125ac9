//! Item pool.
//!
//! Holds the items the options shuffle into the seed, padded with filler so
//! that every unfilled check receives exactly one item.

use log::{info, warn};

use crate::catalog::items::{specific_upgrade_names, ITEMSET_NAMES, POTION_NAMES, UPGRADE_NAMES};
use crate::catalog::{
    ClassName, ItemCatalog, ItemDefinition, Kingdom, GOLD, PROGRESSIVE_REGION, TREASURESPHERE,
};
use crate::core::{GenerationError, LogicConfig, PotionSanity, UpgradeSanity};

/// Treasurespheres added when every chest item slot is a check.
const TREASURESPHERES_PER_SEED: usize = 6;

/// The items shuffled into one seed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemPool {
    items: Vec<ItemDefinition>,
}

impl ItemPool {
    /// Create the pool for a configuration.
    ///
    /// `unfilled_checks` is the number of checks without a locked item;
    /// the pool is padded with filler up to that size. The starting class
    /// is precollected and never shuffled.
    pub fn create(
        config: &LogicConfig,
        starting_class: Option<ClassName>,
        unfilled_checks: usize,
        catalog: &ItemCatalog,
    ) -> Result<Self, GenerationError> {
        let mut pool = Self::default();

        if config.kingdom_sanity {
            for kingdom in Kingdom::OPTIONAL {
                if config.is_kingdom_included(kingdom) {
                    pool.push(catalog, kingdom.name())?;
                }
            }
            pool.push(catalog, Kingdom::PaleKeep.name())?;
            pool.push(catalog, Kingdom::MoonlitPinnacle.name())?;
        }

        if config.progressive_regions {
            for _ in 0..usize::from(config.max_kingdoms_per_run) + 2 {
                pool.push(catalog, PROGRESSIVE_REGION)?;
            }
        }

        if config.class_sanity {
            for class in config.playable_classes() {
                if Some(class) != starting_class {
                    pool.push(catalog, class.name())?;
                }
            }
        }

        if config.shuffle_item_sets {
            pool.extend(catalog, ITEMSET_NAMES)?;
        }

        if config.checks_per_item_in_chest {
            for _ in 0..TREASURESPHERES_PER_SEED {
                pool.push(catalog, TREASURESPHERE)?;
            }
        }

        match config.upgrade_sanity {
            UpgradeSanity::None => {}
            UpgradeSanity::Simple => pool.extend(catalog, UPGRADE_NAMES)?,
            UpgradeSanity::Full => pool.extend(catalog, specific_upgrade_names())?,
        }

        if config.potion_sanity != PotionSanity::None {
            pool.extend(catalog, POTION_NAMES)?;
        }

        let shuffled = pool.len();
        if shuffled > unfilled_checks {
            warn!("item pool has {shuffled} items for {unfilled_checks} checks");
        }
        for _ in shuffled..unfilled_checks {
            pool.push(catalog, GOLD)?;
        }

        info!(
            "created item pool: {} items, {} filler",
            pool.len(),
            pool.len() - shuffled
        );
        Ok(pool)
    }

    fn push(&mut self, catalog: &ItemCatalog, name: &str) -> Result<(), GenerationError> {
        let item = catalog
            .get_by_name(name)
            .ok_or_else(|| GenerationError::InvalidOptions(format!("unknown item {name:?}")))?;
        self.items.push(item.clone());
        Ok(())
    }

    fn extend<I, S>(&mut self, catalog: &ItemCatalog, names: I) -> Result<(), GenerationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.push(catalog, name.as_ref())?;
        }
        Ok(())
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Copies of an item in the pool.
    #[must_use]
    pub fn count(&self, name: &str) -> usize {
        self.items.iter().filter(|item| item.name == name).count()
    }

    /// Number of progression items.
    #[must_use]
    pub fn progression_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.classification.is_progression())
            .count()
    }

    /// Iterate over the items.
    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pool() {
        let catalog = ItemCatalog::new();
        let config = LogicConfig::new();

        let pool = ItemPool::create(&config, None, 40, &catalog).unwrap();

        // Seven kingdom tokens, everything else is filler.
        assert_eq!(pool.len(), 40);
        assert_eq!(pool.progression_count(), 7);
        assert_eq!(pool.count(GOLD), 33);
        assert_eq!(pool.count(PROGRESSIVE_REGION), 0);
    }

    #[test]
    fn test_excluded_kingdoms_and_progressive() {
        let catalog = ItemCatalog::new();
        let config = LogicConfig::new()
            .with_max_kingdoms(2)
            .with_progressive_regions()
            .excluding_kingdom(Kingdom::ScholarsNest);

        let pool = ItemPool::create(&config, None, 30, &catalog).unwrap();

        assert_eq!(pool.count("Scholar's Nest"), 0);
        assert_eq!(pool.count("The Pale Keep"), 1);
        assert_eq!(pool.count(PROGRESSIVE_REGION), 4);
    }

    #[test]
    fn test_starting_class_not_shuffled() {
        let catalog = ItemCatalog::new();
        let config = LogicConfig::new()
            .with_kingdom_sanity(false)
            .with_class_sanity()
            .excluding_class(ClassName::Ancient);

        let pool = ItemPool::create(&config, Some(ClassName::Druid), 20, &catalog).unwrap();

        assert_eq!(pool.count("Druid"), 0);
        assert_eq!(pool.count("Ancient"), 0);
        assert_eq!(pool.progression_count(), 8);
    }

    #[test]
    fn test_optional_item_groups() {
        let catalog = ItemCatalog::new();
        let mut config = LogicConfig::new().with_kingdom_sanity(false).with_chest_checks();
        config.shuffle_item_sets = true;
        config.upgrade_sanity = UpgradeSanity::Full;
        config.potion_sanity = PotionSanity::Roulette;

        let pool = ItemPool::create(&config, None, 0, &catalog).unwrap();

        assert_eq!(pool.len(), 25 + 6 + 20 + 17);
        assert_eq!(pool.count(TREASURESPHERE), 6);
        assert_eq!(pool.count("Defensive Opal Gem"), 1);
        assert_eq!(pool.count(GOLD), 0);
    }
}
