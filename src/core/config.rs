//! Seed options.
//!
//! `LogicConfig` is resolved before generation starts and only read
//! afterwards. It deserializes from the option names the game uses, and
//! games or tests can also assemble one with the `with_*` builders:
//!
//! ```
//! use kingdom_logic::core::LogicConfig;
//! use kingdom_logic::catalog::Kingdom;
//!
//! let config = LogicConfig::new()
//!     .with_max_kingdoms(3)
//!     .with_kingdom_order()
//!     .excluding_kingdom(Kingdom::EmeraldLakeside);
//!
//! assert!(config.validate().is_ok());
//! assert!(config.ordering_enforced());
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::catalog::{ClassName, Kingdom};

use super::error::GenerationError;

/// What unlocks upgrades in shops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeSanity {
    /// Every upgrade is always available.
    #[default]
    None,
    /// One item per gem colour.
    Simple,
    /// One item per gem colour and upgrade slot.
    Full,
}

/// How the top shelf of the shop behaves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PotionSanity {
    #[default]
    None,
    Locked,
    Roulette,
}

/// Whether and how shops carry checks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShopSanity {
    #[default]
    None,
    /// One set of shop checks shared by every kingdom.
    Global,
    /// Every kingdom has its own shop checks.
    Regional,
}

/// What finishes the seed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalCondition {
    /// Defeat the final boss with a number of distinct classes.
    #[default]
    Shira,
}

impl GoalCondition {
    /// Does this goal need a victory location for every playable class?
    #[must_use]
    pub fn requires_class_victories(self) -> bool {
        matches!(self, GoalCondition::Shira)
    }
}

/// Complete seed configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogicConfig {
    /// Kingdoms must be found as items before they can be visited.
    pub kingdom_sanity: bool,

    /// Kingdoms visited before heading to the keep (1-5).
    pub max_kingdoms_per_run: u8,

    /// Shared items raise how many regions a run may enter.
    pub progressive_regions: bool,

    /// Optional kingdoms left out of the seed entirely.
    pub excluded_kingdoms: BTreeSet<Kingdom>,

    /// With kingdom sanity, also require a held kingdom from every earlier
    /// route slot.
    pub kingdom_sanity_kingdom_order: bool,

    /// Pre-filled route slots (0 = let the solver choose).
    pub kingdom_order: BTreeMap<Kingdom, i32>,

    /// Classes must be found before they can be played.
    pub class_sanity: bool,

    /// Classes that can never be played.
    pub exclude_class: BTreeSet<ClassName>,

    /// Classes with their own checks in every area.
    pub checks_per_class: BTreeSet<ClassName>,

    pub shuffle_item_sets: bool,

    /// Every chest item slot is a check.
    pub checks_per_item_in_chest: bool,

    pub upgrade_sanity: UpgradeSanity,

    pub potion_sanity: PotionSanity,

    pub goal_condition: GoalCondition,

    /// Distinct classes that must defeat the final boss (1-10).
    pub shira_defeats: u8,

    pub shop_sanity: ShopSanity,
}

impl Default for LogicConfig {
    fn default() -> Self {
        Self {
            kingdom_sanity: true,
            max_kingdoms_per_run: 3,
            progressive_regions: false,
            excluded_kingdoms: BTreeSet::new(),
            kingdom_sanity_kingdom_order: false,
            kingdom_order: Kingdom::OPTIONAL.iter().map(|k| (*k, 0)).collect(),
            class_sanity: false,
            exclude_class: BTreeSet::new(),
            checks_per_class: BTreeSet::new(),
            shuffle_item_sets: false,
            checks_per_item_in_chest: false,
            upgrade_sanity: UpgradeSanity::None,
            potion_sanity: PotionSanity::None,
            goal_condition: GoalCondition::Shira,
            shira_defeats: 1,
            shop_sanity: ShopSanity::None,
        }
    }
}

impl LogicConfig {
    /// Create a configuration with the game's default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, GenerationError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Set the number of kingdoms per run.
    #[must_use]
    pub fn with_max_kingdoms(mut self, max: u8) -> Self {
        self.max_kingdoms_per_run = max;
        self
    }

    /// Toggle kingdom sanity.
    #[must_use]
    pub fn with_kingdom_sanity(mut self, enabled: bool) -> Self {
        self.kingdom_sanity = enabled;
        self
    }

    /// Enforce route order on top of kingdom sanity.
    #[must_use]
    pub fn with_kingdom_order(mut self) -> Self {
        self.kingdom_sanity_kingdom_order = true;
        self
    }

    /// Enable progressive regions.
    #[must_use]
    pub fn with_progressive_regions(mut self) -> Self {
        self.progressive_regions = true;
        self
    }

    /// Pin an optional kingdom to a route slot.
    #[must_use]
    pub fn with_order(mut self, kingdom: Kingdom, slot: i32) -> Self {
        self.kingdom_order.insert(kingdom, slot);
        self
    }

    /// Exclude an optional kingdom.
    #[must_use]
    pub fn excluding_kingdom(mut self, kingdom: Kingdom) -> Self {
        self.excluded_kingdoms.insert(kingdom);
        self
    }

    /// Enable class sanity.
    #[must_use]
    pub fn with_class_sanity(mut self) -> Self {
        self.class_sanity = true;
        self
    }

    /// Exclude a class from play.
    #[must_use]
    pub fn excluding_class(mut self, class: ClassName) -> Self {
        self.exclude_class.insert(class);
        self
    }

    /// Give a class its own checks.
    #[must_use]
    pub fn with_class_checks(mut self, class: ClassName) -> Self {
        self.checks_per_class.insert(class);
        self
    }

    /// Set the number of distinct class victories required.
    #[must_use]
    pub fn with_shira_defeats(mut self, defeats: u8) -> Self {
        self.shira_defeats = defeats;
        self
    }

    /// Set shop sanity.
    #[must_use]
    pub fn with_shop_sanity(mut self, shops: ShopSanity) -> Self {
        self.shop_sanity = shops;
        self
    }

    /// Make every chest item slot a check.
    #[must_use]
    pub fn with_chest_checks(mut self) -> Self {
        self.checks_per_item_in_chest = true;
        self
    }

    /// Are optional kingdoms gated behind their own item?
    #[must_use]
    pub fn item_gated(&self) -> bool {
        self.kingdom_sanity
    }

    /// Is the route order enforced through kingdom items?
    #[must_use]
    pub fn ordering_enforced(&self) -> bool {
        self.kingdom_sanity && self.kingdom_sanity_kingdom_order
    }

    /// Does generation need a solved route order?
    #[must_use]
    pub fn needs_order(&self) -> bool {
        (self.progressive_regions && !self.kingdom_sanity) || self.ordering_enforced()
    }

    /// Is a kingdom part of this seed?
    #[must_use]
    pub fn is_kingdom_included(&self, kingdom: Kingdom) -> bool {
        !self.excluded_kingdoms.contains(&kingdom)
    }

    /// Is a class playable in this seed?
    #[must_use]
    pub fn is_class_playable(&self, class: ClassName) -> bool {
        !self.exclude_class.contains(&class)
    }

    /// Playable classes in catalog order.
    pub fn playable_classes(&self) -> impl Iterator<Item = ClassName> + '_ {
        ClassName::iter().filter(|c| self.is_class_playable(*c))
    }

    /// Classes with their own checks, skipping excluded ones.
    pub fn checked_classes(&self) -> impl Iterator<Item = ClassName> + '_ {
        self.checks_per_class
            .iter()
            .copied()
            .filter(|c| self.is_class_playable(*c))
    }

    /// Classes with a sub-region in the terminal kingdom.
    #[must_use]
    pub fn pinnacle_classes(&self) -> Vec<ClassName> {
        if self.goal_condition.requires_class_victories() {
            self.playable_classes().collect()
        } else {
            self.checked_classes().collect()
        }
    }

    /// Check option ranges and cross-option consistency.
    pub fn validate(&self) -> Result<(), GenerationError> {
        check_range("max_kingdoms_per_run", self.max_kingdoms_per_run.into(), 1, 5)?;
        check_range("shira_defeats", self.shira_defeats.into(), 1, ClassName::COUNT as i64)?;

        for kingdom in self.excluded_kingdoms.iter().chain(self.kingdom_order.keys()) {
            if !kingdom.is_optional() {
                return Err(GenerationError::FixedKingdom { kingdom: *kingdom });
            }
        }
        for value in self.kingdom_order.values() {
            // -1 is the solver's own "excluded" marker; anything else outside
            // the option range is a typo in the options.
            check_range("kingdom_order", (*value).into(), -1, 5)?;
        }

        let shared: Vec<ClassName> = self
            .checks_per_class
            .intersection(&self.exclude_class)
            .copied()
            .collect();
        if !shared.is_empty() {
            return Err(GenerationError::ExcludedClassHasChecks { classes: shared });
        }

        let available = self.playable_classes().count();
        if available == 0 {
            return Err(GenerationError::AllClassesExcluded);
        }

        if self.goal_condition == GoalCondition::Shira && usize::from(self.shira_defeats) > available {
            return Err(GenerationError::TooManyDefeatsRequired {
                required: self.shira_defeats,
                available,
            });
        }

        Ok(())
    }
}

fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<(), GenerationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(GenerationError::RangeViolation {
            field,
            min,
            max,
            value,
        })
    }
}
