//! Seed generation pipeline.
//!
//! Validate options → solve route order → pick starting class → build the
//! region graph → create the item pool. Every step either succeeds or
//! aborts the whole generation.

use std::collections::BTreeSet;

use log::info;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::catalog::{ClassName, ItemCatalog, Kingdom};
use crate::core::{
    GenRng, GenerationError, GoalCondition, LogicConfig, PotionSanity, ShopSanity, UpgradeSanity,
};
use crate::graph::{build_graph, Graph};
use crate::logic::Inventory;
use crate::order::{solve_order, OrderMap};

use super::pool::ItemPool;

/// Result of a successful generation.
#[derive(Clone, Debug)]
pub struct Generation {
    pub seed: u64,
    pub config: LogicConfig,
    /// Final route order; excluded kingdoms are marked `-1`.
    pub order: OrderMap,
    /// Class handed out at the start under class sanity.
    pub starting_class: Option<ClassName>,
    pub graph: Graph,
    pub pool: ItemPool,
}

impl Generation {
    /// Run the full pipeline for a configuration and seed.
    ///
    /// ```
    /// use kingdom_logic::core::LogicConfig;
    /// use kingdom_logic::world::Generation;
    ///
    /// let generation = Generation::run(LogicConfig::new(), 1234).unwrap();
    /// assert_eq!(generation.pool.len(), generation.graph.unfilled_check_count());
    /// ```
    pub fn run(config: LogicConfig, seed: u64) -> Result<Self, GenerationError> {
        config.validate()?;
        let rng = GenRng::new(seed);

        let mut order: OrderMap = Kingdom::OPTIONAL
            .iter()
            .map(|k| (*k, config.kingdom_order.get(k).copied().unwrap_or(OrderMap::UNASSIGNED)))
            .collect();

        if config.needs_order() {
            order = solve_order(
                &order,
                config.max_kingdoms_per_run,
                &config.excluded_kingdoms,
                &mut rng.for_context("kingdom_order"),
            )?;
        }
        for kingdom in &config.excluded_kingdoms {
            order.set(*kingdom, OrderMap::EXCLUDED);
        }
        check_unordered_kingdoms(&config, &order)?;

        let starting_class = if config.class_sanity {
            let playable: Vec<ClassName> = config.playable_classes().collect();
            rng.for_context("starting_class").choose(&playable).copied()
        } else {
            None
        };

        let graph = build_graph(&config, &order)?;
        let pool = ItemPool::create(
            &config,
            starting_class,
            graph.unfilled_check_count(),
            &ItemCatalog::new(),
        )?;

        info!(
            "generated seed {seed}: order {order}, starting class {}",
            starting_class.map_or("none", ClassName::name)
        );

        Ok(Self {
            seed,
            config,
            order,
            starting_class,
            graph,
            pool,
        })
    }

    /// Items the player holds before any check.
    #[must_use]
    pub fn precollected(&self) -> Inventory {
        let mut inventory = Inventory::new();
        if let Some(class) = self.starting_class {
            inventory.add(class.name());
        }
        inventory
    }

    /// Can the seed be finished once every pool item is found?
    #[must_use]
    pub fn is_beatable_with_full_pool(&self) -> bool {
        let mut inventory = self.precollected();
        for item in self.pool.iter() {
            inventory.add(item.name.clone());
        }
        self.graph.is_beatable(&inventory)
    }

    /// Options the game client needs to play this seed.
    #[must_use]
    pub fn slot_data(&self) -> SlotData {
        let config = &self.config;
        SlotData {
            kingdom_sanity: config.kingdom_sanity,
            max_kingdoms_per_run: config.max_kingdoms_per_run,
            progressive_regions: config.progressive_regions,
            excluded_kingdoms: config.excluded_kingdoms.clone(),
            kingdom_sanity_kingdom_order: config.kingdom_sanity_kingdom_order,
            kingdom_order: self.order.clone(),
            class_sanity: config.class_sanity,
            checks_per_class: config.checks_per_class.clone(),
            shuffle_item_sets: config.shuffle_item_sets,
            checks_per_item_in_chest: config.checks_per_item_in_chest,
            upgrade_sanity: config.upgrade_sanity,
            potion_sanity: config.potion_sanity,
            goal_condition: config.goal_condition,
            shira_defeats: config.shira_defeats,
            shop_sanity: config.shop_sanity,
        }
    }
}

/// Without a route order the keep asks for `N` distinct kingdom tokens, so
/// the seed needs at least that many kingdoms left after exclusions.
fn check_unordered_kingdoms(config: &LogicConfig, order: &OrderMap) -> Result<(), GenerationError> {
    if !config.item_gated() || config.ordering_enforced() {
        return Ok(());
    }

    let valid = Kingdom::iter()
        .filter(|k| config.is_kingdom_included(*k))
        .count();
    if valid < usize::from(config.max_kingdoms_per_run) {
        return Err(GenerationError::NotEnoughKingdoms {
            order: order.clone(),
            valid,
            needed: config.max_kingdoms_per_run,
        });
    }
    Ok(())
}

/// Seed options exported to the game client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SlotData {
    pub kingdom_sanity: bool,
    pub max_kingdoms_per_run: u8,
    pub progressive_regions: bool,
    pub excluded_kingdoms: BTreeSet<Kingdom>,
    pub kingdom_sanity_kingdom_order: bool,
    pub kingdom_order: OrderMap,
    pub class_sanity: bool,
    pub checks_per_class: BTreeSet<ClassName>,
    pub shuffle_item_sets: bool,
    pub checks_per_item_in_chest: bool,
    pub upgrade_sanity: UpgradeSanity,
    pub potion_sanity: PotionSanity,
    pub goal_condition: GoalCondition,
    pub shira_defeats: u8,
    pub shop_sanity: ShopSanity,
}

impl SlotData {
    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, GenerationError> {
        Ok(serde_json::to_string(self)?)
    }
}
