//! End-to-end generation tests.

use kingdom_logic::catalog::{ClassName, Kingdom, GOLD, PROGRESSIVE_REGION};
use kingdom_logic::core::{GenerationError, LogicConfig, ShopSanity};
use kingdom_logic::logic::Collection;
use kingdom_logic::world::Generation;
use proptest::prelude::*;

/// Ordered kingdom sanity: route solved, pool fills every check, seed
/// beatable with the full pool.
#[test]
fn test_ordered_generation() {
    let config = LogicConfig::new()
        .with_max_kingdoms(3)
        .with_kingdom_order()
        .with_progressive_regions()
        .excluding_kingdom(Kingdom::ChurchmouseStreets);

    let generation = Generation::run(config, 77).unwrap();

    assert!(generation.order.is_excluded(Kingdom::ChurchmouseStreets));
    assert!(generation.order.occupancy(3).iter().all(|n| *n >= 1));
    assert_eq!(generation.pool.count(PROGRESSIVE_REGION), 5);
    assert_eq!(generation.pool.len(), generation.graph.unfilled_check_count());
    assert!(generation.is_beatable_with_full_pool());
}

/// Same options and seed, same seed contents.
#[test]
fn test_generation_is_deterministic() {
    let config = LogicConfig::new()
        .with_kingdom_order()
        .with_class_sanity()
        .with_class_checks(ClassName::Spellsword);

    let first = Generation::run(config.clone(), 2024).unwrap();
    let second = Generation::run(config, 2024).unwrap();

    assert_eq!(first.order, second.order);
    assert_eq!(first.starting_class, second.starting_class);
    assert_eq!(first.pool, second.pool);
    assert_eq!(first.slot_data(), second.slot_data());
}

/// The starting class is playable, precollected and kept out of the pool.
#[test]
fn test_starting_class() {
    let config = LogicConfig::new()
        .with_class_sanity()
        .excluding_class(ClassName::Wizard)
        .excluding_class(ClassName::Assassin);

    for seed in 0..20 {
        let generation = Generation::run(config.clone(), seed).unwrap();
        let class = generation.starting_class.unwrap();

        assert!(config.is_class_playable(class));
        assert!(generation.precollected().has(class.name()));
        assert_eq!(generation.pool.count(class.name()), 0);
        assert!(generation.is_beatable_with_full_pool());
    }
}

/// Option problems surface before anything is built.
#[test]
fn test_infeasible_options() {
    let config = LogicConfig::new()
        .with_max_kingdoms(4)
        .with_kingdom_order()
        .excluding_kingdom(Kingdom::ScholarsNest)
        .excluding_kingdom(Kingdom::KingsArsenal);
    assert!(matches!(
        Generation::run(config, 1),
        Err(GenerationError::NotEnoughKingdoms { valid: 3, needed: 4, .. })
    ));

    let config = LogicConfig::new()
        .with_max_kingdoms(2)
        .with_kingdom_order()
        .with_order(Kingdom::RedDarkhouse, 3);
    assert!(matches!(
        Generation::run(config, 1),
        Err(GenerationError::OrderExceedsRun { kingdom: Kingdom::RedDarkhouse, .. })
    ));
}

/// Options parsed from JSON drive the whole pipeline.
#[test]
fn test_generation_from_json() {
    let config = LogicConfig::from_json(
        r#"{
            "kingdom_sanity": true,
            "kingdom_sanity_kingdom_order": true,
            "max_kingdoms_per_run": 2,
            "kingdom_order": {"Red Darkhouse": 1},
            "checks_per_item_in_chest": true,
            "shop_sanity": "global",
            "shira_defeats": 2
        }"#,
    )
    .unwrap();
    assert_eq!(config.shop_sanity, ShopSanity::Global);

    let generation = Generation::run(config, 11).unwrap();

    assert_eq!(generation.order.slot(Kingdom::RedDarkhouse), Some(1));
    assert!(generation.graph.location("Primary Upgrade Slot").is_some());
    assert!(generation.pool.count(GOLD) > 0);
    assert!(generation.is_beatable_with_full_pool());

    let json = generation.slot_data().to_json().unwrap();
    assert!(json.contains(r#""Red Darkhouse":1"#));
}

proptest! {
    /// Any option set that generates is winnable once the whole pool is found.
    #[test]
    fn test_accepted_options_are_beatable(
        max in 1u8..=5,
        mask in 0u8..32,
        kingdom_sanity in any::<bool>(),
        ordered in any::<bool>(),
        progressive in any::<bool>(),
        class_sanity in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let mut config = LogicConfig::new()
            .with_max_kingdoms(max)
            .with_kingdom_sanity(kingdom_sanity);
        if ordered {
            config = config.with_kingdom_order();
        }
        if progressive {
            config = config.with_progressive_regions();
        }
        if class_sanity {
            config = config.with_class_sanity();
        }
        for (index, kingdom) in Kingdom::OPTIONAL.iter().enumerate() {
            if mask & (1 << index) != 0 {
                config = config.excluding_kingdom(*kingdom);
            }
        }

        if let Ok(generation) = Generation::run(config, seed) {
            prop_assert!(generation.is_beatable_with_full_pool());
        }
    }
}
