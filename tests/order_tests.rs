//! Route order solver integration tests.
//!
//! Property tests cover every combination of run length, exclusions and
//! pre-filled slots; the fixed cases pin down the exact placement rules.

use std::collections::BTreeSet;

use kingdom_logic::catalog::Kingdom;
use kingdom_logic::core::{GenRng, GenerationError};
use kingdom_logic::order::{solve_order, OrderMap};
use proptest::prelude::*;

fn unassigned() -> OrderMap {
    Kingdom::OPTIONAL.iter().map(|k| (*k, 0)).collect()
}

fn excluded_from_mask(mask: u8) -> BTreeSet<Kingdom> {
    Kingdom::OPTIONAL
        .iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, k)| *k)
        .collect()
}

fn prefixes_are_feasible(occupancy: &[usize]) -> bool {
    let mut total = 0;
    for (index, amount) in occupancy.iter().enumerate() {
        total += amount;
        if total < index + 1 {
            return false;
        }
    }
    true
}

proptest! {
    /// Unassigned-only inputs fill every slot and stay balanced.
    #[test]
    fn test_unassigned_inputs_balance(max in 1u8..=5, mask in 0u8..32, seed in any::<u64>()) {
        let excluded = excluded_from_mask(mask);
        let available = 5 - excluded.len();
        let result = solve_order(&unassigned(), max, &excluded, &mut GenRng::new(seed));

        if available < usize::from(max) {
            let is_not_enough = matches!(result, Err(GenerationError::NotEnoughKingdoms { .. }));
            prop_assert!(is_not_enough);
        } else {
            let solved = result.unwrap();
            let occupancy = solved.occupancy(max);

            prop_assert!(occupancy.iter().all(|n| *n >= 1));
            let spread = occupancy.iter().max().unwrap() - occupancy.iter().min().unwrap();
            prop_assert!(spread <= 1);
            prop_assert_eq!(occupancy.iter().sum::<usize>(), available);

            for kingdom in Kingdom::OPTIONAL {
                if excluded.contains(&kingdom) {
                    prop_assert!(solved.is_excluded(kingdom));
                } else {
                    prop_assert!(solved.slot(kingdom).is_some_and(|s| s <= max));
                }
            }
        }
    }

    /// Every accepted map has at least `k` kingdoms in its first `k` slots.
    #[test]
    fn test_accepted_maps_are_prefix_feasible(
        max in 1u8..=5,
        values in proptest::collection::vec(-1i32..=5, 5),
        seed in any::<u64>(),
    ) {
        let order: OrderMap = Kingdom::OPTIONAL.iter().copied().zip(values.iter().copied()).collect();

        if let Ok(solved) = solve_order(&order, max, &BTreeSet::new(), &mut GenRng::new(seed)) {
            prop_assert!(prefixes_are_feasible(&solved.occupancy(max)));

            // Fixed assignments survive untouched.
            for (kingdom, value) in order.iter() {
                if value != 0 {
                    prop_assert_eq!(solved.get(kingdom), Some(value));
                }
            }
        }
    }

    /// The same seed always produces the same order.
    #[test]
    fn test_deterministic(max in 1u8..=5, seed in any::<u64>()) {
        let first = solve_order(&unassigned(), max, &BTreeSet::new(), &mut GenRng::new(seed));
        let second = solve_order(&unassigned(), max, &BTreeSet::new(), &mut GenRng::new(seed));
        prop_assert_eq!(first, second);
    }
}

/// With one kingdom per slot, the random draw decides only who goes where.
#[test]
fn test_seeds_vary_assignment() {
    let orders: BTreeSet<String> = (0..32u64)
        .map(|seed| {
            solve_order(&unassigned(), 5, &BTreeSet::new(), &mut GenRng::new(seed))
                .unwrap()
                .to_string()
        })
        .collect();

    assert!(orders.len() > 1, "different seeds should give different orders");
}

/// Leftover kingdoms pile onto the latest slots first.
#[test]
fn test_tie_break_prefers_highest_slot() {
    let order = OrderMap::from_iter([
        (Kingdom::ScholarsNest, 1),
        (Kingdom::KingsArsenal, 0),
    ]);

    let solved = solve_order(&order, 2, &BTreeSet::new(), &mut GenRng::new(0)).unwrap();
    assert_eq!(solved.slot(Kingdom::KingsArsenal), Some(2));

    let order = OrderMap::from_iter([
        (Kingdom::ScholarsNest, 1),
        (Kingdom::KingsArsenal, 2),
        (Kingdom::RedDarkhouse, 0),
    ]);
    let solved = solve_order(&order, 2, &BTreeSet::new(), &mut GenRng::new(0)).unwrap();
    assert_eq!(solved.slot(Kingdom::RedDarkhouse), Some(2));
}

/// A fixed slot beyond the run is rejected before anything is placed.
#[test]
fn test_fixed_slot_beyond_run() {
    let mut order = unassigned();
    order.set(Kingdom::EmeraldLakeside, 3);

    let err = solve_order(&order, 2, &BTreeSet::new(), &mut GenRng::new(1)).unwrap_err();
    assert!(err.to_string().contains("Emerald Lakeside has value 3"));
}

/// Errors carry the mapping that caused them.
#[test]
fn test_errors_report_mapping() {
    let order = OrderMap::from_iter([(Kingdom::ScholarsNest, 0), (Kingdom::KingsArsenal, -1)]);

    let err = solve_order(&order, 2, &BTreeSet::new(), &mut GenRng::new(1)).unwrap_err();
    match err {
        GenerationError::NotEnoughKingdoms { order: reported, valid, needed } => {
            assert_eq!(reported, order);
            assert_eq!(valid, 1);
            assert_eq!(needed, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

/// Fixed assignments that leave an early slot empty can not be repaired.
#[test]
fn test_gap_before_fixed_slots() {
    let order = OrderMap::from_iter([
        (Kingdom::ScholarsNest, 3),
        (Kingdom::KingsArsenal, 3),
        (Kingdom::RedDarkhouse, 3),
    ]);

    let err = solve_order(&order, 3, &BTreeSet::new(), &mut GenRng::new(1)).unwrap_err();
    assert!(matches!(err, GenerationError::UnreachableSlot { slot: 1, .. }));
}
