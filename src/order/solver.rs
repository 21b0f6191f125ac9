//! Route order solver.
//!
//! Completes a partially filled `OrderMap` so that every slot of the run
//! can be entered. Unassigned kingdoms are drawn in random order and each
//! goes to the least occupied slot, preferring later slots on ties; the
//! finished map is then checked so that no prefix of the run has fewer
//! kingdoms than slots.

use std::collections::BTreeSet;

use log::{debug, info};

use crate::catalog::Kingdom;
use crate::core::{GenRng, GenerationError};

use super::map::OrderMap;

/// Complete an order map for a run of `max_slots` kingdoms.
///
/// Kingdoms in `excluded` (or already marked `-1`) never receive a slot and
/// come back marked `-1`. Fails if a fixed slot lies beyond the run, if
/// fewer than `max_slots` kingdoms can be placed, or if some slot prefix
/// can never be filled.
///
/// ```
/// use std::collections::BTreeSet;
/// use kingdom_logic::catalog::Kingdom;
/// use kingdom_logic::core::GenRng;
/// use kingdom_logic::order::{solve_order, OrderMap};
///
/// let order: OrderMap = Kingdom::OPTIONAL.iter().map(|k| (*k, 0)).collect();
/// let mut rng = GenRng::new(7);
///
/// let solved = solve_order(&order, 3, &BTreeSet::new(), &mut rng).unwrap();
/// assert!(solved.occupancy(3).iter().all(|n| *n >= 1));
/// ```
pub fn solve_order(
    order: &OrderMap,
    max_slots: u8,
    excluded: &BTreeSet<Kingdom>,
    rng: &mut GenRng,
) -> Result<OrderMap, GenerationError> {
    let mut solved = order.clone();
    let mut unassigned = Vec::new();
    let mut occupancy = vec![0usize; usize::from(max_slots)];
    let mut valid_placements = 0usize;

    for (kingdom, value) in order.iter() {
        if excluded.contains(&kingdom) {
            continue;
        }
        if value <= 0 {
            if value == OrderMap::UNASSIGNED {
                unassigned.push(kingdom);
                valid_placements += 1;
            }
            continue;
        }
        if value > i32::from(max_slots) {
            return Err(GenerationError::OrderExceedsRun {
                kingdom,
                value,
                max: max_slots,
            });
        }
        occupancy[value as usize - 1] += 1;
        valid_placements += 1;
    }

    if valid_placements < usize::from(max_slots) {
        return Err(GenerationError::NotEnoughKingdoms {
            order: order.clone(),
            valid: valid_placements,
            needed: max_slots,
        });
    }

    while let Some(kingdom) = rng.take(&mut unassigned) {
        let slot = least_occupied_slot(&occupancy);
        occupancy[usize::from(slot) - 1] += 1;
        solved.set(kingdom, i32::from(slot));
        debug!("placed {kingdom} in route slot {slot}");
    }

    for kingdom in excluded {
        solved.set(*kingdom, OrderMap::EXCLUDED);
    }

    if let Some(slot) = first_unreachable_slot(&occupancy) {
        return Err(GenerationError::UnreachableSlot {
            order: solved,
            slot,
        });
    }

    info!("solved route order for {max_slots} slots: {solved}");
    Ok(solved)
}

/// Least occupied slot, scanning from the last slot down so that ties go
/// to the latest slot.
fn least_occupied_slot(occupancy: &[usize]) -> u8 {
    let mut chosen = 1u8;
    let mut lowest = usize::MAX;
    for (index, amount) in occupancy.iter().enumerate().rev() {
        if *amount < lowest {
            chosen = index as u8 + 1;
            lowest = *amount;
        }
    }
    chosen
}

/// First slot whose prefix holds fewer kingdoms than slots, if any.
///
/// Surplus in an early slot carries forward to cover later gaps, never
/// backwards.
fn first_unreachable_slot(occupancy: &[usize]) -> Option<u8> {
    let mut buffer = 0i64;
    for (index, amount) in occupancy.iter().enumerate() {
        buffer += *amount as i64 - 1;
        if buffer < 0 {
            return Some(index as u8 + 1);
        }
    }
    None
}
