//! Win condition.
//!
//! Completion is gated in two stages: the `Victory` event in the terminal
//! kingdom needs the goal predicate, and the seed is complete once the
//! `Victory` token it grants is held.

use crate::catalog::{TokenGroup, VICTORY};
use crate::core::{GoalCondition, LogicConfig};
use crate::logic::Predicate;

/// Condition for the `Victory` event.
///
/// For the Shira goal: at least `shira_defeats` distinct class victories.
#[must_use]
pub fn goal_predicate(config: &LogicConfig) -> Predicate {
    match config.goal_condition {
        GoalCondition::Shira => Predicate::group_distinct(
            TokenGroup::ClassVictories,
            u32::from(config.shira_defeats),
        ),
    }
}

/// Condition under which the seed counts as finished.
#[must_use]
pub fn completion_predicate() -> Predicate {
    Predicate::has(VICTORY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{Inventory, LogicContext};
    use crate::order::OrderMap;

    #[test]
    fn test_goal_counts_distinct_victories() {
        let config = LogicConfig::new().with_shira_defeats(2);
        let goal = goal_predicate(&config);
        let order = OrderMap::new();

        let mut inventory = Inventory::new();
        inventory.add_many("Victory - Wizard", 3);
        assert!(!goal.evaluate(&LogicContext::new(&inventory, &order)));

        inventory.add("Victory - Ancient");
        assert!(goal.evaluate(&LogicContext::new(&inventory, &order)));
    }

    #[test]
    fn test_completion_needs_victory_token() {
        let order = OrderMap::new();
        let completion = completion_predicate();

        assert!(!completion.evaluate(&LogicContext::new(&Inventory::new(), &order)));
        assert!(completion.evaluate(&LogicContext::new(&Inventory::new().with(VICTORY), &order)));
    }
}
