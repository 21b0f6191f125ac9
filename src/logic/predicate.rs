//! Logic predicates.
//!
//! Every gate in the region graph is a `Predicate`: a small tagged tree
//! evaluated by one interpreter against a collection snapshot and the
//! resolved route order. Predicates hold no closures, so they compare,
//! print and serialize like plain data.

use serde::{Deserialize, Serialize};

use crate::catalog::TokenGroup;
use crate::order::OrderMap;

use super::collection::Collection;

/// A condition over the player's collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Predicate {
    /// Always holds.
    Always,

    /// Holds at least one copy of a token.
    HasToken(String),

    /// Holds at least `count` copies of a token.
    CountAtLeast { token: String, count: u32 },

    /// Holds at least `count` distinct members of a group.
    GroupDistinctAtLeast { group: TokenGroup, count: u32 },

    /// For every route slot before this one that has a kingdom assigned,
    /// holds the token of at least one kingdom in that slot.
    PriorSlotCoverage(u8),

    /// All predicates hold.
    And(Vec<Predicate>),

    /// At least one predicate holds.
    Or(Vec<Predicate>),
}

impl Predicate {
    /// Create a token predicate.
    pub fn has(token: impl Into<String>) -> Self {
        Self::HasToken(token.into())
    }

    /// Create a count predicate.
    pub fn count_at_least(token: impl Into<String>, count: u32) -> Self {
        Self::CountAtLeast {
            token: token.into(),
            count,
        }
    }

    /// Create a distinct-group predicate.
    pub fn group_distinct(group: TokenGroup, count: u32) -> Self {
        Self::GroupDistinctAtLeast { group, count }
    }

    /// Combine with AND, skipping `Always` and collapsing trivial cases.
    pub fn all(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        let mut parts: Vec<Predicate> = predicates
            .into_iter()
            .filter(|p| *p != Predicate::Always)
            .collect();
        match parts.len() {
            0 => Self::Always,
            1 => parts.remove(0),
            _ => Self::And(parts),
        }
    }

    /// Combine with OR.
    pub fn any(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        Self::Or(predicates.into_iter().collect())
    }

    /// Add another predicate with AND.
    #[must_use]
    pub fn and(self, other: Predicate) -> Self {
        match self {
            Self::And(mut parts) => {
                parts.push(other);
                Self::And(parts)
            }
            _ => Self::all([self, other]),
        }
    }

    /// Check this predicate against a context.
    #[must_use]
    pub fn evaluate(&self, ctx: &LogicContext<'_>) -> bool {
        PredicateEvaluator::evaluate(self, ctx)
    }

    /// Does this predicate always hold, regardless of the collection?
    #[must_use]
    pub fn is_always(&self) -> bool {
        matches!(self, Self::Always)
    }
}

/// What a predicate is evaluated against.
#[derive(Clone, Copy)]
pub struct LogicContext<'a> {
    /// The player's collection.
    pub collection: &'a dyn Collection,
    /// Resolved route order the graph was built with.
    pub order: &'a OrderMap,
}

impl<'a> LogicContext<'a> {
    /// Create a new context.
    pub fn new(collection: &'a dyn Collection, order: &'a OrderMap) -> Self {
        Self { collection, order }
    }
}

/// Interpreter for predicates.
pub struct PredicateEvaluator;

impl PredicateEvaluator {
    /// Check if a predicate is satisfied.
    pub fn evaluate(predicate: &Predicate, ctx: &LogicContext<'_>) -> bool {
        match predicate {
            Predicate::Always => true,

            Predicate::HasToken(token) => ctx.collection.has(token),

            Predicate::CountAtLeast { token, count } => ctx.collection.count(token) >= *count,

            Predicate::GroupDistinctAtLeast { group, count } => {
                ctx.collection.has_group_unique(*group, *count)
            }

            Predicate::PriorSlotCoverage(slot) => Self::covers_prior_slots(*slot, ctx),

            Predicate::And(parts) => parts.iter().all(|p| Self::evaluate(p, ctx)),

            Predicate::Or(parts) => parts.iter().any(|p| Self::evaluate(p, ctx)),
        }
    }

    fn covers_prior_slots(slot: u8, ctx: &LogicContext<'_>) -> bool {
        (1..slot).all(|prior| {
            let mut assigned = ctx.order.kingdoms_in_slot(prior).peekable();
            // Empty slots are skipped rather than blocking everything after them.
            assigned.peek().is_none() || assigned.any(|k| ctx.collection.has(k.name()))
        })
    }
}
