//! Errors raised while setting up a seed.
//!
//! Every variant is fatal for the configuration that produced it: generation
//! aborts before any graph is handed to a caller, and the operator has to
//! change the options.

use thiserror::Error;

use crate::catalog::{ClassName, Kingdom};
use crate::order::OrderMap;

/// Errors raised while validating options, solving the route order or
/// building the region graph.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error(
        "order value above the number of visitable kingdoms in a run: \
         {kingdom} has value {value} and needs to be at most {max}"
    )]
    OrderExceedsRun {
        kingdom: Kingdom,
        value: i32,
        max: u8,
    },

    #[error("too many inaccessible kingdoms:\n{order}\nhas {valid} and needs at least {needed}")]
    NotEnoughKingdoms {
        order: OrderMap,
        valid: usize,
        needed: u8,
    },

    #[error("can not reach all valid kingdoms: slot {slot} is never populated\n{order}")]
    UnreachableSlot { order: OrderMap, slot: u8 },

    #[error("{field} must be between {min} and {max} (got {value})")]
    RangeViolation {
        field: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },

    #[error("{kingdom} can not be excluded or ordered, it is part of every run")]
    FixedKingdom { kingdom: Kingdom },

    #[error("excluding classes but expecting checks for them: {classes:?}")]
    ExcludedClassHasChecks { classes: Vec<ClassName> },

    #[error("excluding all classes, but at least one is needed to play")]
    AllClassesExcluded,

    #[error("needs {required} distinct victories but only {available} classes are playable")]
    TooManyDefeatsRequired { required: u8, available: usize },

    #[error("region {0:?} is not part of this graph")]
    UnknownRegion(String),

    #[error("region {0:?} registered twice")]
    DuplicateRegion(String),

    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidOptions(err.to_string())
    }
}
