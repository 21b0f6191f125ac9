//! Access logic: predicates and the collections they are checked against.
//!
//! ## Key Types
//!
//! - `Collection`: read-only token counts
//! - `Inventory`: persistent-map collection used for snapshots and sweeps
//! - `Predicate`: serializable condition tree
//! - `LogicContext`: collection plus resolved route order
//! - `PredicateEvaluator`: the single interpreter for predicates

pub mod collection;
pub mod predicate;

pub use collection::{Collection, Inventory};
pub use predicate::{LogicContext, Predicate, PredicateEvaluator};
