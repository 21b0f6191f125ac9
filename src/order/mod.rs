//! Route order: which optional kingdom belongs to which slot of a run.
//!
//! - `OrderMap`: kingdom → slot value (`0` unassigned, `-1` excluded)
//! - `solve_order`: fills unassigned kingdoms and checks feasibility

pub mod map;
pub mod solver;

pub use map::OrderMap;
pub use solver::solve_order;
