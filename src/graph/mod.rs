//! Region graph.
//!
//! ## Key Types
//!
//! - `Graph`: append-only registry of regions, transitions and locations
//! - `Region`, `Transition`, `Location`: graph elements
//! - `build_graph`: constructs the graph for a configuration
//!
//! Reachability queries (`is_reachable`, `sweep`, `is_beatable`) live in
//! `search` as methods on `Graph`.

pub mod builder;
pub mod region;
pub mod search;

pub use builder::{build_graph, class_region_name, SHOPS};
pub use region::{Graph, Location, Region, RegionId, Transition, TransitionId};
pub use search::ORIGIN;
