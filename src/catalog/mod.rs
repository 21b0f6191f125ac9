//! Static game catalog: kingdoms, classes, items and locations.
//!
//! ## Key Types
//!
//! - `Kingdom`, `ClassName`: closed name sets
//! - `ItemCatalog`: item name → id registry with classifications
//! - `TokenGroup`: named item groups used by group predicates
//! - `LocationCatalog`: location name → id registry
//! - `Area`: the outskirts or a kingdom, used to derive check names
//!
//! Catalogs are built once at start-up and only ever read afterwards.

pub mod items;
pub mod locations;
pub mod names;

pub use items::{
    ItemCatalog, ItemClassification, ItemDefinition, ItemId, TokenGroup, GOLD, PROGRESSIVE_REGION,
    TREASURESPHERE, VICTORY, XP,
};
pub use locations::{Area, LocationCatalog, LocationId, OUTSKIRTS, VICTORY_LOCATION};
pub use names::{ClassName, Kingdom};
