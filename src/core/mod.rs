//! Core types shared by every stage: options, errors and randomness.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GoalCondition, LogicConfig, PotionSanity, ShopSanity, UpgradeSanity};
pub use error::GenerationError;
pub use rng::GenRng;
