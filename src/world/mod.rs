//! Seed generation: the pipeline that turns options and a seed into a
//! region graph and an item pool.

pub mod generate;
pub mod pool;

pub use generate::{Generation, SlotData};
pub use pool::ItemPool;
