//! Achievement catalog and unlock engine.

mod catalog;
mod engine;

pub use catalog::{find_achievement, unlocked_achievements, Achievement, ACHIEVEMENTS};
pub use engine::evaluate_achievements;
