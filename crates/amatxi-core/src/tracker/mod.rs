mod engine;

pub use engine::{AttemptPhase, QuitTracker, Refresh};
