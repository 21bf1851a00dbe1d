//! # Amatxi Core Library
//!
//! This library provides the core logic for Amatxi, a quit-smoking tracker.
//! It is a deterministic layer over a single local user document; the CLI
//! binary is a thin presentation layer over the same library.
//!
//! ## Architecture
//!
//! - **Stats**: elapsed smoke-free time, cigarettes avoided and money saved,
//!   computed from the attempt start and the user's habit constants
//! - **Achievements**: a fixed catalog of unlock conditions, unlocked at most once
//! - **Tracker**: the quit-attempt state machine owning the user document;
//!   the caller polls `refresh()` to keep stats current
//! - **Storage**: JSON document store and TOML configuration
//!
//! ## Key Components
//!
//! - [`QuitTracker`]: State container and the only mutation surface
//! - [`compute_stats`]: Pure time/savings calculator
//! - [`evaluate_achievements`]: Idempotent unlock scan
//! - [`UserDataStore`]: Document persistence
//! - [`Config`]: Application configuration management

pub mod achievements;
pub mod craving;
pub mod error;
pub mod events;
pub mod health;
pub mod model;
pub mod stats;
pub mod storage;
pub mod tracker;
pub mod validation;

pub use achievements::{evaluate_achievements, Achievement, ACHIEVEMENTS};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use events::Event;
pub use health::{HealthMilestone, MilestoneStatus, HEALTH_MILESTONES};
pub use model::{CravingLog, RelapseDetails, RelapseLog, SettingsUpdate, UserData, UserSettings};
pub use stats::{compute_stats, Stats};
pub use storage::{Config, UserDataStore};
pub use tracker::{AttemptPhase, QuitTracker, Refresh};
