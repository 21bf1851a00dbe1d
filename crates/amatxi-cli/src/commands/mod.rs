pub mod config;
pub mod craving;
pub mod motivation;
pub mod progress;
pub mod relapse;
pub mod session;
pub mod settings;
pub mod setup;
pub mod status;
pub mod watch;
