mod config;
mod store;

pub use config::{Config, DisplayConfig, NotificationsConfig, WatchConfig};
pub use store::{UserDataStore, DOCUMENT_FILE};

use std::path::PathBuf;

use crate::error::{Result, StorageError};

/// Returns the data directory, creating it if needed.
///
/// `AMATXI_HOME` overrides the location outright. Otherwise this is
/// `~/.config/amatxi[-dev]/`; set AMATXI_ENV=dev to use the development
/// directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("AMATXI_HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("AMATXI_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("amatxi-dev")
            } else {
                base_dir.join("amatxi")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
