//! JSON file store for the user document.
//!
//! The whole document is read at startup and rewritten after every mutation.
//! Writes go to a sibling temp file that is then renamed into place,
//! so a reader never sees a half-written document.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::data_dir;
use crate::error::{Result, StorageError};
use crate::model::UserData;

/// Well-known document name inside the data directory.
pub const DOCUMENT_FILE: &str = "amatxiUserData.json";

#[derive(Debug, Clone)]
pub struct UserDataStore {
    path: PathBuf,
}

impl UserDataStore {
    /// Store at the default location in [`data_dir`].
    pub fn open() -> Result<Self> {
        Ok(Self::at(data_dir()?.join(DOCUMENT_FILE)))
    }

    /// Store backed by an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored document.
    ///
    /// Returns `Ok(None)` when there is no profile yet: the file is missing,
    /// empty, or holds `null`. A document that is present but has no
    /// last-cigarette date is returned as-is; callers check
    /// `QuitTracker::needs_setup`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(&self) -> Result<Option<UserData>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no stored document");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            warn!(path = %self.path.display(), "stored document is empty");
            return Ok(None);
        }

        let corrupt = |source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        };
        let data: Option<UserData> = serde_json::from_str(&content).map_err(corrupt)?;
        Ok(data)
    }

    /// Replace the stored document.
    ///
    /// # Errors
    /// Returns an error if the document cannot be serialized or written.
    pub fn save(&self, data: &UserData) -> Result<()> {
        let content = serde_json::to_string_pretty(data)?;
        let tmp = self.path.with_extension("json.tmp");
        let write = |path: &Path| -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &content)
        };
        write(&tmp)
            .and_then(|()| std::fs::rename(&tmp, &self.path))
            .map_err(|source| StorageError::WriteFailed {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), bytes = content.len(), "document saved");
        Ok(())
    }

    /// Delete the stored document. Missing files are not an error.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
