//! Load-dispatch-save plumbing shared by the commands.

use amatxi_core::{Event, QuitTracker, UserDataStore};
use tracing::debug;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// The loaded document plus where it came from.
pub struct Session {
    store: UserDataStore,
    pub tracker: QuitTracker,
}

impl Session {
    /// Open the document, starting from the initial one if none exists.
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let store = UserDataStore::open()?;
        let data = store.load()?;
        debug!(path = %store.path().display(), found = data.is_some(), "document loaded");
        Ok(Self {
            store,
            tracker: QuitTracker::new(data.unwrap_or_default()),
        })
    }

    /// Open the document, failing if first-run setup has not happened yet.
    pub fn open_profile() -> Result<Self, Box<dyn std::error::Error>> {
        let session = Self::open()?;
        if session.tracker.needs_setup() {
            return Err("no profile yet; run `amatxi setup` first".into());
        }
        Ok(session)
    }

    pub fn save(&self) -> CliResult {
        self.store.save(self.tracker.data())?;
        Ok(())
    }
}

/// Print one line per unlocked achievement.
pub fn announce_unlocks(events: &[Event]) {
    for event in events {
        if let Event::AchievementUnlocked {
            name, description, ..
        } = event
        {
            println!("Achievement unlocked: {name} - {description}");
        }
    }
}
