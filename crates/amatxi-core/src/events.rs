use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every state change on the user document produces an Event.
/// The presentation layer renders them; nothing else subscribes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    SetupCompleted {
        attempt_start: Option<DateTime<Utc>>,
        at: DateTime<Utc>,
    },
    SettingsUpdated { at: DateTime<Utc> },
    /// The last-cigarette date was edited, so the current attempt restarted
    /// without crediting the abandoned streak.
    AttemptRestarted {
        previous_start: Option<DateTime<Utc>>,
        new_start: DateTime<Utc>,
        at: DateTime<Utc>,
    },
    RelapseLogged {
        relapse_id: String,
        previous_streak_days: u64,
        total_smoke_free_days_ever: u64,
        at: DateTime<Utc>,
    },
    CravingLogged {
        craving_id: String,
        overcome: bool,
        at: DateTime<Utc>,
    },
    MotivationAdded {
        index: usize,
        text: String,
        at: DateTime<Utc>,
    },
    MotivationRemoved {
        index: usize,
        text: String,
        at: DateTime<Utc>,
    },
    MainMotivationSet { text: String, at: DateTime<Utc> },
    AchievementUnlocked {
        id: String,
        name: String,
        description: String,
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn at(&self) -> DateTime<Utc> {
        match self {
            Event::SetupCompleted { at, .. }
            | Event::SettingsUpdated { at }
            | Event::AttemptRestarted { at, .. }
            | Event::RelapseLogged { at, .. }
            | Event::CravingLogged { at, .. }
            | Event::MotivationAdded { at, .. }
            | Event::MotivationRemoved { at, .. }
            | Event::MainMotivationSet { at, .. }
            | Event::AchievementUnlocked { at, .. } => *at,
        }
    }
}
