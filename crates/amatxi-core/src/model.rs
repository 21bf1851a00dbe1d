//! The persisted user document and its parts.
//!
//! Field names serialize in camelCase so the stored JSON keeps the same shape
//! as the document written by earlier versions of the app.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CIGARETTES_PER_DAY: f64 = 10.0;
pub const DEFAULT_PACK_PRICE: f64 = 5.0;
pub const DEFAULT_PACK_SIZE: f64 = 20.0;

/// A single logged craving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CravingLog {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub overcome: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A single logged relapse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelapseLog {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    /// Whole days of the attempt that this relapse ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_streak_days: Option<u64>,
}

/// Settings collected by first-run setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub last_cigarette_date: Option<DateTime<Utc>>,
    pub cigarettes_per_day: f64,
    pub pack_price: f64,
    pub pack_size: f64,
    #[serde(default)]
    pub main_motivation: String,
    #[serde(default)]
    pub personal_motivations: Vec<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            last_cigarette_date: None,
            cigarettes_per_day: DEFAULT_CIGARETTES_PER_DAY,
            pack_price: DEFAULT_PACK_PRICE,
            pack_size: DEFAULT_PACK_SIZE,
            main_motivation: String::new(),
            personal_motivations: Vec::new(),
        }
    }
}

/// A partial settings edit. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(default)]
    pub last_cigarette_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cigarettes_per_day: Option<f64>,
    #[serde(default)]
    pub pack_price: Option<f64>,
    #[serde(default)]
    pub pack_size: Option<f64>,
    #[serde(default)]
    pub main_motivation: Option<String>,
    #[serde(default)]
    pub personal_motivations: Option<Vec<String>>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Free-text details attached to a relapse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelapseDetails {
    pub reason: Option<String>,
    pub trigger: Option<String>,
}

/// The single persisted document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserData {
    pub last_cigarette_date: Option<DateTime<Utc>>,
    pub cigarettes_per_day: f64,
    pub pack_price: f64,
    pub pack_size: f64,
    pub main_motivation: String,
    pub personal_motivations: Vec<String>,
    pub cravings: Vec<CravingLog>,
    pub relapses: Vec<RelapseLog>,
    pub achievements_unlocked: BTreeSet<String>,
    pub total_smoke_free_days_ever: u64,
    pub current_attempt_start_date: Option<DateTime<Utc>>,
}

impl Default for UserData {
    fn default() -> Self {
        Self {
            last_cigarette_date: None,
            cigarettes_per_day: DEFAULT_CIGARETTES_PER_DAY,
            pack_price: DEFAULT_PACK_PRICE,
            pack_size: DEFAULT_PACK_SIZE,
            main_motivation: String::new(),
            personal_motivations: Vec::new(),
            cravings: Vec::new(),
            relapses: Vec::new(),
            achievements_unlocked: BTreeSet::new(),
            total_smoke_free_days_ever: 0,
            current_attempt_start_date: None,
        }
    }
}

impl UserData {
    /// A fresh document built from setup settings. History is empty.
    pub fn from_settings(settings: UserSettings) -> Self {
        Self {
            current_attempt_start_date: settings.last_cigarette_date,
            last_cigarette_date: settings.last_cigarette_date,
            cigarettes_per_day: settings.cigarettes_per_day,
            pack_price: settings.pack_price,
            pack_size: settings.pack_size,
            main_motivation: settings.main_motivation,
            personal_motivations: settings.personal_motivations,
            ..Self::default()
        }
    }

    /// The habit-related settings currently stored.
    pub fn settings(&self) -> UserSettings {
        UserSettings {
            last_cigarette_date: self.last_cigarette_date,
            cigarettes_per_day: self.cigarettes_per_day,
            pack_price: self.pack_price,
            pack_size: self.pack_size,
            main_motivation: self.main_motivation.clone(),
            personal_motivations: self.personal_motivations.clone(),
        }
    }

    pub fn has_motivation(&self) -> bool {
        !self.main_motivation.is_empty() || !self.personal_motivations.is_empty()
    }

    pub fn has_overcome_craving(&self) -> bool {
        self.cravings.iter().any(|c| c.overcome)
    }
}
