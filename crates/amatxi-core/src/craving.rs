//! Craving relief helpers: quick tips, encouraging messages, the relapse
//! trigger catalog and today's overcome-craving counter.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::UserData;

pub static CRAVING_TIPS: &[&str] = &[
    "Drink a big glass of water.",
    "Chew sugar-free gum or suck on a sweet.",
    "Go for a five-minute walk.",
    "Call a friend or someone in your family.",
    "Take ten deep, slow breaths.",
    "Read your main motivations again.",
    "Think about how proud the people you love are of you.",
    "The craving will pass in a few minutes. You can do it!",
    "Distract yourself with a quick task.",
    "Do a few stretches.",
];

pub static MOTIVATIONAL_MESSAGES: &[&str] = &[
    "Your family is proud of you for every smoke-free day.",
    "Each day without smoking is a gift to your health and to the people you love.",
    "Your effort inspires those around you. Keep going!",
    "You are an example of strength for your loved ones.",
    "Remember how much you are loved. You are doing great!",
    "Think of the happy moments this decision is earning you.",
];

/// Selecting this trigger means the user typed their own.
pub const OTHER_TRIGGER: &str = "Other";

pub static RELAPSE_TRIGGERS: &[&str] = &[
    "Stress",
    "Social event",
    "Alcohol",
    "After a meal",
    "With coffee",
    "Boredom",
    "Seeing others smoke",
    "A bad day",
    "Old routine",
    OTHER_TRIGGER,
];

pub fn random_tip<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    CRAVING_TIPS.choose(rng).copied().unwrap_or_default()
}

pub fn random_message<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    MOTIVATIONAL_MESSAGES
        .choose(rng)
        .copied()
        .unwrap_or_default()
}

/// The trigger text to store for a relapse.
///
/// Picking [`OTHER_TRIGGER`] stores the custom text instead; any other
/// selection is stored as-is and the custom text is ignored.
pub fn resolve_trigger(selected: Option<&str>, custom: Option<&str>) -> Option<String> {
    match selected.map(str::trim) {
        Some(OTHER_TRIGGER) => custom
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string),
        Some(s) if !s.is_empty() => Some(s.to_string()),
        _ => None,
    }
}

/// Overcome cravings logged on `now`'s UTC calendar date.
pub fn overcome_today(data: &UserData, now: DateTime<Utc>) -> usize {
    let today = now.date_naive();
    data.cravings
        .iter()
        .filter(|c| c.overcome && c.timestamp.date_naive() == today)
        .count()
}
