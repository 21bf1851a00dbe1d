//! The built-in achievement catalog.

use serde::Serialize;

use crate::model::UserData;
use crate::stats::Stats;

/// Pure unlock condition over the document and its derived stats.
pub type Condition = fn(&UserData, &Stats) -> bool;

/// A named achievement with its unlock condition.
#[derive(Clone, Copy, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip)]
    pub condition: Condition,
}

impl Achievement {
    pub fn is_satisfied(&self, data: &UserData, stats: &Stats) -> bool {
        (self.condition)(data, stats)
    }
}

impl std::fmt::Debug for Achievement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Achievement")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

impl PartialEq for Achievement {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: "ach_1_day",
        name: "First Day Done",
        description: "You made it through your first day without smoking!",
        condition: |_, stats| stats.days_smoke_free >= 1,
    },
    Achievement {
        id: "ach_3_days",
        name: "72 Hours of Victory",
        description: "Three days with no nicotine in your body!",
        condition: |_, stats| stats.days_smoke_free >= 3,
    },
    Achievement {
        id: "ach_1_week",
        name: "One Smoke-Free Week",
        description: "Fantastic! A whole week done.",
        condition: |_, stats| stats.days_smoke_free >= 7,
    },
    Achievement {
        id: "ach_100_cigs",
        name: "100 Fewer Cigarettes",
        description: "You have avoided smoking 100 cigarettes.",
        condition: |_, stats| stats.cigarettes_not_smoked >= 100,
    },
    Achievement {
        id: "ach_50_eur",
        name: "€50 Saved",
        description: "You have saved €50 to treat yourself!",
        condition: |_, stats| stats.money_saved >= 50.0,
    },
    Achievement {
        id: "ach_1_month",
        name: "A Month of Wins",
        description: "A full month! Your health thanks you.",
        condition: |_, stats| stats.days_smoke_free >= 30,
    },
    Achievement {
        id: "ach_motivation_set",
        name: "Clear Motivation",
        description: "You have written down your reasons for quitting.",
        condition: |data, _| data.has_motivation(),
    },
    Achievement {
        id: "ach_first_craving_overcome",
        name: "First Craving Beaten",
        description: "You beat your first logged craving. You are strong.",
        condition: |data, _| data.has_overcome_craving(),
    },
];

pub fn find_achievement(id: &str) -> Option<&'static Achievement> {
    ACHIEVEMENTS.iter().find(|a| a.id == id)
}

/// Catalog entries present in the document's unlocked set, in catalog order.
/// Ids the catalog no longer knows are skipped.
pub fn unlocked_achievements(data: &UserData) -> Vec<&'static Achievement> {
    ACHIEVEMENTS
        .iter()
        .filter(|a| data.achievements_unlocked.contains(a.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = ACHIEVEMENTS.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), ACHIEVEMENTS.len());
    }

    #[test]
    fn find_by_id() {
        assert_eq!(
            find_achievement("ach_1_week").map(|a| a.name),
            Some("One Smoke-Free Week")
        );
        assert!(find_achievement("ach_unknown").is_none());
    }

    #[test]
    fn unlocked_listing_follows_catalog_order() {
        let mut data = UserData::default();
        for id in ["ach_motivation_set", "ach_1_day", "retired_id"] {
            data.achievements_unlocked.insert(id.to_string());
        }
        let ids: Vec<_> = unlocked_achievements(&data).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["ach_1_day", "ach_motivation_set"]);
    }

    #[test]
    fn money_condition_uses_saved_amount() {
        let data = UserData::default();
        let ach = find_achievement("ach_50_eur").unwrap();
        let mut stats = Stats::default();
        stats.money_saved = 49.99;
        assert!(!ach.is_satisfied(&data, &stats));
        stats.money_saved = 50.0;
        assert!(ach.is_satisfied(&data, &stats));
    }
}
