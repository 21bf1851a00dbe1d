//! Health recovery milestones.
//!
//! A fixed timeline of what the body recovers after the last cigarette,
//! measured against the elapsed time of the current attempt.

use serde::Serialize;

const MINUTE_MS: u64 = 60 * 1000;
const HOUR_MS: u64 = 60 * MINUTE_MS;
const DAY_MS: u64 = 24 * HOUR_MS;
const MONTH_MS: u64 = 30 * DAY_MS;
const YEAR_MS: u64 = 365 * DAY_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthMilestone {
    pub id: &'static str,
    /// Elapsed smoke-free time required, in milliseconds.
    pub time_to_achieve_ms: u64,
    pub title: &'static str,
    pub description: &'static str,
}

pub static HEALTH_MILESTONES: &[HealthMilestone] = &[
    HealthMilestone {
        id: "hm1",
        time_to_achieve_ms: 20 * MINUTE_MS,
        title: "20 Minutes",
        description: "Blood pressure and heart rate begin to return to normal.",
    },
    HealthMilestone {
        id: "hm2",
        time_to_achieve_ms: 8 * HOUR_MS,
        title: "8 Hours",
        description: "Nicotine and carbon monoxide in the blood drop by half. Oxygen is normal.",
    },
    HealthMilestone {
        id: "hm3",
        time_to_achieve_ms: 48 * HOUR_MS,
        title: "48 Hours",
        description: "Carbon monoxide is gone. The lungs start clearing. Taste and smell improve.",
    },
    HealthMilestone {
        id: "hm4",
        time_to_achieve_ms: 72 * HOUR_MS,
        title: "72 Hours",
        description: "Breathing gets easier as the bronchial tubes relax. Energy levels rise.",
    },
    HealthMilestone {
        id: "hm5",
        time_to_achieve_ms: 14 * DAY_MS,
        title: "2 Weeks",
        description: "Circulation improves throughout the body.",
    },
    HealthMilestone {
        id: "hm6",
        time_to_achieve_ms: 3 * MONTH_MS,
        title: "3 Months",
        description: "Coughing and shortness of breath decrease. Lung function rises up to 10%.",
    },
    HealthMilestone {
        id: "hm7",
        time_to_achieve_ms: YEAR_MS,
        title: "1 Year",
        description: "The risk of heart attack is half that of a smoker.",
    },
    HealthMilestone {
        id: "hm8",
        time_to_achieve_ms: 10 * YEAR_MS,
        title: "10 Years",
        description: "The risk of lung cancer falls to half that of a smoker.",
    },
    HealthMilestone {
        id: "hm9",
        time_to_achieve_ms: 15 * YEAR_MS,
        title: "15 Years",
        description: "The risk of heart attack is the same as someone who never smoked.",
    },
];

/// A milestone paired with the attempt's progress toward it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MilestoneStatus {
    pub milestone: &'static HealthMilestone,
    pub achieved: bool,
    /// Milliseconds still to go; zero once achieved.
    pub remaining_ms: u64,
}

pub fn milestone_progress(elapsed_ms: u64) -> Vec<MilestoneStatus> {
    HEALTH_MILESTONES
        .iter()
        .map(|milestone| MilestoneStatus {
            milestone,
            achieved: elapsed_ms >= milestone.time_to_achieve_ms,
            remaining_ms: milestone.time_to_achieve_ms.saturating_sub(elapsed_ms),
        })
        .collect()
}

/// The first milestone not yet reached.
pub fn next_milestone(elapsed_ms: u64) -> Option<&'static HealthMilestone> {
    HEALTH_MILESTONES
        .iter()
        .find(|m| elapsed_ms < m.time_to_achieve_ms)
}
