//! Achievement unlock scan.

use tracing::{debug, info};

use super::catalog::Achievement;
use crate::model::UserData;
use crate::stats::Stats;

/// Unlock every catalog entry whose condition now holds.
///
/// Entries already in `data.achievements_unlocked` are skipped without
/// evaluating their condition, so an unlock is never reported twice and never
/// revoked. Returns the newly unlocked entries in catalog order.
pub fn evaluate_achievements<'a>(
    data: &mut UserData,
    stats: &Stats,
    catalog: &'a [Achievement],
) -> Vec<&'a Achievement> {
    let mut newly_unlocked = Vec::new();

    for achievement in catalog {
        if data.achievements_unlocked.contains(achievement.id) {
            continue;
        }
        if achievement.is_satisfied(data, stats) {
            info!(id = achievement.id, "achievement unlocked");
            data.achievements_unlocked.insert(achievement.id.into());
            newly_unlocked.push(achievement);
        }
    }

    debug!(
        checked = catalog.len(),
        unlocked = newly_unlocked.len(),
        "achievement scan finished"
    );
    newly_unlocked
}
