//! Read-only views: achievements, health milestones and relapse history.

use amatxi_core::health::milestone_progress;
use amatxi_core::stats::{elapsed_ms, lifetime_smoke_free_days};
use amatxi_core::{RelapseLog, ACHIEVEMENTS};
use chrono::Utc;
use serde::Serialize;

use super::session::{CliResult, Session};
use crate::format;

#[derive(Serialize)]
struct AchievementRow {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    unlocked: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct History<'a> {
    total_smoke_free_days_ever: u64,
    lifetime_smoke_free_days: u64,
    relapses: Vec<&'a RelapseLog>,
}

pub fn achievements(json: bool) -> CliResult {
    let session = Session::open_profile()?;
    let data = session.tracker.data();
    let rows: Vec<AchievementRow> = ACHIEVEMENTS
        .iter()
        .map(|a| AchievementRow {
            id: a.id,
            name: a.name,
            description: a.description,
            unlocked: data.achievements_unlocked.contains(a.id),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    let unlocked = rows.iter().filter(|r| r.unlocked).count();
    println!("{unlocked} of {} unlocked", rows.len());
    for row in &rows {
        let mark = if row.unlocked { "x" } else { " " };
        println!("[{mark}] {} - {}", row.name, row.description);
    }
    Ok(())
}

pub fn health(json: bool) -> CliResult {
    let session = Session::open_profile()?;
    let progress = milestone_progress(elapsed_ms(
        session.tracker.data().current_attempt_start_date,
        Utc::now(),
    ));

    if json {
        println!("{}", serde_json::to_string_pretty(&progress)?);
        return Ok(());
    }
    for status in &progress {
        let state = if status.achieved {
            "reached".to_string()
        } else {
            format!("in {}", format::remaining(status.remaining_ms))
        };
        println!("{:<32} {state}", status.milestone.title);
        println!("    {}", status.milestone.description);
    }
    Ok(())
}

pub fn history(json: bool) -> CliResult {
    let session = Session::open_profile()?;
    let data = session.tracker.data();
    let stats = session.tracker.stats(Utc::now());
    let mut relapses: Vec<&RelapseLog> = data.relapses.iter().collect();
    relapses.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let history = History {
        total_smoke_free_days_ever: data.total_smoke_free_days_ever,
        lifetime_smoke_free_days: lifetime_smoke_free_days(data, &stats),
        relapses,
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&history)?);
        return Ok(());
    }
    println!(
        "Lifetime smoke-free days: {} ({} from earlier attempts)",
        history.lifetime_smoke_free_days, history.total_smoke_free_days_ever
    );
    if history.relapses.is_empty() {
        println!("No relapses logged.");
    }
    for r in &history.relapses {
        let streak = r
            .previous_streak_days
            .map(|d| format!(" after {d} day(s)"))
            .unwrap_or_default();
        println!("{}{streak}", format::date_time(r.timestamp));
        if let Some(trigger) = &r.trigger {
            println!("    trigger: {trigger}");
        }
        if let Some(reason) = &r.reason {
            println!("    reason:  {reason}");
        }
    }
    Ok(())
}
