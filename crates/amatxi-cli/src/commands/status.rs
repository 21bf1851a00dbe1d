use amatxi_core::craving::random_message;
use amatxi_core::health::next_milestone;
use amatxi_core::stats::{elapsed_ms, lifetime_smoke_free_days};
use amatxi_core::{Config, Stats};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::session::{announce_unlocks, CliResult, Session};
use crate::format;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusReport {
    attempt_start: Option<DateTime<Utc>>,
    stats: Stats,
    lifetime_smoke_free_days: u64,
    next_milestone: Option<&'static str>,
    newly_unlocked: Vec<String>,
}

pub fn run(json: bool) -> CliResult {
    let now = Utc::now();
    let config = Config::load_or_default();
    let mut session = Session::open_profile()?;

    let refresh = session.tracker.refresh(now);
    if refresh.unlocked_any() {
        session.save()?;
    }
    let data = session.tracker.data();
    let stats = refresh.stats;
    let next = next_milestone(elapsed_ms(data.current_attempt_start_date, now));

    if json {
        let report = StatusReport {
            attempt_start: data.current_attempt_start_date,
            stats,
            lifetime_smoke_free_days: lifetime_smoke_free_days(data, &stats),
            next_milestone: next.map(|m| m.id),
            newly_unlocked: refresh
                .events
                .iter()
                .filter_map(|e| match e {
                    amatxi_core::Event::AchievementUnlocked { id, .. } => Some(id.clone()),
                    _ => None,
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let elapsed = format::elapsed(&stats, config.display.show_seconds);
    println!("Smoke-free:          {elapsed}");
    println!("Cigarettes avoided:  {}", stats.cigarettes_not_smoked);
    println!(
        "Money saved:         {}",
        format::money(stats.money_saved, &config.display.currency_symbol)
    );
    let lifetime = lifetime_smoke_free_days(data, &stats);
    println!("Lifetime days:       {lifetime}");
    if let Some(m) = next {
        println!("Next health milestone: {} - {}", m.title, m.description);
    }
    println!();
    println!("{}", random_message(&mut rand::thread_rng()));
    if config.notifications.achievements {
        announce_unlocks(&refresh.events);
    }
    Ok(())
}
