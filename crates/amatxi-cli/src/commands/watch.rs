use std::io::Write;
use std::thread;
use std::time::Duration;

use amatxi_core::Config;
use chrono::Utc;
use tracing::info;

use super::session::{announce_unlocks, CliResult, Session};
use crate::format;

/// Poll `refresh` on the configured interval, saving whenever something unlocks.
pub fn run(ticks: Option<u64>) -> CliResult {
    let config = Config::load_or_default();
    let interval = Duration::from_secs(config.watch.interval_secs.max(1));
    let mut session = Session::open_profile()?;
    info!(interval_secs = interval.as_secs(), ?ticks, "watch started");

    let mut tick = 0u64;
    loop {
        let refresh = session.tracker.refresh(Utc::now());
        let stats = refresh.stats;
        println!(
            "{} | {} cigarettes avoided | {} saved",
            format::elapsed(&stats, config.display.show_seconds),
            stats.cigarettes_not_smoked,
            format::money(stats.money_saved, &config.display.currency_symbol)
        );
        if refresh.unlocked_any() {
            session.save()?;
            if config.notifications.achievements {
                announce_unlocks(&refresh.events);
            }
        }
        std::io::stdout().flush()?;

        tick += 1;
        if ticks.is_some_and(|limit| tick >= limit) {
            break;
        }
        thread::sleep(interval);
    }
    Ok(())
}
