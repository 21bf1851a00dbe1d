//! Human-readable rendering of engine output.

use chrono::{DateTime, Utc};

use amatxi_core::Stats;

/// "3d 4h 12m": days only once there are any, hours whenever days are shown.
pub fn time_difference(days: u64, hours: u64, minutes: u64) -> String {
    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{days}d"));
    }
    if hours > 0 || days > 0 {
        parts.push(format!("{hours}h"));
    }
    parts.push(format!("{minutes}m"));
    parts.join(" ")
}

pub fn elapsed(stats: &Stats, show_seconds: bool) -> String {
    let base = time_difference(
        stats.days_smoke_free,
        stats.hours_smoke_free,
        stats.minutes_smoke_free,
    );
    if show_seconds {
        format!("{base} {}s", stats.seconds_smoke_free)
    } else {
        base
    }
}

pub fn money(amount: f64, symbol: &str) -> String {
    format!("{symbol}{amount:.2}")
}

pub fn date_time(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Coarse "in 3d 4h" style rendering of a remaining duration.
pub fn remaining(ms: u64) -> String {
    let minutes = ms / 60_000;
    let hours = minutes / 60;
    time_difference(hours / 24, hours % 24, minutes % 60)
}
