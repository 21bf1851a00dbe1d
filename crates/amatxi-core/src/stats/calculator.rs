//! Elapsed-time and savings calculator.
//!
//! Everything here is a pure function of the attempt start, the habit
//! constants and the evaluation instant. The caller supplies `now`; the
//! presentation layer re-invokes the calculator on its own refresh cadence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::UserData;

const SECS_PER_MIN: u64 = 60;
const MINS_PER_HOUR: u64 = 60;
const HOURS_PER_DAY: u64 = 24;

/// Derived statistics for the attempt in progress.
///
/// `hours_smoke_free`, `minutes_smoke_free` and `seconds_smoke_free` are the
/// remainder components of the elapsed time, not cumulative totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub days_smoke_free: u64,
    pub hours_smoke_free: u64,
    pub minutes_smoke_free: u64,
    pub seconds_smoke_free: u64,
    pub cigarettes_not_smoked: u64,
    pub money_saved: f64,
}

impl Stats {
    /// Stats for the document's current attempt.
    pub fn for_user(data: &UserData, now: DateTime<Utc>) -> Self {
        compute_stats(
            data.current_attempt_start_date,
            data.cigarettes_per_day,
            data.pack_price,
            data.pack_size,
            now,
        )
    }

    /// Whole elapsed seconds represented by the breakdown.
    pub fn total_seconds(&self) -> u64 {
        let hours = self.days_smoke_free * HOURS_PER_DAY + self.hours_smoke_free;
        let minutes = hours * MINS_PER_HOUR + self.minutes_smoke_free;
        minutes * SECS_PER_MIN + self.seconds_smoke_free
    }
}

/// Milliseconds elapsed since `attempt_start`, or zero when there is no
/// attempt or it starts after `now`.
pub fn elapsed_ms(attempt_start: Option<DateTime<Utc>>, now: DateTime<Utc>) -> u64 {
    match attempt_start {
        Some(start) => u64::try_from((now - start).num_milliseconds()).unwrap_or(0),
        None => 0,
    }
}

/// Compute the stats for an attempt that started at `attempt_start`.
///
/// Returns all-zero stats when the start is absent or in the future.
/// The fractional-day cigarette estimate uses the hour remainder only;
/// minutes and seconds do not contribute.
pub fn compute_stats(
    attempt_start: Option<DateTime<Utc>>,
    cigarettes_per_day: f64,
    pack_price: f64,
    pack_size: f64,
    now: DateTime<Utc>,
) -> Stats {
    let Some(start) = attempt_start else {
        return Stats::default();
    };
    if now < start {
        return Stats::default();
    }

    let seconds = elapsed_ms(Some(start), now) / 1000;
    let minutes = seconds / SECS_PER_MIN;
    let hours = minutes / MINS_PER_HOUR;
    let days = hours / HOURS_PER_DAY;
    let hour_remainder = hours % HOURS_PER_DAY;

    let per_hour = cigarettes_per_day / HOURS_PER_DAY as f64;
    let cigarettes = (days as f64 * cigarettes_per_day + hour_remainder as f64 * per_hour).floor();
    let cigarettes_not_smoked = if cigarettes > 0.0 {
        cigarettes as u64
    } else {
        0
    };

    let money = if pack_size > 0.0 {
        (cigarettes_not_smoked as f64 / pack_size) * pack_price
    } else {
        0.0
    };
    let money_saved = round_cents(money).max(0.0);

    Stats {
        days_smoke_free: days,
        hours_smoke_free: hour_remainder,
        minutes_smoke_free: minutes % MINS_PER_HOUR,
        seconds_smoke_free: seconds % SECS_PER_MIN,
        cigarettes_not_smoked,
        money_saved,
    }
}

/// Total smoke-free days across every attempt, including the current one.
pub fn lifetime_smoke_free_days(data: &UserData, stats: &Stats) -> u64 {
    data.total_smoke_free_days_ever + stats.days_smoke_free
}

fn round_cents(value: f64) -> f64 {
    if value.is_finite() {
        (value * 100.0).round() / 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn utc_datetime(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn absent_start_yields_zero_stats() {
        let stats = compute_stats(None, 20.0, 6.0, 20.0, Utc::now());
        assert_eq!(stats, Stats::default());
    }

    #[test]
    fn future_start_yields_zero_stats() {
        let now = utc_datetime(2024, 3, 1, 12);
        let stats = compute_stats(Some(now + Duration::hours(5)), 20.0, 6.0, 20.0, now);
        assert_eq!(stats, Stats::default());
    }

    #[test]
    fn start_equal_to_now_is_all_zero() {
        let now = utc_datetime(2024, 3, 1, 12);
        let stats = compute_stats(Some(now), 20.0, 6.0, 20.0, now);
        assert_eq!(stats, Stats::default());
    }

    #[test]
    fn two_and_a_half_days_at_a_pack_a_day() {
        let start = utc_datetime(2024, 3, 1, 0);
        let now = start + Duration::days(2) + Duration::hours(12);
        let stats = compute_stats(Some(start), 20.0, 6.0, 20.0, now);

        assert_eq!(stats.days_smoke_free, 2);
        assert_eq!(stats.hours_smoke_free, 12);
        assert_eq!(stats.minutes_smoke_free, 0);
        assert_eq!(stats.cigarettes_not_smoked, 50);
        assert_eq!(stats.money_saved, 15.0);
    }

    #[test]
    fn breakdown_is_remainders_not_totals() {
        let start = utc_datetime(2024, 3, 1, 0);
        let elapsed = Duration::days(1) + Duration::hours(3) + Duration::minutes(7);
        let now = start + elapsed + Duration::seconds(9) + Duration::milliseconds(999);
        let stats = compute_stats(Some(start), 10.0, 5.0, 20.0, now);

        assert_eq!(stats.days_smoke_free, 1);
        assert_eq!(stats.hours_smoke_free, 3);
        assert_eq!(stats.minutes_smoke_free, 7);
        assert_eq!(stats.seconds_smoke_free, 9);
    }

    #[test]
    fn minutes_do_not_count_toward_cigarettes() {
        let start = utc_datetime(2024, 3, 1, 0);
        // 24 per day is one per hour; 59 minutes is still zero cigarettes.
        let stats = compute_stats(Some(start), 24.0, 5.0, 20.0, start + Duration::minutes(59));
        assert_eq!(stats.cigarettes_not_smoked, 0);

        let stats = compute_stats(Some(start), 24.0, 5.0, 20.0, start + Duration::minutes(60));
        assert_eq!(stats.cigarettes_not_smoked, 1);
    }

    #[test]
    fn zero_pack_size_saves_nothing() {
        let start = utc_datetime(2024, 3, 1, 0);
        let stats = compute_stats(Some(start), 20.0, 6.0, 0.0, start + Duration::days(3));
        assert_eq!(stats.cigarettes_not_smoked, 60);
        assert_eq!(stats.money_saved, 0.0);
    }

    #[test]
    fn money_is_rounded_to_cents() {
        let start = utc_datetime(2024, 3, 1, 0);
        // 10 cigarettes out of a pack of 3 at 1.00 each pack: 3.333...
        let stats = compute_stats(Some(start), 10.0, 1.0, 3.0, start + Duration::days(1));
        assert_eq!(stats.money_saved, 3.33);
    }

    #[test]
    fn negative_constants_clamp_to_zero() {
        let start = utc_datetime(2024, 3, 1, 0);
        let now = start + Duration::days(4);
        let stats = compute_stats(Some(start), -20.0, 6.0, 20.0, now);
        assert_eq!(stats.cigarettes_not_smoked, 0);
        assert_eq!(stats.money_saved, 0.0);

        let stats = compute_stats(Some(start), 20.0, -6.0, 20.0, now);
        assert_eq!(stats.cigarettes_not_smoked, 80);
        assert_eq!(stats.money_saved, 0.0);
    }

    #[test]
    fn elapsed_ms_is_zero_for_future_start() {
        let now = utc_datetime(2024, 3, 1, 12);
        assert_eq!(elapsed_ms(Some(now + Duration::seconds(1)), now), 0);
        assert_eq!(elapsed_ms(None, now), 0);
        assert_eq!(elapsed_ms(Some(now - Duration::seconds(2)), now), 2000);
    }

    #[test]
    fn lifetime_days_add_current_streak() {
        let start = utc_datetime(2024, 3, 1, 0);
        let data = UserData {
            current_attempt_start_date: Some(start),
            total_smoke_free_days_ever: 12,
            ..UserData::default()
        };
        let stats = Stats::for_user(&data, start + Duration::days(5));
        assert_eq!(lifetime_smoke_free_days(&data, &stats), 17);
    }

    proptest! {
        #[test]
        fn breakdown_round_trips_to_elapsed_seconds(offset_ms in 0i64..400_000_000_000i64) {
            let start = utc_datetime(2020, 1, 1, 0);
            let now = start + Duration::milliseconds(offset_ms);
            let stats = compute_stats(Some(start), 15.0, 5.5, 20.0, now);
            prop_assert_eq!(stats.total_seconds(), (offset_ms / 1000) as u64);
            prop_assert!(stats.hours_smoke_free < 24);
            prop_assert!(stats.minutes_smoke_free < 60);
            prop_assert!(stats.seconds_smoke_free < 60);
        }

        #[test]
        fn future_start_is_always_zero(ahead_ms in 1i64..400_000_000_000i64) {
            let now = utc_datetime(2024, 6, 1, 0);
            let start = now + Duration::milliseconds(ahead_ms);
            let stats = compute_stats(Some(start), 20.0, 6.0, 20.0, now);
            prop_assert_eq!(stats, Stats::default());
        }

        #[test]
        fn savings_never_negative(
            offset_ms in 0i64..100_000_000_000i64,
            per_day in -100.0f64..100.0,
            price in -50.0f64..50.0,
            size in -40.0f64..40.0,
        ) {
            let start = utc_datetime(2020, 1, 1, 0);
            let now = start + Duration::milliseconds(offset_ms);
            let stats = compute_stats(Some(start), per_day, price, size, now);
            prop_assert!(stats.money_saved >= 0.0);
        }
    }
}
