//! Quit-attempt state machine.
//!
//! `QuitTracker` owns the user document. Its methods are the only way to
//! mutate it; each one is a complete-or-no-op transformation and returns the
//! events it produced. Reads hand out borrows or cloned snapshots.
//!
//! ## State Transitions
//!
//! ```text
//! NoAttempt --complete_setup--> InAttempt
//! InAttempt --log_relapse-----> InAttempt   (streak days credited to lifetime total)
//! InAttempt --update_settings-> InAttempt   (new last-cigarette date, nothing credited)
//! ```
//!
//! Every operation takes the evaluation instant explicitly. The caller is
//! responsible for calling `refresh()` periodically to keep stats current.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::achievements::{evaluate_achievements, ACHIEVEMENTS};
use crate::events::Event;
use crate::model::{CravingLog, RelapseDetails, RelapseLog, SettingsUpdate, UserData, UserSettings};
use crate::stats::Stats;

/// Whether a smoke-free streak is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptPhase {
    NoAttempt,
    InAttempt { since: DateTime<Utc> },
}

/// Result of one polling pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Refresh {
    pub stats: Stats,
    /// `AchievementUnlocked` events for entries unlocked by this pass.
    pub events: Vec<Event>,
}

impl Refresh {
    pub fn unlocked_any(&self) -> bool {
        !self.events.is_empty()
    }
}

/// Explicit state container for the user document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuitTracker {
    data: UserData,
}

impl QuitTracker {
    /// Wrap a loaded document.
    ///
    /// Documents written before attempts were tracked separately carry only a
    /// last-cigarette date; the current attempt is taken to start there.
    pub fn new(mut data: UserData) -> Self {
        if data.current_attempt_start_date.is_none() {
            if let Some(last) = data.last_cigarette_date {
                debug!(%last, "migrating document without attempt start");
                data.current_attempt_start_date = Some(last);
            }
        }
        Self { data }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn data(&self) -> &UserData {
        &self.data
    }

    pub fn snapshot(&self) -> UserData {
        self.data.clone()
    }

    pub fn into_data(self) -> UserData {
        self.data
    }

    pub fn phase(&self) -> AttemptPhase {
        match self.data.current_attempt_start_date {
            Some(since) => AttemptPhase::InAttempt { since },
            None => AttemptPhase::NoAttempt,
        }
    }

    /// True until first-run setup has recorded a last-cigarette date.
    pub fn needs_setup(&self) -> bool {
        self.data.last_cigarette_date.is_none()
    }

    pub fn stats(&self, now: DateTime<Utc>) -> Stats {
        Stats::for_user(&self.data, now)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start over from first-run settings. Any prior history is discarded.
    pub fn complete_setup(&mut self, settings: UserSettings, now: DateTime<Utc>) -> Vec<Event> {
        let previous_relapses = self.data.relapses.len();
        self.data = UserData::from_settings(settings);
        self.data.main_motivation = self.data.main_motivation.trim().to_string();
        self.data.personal_motivations =
            clean_list(std::mem::take(&mut self.data.personal_motivations));
        info!(
            attempt_start = ?self.data.current_attempt_start_date,
            discarded_relapses = previous_relapses,
            "setup completed"
        );
        vec![Event::SetupCompleted {
            attempt_start: self.data.current_attempt_start_date,
            at: now,
        }]
    }

    /// Merge a partial settings edit.
    ///
    /// A last-cigarette date different from the stored one restarts the
    /// current attempt at that date. The abandoned streak is not added to the
    /// lifetime total; only `log_relapse` does that.
    pub fn update_settings(&mut self, update: SettingsUpdate, now: DateTime<Utc>) -> Vec<Event> {
        if update.is_empty() {
            return Vec::new();
        }
        let mut events = Vec::new();

        if let Some(new_date) = update.last_cigarette_date {
            if self.data.last_cigarette_date != Some(new_date) {
                let previous_start = self.data.current_attempt_start_date;
                self.data.last_cigarette_date = Some(new_date);
                self.data.current_attempt_start_date = Some(new_date);
                info!(?previous_start, new_start = %new_date, "attempt restarted from settings");
                events.push(Event::AttemptRestarted {
                    previous_start,
                    new_start: new_date,
                    at: now,
                });
            }
        }
        if let Some(v) = update.cigarettes_per_day {
            self.data.cigarettes_per_day = v;
        }
        if let Some(v) = update.pack_price {
            self.data.pack_price = v;
        }
        if let Some(v) = update.pack_size {
            self.data.pack_size = v;
        }
        if let Some(text) = update.main_motivation {
            self.data.main_motivation = text.trim().to_string();
        }
        if let Some(list) = update.personal_motivations {
            self.data.personal_motivations = clean_list(list);
        }

        debug!("settings merged");
        events.push(Event::SettingsUpdated { at: now });
        events
    }

    /// Record a relapse at `now` and start a new attempt there.
    ///
    /// Returns `None` and leaves the document untouched when no attempt is in
    /// progress.
    pub fn log_relapse(&mut self, details: RelapseDetails, now: DateTime<Utc>) -> Option<Event> {
        if self.data.current_attempt_start_date.is_none() {
            warn!("relapse ignored: no attempt in progress");
            return None;
        }

        let streak_days = self.stats(now).days_smoke_free;
        let relapse = RelapseLog {
            id: Uuid::new_v4().to_string(),
            timestamp: now,
            reason: non_blank(details.reason),
            trigger: non_blank(details.trigger),
            previous_streak_days: Some(streak_days),
        };
        let relapse_id = relapse.id.clone();

        self.data.total_smoke_free_days_ever += streak_days;
        self.data.last_cigarette_date = Some(now);
        self.data.current_attempt_start_date = Some(now);
        self.data.relapses.push(relapse);

        info!(
            streak_days,
            lifetime_days = self.data.total_smoke_free_days_ever,
            "relapse logged, streak reset"
        );
        Some(Event::RelapseLogged {
            relapse_id,
            previous_streak_days: streak_days,
            total_smoke_free_days_ever: self.data.total_smoke_free_days_ever,
            at: now,
        })
    }

    pub fn log_craving(
        &mut self,
        overcome: bool,
        notes: Option<String>,
        now: DateTime<Utc>,
    ) -> Event {
        let craving = CravingLog {
            id: Uuid::new_v4().to_string(),
            timestamp: now,
            overcome,
            notes: non_blank(notes),
        };
        let craving_id = craving.id.clone();
        self.data.cravings.push(craving);
        debug!(overcome, total = self.data.cravings.len(), "craving logged");
        Event::CravingLogged {
            craving_id,
            overcome,
            at: now,
        }
    }

    /// Append a personal motivation. Blank text is ignored.
    pub fn add_personal_motivation(&mut self, text: &str, now: DateTime<Utc>) -> Option<Event> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.data.personal_motivations.push(text.to_string());
        Some(Event::MotivationAdded {
            index: self.data.personal_motivations.len() - 1,
            text: text.to_string(),
            at: now,
        })
    }

    /// Remove the personal motivation at `index`, keeping the order of the
    /// rest. An out-of-range index changes nothing.
    pub fn remove_personal_motivation(
        &mut self,
        index: usize,
        now: DateTime<Utc>,
    ) -> Option<Event> {
        if index >= self.data.personal_motivations.len() {
            return None;
        }
        let text = self.data.personal_motivations.remove(index);
        Some(Event::MotivationRemoved {
            index,
            text,
            at: now,
        })
    }

    pub fn set_main_motivation(&mut self, text: &str, now: DateTime<Utc>) -> Event {
        self.data.main_motivation = text.trim().to_string();
        Event::MainMotivationSet {
            text: self.data.main_motivation.clone(),
            at: now,
        }
    }

    /// One polling pass: recompute stats and unlock any achievements they
    /// now satisfy.
    pub fn refresh(&mut self, now: DateTime<Utc>) -> Refresh {
        let stats = self.stats(now);
        let events = evaluate_achievements(&mut self.data, &stats, ACHIEVEMENTS)
            .into_iter()
            .map(|a| Event::AchievementUnlocked {
                id: a.id.to_string(),
                name: a.name.to_string(),
                description: a.description.to_string(),
                at: now,
            })
            .collect();
        Refresh { stats, events }
    }
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

fn clean_list(list: Vec<String>) -> Vec<String> {
    list.into_iter().map(Some).filter_map(non_blank).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn utc_datetime(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
    }

    fn set_up(start: DateTime<Utc>) -> QuitTracker {
        let mut tracker = QuitTracker::default();
        tracker.complete_setup(
            UserSettings {
                last_cigarette_date: Some(start),
                cigarettes_per_day: 20.0,
                pack_price: 6.0,
                pack_size: 20.0,
                main_motivation: "My kids".into(),
                personal_motivations: vec![],
            },
            start,
        );
        tracker
    }

    #[test]
    fn default_tracker_needs_setup() {
        let tracker = QuitTracker::default();
        assert!(tracker.needs_setup());
        assert_eq!(tracker.phase(), AttemptPhase::NoAttempt);
        assert_eq!(tracker.stats(Utc::now()), Stats::default());
    }

    #[test]
    fn setup_enters_attempt_with_zero_stats() {
        let now = utc_datetime(2024, 4, 1, 9);
        let tracker = set_up(now);
        assert!(!tracker.needs_setup());
        assert_eq!(tracker.phase(), AttemptPhase::InAttempt { since: now });
        assert_eq!(tracker.stats(now), Stats::default());
    }

    #[test]
    fn complete_setup_resets_existing_document() {
        let start = utc_datetime(2024, 4, 1, 9);
        let mut tracker = set_up(start);
        tracker.log_relapse(RelapseDetails::default(), start + Duration::days(2));
        tracker.log_craving(true, None, start + Duration::days(2));
        tracker.refresh(start + Duration::days(2));
        assert!(!tracker.data().achievements_unlocked.is_empty());

        let events = tracker.complete_setup(
            UserSettings {
                last_cigarette_date: Some(start + Duration::days(3)),
                ..UserSettings::default()
            },
            start + Duration::days(3),
        );
        assert!(matches!(events.as_slice(), [Event::SetupCompleted { .. }]));
        let data = tracker.data();
        assert!(data.relapses.is_empty());
        assert!(data.cravings.is_empty());
        assert!(data.achievements_unlocked.is_empty());
        assert_eq!(data.total_smoke_free_days_ever, 0);
        assert_eq!(
            data.current_attempt_start_date,
            Some(start + Duration::days(3))
        );
    }

    #[test]
    fn relapse_after_three_days_credits_lifetime_total() {
        let start = utc_datetime(2024, 4, 1, 9);
        let mut tracker = set_up(start);
        let relapse_at = start + Duration::days(3);

        let event = tracker
            .log_relapse(
                RelapseDetails {
                    reason: Some("Rough day at work".into()),
                    trigger: Some("Stress".into()),
                },
                relapse_at,
            )
            .expect("attempt in progress");

        let data = tracker.data();
        assert_eq!(data.total_smoke_free_days_ever, 3);
        assert_eq!(data.current_attempt_start_date, Some(relapse_at));
        assert_eq!(data.last_cigarette_date, Some(relapse_at));
        assert_eq!(data.relapses.len(), 1);
        assert_eq!(data.relapses[0].previous_streak_days, Some(3));
        assert_eq!(data.relapses[0].timestamp, relapse_at);
        assert_eq!(data.relapses[0].trigger.as_deref(), Some("Stress"));
        assert!(matches!(
            event,
            Event::RelapseLogged { previous_streak_days: 3, total_smoke_free_days_ever: 3, .. }
        ));
        assert_eq!(tracker.stats(relapse_at), Stats::default());
    }

    #[test]
    fn relapses_accumulate_whole_days_only() {
        let start = utc_datetime(2024, 4, 1, 9);
        let mut tracker = set_up(start);
        let first = start + Duration::days(2) + Duration::hours(23);
        tracker.log_relapse(RelapseDetails::default(), first);
        tracker.log_relapse(RelapseDetails::default(), first + Duration::days(5));
        assert_eq!(tracker.data().total_smoke_free_days_ever, 7);
        assert_eq!(tracker.data().relapses.len(), 2);
    }

    #[test]
    fn relapse_without_attempt_is_noop() {
        let mut tracker = QuitTracker::default();
        let before = tracker.snapshot();
        let event = tracker.log_relapse(RelapseDetails::default(), Utc::now());
        assert!(event.is_none());
        assert_eq!(tracker.snapshot(), before);
    }

    #[test]
    fn blank_relapse_details_are_dropped() {
        let start = utc_datetime(2024, 4, 1, 9);
        let mut tracker = set_up(start);
        tracker.log_relapse(
            RelapseDetails {
                reason: Some("   ".into()),
                trigger: Some(String::new()),
            },
            start + Duration::hours(1),
        );
        let relapse = &tracker.data().relapses[0];
        assert!(relapse.reason.is_none());
        assert!(relapse.trigger.is_none());
        assert_eq!(relapse.previous_streak_days, Some(0));
    }

    #[test]
    fn changing_last_cigarette_restarts_without_credit() {
        let start = utc_datetime(2024, 4, 1, 9);
        let mut tracker = set_up(start);
        let new_date = start + Duration::days(4);

        let events = tracker.update_settings(
            SettingsUpdate {
                last_cigarette_date: Some(new_date),
                ..SettingsUpdate::default()
            },
            start + Duration::days(5),
        );

        assert!(matches!(
            events[0],
            Event::AttemptRestarted { previous_start: Some(s), .. } if s == start
        ));
        assert_eq!(tracker.data().current_attempt_start_date, Some(new_date));
        assert_eq!(tracker.data().total_smoke_free_days_ever, 0);
        assert!(tracker.data().relapses.is_empty());
    }

    #[test]
    fn same_last_cigarette_keeps_attempt() {
        let start = utc_datetime(2024, 4, 1, 9);
        let mut tracker = set_up(start);
        let events = tracker.update_settings(
            SettingsUpdate {
                last_cigarette_date: Some(start),
                pack_price: Some(7.5),
                ..SettingsUpdate::default()
            },
            start + Duration::days(1),
        );
        assert!(matches!(events.as_slice(), [Event::SettingsUpdated { .. }]));
        assert_eq!(tracker.data().current_attempt_start_date, Some(start));
        assert_eq!(tracker.data().pack_price, 7.5);
    }

    #[test]
    fn empty_update_changes_nothing() {
        let start = utc_datetime(2024, 4, 1, 9);
        let mut tracker = set_up(start);
        let before = tracker.snapshot();
        let events = tracker.update_settings(SettingsUpdate::default(), start);
        assert!(events.is_empty());
        assert_eq!(tracker.snapshot(), before);
    }

    #[test]
    fn craving_log_appends_only() {
        let start = utc_datetime(2024, 4, 1, 9);
        let mut tracker = set_up(start);
        let at = start + Duration::hours(2);
        let event = tracker.log_craving(false, Some("after coffee".into()), at);

        let data = tracker.data();
        assert_eq!(data.cravings.len(), 1);
        assert_eq!(data.cravings[0].timestamp, at);
        assert!(!data.cravings[0].overcome);
        assert_eq!(data.cravings[0].notes.as_deref(), Some("after coffee"));
        assert_eq!(data.current_attempt_start_date, Some(start));
        let expected = Event::CravingLogged {
            craving_id: data.cravings[0].id.clone(),
            overcome: false,
            at,
        };
        assert_eq!(event, expected);
    }

    #[test]
    fn remove_first_of_two_motivations_keeps_second() {
        let now = Utc::now();
        let mut tracker = QuitTracker::default();
        tracker.add_personal_motivation("Travel without worry", now);
        tracker.add_personal_motivation("Save money", now);
        tracker.remove_personal_motivation(0, now);
        assert_eq!(tracker.data().personal_motivations, ["Save money"]);
    }

    #[test]
    fn blank_motivation_is_ignored() {
        let mut tracker = QuitTracker::default();
        let event = tracker.add_personal_motivation("   \t", Utc::now());
        assert!(event.is_none());
        assert!(tracker.data().personal_motivations.is_empty());
    }

    #[test]
    fn out_of_range_removal_is_noop() {
        let now = Utc::now();
        let mut tracker = QuitTracker::default();
        tracker.add_personal_motivation("Breathe", now);
        assert!(tracker.remove_personal_motivation(3, now).is_none());
        assert_eq!(tracker.data().personal_motivations.len(), 1);
    }

    #[test]
    fn setup_trims_motivations() {
        let start = utc_datetime(2024, 4, 1, 9);
        let mut tracker = QuitTracker::default();
        tracker.complete_setup(
            UserSettings {
                last_cigarette_date: Some(start),
                main_motivation: "   ".into(),
                personal_motivations: vec![" Run again ".into(), "".into()],
                ..UserSettings::default()
            },
            start,
        );
        assert_eq!(tracker.data().main_motivation, "");
        assert_eq!(tracker.data().personal_motivations, ["Run again"]);

        tracker.data.personal_motivations.clear();
        let refresh = tracker.refresh(start);
        assert!(!refresh.unlocked_any());
    }

    #[test]
    fn main_motivation_is_trimmed() {
        let mut tracker = QuitTracker::default();
        tracker.set_main_motivation("  For my health  ", Utc::now());
        assert_eq!(tracker.data().main_motivation, "For my health");
    }

    #[test]
    fn refresh_unlocks_once_per_achievement() {
        let start = utc_datetime(2024, 4, 1, 9);
        let mut tracker = set_up(start);

        let at = start + Duration::days(1);
        let first = tracker.refresh(at);
        let ids: Vec<_> = first
            .events
            .iter()
            .filter_map(|e| match e {
                Event::AchievementUnlocked { id, .. } => Some(id.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(ids, vec!["ach_1_day", "ach_motivation_set"]);
        assert!(first.events.iter().all(|e| e.at() == at));
        assert_eq!(first.stats.cigarettes_not_smoked, 20);

        let second = tracker.refresh(at + Duration::seconds(1));
        assert!(!second.unlocked_any());
    }

    #[test]
    fn loaded_document_without_attempt_start_is_migrated() {
        let last = utc_datetime(2024, 1, 1, 0);
        let tracker = QuitTracker::new(UserData {
            last_cigarette_date: Some(last),
            ..UserData::default()
        });
        assert_eq!(tracker.phase(), AttemptPhase::InAttempt { since: last });
    }
}
