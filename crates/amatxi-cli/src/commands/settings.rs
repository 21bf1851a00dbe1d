use amatxi_core::validation::validate_settings;
use amatxi_core::{Event, SettingsUpdate};
use chrono::{DateTime, Utc};
use clap::Subcommand;

use super::session::{announce_unlocks, CliResult, Session};
use crate::format;
use crate::input::parse_when;

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Show the current habit settings
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Change one or more settings
    Set {
        /// New last-cigarette date; restarts the current attempt
        #[arg(long, value_parser = parse_when)]
        last_cigarette: Option<DateTime<Utc>>,
        #[arg(long)]
        per_day: Option<f64>,
        #[arg(long)]
        pack_price: Option<f64>,
        #[arg(long)]
        pack_size: Option<f64>,
    },
}

pub fn run(action: SettingsAction) -> CliResult {
    match action {
        SettingsAction::Show { json } => {
            let session = Session::open_profile()?;
            let settings = session.tracker.data().settings();
            if json {
                println!("{}", serde_json::to_string_pretty(&settings)?);
                return Ok(());
            }
            if let Some(date) = settings.last_cigarette_date {
                println!("Last cigarette:   {}", format::date_time(date));
            }
            println!("Cigarettes/day:   {}", settings.cigarettes_per_day);
            println!("Pack price:       {:.2}", settings.pack_price);
            println!("Pack size:        {}", settings.pack_size);
            println!("Main motivation:  {}", settings.main_motivation);
        }
        SettingsAction::Set {
            last_cigarette,
            per_day,
            pack_price,
            pack_size,
        } => {
            let now = Utc::now();
            let update = SettingsUpdate {
                last_cigarette_date: last_cigarette,
                cigarettes_per_day: per_day,
                pack_price,
                pack_size,
                ..SettingsUpdate::default()
            };
            if update.is_empty() {
                println!("nothing to change");
                return Ok(());
            }
            validate_settings(&update, now)?;

            let mut session = Session::open_profile()?;
            let events = session.tracker.update_settings(update, now);
            for event in &events {
                if matches!(event, Event::AttemptRestarted { .. }) {
                    println!("Attempt restarted; the previous streak is not credited.");
                }
            }
            let refresh = session.tracker.refresh(now);
            session.save()?;
            println!("settings updated");
            announce_unlocks(&refresh.events);
        }
    }
    Ok(())
}
