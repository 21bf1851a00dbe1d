use amatxi_core::craving::{resolve_trigger, OTHER_TRIGGER, RELAPSE_TRIGGERS};
use amatxi_core::{Event, RelapseDetails};
use chrono::Utc;
use clap::Subcommand;

use super::session::{CliResult, Session};

#[derive(Subcommand)]
pub enum RelapseAction {
    /// Record a relapse and start a new attempt now
    Log {
        /// What happened, in your own words
        #[arg(long)]
        reason: Option<String>,
        /// One of the listed triggers (see `amatxi relapse triggers`)
        #[arg(long)]
        trigger: Option<String>,
        /// Your own trigger, used when --trigger is "Other"
        #[arg(long)]
        custom_trigger: Option<String>,
    },
    /// List the known relapse triggers
    Triggers,
}

pub fn run(action: RelapseAction) -> CliResult {
    match action {
        RelapseAction::Log {
            reason,
            trigger,
            custom_trigger,
        } => {
            let trigger = resolve_trigger(trigger.as_deref(), custom_trigger.as_deref());
            let mut session = Session::open_profile()?;
            let details = RelapseDetails { reason, trigger };
            match session.tracker.log_relapse(details, Utc::now()) {
                Some(Event::RelapseLogged {
                    previous_streak_days,
                    total_smoke_free_days_ever,
                    ..
                }) => {
                    session.save()?;
                    println!(
                        "Relapse logged after {previous_streak_days} day(s). \
                         Lifetime smoke-free days: {total_smoke_free_days_ever}."
                    );
                    println!("A slip is not a failure. Your new attempt starts now.");
                }
                _ => println!("no attempt in progress; nothing logged"),
            }
        }
        RelapseAction::Triggers => {
            for trigger in RELAPSE_TRIGGERS {
                if *trigger == OTHER_TRIGGER {
                    println!("{trigger} (pass --custom-trigger)");
                } else {
                    println!("{trigger}");
                }
            }
        }
    }
    Ok(())
}
