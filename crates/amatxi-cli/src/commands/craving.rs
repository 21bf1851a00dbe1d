use amatxi_core::craving::{overcome_today, random_tip};
use chrono::Utc;
use clap::Subcommand;

use super::session::{announce_unlocks, CliResult, Session};

#[derive(Subcommand)]
pub enum CravingAction {
    /// Record a craving (overcome unless --not-overcome)
    Log {
        /// The craving won this time
        #[arg(long)]
        not_overcome: bool,
        /// Optional notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// A quick tip to ride out a craving
    Tip,
    /// Cravings overcome today
    Today,
}

pub fn run(action: CravingAction) -> CliResult {
    match action {
        CravingAction::Log {
            not_overcome,
            notes,
        } => {
            let now = Utc::now();
            let mut session = Session::open_profile()?;
            session.tracker.log_craving(!not_overcome, notes, now);
            let refresh = session.tracker.refresh(now);
            session.save()?;
            if not_overcome {
                println!("Craving logged. Tomorrow is another chance.");
            } else {
                println!(
                    "Well done! Cravings overcome today: {}",
                    overcome_today(session.tracker.data(), now)
                );
            }
            announce_unlocks(&refresh.events);
        }
        CravingAction::Tip => {
            println!("{}", random_tip(&mut rand::thread_rng()));
        }
        CravingAction::Today => {
            let session = Session::open_profile()?;
            println!("{}", overcome_today(session.tracker.data(), Utc::now()));
        }
    }
    Ok(())
}
