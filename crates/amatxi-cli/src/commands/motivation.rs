use chrono::Utc;
use clap::Subcommand;

use super::session::{announce_unlocks, CliResult, Session};

#[derive(Subcommand)]
pub enum MotivationAction {
    /// Show the main and personal motivations
    List,
    /// Add a personal motivation
    Add { text: String },
    /// Remove a personal motivation by its number in `list`
    Remove { number: usize },
    /// Replace the main motivation
    Main { text: String },
}

pub fn run(action: MotivationAction) -> CliResult {
    let now = Utc::now();
    let mut session = Session::open_profile()?;
    match action {
        MotivationAction::List => {
            let data = session.tracker.data();
            println!("Main: {}", data.main_motivation);
            for (i, text) in data.personal_motivations.iter().enumerate() {
                println!("{:>3}. {text}", i + 1);
            }
            return Ok(());
        }
        MotivationAction::Add { text } => {
            let added = session.tracker.add_personal_motivation(&text, now);
            if added.is_none() {
                return Err("motivation text is empty".into());
            }
            println!("added");
        }
        MotivationAction::Remove { number } => {
            let removed = match number.checked_sub(1) {
                Some(index) => session.tracker.remove_personal_motivation(index, now),
                None => None,
            };
            if removed.is_none() {
                return Err(format!("no motivation number {number}").into());
            }
            println!("removed");
        }
        MotivationAction::Main { text } => {
            session.tracker.set_main_motivation(&text, now);
            println!("main motivation updated");
        }
    }
    let refresh = session.tracker.refresh(now);
    session.save()?;
    announce_unlocks(&refresh.events);
    Ok(())
}
