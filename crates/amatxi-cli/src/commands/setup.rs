use amatxi_core::model::{DEFAULT_CIGARETTES_PER_DAY, DEFAULT_PACK_PRICE, DEFAULT_PACK_SIZE};
use amatxi_core::validation::validate_setup;
use amatxi_core::UserSettings;
use chrono::Utc;
use clap::Args;

use super::session::{announce_unlocks, CliResult, Session};
use crate::input::parse_when;

#[derive(Args)]
pub struct SetupArgs {
    /// When you smoked your last cigarette (default: now)
    #[arg(long, value_parser = parse_when)]
    last_cigarette: Option<chrono::DateTime<Utc>>,
    /// Cigarettes smoked per day (approx.)
    #[arg(long, default_value_t = DEFAULT_CIGARETTES_PER_DAY)]
    per_day: f64,
    /// Price of one pack
    #[arg(long, default_value_t = DEFAULT_PACK_PRICE)]
    pack_price: f64,
    /// Cigarettes per pack
    #[arg(long, default_value_t = DEFAULT_PACK_SIZE)]
    pack_size: f64,
    /// Your main reason for quitting
    #[arg(long)]
    motivation: String,
    /// Additional personal reasons (repeatable)
    #[arg(long)]
    personal: Vec<String>,
}

pub fn run(args: SetupArgs) -> CliResult {
    let now = Utc::now();
    let settings = UserSettings {
        last_cigarette_date: Some(args.last_cigarette.unwrap_or(now)),
        cigarettes_per_day: args.per_day,
        pack_price: args.pack_price,
        pack_size: args.pack_size,
        main_motivation: args.motivation.trim().to_string(),
        personal_motivations: args.personal,
    };
    validate_setup(&settings, now)?;

    let mut session = Session::open()?;
    if !session.tracker.needs_setup() {
        println!("Existing profile replaced; previous history discarded.");
    }
    session.tracker.complete_setup(settings, now);
    let refresh = session.tracker.refresh(now);
    session.save()?;

    println!("Profile created. Every smoke-free minute counts from here.");
    announce_unlocks(&refresh.events);
    Ok(())
}
