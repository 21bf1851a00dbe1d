use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod format;
mod input;

#[derive(Parser)]
#[command(name = "amatxi", version, about = "Amatxi quit-smoking tracker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// First-run setup (starts a fresh profile)
    Setup(commands::setup::SetupArgs),
    /// Current smoke-free time and savings
    Status {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Habit settings
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// Relapse logging
    Relapse {
        #[command(subcommand)]
        action: commands::relapse::RelapseAction,
    },
    /// Craving logging and quick tips
    Craving {
        #[command(subcommand)]
        action: commands::craving::CravingAction,
    },
    /// Personal motivations
    Motivation {
        #[command(subcommand)]
        action: commands::motivation::MotivationAction,
    },
    /// Achievement list
    Achievements {
        #[arg(long)]
        json: bool,
    },
    /// Health recovery milestones
    Health {
        #[arg(long)]
        json: bool,
    },
    /// Attempts and relapses so far
    History {
        #[arg(long)]
        json: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Keep refreshing the smoke-free counter
    Watch {
        /// Stop after this many refreshes
        #[arg(long)]
        ticks: Option<u64>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Setup(args) => commands::setup::run(args),
        Commands::Status { json } => commands::status::run(json),
        Commands::Settings { action } => commands::settings::run(action),
        Commands::Relapse { action } => commands::relapse::run(action),
        Commands::Craving { action } => commands::craving::run(action),
        Commands::Motivation { action } => commands::motivation::run(action),
        Commands::Achievements { json } => commands::progress::achievements(json),
        Commands::Health { json } => commands::progress::health(json),
        Commands::History { json } => commands::progress::history(json),
        Commands::Config { action } => commands::config::run(action),
        Commands::Watch { ticks } => commands::watch::run(ticks),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
