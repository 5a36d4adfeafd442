use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tempus", version, about = "Temporal awareness for working sessions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Base calendar generation and queries
    Calendar {
        #[command(subcommand)]
        action: commands::calendar::CalendarAction,
    },
    /// Session time awareness: wall-clock vs active uptime
    Awareness {
        /// Machine-readable output
        #[arg(long)]
        json: bool,
    },
    /// Full four-dimension temporal context
    Context {
        /// Machine-readable output
        #[arg(long)]
        json: bool,
    },
    /// Planner inspection
    Planner {
        #[command(subcommand)]
        action: commands::planner::PlannerAction,
    },
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Calendar { action } => commands::calendar::run(action),
        Commands::Awareness { json } => commands::awareness::run(json),
        Commands::Context { json } => commands::context::run(json),
        Commands::Planner { action } => commands::planner::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(e.exit_code());
    }
}
