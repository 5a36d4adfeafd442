use chrono::Datelike;
use clap::Subcommand;
use tempus_core::planner::match_current_activity;
use tempus_core::{Clock, Config, DataPaths, Planner, SessionState, SystemClock, TimeBlock};

use super::CommandError;

#[derive(Subcommand)]
pub enum PlannerAction {
    /// Show the owner's current block and today's patterns
    Show {
        /// Planner owner (default: session user)
        #[arg(long)]
        owner: Option<String>,
        /// Machine-readable output
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: PlannerAction) -> Result<(), CommandError> {
    let paths = DataPaths::discover()?;

    match action {
        PlannerAction::Show { owner, json } => {
            let owner = resolve_owner(&paths, owner)?;
            let planner = Planner::load(&paths, &owner)?;

            let now = SystemClock.now();
            let matched = match_current_activity(now, &planner);
            let today = planner.recurring_patterns.weekly_for(now.weekday());

            if json {
                let out = serde_json::json!({
                    "owner": planner.owner,
                    "current": matched,
                    "daily": planner.recurring_patterns.daily,
                    "today": today,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("Planner for {}", planner.owner);
                println!("now: {} ({})", matched.description, matched.kind);
                print_blocks("daily patterns", &planner.recurring_patterns.daily);
                print_blocks("today's patterns", today);
            }
        }
    }
    Ok(())
}

fn resolve_owner(paths: &DataPaths, owner: Option<String>) -> Result<String, CommandError> {
    if let Some(owner) = owner {
        return Ok(owner);
    }
    if let Ok(state) = SessionState::read(paths) {
        return Ok(state.user_id);
    }
    if let Some(owner) = Config::load_or_default(paths).planner.default_owner {
        return Ok(owner);
    }
    Err(CommandError::usage(
        "no owner: pass --owner, start a session, or set planner.default_owner",
    ))
}

fn print_blocks(heading: &str, blocks: &[TimeBlock]) {
    if blocks.is_empty() {
        return;
    }
    println!("{heading}:");
    for block in blocks {
        println!(
            "  {}-{} {} ({})",
            block.start, block.end, block.description, block.kind
        );
    }
}

