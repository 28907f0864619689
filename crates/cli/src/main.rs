//! Employee Roster CLI - interactive menu over an in-memory roster

mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use logging::LogFormat;
use roster_core::application::Session;
use roster_core::domain::Roster;
use roster_infra_terminal::{ListingStyle, TerminalConsole};
use std::io::IsTerminal;
use tracing::info;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Employee Roster - manage part-time staff and managers", long_about = None)]
#[command(version)]
struct Cli {
    /// Listing style: tsv, table or json
    #[arg(long, env = "ROSTER_STYLE", default_value = "tsv")]
    style: ListingStyle,

    /// Never clear the screen before a listing
    #[arg(long, env = "ROSTER_NO_CLEAR")]
    no_clear: bool,

    /// Start with an empty roster instead of the three sample employees
    #[arg(long, env = "ROSTER_NO_SEED")]
    no_seed: bool,

    /// Log output format
    #[arg(long, env = "ROSTER_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    /// Write logs to this file instead of stderr (`~` is expanded)
    #[arg(long, env = "ROSTER_LOG_FILE")]
    log_file: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Initialize logging
    let _log_guard = logging::init_logging(cli.log_format, cli.log_file.as_deref())?;
    info!(style = %cli.style, seeded = !cli.no_seed, "Employee Roster v{} starting", VERSION);

    // 2. Build the roster
    let roster = if cli.no_seed {
        Roster::new()
    } else {
        Roster::seeded()
    };

    // 3. Wire the terminal console
    let stdout = std::io::stdout();
    let clear_screen = !cli.no_clear && stdout.is_terminal();
    let console = TerminalConsole::new(std::io::stdin().lock(), stdout)
        .with_style(cli.style)
        .with_clear_screen(clear_screen);

    // 4. Run until the operator closes input
    let mut session = Session::new(roster, console);
    session.run().context("Roster session failed")?;

    info!(employees = session.roster().len(), "Shutdown complete.");
    Ok(())
}
