//! roombook - book a shared meeting room from your terminal
//!
//! Entry point for the roombook application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use roombook::cli::{Cli, Commands};
use roombook::config::Settings;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Parse CLI arguments; no subcommand opens the booking form
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Completions { shell } => {
            roombook::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            // Execute command
            match command {
                Commands::Tui => {
                    roombook::tui::run(&settings)?;
                }
                Commands::List { json } => {
                    roombook::cli::commands::list_meetings(&settings, json)?;
                }
                Commands::Book {
                    booked_by,
                    supplier,
                    date,
                    time,
                } => {
                    roombook::cli::commands::book_meeting(
                        &settings, booked_by, supplier, date, time,
                    )?;
                }
                Commands::Delete { id } => {
                    roombook::cli::commands::delete_meeting(&settings, id)?;
                }
                Commands::Edit {
                    id,
                    booked_by,
                    supplier,
                    date,
                    time,
                } => {
                    roombook::cli::commands::edit_meeting(
                        &settings, id, booked_by, supplier, date, time,
                    )?;
                }
                Commands::Config(config_cmd) => {
                    roombook::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
