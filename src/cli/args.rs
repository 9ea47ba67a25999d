//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// roombook - book a shared meeting room from your terminal
#[derive(Parser, Debug)]
#[command(name = "roombook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Launches the booking form when no subcommand is given
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the interactive booking form
    Tui,

    /// List all bookings, most recent date first
    List {
        /// Emit the listing as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Book the meeting room without opening the form
    Book {
        /// Who the room is booked by
        #[arg(short, long)]
        booked_by: String,

        /// Supplier the meeting is with
        #[arg(short, long)]
        supplier: String,

        /// Meeting date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Meeting time (HH:MM)
        #[arg(short, long)]
        time: String,
    },

    /// Delete a booking by id
    Delete {
        /// Booking id as shown in the listing
        id: i64,
    },

    /// Rewrite a booking by id with new field values
    Edit {
        /// Booking id as shown in the listing
        id: i64,

        /// Who the room is booked by
        #[arg(short, long)]
        booked_by: String,

        /// Supplier the meeting is with
        #[arg(short, long)]
        supplier: String,

        /// Meeting date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Meeting time (HH:MM)
        #[arg(short, long)]
        time: String,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
