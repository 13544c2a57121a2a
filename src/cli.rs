//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use crate::config;


/// Habit Garden - habit tracking with streaks, coins, and a garden shop
#[derive(Parser)]
#[command(name = "hbg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Database file (default: ~/.habit-garden/habits.db)
    #[arg(long, env = "HABIT_GARDEN_DB", global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}


#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server with the JSON API
    Serve {
        /// Address to bind
        #[arg(long, default_value = config::DEFAULT_HOST)]
        host: String,

        /// Port to bind
        #[arg(long, default_value_t = config::DEFAULT_PORT)]
        port: u16,

        /// Skip seeding starter habits and the item catalog
        #[arg(long)]
        no_seed: bool,
    },

    /// Create the database schema and seed starter data
    Init,

    /// Add a new habit
    Add {
        /// Habit name (1-80 characters)
        name: String,

        /// Difficulty: easy, medium, or hard
        #[arg(short, long, default_value = "medium")]
        difficulty: String,

        /// Due only on these weekdays (comma-separated, e.g. mon,wed,fri)
        #[arg(long)]
        days: Option<String>,
    },

    /// List habits with today's due and done markers
    List {
        /// Include archived habits
        #[arg(long)]
        all: bool,
    },

    /// Mark a habit complete for a date (default: today)
    Done {
        habit_id: i64,

        /// Date in YYYY-MM-DD format
        #[arg(long)]
        date: Option<String>,
    },

    /// Remove a completion for a date (default: today)
    Undo {
        habit_id: i64,

        /// Date in YYYY-MM-DD format
        #[arg(long)]
        date: Option<String>,
    },

    /// Rename or archive a habit
    Edit {
        habit_id: i64,

        /// New habit name
        #[arg(long)]
        rename: Option<String>,

        /// Archive the habit (hidden from listings and streaks)
        #[arg(long)]
        archive: bool,

        /// Restore an archived habit
        #[arg(long)]
        unarchive: bool,
    },

    /// Show streaks, totals, and the coin balance
    Stats,

    /// Show the garden shop, or buy an item
    Shop {
        /// Buy the item with this id
        #[arg(long)]
        buy: Option<i64>,
    },
}


/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let db_path = cli.db.unwrap_or_else(config::default_db_path);

    match cli.command {
        Some(Commands::Serve { host, port, no_seed }) => {
            commands::serve::run(db_path, &host, port, no_seed)
        }
        Some(Commands::Init) => commands::init::run(db_path),
        Some(Commands::Add { name, difficulty, days }) => {
            commands::add::run(db_path, &name, &difficulty, days.as_deref())
        }
        Some(Commands::List { all }) => commands::list::run(db_path, all),
        Some(Commands::Done { habit_id, date }) => {
            commands::complete::run_done(db_path, habit_id, date.as_deref())
        }
        Some(Commands::Undo { habit_id, date }) => {
            commands::complete::run_undo(db_path, habit_id, date.as_deref())
        }
        Some(Commands::Edit { habit_id, rename, archive, unarchive }) => {
            commands::edit::run(db_path, habit_id, rename.as_deref(), archive, unarchive)
        }
        Some(Commands::Stats) => commands::stats::run(db_path),
        Some(Commands::Shop { buy }) => commands::shop::run(db_path, buy),
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
