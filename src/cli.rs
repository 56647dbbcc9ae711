use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Jiggly Fruitz: salad recommendations for customers and an order board for the kitchen.
#[derive(Parser, Debug)]
#[command(name = "jiggly")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Local order file, used when no Supabase backend is configured.
    #[arg(short, long, default_value = "orders.json")]
    pub file: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fill in preferences and get a salad recommendation.
    Recommend {
        /// Read the preference profile from a JSON file instead of prompting.
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Confirm the order without asking.
        #[arg(short, long)]
        yes: bool,
    },

    /// List submitted orders, newest first.
    Orders,

    /// Mark an order as done.
    Done {
        /// Order id as stored by the backend.
        id: String,
    },

    /// Export the order list to CSV.
    Export {
        /// Output CSV path.
        path: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Recommend {
            profile: None,
            yes: false,
        }
    }
}
