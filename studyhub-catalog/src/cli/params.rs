use std::path::PathBuf;

use clap::{Parser, Subcommand};
use studyhub_model::Difficulty;

#[derive(Parser, Debug)]
#[command(name = "studyhub", about = "Browse and export the study topic catalog")]
pub struct Params {
    /// TOML config file.
    #[arg(long, env = "STUDYHUB_CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON snapshot to serve instead of the built-in topics. Overrides the config file.
    #[arg(long, env = "STUDYHUB_CATALOG")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// One line per topic, in registration order.
    List {
        /// Only topics at this level (beginner, intermediate, advanced).
        #[arg(long, value_parser = parse_difficulty)]
        difficulty: Option<Difficulty>,
    },
    /// Print a single topic as JSON.
    Show { id: String },
    /// Write the whole catalog as a JSON snapshot.
    Export {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Report data-quality findings; exits non-zero if there are any.
    Audit,
}

fn parse_difficulty(raw: &str) -> Result<Difficulty, String> {
    raw.parse::<Difficulty>().map_err(|e| e.to_string())
}
