use std::path::PathBuf;

use clap::Parser;

use crate::world::consts::{DEFAULT_SEED, DEFAULT_TIMEOUT_SECS};

/// Command-line surface for the judge binary.
#[derive(Clone, Debug, Parser)]
#[command(name = "judge", about = "Referee for the three-player hex-flotilla contest")]
pub struct Cli {
    /// Path to the map JSON file.
    #[arg(long)]
    pub map: PathBuf,

    /// Paths to the three agent executables, in team order.
    #[arg(long, num_args = 3)]
    pub agents: Vec<PathBuf>,

    /// Output path for the ledger.
    #[arg(long, default_value = "./data/logs/final_results.json")]
    pub output: PathBuf,

    /// RNG seed. Fixed by default so a bare invocation stays reproducible.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Per-agent timeout, in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    #[arg(short, long)]
    pub log_level: Option<String>,
}
