use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "flight-sim")]
#[command(about = "Headless fixed-tick flight controller run", long_about = None)]
pub struct Args {
    /// TOML run description; a built-in demo run is used when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Override the number of ticks to simulate
    #[arg(long)]
    pub ticks: Option<u64>,
    /// Log body state every N ticks (0 disables)
    #[arg(long, default_value_t = 50)]
    pub log_every: u64,
}
