use anyhow::Result;
use clap::Parser;
use tracing::info;

use sim::{build_sim, load_config, Args};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let cfg = load_config(args.config.as_deref())?;
    info!(?cfg, "Sim config loaded");

    let ticks = args.ticks.unwrap_or(cfg.ticks);
    let mut sim = build_sim(cfg)?;
    let report = sim.run(ticks, args.log_every);
    info!(?report, "Run finished");
    Ok(())
}
