use std::time::Duration;

use clap::Parser;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};
use lib_judge::prelude::*;

fn main() -> anyhow::Result<()> {
    // A .env file is optional; nothing here depends on one existing.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let _logger = Logger::try_with_env_or_str(cli.log_level.clone().unwrap_or_else(|| "info".into()).as_str())?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(match cfg!(debug_assertions) {
            true => AdaptiveFormat::WithThread,
            _ => AdaptiveFormat::Default,
        })
        .set_palette("b196;208;195;111;67".to_owned())
        .start()?;

    let map_data = std::fs::read_to_string(&cli.map)
        .with_context(|| format!("reading map file {}", cli.map.display()))?;
    let map_file: MapFile = serde_json::from_str(&map_data)
        .with_context(|| format!("parsing map file {}", cli.map.display()))?;

    let judge = Judge::initialize(&map_file, cli.seed);
    let channel: Box<dyn AgentChannel> = Box::new(JudgeProcessChannel::new(cli.agents.clone()));
    let ledger: Box<dyn LedgerSink> = Box::new(JsonLedgerSink::new(cli.output.clone()));
    let timeout = Duration::from_secs(cli.timeout_secs);

    Runner::new(judge, channel, ledger, timeout).run()
}
