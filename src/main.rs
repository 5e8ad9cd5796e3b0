use anyhow::{Context, Result};
use clap::Parser;

use modthree::cli::commands::ComputeCommand;
use modthree::cli::Cli;
use modthree::{init_config, init_mod_three, init_telemetry, modthree::shared};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = init_config()?;
    let level = if cli.verbose { "debug" } else { config.logging.level.as_str() };
    init_telemetry(level, config.logging.json)?;
    for warning in &config.warnings {
        tracing::warn!("{}", warning);
    }

    // The table is fixed; failing to build it is a defect, so stop here.
    init_mod_three().context("failed to initialize the mod-three automaton")?;
    let machine = shared()?;

    let mut stdout = std::io::stdout().lock();
    ComputeCommand::new(machine)
        .with_format(cli.format)
        .execute(&cli.binary, &mut stdout)?;

    Ok(())
}
