//! frontdesk CLI binary.

use anyhow::Context;
use clap::Parser;
use frontdesk::cli::{FrontdeskArgs, execute_command, resolve_config};
use frontdesk::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let args = FrontdeskArgs::parse();

    let config = resolve_config(&args).context("failed to load configuration")?;
    init_tracing(&config.logging)?;

    execute_command(args, &config)?;
    Ok(())
}
