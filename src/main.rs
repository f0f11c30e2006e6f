use anyhow::Context;
use clap::Parser;
use drift::commands::sync;
use drift::config::Cli;
use drift::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::try_from(cli)?;

    let stats = sync::run(&config).context("sync process failed")?;
    println!("{}", sync::format_summary(&stats));

    Ok(())
}
