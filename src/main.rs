mod cli;
mod config;
mod domain;
mod error;
mod infra;
mod logging;
mod workflows;

use anyhow::{Context, Result};
use clap::Parser;

use cli::Cli;
use config::Config;
use workflows::pipeline;

fn main() {
    let cli = Cli::parse();
    logging::init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(&cli)?;

    let summary = match pipeline::run(&config) {
        Ok(summary) => summary,
        Err(e) if e.is_fetch() => {
            return Err(e).context("could not retrieve the listing page; no CSV was written")
        }
        Err(e) => return Err(e.into()),
    };

    if summary.skipped > 0 {
        println!(
            "Skipped {} of {} entries without a title",
            summary.skipped, summary.blocks
        );
    }
    println!(
        "Wrote {} series to {}",
        summary.records,
        summary.output_path.display()
    );

    Ok(())
}
