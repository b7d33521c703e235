// src/bin/cli.rs
use color_eyre::eyre::eyre;

use loto_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    cli::run().map_err(|e| eyre!("{e}"))
}
