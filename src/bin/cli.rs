// src/bin/cli.rs
use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();
    seat_scrape::cli::run()?;
    Ok(())
}
