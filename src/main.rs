// src/main.rs
use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    if let Err(e) = dz_scrape::cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    Ok(())
}
