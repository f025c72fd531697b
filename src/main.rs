//! favicon-gen - renders the Editaliza favicon set
//!
//! Writes seven PNG favicons into the site's public directory:
//! - Letter icons: a white "E" on a rounded brand-blue square
//! - Logo icons: the brand diamond, or a blue disc with an "E" at 16px
//!
//! Takes no arguments. Set `RUST_LOG=debug` to see font probing.

mod driver;
mod error;
mod font;
mod icon;
mod logging;

use std::path::Path;

use anyhow::Context;

use font::FontSet;

mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const UNEXPECTED_FAILURE: i32 = 1;
}

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    if let Err(e) = logging::init() {
        eprintln!("Failed to initialize logging: {}", e);
        return exit_codes::UNEXPECTED_FAILURE;
    }

    match generate(Path::new(driver::OUTPUT_DIR)) {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_codes::UNEXPECTED_FAILURE
        }
    }
}

fn generate(out_dir: &Path) -> anyhow::Result<()> {
    tracing::info!("Writing favicons to {}", out_dir.display());

    driver::generate_all(out_dir, &FontSet::system())
        .with_context(|| format!("Failed to generate favicons in {}", out_dir.display()))?;

    println!("{}", driver::summary());
    Ok(())
}
