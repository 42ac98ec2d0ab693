//! lockboard - Entry Point
//!
//! Binary entry point for the `lockboard` command line tool. Lives in the
//! facade crate next to the library it drives.

use clap::Parser;
use lockboard::cli::{Cli, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli)?;
    Ok(())
}
