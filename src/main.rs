//! This crate contains the source code for the binary of the maze solver mazetrace.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use mazetrace::{logging, Config};

fn main() -> Result<()> {
    install()?;

    let config = Config::parse();
    logging::init(config.log_file.as_deref())?;
    mazetrace::run(&config)
}
