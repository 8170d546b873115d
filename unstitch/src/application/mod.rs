pub mod handlers;

use crate::presentation::cli::Cli;
use clap::Parser;
use std::process::ExitCode;
use unstitch_core::error::Result;

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    handlers::handle_unpack(cli)
}
