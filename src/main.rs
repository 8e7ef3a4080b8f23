//! upver CLI entry point

use clap::Parser;
use std::process;
use upver::cli::args::Cli;

fn main() {
    let cli = Cli::parse();
    upver::cli::common::init_logging();

    let exit_code = upver::cli::bump::run_bump(cli.command.bump_kind(), cli.color);

    process::exit(exit_code);
}
