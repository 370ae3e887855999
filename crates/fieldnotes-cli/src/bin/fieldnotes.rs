//! Fieldnotes CLI Binary Entry Point

use clap::Parser;
use fieldnotes_cli::Cli;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = fieldnotes_cli::run(cli) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
