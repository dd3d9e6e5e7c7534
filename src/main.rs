//! wheelwright - wheel discovery and installation
//!
//! A command line tool that finds Python wheels in directory trees and tar
//! archives (nested archives included) and installs them with pip.

use clap::Parser;

mod archive;
mod cli;
mod commands;
mod discovery;
mod error;
mod extract;
mod installer;
mod progress;
mod staging;
mod ui;

#[cfg(test)]
mod test_fixtures;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let code = match commands::run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    std::process::exit(code);
}
