// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ctestmap binary entry point.

use clap::Parser;

use ctestmap::cli::Cli;
use ctestmap::output::print_error;
use ctestmap::run::run;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Err(e) = run(&cli).await {
        print_error(e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
