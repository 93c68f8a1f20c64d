// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Result dump checker binary entry point.

use clap::Parser;

use resultcheck::cli::Cli;
use resultcheck::output_diagnostic::print_error;
use resultcheck::run::{exit_codes, run};

fn main() {
    let cli = Cli::parse();
    resultcheck::logging::init(cli.verbose);

    let code = match run(&cli, &mut std::io::stdout(), &mut std::io::stderr()) {
        Ok(code) => code,
        Err(e) => {
            print_error(e);
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}
