// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! pagectl binary entry point.

use clap::Parser;

use pagectl::capture::ChangeLog;
use pagectl::cli::{Cli, CliError};
use pagectl::output::{print_change, print_error};
use pagectl::runner::Runner;
use paginate::NavigationController;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        print_error(e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = cli.build_config()?;

    let log = match &cli.capture {
        Some(path) => ChangeLog::with_file(path).map_err(|source| CliError::Capture {
            path: path.clone(),
            source,
        })?,
        None => ChangeLog::new(),
    };

    let mut builder = NavigationController::builder(config);
    if !cli.read_only {
        let mut record = log.listener();
        builder = builder.on_change(move |page: u64, page_size: u64| {
            print_change(page, page_size);
            record(page, page_size);
        });
    }

    let mut runner = Runner::new(builder.build());
    let stdout = std::io::stdout();
    runner.run(&cli.actions, cli.output_format, &mut stdout.lock())
}
