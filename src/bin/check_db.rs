//! Print row counts for the expected tables.

use clap::Parser;
use water_me_tools::check;
use water_me_tools::cli::{self, CheckCli};
use water_me_tools::error::error_line;

fn main() {
    cli::init_tracing();

    let config = CheckCli::parse().into_config();
    let report = check::run_check(&config.db_path, config.tables.as_slice());

    if config.json {
        match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => println!("{}", error_line(&e)),
        }
        return;
    }

    for line in report.lines() {
        println!("{line}");
    }
}
