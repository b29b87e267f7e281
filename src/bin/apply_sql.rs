//! Apply the seed script and print `APPLIED` or an `ERROR` line.

use clap::Parser;
use std::process;
use water_me_tools::cli::{self, SeedCli};
use water_me_tools::error::error_line;
use water_me_tools::seed::{self, APPLIED_MARKER};

fn main() {
    cli::init_tracing();

    let config = SeedCli::parse().into_config();

    if let Err(e) = seed::apply_seed(&config) {
        println!("{}", error_line(&e));
        process::exit(1);
    }

    println!("{APPLIED_MARKER}");
}
