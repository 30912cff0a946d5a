mod cli;
mod tables;

use clap::{Parser, crate_version};
use cuttlefish::prelude::*;

use crate::cli::{Args, Command};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    debug!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Validate(args) => args.run(),
        Command::Fingerprint(args) => args.run(),
        Command::Decode(args) => args.run(),
    }
}
