mod decode;
mod fingerprint;
mod input;
mod validate;

use clap::{Parser, Subcommand};

pub use self::{decode::DecodeArgs, fingerprint::FingerprintArgs, validate::ValidateArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a problem and print its canonical form.
    #[clap(name = "validate")]
    Validate(ValidateArgs),

    /// Print the deduplication key of a problem.
    #[clap(name = "fingerprint")]
    Fingerprint(FingerprintArgs),

    /// Decode the optimizer's plan into device tasks.
    #[clap(name = "decode")]
    Decode(Box<DecodeArgs>),
}
