use clap::Parser;
use cuttlefish::{
    fingerprint::{FingerprintMode, fingerprint},
    prelude::*,
};
use serde_json::Value;

use crate::cli::input::{ProblemArgs, read_json};

#[derive(Parser)]
pub struct FingerprintArgs {
    #[clap(flatten)]
    problem: ProblemArgs,

    /// `literal` keys the payload as submitted, `canonical` keys the validated problem.
    #[clap(long, value_enum, env = "CUTTLEFISH_FINGERPRINT_MODE", default_value_t)]
    mode: FingerprintMode,
}

impl FingerprintArgs {
    pub fn run(self) -> Result {
        let payload: Value = read_json(&self.problem.path)?;
        let fingerprint = fingerprint(&payload, self.mode)?;
        debug!(mode = ?self.mode, %fingerprint, "computed");
        println!("{fingerprint}");
        Ok(())
    }
}
