use clap::Parser;
use cuttlefish::{fingerprint::Fingerprint, prelude::*, problem::validate};
use serde_json::Value;

use crate::cli::input::{ProblemArgs, read_json};

#[derive(Parser)]
pub struct ValidateArgs {
    #[clap(flatten)]
    problem: ProblemArgs,
}

impl ValidateArgs {
    pub fn run(self) -> Result {
        let payload: Value = read_json(&self.problem.path)?;
        let home = match validate(&payload) {
            Ok(home) => home,
            Err(error) => {
                warn!(kind = %error.kind, field = %error.field, detail = %error.detail, "rejected");
                return Err(error).context("the problem is invalid");
            }
        };
        info!(
            horizon = home.horizon().get(),
            n_appliances = home.appliances().len(),
            fingerprint = %Fingerprint::literal(&payload),
            "valid"
        );
        println!("{}", home.to_canonical_json()?);
        Ok(())
    }
}
