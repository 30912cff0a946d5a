use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use cuttlefish::{
    plan::{Plan, decode_plan},
    prelude::*,
    problem::validate,
};
use serde_json::Value;

use crate::{
    cli::input::{ProblemArgs, is_stdin, read_json},
    tables::build_tasks_table,
};

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON array of tasks.
    #[default]
    Json,

    /// Human-readable table.
    Table,
}

#[derive(Parser)]
pub struct DecodeArgs {
    #[clap(flatten)]
    problem: ProblemArgs,

    /// Path to the optimizer's plan, `-` stands for the standard input.
    #[clap(long = "plan", env = "CUTTLEFISH_PLAN_PATH", default_value = "-")]
    plan_path: PathBuf,

    #[clap(long, value_enum, env = "CUTTLEFISH_OUTPUT_FORMAT", default_value_t)]
    format: OutputFormat,
}

impl DecodeArgs {
    pub fn run(self) -> Result {
        ensure!(
            !(is_stdin(&self.problem.path) && is_stdin(&self.plan_path)),
            "the problem and the plan cannot both be read from the standard input",
        );

        let payload: Value = read_json(&self.problem.path)?;
        let home = validate(&payload).context("the problem is invalid")?;
        let plan: Plan = read_json(&self.plan_path)?;

        let tasks = decode_plan(&plan, &home).context("the plan is inconsistent with its problem")?;
        info!(n_tasks = tasks.len(), "decoded");

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(&tasks)?),
            OutputFormat::Table => println!("{}", build_tasks_table(&tasks, home.horizon().get())),
        }
        Ok(())
    }
}
