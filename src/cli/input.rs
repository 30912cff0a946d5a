use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use clap::Parser;
use cuttlefish::prelude::*;
use serde::de::DeserializeOwned;

/// Path to a problem payload, `-` stands for the standard input.
#[derive(Parser)]
pub struct ProblemArgs {
    #[clap(long = "problem", env = "CUTTLEFISH_PROBLEM_PATH", default_value = "-")]
    pub path: PathBuf,
}

pub fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

#[instrument(skip_all, fields(path = %path.display()))]
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = if is_stdin(path) {
        io::read_to_string(io::stdin()).context("failed to read the standard input")?
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read `{}`", path.display()))?
    };
    debug!(len = text.len(), "read");
    serde_json::from_str(&text).with_context(|| format!("`{}` is not a valid JSON", path.display()))
}
