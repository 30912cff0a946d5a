//! Deduplication keys for problem submissions.

use serde::Serialize;
use serde_json::Value;

use crate::{
    prelude::*,
    problem::{HomeParameters, ValidationError, validate},
};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum FingerprintMode {
    /// Key over the payload as submitted, so key order and number formatting matter.
    #[default]
    Literal,

    /// Key over the canonical form of the validated problem.
    Canonical,
}

#[derive(Debug, thiserror::Error)]
pub enum FingerprintError {
    #[error("the problem is invalid")]
    Validation(#[from] ValidationError),

    #[error("failed to serialize the problem")]
    Serialization(#[from] serde_json::Error),
}

/// Opaque equality key: lowercase hexadecimal MD5 digest of the fingerprinted text.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, derive_more::Display, derive_more::AsRef)]
#[as_ref(str)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Fingerprint the compact serialization of the payload, keeping the submitted key order.
    pub fn literal(payload: &Value) -> Self {
        Self::digest(&payload.to_string())
    }

    pub fn canonical(home: &HomeParameters) -> serde_json::Result<Self> {
        Ok(Self::digest(&home.to_canonical_json()?))
    }

    fn digest(text: &str) -> Self {
        Self(format!("{:x}", md5::compute(text.as_bytes())))
    }
}

/// Compute the fingerprint of a raw problem payload.
///
/// The canonical mode validates the payload first and fails on an invalid one.
#[instrument(skip(payload), level = "trace")]
pub fn fingerprint(payload: &Value, mode: FingerprintMode) -> Result<Fingerprint, FingerprintError> {
    match mode {
        FingerprintMode::Literal => Ok(Fingerprint::literal(payload)),
        FingerprintMode::Canonical => Ok(Fingerprint::canonical(&validate(payload)?)?),
    }
}
