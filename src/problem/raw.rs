//! Unchecked problem payloads as submitted by a client.
//!
//! Integers are deliberately kept signed and wide, so that out-of-range values
//! make it to [`RawHomeParameters::validate`] and get reported with a precise reason
//! rather than as a shape mismatch.

use bon::Builder;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize, Builder)]
pub struct RawHomeParameters {
    pub horizon: i64,

    pub battery: RawBatteryParameters,

    #[builder(default)]
    pub appliances: Vec<RawApplianceParameters>,
}

#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Builder)]
pub struct RawBatteryParameters {
    pub capacity: i64,

    /// Maximum charge or discharge per timestep.
    pub rate: f64,

    pub initial_level: i64,

    pub min_required_level: i64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Builder)]
pub struct RawApplianceParameters {
    #[builder(into)]
    pub label: String,

    /// Cycle length in timesteps.
    pub duration: i64,

    /// Power draw per active timestep.
    pub rate: f64,

    #[builder(default)]
    pub min_required_cycles: Vec<RawWindowParameters>,

    /// Wider than the rest, so that any positive integer of the payload is a valid dependency.
    #[builder(default)]
    pub dependencies: Vec<Option<i128>>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Builder)]
pub struct RawWindowParameters {
    /// May contain duplicates, they collapse on validation.
    #[builder(default)]
    pub timesteps: Vec<i64>,

    pub min_required_cycles: i64,
}
