use std::{collections::HashSet, num::NonZeroUsize};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    prelude::*,
    problem::{
        ApplianceParameters,
        BatteryParameters,
        RawHomeParameters,
        ValidationError,
        ValidationErrorKind,
    },
};

/// Validated scheduling problem: a battery and a fixed set of appliances over a discrete horizon.
///
/// The only way to obtain one is through validation, so every instance upholds the invariants.
/// It serializes into the canonical form which is handed over to the optimizer.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HomeParameters {
    horizon: NonZeroUsize,
    battery: BatteryParameters,
    appliances: Vec<ApplianceParameters>,
}

impl HomeParameters {
    /// Number of discrete timesteps.
    pub const fn horizon(&self) -> NonZeroUsize {
        self.horizon
    }

    pub const fn battery(&self) -> &BatteryParameters {
        &self.battery
    }

    pub fn appliances(&self) -> &[ApplianceParameters] {
        &self.appliances
    }

    /// Compact canonical JSON: declaration field order with the timesets sorted.
    pub fn to_canonical_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Parse and validate an untyped problem payload.
///
/// Checks run in a fixed order and the first violation wins: the battery, then each appliance
/// in turn, and finally the horizon.
#[instrument(skip_all, level = "trace")]
pub fn validate(payload: &Value) -> Result<HomeParameters, ValidationError> {
    RawHomeParameters::deserialize(payload)
        .map_err(|error| ValidationError::malformed(&error))?
        .validate()
}

impl RawHomeParameters {
    pub fn validate(&self) -> Result<HomeParameters, ValidationError> {
        let battery = self.battery.validate()?;

        let mut labels = HashSet::with_capacity(self.appliances.len());
        let appliances = self
            .appliances
            .iter()
            .enumerate()
            .map(|(index, appliance)| {
                let field = format!("appliances[{index}]");
                if !labels.insert(appliance.label.as_str()) {
                    return Err(ValidationError::new(
                        ValidationErrorKind::InvalidApplianceParameters,
                        format!("{field}.label"),
                        format!("duplicate appliance label `{}`", appliance.label),
                    ));
                }
                appliance.validate(&field)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let horizon = usize::try_from(self.horizon).ok().and_then(NonZeroUsize::new).ok_or_else(|| {
            ValidationError::new(
                ValidationErrorKind::InvalidHorizon,
                "horizon",
                format!("horizon must be positive, got {}", self.horizon),
            )
        })?;

        Ok(HomeParameters { horizon, battery, appliances })
    }
}
