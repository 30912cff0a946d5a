use serde::Serialize;

use crate::problem::{RawBatteryParameters, ValidationError, ValidationErrorKind};

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct BatteryParameters {
    capacity: u64,
    rate: f64,
    initial_level: u64,
    min_required_level: u64,
}

impl BatteryParameters {
    pub const fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Maximum charge or discharge per timestep.
    pub const fn rate(&self) -> f64 {
        self.rate
    }

    pub const fn initial_level(&self) -> u64 {
        self.initial_level
    }

    pub const fn min_required_level(&self) -> u64 {
        self.min_required_level
    }
}

impl RawBatteryParameters {
    pub fn validate(&self) -> Result<BatteryParameters, ValidationError> {
        let invalid = |field: &str, detail: String| {
            ValidationError::new(ValidationErrorKind::InvalidBattery, format!("battery.{field}"), detail)
        };

        if self.capacity <= 0 {
            return Err(invalid("capacity", format!("capacity must be positive, got {}", self.capacity)));
        }
        if self.rate.is_nan() || self.rate <= 0.0 {
            return Err(invalid("rate", format!("rate must be positive, got {}", self.rate)));
        }
        if !(0..=self.capacity).contains(&self.initial_level) {
            return Err(invalid(
                "initial_level",
                format!("initial level must be within 0..={}, got {}", self.capacity, self.initial_level),
            ));
        }
        if !(0..=self.capacity).contains(&self.min_required_level) {
            return Err(invalid(
                "min_required_level",
                format!(
                    "minimum required level must be within 0..={}, got {}",
                    self.capacity, self.min_required_level,
                ),
            ));
        }

        Ok(BatteryParameters {
            capacity: self.capacity.unsigned_abs(),
            rate: self.rate,
            initial_level: self.initial_level.unsigned_abs(),
            min_required_level: self.min_required_level.unsigned_abs(),
        })
    }
}
