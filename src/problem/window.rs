use std::collections::BTreeSet;

use serde::Serialize;

use crate::problem::{RawWindowParameters, ValidationError, ValidationErrorKind};

/// Minimum number of completed appliance cycles required within a subset of timesteps.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct WindowParameters {
    /// Ordered set, hence it serializes as a sorted sequence.
    timesteps: BTreeSet<i64>,

    min_required_cycles: u64,
}

impl WindowParameters {
    pub const fn timesteps(&self) -> &BTreeSet<i64> {
        &self.timesteps
    }

    pub const fn min_required_cycles(&self) -> u64 {
        self.min_required_cycles
    }

    /// Timesteps claimed by both windows.
    pub fn overlap<'a>(&'a self, other: &'a Self) -> impl Iterator<Item = i64> + 'a {
        self.timesteps.intersection(&other.timesteps).copied()
    }
}

impl RawWindowParameters {
    pub fn validate(&self, field: &str) -> Result<WindowParameters, ValidationError> {
        if self.min_required_cycles < 0 {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidApplianceParameters,
                format!("{field}.min_required_cycles"),
                format!("minimum required cycles must be non-negative, got {}", self.min_required_cycles),
            ));
        }
        Ok(WindowParameters {
            timesteps: self.timesteps.iter().copied().collect(),
            min_required_cycles: self.min_required_cycles.unsigned_abs(),
        })
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_validate_collapses_timesteps_ok() -> Result {
        let window = RawWindowParameters::builder()
            .timesteps(vec![5, 1, 5, 3])
            .min_required_cycles(0)
            .build()
            .validate("window")?;
        assert_eq!(window.timesteps().iter().copied().collect_vec(), [1, 3, 5]);
        assert_eq!(window.min_required_cycles(), 0);
        Ok(())
    }

    #[test]
    fn test_validate_negative_cycles_fails() {
        let error = RawWindowParameters::builder()
            .min_required_cycles(-1)
            .build()
            .validate("appliances[0].min_required_cycles[2]")
            .unwrap_err();
        assert_eq!(error.kind, ValidationErrorKind::InvalidApplianceParameters);
        assert_eq!(error.field, "appliances[0].min_required_cycles[2].min_required_cycles");
    }

    #[test]
    fn test_overlap_ok() -> Result {
        let lhs = RawWindowParameters { timesteps: vec![1, 2, 3], min_required_cycles: 1 }.validate("lhs")?;
        let rhs = RawWindowParameters { timesteps: vec![3, 4, 2], min_required_cycles: 1 }.validate("rhs")?;
        assert_eq!(lhs.overlap(&rhs).collect_vec(), [2, 3]);
        Ok(())
    }
}
