use std::num::{NonZeroU128, NonZeroUsize};

use itertools::Itertools;
use serde::Serialize;

use crate::problem::{RawApplianceParameters, ValidationError, ValidationErrorKind, WindowParameters};

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ApplianceParameters {
    label: String,
    duration: NonZeroUsize,
    rate: f64,
    min_required_cycles: Vec<WindowParameters>,
    dependencies: Vec<Option<NonZeroU128>>,
}

impl ApplianceParameters {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Length of one indivisible cycle, in timesteps.
    pub const fn duration(&self) -> NonZeroUsize {
        self.duration
    }

    pub const fn rate(&self) -> f64 {
        self.rate
    }

    /// Usage windows, their timesets are pairwise disjoint.
    pub fn min_required_cycles(&self) -> &[WindowParameters] {
        &self.min_required_cycles
    }

    /// One-based indices, passed through to the optimizer as is.
    pub fn dependencies(&self) -> &[Option<NonZeroU128>] {
        &self.dependencies
    }
}

impl RawApplianceParameters {
    /// Validate the appliance parameters, then the window disjointness, then the dependencies.
    ///
    /// The `field` is the path of the appliance within the payload.
    pub fn validate(&self, field: &str) -> Result<ApplianceParameters, ValidationError> {
        let min_required_cycles = self
            .min_required_cycles
            .iter()
            .enumerate()
            .map(|(index, window)| window.validate(&format!("{field}.min_required_cycles[{index}]")))
            .collect::<Result<Vec<_>, _>>()?;

        let duration = usize::try_from(self.duration).ok().and_then(NonZeroUsize::new).ok_or_else(|| {
            ValidationError::new(
                ValidationErrorKind::InvalidApplianceParameters,
                format!("{field}.duration"),
                format!("duration must be positive, got {}", self.duration),
            )
        })?;
        if self.rate.is_nan() || self.rate <= 0.0 {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidApplianceParameters,
                format!("{field}.rate"),
                format!("rate must be positive, got {}", self.rate),
            ));
        }

        if let Some(((i, lhs), (j, rhs))) = min_required_cycles
            .iter()
            .enumerate()
            .tuple_combinations()
            .find(|((_, lhs), (_, rhs))| lhs.overlap(rhs).next().is_some())
        {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidWindowOverlap,
                format!("{field}.min_required_cycles[{j}]"),
                format!("window #{j} shares timesteps {:?} with window #{i}", lhs.overlap(rhs).collect_vec()),
            ));
        }

        let dependencies = self
            .dependencies
            .iter()
            .enumerate()
            .map(|(index, dependency)| match *dependency {
                None => Ok(None),
                Some(dependency) => u128::try_from(dependency)
                    .ok()
                    .and_then(NonZeroU128::new)
                    .map(Some)
                    .ok_or_else(|| {
                        ValidationError::new(
                            ValidationErrorKind::InvalidDependency,
                            format!("{field}.dependencies[{index}]"),
                            format!("dependency must be a positive integer, got {dependency}"),
                        )
                    }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ApplianceParameters {
            label: self.label.clone(),
            duration,
            rate: self.rate,
            min_required_cycles,
            dependencies,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{problem::RawWindowParameters, prelude::*};

    fn window(timesteps: &[i64], min_required_cycles: i64) -> RawWindowParameters {
        RawWindowParameters { timesteps: timesteps.to_vec(), min_required_cycles }
    }

    fn raw() -> RawApplianceParameters {
        RawApplianceParameters::builder()
            .label("Dishwasher")
            .duration(3)
            .rate(1.2)
            .min_required_cycles(vec![window(&[0, 1, 2], 1), window(&[5, 6], 0)])
            .dependencies(vec![None, Some(2)])
            .build()
    }

    #[test]
    fn test_validate_ok() -> Result {
        let appliance = raw().validate("appliances[0]")?;
        assert_eq!(appliance.label(), "Dishwasher");
        assert_eq!(appliance.duration().get(), 3);
        assert_eq!(appliance.min_required_cycles().len(), 2);
        assert_eq!(appliance.dependencies(), [None, NonZeroU128::new(2)]);
        Ok(())
    }

    #[test]
    fn test_validate_non_positive_duration_fails() {
        for duration in [0, -2] {
            let error =
                RawApplianceParameters { duration, ..raw() }.validate("appliances[3]").unwrap_err();
            assert_eq!(error.kind, ValidationErrorKind::InvalidApplianceParameters);
            assert_eq!(error.field, "appliances[3].duration");
        }
    }

    #[test]
    fn test_validate_non_positive_rate_fails() {
        let error = RawApplianceParameters { rate: 0.0, ..raw() }.validate("appliances[0]").unwrap_err();
        assert_eq!(error.kind, ValidationErrorKind::InvalidApplianceParameters);
        assert_eq!(error.field, "appliances[0].rate");
    }

    #[test]
    fn test_validate_overlapping_windows_fails() {
        let raw = RawApplianceParameters {
            min_required_cycles: vec![window(&[0, 1], 1), window(&[7], 1), window(&[1, 2], 1)],
            ..raw()
        };
        let error = raw.validate("appliances[0]").unwrap_err();
        assert_eq!(error.kind, ValidationErrorKind::InvalidWindowOverlap);
        assert_eq!(error.field, "appliances[0].min_required_cycles[2]");
        assert_eq!(error.detail, "window #2 shares timesteps [1] with window #0");
    }

    #[test]
    fn test_validate_empty_windows_never_overlap_ok() -> Result {
        let raw = RawApplianceParameters {
            min_required_cycles: vec![window(&[], 0), window(&[], 0)],
            ..raw()
        };
        assert_eq!(raw.validate("appliances[0]")?.min_required_cycles().len(), 2);
        Ok(())
    }

    #[test]
    fn test_validate_non_positive_dependency_fails() {
        for dependency in [0, -1] {
            let raw = RawApplianceParameters { dependencies: vec![Some(1), None, Some(dependency)], ..raw() };
            let error = raw.validate("appliances[1]").unwrap_err();
            assert_eq!(error.kind, ValidationErrorKind::InvalidDependency);
            assert_eq!(error.field, "appliances[1].dependencies[2]");
        }
    }

    #[test]
    fn test_validate_dependency_beyond_i64_ok() -> Result {
        let dependency = i128::from(i64::MAX) + 1;
        let raw = RawApplianceParameters { dependencies: vec![Some(dependency)], ..raw() };
        assert_eq!(raw.validate("appliances[0]")?.dependencies(), [NonZeroU128::new(1 << 63)]);
        Ok(())
    }

    #[test]
    fn test_validate_window_before_duration_before_rate() {
        let raw = RawApplianceParameters {
            duration: 0,
            rate: 0.0,
            min_required_cycles: vec![window(&[0], 1), window(&[3], -1)],
            ..raw()
        };
        let error = raw.validate("appliances[0]").unwrap_err();
        assert_eq!(error.kind, ValidationErrorKind::InvalidApplianceParameters);
        assert_eq!(error.field, "appliances[0].min_required_cycles[1].min_required_cycles");

        let raw = RawApplianceParameters { min_required_cycles: vec![window(&[0], 1), window(&[3], 0)], ..raw };
        assert_eq!(raw.validate("appliances[0]").unwrap_err().field, "appliances[0].duration");

        let raw = RawApplianceParameters { duration: 2, ..raw };
        assert_eq!(raw.validate("appliances[0]").unwrap_err().field, "appliances[0].rate");
    }

    #[test]
    fn test_validate_parameters_before_overlap_before_dependencies() {
        let raw = RawApplianceParameters {
            duration: 0,
            min_required_cycles: vec![window(&[1], 1), window(&[1], 1)],
            dependencies: vec![Some(0)],
            ..raw()
        };
        assert_eq!(
            raw.validate("a").unwrap_err().kind,
            ValidationErrorKind::InvalidApplianceParameters,
        );

        let raw = RawApplianceParameters { duration: 1, ..raw };
        assert_eq!(raw.validate("a").unwrap_err().kind, ValidationErrorKind::InvalidWindowOverlap);

        let raw = RawApplianceParameters { min_required_cycles: Vec::new(), ..raw };
        assert_eq!(raw.validate("a").unwrap_err().kind, ValidationErrorKind::InvalidDependency);
    }
}
