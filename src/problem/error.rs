use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, derive_more::Display)]
pub enum ValidationErrorKind {
    /// The payload does not have the expected shape: missing field, wrong JSON type and so on.
    Malformed,

    InvalidBattery,

    InvalidApplianceParameters,

    /// Two usage windows of the same appliance share at least one timestep.
    InvalidWindowOverlap,

    InvalidDependency,

    InvalidHorizon,
}

/// The first violated invariant of a problem payload.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq, Serialize, thiserror::Error)]
#[error("{kind} at `{field}`: {detail}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,

    /// Dotted path to the offending value, for example `appliances[1].dependencies[0]`.
    pub field: String,

    pub detail: String,
}

impl ValidationError {
    pub(crate) fn new(
        kind: ValidationErrorKind,
        field: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self { kind, field: field.into(), detail: detail.into() }
    }

    pub(crate) fn malformed(error: &serde_json::Error) -> Self {
        Self::new(ValidationErrorKind::Malformed, "$", error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_display_ok() -> Result {
        let error = ValidationError::new(
            ValidationErrorKind::InvalidDependency,
            "appliances[0].dependencies[1]",
            "dependency must be a positive integer, got 0",
        );
        assert_eq!(
            error.to_string(),
            "InvalidDependency at `appliances[0].dependencies[1]`: dependency must be a positive integer, got 0",
        );
        Ok(())
    }

    #[test]
    fn test_serialize_ok() -> Result {
        let error = ValidationError::new(ValidationErrorKind::InvalidHorizon, "horizon", "oops");
        assert_eq!(
            serde_json::to_string(&error)?,
            r#"{"kind":"InvalidHorizon","field":"horizon","detail":"oops"}"#,
        );
        Ok(())
    }
}
