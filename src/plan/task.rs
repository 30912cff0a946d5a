use serde::Serialize;

/// Device name of the battery lane.
pub const BATTERY_DEVICE: &str = "Battery";

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, derive_more::Display)]
pub enum TaskAction {
    On,
    Charge,
    Discharge,
}

/// Contiguous interval of a device being active.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Task {
    /// Appliance label or [`BATTERY_DEVICE`].
    pub device: String,

    pub action: TaskAction,

    /// Timestep offset, inclusive.
    pub start: usize,

    /// Number of timesteps, always positive.
    pub duration: usize,
}

impl Task {
    /// Exclusive end timestep.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_serialize_ok() -> Result {
        let task = Task { device: BATTERY_DEVICE.to_owned(), action: TaskAction::Charge, start: 3, duration: 2 };
        assert_eq!(
            serde_json::to_string(&task)?,
            r#"{"device":"Battery","action":"Charge","start":3,"duration":2}"#,
        );
        assert_eq!(task.end(), 5);
        Ok(())
    }
}
