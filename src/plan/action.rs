use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("invalid {lane} action code: {code}")]
pub struct InvalidActionCode {
    pub lane: &'static str,
    pub code: i8,
}

/// Battery action within a single timestep, encoded as `-1`, `0`, or `1`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum BatteryAction {
    Discharge,
    Off,
    Charge,
}

impl TryFrom<i8> for BatteryAction {
    type Error = InvalidActionCode;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(Self::Discharge),
            0 => Ok(Self::Off),
            1 => Ok(Self::Charge),
            _ => Err(InvalidActionCode { lane: "battery", code }),
        }
    }
}

impl From<BatteryAction> for i8 {
    fn from(action: BatteryAction) -> Self {
        match action {
            BatteryAction::Discharge => -1,
            BatteryAction::Off => 0,
            BatteryAction::Charge => 1,
        }
    }
}

/// Appliance action within a single timestep, encoded as `0` or `1`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum ApplianceAction {
    Off,
    On,
}

impl TryFrom<i8> for ApplianceAction {
    type Error = InvalidActionCode;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Off),
            1 => Ok(Self::On),
            _ => Err(InvalidActionCode { lane: "appliance", code }),
        }
    }
}

impl From<ApplianceAction> for i8 {
    fn from(action: ApplianceAction) -> Self {
        match action {
            ApplianceAction::Off => 0,
            ApplianceAction::On => 1,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct HomeAction {
    pub battery: BatteryAction,

    /// One action per appliance, in the order of the problem's appliances.
    pub appliances: Vec<ApplianceAction>,
}

/// Optimizer output: one [`HomeAction`] per timestep.
#[must_use]
#[derive(
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    derive_more::From,
    derive_more::Deref,
    derive_more::IntoIterator,
)]
#[serde(transparent)]
pub struct Plan(#[into_iterator(owned, ref)] Vec<HomeAction>);

impl FromIterator<HomeAction> for Plan {
    fn from_iter<T: IntoIterator<Item = HomeAction>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Plan {
    /// Actions of a single appliance across the horizon.
    ///
    /// # Panics
    ///
    /// If any timestep lacks the appliance.
    pub fn appliance_lane(&self, index: usize) -> impl Iterator<Item = ApplianceAction> + '_ {
        self.0.iter().map(move |action| action.appliances[index])
    }

    pub fn battery_lane(&self) -> impl Iterator<Item = BatteryAction> + '_ {
        self.0.iter().map(|action| action.battery)
    }
}
