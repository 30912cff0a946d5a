mod appliance;
mod battery;
mod error;
mod home;
mod raw;
mod window;

pub use self::{
    appliance::ApplianceParameters,
    battery::BatteryParameters,
    error::{ValidationError, ValidationErrorKind},
    home::{HomeParameters, validate},
    raw::{RawApplianceParameters, RawBatteryParameters, RawHomeParameters, RawWindowParameters},
    window::WindowParameters,
};
