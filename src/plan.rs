mod action;
mod decode;
mod task;

pub use self::{
    action::{ApplianceAction, BatteryAction, HomeAction, InvalidActionCode, Plan},
    decode::{DecodeError, decode_plan, iter_appliance_tasks, iter_battery_tasks},
    task::{BATTERY_DEVICE, Task, TaskAction},
};
