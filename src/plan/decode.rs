use std::{iter, num::NonZeroUsize};

use itertools::{Either, Itertools};

use crate::{
    plan::{ApplianceAction, BATTERY_DEVICE, BatteryAction, Plan, Task, TaskAction},
    prelude::*,
    problem::HomeParameters,
};

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DecodeError {
    /// An appliance is on for a number of timesteps that does not split into whole cycles.
    #[error(
        "`{device}` is on for {run_length} timesteps starting at {offset}, which is not a multiple of its {cycle_duration}-timestep cycle"
    )]
    MisalignedCycle { device: String, run_length: usize, cycle_duration: usize, offset: usize },

    #[error("the plan spans {actual} timesteps while the horizon is {expected}")]
    PlanLengthMismatch { expected: usize, actual: usize },

    #[error("timestep {timestep} carries {actual} appliance actions, expected {expected}")]
    LaneCountMismatch { timestep: usize, expected: usize, actual: usize },
}

/// Run-length encode the lane into `(start, length, value)` triples.
fn runs<T: PartialEq>(lane: impl IntoIterator<Item = T>) -> impl Iterator<Item = (usize, usize, T)> {
    lane.into_iter().dedup_with_count().scan(0, |offset, (length, value)| {
        let start = *offset;
        *offset += length;
        Some((start, length, value))
    })
}

/// Split every run of the appliance being on into back-to-back cycles of the fixed duration.
///
/// The cycle duration is never inferred: a run which is not a whole number of cycles
/// yields [`DecodeError::MisalignedCycle`] in place of its tasks.
pub fn iter_appliance_tasks<'a>(
    label: &'a str,
    lane: impl IntoIterator<Item = ApplianceAction> + 'a,
    cycle_duration: NonZeroUsize,
) -> impl Iterator<Item = Result<Task, DecodeError>> + 'a {
    let cycle_duration = cycle_duration.get();
    runs(lane).filter(|(_, _, action)| *action == ApplianceAction::On).flat_map(
        move |(offset, run_length, _)| {
            if run_length % cycle_duration == 0 {
                Either::Left((offset..offset + run_length).step_by(cycle_duration).map(move |start| {
                    Ok(Task {
                        device: label.to_owned(),
                        action: TaskAction::On,
                        start,
                        duration: cycle_duration,
                    })
                }))
            } else {
                Either::Right(iter::once(Err(DecodeError::MisalignedCycle {
                    device: label.to_owned(),
                    run_length,
                    cycle_duration,
                    offset,
                })))
            }
        },
    )
}

/// Emit one task per charging or discharging run, spanning the whole run.
pub fn iter_battery_tasks(lane: impl IntoIterator<Item = BatteryAction>) -> impl Iterator<Item = Task> {
    runs(lane).filter_map(|(start, duration, action)| {
        let action = match action {
            BatteryAction::Off => return None,
            BatteryAction::Charge => TaskAction::Charge,
            BatteryAction::Discharge => TaskAction::Discharge,
        };
        Some(Task { device: BATTERY_DEVICE.to_owned(), action, start, duration })
    })
}

/// Decode the plan into tasks: each appliance in the problem's order, and then the battery.
///
/// Within a device, the tasks are ordered by time. Labels and cycle durations come from the problem.
/// Any misaligned cycle fails the entire decoding.
#[instrument(skip_all, level = "trace", fields(horizon = home.horizon().get(), len = plan.len()))]
pub fn decode_plan(plan: &Plan, home: &HomeParameters) -> Result<Vec<Task>, DecodeError> {
    let horizon = home.horizon().get();
    if plan.len() != horizon {
        return Err(DecodeError::PlanLengthMismatch { expected: horizon, actual: plan.len() });
    }
    let n_appliances = home.appliances().len();
    if let Some((timestep, action)) =
        plan.iter().enumerate().find(|(_, action)| action.appliances.len() != n_appliances)
    {
        return Err(DecodeError::LaneCountMismatch {
            timestep,
            expected: n_appliances,
            actual: action.appliances.len(),
        });
    }

    home.appliances()
        .iter()
        .enumerate()
        .flat_map(|(index, appliance)| {
            iter_appliance_tasks(appliance.label(), plan.appliance_lane(index), appliance.duration())
        })
        .chain(iter_battery_tasks(plan.battery_lane()).map(Ok))
        .collect()
}
