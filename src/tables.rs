use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use cuttlefish::plan::{Task, TaskAction};

#[must_use]
pub fn build_tasks_table(tasks: &[Task], horizon: usize) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Device", "Action", "Start", "End", "Duration", "Timeline"]);
    for task in tasks {
        let color = match task.action {
            TaskAction::On => Color::DarkYellow,
            TaskAction::Charge => Color::Green,
            TaskAction::Discharge => Color::Blue,
        };
        table.add_row(vec![
            Cell::new(&task.device),
            Cell::new(task.action).fg(color),
            Cell::new(task.start).set_alignment(CellAlignment::Right),
            Cell::new(task.end()).set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
            Cell::new(task.duration).set_alignment(CellAlignment::Right),
            Cell::new(timeline(task, horizon)).fg(color),
        ]);
    }
    table
}

/// One character per timestep, filled where the task is active.
fn timeline(task: &Task, horizon: usize) -> String {
    (0..horizon).map(|timestep| if (task.start..task.end()).contains(&timestep) { '█' } else { '·' }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_ok() {
        let task = Task { device: "Washer".to_owned(), action: TaskAction::On, start: 1, duration: 2 };
        assert_eq!(timeline(&task, 5), "·██··");
    }
}
