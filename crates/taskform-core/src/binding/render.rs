//! List-item rendering for task responses.
//!
//! Rendering produces markup fragments only; writing them into a container
//! is the page's job. The listing effect appends, so rendering twice
//! concatenates, duplicates included.

use crate::task::Task;

/// Renders one task as a `<li>name: status</li>` item.
pub fn task_item(task: &Task) -> String {
    format!("<li>{}: {}</li>", task.name, task.status)
}

/// Renders a task sequence as concatenated list items, in original order.
pub fn task_items(tasks: &[Task]) -> String {
    tasks.iter().map(task_item).collect()
}
