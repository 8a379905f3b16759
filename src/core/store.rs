use uuid::Uuid;

use crate::core::summary::Summary;
use crate::core::task::{self, Task};

/// The ordered task collection for one session. The `Vec` order is the
/// authoritative ordering: insertion order, mutated only by [`snooze`].
///
/// Stores hold tens of items at most, so every lookup is a linear scan on
/// the task id. Operations on an id that is not present are silent no-ops.
///
/// [`snooze`]: TaskStore::snooze
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with the demo tasks.
    pub fn sample() -> Self {
        Self {
            tasks: task::sample_tasks(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Append a task. A task whose id is already present is dropped rather
    /// than stored twice.
    pub fn add(&mut self, task: Task) {
        if self.position(task.id).is_some() {
            log::warn!("Dropping task with duplicate id {}: {}", task.id, task.name);
            return;
        }
        self.tasks.push(task);
    }

    /// Mark the task done. Already-complete tasks are left untouched, so
    /// calling this twice is identical to calling it once.
    pub fn complete(&mut self, id: Uuid) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.complete();
        }
    }

    pub fn uncomplete(&mut self, id: Uuid) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.uncomplete();
        }
    }

    /// Move the task to the end of the list, all field values preserved.
    pub fn snooze(&mut self, id: Uuid) {
        if let Some(pos) = self.position(id) {
            let task = self.tasks.remove(pos);
            self.tasks.push(task);
        }
    }

    /// Delete the task permanently. Callers gate this on configuration; the
    /// store itself always supports it.
    pub fn remove(&mut self, id: Uuid) -> Option<Task> {
        let pos = self.position(id)?;
        Some(self.tasks.remove(pos))
    }

    pub fn summary(&self) -> Summary {
        Summary::of(&self.tasks)
    }
}
