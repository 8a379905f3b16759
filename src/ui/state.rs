use std::collections::HashMap;

use uuid::Uuid;

use crate::config::FlowConfig;
use crate::core::filter::TaskFilter;
use crate::core::store::TaskStore;
use crate::core::summary::Summary;
use crate::core::swipe::SwipeAction;
use crate::core::task::{Priority, Task};
use crate::ui::form::AddTaskForm;
use crate::ui::gesture::SwipeTracker;
use crate::ui::message::Message;

/// The single-screen session state: one task store, the selected filter,
/// the add-task sheet, and per-row drag tracking. A renderer draws from the
/// read accessors and feeds every interaction through [`update`].
///
/// [`update`]: DailyFlow::update
pub struct DailyFlow {
    store: TaskStore,
    filter: TaskFilter,
    show_add_task: bool,
    form: AddTaskForm,
    drags: HashMap<Uuid, SwipeTracker>,
    pending_delete: Option<Uuid>,
    deletion_enabled: bool,
    default_priority: Priority,
}

impl DailyFlow {
    pub fn new(config: &FlowConfig) -> Self {
        let store = if config.seed_sample_tasks {
            TaskStore::sample()
        } else {
            TaskStore::new()
        };
        Self {
            store,
            filter: TaskFilter::default(),
            show_add_task: false,
            form: AddTaskForm::new(config.default_priority),
            drags: HashMap::new(),
            pending_delete: None,
            deletion_enabled: config.enable_task_deletion,
            default_priority: config.default_priority,
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::SetFilter(filter) => {
                self.filter = filter;
            }

            Message::ShowAddTask => {
                // Each presentation starts from a clean sheet.
                self.form = AddTaskForm::new(self.default_priority);
                self.show_add_task = true;
            }

            Message::DismissAddTask => {
                self.form = AddTaskForm::new(self.default_priority);
                self.show_add_task = false;
            }

            Message::NameChanged(value) => {
                self.form.name = value;
            }

            Message::DueDateChanged(due) => {
                self.form.due = due;
            }

            Message::SetPriority(priority) => {
                self.form.priority = priority;
            }

            Message::NotesChanged(value) => {
                self.form.notes = value;
            }

            Message::SetCategory(category) => {
                self.form.category = category;
            }

            Message::StepDuration(ticks) => {
                self.form.step_duration(ticks);
            }

            Message::ToggleReminder(remind) => {
                self.form.remind = remind;
            }

            Message::SetRepeat(repeat) => {
                self.form.repeat = repeat;
            }

            Message::SubmitAddTask => {
                self.store.add(Task::new(self.form.build()));
                self.form = AddTaskForm::new(self.default_priority);
                self.show_add_task = false;
            }

            Message::DragUpdate(id, x, y) => {
                self.drags.entry(id).or_default().drag_update(x, y);
            }

            Message::DragEnd(id) => {
                let Some(mut tracker) = self.drags.remove(&id) else {
                    return;
                };
                let Some(is_complete) = self.store.get(id).map(|t| t.is_complete) else {
                    return;
                };
                match tracker.drag_end(is_complete) {
                    Some(SwipeAction::Complete) => self.store.complete(id),
                    Some(SwipeAction::Uncomplete) => self.store.uncomplete(id),
                    Some(SwipeAction::Snooze) => self.store.snooze(id),
                    None => {}
                }
            }

            Message::ToggleTaskDone(id) => {
                match self.store.get(id).map(|t| t.is_complete) {
                    Some(true) => self.store.uncomplete(id),
                    Some(false) => self.store.complete(id),
                    None => {}
                }
            }

            Message::RequestDeleteTask(id) => {
                if self.deletion_enabled {
                    self.pending_delete = Some(id);
                }
            }

            Message::CancelDeleteTask => {
                self.pending_delete = None;
            }

            Message::DeleteTask(id) => {
                if self.deletion_enabled {
                    self.store.remove(id);
                    self.drags.remove(&id);
                }
                self.pending_delete = None;
            }
        }
    }

    /// The store's tasks seen through the current filter.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.filter.apply(self.store.tasks())
    }

    pub fn summary(&self) -> Summary {
        self.store.summary()
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    pub fn show_add_task(&self) -> bool {
        self.show_add_task
    }

    pub fn form(&self) -> &AddTaskForm {
        &self.form
    }

    /// Horizontal offset for one row, zero when it is not being dragged.
    pub fn drag_offset(&self, id: Uuid) -> f32 {
        self.drags.get(&id).map_or(0.0, |t| t.offset())
    }

    pub fn pending_delete(&self) -> Option<Uuid> {
        self.pending_delete
    }
}
