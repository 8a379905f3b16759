use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::core::filter::TaskFilter;
use crate::core::task::Priority;
use crate::ui::form::{Category, Repeat};

/// Everything the rendered surface can ask the view-model to do.
#[derive(Debug, Clone)]
pub enum Message {
    // Filter row
    SetFilter(TaskFilter),

    // Add-task sheet
    ShowAddTask,
    DismissAddTask,
    NameChanged(String),
    DueDateChanged(NaiveDateTime),
    SetPriority(Priority),
    NotesChanged(String),
    SetCategory(Category),
    /// Stepper ticks; each tick is fifteen minutes in either direction.
    StepDuration(i32),
    ToggleReminder(bool),
    SetRepeat(Repeat),
    SubmitAddTask,

    // Row gestures
    DragUpdate(Uuid, f32, f32),
    DragEnd(Uuid),
    ToggleTaskDone(Uuid),

    // Deletion, only honored when enabled in config
    RequestDeleteTask(Uuid),
    CancelDeleteTask,
    DeleteTask(Uuid),
}
