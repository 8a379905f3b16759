use chrono::NaiveDateTime;

use crate::core::task::{NewTask, Priority};

pub const DURATION_MIN: u32 = 15;
pub const DURATION_MAX: u32 = 240;
pub const DURATION_STEP: u32 = 15;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    Work,
    Personal,
    Fitness,
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [Self::Work, Self::Personal, Self::Fitness, Self::Other];

    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Fitness => "Fitness",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Repeat {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
}

impl Repeat {
    pub const ALL: [Repeat; 4] = [Self::None, Self::Daily, Self::Weekly, Self::Monthly];

    pub fn as_label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }
}

/// Field state for the add-task sheet.
///
/// Category, duration, reminder, and repeat are collected here but never
/// placed on the task — the add payload is exactly name, due label,
/// priority, and notes.
#[derive(Debug, Clone, PartialEq)]
pub struct AddTaskForm {
    pub name: String,
    pub due: NaiveDateTime,
    pub priority: Priority,
    pub notes: String,
    pub category: Category,
    pub estimated_minutes: u32,
    pub remind: bool,
    pub repeat: Repeat,
}

impl Default for AddTaskForm {
    fn default() -> Self {
        Self::new(Priority::default())
    }
}

impl AddTaskForm {
    pub fn new(default_priority: Priority) -> Self {
        Self {
            name: String::new(),
            due: chrono::Local::now().naive_local(),
            priority: default_priority,
            notes: String::new(),
            category: Category::default(),
            estimated_minutes: 60,
            remind: false,
            repeat: Repeat::default(),
        }
    }

    /// Move the duration stepper by whole ticks, staying within bounds.
    pub fn step_duration(&mut self, ticks: i32) {
        let minutes = self.estimated_minutes as i64 + ticks as i64 * DURATION_STEP as i64;
        self.estimated_minutes = minutes.clamp(DURATION_MIN as i64, DURATION_MAX as i64) as u32;
    }

    /// The payload handed to the store. Formats the due date for display;
    /// empty-name defaulting is the task constructor's job.
    pub fn build(&self) -> NewTask {
        NewTask {
            name: self.name.clone(),
            due_date: format_due(self.due),
            priority: self.priority,
            notes: self.notes.clone(),
        }
    }
}

/// Medium date, short time — `Feb 24, 2026, 9:30 AM`.
pub fn format_due(due: NaiveDateTime) -> String {
    due.format("%b %-d, %Y, %-I:%M %p").to_string()
}
