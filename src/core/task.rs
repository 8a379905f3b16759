use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name given to a task when the form is submitted with an empty title.
pub const UNTITLED_NAME: &str = "Untitled Task";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Asset name for the icon shown next to a row of this priority.
    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::High => "rocketHigh",
            Self::Medium => "baloonMed",
            Self::Low => "paperLow",
        }
    }
}

/// Payload handed over by the add-task form. The due date arrives already
/// formatted for display; no structured date is kept on the task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTask {
    pub name: String,
    pub due_date: String,
    pub priority: Priority,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub name: String,
    pub due_date: String,
    pub priority: Priority,
    pub notes: String,
    pub is_complete: bool,
    pub created: NaiveDateTime,
    pub completed: Option<NaiveDateTime>,
}

impl Task {
    /// Build a task from the form payload, minting a fresh id. An empty or
    /// whitespace-only name is replaced with [`UNTITLED_NAME`].
    pub fn new(fields: NewTask) -> Self {
        let name = if fields.name.trim().is_empty() {
            UNTITLED_NAME.to_string()
        } else {
            fields.name
        };
        Self {
            id: Uuid::new_v4(),
            name,
            due_date: fields.due_date,
            priority: fields.priority,
            notes: fields.notes,
            is_complete: false,
            created: chrono::Local::now().naive_local(),
            completed: None,
        }
    }

    pub fn complete(&mut self) {
        if !self.is_complete {
            self.is_complete = true;
            self.completed = Some(chrono::Local::now().naive_local());
        }
    }

    pub fn uncomplete(&mut self) {
        self.is_complete = false;
        self.completed = None;
    }
}

/// Demo tasks shown on first launch, before the user has added anything.
pub fn sample_tasks() -> Vec<Task> {
    let sample = |name: &str, due: &str, priority: Priority, notes: &str, done: bool| {
        let mut task = Task::new(NewTask {
            name: name.to_string(),
            due_date: due.to_string(),
            priority,
            notes: notes.to_string(),
        });
        if done {
            task.complete();
        }
        task
    };

    vec![
        sample("UI Design", "09:00 AM - 11:00 AM", Priority::Medium, "", false),
        sample(
            "Web Development",
            "11:30 AM - 12:30 PM",
            Priority::High,
            "Frontend improvements",
            false,
        ),
        sample(
            "Office Meeting",
            "02:00 PM - 03:00 PM",
            Priority::Low,
            "Discuss Q1 goals",
            true,
        ),
        sample("Dashboard Design", "03:30 PM - 05:00 PM", Priority::Medium, "", false),
    ]
}
