use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task priority, highest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Short marker shown in front of a list row
    pub fn marker(self) -> &'static str {
        match self {
            Priority::Critical => "!!",
            Priority::High => " !",
            Priority::Medium => "  ",
            Priority::Low => " ·",
        }
    }
}

/// A task as loaded from the tasks file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// One-line summary
    pub header: String,
    /// Description body (the text subject to folding)
    #[serde(default)]
    pub text: String,
    pub priority: Priority,
    pub is_done: bool,
    /// Due date
    pub completion_time: DateTime<Utc>,
    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,
    /// Assigned engineer names
    #[serde(default)]
    pub engineers: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Task {
    /// Whether `name` is among the assigned engineers
    pub fn assigned_to(&self, name: &str) -> bool {
        self.engineers.iter().any(|e| e == name)
    }
}

/// The loaded task collection, in file order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskList {
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl TaskList {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Task> {
        self.tasks.get(idx)
    }
}
