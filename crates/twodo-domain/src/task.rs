use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

pub type TaskId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deadline {
    pub start: Option<NaiveDateTime>,
    pub end: NaiveDateTime,
}

impl Deadline {
    /// Returns `None` when `start` falls after `end`.
    pub fn new(start: Option<NaiveDateTime>, end: NaiveDateTime) -> Option<Self> {
        match start {
            Some(start) if start > end => None,
            _ => Some(Self { start, end }),
        }
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const FORMAT: &str = "%Y-%m-%d %H:%M";
        match self.start {
            Some(start) => write!(f, "{} to {}", start.format(FORMAT), self.end.format(FORMAT)),
            None => write!(f, "by {}", self.end.format(FORMAT)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    pub deadline: Option<Deadline>,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description: None,
            tags: BTreeSet::new(),
            deadline: None,
            completed: false,
            created_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_deadline(mut self, deadline: Option<Deadline>) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn with_tags<I: IntoIterator<Item = String>>(mut self, tags: I) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Two tasks describe the same work when name, description and deadline agree.
    pub fn is_same_task(&self, other: &Task) -> bool {
        self.name == other.name
            && self.description == other.description
            && self.deadline == other.deadline
    }

    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.name
            .split_whitespace()
            .any(|word| word.to_lowercase() == keyword)
            || self.tags.iter().any(|tag| tag.to_lowercase() == keyword)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(deadline) = &self.deadline {
            write!(f, " ({})", deadline)?;
        }
        if let Some(description) = &self.description {
            write!(f, " - {}", description)?;
        }
        if !self.tags.is_empty() {
            let tags: Vec<_> = self.tags.iter().map(|t| format!("[{}]", t)).collect();
            write!(f, " {}", tags.join(""))?;
        }
        Ok(())
    }
}
