use crate::model::TaskModel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub task_count: usize,
}

/// Tag-derived categories, kept in step with the task model.
#[derive(Debug, Clone, Default)]
pub struct CategoryManager {
    counts: BTreeMap<String, usize>,
}

impl CategoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_model(model: &TaskModel) -> Self {
        let mut manager = Self::new();
        manager.sync(model);
        manager
    }

    /// Recount categories from every task, completed ones included.
    pub fn sync(&mut self, model: &TaskModel) {
        self.counts.clear();
        for tag in model.tasks().iter().flat_map(|t| t.tags.iter()) {
            *self.counts.entry(tag.clone()).or_default() += 1;
        }
    }

    pub fn categories(&self) -> Vec<Category> {
        self.counts
            .iter()
            .map(|(name, &task_count)| Category {
                name: name.clone(),
                task_count,
            })
            .collect()
    }

    pub fn task_count(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Task;

    #[test]
    fn test_sync_counts_tags() {
        let mut model = TaskModel::new();
        model
            .add(Task::new("A".to_string()).with_tags(["work".to_string(), "urgent".to_string()]))
            .unwrap();
        model
            .add(Task::new("B".to_string()).with_tags(["work".to_string()]))
            .unwrap();
        model.add(Task::new("C".to_string())).unwrap();

        let manager = CategoryManager::from_model(&model);
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.task_count("work"), 2);
        assert_eq!(manager.task_count("urgent"), 1);
        assert_eq!(manager.task_count("home"), 0);
        assert_eq!(
            manager.categories()[0],
            Category {
                name: "urgent".to_string(),
                task_count: 1
            }
        );
    }

    #[test]
    fn test_sync_drops_vanished_tags() {
        let mut model = TaskModel::new();
        let task = Task::new("A".to_string()).with_tags(["work".to_string()]);
        let id = task.id;
        model.add(task).unwrap();

        let mut manager = CategoryManager::from_model(&model);
        assert!(!manager.is_empty());

        model.remove(id);
        manager.sync(&model);
        assert!(manager.is_empty());
    }
}
