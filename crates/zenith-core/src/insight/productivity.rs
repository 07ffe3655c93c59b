use serde::Serialize;

use crate::model::Task;

/// Completed and total task counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskTally {
    pub completed: usize,
    pub total: usize,
}

impl TaskTally {
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        Self {
            completed: tasks.iter().filter(|task| task.completed).count(),
            total: tasks.len(),
        }
    }

    /// `round(100 * completed / total)`, or `0` with no tasks.
    ///
    /// Halves round up, so 1 of 8 is 13.
    #[must_use]
    pub fn completion_rate(self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let completed = self.completed.min(self.total);
        let rate = (200 * completed + self.total) / (2 * self.total);
        u32::try_from(rate).unwrap_or(100)
    }
}
