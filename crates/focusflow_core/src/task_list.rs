use crate::error::AppError;
use crate::model::{Task, TaskStatus};
use time::OffsetDateTime;

/// Result of flipping a task's completion state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggled {
    /// Title as it was before the flip.
    pub title: String,
    pub completed: bool,
}

/// Ordered, in-memory checklist addressed by position.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

pub fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
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

    pub fn add(&mut self, title: &str) -> Result<&Task, AppError> {
        self.add_at(title, local_now())
    }

    fn add_at(&mut self, title: &str, now: OffsetDateTime) -> Result<&Task, AppError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(AppError::invalid_input("title is required"));
        }

        self.tasks.push(Task::new(trimmed.to_string(), now));
        let last = self.tasks.len() - 1;
        Ok(&self.tasks[last])
    }

    pub fn toggle(&mut self, index: usize) -> Result<Toggled, AppError> {
        self.toggle_at(index, local_now())
    }

    fn toggle_at(&mut self, index: usize, now: OffsetDateTime) -> Result<Toggled, AppError> {
        self.check_index(index)?;

        let task = &mut self.tasks[index];
        let title = task.title.clone();
        task.status = match task.status {
            TaskStatus::Pending => TaskStatus::Completed { at: now },
            TaskStatus::Completed { .. } => TaskStatus::Pending,
        };

        Ok(Toggled {
            title,
            completed: task.is_completed(),
        })
    }

    pub fn delete(&mut self, index: usize) -> Result<Task, AppError> {
        self.check_index(index)?;
        Ok(self.tasks.remove(index))
    }

    /// Drops every completed task, keeping the rest in order. Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.is_completed());
        before - self.tasks.len()
    }

    /// Turns a user-typed 1-based task number into a 0-based position.
    pub fn parse_index(&self, raw: &str) -> Result<usize, AppError> {
        let number: i64 = raw
            .trim()
            .parse()
            .map_err(|_| AppError::invalid_input("please type a valid number"))?;

        if number < 1 || number > self.tasks.len() as i64 {
            return Err(self.range_error());
        }

        Ok((number - 1) as usize)
    }

    fn check_index(&self, index: usize) -> Result<(), AppError> {
        if index >= self.tasks.len() {
            return Err(self.range_error());
        }
        Ok(())
    }

    fn range_error(&self) -> AppError {
        AppError::invalid_input(format!("pick between 1 and {}", self.tasks.len()))
    }
}
