use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub title: String,
    pub created_at: OffsetDateTime,
    pub status: TaskStatus,
}

/// Completion state; the completion time only exists on the `Completed` side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Completed { at: OffsetDateTime },
}

impl Task {
    pub fn new(title: String, created_at: OffsetDateTime) -> Self {
        Self {
            title,
            created_at,
            status: TaskStatus::Pending,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.status, TaskStatus::Completed { .. })
    }

    pub fn completed_at(&self) -> Option<OffsetDateTime> {
        match self.status {
            TaskStatus::Pending => None,
            TaskStatus::Completed { at } => Some(at),
        }
    }
}
