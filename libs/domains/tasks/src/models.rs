use crate::audit::AuditFields;
use crate::error::{TaskError, TaskResult};
use crate::title::{TaskTitle, validate_title};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumIter, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Task status
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TaskStatus {
    /// Task not started
    Pending,
    /// Task in progress
    InProgress,
    /// Task completed
    Completed,
    /// Task abandoned
    Cancelled,
}

impl TaskStatus {
    /// Completed and cancelled tasks are no longer worked on
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Cancelled)
    }
}

/// Task priority levels.
///
/// Serialized as its integer value; ordering follows the numbering.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(try_from = "i64", into = "u8")]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum TaskPriority {
    Low = 1,
    Medium = 2,
    High = 3,
    Critical = 4,
}

impl TaskPriority {
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<i64> for TaskPriority {
    type Error = TaskError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(TaskPriority::Low),
            2 => Ok(TaskPriority::Medium),
            3 => Ok(TaskPriority::High),
            4 => Ok(TaskPriority::Critical),
            other => Err(TaskError::Validation(format!(
                "Unknown task priority: {}",
                other
            ))),
        }
    }
}

impl From<TaskPriority> for u8 {
    fn from(priority: TaskPriority) -> Self {
        priority.value()
    }
}

/// Task entity.
///
/// `status` and `completed_at` are private: the only way to move a task
/// between statuses is [`Task::set_status`], which keeps `completed_at` set
/// exactly when the task is completed.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub audit: AuditFields,
    pub title: TaskTitle,
    pub description: Option<String>,
    status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<DateTime<Utc>>,
    pub assignee_id: Option<String>,
    pub tags: Vec<String>,
    completed_at: Option<DateTime<Utc>>,
}

/// DTO for creating a new task
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTask {
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    pub description: Option<String>,
    #[schema(value_type = u8, minimum = 1, maximum = 4)]
    pub priority: TaskPriority,
    pub due_date: Option<DateTime<Utc>>,
    pub assignee_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// DTO for updating an existing task.
///
/// For the nullable fields an absent key leaves the value alone and an
/// explicit `null` clears it.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTask {
    #[validate(custom(function = "validate_title"))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub description: Option<Option<String>>,
    #[schema(value_type = Option<u8>, minimum = 1, maximum = 4)]
    pub priority: Option<TaskPriority>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub due_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub assignee_id: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
}

/// Present keys (including `null`) become `Some`; missing keys fall back to `None`
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// DTO for task response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TaskResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    #[schema(value_type = u8, minimum = 1, maximum = 4)]
    pub priority: TaskPriority,
    pub due_date: Option<DateTime<Utc>>,
    pub assignee_id: Option<String>,
    pub tags: Vec<String>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.audit.id(),
            title: task.title.into(),
            description: task.description,
            status: task.status,
            priority: task.priority,
            due_date: task.due_date,
            assignee_id: task.assignee_id,
            tags: task.tags,
            completed_at: task.completed_at,
            created_at: task.audit.created_at(),
            updated_at: task.audit.updated_at(),
            created_by: task.audit.created_by().to_string(),
        }
    }
}

impl Task {
    /// Build a pending task from a create request
    pub fn new(input: CreateTask, created_by: impl Into<String>) -> TaskResult<Self> {
        input.validate()?;
        let title = TaskTitle::new(input.title)?;

        Ok(Self {
            audit: AuditFields::new(created_by),
            title,
            description: input.description,
            status: TaskStatus::Pending,
            priority: input.priority,
            due_date: input.due_date,
            assignee_id: input.assignee_id,
            tags: input.tags,
            completed_at: None,
        })
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Move the task to `status`.
    ///
    /// Entering `Completed` stamps `completed_at`; leaving it clears the stamp.
    /// Setting `Completed` again keeps the original stamp.
    pub fn set_status(&mut self, status: TaskStatus) {
        match status {
            TaskStatus::Completed if self.status != TaskStatus::Completed => {
                self.completed_at = Some(Utc::now());
            }
            TaskStatus::Completed => {}
            _ => self.completed_at = None,
        }
        self.status = status;
        self.audit.touch();
    }

    /// Apply updates from UpdateTask DTO.
    ///
    /// Nothing is changed if the update fails validation.
    pub fn apply_update(&mut self, update: UpdateTask) -> TaskResult<()> {
        update.validate()?;
        let title = update.title.map(TaskTitle::new).transpose()?;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(due_date) = update.due_date {
            self.due_date = due_date;
        }
        if let Some(assignee_id) = update.assignee_id {
            self.assignee_id = assignee_id;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        self.audit.touch();
        Ok(())
    }

    /// Past its due date while still open
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.status.is_terminal() && self.due_date.is_some_and(|due| due < now)
    }
}

/// Whether `status` is the wire value of a [`TaskStatus`]. Case-sensitive.
pub fn is_valid_task_status(status: &str) -> bool {
    status.parse::<TaskStatus>().is_ok()
}

/// Whether `priority` is the numeric value of a [`TaskPriority`]
pub fn is_valid_task_priority(priority: i64) -> bool {
    TaskPriority::try_from(priority).is_ok()
}
