//! Tasks Domain
//!
//! Validated building blocks for task management: the task entity, its
//! status/priority enumerations, the [`TaskTitle`] value object and the
//! create/update/response shapes exchanged with the outside world.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Models    │  ← Task entity, DTOs, enums, guards
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ TaskTitle   │  ← Value object, validated at construction
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use domain_tasks::{CreateTask, Task, TaskPriority, TaskStatus};
//!
//! let input = CreateTask {
//!     title: "Plan launch".to_string(),
//!     description: None,
//!     priority: TaskPriority::High,
//!     due_date: None,
//!     assignee_id: None,
//!     tags: vec![],
//! };
//!
//! let mut task = Task::new(input, "user-1").unwrap();
//! task.set_status(TaskStatus::Completed);
//! assert!(task.completed_at().is_some());
//! ```

pub mod audit;
pub mod error;
pub mod models;
pub mod title;

// Re-export commonly used types
pub use audit::AuditFields;
pub use error::{TaskError, TaskResult};
pub use models::{
    CreateTask, Task, TaskPriority, TaskResponse, TaskStatus, UpdateTask, is_valid_task_priority,
    is_valid_task_status,
};
pub use title::{TITLE_MAX_LEN, TITLE_MIN_LEN, TaskTitle};
