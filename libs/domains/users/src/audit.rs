use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Audit metadata carried by every user record. Read-only outside this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditFields {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    created_by: String,
}

impl AuditFields {
    pub fn new(created_by: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
            created_by: created_by.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
