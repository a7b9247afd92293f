use crate::error::{TaskError, TaskResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum number of characters after trimming surrounding whitespace
pub const TITLE_MIN_LEN: usize = 3;
/// Maximum number of characters, whitespace included
pub const TITLE_MAX_LEN: usize = 100;

/// Validated task title.
///
/// The raw string is kept as given; trimming only applies to the length check.
/// There is no way to change a title in place, build a new one instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskTitle(String);

impl TaskTitle {
    pub fn new(raw: impl Into<String>) -> TaskResult<Self> {
        let raw = raw.into();
        check_title(&raw).map_err(TaskError::Validation)?;
        Ok(Self(raw))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Whitespace for the minimum-length check, including the byte order mark
fn is_title_padding(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Bare reason a title is rejected, shared by the constructor and the DTO validator
pub(crate) fn check_title(raw: &str) -> Result<(), String> {
    let trimmed_len = raw.trim_matches(is_title_padding).chars().count();
    if trimmed_len < TITLE_MIN_LEN {
        tracing::debug!(len = trimmed_len, "Rejected short task title");
        return Err(format!(
            "Task title must have at least {} characters",
            TITLE_MIN_LEN
        ));
    }
    let len = raw.chars().count();
    if len > TITLE_MAX_LEN {
        tracing::debug!(len, "Rejected long task title");
        return Err(format!(
            "Task title cannot exceed {} characters",
            TITLE_MAX_LEN
        ));
    }
    Ok(())
}

/// Field validator used by the create/update DTOs
pub(crate) fn validate_title(raw: &str) -> Result<(), validator::ValidationError> {
    check_title(raw).map_err(|reason| {
        let mut err = validator::ValidationError::new("invalid_task_title");
        err.message = Some(reason.into());
        err
    })
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskTitle {
    type Error = TaskError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for TaskTitle {
    type Error = TaskError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskTitle> for String {
    fn from(title: TaskTitle) -> Self {
        title.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_title_round_trips() {
        let title = TaskTitle::new("Plan launch").unwrap();
        assert_eq!(title.value(), "Plan launch");
        assert_eq!(title.to_string(), "Plan launch");
    }

    #[test]
    fn test_stored_value_is_not_trimmed() {
        let title = TaskTitle::new("  abc  ").unwrap();
        assert_eq!(title.value(), "  abc  ");
    }

    #[test]
    fn test_empty_title_rejected() {
        assert!(TaskTitle::new("").is_err());
    }

    #[test]
    fn test_whitespace_padded_short_title_rejected() {
        let err = TaskTitle::new(" hi ").unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));
        assert!(err.to_string().contains("at least 3"));
    }

    #[test]
    fn test_only_whitespace_rejected() {
        assert!(TaskTitle::new("          ").is_err());
    }

    #[test]
    fn test_byte_order_mark_counts_as_padding() {
        assert!(TaskTitle::new("\u{FEFF}ab").is_err());
        assert!(TaskTitle::new("\u{FEFF} ab \u{FEFF}").is_err());
        assert!(TaskTitle::new("\u{FEFF}abc").is_ok());
    }

    #[test]
    fn test_length_boundaries() {
        assert!(TaskTitle::new("abc").is_ok());
        assert!(TaskTitle::new("a".repeat(100)).is_ok());

        let err = TaskTitle::new("a".repeat(101)).unwrap_err();
        assert!(err.to_string().contains("cannot exceed 100"));
    }

    #[test]
    fn test_max_length_counts_untrimmed_characters() {
        // 98 visible characters plus padding pushes the raw length past the limit
        let padded = format!("  {}  ", "a".repeat(98));
        assert_eq!(padded.len(), 102);
        assert!(TaskTitle::new(padded).is_err());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let title = "é".repeat(100);
        assert!(title.len() > 100);
        assert!(TaskTitle::new(title).is_ok());
    }

    #[test]
    fn test_conversions() {
        let title = TaskTitle::try_from("Write docs").unwrap();
        assert_eq!(title.as_ref(), "Write docs");

        let raw: String = title.into();
        assert_eq!(raw, "Write docs");

        assert!(TaskTitle::try_from("no".to_string()).is_err());
    }

    #[test]
    fn test_serde_uses_validated_string() {
        let title: TaskTitle = serde_json::from_str("\"Ship it\"").unwrap();
        assert_eq!(serde_json::to_string(&title).unwrap(), "\"Ship it\"");

        assert!(serde_json::from_str::<TaskTitle>("\"ab\"").is_err());
    }
}
