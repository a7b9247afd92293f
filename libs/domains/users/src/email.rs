use crate::error::{UserError, UserResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// `local@domain.tld` with a TLD of at least two characters.
/// The byte order mark counts as whitespace, matching JavaScript's `\s`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]{2,}$").unwrap()
});

/// Validated, lower-cased email address.
///
/// Two emails are equal when their normalized values are equal, so
/// `Foo@Bar.com` and `foo@bar.com` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserEmail(String);

impl UserEmail {
    pub fn new(raw: &str) -> UserResult<Self> {
        if !Self::is_valid(raw) {
            tracing::debug!("Rejected malformed email address");
            return Err(UserError::Validation(invalid_email_message(raw)));
        }
        Ok(Self(raw.to_lowercase()))
    }

    /// Check `raw` against the email pattern without building a value
    pub fn is_valid(raw: &str) -> bool {
        EMAIL_PATTERN.is_match(raw)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Field validator used by the create/update DTOs
pub(crate) fn validate_email(raw: &str) -> Result<(), validator::ValidationError> {
    if UserEmail::is_valid(raw) {
        Ok(())
    } else {
        let mut err = validator::ValidationError::new("invalid_email");
        err.message = Some(invalid_email_message(raw).into());
        Err(err)
    }
}

fn invalid_email_message(raw: &str) -> String {
    format!("Invalid email: {}", raw)
}

impl fmt::Display for UserEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserEmail {
    type Error = UserError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl TryFrom<&str> for UserEmail {
    type Error = UserError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserEmail> for String {
    fn from(email: UserEmail) -> Self {
        email.0
    }
}
