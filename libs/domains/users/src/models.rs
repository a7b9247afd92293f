use crate::audit::AuditFields;
use crate::email::{UserEmail, validate_email};
use crate::error::UserResult;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Picture assigned to every new user until they upload their own
pub const DEFAULT_PROFILE_PICTURE: &str = "/static/avatars/default.png";

/// User roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Member,
    Guest,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Admin, UserRole::Member, UserRole::Guest];
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::Member => write!(f, "member"),
            UserRole::Guest => write!(f, "guest"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "member" => Ok(UserRole::Member),
            "guest" => Ok(UserRole::Guest),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserGender {
    Male,
    Female,
}

/// User entity
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub audit: AuditFields,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    pub birth: NaiveDate,
    pub email: UserEmail,
    pub phone: String,
    pub gender: UserGender,
    pub profile_picture: String,
}

/// User response DTO
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    pub birth: NaiveDate,
    pub email: String,
    pub phone: String,
    pub gender: UserGender,
    pub profile_picture: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.audit.id(),
            role: user.role,
            first_name: user.first_name,
            last_name: user.last_name,
            birth: user.birth,
            email: user.email.into(),
            phone: user.phone,
            gender: user.gender,
            profile_picture: user.profile_picture,
            created_at: user.audit.created_at(),
            updated_at: user.audit.updated_at(),
            created_by: user.audit.created_by().to_string(),
        }
    }
}

/// DTO for creating a new user
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    pub birth: NaiveDate,
    #[validate(custom(function = "validate_email"))]
    pub email: String,
    pub phone: String,
    pub gender: UserGender,
}

/// DTO for updating an existing user
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    pub role: Option<UserRole>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth: Option<NaiveDate>,
    #[validate(custom(function = "validate_email"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<UserGender>,
    pub profile_picture: Option<String>,
}

impl User {
    /// Create a new user with the default profile picture
    pub fn new(input: CreateUser, created_by: impl Into<String>) -> UserResult<Self> {
        input.validate()?;
        let email = UserEmail::new(&input.email)?;

        Ok(Self {
            audit: AuditFields::new(created_by),
            role: input.role,
            first_name: input.first_name,
            last_name: input.last_name,
            birth: input.birth,
            email,
            phone: input.phone,
            gender: input.gender,
            profile_picture: DEFAULT_PROFILE_PICTURE.to_string(),
        })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Apply updates. A bad email leaves the user untouched.
    pub fn apply_update(&mut self, update: UpdateUser) -> UserResult<()> {
        update.validate()?;
        let email = update.email.as_deref().map(UserEmail::new).transpose()?;

        if let Some(role) = update.role {
            self.role = role;
        }
        if let Some(first_name) = update.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            self.last_name = last_name;
        }
        if let Some(birth) = update.birth {
            self.birth = birth;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(gender) = update.gender {
            self.gender = gender;
        }
        if let Some(profile_picture) = update.profile_picture {
            self.profile_picture = profile_picture;
        }
        self.audit.touch();
        Ok(())
    }
}

pub fn is_valid_role(role: &str) -> bool {
    role.parse::<UserRole>().is_ok()
}

pub fn is_valid_gender(gender: &str) -> bool {
    gender.parse::<UserGender>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UserError;
    use strum::IntoEnumIterator;

    fn create_input(email: &str) -> CreateUser {
        CreateUser {
            role: UserRole::Member,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            birth: NaiveDate::from_ymd_opt(1815, 12, 10).unwrap(),
            email: email.to_string(),
            phone: "+44 20 7946 0958".to_string(),
            gender: UserGender::Female,
        }
    }

    #[test]
    fn test_role_guard() {
        for role in ["admin", "member", "guest"] {
            assert!(is_valid_role(role));
        }
        for role in ["", "Admin", "ADMIN", "user", "moderator", " guest"] {
            assert!(!is_valid_role(role), "{role:?} should be invalid");
        }
    }

    #[test]
    fn test_role_display_round_trips() {
        for role in UserRole::ALL {
            assert_eq!(role.to_string().parse::<UserRole>(), Ok(role));
        }
    }

    #[test]
    fn test_gender_guard() {
        for gender in UserGender::iter() {
            assert!(is_valid_gender(&gender.to_string()));
        }
        for gender in ["", "Male", "FEMALE", "other"] {
            assert!(!is_valid_gender(gender), "{gender:?} should be invalid");
        }
    }

    #[test]
    fn test_new_user() {
        let user = User::new(create_input("Ada@Example.COM"), "admin-1").unwrap();

        assert_eq!(user.email.value(), "ada@example.com");
        assert_eq!(user.profile_picture, DEFAULT_PROFILE_PICTURE);
        assert_eq!(user.full_name(), "Ada Lovelace");
        assert_eq!(user.audit.created_by(), "admin-1");
    }

    #[test]
    fn test_new_user_rejects_bad_email() {
        let err = User::new(create_input("ada"), "admin-1").unwrap_err();
        assert!(matches!(err, UserError::Validation(_)));

        let message = err.to_string();
        assert_eq!(message.matches("Invalid input").count(), 1, "{message}");
        assert!(message.contains("email: Invalid email: ada"), "{message}");
    }

    #[test]
    fn test_apply_update() {
        let mut user = User::new(create_input("ada@example.com"), "admin-1").unwrap();
        let id = user.audit.id();

        user.apply_update(UpdateUser {
            role: Some(UserRole::Admin),
            email: Some("Countess@Example.com".to_string()),
            profile_picture: Some("/uploads/ada.png".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.email.value(), "countess@example.com");
        assert_eq!(user.profile_picture, "/uploads/ada.png");
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.audit.id(), id);
    }

    #[test]
    fn test_apply_update_with_bad_email_changes_nothing() {
        let mut user = User::new(create_input("ada@example.com"), "admin-1").unwrap();
        let before = user.clone();

        let result = user.apply_update(UpdateUser {
            first_name: Some("Augusta".to_string()),
            email: Some("@nope.com".to_string()),
            ..Default::default()
        });

        assert!(result.is_err());
        assert_eq!(user, before);
    }

    #[test]
    fn test_user_response_flattens_email() {
        let user = User::new(create_input("Ada@Example.com"), "admin-1").unwrap();
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["role"], "member");
        assert_eq!(json["gender"], "female");
        assert_eq!(json["birth"], "1815-12-10");
    }
}
