//! Users Domain
//!
//! This module provides the validated user model.
//!
//! # Features
//!
//! - [`UserEmail`] value object (pattern check + lower-case normalization)
//! - Role and gender enumerations with string guards
//! - Create/update/response shapes
//!
//! # Usage
//!
//! ```rust
//! use domain_users::{UserEmail, is_valid_role};
//!
//! let email = UserEmail::new("Foo@BAR.com").unwrap();
//! assert_eq!(email.value(), "foo@bar.com");
//! assert!(UserEmail::is_valid("a@b.co"));
//! assert!(is_valid_role("guest"));
//! ```

pub mod audit;
pub mod email;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use audit::AuditFields;
pub use email::UserEmail;
pub use error::{UserError, UserResult};
pub use models::{
    CreateUser, DEFAULT_PROFILE_PICTURE, UpdateUser, User, UserGender, UserResponse, UserRole,
    is_valid_gender, is_valid_role,
};
