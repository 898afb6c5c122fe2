use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{UserError, UserResult};

/// A guest account as stored by the repositories.
///
/// The entity carries the credential and performs no validation of its own;
/// format rules live on [`UserDto::set_email`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// The outward-facing representation of a guest account.
///
/// The password is optional and omitted from responses: mapping from
/// [`User`] never copies it, so read endpoints expose only profile fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    #[serde(default)]
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserDto {
    /// Assign a new email address, rejecting values without an '@'.
    ///
    /// On rejection the previously stored address is left untouched.
    pub fn set_email(&mut self, email: impl Into<String>) -> UserResult<()> {
        let email = email.into();
        if !email.contains('@') {
            return Err(UserError::InvalidEmailFormat(email));
        }
        self.email = email;
        Ok(())
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            password: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_email_accepts_address_with_at_sign() {
        let mut dto = UserDto::default();

        dto.set_email("guest@example.com").unwrap();

        assert_eq!(dto.email, "guest@example.com");
    }

    #[test]
    fn test_set_email_rejects_address_without_at_sign() {
        let mut dto = UserDto::default();

        let result = dto.set_email("not-an-email");

        assert!(matches!(result, Err(UserError::InvalidEmailFormat(_))));
        assert_eq!(dto.email, "");
    }

    #[test]
    fn test_set_email_keeps_previous_value_on_rejection() {
        let mut dto = UserDto::default();
        dto.set_email("first@example.com").unwrap();

        let result = dto.set_email("second-without-at");

        assert!(result.is_err());
        assert_eq!(dto.email, "first@example.com");
    }

    #[test]
    fn test_dto_from_user_omits_password() {
        let user = User {
            id: "42".to_string(),
            email: "guest@example.com".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Pop".to_string(),
            password: "plain".to_string(),
        };

        let dto = UserDto::from(user);

        assert_eq!(dto.id, "42");
        assert_eq!(dto.email, "guest@example.com");
        assert_eq!(dto.first_name, "Ana");
        assert_eq!(dto.last_name, "Pop");
        assert!(dto.password.is_none());
    }

    #[test]
    fn test_entity_accepts_any_email() {
        // The entity has no guard; only the DTO setter validates.
        let user = User {
            email: "no-at-sign".to_string(),
            ..Default::default()
        };

        assert_eq!(user.email, "no-at-sign");
    }
}
