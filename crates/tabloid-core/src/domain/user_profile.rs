use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{UNSAVED_ID, limit_image_location, require_text};
use crate::error::DomainError;

/// Role of a user profile.
///
/// Serialized as its numeric id. Unknown ids fall back to [`UserType::Author`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", from = "i32")]
pub enum UserType {
    Admin,
    Author,
}

impl UserType {
    pub const ADMIN_ID: i32 = 1;
    pub const AUTHOR_ID: i32 = 2;

    pub fn id(self) -> i32 {
        match self {
            UserType::Admin => Self::ADMIN_ID,
            UserType::Author => Self::AUTHOR_ID,
        }
    }

    pub fn from_id(id: i32) -> Self {
        match id {
            Self::ADMIN_ID => UserType::Admin,
            _ => UserType::Author,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            UserType::Admin => "Admin",
            UserType::Author => "Author",
        }
    }
}

impl From<UserType> for i32 {
    fn from(user_type: UserType) -> Self {
        user_type.id()
    }
}

impl From<i32> for UserType {
    fn from(id: i32) -> Self {
        UserType::from_id(id)
    }
}

/// User profile - the internal record an external identity maps to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i32,
    pub external_identity_id: String,
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub image_location: Option<String>,
    #[serde(rename = "userTypeId")]
    pub user_type: UserType,
    pub is_active: bool,
    pub create_date_time: DateTime<Utc>,
}

/// Caller-supplied fields of a new profile.
#[derive(Debug, Clone, Default)]
pub struct UserProfileDraft {
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub image_location: Option<String>,
}

impl UserProfile {
    pub const EXTERNAL_ID_MAX_LEN: usize = 28;
    pub const NAME_MAX_LEN: usize = 50;
    pub const EMAIL_MAX_LEN: usize = 555;

    /// Create a new, active author profile for an external identity.
    pub fn new(external_identity_id: String, draft: UserProfileDraft) -> Self {
        Self {
            id: UNSAVED_ID,
            external_identity_id,
            display_name: draft.display_name,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            image_location: draft.image_location,
            user_type: UserType::Author,
            is_active: true,
            create_date_time: Utc::now(),
        }
    }

}

impl UserProfileDraft {
    /// Check required fields and column limits.
    pub fn validate(&self) -> Result<(), DomainError> {
        require_text("Display name", &self.display_name, UserProfile::NAME_MAX_LEN)?;
        require_text("First name", &self.first_name, UserProfile::NAME_MAX_LEN)?;
        require_text("Last name", &self.last_name, UserProfile::NAME_MAX_LEN)?;
        require_text("Email", &self.email, UserProfile::EMAIL_MAX_LEN)?;
        if !self.email.contains('@') {
            return Err(DomainError::Validation("Invalid email address".to_string()));
        }
        limit_image_location(self.image_location.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_user_type_is_author() {
        assert_eq!(UserType::from_id(1), UserType::Admin);
        assert_eq!(UserType::from_id(2), UserType::Author);
        assert_eq!(UserType::from_id(42), UserType::Author);
    }

    fn filled() -> UserProfileDraft {
        UserProfileDraft {
            display_name: "ada".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            image_location: None,
        }
    }

    #[test]
    fn draft_requires_every_name() {
        assert!(filled().validate().is_ok());
        assert!(UserProfileDraft::default().validate().is_err());

        let mut draft = filled();
        draft.last_name = " ".to_string();
        assert!(matches!(draft.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn draft_names_are_bounded() {
        let mut draft = filled();
        draft.display_name = "d".repeat(UserProfile::NAME_MAX_LEN);
        assert!(draft.validate().is_ok());

        draft.display_name.push('d');
        assert!(matches!(draft.validate(), Err(DomainError::Validation(_))));

        let mut draft = filled();
        draft.first_name = "f".repeat(UserProfile::NAME_MAX_LEN + 1);
        assert!(matches!(draft.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn draft_email_needs_at_sign_and_fits_column() {
        let mut draft = filled();
        draft.email = "nobody".to_string();
        assert!(matches!(draft.validate(), Err(DomainError::Validation(_))));

        draft.email = format!("{}@example.com", "a".repeat(UserProfile::EMAIL_MAX_LEN));
        assert!(matches!(draft.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn profile_serializes_user_type_as_id() {
        let mut profile = UserProfile::new("ext-1".to_string(), UserProfileDraft::default());
        profile.user_type = UserType::Admin;

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["userTypeId"], 1);
        assert_eq!(json["externalIdentityId"], "ext-1");
        assert_eq!(json["isActive"], true);
    }
}
