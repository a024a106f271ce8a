use std::sync::Arc;

use crate::domain::{UserProfile, UserProfileDraft, UserType};
use crate::error::{DomainError, RepoError};
use crate::policy::{self, Viewer};
use crate::ports::UserProfileRepository;

/// Identity resolution, registration and admin user management.
pub struct UserProfileService {
    users: Arc<dyn UserProfileRepository>,
}

impl UserProfileService {
    pub fn new(users: Arc<dyn UserProfileRepository>) -> Self {
        Self { users }
    }

    /// Map an external identity to the viewer making the request.
    ///
    /// Unknown and deactivated identities are both `Unauthenticated`.
    pub async fn resolve(&self, external_identity_id: &str) -> Result<Viewer, DomainError> {
        let profile = self
            .users
            .find_by_external_id(external_identity_id)
            .await?
            .ok_or_else(|| {
                tracing::debug!("No user profile for external identity");
                DomainError::Unauthenticated
            })?;

        if !profile.is_active {
            tracing::debug!(user_profile_id = profile.id, "Deactivated user rejected");
            return Err(DomainError::Unauthenticated);
        }

        Ok(Viewer::from(&profile))
    }

    pub async fn get_by_external_id(
        &self,
        external_identity_id: &str,
    ) -> Result<UserProfile, DomainError> {
        let profile = self
            .users
            .find_by_external_id(external_identity_id)
            .await?
            .ok_or_else(|| DomainError::not_found("UserProfile", external_identity_id))?;

        if !profile.is_active {
            return Err(DomainError::Unauthenticated);
        }
        Ok(profile)
    }

    /// Register a new author for an external identity.
    pub async fn register(
        &self,
        external_identity_id: &str,
        draft: UserProfileDraft,
    ) -> Result<UserProfile, DomainError> {
        validate_external_id(external_identity_id)?;
        draft.validate()?;
        if self
            .users
            .find_by_external_id(external_identity_id)
            .await?
            .is_some()
        {
            return Err(already_registered());
        }

        let profile = UserProfile::new(external_identity_id.to_string(), draft);
        let saved = self.users.save(profile).await.map_err(|e| match e {
            RepoError::Constraint(_) => already_registered(),
            other => other.into(),
        })?;

        tracing::info!(user_profile_id = saved.id, "User profile registered");
        Ok(saved)
    }

    /// Make sure an active admin exists for an external identity.
    ///
    /// An existing profile is promoted and reactivated; otherwise a new one is
    /// created from `draft`. Used to bootstrap the first administrator.
    pub async fn ensure_admin(
        &self,
        external_identity_id: &str,
        draft: UserProfileDraft,
    ) -> Result<UserProfile, DomainError> {
        validate_external_id(external_identity_id)?;

        let profile = match self.users.find_by_external_id(external_identity_id).await? {
            Some(existing)
                if existing.user_type == UserType::Admin && existing.is_active =>
            {
                return Ok(existing);
            }
            Some(existing) => existing,
            None => {
                draft.validate()?;
                UserProfile::new(external_identity_id.to_string(), draft)
            }
        };

        let saved = self
            .users
            .save(UserProfile {
                user_type: UserType::Admin,
                is_active: true,
                ..profile
            })
            .await?;

        tracing::info!(user_profile_id = saved.id, "Administrator ensured");
        Ok(saved)
    }

    pub async fn list_active(&self, viewer: &Viewer) -> Result<Vec<UserProfile>, DomainError> {
        self.list_by_active(viewer, true).await
    }

    pub async fn list_inactive(&self, viewer: &Viewer) -> Result<Vec<UserProfile>, DomainError> {
        self.list_by_active(viewer, false).await
    }

    pub async fn activate(&self, viewer: &Viewer, id: i32) -> Result<UserProfile, DomainError> {
        self.set_active(viewer, id, true).await
    }

    /// Soft-delete a user. Their posts are left untouched.
    pub async fn deactivate(&self, viewer: &Viewer, id: i32) -> Result<UserProfile, DomainError> {
        self.set_active(viewer, id, false).await
    }

    async fn list_by_active(
        &self,
        viewer: &Viewer,
        is_active: bool,
    ) -> Result<Vec<UserProfile>, DomainError> {
        policy::require_admin(viewer)?;
        let mut users = self.users.find_by_active(is_active).await?;
        users.sort_by(|a, b| a.display_name.cmp(&b.display_name));
        Ok(users)
    }

    async fn set_active(
        &self,
        viewer: &Viewer,
        id: i32,
        is_active: bool,
    ) -> Result<UserProfile, DomainError> {
        policy::require_admin(viewer)?;

        let mut profile = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("UserProfile", id))?;

        profile.is_active = is_active;
        let saved = self.users.save(profile).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::not_found("UserProfile", id),
            other => other.into(),
        })?;

        tracing::info!(user_profile_id = id, is_active, admin_id = viewer.id, "User activation changed");
        Ok(saved)
    }
}

fn validate_external_id(external_identity_id: &str) -> Result<(), DomainError> {
    let len = external_identity_id.chars().count();
    if len == 0 || len > UserProfile::EXTERNAL_ID_MAX_LEN {
        return Err(DomainError::Validation(format!(
            "External identity id must be 1 to {} characters",
            UserProfile::EXTERNAL_ID_MAX_LEN
        )));
    }
    Ok(())
}

fn already_registered() -> DomainError {
    DomainError::Duplicate("User profile already registered".to_string())
}
