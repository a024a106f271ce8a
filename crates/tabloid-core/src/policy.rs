//! Authorization and post visibility rules.
//!
//! Every service operation receives the [`Viewer`] explicitly and runs one of
//! the checks below before touching a repository.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{Post, UserProfile, UserType};
use crate::error::DomainError;

/// The authenticated user profile making the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer {
    pub id: i32,
    pub user_type: UserType,
    pub is_active: bool,
}

impl Viewer {
    pub fn is_admin(&self) -> bool {
        self.user_type == UserType::Admin
    }
}

impl From<&UserProfile> for Viewer {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: profile.id,
            user_type: profile.user_type,
            is_active: profile.is_active,
        }
    }
}

/// Earliest accepted publish date: 1800-01-01T00:00:00Z.
pub fn earliest_publish_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1800, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Whether `viewer` may see `post` at instant `now`.
///
/// Owners and admins always see the post. Everyone else only sees approved
/// posts whose publish date is not in the future.
pub fn can_view(viewer: &Viewer, post: &Post, now: DateTime<Utc>) -> bool {
    if viewer.id == post.user_profile_id || viewer.is_admin() {
        return true;
    }
    post.is_approved && post.publish_date_time <= now
}

/// Whether `viewer` may edit or delete `post`.
pub fn can_modify(viewer: &Viewer, post: &Post) -> bool {
    viewer.id == post.user_profile_id || viewer.is_admin()
}

pub fn require_active(viewer: &Viewer) -> Result<(), DomainError> {
    if !viewer.is_active {
        return Err(DomainError::Unauthenticated);
    }
    Ok(())
}

pub fn require_admin(viewer: &Viewer) -> Result<(), DomainError> {
    require_active(viewer)?;
    if !viewer.is_admin() {
        return Err(DomainError::Forbidden);
    }
    Ok(())
}

pub fn validate_publish_date(publish_date_time: DateTime<Utc>) -> Result<(), DomainError> {
    if publish_date_time < earliest_publish_date() {
        return Err(DomainError::Validation(
            "Publish date must not be earlier than 1800-01-01".to_string(),
        ));
    }
    Ok(())
}
