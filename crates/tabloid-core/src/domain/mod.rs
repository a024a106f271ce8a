//! Domain entities - the core business objects.
//!
//! Entities that have not been persisted yet carry id `0`; the store assigns
//! the real id on insert.

mod category;
mod comment;
mod post;
mod reaction;
mod user_profile;

pub use category::Category;
pub use comment::{Comment, CommentDraft};
pub use post::{Post, PostDetails, PostDraft};
pub use reaction::{DEFAULT_REACTION_TYPES, PostReaction, ReactionCount, ReactionType};
pub use user_profile::{UserProfile, UserProfileDraft, UserType};

use crate::error::DomainError;

/// Id carried by entities that have not been saved yet.
pub const UNSAVED_ID: i32 = 0;

/// Length limit of every stored image URL.
pub const IMAGE_LOCATION_MAX_LEN: usize = 255;

fn require_text(field: &str, value: &str, max_len: usize) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} must not be empty")));
    }
    limit_text(field, value, max_len)
}

fn limit_text(field: &str, value: &str, max_len: usize) -> Result<(), DomainError> {
    if value.chars().count() > max_len {
        return Err(DomainError::Validation(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(())
}

fn limit_image_location(value: Option<&str>) -> Result<(), DomainError> {
    value.map_or(Ok(()), |url| {
        limit_text("Image location", url, IMAGE_LOCATION_MAX_LEN)
    })
}
