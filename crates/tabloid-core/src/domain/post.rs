use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Comment, ReactionCount, UNSAVED_ID, limit_image_location, require_text};
use crate::error::DomainError;

/// Post entity - a blog post owned by exactly one user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i32,
    pub user_profile_id: i32,
    pub category_id: i32,
    pub title: String,
    pub content: String,
    pub image_location: Option<String>,
    pub create_date_time: DateTime<Utc>,
    pub publish_date_time: DateTime<Utc>,
    pub is_approved: bool,
}

/// Caller-supplied fields of a post, used for both create and update.
///
/// `id` is only meaningful on update, where it must match the path id.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub id: Option<i32>,
    pub category_id: i32,
    pub title: String,
    pub content: String,
    pub image_location: Option<String>,
    pub publish_date_time: DateTime<Utc>,
    pub is_approved: bool,
}

impl PostDraft {
    /// Check required fields and column limits. The publish date is checked
    /// separately against the policy floor.
    pub fn validate(&self) -> Result<(), DomainError> {
        require_text("Post title", &self.title, Post::TITLE_MAX_LEN)?;
        require_text("Post content", &self.content, usize::MAX)?;
        limit_image_location(self.image_location.as_deref())
    }
}

impl Post {
    pub const TITLE_MAX_LEN: usize = 255;

    /// Create a new post owned by `owner`, stamped with the current time.
    pub fn new(owner: i32, draft: PostDraft) -> Self {
        Self {
            id: UNSAVED_ID,
            user_profile_id: owner,
            category_id: draft.category_id,
            title: draft.title,
            content: draft.content,
            image_location: draft.image_location,
            create_date_time: Utc::now(),
            publish_date_time: draft.publish_date_time,
            is_approved: draft.is_approved,
        }
    }

    /// Apply editable fields from a draft. Owner and creation time are kept.
    pub fn apply(&mut self, draft: PostDraft) {
        self.category_id = draft.category_id;
        self.title = draft.title;
        self.content = draft.content;
        self.image_location = draft.image_location;
        self.publish_date_time = draft.publish_date_time;
        self.is_approved = draft.is_approved;
    }
}

/// A post together with its comments and reaction counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetails {
    pub post: Post,
    pub comments: Vec<Comment>,
    pub reaction_counts: Vec<ReactionCount>,
}
