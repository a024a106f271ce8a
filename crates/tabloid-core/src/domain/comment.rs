use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{UNSAVED_ID, require_text};
use crate::error::DomainError;

/// Comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i32,
    pub post_id: i32,
    pub user_profile_id: i32,
    pub subject: String,
    pub content: String,
    pub create_date_time: DateTime<Utc>,
}

/// Editable fields of a comment.
#[derive(Debug, Clone)]
pub struct CommentDraft {
    pub subject: String,
    pub content: String,
}

impl CommentDraft {
    pub fn validate(&self) -> Result<(), DomainError> {
        require_text("Comment subject", &self.subject, Comment::SUBJECT_MAX_LEN)?;
        require_text("Comment content", &self.content, usize::MAX)
    }
}

impl Comment {
    pub const SUBJECT_MAX_LEN: usize = 255;

    pub fn new(post_id: i32, author: i32, draft: CommentDraft) -> Self {
        Self {
            id: UNSAVED_ID,
            post_id,
            user_profile_id: author,
            subject: draft.subject,
            content: draft.content,
            create_date_time: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(subject: &str, content: &str) -> CommentDraft {
        CommentDraft {
            subject: subject.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn subject_is_required_and_bounded() {
        assert!(draft(&"s".repeat(255), "body").validate().is_ok());
        assert!(matches!(
            draft(&"s".repeat(256), "body").validate(),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            draft("  ", "body").validate(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn content_is_required() {
        assert!(matches!(
            draft("subject", "\n").validate(),
            Err(DomainError::Validation(_))
        ));
    }
}
