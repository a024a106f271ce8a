use std::sync::Arc;

use chrono::Utc;

use crate::domain::{Comment, CommentDraft, Post};
use crate::error::{DomainError, RepoError};
use crate::policy::{self, Viewer};
use crate::ports::{CommentRepository, PostRepository};

/// Comments on posts. Commenting follows the visibility of the post.
pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
    posts: Arc<dyn PostRepository>,
}

impl CommentService {
    pub fn new(comments: Arc<dyn CommentRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { comments, posts }
    }

    /// Comments of a post, oldest first.
    pub async fn list_for_post(
        &self,
        viewer: &Viewer,
        post_id: i32,
    ) -> Result<Vec<Comment>, DomainError> {
        policy::require_active(viewer)?;
        self.visible_post(viewer, post_id).await?;

        let mut comments = self.comments.find_by_post_id(post_id).await?;
        comments.sort_by_key(|c| c.create_date_time);
        Ok(comments)
    }

    /// Add a comment authored by the viewer.
    pub async fn add(
        &self,
        viewer: &Viewer,
        post_id: i32,
        draft: CommentDraft,
    ) -> Result<Comment, DomainError> {
        policy::require_active(viewer)?;
        draft.validate()?;
        self.visible_post(viewer, post_id).await?;

        let saved = self
            .comments
            .save(Comment::new(post_id, viewer.id, draft))
            .await
            .map_err(|e| match e {
                // The post vanished between the check and the insert.
                RepoError::Constraint(_) => DomainError::not_found("Post", post_id),
                other => other.into(),
            })?;

        tracing::info!(comment_id = saved.id, post_id, viewer_id = viewer.id, "Comment added");
        Ok(saved)
    }

    /// Edit a comment. Only its author may do so.
    pub async fn update(
        &self,
        viewer: &Viewer,
        id: i32,
        draft: CommentDraft,
    ) -> Result<Comment, DomainError> {
        policy::require_active(viewer)?;
        draft.validate()?;

        let mut comment = self.find(id).await?;
        if comment.user_profile_id != viewer.id {
            return Err(DomainError::Forbidden);
        }

        comment.subject = draft.subject;
        comment.content = draft.content;
        self.comments.save(comment).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::not_found("Comment", id),
            other => other.into(),
        })
    }

    /// Delete a comment. Its author or an admin may do so.
    pub async fn delete(&self, viewer: &Viewer, id: i32) -> Result<(), DomainError> {
        policy::require_active(viewer)?;

        let comment = self.find(id).await?;
        if comment.user_profile_id != viewer.id && !viewer.is_admin() {
            return Err(DomainError::Forbidden);
        }

        self.comments.delete(id).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::not_found("Comment", id),
            other => other.into(),
        })?;

        tracing::info!(comment_id = id, viewer_id = viewer.id, "Comment deleted");
        Ok(())
    }

    async fn visible_post(&self, viewer: &Viewer, post_id: i32) -> Result<Post, DomainError> {
        let post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Post", post_id))?;

        if !policy::can_view(viewer, &post, Utc::now()) {
            return Err(DomainError::Forbidden);
        }
        Ok(post)
    }

    async fn find(&self, id: i32) -> Result<Comment, DomainError> {
        self.comments
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Comment", id))
    }
}
