use std::sync::Arc;

use chrono::Utc;

use crate::domain::{Category, Post, PostDetails, PostDraft};
use crate::error::{DomainError, RepoError};
use crate::policy::{self, Viewer};
use crate::ports::{CategoryRepository, CommentRepository, PostRepository};

/// Post CRUD with visibility and ownership rules.
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl PostService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            posts,
            comments,
            categories,
        }
    }

    /// Every post the viewer can see, newest publish date first.
    pub async fn list(&self, viewer: &Viewer) -> Result<Vec<Post>, DomainError> {
        policy::require_active(viewer)?;
        let posts = self.posts.find_all().await?;
        Ok(visible_to(viewer, posts))
    }

    /// Posts of one author that the viewer can see.
    pub async fn list_by_user(
        &self,
        viewer: &Viewer,
        user_profile_id: i32,
    ) -> Result<Vec<Post>, DomainError> {
        policy::require_active(viewer)?;
        let posts = self.posts.find_by_user_id(user_profile_id).await?;
        Ok(visible_to(viewer, posts))
    }

    pub async fn get_by_id(&self, viewer: &Viewer, id: i32) -> Result<PostDetails, DomainError> {
        policy::require_active(viewer)?;

        let post = self.find(id).await?;
        if !policy::can_view(viewer, &post, Utc::now()) {
            tracing::debug!(post_id = id, viewer_id = viewer.id, "Post hidden from viewer");
            return Err(DomainError::Forbidden);
        }

        let mut comments = self.comments.find_by_post_id(id).await?;
        comments.sort_by_key(|c| c.create_date_time);
        let reaction_counts = self.posts.reaction_counts(id).await?;

        Ok(PostDetails {
            post,
            comments,
            reaction_counts,
        })
    }

    /// Create a post owned by the viewer.
    pub async fn create(&self, viewer: &Viewer, draft: PostDraft) -> Result<Post, DomainError> {
        policy::require_active(viewer)?;
        draft.validate()?;
        policy::validate_publish_date(draft.publish_date_time)?;

        let post = Post::new(viewer.id, draft);
        let saved = self.posts.save(post).await.map_err(post_write_error)?;

        tracing::info!(post_id = saved.id, user_profile_id = viewer.id, "Post created");
        Ok(saved)
    }

    /// Update a post. The path id must match the draft id; owner and creation
    /// time of the stored post are kept.
    pub async fn update(
        &self,
        viewer: &Viewer,
        id: i32,
        draft: PostDraft,
    ) -> Result<Post, DomainError> {
        policy::require_active(viewer)?;
        if draft.id != Some(id) {
            return Err(DomainError::Validation(
                "Post id in path and body do not match".to_string(),
            ));
        }
        draft.validate()?;
        policy::validate_publish_date(draft.publish_date_time)?;

        let mut post = self.find(id).await?;
        if !policy::can_modify(viewer, &post) {
            return Err(DomainError::Forbidden);
        }

        post.apply(draft);
        let saved = self.posts.save(post).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::not_found("Post", id),
            other => post_write_error(other),
        })?;

        tracing::info!(post_id = id, viewer_id = viewer.id, "Post updated");
        Ok(saved)
    }

    pub async fn delete(&self, viewer: &Viewer, id: i32) -> Result<(), DomainError> {
        policy::require_active(viewer)?;

        let post = self.find(id).await?;
        if !policy::can_modify(viewer, &post) {
            return Err(DomainError::Forbidden);
        }

        self.posts.delete(id).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::not_found("Post", id),
            other => other.into(),
        })?;

        tracing::info!(post_id = id, viewer_id = viewer.id, "Post deleted");
        Ok(())
    }

    /// All categories, for picking one while writing a post.
    pub async fn categories(&self, viewer: &Viewer) -> Result<Vec<Category>, DomainError> {
        policy::require_active(viewer)?;
        let mut categories = self.categories.find_all().await?;
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn find(&self, id: i32) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Post", id))
    }
}

fn visible_to(viewer: &Viewer, mut posts: Vec<Post>) -> Vec<Post> {
    let now = Utc::now();
    posts.retain(|post| policy::can_view(viewer, post, now));
    posts.sort_by(|a, b| b.publish_date_time.cmp(&a.publish_date_time));
    posts
}

// A constraint failure on a post write means the category does not exist.
fn post_write_error(err: RepoError) -> DomainError {
    match err {
        RepoError::Constraint(msg) => {
            DomainError::Validation(format!("Post references an unknown category: {msg}"))
        }
        other => other.into(),
    }
}
