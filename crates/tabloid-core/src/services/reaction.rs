use std::sync::Arc;

use crate::domain::{PostReaction, UNSAVED_ID};
use crate::error::DomainError;
use crate::policy::{self, Viewer};
use crate::ports::PostRepository;

pub struct ReactionService {
    posts: Arc<dyn PostRepository>,
}

impl ReactionService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Record a reaction by the viewer. The reacting user is always the
    /// viewer; any repository failure surfaces as `NotFound` for the post.
    pub async fn add_reaction(
        &self,
        viewer: &Viewer,
        post_id: i32,
        reaction_type_id: i32,
    ) -> Result<PostReaction, DomainError> {
        policy::require_active(viewer)?;

        let reaction = PostReaction {
            id: UNSAVED_ID,
            post_id,
            user_profile_id: viewer.id,
            reaction_type_id,
        };

        match self.posts.add_reaction(reaction).await {
            Ok(saved) => {
                tracing::debug!(post_id, reaction_type_id, viewer_id = viewer.id, "Reaction added");
                Ok(saved)
            }
            Err(e) => {
                tracing::warn!(post_id, reaction_type_id, error = %e, "Reaction rejected");
                Err(DomainError::not_found("Post", post_id))
            }
        }
    }
}
