use async_trait::async_trait;

use crate::domain::{
    Category, Comment, Post, PostReaction, ReactionCount, UserProfile,
};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// List every entity.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Save an entity. Unsaved entities are inserted, others updated.
    ///
    /// Updating a row that does not exist yields [`RepoError::NotFound`].
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

#[async_trait]
pub trait UserProfileRepository: BaseRepository<UserProfile, i32> {
    async fn find_by_external_id(
        &self,
        external_identity_id: &str,
    ) -> Result<Option<UserProfile>, RepoError>;

    async fn find_by_active(&self, is_active: bool) -> Result<Vec<UserProfile>, RepoError>;
}

#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    async fn find_by_user_id(&self, user_profile_id: i32) -> Result<Vec<Post>, RepoError>;

    /// Count reactions on a post, one entry per reaction type (zeros included).
    async fn reaction_counts(&self, post_id: i32) -> Result<Vec<ReactionCount>, RepoError>;

    /// Record a reaction. Unknown posts or reaction types fail with
    /// [`RepoError::Constraint`].
    async fn add_reaction(&self, reaction: PostReaction) -> Result<PostReaction, RepoError>;
}

#[async_trait]
pub trait CategoryRepository: BaseRepository<Category, i32> {
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, RepoError>;
}

#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, i32> {
    async fn find_by_post_id(&self, post_id: i32) -> Result<Vec<Comment>, RepoError>;
}
