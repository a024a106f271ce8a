//! The set of repositories the services are built from.

use std::sync::Arc;

use tabloid_core::domain::{Category, Comment, Post, UserProfile};
use tabloid_core::ports::{
    CategoryRepository, CommentRepository, PostRepository, UserProfileRepository,
};

use crate::memory::{InMemoryRepository, MemoryStore};

/// Repository handles shared by all services.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserProfileRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub comments: Arc<dyn CommentRepository>,
}

impl Repositories {
    /// In-memory repositories over one shared store, seeded with the default
    /// reaction types. Data is lost on process restart.
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::seeded());
        Self {
            users: Arc::new(InMemoryRepository::<UserProfile>::new(store.clone())),
            posts: Arc::new(InMemoryRepository::<Post>::new(store.clone())),
            categories: Arc::new(InMemoryRepository::<Category>::new(store.clone())),
            comments: Arc::new(InMemoryRepository::<Comment>::new(store)),
        }
    }

    /// PostgreSQL repositories sharing one connection pool.
    #[cfg(feature = "postgres")]
    pub fn postgres(db: sea_orm::DbConn) -> Self {
        use crate::database::{
            PostgresCategoryRepository, PostgresCommentRepository, PostgresPostRepository,
            PostgresUserProfileRepository,
        };

        Self {
            users: Arc::new(PostgresUserProfileRepository::new(db.clone())),
            posts: Arc::new(PostgresPostRepository::new(db.clone())),
            categories: Arc::new(PostgresCategoryRepository::new(db.clone())),
            comments: Arc::new(PostgresCommentRepository::new(db)),
        }
    }
}
