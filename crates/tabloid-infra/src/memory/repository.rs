//! Repository port implementations over the [`MemoryStore`].

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;

use tabloid_core::domain::{
    Category, Comment, Post, PostReaction, ReactionCount, UNSAVED_ID, UserProfile,
};
use tabloid_core::error::RepoError;
use tabloid_core::ports::{
    BaseRepository, CategoryRepository, CommentRepository, PostRepository, UserProfileRepository,
};

use super::store::{MemoryStore, Record};

/// Generic in-memory repository for one entity type.
pub struct InMemoryRepository<T> {
    store: Arc<MemoryStore>,
    _entity: PhantomData<T>,
}

impl<T> InMemoryRepository<T> {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Record> BaseRepository<T, i32> for InMemoryRepository<T> {
    async fn find_by_id(&self, id: i32) -> Result<Option<T>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(T::table(&tables).rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(T::table(&tables).rows.values().cloned().collect())
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        let mut tables = self.store.tables.write().await;

        entity.check_references(&tables)?;
        if let Some(key) = entity.unique_key() {
            let taken = T::table(&tables)
                .rows
                .values()
                .any(|row| row.id() != entity.id() && row.unique_key() == Some(key));
            if taken {
                return Err(RepoError::Constraint(format!(
                    "unique violation: '{key}' already exists"
                )));
            }
        }

        let table = T::table_mut(&mut tables);
        if entity.id() == UNSAVED_ID {
            return Ok(table.insert(entity));
        }
        match table.rows.get_mut(&entity.id()) {
            Some(row) => {
                *row = entity.clone();
                Ok(entity)
            }
            None => Err(RepoError::NotFound),
        }
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut tables = self.store.tables.write().await;
        if T::table_mut(&mut tables).rows.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        T::cascade_delete(id, &mut tables);
        Ok(())
    }
}

#[async_trait]
impl UserProfileRepository for InMemoryRepository<UserProfile> {
    async fn find_by_external_id(
        &self,
        external_identity_id: &str,
    ) -> Result<Option<UserProfile>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .users
            .rows
            .values()
            .find(|u| u.external_identity_id == external_identity_id)
            .cloned())
    }

    async fn find_by_active(&self, is_active: bool) -> Result<Vec<UserProfile>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .users
            .rows
            .values()
            .filter(|u| u.is_active == is_active)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl PostRepository for InMemoryRepository<Post> {
    async fn find_by_user_id(&self, user_profile_id: i32) -> Result<Vec<Post>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .posts
            .rows
            .values()
            .filter(|p| p.user_profile_id == user_profile_id)
            .cloned()
            .collect())
    }

    async fn reaction_counts(&self, post_id: i32) -> Result<Vec<ReactionCount>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .reaction_types
            .rows
            .values()
            .map(|reaction_type| ReactionCount {
                reaction_type: reaction_type.clone(),
                count: tables
                    .reactions
                    .rows
                    .values()
                    .filter(|r| r.post_id == post_id && r.reaction_type_id == reaction_type.id)
                    .count() as i64,
            })
            .collect())
    }

    async fn add_reaction(&self, reaction: PostReaction) -> Result<PostReaction, RepoError> {
        let mut tables = self.store.tables.write().await;
        reaction.check_references(&tables)?;
        Ok(tables.reactions.insert(reaction))
    }
}

#[async_trait]
impl CategoryRepository for InMemoryRepository<Category> {
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .categories
            .rows
            .values()
            .find(|c| c.name == name)
            .cloned())
    }
}

#[async_trait]
impl CommentRepository for InMemoryRepository<Comment> {
    async fn find_by_post_id(&self, post_id: i32) -> Result<Vec<Comment>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .comments
            .rows
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tabloid_core::domain::{CommentDraft, PostDraft, UserProfileDraft};

    struct Fixture {
        users: InMemoryRepository<UserProfile>,
        posts: InMemoryRepository<Post>,
        categories: InMemoryRepository<Category>,
        comments: InMemoryRepository<Comment>,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(MemoryStore::seeded());
        Fixture {
            users: InMemoryRepository::new(store.clone()),
            posts: InMemoryRepository::new(store.clone()),
            categories: InMemoryRepository::new(store.clone()),
            comments: InMemoryRepository::new(store),
        }
    }

    fn draft(category_id: i32) -> PostDraft {
        PostDraft {
            id: None,
            category_id,
            title: "Title".to_string(),
            content: "Content".to_string(),
            image_location: None,
            publish_date_time: Utc::now(),
            is_approved: true,
        }
    }

    async fn seed_post(f: &Fixture) -> (UserProfile, Post) {
        let user = f
            .users
            .save(UserProfile::new("ext".to_string(), UserProfileDraft::default()))
            .await
            .unwrap();
        let category = f.categories.save(Category::new("News").unwrap()).await.unwrap();
        let post = f.posts.save(Post::new(user.id, draft(category.id))).await.unwrap();
        (user, post)
    }

    #[tokio::test]
    async fn test_save_assigns_ids_and_updates() {
        let f = fixture();
        let first = f.categories.save(Category::new("News").unwrap()).await.unwrap();
        let second = f.categories.save(Category::new("Sports").unwrap()).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        let mut renamed = first.clone();
        renamed.name = "World".to_string();
        f.categories.save(renamed).await.unwrap();

        let found = f.categories.find_by_id(first.id).await.unwrap().unwrap();
        assert_eq!(found.name, "World");
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let f = fixture();
        let mut ghost = Category::new("Ghost").unwrap();
        ghost.id = 42;

        assert!(matches!(
            f.categories.save(ghost).await,
            Err(RepoError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_unique_name_is_enforced() {
        let f = fixture();
        f.categories.save(Category::new("News").unwrap()).await.unwrap();

        assert!(matches!(
            f.categories.save(Category::new("News").unwrap()).await,
            Err(RepoError::Constraint(_))
        ));
    }

    #[tokio::test]
    async fn test_post_requires_existing_category() {
        let f = fixture();
        let user = f
            .users
            .save(UserProfile::new("ext".to_string(), UserProfileDraft::default()))
            .await
            .unwrap();

        assert!(matches!(
            f.posts.save(Post::new(user.id, draft(7))).await,
            Err(RepoError::Constraint(_))
        ));
    }

    #[tokio::test]
    async fn test_reaction_counts_include_all_types() {
        let f = fixture();
        let (user, post) = seed_post(&f).await;

        for reaction_type_id in [1, 1, 3] {
            f.posts
                .add_reaction(PostReaction {
                    id: UNSAVED_ID,
                    post_id: post.id,
                    user_profile_id: user.id,
                    reaction_type_id,
                })
                .await
                .unwrap();
        }

        let counts = f.posts.reaction_counts(post.id).await.unwrap();
        assert_eq!(counts.len(), 6);
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].count, 0);
        assert_eq!(counts[2].count, 1);
    }

    #[tokio::test]
    async fn test_reaction_on_missing_post_violates_constraint() {
        let f = fixture();
        let (user, _) = seed_post(&f).await;

        let result = f
            .posts
            .add_reaction(PostReaction {
                id: UNSAVED_ID,
                post_id: 999,
                user_profile_id: user.id,
                reaction_type_id: 1,
            })
            .await;
        assert!(matches!(result, Err(RepoError::Constraint(_))));
    }

    #[tokio::test]
    async fn test_delete_post_cascades_to_comments() {
        let f = fixture();
        let (user, post) = seed_post(&f).await;
        let draft = CommentDraft {
            subject: "Hi".to_string(),
            content: "First".to_string(),
        };
        f.comments
            .save(Comment::new(post.id, user.id, draft))
            .await
            .unwrap();

        f.posts.delete(post.id).await.unwrap();

        assert!(f.comments.find_by_post_id(post.id).await.unwrap().is_empty());
        assert!(matches!(
            f.posts.delete(post.id).await,
            Err(RepoError::NotFound)
        ));
    }
}
