//! PostgreSQL repository implementations.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use tabloid_core::domain::{Category, Comment, Post, PostReaction, ReactionCount, UserProfile};
use tabloid_core::error::RepoError;
use tabloid_core::ports::{
    CategoryRepository, CommentRepository, PostRepository, UserProfileRepository,
};

use super::entity::{category, comment, post, post_reaction, reaction_type, user_profile};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

pub type PostgresUserProfileRepository = PostgresBaseRepository<user_profile::Entity>;
pub type PostgresPostRepository = PostgresBaseRepository<post::Entity>;
pub type PostgresCategoryRepository = PostgresBaseRepository<category::Entity>;
pub type PostgresCommentRepository = PostgresBaseRepository<comment::Entity>;

#[async_trait]
impl UserProfileRepository for PostgresUserProfileRepository {
    async fn find_by_external_id(
        &self,
        external_identity_id: &str,
    ) -> Result<Option<UserProfile>, RepoError> {
        let result = user_profile::Entity::find()
            .filter(user_profile::Column::ExternalIdentityId.eq(external_identity_id))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_active(&self, is_active: bool) -> Result<Vec<UserProfile>, RepoError> {
        let result = user_profile::Entity::find()
            .filter(user_profile::Column::IsActive.eq(is_active))
            .order_by_asc(user_profile::Column::DisplayName)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_user_id(&self, user_profile_id: i32) -> Result<Vec<Post>, RepoError> {
        let result = post::Entity::find()
            .filter(post::Column::UserProfileId.eq(user_profile_id))
            .order_by_desc(post::Column::PublishDateTime)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn reaction_counts(&self, post_id: i32) -> Result<Vec<ReactionCount>, RepoError> {
        let reaction_types = reaction_type::Entity::find()
            .order_by_asc(reaction_type::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        let counts: HashMap<i32, i64> = post_reaction::Entity::find()
            .select_only()
            .column(post_reaction::Column::ReactionTypeId)
            .column_as(Expr::col(post_reaction::Column::Id).count(), "count")
            .filter(post_reaction::Column::PostId.eq(post_id))
            .group_by(post_reaction::Column::ReactionTypeId)
            .into_tuple::<(i32, i64)>()
            .all(&self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .collect();

        Ok(reaction_types
            .into_iter()
            .map(|model| ReactionCount {
                count: counts.get(&model.id).copied().unwrap_or(0),
                reaction_type: model.into(),
            })
            .collect())
    }

    async fn add_reaction(&self, reaction: PostReaction) -> Result<PostReaction, RepoError> {
        tracing::debug!(
            post_id = reaction.post_id,
            reaction_type_id = reaction.reaction_type_id,
            "Inserting post reaction"
        );

        let model = post_reaction::ActiveModel::from(reaction)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, RepoError> {
        let result = category::Entity::find()
            .filter(category::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn find_by_post_id(&self, post_id: i32) -> Result<Vec<Comment>, RepoError> {
        let result = comment::Entity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_asc(comment::Column::CreateDateTime)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
