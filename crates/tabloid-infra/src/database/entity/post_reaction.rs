//! Post reaction entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use tabloid_core::domain::PostReaction;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "post_reaction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub post_id: i32,
    pub user_profile_id: i32,
    pub reaction_type_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id",
        on_delete = "Cascade"
    )]
    Post,
    #[sea_orm(
        belongs_to = "super::reaction_type::Entity",
        from = "Column::ReactionTypeId",
        to = "super::reaction_type::Column::Id"
    )]
    ReactionType,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl Related<super::reaction_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReactionType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for PostReaction {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            post_id: model.post_id,
            user_profile_id: model.user_profile_id,
            reaction_type_id: model.reaction_type_id,
        }
    }
}

impl From<PostReaction> for ActiveModel {
    fn from(reaction: PostReaction) -> Self {
        Self {
            id: super::primary_key(reaction.id),
            post_id: Set(reaction.post_id),
            user_profile_id: Set(reaction.user_profile_id),
            reaction_type_id: Set(reaction.reaction_type_id),
        }
    }
}
