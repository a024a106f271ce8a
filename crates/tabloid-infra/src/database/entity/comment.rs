//! Comment entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use tabloid_core::domain::Comment;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub post_id: i32,
    pub user_profile_id: i32,
    pub subject: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub create_date_time: DateTimeWithTimeZone,
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
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Comment {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            post_id: model.post_id,
            user_profile_id: model.user_profile_id,
            subject: model.subject,
            content: model.content,
            create_date_time: model.create_date_time.into(),
        }
    }
}

impl From<Comment> for ActiveModel {
    fn from(comment: Comment) -> Self {
        Self {
            id: super::primary_key(comment.id),
            post_id: Set(comment.post_id),
            user_profile_id: Set(comment.user_profile_id),
            subject: Set(comment.subject),
            content: Set(comment.content),
            create_date_time: Set(comment.create_date_time.into()),
        }
    }
}
