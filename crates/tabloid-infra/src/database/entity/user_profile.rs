//! User profile entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use tabloid_core::domain::{UserProfile, UserType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_profile")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub external_identity_id: String,
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub image_location: Option<String>,
    pub user_type_id: i32,
    pub is_active: bool,
    pub create_date_time: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for UserProfile {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            external_identity_id: model.external_identity_id,
            display_name: model.display_name,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            image_location: model.image_location,
            user_type: UserType::from_id(model.user_type_id),
            is_active: model.is_active,
            create_date_time: model.create_date_time.into(),
        }
    }
}

impl From<UserProfile> for ActiveModel {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: super::primary_key(profile.id),
            external_identity_id: Set(profile.external_identity_id),
            display_name: Set(profile.display_name),
            first_name: Set(profile.first_name),
            last_name: Set(profile.last_name),
            email: Set(profile.email),
            image_location: Set(profile.image_location),
            user_type_id: Set(profile.user_type.id()),
            is_active: Set(profile.is_active),
            create_date_time: Set(profile.create_date_time.into()),
        }
    }
}
