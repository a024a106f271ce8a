//! Reaction type entity for SeaORM. Rows are seeded by the migration.

use sea_orm::entity::prelude::*;

use tabloid_core::domain::ReactionType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reaction_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub image_location: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ReactionType {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            image_location: model.image_location,
        }
    }
}
