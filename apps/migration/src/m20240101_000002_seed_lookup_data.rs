use sea_orm_migration::prelude::*;

use tabloid_core::domain::{DEFAULT_REACTION_TYPES, UserType as Role};

use super::m20240101_000001_create_tables::{ReactionType, UserType};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut user_types = Query::insert()
            .into_table(UserType::Table)
            .columns([UserType::Id, UserType::Name])
            .to_owned();
        for role in [Role::Admin, Role::Author] {
            user_types.values_panic([role.id().into(), role.name().into()]);
        }
        manager.exec_stmt(user_types).await?;

        let mut reaction_types = Query::insert()
            .into_table(ReactionType::Table)
            .columns([ReactionType::Name, ReactionType::ImageLocation])
            .to_owned();
        for (name, image_location) in DEFAULT_REACTION_TYPES {
            reaction_types.values_panic([(*name).into(), (*image_location).into()]);
        }
        manager.exec_stmt(reaction_types).await?;

        tracing::info!(
            reaction_types = DEFAULT_REACTION_TYPES.len(),
            "Seeded user and reaction types"
        );
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(ReactionType::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(UserType::Table).to_owned())
            .await
    }
}
