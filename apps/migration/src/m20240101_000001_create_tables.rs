use sea_orm_migration::prelude::*;

use tabloid_core::domain::{
    Category as CategoryRecord, Comment as CommentRecord, IMAGE_LOCATION_MAX_LEN,
    Post as PostRecord, UserProfile as UserProfileRecord,
};

const EXTERNAL_ID_LEN: u32 = UserProfileRecord::EXTERNAL_ID_MAX_LEN as u32;
const PERSON_NAME_LEN: u32 = UserProfileRecord::NAME_MAX_LEN as u32;
const EMAIL_LEN: u32 = UserProfileRecord::EMAIL_MAX_LEN as u32;
const IMAGE_LEN: u32 = IMAGE_LOCATION_MAX_LEN as u32;
const TITLE_LEN: u32 = PostRecord::TITLE_MAX_LEN as u32;
const SUBJECT_LEN: u32 = CommentRecord::SUBJECT_MAX_LEN as u32;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserType::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserType::Id).integer().not_null().primary_key())
                    .col(ColumnDef::new(UserType::Name).string_len(20).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserProfile::Table)
                    .if_not_exists()
                    .col(pk(UserProfile::Id))
                    .col(
                        ColumnDef::new(UserProfile::ExternalIdentityId)
                            .string_len(EXTERNAL_ID_LEN)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(UserProfile::DisplayName).string_len(PERSON_NAME_LEN).not_null())
                    .col(ColumnDef::new(UserProfile::FirstName).string_len(PERSON_NAME_LEN).not_null())
                    .col(ColumnDef::new(UserProfile::LastName).string_len(PERSON_NAME_LEN).not_null())
                    .col(ColumnDef::new(UserProfile::Email).string_len(EMAIL_LEN).not_null())
                    .col(ColumnDef::new(UserProfile::ImageLocation).string_len(IMAGE_LEN).null())
                    .col(ColumnDef::new(UserProfile::UserTypeId).integer().not_null())
                    .col(
                        ColumnDef::new(UserProfile::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(UserProfile::CreateDateTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user_profile-user_type_id")
                            .from(UserProfile::Table, UserProfile::UserTypeId)
                            .to(UserType::Table, UserType::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .if_not_exists()
                    .col(pk(Category::Id))
                    .col(
                        ColumnDef::new(Category::Name)
                            .string_len(CategoryRecord::NAME_MAX_LEN as u32)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Category::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Post::Table)
                    .if_not_exists()
                    .col(pk(Post::Id))
                    .col(ColumnDef::new(Post::UserProfileId).integer().not_null())
                    .col(ColumnDef::new(Post::CategoryId).integer().not_null())
                    .col(ColumnDef::new(Post::Title).string_len(TITLE_LEN).not_null())
                    .col(ColumnDef::new(Post::Content).text().not_null())
                    .col(ColumnDef::new(Post::ImageLocation).string_len(IMAGE_LEN).null())
                    .col(
                        ColumnDef::new(Post::CreateDateTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Post::PublishDateTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Post::IsApproved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-post-user_profile_id")
                            .from(Post::Table, Post::UserProfileId)
                            .to(UserProfile::Table, UserProfile::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-post-category_id")
                            .from(Post::Table, Post::CategoryId)
                            .to(Category::Table, Category::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(pk(Comment::Id))
                    .col(ColumnDef::new(Comment::PostId).integer().not_null())
                    .col(ColumnDef::new(Comment::UserProfileId).integer().not_null())
                    .col(ColumnDef::new(Comment::Subject).string_len(SUBJECT_LEN).not_null())
                    .col(ColumnDef::new(Comment::Content).text().not_null())
                    .col(
                        ColumnDef::new(Comment::CreateDateTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-comment-post_id")
                            .from(Comment::Table, Comment::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-comment-user_profile_id")
                            .from(Comment::Table, Comment::UserProfileId)
                            .to(UserProfile::Table, UserProfile::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ReactionType::Table)
                    .if_not_exists()
                    .col(pk(ReactionType::Id))
                    .col(ColumnDef::new(ReactionType::Name).string_len(50).not_null())
                    .col(
                        ColumnDef::new(ReactionType::ImageLocation)
                            .string_len(255)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PostReaction::Table)
                    .if_not_exists()
                    .col(pk(PostReaction::Id))
                    .col(ColumnDef::new(PostReaction::PostId).integer().not_null())
                    .col(ColumnDef::new(PostReaction::UserProfileId).integer().not_null())
                    .col(ColumnDef::new(PostReaction::ReactionTypeId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-post_reaction-post_id")
                            .from(PostReaction::Table, PostReaction::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-post_reaction-user_profile_id")
                            .from(PostReaction::Table, PostReaction::UserProfileId)
                            .to(UserProfile::Table, UserProfile::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-post_reaction-reaction_type_id")
                            .from(PostReaction::Table, PostReaction::ReactionTypeId)
                            .to(ReactionType::Table, ReactionType::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Children before parents.
        manager
            .drop_table(Table::drop().table(PostReaction::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ReactionType::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Comment::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Post::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Category::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserProfile::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserType::Table).to_owned())
            .await
    }
}

fn pk<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

#[derive(DeriveIden)]
pub enum UserType {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum UserProfile {
    Table,
    Id,
    ExternalIdentityId,
    DisplayName,
    FirstName,
    LastName,
    Email,
    ImageLocation,
    UserTypeId,
    IsActive,
    CreateDateTime,
}

#[derive(DeriveIden)]
pub enum Category {
    Table,
    Id,
    Name,
    IsActive,
}

#[derive(DeriveIden)]
pub enum Post {
    Table,
    Id,
    UserProfileId,
    CategoryId,
    Title,
    Content,
    ImageLocation,
    CreateDateTime,
    PublishDateTime,
    IsApproved,
}

#[derive(DeriveIden)]
enum Comment {
    Table,
    Id,
    PostId,
    UserProfileId,
    Subject,
    Content,
    CreateDateTime,
}

#[derive(DeriveIden)]
pub enum ReactionType {
    Table,
    Id,
    Name,
    ImageLocation,
}

#[derive(DeriveIden)]
enum PostReaction {
    Table,
    Id,
    PostId,
    UserProfileId,
    ReactionTypeId,
}
