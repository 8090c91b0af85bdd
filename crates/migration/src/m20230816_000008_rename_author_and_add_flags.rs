//! Rename comment/like `user_id` to `author_id`, add soft-delete `status` to both,
//! add the publication flags to `dataset`, and create `dataset_bookmark`.
//!
//! One alteration per statement: SQLite rejects combined ALTER TABLE options.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(DatasetComment::Table)
                    .rename_column(DatasetComment::UserId, DatasetComment::AuthorId)
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(DatasetLike::Table)
                    .rename_column(DatasetLike::UserId, DatasetLike::AuthorId)
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(DatasetComment::Table)
                    .add_column(boolean(DatasetComment::Status).not_null().default(true))
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(DatasetLike::Table)
                    .add_column(boolean(DatasetLike::Status).not_null().default(true))
                    .to_owned(),
            )
            .await?;

        for flag in [Dataset::IsApproved, Dataset::IsArchived, Dataset::IsPublished] {
            manager
                .alter_table(
                    Table::alter()
                        .table(Dataset::Table)
                        .add_column(boolean(flag).not_null().default(false))
                        .to_owned(),
                )
                .await?;
        }

        manager
            .create_table(
                Table::create()
                    .table(DatasetBookmark::Table)
                    .if_not_exists()
                    .col(uuid(DatasetBookmark::Id).primary_key())
                    .col(uuid(DatasetBookmark::OwnerUserId).not_null())
                    .col(uuid(DatasetBookmark::DatasetId).not_null())
                    .col(boolean(DatasetBookmark::Status).not_null().default(true))
                    .col(timestamp_with_time_zone(DatasetBookmark::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dataset_bookmark_owner_user")
                            .from(DatasetBookmark::Table, DatasetBookmark::OwnerUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dataset_bookmark_dataset")
                            .from(DatasetBookmark::Table, DatasetBookmark::DatasetId)
                            .to(Dataset::Table, Dataset::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(DatasetBookmark::Table).to_owned()).await?;

        for flag in [Dataset::IsApproved, Dataset::IsArchived, Dataset::IsPublished] {
            manager
                .alter_table(Table::alter().table(Dataset::Table).drop_column(flag).to_owned())
                .await?;
        }
        manager
            .alter_table(Table::alter().table(DatasetLike::Table).drop_column(DatasetLike::Status).to_owned())
            .await?;
        manager
            .alter_table(Table::alter().table(DatasetComment::Table).drop_column(DatasetComment::Status).to_owned())
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(DatasetLike::Table)
                    .rename_column(DatasetLike::AuthorId, DatasetLike::UserId)
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(DatasetComment::Table)
                    .rename_column(DatasetComment::AuthorId, DatasetComment::UserId)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum DatasetComment { Table, UserId, AuthorId, Status }

#[derive(DeriveIden)]
enum DatasetLike { Table, UserId, AuthorId, Status }

#[derive(DeriveIden)]
enum Dataset { Table, Id, IsApproved, IsArchived, IsPublished }

#[derive(DeriveIden)]
enum DatasetBookmark { Table, Id, OwnerUserId, DatasetId, Status, CreatedAt }

#[derive(DeriveIden)]
enum User { Table, Id }
