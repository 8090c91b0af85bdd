//! Create `dataset_comment` and `dataset_like`.
//!
//! Both start out keyed on `user_id`; `m20230816_000008` renames it to `author_id`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DatasetComment::Table)
                    .if_not_exists()
                    .col(uuid(DatasetComment::Id).primary_key())
                    .col(uuid(DatasetComment::DatasetId).not_null())
                    .col(uuid(DatasetComment::UserId).not_null())
                    .col(text(DatasetComment::Body).not_null())
                    .col(timestamp_with_time_zone(DatasetComment::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dataset_comment_dataset")
                            .from(DatasetComment::Table, DatasetComment::DatasetId)
                            .to(Dataset::Table, Dataset::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dataset_comment_user")
                            .from(DatasetComment::Table, DatasetComment::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DatasetLike::Table)
                    .if_not_exists()
                    .col(uuid(DatasetLike::Id).primary_key())
                    .col(uuid(DatasetLike::DatasetId).not_null())
                    .col(uuid(DatasetLike::UserId).not_null())
                    .col(timestamp_with_time_zone(DatasetLike::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dataset_like_dataset")
                            .from(DatasetLike::Table, DatasetLike::DatasetId)
                            .to(Dataset::Table, Dataset::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dataset_like_user")
                            .from(DatasetLike::Table, DatasetLike::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(DatasetLike::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(DatasetComment::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum DatasetComment { Table, Id, DatasetId, UserId, Body, CreatedAt }

#[derive(DeriveIden)]
enum DatasetLike { Table, Id, DatasetId, UserId, CreatedAt }

#[derive(DeriveIden)]
enum Dataset { Table, Id }

#[derive(DeriveIden)]
enum User { Table, Id }
