//! Create `dataset_file` and the `rel_dataset_dataset_file` link table.
//!
//! Files are owned by a user and attached to datasets through the link table,
//! unique per (dataset, file) pair.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DatasetFile::Table)
                    .if_not_exists()
                    .col(uuid(DatasetFile::Id).primary_key())
                    .col(string_len(DatasetFile::Title, 255).not_null())
                    .col(string_len(DatasetFile::FileUrl, 1024).not_null())
                    .col(uuid(DatasetFile::OwnerUserId).not_null())
                    .col(boolean(DatasetFile::Status).not_null().default(true))
                    .col(timestamp_with_time_zone(DatasetFile::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dataset_file_owner_user")
                            .from(DatasetFile::Table, DatasetFile::OwnerUserId)
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
                    .table(RelDatasetDatasetFile::Table)
                    .if_not_exists()
                    .col(uuid(RelDatasetDatasetFile::Id).primary_key())
                    .col(uuid(RelDatasetDatasetFile::DatasetId).not_null())
                    .col(uuid(RelDatasetDatasetFile::DatasetFileId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rel_file_dataset")
                            .from(RelDatasetDatasetFile::Table, RelDatasetDatasetFile::DatasetId)
                            .to(Dataset::Table, Dataset::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rel_file_dataset_file")
                            .from(RelDatasetDatasetFile::Table, RelDatasetDatasetFile::DatasetFileId)
                            .to(DatasetFile::Table, DatasetFile::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uniq_rel_dataset_dataset_file")
                    .table(RelDatasetDatasetFile::Table)
                    .col(RelDatasetDatasetFile::DatasetId)
                    .col(RelDatasetDatasetFile::DatasetFileId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(RelDatasetDatasetFile::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(DatasetFile::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum DatasetFile { Table, Id, Title, FileUrl, OwnerUserId, Status, CreatedAt }

#[derive(DeriveIden)]
enum RelDatasetDatasetFile { Table, Id, DatasetId, DatasetFileId }

#[derive(DeriveIden)]
enum Dataset { Table, Id }

#[derive(DeriveIden)]
enum User { Table, Id }
