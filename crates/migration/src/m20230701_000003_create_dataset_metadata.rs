//! Create `dataset_metadata` table with FK `publisher` -> `user`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DatasetMetadata::Table)
                    .if_not_exists()
                    .col(uuid(DatasetMetadata::Id).primary_key())
                    .col(text_null(DatasetMetadata::File))
                    .col(uuid(DatasetMetadata::Publisher).not_null())
                    .col(timestamp_with_time_zone(DatasetMetadata::DateCreated).not_null())
                    .col(timestamp_with_time_zone(DatasetMetadata::DateModified).not_null())
                    .col(string_len_null(DatasetMetadata::SourceLink, 512))
                    .col(string_len_null(DatasetMetadata::ResourceType, 128))
                    .col(string_len_null(DatasetMetadata::LicenseLink, 512))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dataset_metadata_publisher")
                            .from(DatasetMetadata::Table, DatasetMetadata::Publisher)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(DatasetMetadata::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum DatasetMetadata {
    Table,
    Id,
    File,
    Publisher,
    DateCreated,
    DateModified,
    SourceLink,
    ResourceType,
    LicenseLink,
}

#[derive(DeriveIden)]
enum User { Table, Id }
