//! Create `dataset` table.
//!
//! `metadata_id` is unique: a dataset has at most one metadata record.
//! Publication flags arrive later in `m20230816_000008`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dataset::Table)
                    .if_not_exists()
                    .col(uuid(Dataset::Id).primary_key())
                    .col(string_len(Dataset::Title, 255).not_null())
                    .col(text_null(Dataset::Description))
                    .col(uuid(Dataset::OwnerUserId).not_null())
                    .col(uuid_null(Dataset::OwnerOrgId))
                    .col(uuid(Dataset::MetadataId).unique_key().not_null())
                    .col(boolean(Dataset::IsDeleted).not_null().default(false))
                    .col(timestamp_with_time_zone(Dataset::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Dataset::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dataset_owner_user")
                            .from(Dataset::Table, Dataset::OwnerUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dataset_owner_org")
                            .from(Dataset::Table, Dataset::OwnerOrgId)
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dataset_metadata")
                            .from(Dataset::Table, Dataset::MetadataId)
                            .to(DatasetMetadata::Table, DatasetMetadata::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Dataset::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Dataset {
    Table,
    Id,
    Title,
    Description,
    OwnerUserId,
    OwnerOrgId,
    MetadataId,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum User { Table, Id }

#[derive(DeriveIden)]
enum Organization { Table, Id }

#[derive(DeriveIden)]
enum DatasetMetadata { Table, Id }
