//! Create `dataset_tag` table with FK to `dataset`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DatasetTag::Table)
                    .if_not_exists()
                    .col(uuid(DatasetTag::Id).primary_key())
                    .col(uuid(DatasetTag::DatasetId).not_null())
                    .col(string_len(DatasetTag::Name, 100).not_null())
                    .col(boolean(DatasetTag::Status).not_null().default(true))
                    .col(timestamp_with_time_zone(DatasetTag::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dataset_tag_dataset")
                            .from(DatasetTag::Table, DatasetTag::DatasetId)
                            .to(Dataset::Table, Dataset::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(DatasetTag::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum DatasetTag { Table, Id, DatasetId, Name, Status, CreatedAt }

#[derive(DeriveIden)]
enum Dataset { Table, Id }
