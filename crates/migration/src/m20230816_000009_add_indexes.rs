use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Dataset: owner lookups and the non-deleted listing
        manager
            .create_index(
                Index::create()
                    .name("idx_dataset_owner_user")
                    .table(Dataset::Table)
                    .col(Dataset::OwnerUserId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_dataset_is_deleted")
                    .table(Dataset::Table)
                    .col(Dataset::IsDeleted)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_dataset_tag_dataset")
                    .table(DatasetTag::Table)
                    .col(DatasetTag::DatasetId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_dataset_comment_dataset")
                    .table(DatasetComment::Table)
                    .col(DatasetComment::DatasetId)
                    .to_owned(),
            )
            .await?;

        // Like/Bookmark: "does this user already have one on this dataset"
        manager
            .create_index(
                Index::create()
                    .name("idx_dataset_like_dataset_author")
                    .table(DatasetLike::Table)
                    .col(DatasetLike::DatasetId)
                    .col(DatasetLike::AuthorId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_dataset_bookmark_owner_dataset")
                    .table(DatasetBookmark::Table)
                    .col(DatasetBookmark::OwnerUserId)
                    .col(DatasetBookmark::DatasetId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_dataset_owner_user").table(Dataset::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_dataset_is_deleted").table(Dataset::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_dataset_tag_dataset").table(DatasetTag::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_dataset_comment_dataset").table(DatasetComment::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_dataset_like_dataset_author").table(DatasetLike::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_dataset_bookmark_owner_dataset").table(DatasetBookmark::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Dataset { Table, OwnerUserId, IsDeleted }

#[derive(DeriveIden)]
enum DatasetTag { Table, DatasetId }

#[derive(DeriveIden)]
enum DatasetComment { Table, DatasetId }

#[derive(DeriveIden)]
enum DatasetLike { Table, DatasetId, AuthorId }

#[derive(DeriveIden)]
enum DatasetBookmark { Table, OwnerUserId, DatasetId }
