//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20230701_000001_create_user;
mod m20230701_000002_create_organization;
mod m20230701_000003_create_dataset_metadata;
mod m20230701_000004_create_dataset;
mod m20230701_000005_create_dataset_file;
mod m20230701_000006_create_dataset_tag;
mod m20230701_000007_create_comment_and_like;
mod m20230816_000008_rename_author_and_add_flags;
mod m20230816_000009_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20230701_000001_create_user::Migration),
            Box::new(m20230701_000002_create_organization::Migration),
            Box::new(m20230701_000003_create_dataset_metadata::Migration),
            Box::new(m20230701_000004_create_dataset::Migration),
            Box::new(m20230701_000005_create_dataset_file::Migration),
            Box::new(m20230701_000006_create_dataset_tag::Migration),
            Box::new(m20230701_000007_create_comment_and_like::Migration),
            Box::new(m20230816_000008_rename_author_and_add_flags::Migration),
            // Indexes should always be applied last
            Box::new(m20230816_000009_add_indexes::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::{ConnectOptions, Database, DatabaseConnection};

    async fn memory_db() -> Result<DatabaseConnection, DbErr> {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1).sqlx_logging(false);
        Database::connect(opt).await
    }

    #[tokio::test]
    async fn up_creates_every_table() -> Result<(), DbErr> {
        let db = memory_db().await?;
        Migrator::up(&db, None).await?;

        let manager = SchemaManager::new(&db);
        for table in [
            "user",
            "organization",
            "dataset_metadata",
            "dataset",
            "dataset_file",
            "rel_dataset_dataset_file",
            "dataset_tag",
            "dataset_comment",
            "dataset_like",
            "dataset_bookmark",
        ] {
            assert!(manager.has_table(table).await?, "missing table {table}");
        }
        assert!(manager.has_column("dataset_comment", "author_id").await?);
        assert!(!manager.has_column("dataset_comment", "user_id").await?);
        assert!(manager.has_column("dataset", "is_published").await?);
        Ok(())
    }

    #[tokio::test]
    async fn down_then_up_is_repeatable() -> Result<(), DbErr> {
        let db = memory_db().await?;
        Migrator::up(&db, None).await?;

        // Step back over the indexes and the rename migration only
        Migrator::down(&db, Some(2)).await?;
        let manager = SchemaManager::new(&db);
        assert!(!manager.has_table("dataset_bookmark").await?);
        assert!(manager.has_column("dataset_like", "user_id").await?);
        assert!(!manager.has_column("dataset", "is_archived").await?);

        Migrator::up(&db, None).await?;
        assert!(manager.has_table("dataset_bookmark").await?);
        assert!(manager.has_column("dataset_like", "author_id").await?);

        Migrator::down(&db, None).await?;
        assert!(!manager.has_table("dataset").await?);
        Ok(())
    }
}
