use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{dataset, dataset_metadata, db, user};




/// Connect and migrate, or `None` when `SKIP_DB_TESTS` is set.
pub(crate) async fn setup_db() -> Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        println!("Skipping database tests (SKIP_DB_TESTS is set)");
        return Ok(None);
    }
    let db = db::connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(Some(db))
}

pub(crate) async fn seed_user(db: &DatabaseConnection) -> Result<user::Model> {
    let name = format!("user_{}", Uuid::new_v4().simple());
    Ok(user::create(db, &name, "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA", user::Profile::default()).await?)
}

pub(crate) async fn seed_dataset(db: &DatabaseConnection, owner: &user::Model, title: &str) -> Result<dataset::Model> {
    let md = dataset_metadata::create(db, owner.id, dataset_metadata::MetadataFields::default()).await?;
    Ok(dataset::create(db, owner.id, md.id, title, None).await?)
}
