#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use common::utils::logging::init_test_logging;
use models::{db::connect, user};

use crate::dataset::{self, DatasetDetails, DatasetInput};
use crate::user_service::{self, NewUser};

/// Migrated connection for one test. Unset `DATABASE_URL` means a private in-memory SQLite.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    init_test_logging();
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub async fn new_user(db: &DatabaseConnection) -> Result<user::Model, anyhow::Error> {
    let input = NewUser {
        username: format!("user_{}", Uuid::new_v4().simple()),
        password: "Passw0rd!".into(),
        ..Default::default()
    };
    Ok(user_service::create_user(db, input).await?)
}

pub async fn new_dataset(db: &DatabaseConnection, owner: Uuid, title: &str) -> Result<DatasetDetails, anyhow::Error> {
    let input = DatasetInput { title: title.to_string(), ..Default::default() };
    Ok(dataset::create_dataset(db, input, owner).await?)
}
