use sea_orm::DatabaseConnection;
use tracing::{info, instrument};
use uuid::Uuid;

use models::dataset::{self, DatasetFlag};

use crate::errors::{ensure_owner, ServiceError};
use crate::lookup::require_dataset;

/// Flip one publication flag on behalf of the owning user.
#[instrument(skip(db, flag), fields(flag = flag.as_str()))]
async fn set_status(
    db: &DatabaseConnection,
    user_id: Uuid,
    dataset_id: Uuid,
    flag: DatasetFlag,
    value: bool,
) -> Result<dataset::Model, ServiceError> {
    let found = require_dataset(db, dataset_id).await?;
    ensure_owner(user_id, found.owner_user_id)?;
    let previous = flag.get(&found);
    let updated = dataset::set_flag(db, found, flag, value).await?;
    info!(dataset_id = %dataset_id, previous, value, "dataset_status_changed");
    Ok(updated)
}

pub async fn publish_dataset(db: &DatabaseConnection, user_id: Uuid, dataset_id: Uuid) -> Result<dataset::Model, ServiceError> {
    set_status(db, user_id, dataset_id, DatasetFlag::Published, true).await
}

pub async fn unpublish_dataset(db: &DatabaseConnection, user_id: Uuid, dataset_id: Uuid) -> Result<dataset::Model, ServiceError> {
    set_status(db, user_id, dataset_id, DatasetFlag::Published, false).await
}

pub async fn approve_dataset(db: &DatabaseConnection, user_id: Uuid, dataset_id: Uuid) -> Result<dataset::Model, ServiceError> {
    set_status(db, user_id, dataset_id, DatasetFlag::Approved, true).await
}

pub async fn disapprove_dataset(db: &DatabaseConnection, user_id: Uuid, dataset_id: Uuid) -> Result<dataset::Model, ServiceError> {
    set_status(db, user_id, dataset_id, DatasetFlag::Approved, false).await
}

pub async fn archive_dataset(db: &DatabaseConnection, user_id: Uuid, dataset_id: Uuid) -> Result<dataset::Model, ServiceError> {
    set_status(db, user_id, dataset_id, DatasetFlag::Archived, true).await
}

pub async fn unarchive_dataset(db: &DatabaseConnection, user_id: Uuid, dataset_id: Uuid) -> Result<dataset::Model, ServiceError> {
    set_status(db, user_id, dataset_id, DatasetFlag::Archived, false).await
}
