use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use tracing::{info, instrument};
use uuid::Uuid;

use models::{dataset_file, rel_dataset_dataset_file};

use crate::dataset::FileInput;
use crate::errors::{ensure_owner, ServiceError};
use crate::lookup::{require_dataset, require_user};

/// Insert a file and link it to the dataset on an existing connection or transaction.
pub(crate) async fn attach_file<C: ConnectionTrait>(
    db: &C,
    owner_user_id: Uuid,
    dataset_id: Uuid,
    file: &FileInput,
) -> Result<dataset_file::Model, ServiceError> {
    let created = dataset_file::create(db, owner_user_id, &file.title, &file.url).await?;
    rel_dataset_dataset_file::link(db, dataset_id, created.id).await?;
    Ok(created)
}

/// Upload record for a dataset, owned by `user_id`.
#[instrument(skip(db, file), fields(title = %file.title))]
pub async fn create_dataset_file(
    db: &DatabaseConnection,
    user_id: Uuid,
    dataset_id: Uuid,
    file: FileInput,
) -> Result<dataset_file::Model, ServiceError> {
    let txn = db.begin().await?;
    let owner = require_user(&txn, user_id).await?;
    let ds = require_dataset(&txn, dataset_id).await?;
    let created = attach_file(&txn, owner.id, ds.id, &file).await?;
    txn.commit().await?;
    info!(file_id = %created.id, dataset_id = %dataset_id, "dataset_file_created");
    Ok(created)
}

/// Soft delete by the file's owner.
#[instrument(skip(db))]
pub async fn delete_file(db: &DatabaseConnection, user_id: Uuid, file_id: Uuid) -> Result<dataset_file::Model, ServiceError> {
    let found = dataset_file::find(db, file_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("dataset file"))?;
    ensure_owner(user_id, found.owner_user_id)?;
    let updated = dataset_file::soft_delete(db, found).await?;
    info!(file_id = %file_id, "dataset_file_deleted");
    Ok(updated)
}

/// Active files of a dataset.
pub async fn list_dataset_files(db: &DatabaseConnection, dataset_id: Uuid) -> Result<Vec<dataset_file::Model>, ServiceError> {
    require_dataset(db, dataset_id).await?;
    Ok(dataset_file::list_active_for_dataset(db, dataset_id).await?)
}
