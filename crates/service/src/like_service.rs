use sea_orm::DatabaseConnection;
use tracing::{info, instrument};
use uuid::Uuid;

use models::dataset_like;

use crate::errors::{ensure_owner, ServiceError};
use crate::lookup::{require_dataset, require_user};

/// Like a dataset. Liking twice returns the existing active like.
#[instrument(skip(db))]
pub async fn create_like(db: &DatabaseConnection, dataset_id: Uuid, user_id: Uuid) -> Result<dataset_like::Model, ServiceError> {
    let author = require_user(db, user_id).await?;
    let ds = require_dataset(db, dataset_id).await?;
    if let Some(existing) = dataset_like::find_active(db, ds.id, author.id).await? {
        return Ok(existing);
    }
    let created = dataset_like::create(db, ds.id, author.id).await?;
    info!(like_id = %created.id, "like_created");
    Ok(created)
}

/// Withdraw a like. Only its author may do this.
#[instrument(skip(db))]
pub async fn delete_like(db: &DatabaseConnection, like_id: Uuid, user_id: Uuid) -> Result<dataset_like::Model, ServiceError> {
    let found = dataset_like::find(db, like_id).await?.ok_or_else(|| ServiceError::not_found("like"))?;
    ensure_owner(user_id, found.author_id)?;
    let updated = dataset_like::soft_delete(db, found).await?;
    info!(like_id = %like_id, "like_deleted");
    Ok(updated)
}

pub async fn count_likes(db: &DatabaseConnection, dataset_id: Uuid) -> Result<u64, ServiceError> {
    Ok(dataset_like::count_active(db, dataset_id).await?)
}
