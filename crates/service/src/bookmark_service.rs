use sea_orm::DatabaseConnection;
use tracing::{info, instrument};
use uuid::Uuid;

use models::dataset_bookmark;

use crate::errors::{ensure_owner, ServiceError};
use crate::lookup::{require_dataset, require_user};

/// Bookmark a dataset for `user_id`. An existing active bookmark is returned as is.
#[instrument(skip(db))]
pub async fn create_bookmark(db: &DatabaseConnection, user_id: Uuid, dataset_id: Uuid) -> Result<dataset_bookmark::Model, ServiceError> {
    let owner = require_user(db, user_id).await?;
    let ds = require_dataset(db, dataset_id).await?;
    if let Some(existing) = dataset_bookmark::find_active(db, owner.id, ds.id).await? {
        return Ok(existing);
    }
    let created = dataset_bookmark::create(db, owner.id, ds.id).await?;
    info!(bookmark_id = %created.id, "bookmark_created");
    Ok(created)
}

/// Remove a bookmark. Only its owner may do this.
#[instrument(skip(db))]
pub async fn delete_bookmark(db: &DatabaseConnection, user_id: Uuid, bookmark_id: Uuid) -> Result<dataset_bookmark::Model, ServiceError> {
    let found = dataset_bookmark::find(db, bookmark_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("bookmark"))?;
    ensure_owner(user_id, found.owner_user_id)?;
    let updated = dataset_bookmark::soft_delete(db, found).await?;
    info!(bookmark_id = %bookmark_id, "bookmark_deleted");
    Ok(updated)
}

pub async fn list_bookmarks(db: &DatabaseConnection, user_id: Uuid) -> Result<Vec<dataset_bookmark::Model>, ServiceError> {
    require_user(db, user_id).await?;
    Ok(dataset_bookmark::list_active_for_user(db, user_id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, new_dataset, new_user};

    #[tokio::test]
    async fn bookmarking_twice_keeps_one() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;
        let owner = new_user(&db).await?;
        let reader = new_user(&db).await?;
        let ds = new_dataset(&db, owner.id, "saved").await?.dataset;

        let first = create_bookmark(&db, reader.id, ds.id).await?;
        let second = create_bookmark(&db, reader.id, ds.id).await?;
        assert_eq!(first.id, second.id);
        assert_eq!(list_bookmarks(&db, reader.id).await?.len(), 1);
        assert!(list_bookmarks(&db, owner.id).await?.is_empty());

        assert!(matches!(delete_bookmark(&db, owner.id, first.id).await, Err(ServiceError::NotAuthorized)));
        let gone = delete_bookmark(&db, reader.id, first.id).await?;
        assert!(!gone.status);
        assert!(list_bookmarks(&db, reader.id).await?.is_empty());

        let fresh = create_bookmark(&db, reader.id, ds.id).await?;
        assert_ne!(fresh.id, first.id);
        Ok(())
    }

    #[tokio::test]
    async fn bookmark_needs_user_and_dataset() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;
        let owner = new_user(&db).await?;
        let ghost = Uuid::new_v4();
        assert!(matches!(create_bookmark(&db, ghost, Uuid::new_v4()).await, Err(ServiceError::UserNotFound(_))));
        assert!(matches!(create_bookmark(&db, owner.id, ghost).await, Err(ServiceError::DatasetNotFound(_))));
        assert!(matches!(delete_bookmark(&db, owner.id, ghost).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(list_bookmarks(&db, ghost).await, Err(ServiceError::UserNotFound(_))));
        Ok(())
    }
}
