use sea_orm::{ConnectionTrait, DatabaseConnection};
use tracing::info;
use uuid::Uuid;

use models::dataset_metadata::{self, MetadataFields};

use super::domain::MetadataUpdate;
use crate::errors::ServiceError;
use crate::lookup::require_user;

/// Create the metadata record for a new dataset, published by `user_id`.
pub async fn create_dataset_metadata<C: ConnectionTrait>(
    db: &C,
    user_id: Uuid,
    fields: MetadataFields,
) -> Result<dataset_metadata::Model, ServiceError> {
    require_user(db, user_id).await?;
    Ok(dataset_metadata::create(db, user_id, fields).await?)
}

/// Overwrite the given metadata fields of a dataset. `None` when the dataset is absent.
pub async fn update_dataset_metadata(
    db: &DatabaseConnection,
    dataset_id: Uuid,
    data: MetadataUpdate,
) -> Result<Option<dataset_metadata::Model>, ServiceError> {
    let Some(ds) = models::dataset::find(db, dataset_id).await? else { return Ok(None) };
    let updated = dataset_metadata::update(db, ds.metadata_id, data.into()).await?;
    info!(dataset_id = %dataset_id, metadata_id = %updated.id, "dataset_metadata_updated");
    Ok(Some(updated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, new_dataset, new_user};

    #[tokio::test]
    async fn metadata_updates_are_partial() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;
        let owner = new_user(&db).await?;
        let created = new_dataset(&db, owner.id, "metadata").await?;
        assert_eq!(created.metadata.publisher, owner.id);

        let first = MetadataUpdate { resource_type: Some("csv".into()), ..Default::default() };
        let md = update_dataset_metadata(&db, created.dataset.id, first).await?.unwrap();
        assert_eq!(md.resource_type.as_deref(), Some("csv"));
        assert!(md.date_modified >= created.metadata.date_modified);
        assert_eq!(md.date_created, created.metadata.date_created);

        let second = MetadataUpdate { license_link: Some("cc0".into()), ..Default::default() };
        let md = update_dataset_metadata(&db, created.dataset.id, second).await?.unwrap();
        assert_eq!(md.resource_type.as_deref(), Some("csv"));
        assert_eq!(md.license_link.as_deref(), Some("cc0"));

        assert!(update_dataset_metadata(&db, Uuid::new_v4(), MetadataUpdate::default()).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn metadata_needs_a_publisher() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;
        let missing = Uuid::new_v4();
        let res = create_dataset_metadata(&db, missing, MetadataFields::default()).await;
        assert!(matches!(res, Err(ServiceError::UserNotFound(id)) if id == missing));
        Ok(())
    }
}
