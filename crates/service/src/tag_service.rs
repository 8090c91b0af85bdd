use sea_orm::{ConnectionTrait, DatabaseConnection};
use tracing::info;
use uuid::Uuid;

use models::dataset_tag;

use crate::errors::ServiceError;
use crate::lookup::require_dataset;

pub(crate) async fn attach_tag<C: ConnectionTrait>(db: &C, dataset_id: Uuid, name: &str) -> Result<dataset_tag::Model, ServiceError> {
    Ok(dataset_tag::create(db, dataset_id, name).await?)
}

/// Tag a dataset.
pub async fn create_dataset_tag(db: &DatabaseConnection, dataset_id: Uuid, name: &str) -> Result<dataset_tag::Model, ServiceError> {
    require_dataset(db, dataset_id).await?;
    let created = attach_tag(db, dataset_id, name).await?;
    info!(tag_id = %created.id, dataset_id = %dataset_id, name = %created.name, "dataset_tag_created");
    Ok(created)
}

/// Soft delete a tag.
pub async fn delete_tag(db: &DatabaseConnection, tag_id: Uuid) -> Result<dataset_tag::Model, ServiceError> {
    let found = dataset_tag::find(db, tag_id).await?.ok_or_else(|| ServiceError::not_found("tag"))?;
    let updated = dataset_tag::soft_delete(db, found).await?;
    info!(tag_id = %tag_id, "dataset_tag_deleted");
    Ok(updated)
}

/// Active tags of a dataset, by name.
pub async fn list_dataset_tags(db: &DatabaseConnection, dataset_id: Uuid) -> Result<Vec<dataset_tag::Model>, ServiceError> {
    Ok(dataset_tag::list_active(db, dataset_id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, new_dataset, new_user};

    #[tokio::test]
    async fn tag_lifecycle() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;
        let owner = new_user(&db).await?;
        let ds = new_dataset(&db, owner.id, "tags").await?.dataset;

        let ocean = create_dataset_tag(&db, ds.id, " ocean ").await?;
        assert_eq!(ocean.name, "ocean");
        create_dataset_tag(&db, ds.id, "biology").await?;

        let names: Vec<String> = list_dataset_tags(&db, ds.id).await?.into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["biology", "ocean"]);

        let deleted = delete_tag(&db, ocean.id).await?;
        assert!(!deleted.status);
        assert_eq!(list_dataset_tags(&db, ds.id).await?.len(), 1);

        assert!(matches!(create_dataset_tag(&db, Uuid::new_v4(), "x").await, Err(ServiceError::DatasetNotFound(_))));
        assert!(matches!(delete_tag(&db, Uuid::new_v4()).await, Err(ServiceError::NotFound(_))));
        assert!(create_dataset_tag(&db, ds.id, "").await.is_err());
        Ok(())
    }
}
