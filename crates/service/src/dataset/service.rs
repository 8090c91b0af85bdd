use sea_orm::{DatabaseConnection, PaginatorTrait, Set, ActiveModelTrait, TransactionTrait};
use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use common::pagination::Pagination;
use models::dataset;

use super::domain::{DatasetDetails, DatasetInput, DatasetUpdate};
use super::metadata::create_dataset_metadata;
use crate::dataset_file_service::attach_file;
use crate::errors::{ensure_owner, ServiceError};
use crate::lookup::{require_dataset, require_organization, require_user};
use crate::tag_service::attach_tag;

/// Create a dataset owned by `user_id`, with its metadata, files and tags, in one transaction.
#[instrument(skip(db, data, user_id), fields(user_id = %user_id, files = data.files.len(), tags = data.tags.len()))]
pub async fn create_dataset(db: &DatabaseConnection, data: DatasetInput, user_id: Uuid) -> Result<DatasetDetails, ServiceError> {
    dataset::validate_title(&data.title)?;
    let txn = db.begin().await?;

    let owner = require_user(&txn, user_id).await?;
    let metadata = create_dataset_metadata(&txn, owner.id, data.metadata_fields()).await?;
    let created = dataset::create(&txn, owner.id, metadata.id, &data.title, data.description.clone()).await?;

    let mut files = Vec::with_capacity(data.files.len());
    for file in &data.files {
        files.push(attach_file(&txn, owner.id, created.id, file).await?);
    }
    let mut tags = Vec::with_capacity(data.tags.len());
    for name in &data.tags {
        tags.push(attach_tag(&txn, created.id, name).await?);
    }

    txn.commit().await?;
    info!(dataset_id = %created.id, "dataset_created");
    Ok(DatasetDetails { dataset: created, metadata, files, tags })
}

/// Fetch a dataset by id, soft-deleted or not.
pub async fn read_dataset(db: &DatabaseConnection, dataset_id: Uuid) -> Result<dataset::Model, ServiceError> {
    require_dataset(db, dataset_id).await
}

/// All datasets that are not soft-deleted, newest first.
pub async fn read_all_datasets(db: &DatabaseConnection) -> Result<Vec<dataset::Model>, ServiceError> {
    Ok(dataset::find_live().all(db).await?)
}

/// One page of `read_all_datasets`.
pub async fn read_datasets_paginated(db: &DatabaseConnection, opts: Pagination) -> Result<Vec<dataset::Model>, ServiceError> {
    Ok(dataset::find_live()
        .paginate(db, opts.page_size())
        .fetch_page(opts.page_index())
        .await?)
}

/// Overwrite the allow-listed fields present in `data`. `None` when the dataset is absent.
#[instrument(skip(db, data))]
pub async fn update_dataset(db: &DatabaseConnection, dataset_id: Uuid, data: DatasetUpdate) -> Result<Option<dataset::Model>, ServiceError> {
    let Some(found) = dataset::find(db, dataset_id).await? else { return Ok(None) };
    let mut am: dataset::ActiveModel = found.into();
    if let Some(title) = data.title {
        dataset::validate_title(&title)?;
        am.title = Set(title.trim().to_string());
    }
    if let Some(description) = data.description {
        am.description = Set(Some(description));
    }
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await?;
    info!(dataset_id = %dataset_id, "dataset_updated");
    Ok(Some(updated))
}

/// Soft delete: the record stays readable with `is_deleted = true`. `None` when absent.
#[instrument(skip(db))]
pub async fn delete_dataset(db: &DatabaseConnection, dataset_id: Uuid) -> Result<Option<dataset::Model>, ServiceError> {
    let Some(found) = dataset::find(db, dataset_id).await? else { return Ok(None) };
    dataset::soft_delete(db, found).await?;
    info!(dataset_id = %dataset_id, "dataset_deleted");
    Ok(dataset::find(db, dataset_id).await?)
}

/// Make `org_id` the owning organization. Only the owning user may do this.
#[instrument(skip(db))]
pub async fn add_owner_org(db: &DatabaseConnection, user_id: Uuid, dataset_id: Uuid, org_id: Uuid) -> Result<dataset::Model, ServiceError> {
    let found = require_dataset(db, dataset_id).await?;
    ensure_owner(user_id, found.owner_user_id)?;
    let org = require_organization(db, org_id).await?;

    let mut am: dataset::ActiveModel = found.into();
    am.owner_org_id = Set(Some(org.id));
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await?;
    info!(dataset_id = %dataset_id, org_id = %org_id, "dataset_owner_org_set");
    Ok(updated)
}
