//! Existence checks that map a missing parent record to its typed error.
use sea_orm::ConnectionTrait;
use uuid::Uuid;

use models::{dataset, organization, user};

use crate::errors::ServiceError;

pub(crate) async fn require_user<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<user::Model, ServiceError> {
    user::find(db, id).await?.ok_or(ServiceError::UserNotFound(id))
}

pub(crate) async fn require_dataset<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<dataset::Model, ServiceError> {
    dataset::find(db, id).await?.ok_or(ServiceError::DatasetNotFound(id))
}

pub(crate) async fn require_organization<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<organization::Model, ServiceError> {
    use sea_orm::EntityTrait;
    organization::Entity::find_by_id(id).one(db).await?.ok_or(ServiceError::OrganizationNotFound(id))
}
