use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::info;
use uuid::Uuid;

use models::organization;
use crate::errors::ServiceError;

/// Create an organization.
pub async fn create_organization(db: &DatabaseConnection, name: &str) -> Result<organization::Model, ServiceError> {
    let created = organization::create(db, name).await?;
    info!(org_id = %created.id, name = %created.name, "organization_created");
    Ok(created)
}

/// Get an organization by id.
pub async fn get_organization(db: &DatabaseConnection, id: Uuid) -> Result<Option<organization::Model>, ServiceError> {
    Ok(organization::Entity::find_by_id(id).one(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn organization_crud() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let name = format!("org_{}", Uuid::new_v4().simple());
        let org = create_organization(&db, &name).await?;
        assert_eq!(get_organization(&db, org.id).await?.map(|o| o.name), Some(name));
        assert!(get_organization(&db, Uuid::new_v4()).await?.is_none());
        assert!(create_organization(&db, " ").await.is_err());
        Ok(())
    }
}
