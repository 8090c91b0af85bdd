use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::dataset;
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dataset_tag")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub dataset_id: Uuid,
    pub name: String,
    pub status: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Dataset }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Dataset => Entity::belongs_to(dataset::Entity).from(Column::DatasetId).to(dataset::Column::Id).into() }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() { return Err(ModelError::Validation("tag name required".into())); }
    if name.trim().chars().count() > 100 { return Err(ModelError::Validation("tag name too long (<=100)".into())); }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, dataset_id: Uuid, name: &str) -> Result<Model, ModelError> {
    validate_name(name)?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        dataset_id: Set(dataset_id),
        name: Set(name.trim().to_string()),
        status: Set(true),
        created_at: Set(Utc::now().into()),
    };
    Ok(am.insert(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn list_active<C: ConnectionTrait>(db: &C, dataset_id: Uuid) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::DatasetId.eq(dataset_id))
        .filter(Column::Status.eq(true))
        .order_by_asc(Column::Name)
        .all(db)
        .await?)
}

pub async fn soft_delete<C: ConnectionTrait>(db: &C, model: Model) -> Result<Model, ModelError> {
    let mut am: ActiveModel = model.into();
    am.status = Set(false);
    Ok(am.update(db).await?)
}

#[cfg(test)]
mod tests {
    use super::validate_name;

    #[test]
    fn tag_names() {
        assert!(validate_name("climate").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name(&"x".repeat(101)).is_err());
    }
}
