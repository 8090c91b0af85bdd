use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{dataset, user};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dataset_comment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub dataset_id: Uuid,
    pub author_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub status: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Dataset, Author }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Dataset => Entity::belongs_to(dataset::Entity).from(Column::DatasetId).to(dataset::Column::Id).into(),
            Relation::Author => Entity::belongs_to(user::Entity).from(Column::AuthorId).to(user::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_body(body: &str) -> Result<(), ModelError> {
    if body.trim().is_empty() { return Err(ModelError::Validation("comment body required".into())); }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, dataset_id: Uuid, author_id: Uuid, body: &str) -> Result<Model, ModelError> {
    validate_body(body)?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        dataset_id: Set(dataset_id),
        author_id: Set(author_id),
        body: Set(body.to_string()),
        status: Set(true),
        created_at: Set(Utc::now().into()),
    };
    Ok(am.insert(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Active comments on a dataset, oldest first.
pub async fn list_active<C: ConnectionTrait>(db: &C, dataset_id: Uuid) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::DatasetId.eq(dataset_id))
        .filter(Column::Status.eq(true))
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

pub async fn set_body<C: ConnectionTrait>(db: &C, model: Model, body: &str) -> Result<Model, ModelError> {
    validate_body(body)?;
    let mut am: ActiveModel = model.into();
    am.body = Set(body.to_string());
    Ok(am.update(db).await?)
}

pub async fn soft_delete<C: ConnectionTrait>(db: &C, model: Model) -> Result<Model, ModelError> {
    let mut am: ActiveModel = model.into();
    am.status = Set(false);
    Ok(am.update(db).await?)
}
