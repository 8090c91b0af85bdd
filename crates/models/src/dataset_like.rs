use sea_orm::{entity::prelude::*, ConnectionTrait, PaginatorTrait, QueryFilter, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{dataset, user};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dataset_like")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub dataset_id: Uuid,
    pub author_id: Uuid,
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

pub async fn create<C: ConnectionTrait>(db: &C, dataset_id: Uuid, author_id: Uuid) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        dataset_id: Set(dataset_id),
        author_id: Set(author_id),
        status: Set(true),
        created_at: Set(Utc::now().into()),
    };
    Ok(am.insert(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn find_active<C: ConnectionTrait>(db: &C, dataset_id: Uuid, author_id: Uuid) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::DatasetId.eq(dataset_id))
        .filter(Column::AuthorId.eq(author_id))
        .filter(Column::Status.eq(true))
        .one(db)
        .await?)
}

pub async fn count_active<C: ConnectionTrait>(db: &C, dataset_id: Uuid) -> Result<u64, ModelError> {
    Ok(Entity::find()
        .filter(Column::DatasetId.eq(dataset_id))
        .filter(Column::Status.eq(true))
        .count(db)
        .await?)
}

pub async fn soft_delete<C: ConnectionTrait>(db: &C, model: Model) -> Result<Model, ModelError> {
    let mut am: ActiveModel = model.into();
    am.status = Set(false);
    Ok(am.update(db).await?)
}
