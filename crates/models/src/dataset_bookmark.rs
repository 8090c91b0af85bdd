use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{dataset, user};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dataset_bookmark")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub owner_user_id: Uuid,
    pub dataset_id: Uuid,
    pub status: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { OwnerUser, Dataset }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::OwnerUser => Entity::belongs_to(user::Entity).from(Column::OwnerUserId).to(user::Column::Id).into(),
            Relation::Dataset => Entity::belongs_to(dataset::Entity).from(Column::DatasetId).to(dataset::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(db: &C, owner_user_id: Uuid, dataset_id: Uuid) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        owner_user_id: Set(owner_user_id),
        dataset_id: Set(dataset_id),
        status: Set(true),
        created_at: Set(Utc::now().into()),
    };
    Ok(am.insert(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn find_active<C: ConnectionTrait>(db: &C, owner_user_id: Uuid, dataset_id: Uuid) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::OwnerUserId.eq(owner_user_id))
        .filter(Column::DatasetId.eq(dataset_id))
        .filter(Column::Status.eq(true))
        .one(db)
        .await?)
}

/// The user's active bookmarks, newest first.
pub async fn list_active_for_user<C: ConnectionTrait>(db: &C, owner_user_id: Uuid) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::OwnerUserId.eq(owner_user_id))
        .filter(Column::Status.eq(true))
        .order_by_desc(Column::CreatedAt)
        .all(db)
        .await?)
}

pub async fn soft_delete<C: ConnectionTrait>(db: &C, model: Model) -> Result<Model, ModelError> {
    let mut am: ActiveModel = model.into();
    am.status = Set(false);
    Ok(am.update(db).await?)
}
