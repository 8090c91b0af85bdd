use sea_orm::{entity::prelude::*, ConnectionTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{rel_dataset_dataset_file as rel, user};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dataset_file")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub file_url: String,
    pub owner_user_id: Uuid,
    pub status: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { OwnerUser }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::OwnerUser => Entity::belongs_to(user::Entity).from(Column::OwnerUserId).to(user::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate(title: &str, file_url: &str) -> Result<(), ModelError> {
    if title.trim().is_empty() { return Err(ModelError::Validation("file title required".into())); }
    if file_url.trim().is_empty() { return Err(ModelError::Validation("file url required".into())); }
    if file_url.len() > 1024 { return Err(ModelError::Validation("file url too long (<=1024)".into())); }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, owner_user_id: Uuid, title: &str, file_url: &str) -> Result<Model, ModelError> {
    validate(title, file_url)?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(title.trim().to_string()),
        file_url: Set(file_url.trim().to_string()),
        owner_user_id: Set(owner_user_id),
        status: Set(true),
        created_at: Set(Utc::now().into()),
    };
    Ok(am.insert(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Active files attached to a dataset, in upload order.
pub async fn list_active_for_dataset<C: ConnectionTrait>(db: &C, dataset_id: Uuid) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find()
        .join(JoinType::InnerJoin, rel::Relation::DatasetFile.def().rev())
        .filter(rel::Column::DatasetId.eq(dataset_id))
        .filter(Column::Status.eq(true))
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

pub async fn soft_delete<C: ConnectionTrait>(db: &C, model: Model) -> Result<Model, ModelError> {
    let mut am: ActiveModel = model.into();
    am.status = Set(false);
    Ok(am.update(db).await?)
}
