//! Link table between datasets and their files.
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use uuid::Uuid;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{dataset, dataset_file};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rel_dataset_dataset_file")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub dataset_id: Uuid,
    pub dataset_file_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Dataset, DatasetFile }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Dataset => Entity::belongs_to(dataset::Entity).from(Column::DatasetId).to(dataset::Column::Id).into(),
            Relation::DatasetFile => Entity::belongs_to(dataset_file::Entity).from(Column::DatasetFileId).to(dataset_file::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn link<C: ConnectionTrait>(db: &C, dataset_id: Uuid, dataset_file_id: Uuid) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        dataset_id: Set(dataset_id),
        dataset_file_id: Set(dataset_file_id),
    };
    Ok(am.insert(db).await?)
}
