use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::user;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dataset_metadata")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub file: Option<String>,
    pub publisher: Uuid,
    pub date_created: DateTimeWithTimeZone,
    pub date_modified: DateTimeWithTimeZone,
    pub source_link: Option<String>,
    pub resource_type: Option<String>,
    pub license_link: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Publisher }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Publisher => Entity::belongs_to(user::Entity).from(Column::Publisher).to(user::Column::Id).into() }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Writable metadata columns. `None` leaves a column untouched on update.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MetadataFields {
    pub file: Option<String>,
    pub source_link: Option<String>,
    pub resource_type: Option<String>,
    pub license_link: Option<String>,
}

pub async fn create<C: ConnectionTrait>(db: &C, publisher: Uuid, fields: MetadataFields) -> Result<Model, ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        file: Set(fields.file),
        publisher: Set(publisher),
        date_created: Set(now),
        date_modified: Set(now),
        source_link: Set(fields.source_link),
        resource_type: Set(fields.resource_type),
        license_link: Set(fields.license_link),
    };
    Ok(am.insert(db).await?)
}

/// Overwrite the given columns and bump `date_modified`.
pub async fn update<C: ConnectionTrait>(db: &C, id: Uuid, fields: MetadataFields) -> Result<Model, ModelError> {
    let mut am: ActiveModel = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ModelError::NotFound("dataset metadata"))?
        .into();
    if let Some(v) = fields.file { am.file = Set(Some(v)); }
    if let Some(v) = fields.source_link { am.source_link = Set(Some(v)); }
    if let Some(v) = fields.resource_type { am.resource_type = Set(Some(v)); }
    if let Some(v) = fields.license_link { am.license_link = Set(Some(v)); }
    am.date_modified = Set(Utc::now().into());
    Ok(am.update(db).await?)
}
