use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, QueryOrder, Select, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{dataset_metadata, organization, user};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dataset")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub owner_user_id: Uuid,
    pub owner_org_id: Option<Uuid>,
    #[sea_orm(unique)]
    pub metadata_id: Uuid,
    pub is_deleted: bool,
    pub is_approved: bool,
    pub is_archived: bool,
    pub is_published: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { OwnerUser, OwnerOrg, Metadata }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::OwnerUser => Entity::belongs_to(user::Entity).from(Column::OwnerUserId).to(user::Column::Id).into(),
            Relation::OwnerOrg => Entity::belongs_to(organization::Entity).from(Column::OwnerOrgId).to(organization::Column::Id).into(),
            Relation::Metadata => Entity::belongs_to(dataset_metadata::Entity).from(Column::MetadataId).to(dataset_metadata::Column::Id).into(),
        }
    }
}

impl Related<dataset_metadata::Entity> for Entity {
    fn to() -> RelationDef { Relation::Metadata.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// The boolean publication flags a dataset owner may flip.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DatasetFlag {
    Published,
    Approved,
    Archived,
}

impl DatasetFlag {
    pub fn get(self, m: &Model) -> bool {
        match self {
            DatasetFlag::Published => m.is_published,
            DatasetFlag::Approved => m.is_approved,
            DatasetFlag::Archived => m.is_archived,
        }
    }

    fn set(self, am: &mut ActiveModel, value: bool) {
        match self {
            DatasetFlag::Published => am.is_published = Set(value),
            DatasetFlag::Approved => am.is_approved = Set(value),
            DatasetFlag::Archived => am.is_archived = Set(value),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DatasetFlag::Published => "is_published",
            DatasetFlag::Approved => "is_approved",
            DatasetFlag::Archived => "is_archived",
        }
    }
}

pub fn validate_title(title: &str) -> Result<(), ModelError> {
    if title.trim().is_empty() { return Err(ModelError::Validation("title required".into())); }
    if title.chars().count() > 255 { return Err(ModelError::Validation("title too long (<=255)".into())); }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    owner_user_id: Uuid,
    metadata_id: Uuid,
    title: &str,
    description: Option<String>,
) -> Result<Model, ModelError> {
    validate_title(title)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(title.trim().to_string()),
        description: Set(description),
        owner_user_id: Set(owner_user_id),
        owner_org_id: Set(None),
        metadata_id: Set(metadata_id),
        is_deleted: Set(false),
        is_approved: Set(false),
        is_archived: Set(false),
        is_published: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Non-deleted datasets, newest first.
pub fn find_live() -> Select<Entity> {
    Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::CreatedAt)
        .order_by_asc(Column::Id)
}

pub async fn soft_delete<C: ConnectionTrait>(db: &C, model: Model) -> Result<Model, ModelError> {
    let mut am: ActiveModel = model.into();
    am.is_deleted = Set(true);
    am.updated_at = Set(Utc::now().into());
    Ok(am.update(db).await?)
}

pub async fn set_flag<C: ConnectionTrait>(db: &C, model: Model, flag: DatasetFlag, value: bool) -> Result<Model, ModelError> {
    let mut am: ActiveModel = model.into();
    flag.set(&mut am, value);
    am.updated_at = Set(Utc::now().into());
    Ok(am.update(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_rules() {
        assert!(validate_title("Census 2020").is_ok());
        assert!(validate_title("  ").is_err());
        assert!(validate_title(&"t".repeat(256)).is_err());
    }

    #[test]
    fn flag_reads_its_own_column() {
        let now = Utc::now().into();
        let m = Model {
            id: Uuid::new_v4(),
            title: "flags".into(),
            description: None,
            owner_user_id: Uuid::new_v4(),
            owner_org_id: None,
            metadata_id: Uuid::new_v4(),
            is_deleted: false,
            is_approved: false,
            is_archived: true,
            is_published: false,
            created_at: now,
            updated_at: now,
        };
        assert!(DatasetFlag::Archived.get(&m));
        assert!(!DatasetFlag::Published.get(&m));
        assert!(!DatasetFlag::Approved.get(&m));
    }

    #[test]
    fn flag_column_names() {
        assert_eq!(DatasetFlag::Published.as_str(), "is_published");
        assert_eq!(DatasetFlag::Approved.as_str(), "is_approved");
        assert_eq!(DatasetFlag::Archived.as_str(), "is_archived");
    }
}
