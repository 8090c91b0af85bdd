use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub email: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub about: Option<String>,
    pub phone_number: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

/// Optional profile columns, all nullable.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Profile {
    pub email: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub about: Option<String>,
    pub phone_number: Option<String>,
}

pub fn validate_username(username: &str) -> Result<(), ModelError> {
    let u = username.trim();
    if u.is_empty() { return Err(ModelError::Validation("username required".into())); }
    if u.len() > 150 { return Err(ModelError::Validation("username too long (<=150)".into())); }
    if u.chars().any(char::is_whitespace) {
        return Err(ModelError::Validation("username must not contain whitespace".into()));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err(ModelError::Validation("invalid email".into()));
    };
    if local.is_empty() || domain.is_empty() || email.len() > 254 {
        return Err(ModelError::Validation("invalid email".into()));
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    username: &str,
    password_hash: &str,
    profile: Profile,
) -> Result<Model, ModelError> {
    validate_username(username)?;
    if let Some(email) = profile.email.as_deref() { validate_email(email)?; }
    if password_hash.trim().is_empty() { return Err(ModelError::Validation("password hash required".into())); }

    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(username.trim().to_string()),
        email: Set(profile.email),
        firstname: Set(profile.firstname),
        lastname: Set(profile.lastname),
        about: Set(profile.about),
        phone_number: Set(profile.phone_number),
        password_hash: Set(password_hash.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn find_by_username<C: ConnectionTrait>(db: &C, username: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().filter(Column::Username.eq(username.trim())).one(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rules() {
        assert!(validate_username("ada").is_ok());
        assert!(validate_username("   ").is_err());
        assert!(validate_username("ada lovelace").is_err());
        assert!(validate_username(&"a".repeat(151)).is_err());
    }

    #[test]
    fn email_rules() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("ada.example.com").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ada@").is_err());
    }
}
