use sea_orm::DatabaseConnection;
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use models::user;
use crate::errors::ServiceError;
use crate::password::{hash_password, verify_password};

/// Registration input. The password is hashed before it reaches the store.
#[derive(Clone, Default, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub about: Option<String>,
    pub phone_number: Option<String>,
}

/// Create a user account with an argon2-hashed password.
#[instrument(skip(db, input), fields(username = %input.username))]
pub async fn create_user(db: &DatabaseConnection, input: NewUser) -> Result<user::Model, ServiceError> {
    user::validate_username(&input.username)?;
    if user::find_by_username(db, &input.username).await?.is_some() {
        return Err(ServiceError::Validation(format!("username {} is taken", input.username.trim())));
    }
    let hash = hash_password(&input.password)?;
    let profile = user::Profile {
        email: input.email,
        firstname: input.firstname,
        lastname: input.lastname,
        about: input.about,
        phone_number: input.phone_number,
    };
    let created = user::create(db, &input.username, &hash, profile).await?;
    info!(user_id = %created.id, "user_created");
    Ok(created)
}

/// Get a user by id.
pub async fn get_user(db: &DatabaseConnection, id: Uuid) -> Result<Option<user::Model>, ServiceError> {
    Ok(user::find(db, id).await?)
}

/// Check a password against the stored hash. Unknown usernames verify as `false`.
pub async fn verify_user_password(db: &DatabaseConnection, username: &str, password: &str) -> Result<bool, ServiceError> {
    let Some(found) = user::find_by_username(db, username).await? else { return Ok(false) };
    Ok(verify_password(password, &found.password_hash))
}
