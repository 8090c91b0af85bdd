use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("user {0} does not exist")]
    UserNotFound(Uuid),
    #[error("dataset {0} does not exist")]
    DatasetNotFound(Uuid),
    #[error("comment {0} does not exist")]
    CommentNotFound(Uuid),
    #[error("organization {0} does not exist")]
    OrganizationNotFound(Uuid),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("user is not authorized for this action")]
    NotAuthorized,
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::NotAuthorized => 1004,
            ServiceError::UserNotFound(_) => 2001,
            ServiceError::DatasetNotFound(_) => 2002,
            ServiceError::CommentNotFound(_) => 2003,
            ServiceError::OrganizationNotFound(_) => 2004,
            ServiceError::NotFound(_) => 2000,
            ServiceError::Db(_) => 1200,
            ServiceError::Model(models::errors::ModelError::Validation(_)) => 1001,
            ServiceError::Model(models::errors::ModelError::NotFound(_)) => 2000,
            ServiceError::Model(models::errors::ModelError::Db(_)) => 1200,
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { ServiceError::Db(e.to_string()) }
}

/// Owner check shared by every mutating operation.
pub(crate) fn ensure_owner(actor: Uuid, owner: Uuid) -> Result<(), ServiceError> {
    if actor != owner {
        return Err(ServiceError::NotAuthorized);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn codes_are_stable() {
        let id = Uuid::nil();
        assert_eq!(ServiceError::UserNotFound(id).code(), 2001);
        assert_eq!(ServiceError::DatasetNotFound(id).code(), 2002);
        assert_eq!(ServiceError::CommentNotFound(id).code(), 2003);
        assert_eq!(ServiceError::OrganizationNotFound(id).code(), 2004);
        assert_eq!(ServiceError::NotAuthorized.code(), 1004);
        assert_eq!(ServiceError::from(ModelError::Validation("x".into())).code(), 1001);
        assert_eq!(ServiceError::from(ModelError::Db("x".into())).code(), 1200);
    }

    #[test]
    fn owner_check() {
        let a = Uuid::new_v4();
        assert!(ensure_owner(a, a).is_ok());
        assert!(matches!(ensure_owner(a, Uuid::new_v4()), Err(ServiceError::NotAuthorized)));
    }

    #[test]
    fn messages_name_the_missing_record() {
        let id = Uuid::new_v4();
        assert_eq!(ServiceError::DatasetNotFound(id).to_string(), format!("dataset {id} does not exist"));
    }
}
