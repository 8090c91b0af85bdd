use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use models::dataset_comment;

use crate::errors::{ensure_owner, ServiceError};
use crate::lookup::{require_dataset, require_user};

/// Comment payload; `message` becomes the comment body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentInput {
    #[serde(default)]
    pub message: Option<String>,
}

impl CommentInput {
    pub fn new(message: impl Into<String>) -> Self { Self { message: Some(message.into()) } }

    /// Whitespace-only messages are treated like a missing one.
    fn body(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }
}

/// Post a comment as `user_id` on `dataset_id`.
#[instrument(skip(db, data))]
pub async fn create_comment(
    db: &DatabaseConnection,
    dataset_id: Uuid,
    user_id: Uuid,
    data: CommentInput,
) -> Result<dataset_comment::Model, ServiceError> {
    let author = require_user(db, user_id).await?;
    let ds = require_dataset(db, dataset_id).await?;
    let body = data.body().ok_or_else(|| ServiceError::Validation("comment message required".into()))?;
    let created = dataset_comment::create(db, ds.id, author.id, body).await?;
    info!(comment_id = %created.id, "comment_created");
    Ok(created)
}

/// Replace the body, or soft-delete the comment when the message is empty.
#[instrument(skip(db, data))]
pub async fn update_comment(db: &DatabaseConnection, comment_id: Uuid, data: CommentInput) -> Result<dataset_comment::Model, ServiceError> {
    let found = dataset_comment::find(db, comment_id).await?.ok_or(ServiceError::CommentNotFound(comment_id))?;
    match data.body() {
        Some(body) => {
            let updated = dataset_comment::set_body(db, found, body).await?;
            info!(comment_id = %comment_id, "comment_updated");
            Ok(updated)
        }
        None => delete_comment(db, found.author_id, comment_id).await,
    }
}

/// Soft delete by the comment's author.
#[instrument(skip(db))]
pub async fn delete_comment(db: &DatabaseConnection, user_id: Uuid, comment_id: Uuid) -> Result<dataset_comment::Model, ServiceError> {
    let found = dataset_comment::find(db, comment_id).await?.ok_or(ServiceError::CommentNotFound(comment_id))?;
    ensure_owner(user_id, found.author_id)?;
    let updated = dataset_comment::soft_delete(db, found).await?;
    info!(comment_id = %comment_id, "comment_deleted");
    Ok(updated)
}

/// Active comments on a dataset, oldest first.
pub async fn list_comments(db: &DatabaseConnection, dataset_id: Uuid) -> Result<Vec<dataset_comment::Model>, ServiceError> {
    require_dataset(db, dataset_id).await?;
    Ok(dataset_comment::list_active(db, dataset_id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, new_dataset, new_user};

    #[tokio::test]
    async fn comment_lifecycle() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;
        let owner = new_user(&db).await?;
        let reader = new_user(&db).await?;
        let ds = new_dataset(&db, owner.id, "discussed").await?.dataset;

        let first = create_comment(&db, ds.id, reader.id, CommentInput::new("first!")).await?;
        let second = create_comment(&db, ds.id, owner.id, CommentInput::new("thanks")).await?;
        assert_eq!(first.author_id, reader.id);
        assert!(first.status);

        let edited = update_comment(&db, first.id, CommentInput::new("first, edited")).await?;
        assert_eq!(edited.body, "first, edited");

        let ids: Vec<Uuid> = list_comments(&db, ds.id).await?.into_iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&first.id) && ids.contains(&second.id));

        let res = delete_comment(&db, owner.id, first.id).await;
        assert!(matches!(res, Err(ServiceError::NotAuthorized)));

        let deleted = delete_comment(&db, reader.id, first.id).await?;
        assert!(!deleted.status);
        assert_eq!(deleted.body, "first, edited");
        let ids: Vec<Uuid> = list_comments(&db, ds.id).await?.into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![second.id]);
        Ok(())
    }

    #[tokio::test]
    async fn empty_update_deletes_for_the_author() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;
        let owner = new_user(&db).await?;
        let ds = new_dataset(&db, owner.id, "quiet").await?.dataset;
        let c = create_comment(&db, ds.id, owner.id, CommentInput::new("oops")).await?;

        let gone = update_comment(&db, c.id, CommentInput::default()).await?;
        assert!(!gone.status);
        assert_eq!(gone.body, "oops");
        assert!(list_comments(&db, ds.id).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn blank_message_counts_as_empty() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;
        let owner = new_user(&db).await?;
        let ds = new_dataset(&db, owner.id, "blank").await?.dataset;
        let c = create_comment(&db, ds.id, owner.id, CommentInput::new("keep me")).await?;

        let res = create_comment(&db, ds.id, owner.id, CommentInput::new("   ")).await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));

        let gone = update_comment(&db, c.id, CommentInput::new(" \t ")).await?;
        assert!(!gone.status);
        assert_eq!(gone.body, "keep me");
        Ok(())
    }

    #[tokio::test]
    async fn missing_records_are_reported() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;
        let owner = new_user(&db).await?;
        let ds = new_dataset(&db, owner.id, "missing").await?.dataset;
        let ghost = Uuid::new_v4();

        assert!(matches!(create_comment(&db, ds.id, ghost, CommentInput::new("x")).await, Err(ServiceError::UserNotFound(_))));
        assert!(matches!(create_comment(&db, ghost, owner.id, CommentInput::new("x")).await, Err(ServiceError::DatasetNotFound(_))));
        assert!(matches!(create_comment(&db, ds.id, owner.id, CommentInput::default()).await, Err(ServiceError::Validation(_))));
        assert!(matches!(update_comment(&db, ghost, CommentInput::new("x")).await, Err(ServiceError::CommentNotFound(id)) if id == ghost));
        assert!(matches!(delete_comment(&db, owner.id, ghost).await, Err(ServiceError::CommentNotFound(_))));
        Ok(())
    }
}
