//! Comment factory for creating test comments and replies.

use crate::factory::helpers::{next_id, timestamp_for};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test comments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::comment::CommentFactory;
///
/// let reply = CommentFactory::new(&db, post.id, user.id)
///     .parent(root.id)
///     .content("Concordo")
///     .build()
///     .await?;
/// ```
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    seq: u64,
    post_id: Uuid,
    author_id: Uuid,
    parent_comment_id: Option<Uuid>,
    content: String,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with default values.
    ///
    /// Defaults:
    /// - content: `"Comment {id}"` where id is auto-incremented
    /// - parent_comment_id: `None` (top-level comment)
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `post_id` - ID of an existing post
    /// - `author_id` - ID of an existing user
    ///
    /// # Returns
    /// - `CommentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, post_id: Uuid, author_id: Uuid) -> Self {
        let seq = next_id();
        Self {
            db,
            seq,
            post_id,
            author_id,
            parent_comment_id: None,
            content: format!("Comment {}", seq),
        }
    }

    /// Sets the comment body.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Makes the comment a reply to another comment on the same post.
    pub fn parent(mut self, parent_comment_id: Uuid) -> Self {
        self.parent_comment_id = Some(parent_comment_id);
        self
    }

    /// Builds and inserts the comment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::comment::Model)` - Created comment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            content: ActiveValue::Set(self.content),
            author_id: ActiveValue::Set(self.author_id),
            post_id: ActiveValue::Set(self.post_id),
            parent_comment_id: ActiveValue::Set(self.parent_comment_id),
            created_at: ActiveValue::Set(timestamp_for(self.seq)),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a top-level comment on a post.
///
/// Shorthand for `CommentFactory::new(db, post_id, author_id).build().await`.
pub async fn create_comment(
    db: &DatabaseConnection,
    post_id: Uuid,
    author_id: Uuid,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, post_id, author_id).build().await
}

/// Creates a reply to `parent`, on the parent's post.
///
/// # Arguments
/// - `db` - Database connection
/// - `parent` - Comment being answered
/// - `author_id` - ID of an existing user
///
/// # Returns
/// - `Ok(entity::comment::Model)` - Created reply
/// - `Err(DbErr)` - Database error during insert
pub async fn create_reply(
    db: &DatabaseConnection,
    parent: &entity::comment::Model,
    author_id: Uuid,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, parent.post_id, author_id)
        .parent(parent.id)
        .build()
        .await
}
