//! Post factory for creating test post entities.

use crate::factory::helpers::{next_id, timestamp_for};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test posts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::post::PostFactory;
///
/// let post = PostFactory::new(&db, author.id)
///     .title("Queimadas no Cerrado")
///     .biome(biome.id)
///     .build()
///     .await?;
/// ```
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    seq: u64,
    author_id: Uuid,
    biome_id: Option<Uuid>,
    title: String,
    content: String,
}

impl<'a> PostFactory<'a> {
    /// Creates a new PostFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Post {id}"` where id is auto-incremented
    /// - content: `"Content of post {id}"`
    /// - biome_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `author_id` - ID of an existing user who authors the post
    ///
    /// # Returns
    /// - `PostFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, author_id: Uuid) -> Self {
        let seq = next_id();
        Self {
            db,
            seq,
            author_id,
            biome_id: None,
            title: format!("Post {}", seq),
            content: format!("Content of post {}", seq),
        }
    }

    /// Sets the post title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the post body.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Links the post to an existing biome.
    pub fn biome(mut self, biome_id: Uuid) -> Self {
        self.biome_id = Some(biome_id);
        self
    }

    /// Builds and inserts the post entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::post::Model)` - Created post entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        entity::post::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            author_id: ActiveValue::Set(self.author_id),
            biome_id: ActiveValue::Set(self.biome_id),
            created_at: ActiveValue::Set(timestamp_for(self.seq)),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a post without a biome for the given author.
///
/// Shorthand for `PostFactory::new(db, author_id).build().await`.
pub async fn create_post(
    db: &DatabaseConnection,
    author_id: Uuid,
) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, author_id).build().await
}

/// Creates a post in the given biome.
///
/// # Arguments
/// - `db` - Database connection
/// - `author_id` - ID of an existing user
/// - `biome_id` - ID of an existing biome
///
/// # Returns
/// - `Ok(entity::post::Model)` - Created post entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_post_in_biome(
    db: &DatabaseConnection,
    author_id: Uuid,
    biome_id: Uuid,
) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, author_id).biome(biome_id).build().await
}
