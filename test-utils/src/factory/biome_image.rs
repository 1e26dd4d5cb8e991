//! Biome image factory for creating test image rows.
//!
//! Only the database row is created; no file is written to the upload directory.

use crate::factory::helpers::{next_id, timestamp_for};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test biome images with customizable fields.
pub struct BiomeImageFactory<'a> {
    db: &'a DatabaseConnection,
    seq: u64,
    biome_id: Uuid,
    filename: String,
    description: Option<String>,
}

impl<'a> BiomeImageFactory<'a> {
    /// Creates a new BiomeImageFactory with default values.
    ///
    /// Defaults:
    /// - filename: `"image{id}.png"` where id is auto-incremented
    /// - description: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `biome_id` - ID of an existing biome
    ///
    /// # Returns
    /// - `BiomeImageFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, biome_id: Uuid) -> Self {
        let seq = next_id();
        Self {
            db,
            seq,
            biome_id,
            filename: format!("image{}.png", seq),
            description: None,
        }
    }

    /// Sets the stored filename.
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Sets the image description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds and inserts the biome image entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::biome_image::Model)` - Created biome image entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::biome_image::Model, DbErr> {
        entity::biome_image::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            filename: ActiveValue::Set(self.filename),
            description: ActiveValue::Set(self.description),
            biome_id: ActiveValue::Set(self.biome_id),
            created_at: ActiveValue::Set(timestamp_for(self.seq)),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a biome image with default values.
///
/// Shorthand for `BiomeImageFactory::new(db, biome_id).build().await`.
pub async fn create_biome_image(
    db: &DatabaseConnection,
    biome_id: Uuid,
) -> Result<entity::biome_image::Model, DbErr> {
    BiomeImageFactory::new(db, biome_id).build().await
}
