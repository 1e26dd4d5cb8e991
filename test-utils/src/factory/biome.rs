//! Biome factory for creating test biome entities.

use crate::factory::helpers::{next_id, timestamp_for};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test biomes with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::biome::BiomeFactory;
///
/// let biome = BiomeFactory::new(&db)
///     .name("Cerrado")
///     .introduction("Savana tropical")
///     .build()
///     .await?;
/// ```
pub struct BiomeFactory<'a> {
    db: &'a DatabaseConnection,
    seq: u64,
    name: String,
    introduction: String,
    general_characteristics: String,
    natural_resources: String,
    environmental_problems: String,
    conservation: String,
}

impl<'a> BiomeFactory<'a> {
    /// Creates a new BiomeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Biome {id}"` where id is auto-incremented
    /// - every text section: a short placeholder sentence naming the section
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `BiomeFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let seq = next_id();
        Self {
            db,
            seq,
            name: format!("Biome {}", seq),
            introduction: "Introduction".to_string(),
            general_characteristics: "General characteristics".to_string(),
            natural_resources: "Natural resources".to_string(),
            environmental_problems: "Environmental problems".to_string(),
            conservation: "Conservation".to_string(),
        }
    }

    /// Sets the unique biome name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the introduction section.
    pub fn introduction(mut self, introduction: impl Into<String>) -> Self {
        self.introduction = introduction.into();
        self
    }

    /// Sets the conservation section.
    pub fn conservation(mut self, conservation: impl Into<String>) -> Self {
        self.conservation = conservation.into();
        self
    }

    /// Builds and inserts the biome entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::biome::Model)` - Created biome entity
    /// - `Err(DbErr)` - Database error during insert, including a duplicate name
    pub async fn build(self) -> Result<entity::biome::Model, DbErr> {
        entity::biome::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            introduction: ActiveValue::Set(self.introduction),
            general_characteristics: ActiveValue::Set(self.general_characteristics),
            natural_resources: ActiveValue::Set(self.natural_resources),
            environmental_problems: ActiveValue::Set(self.environmental_problems),
            conservation: ActiveValue::Set(self.conservation),
            created_at: ActiveValue::Set(timestamp_for(self.seq)),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a biome with default values.
///
/// Shorthand for `BiomeFactory::new(db).build().await`.
pub async fn create_biome(db: &DatabaseConnection) -> Result<entity::biome::Model, DbErr> {
    BiomeFactory::new(db).build().await
}

/// Creates a biome with a specific name.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Unique biome name
///
/// # Returns
/// - `Ok(entity::biome::Model)` - Created biome entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_biome_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::biome::Model, DbErr> {
    BiomeFactory::new(db).name(name).build().await
}
