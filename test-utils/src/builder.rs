use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Biome, BiomeImage};
///
/// let test = TestBuilder::new()
///     .with_table(Biome)
///     .with_table(BiomeImage)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax, including unique columns and the foreign keys declared by the
    /// entity's `belongs_to` relations. Tables should be added in dependency order.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed for post and comment operations.
    ///
    /// Adds, in dependency order:
    /// - User
    /// - Biome
    /// - Post
    /// - Comment
    pub fn with_post_tables(self) -> Self {
        self.with_table(User)
            .with_table(Biome)
            .with_table(Post)
            .with_table(Comment)
    }

    /// Adds the tables needed for biome and biome image operations.
    pub fn with_biome_tables(self) -> Self {
        self.with_table(Biome).with_table(BiomeImage)
    }

    /// Adds every table of the schema.
    ///
    /// Biome reads expand posts and comments and user reads expand posts with their
    /// biomes, so most service tests need the whole schema.
    pub fn with_all_tables(self) -> Self {
        self.with_post_tables().with_table(BiomeImage)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
