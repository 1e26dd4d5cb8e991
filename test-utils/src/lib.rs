//! Biomas Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the biomas
//! API. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and factories for inserting users, biomes, posts, comments and biome
//! images with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories that insert rows with their dependencies
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_post_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_all_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (author, biome, post) = factory::helpers::create_post_with_dependencies(db).await?;
//!     // Perform operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
