//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of the rows they depend on, and the
//! helpers module builds whole dependency chains when a test doesn't care about them.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let biome = factory::biome::create_biome(&db).await?;
//!
//!     // Create with all dependencies
//!     let (author, biome, post) = factory::helpers::create_post_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .email("admin@example.com")
//!     .admin(true)
//!     .build()
//!     .await?;
//!
//! let reply = factory::comment::CommentFactory::new(&db, post.id, user.id)
//!     .parent(root.id)
//!     .content("Concordo")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `biome` - Create biome entities
//! - `post` - Create post entities
//! - `comment` - Create comment and reply entities
//! - `biome_image` - Create biome image entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod biome;
pub mod biome_image;
pub mod comment;
pub mod helpers;
pub mod post;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use biome::create_biome;
pub use biome_image::create_biome_image;
pub use comment::{create_comment, create_reply};
pub use post::create_post;
pub use user::create_user;
