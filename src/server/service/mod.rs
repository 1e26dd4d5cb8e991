//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Existence Checks**: Turning missing users, posts, comments, biomes and images into
//!   `NotFound` errors before anything is written
//! - **Ownership**: Asking the `AuthGuard` whether the acting user wrote the resource
//! - **Uniqueness**: Pre-checking unique emails and biome names for a readable `Conflict`
//! - **Uploads**: Committing stored files only after the row referencing them was written

pub mod biome;
pub mod biome_image;
pub mod comment;
pub mod post;
pub mod user;
