//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Related rows are loaded in batches with `IN` queries and assembled in memory.

pub mod biome;
pub mod biome_image;
pub mod comment;
pub mod post;
pub mod user;

#[cfg(test)]
mod test;
