//! SeaORM entity definitions for the biomes content schema.
//!
//! Mirrors the tables created by the `migration` crate. Relations carry the
//! cascade rules the persistence layer enforces: deleting a user removes its
//! posts and comments, deleting a post removes its comments, deleting a comment
//! removes its replies, and deleting a biome removes its images while detaching
//! its posts.

pub mod prelude;

pub mod biome;
pub mod biome_image;
pub mod comment;
pub mod post;
pub mod user;
