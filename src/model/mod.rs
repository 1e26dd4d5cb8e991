//! Wire types shared by controllers and HTTP tests.
//!
//! Every request and response body crosses the API boundary through one of these
//! DTOs. Field names are serialized in camelCase.

pub mod api;
pub mod biome;
pub mod biome_image;
pub mod comment;
pub mod post;
pub mod user;
