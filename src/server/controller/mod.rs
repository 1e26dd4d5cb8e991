//! HTTP request handlers.
//!
//! Controllers turn request DTOs into validated parameters, call the matching service
//! and convert the returned domain models back into DTOs. Every handler returns
//! `Result<impl IntoResponse, AppError>` so errors are rendered by `AppError`.

pub mod biome;
pub mod biome_image;
pub mod comment;
pub mod post;
pub mod root;
pub mod user;

#[cfg(test)]
mod test;
