use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::{biome::BiomeDto, comment::CommentThreadDto, user::AuthorDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
    pub biome_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// A post expanded with its author summary, biome and comment threads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailsDto {
    #[serde(flatten)]
    pub post: PostDto,
    pub author: AuthorDto,
    pub biome: Option<BiomeDto>,
    pub comments: Vec<CommentThreadDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostDto {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author_id: Option<String>,
    pub biome_id: Option<String>,
}

/// Partial post update performed by `user_id`, who must be the author.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostDto {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub biome_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletePostDto {
    pub id: Option<String>,
    pub user_id: Option<String>,
}
