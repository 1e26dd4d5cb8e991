use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::model::user::AuthorDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: Uuid,
    pub content: String,
    pub author_id: Uuid,
    pub post_id: Uuid,
    pub parent_comment_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentWithAuthorDto {
    #[serde(flatten)]
    pub comment: CommentDto,
    pub author: AuthorDto,
}

/// A top-level comment with its direct replies, oldest reply first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadDto {
    #[serde(flatten)]
    pub comment: CommentDto,
    pub author: AuthorDto,
    pub replies: Vec<CommentWithAuthorDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentDto {
    pub content: Option<String>,
    pub post_id: Option<String>,
    /// Set to reply to an existing comment on the same post.
    pub parent_comment_id: Option<String>,
    pub author_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommentDto {
    pub id: Option<String>,
    pub content: Option<String>,
    pub author_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCommentDto {
    pub id: Option<String>,
    pub author_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CommentQueryDto {
    /// Post whose comments are listed.
    pub post_id: Option<String>,
}
