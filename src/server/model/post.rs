//! Post domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::post::{CreatePostDto, DeletePostDto, PostDetailsDto, PostDto, UpdatePostDto},
    server::{
        error::AppError,
        model::{biome::Biome, comment::CommentThread, user::Author},
        util::{
            parse::{optional_id, required_id},
            validate::{optional_trimmed, required},
        },
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
    pub biome_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn from_entity(entity: entity::post::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            content: entity.content,
            author_id: entity.author_id,
            biome_id: entity.biome_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PostDto {
        PostDto {
            id: self.id,
            title: self.title,
            content: self.content,
            author_id: self.author_id,
            biome_id: self.biome_id,
            created_at: self.created_at,
        }
    }
}

/// A post with its author summary, biome and comment threads.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDetails {
    pub post: Post,
    pub author: Author,
    pub biome: Option<Biome>,
    /// Top-level comments newest first, each with its replies oldest first.
    pub comments: Vec<CommentThread>,
}

impl PostDetails {
    pub fn into_dto(self) -> PostDetailsDto {
        PostDetailsDto {
            post: self.post.into_dto(),
            author: self.author.into_dto(),
            biome: self.biome.map(Biome::into_dto),
            comments: self
                .comments
                .into_iter()
                .map(CommentThread::into_dto)
                .collect(),
        }
    }
}

const REQUIRED_FIELDS_MESSAGE: &str = "Título e conteúdo são obrigatórios";

#[derive(Debug, Clone)]
pub struct CreatePostParams {
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
    pub biome_id: Option<Uuid>,
}

impl CreatePostParams {
    /// Validates a create request. Title and content are trimmed.
    pub fn from_dto(dto: CreatePostDto) -> Result<Self, AppError> {
        Ok(Self {
            title: required(dto.title, REQUIRED_FIELDS_MESSAGE)?,
            content: required(dto.content, REQUIRED_FIELDS_MESSAGE)?,
            author_id: required_id("authorId", dto.author_id.as_deref())?,
            biome_id: optional_id("biomeId", dto.biome_id.as_deref())?,
        })
    }
}

/// Partial post update requested by `user_id`.
#[derive(Debug, Clone)]
pub struct UpdatePostParams {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: Option<String>,
    pub content: Option<String>,
    pub biome_id: Option<Uuid>,
}

impl UpdatePostParams {
    pub fn from_dto(dto: UpdatePostDto) -> Result<Self, AppError> {
        Ok(Self {
            id: required_id("ID", dto.id.as_deref())?,
            user_id: required_id("userId", dto.user_id.as_deref())?,
            title: optional_trimmed(dto.title, REQUIRED_FIELDS_MESSAGE)?,
            content: optional_trimmed(dto.content, REQUIRED_FIELDS_MESSAGE)?,
            biome_id: optional_id("biomeId", dto.biome_id.as_deref())?,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DeletePostParams {
    pub id: Uuid,
    pub user_id: Uuid,
}

impl DeletePostParams {
    pub fn from_dto(dto: DeletePostDto) -> Result<Self, AppError> {
        Ok(Self {
            id: required_id("ID", dto.id.as_deref())?,
            user_id: required_id("userId", dto.user_id.as_deref())?,
        })
    }
}
