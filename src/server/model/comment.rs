//! Comment domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::comment::{
        CommentDto, CommentThreadDto, CommentWithAuthorDto, CreateCommentDto, DeleteCommentDto,
        UpdateCommentDto,
    },
    server::{
        error::AppError,
        model::user::Author,
        util::{
            parse::{optional_id, required_id},
            validate::required,
        },
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    pub author_id: Uuid,
    pub post_id: Uuid,
    pub parent_comment_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            content: entity.content,
            author_id: entity.author_id,
            post_id: entity.post_id,
            parent_comment_id: entity.parent_comment_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            content: self.content,
            author_id: self.author_id,
            post_id: self.post_id,
            parent_comment_id: self.parent_comment_id,
            created_at: self.created_at,
        }
    }

    pub fn is_reply(&self) -> bool {
        self.parent_comment_id.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author: Author,
}

impl CommentWithAuthor {
    pub fn into_dto(self) -> CommentWithAuthorDto {
        CommentWithAuthorDto {
            comment: self.comment.into_dto(),
            author: self.author.into_dto(),
        }
    }
}

/// A top-level comment with its direct replies.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentThread {
    pub comment: Comment,
    pub author: Author,
    pub replies: Vec<CommentWithAuthor>,
}

impl CommentThread {
    pub fn into_dto(self) -> CommentThreadDto {
        CommentThreadDto {
            comment: self.comment.into_dto(),
            author: self.author.into_dto(),
            replies: self
                .replies
                .into_iter()
                .map(CommentWithAuthor::into_dto)
                .collect(),
        }
    }
}

const CONTENT_REQUIRED_MESSAGE: &str = "Conteúdo é obrigatório";

#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub content: String,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub parent_comment_id: Option<Uuid>,
}

impl CreateCommentParams {
    pub fn from_dto(dto: CreateCommentDto) -> Result<Self, AppError> {
        Ok(Self {
            content: required(dto.content, CONTENT_REQUIRED_MESSAGE)?,
            post_id: required_id("postId", dto.post_id.as_deref())?,
            author_id: required_id("authorId", dto.author_id.as_deref())?,
            parent_comment_id: optional_id("parentCommentId", dto.parent_comment_id.as_deref())?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCommentParams {
    pub id: Uuid,
    pub content: String,
    pub author_id: Uuid,
}

impl UpdateCommentParams {
    pub fn from_dto(dto: UpdateCommentDto) -> Result<Self, AppError> {
        Ok(Self {
            content: required(dto.content, CONTENT_REQUIRED_MESSAGE)?,
            id: required_id("ID", dto.id.as_deref())?,
            author_id: required_id("authorId", dto.author_id.as_deref())?,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteCommentParams {
    pub id: Uuid,
    pub author_id: Uuid,
}

impl DeleteCommentParams {
    pub fn from_dto(dto: DeleteCommentDto) -> Result<Self, AppError> {
        Ok(Self {
            id: required_id("ID", dto.id.as_deref())?,
            author_id: required_id("authorId", dto.author_id.as_deref())?,
        })
    }
}
