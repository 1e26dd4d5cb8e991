use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        comment::{
            CommentDto, CommentQueryDto, CommentThreadDto, CreateCommentDto, DeleteCommentDto,
            UpdateCommentDto,
        },
    },
    server::{
        error::AppError,
        model::comment::{
            CommentThread, CreateCommentParams, DeleteCommentParams, UpdateCommentParams,
        },
        service::comment::CommentService,
        state::AppState,
        util::{extract::Json, parse::required_id},
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// Create a comment or a reply.
///
/// # Returns
/// - `201 Created` - The created comment with its author and empty replies
/// - `400 Bad Request` - Empty content or parent on another post
/// - `404 Not Found` - Unknown post, author or parent comment
#[utoipa::path(
    post,
    path = "/commentcreate",
    tag = COMMENT_TAG,
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentThreadDto),
        (status = 400, description = "Invalid comment data", body = ErrorDto),
        (status = 404, description = "Post, author or parent not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CommentService::new(&state.db);

    let params = CreateCommentParams::from_dto(payload)?;

    let comment = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// List the comments of a post.
///
/// Top-level comments newest first, each with its direct replies oldest first.
#[utoipa::path(
    get,
    path = "/coments/",
    tag = COMMENT_TAG,
    params(CommentQueryDto),
    responses(
        (status = 200, description = "Comment threads of the post", body = Vec<CommentThreadDto>),
        (status = 400, description = "Missing or malformed post id", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    Query(query): Query<CommentQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CommentService::new(&state.db);

    let post_id = required_id("postId", query.post_id.as_deref())?;

    let threads = service.get_for_post(post_id).await?;

    Ok(Json(
        threads
            .into_iter()
            .map(CommentThread::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Edit a comment on behalf of its author.
#[utoipa::path(
    put,
    path = "/comment",
    tag = COMMENT_TAG,
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Comment updated", body = CommentDto),
        (status = 400, description = "Invalid comment data", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    Json(payload): Json<UpdateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CommentService::new(&state.db);

    let params = UpdateCommentParams::from_dto(payload)?;

    let comment = service.update(params).await?;

    Ok(Json(comment.into_dto()))
}

/// Delete a comment and its replies on behalf of its author.
#[utoipa::path(
    delete,
    path = "/comment/",
    tag = COMMENT_TAG,
    request_body = DeleteCommentDto,
    responses(
        (status = 200, description = "Comment deleted", body = MessageDto),
        (status = 400, description = "Missing or malformed id", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    Json(payload): Json<DeleteCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CommentService::new(&state.db);

    let params = DeleteCommentParams::from_dto(payload)?;

    service.delete(params).await?;

    Ok(Json(MessageDto::new("Comentário deletado com sucesso")))
}
