use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        post::{CreatePostDto, DeletePostDto, PostDetailsDto, PostDto, UpdatePostDto},
    },
    server::{
        error::AppError,
        model::post::{CreatePostParams, DeletePostParams, PostDetails, UpdatePostParams},
        service::post::PostService,
        state::AppState,
        util::{extract::Json, parse::parse_id},
    },
};

/// Tag for grouping post endpoints in OpenAPI documentation
pub static POST_TAG: &str = "post";

fn into_dtos(posts: Vec<PostDetails>) -> Vec<PostDetailsDto> {
    posts.into_iter().map(PostDetails::into_dto).collect()
}

/// Create a post.
///
/// # Returns
/// - `201 Created` - The created post with its author and biome
/// - `400 Bad Request` - Missing title, content or author
/// - `404 Not Found` - Unknown author or biome
#[utoipa::path(
    post,
    path = "/postcreate/",
    tag = POST_TAG,
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Post created", body = PostDetailsDto),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 404, description = "Author or biome not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<CreatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PostService::new(&state.db);

    let params = CreatePostParams::from_dto(payload)?;

    let post = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(post.into_dto())))
}

/// List every post with author, biome and comments, newest first.
#[utoipa::path(
    get,
    path = "/posts",
    tag = POST_TAG,
    responses(
        (status = 200, description = "All posts", body = Vec<PostDetailsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_posts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = PostService::new(&state.db);

    let posts = service.get_all().await?;

    Ok(Json(into_dtos(posts)))
}

/// Get a post with author, biome and comments.
#[utoipa::path(
    get,
    path = "/post/{id}",
    tag = POST_TAG,
    params(
        ("id" = String, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "The post", body = PostDetailsDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = PostService::new(&state.db);

    let id = parse_id("ID", &id)?;

    let post = service.get_by_id(id).await?;

    Ok(Json(post.into_dto()))
}

/// List the posts of a biome.
///
/// An existing biome without posts yields an empty list.
///
/// # Returns
/// - `200 OK` - Posts of the biome, newest first
/// - `404 Not Found` - Unknown biome
#[utoipa::path(
    get,
    path = "/posts/{biome_id}",
    tag = POST_TAG,
    params(
        ("biome_id" = String, Path, description = "Biome ID")
    ),
    responses(
        (status = 200, description = "Posts of the biome", body = Vec<PostDetailsDto>),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 404, description = "Biome not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_posts_by_biome(
    State(state): State<AppState>,
    Path(biome_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = PostService::new(&state.db);

    let biome_id = parse_id("ID do bioma", &biome_id)?;

    let posts = service.get_by_biome(biome_id).await?;

    Ok(Json(into_dtos(posts)))
}

/// Update a post on behalf of its author.
///
/// # Access Control
/// - `Author` - `userId` must be the post's author
///
/// # Returns
/// - `200 OK` - The updated post
/// - `403 Forbidden` - `userId` is not the author
/// - `404 Not Found` - Unknown post or biome
#[utoipa::path(
    put,
    path = "/postupdate",
    tag = POST_TAG,
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Post updated", body = PostDto),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Post or biome not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_post(
    State(state): State<AppState>,
    Json(payload): Json<UpdatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PostService::new(&state.db);

    let params = UpdatePostParams::from_dto(payload)?;

    let post = service.update(params).await?;

    Ok(Json(post.into_dto()))
}

/// Delete a post on behalf of its author.
///
/// # Access Control
/// - `Author` - `userId` must be the post's author
#[utoipa::path(
    delete,
    path = "/postdelete",
    tag = POST_TAG,
    request_body = DeletePostDto,
    responses(
        (status = 200, description = "Post deleted", body = MessageDto),
        (status = 400, description = "Missing or malformed id", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    Json(payload): Json<DeletePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PostService::new(&state.db);

    let params = DeletePostParams::from_dto(payload)?;

    service.delete(params).await?;

    Ok(Json(MessageDto::new("Post deletado com sucesso")))
}
