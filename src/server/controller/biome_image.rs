use axum::{
    extract::{multipart::MultipartRejection, Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        biome_image::{
            BiomeImageDto, BiomeImageWithBiomeDto, CreateBiomeImageForm, DeleteBiomeImageDto,
            UpdateBiomeImageForm,
        },
    },
    server::{
        error::AppError,
        model::biome_image::{BiomeImageWithBiome, CreateBiomeImageParams, UpdateBiomeImageParams},
        service::biome_image::BiomeImageService,
        state::AppState,
        upload::UploadForm,
        util::{
            extract::Json,
            parse::{parse_id, required_id},
        },
    },
};

/// Tag for grouping biome image endpoints in OpenAPI documentation
pub static BIOME_IMAGE_TAG: &str = "biome image";

/// Upload an image for a biome.
///
/// # Returns
/// - `201 Created` - The stored image
/// - `400 Bad Request` - Missing file or biome id
/// - `404 Not Found` - Unknown biome; the upload is discarded
#[utoipa::path(
    post,
    path = "/createImage",
    tag = BIOME_IMAGE_TAG,
    request_body(content = CreateBiomeImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Image created", body = BiomeImageDto),
        (status = 400, description = "Missing file or biome id", body = ErrorDto),
        (status = 404, description = "Biome not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    let service = BiomeImageService::new(&state.db, &state.uploads);

    let form = UploadForm::from_multipart(multipart?, &state.uploads).await?;
    let params = CreateBiomeImageParams::from_form(form)?;

    let image = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(image.into_dto())))
}

/// List every image with its biome, newest first.
#[utoipa::path(
    post,
    path = "/imageslist",
    tag = BIOME_IMAGE_TAG,
    responses(
        (status = 200, description = "All images", body = Vec<BiomeImageWithBiomeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_images(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = BiomeImageService::new(&state.db, &state.uploads);

    let images = service.get_all().await?;

    Ok(Json(
        images
            .into_iter()
            .map(BiomeImageWithBiome::into_dto)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/image/{id}",
    tag = BIOME_IMAGE_TAG,
    params(
        ("id" = String, Path, description = "Image ID")
    ),
    responses(
        (status = 200, description = "The image with its biome", body = BiomeImageWithBiomeDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 404, description = "Image not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = BiomeImageService::new(&state.db, &state.uploads);

    let id = parse_id("ID", &id)?;

    let image = service.get_by_id(id).await?;

    Ok(Json(image.into_dto()))
}

/// Update an image, optionally replacing its file.
///
/// The previous file is removed once the row points at the new one.
#[utoipa::path(
    post,
    path = "/imageupdate",
    tag = BIOME_IMAGE_TAG,
    request_body(content = UpdateBiomeImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image updated", body = BiomeImageDto),
        (status = 400, description = "Missing or malformed id", body = ErrorDto),
        (status = 404, description = "Image or biome not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    let service = BiomeImageService::new(&state.db, &state.uploads);

    let form = UploadForm::from_multipart(multipart?, &state.uploads).await?;
    let params = UpdateBiomeImageParams::from_form(form)?;

    let image = service.update(params).await?;

    Ok(Json(image.into_dto()))
}

/// Delete an image and its stored file.
#[utoipa::path(
    post,
    path = "/imagedelete",
    tag = BIOME_IMAGE_TAG,
    request_body = DeleteBiomeImageDto,
    responses(
        (status = 204, description = "Image deleted"),
        (status = 400, description = "Missing or malformed id", body = ErrorDto),
        (status = 404, description = "Image not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_image(
    State(state): State<AppState>,
    Json(payload): Json<DeleteBiomeImageDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BiomeImageService::new(&state.db, &state.uploads);

    let id = required_id("ID", payload.id.as_deref())?;

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
