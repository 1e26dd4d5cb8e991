use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        biome::{
            BiomeDetailsDto, BiomeDto, BiomeWithContentDto, CreateBiomeDto, DeleteBiomeDto,
            SearchBiomeDto, UpdateBiomeDto,
        },
    },
    server::{
        error::AppError,
        model::biome::{BiomeWithContent, CreateBiomeParams, UpdateBiomeParams},
        service::biome::BiomeService,
        state::AppState,
        util::{extract::Json, parse::required_id, validate::required},
    },
};

/// Tag for grouping biome endpoints in OpenAPI documentation
pub static BIOME_TAG: &str = "biome";

/// Create a biome.
///
/// All six text fields are required.
///
/// # Returns
/// - `201 Created` - The created biome
/// - `400 Bad Request` - A field is missing or blank
/// - `409 Conflict` - A biome with this name exists
#[utoipa::path(
    post,
    path = "/biome",
    tag = BIOME_TAG,
    request_body = CreateBiomeDto,
    responses(
        (status = 201, description = "Biome created", body = BiomeDto),
        (status = 400, description = "Missing field", body = ErrorDto),
        (status = 409, description = "Name already used", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_biome(
    State(state): State<AppState>,
    Json(payload): Json<CreateBiomeDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BiomeService::new(&state.db);

    let params = CreateBiomeParams::from_dto(payload)?;

    let biome = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(biome.into_dto())))
}

/// List every biome with its images and posts.
#[utoipa::path(
    get,
    path = "/biomes",
    tag = BIOME_TAG,
    responses(
        (status = 200, description = "All biomes", body = Vec<BiomeWithContentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_biomes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = BiomeService::new(&state.db);

    let biomes = service.get_all().await?;

    Ok(Json(
        biomes
            .into_iter()
            .map(BiomeWithContent::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Search a biome by a fragment of its name.
///
/// The match ignores case; the first biome by name wins. The search term is read
/// from the JSON body.
#[utoipa::path(
    get,
    path = "/biomes/",
    tag = BIOME_TAG,
    request_body = SearchBiomeDto,
    responses(
        (status = 200, description = "First matching biome", body = BiomeWithContentDto),
        (status = 400, description = "Missing name", body = ErrorDto),
        (status = 404, description = "No biome matched", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_biome(
    State(state): State<AppState>,
    Json(payload): Json<SearchBiomeDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BiomeService::new(&state.db);

    let name = required(payload.name, "Nome do bioma é obrigatório")?;

    let biome = service.search(&name).await?;

    Ok(Json(biome.into_dto()))
}

/// Get a biome by its exact name.
///
/// Posts are expanded with their author and comment threads.
#[utoipa::path(
    get,
    path = "/biome/{name}",
    tag = BIOME_TAG,
    params(
        ("name" = String, Path, description = "Exact, case-sensitive biome name")
    ),
    responses(
        (status = 200, description = "The biome", body = BiomeDetailsDto),
        (status = 404, description = "Biome not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_biome(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = BiomeService::new(&state.db);

    let biome = service.get_by_name(&name).await?;

    Ok(Json(biome.into_dto()))
}

/// Update the supplied fields of a biome.
#[utoipa::path(
    put,
    path = "/biome/",
    tag = BIOME_TAG,
    request_body = UpdateBiomeDto,
    responses(
        (status = 200, description = "Biome updated", body = BiomeDto),
        (status = 400, description = "Missing id or blank field", body = ErrorDto),
        (status = 404, description = "Biome not found", body = ErrorDto),
        (status = 409, description = "Name already used", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_biome(
    State(state): State<AppState>,
    Json(payload): Json<UpdateBiomeDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BiomeService::new(&state.db);

    let params = UpdateBiomeParams::from_dto(payload)?;

    let biome = service.update(params).await?;

    Ok(Json(biome.into_dto()))
}

/// Delete a biome.
///
/// Its images are deleted with it; its posts remain without a biome.
#[utoipa::path(
    delete,
    path = "/biomes/",
    tag = BIOME_TAG,
    request_body = DeleteBiomeDto,
    responses(
        (status = 204, description = "Biome deleted"),
        (status = 400, description = "Missing or malformed id", body = ErrorDto),
        (status = 404, description = "Biome not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_biome(
    State(state): State<AppState>,
    Json(payload): Json<DeleteBiomeDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BiomeService::new(&state.db);

    let id = required_id("ID do bioma", payload.id.as_deref())?;

    service.delete(id, &state.uploads).await?;

    Ok(StatusCode::NO_CONTENT)
}
