use axum::{response::IntoResponse, Json};

use crate::model::api::MessageDto;

pub static ROOT_TAG: &str = "root";

/// Identifies the API.
#[utoipa::path(
    get,
    path = "/",
    tag = ROOT_TAG,
    responses(
        (status = 200, description = "API name", body = MessageDto)
    ),
)]
pub async fn index() -> impl IntoResponse {
    Json(MessageDto::new("API de Biomas Brasileiros"))
}
