use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::biome::BiomeDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BiomeImageDto {
    pub id: Uuid,
    /// Stored filename, served under `/uploads/{filename}`.
    pub filename: String,
    pub description: Option<String>,
    pub biome_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BiomeImageWithBiomeDto {
    #[serde(flatten)]
    pub image: BiomeImageDto,
    pub biome: BiomeDto,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBiomeImageDto {
    pub id: Option<String>,
}

/// Multipart form accepted when creating a biome image.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct CreateBiomeImageForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    pub biome_id: String,
    pub description: Option<String>,
}

/// Multipart form accepted when updating a biome image. A new `file` replaces the stored one.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct UpdateBiomeImageForm {
    pub id: String,
    #[schema(value_type = Option<String>, format = Binary)]
    pub file: Option<Vec<u8>>,
    pub biome_id: Option<String>,
    pub description: Option<String>,
}
