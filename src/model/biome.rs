use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::{
    biome_image::BiomeImageDto,
    post::{PostDetailsDto, PostDto},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BiomeDto {
    pub id: Uuid,
    pub name: String,
    pub introduction: String,
    pub general_characteristics: String,
    pub natural_resources: String,
    pub environmental_problems: String,
    pub conservation: String,
    pub created_at: DateTime<Utc>,
}

/// A biome with its images and the posts filed under it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BiomeWithContentDto {
    #[serde(flatten)]
    pub biome: BiomeDto,
    pub images: Vec<BiomeImageDto>,
    pub posts: Vec<PostDto>,
}

/// A biome with its images and fully expanded posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BiomeDetailsDto {
    #[serde(flatten)]
    pub biome: BiomeDto,
    pub images: Vec<BiomeImageDto>,
    pub posts: Vec<PostDetailsDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBiomeDto {
    pub name: Option<String>,
    pub introduction: Option<String>,
    pub general_characteristics: Option<String>,
    pub natural_resources: Option<String>,
    pub environmental_problems: Option<String>,
    pub conservation: Option<String>,
}

/// Partial biome update; only supplied fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBiomeDto {
    pub id: Option<String>,
    pub name: Option<String>,
    pub introduction: Option<String>,
    pub general_characteristics: Option<String>,
    pub natural_resources: Option<String>,
    pub environmental_problems: Option<String>,
    pub conservation: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBiomeDto {
    pub id: Option<String>,
}

/// Case-insensitive substring search over biome names.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchBiomeDto {
    pub name: Option<String>,
}
