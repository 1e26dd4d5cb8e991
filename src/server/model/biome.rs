//! Biome domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::biome::{
        BiomeDetailsDto, BiomeDto, BiomeWithContentDto, CreateBiomeDto, UpdateBiomeDto,
    },
    server::{
        error::AppError,
        model::{
            biome_image::BiomeImage,
            post::{Post, PostDetails},
        },
        util::{
            parse::required_id,
            validate::{optional_trimmed, required},
        },
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Biome {
    pub id: Uuid,
    pub name: String,
    pub introduction: String,
    pub general_characteristics: String,
    pub natural_resources: String,
    pub environmental_problems: String,
    pub conservation: String,
    pub created_at: DateTime<Utc>,
}

impl Biome {
    pub fn from_entity(entity: entity::biome::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            introduction: entity.introduction,
            general_characteristics: entity.general_characteristics,
            natural_resources: entity.natural_resources,
            environmental_problems: entity.environmental_problems,
            conservation: entity.conservation,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> BiomeDto {
        BiomeDto {
            id: self.id,
            name: self.name,
            introduction: self.introduction,
            general_characteristics: self.general_characteristics,
            natural_resources: self.natural_resources,
            environmental_problems: self.environmental_problems,
            conservation: self.conservation,
            created_at: self.created_at,
        }
    }
}

/// A biome with its images and plain posts.
#[derive(Debug, Clone, PartialEq)]
pub struct BiomeWithContent {
    pub biome: Biome,
    pub images: Vec<BiomeImage>,
    pub posts: Vec<Post>,
}

impl BiomeWithContent {
    pub fn into_dto(self) -> BiomeWithContentDto {
        BiomeWithContentDto {
            biome: self.biome.into_dto(),
            images: self.images.into_iter().map(BiomeImage::into_dto).collect(),
            posts: self.posts.into_iter().map(Post::into_dto).collect(),
        }
    }
}

/// A biome with its images and posts expanded down to comment replies.
#[derive(Debug, Clone, PartialEq)]
pub struct BiomeDetails {
    pub biome: Biome,
    pub images: Vec<BiomeImage>,
    pub posts: Vec<PostDetails>,
}

impl BiomeDetails {
    pub fn into_dto(self) -> BiomeDetailsDto {
        BiomeDetailsDto {
            biome: self.biome.into_dto(),
            images: self.images.into_iter().map(BiomeImage::into_dto).collect(),
            posts: self.posts.into_iter().map(PostDetails::into_dto).collect(),
        }
    }
}

const REQUIRED_FIELDS_MESSAGE: &str = "Todos os campos são obrigatórios";

#[derive(Debug, Clone)]
pub struct CreateBiomeParams {
    pub name: String,
    pub introduction: String,
    pub general_characteristics: String,
    pub natural_resources: String,
    pub environmental_problems: String,
    pub conservation: String,
}

impl CreateBiomeParams {
    /// Validates a create request. Every field is required and trimmed.
    pub fn from_dto(dto: CreateBiomeDto) -> Result<Self, AppError> {
        Ok(Self {
            name: required(dto.name, REQUIRED_FIELDS_MESSAGE)?,
            introduction: required(dto.introduction, REQUIRED_FIELDS_MESSAGE)?,
            general_characteristics: required(
                dto.general_characteristics,
                REQUIRED_FIELDS_MESSAGE,
            )?,
            natural_resources: required(dto.natural_resources, REQUIRED_FIELDS_MESSAGE)?,
            environmental_problems: required(dto.environmental_problems, REQUIRED_FIELDS_MESSAGE)?,
            conservation: required(dto.conservation, REQUIRED_FIELDS_MESSAGE)?,
        })
    }
}

/// Partial biome update. `None` leaves the column untouched.
#[derive(Debug, Clone)]
pub struct UpdateBiomeParams {
    pub id: Uuid,
    pub name: Option<String>,
    pub introduction: Option<String>,
    pub general_characteristics: Option<String>,
    pub natural_resources: Option<String>,
    pub environmental_problems: Option<String>,
    pub conservation: Option<String>,
}

impl UpdateBiomeParams {
    pub fn from_dto(dto: UpdateBiomeDto) -> Result<Self, AppError> {
        Ok(Self {
            id: required_id("ID", dto.id.as_deref())?,
            name: optional_trimmed(dto.name, REQUIRED_FIELDS_MESSAGE)?,
            introduction: optional_trimmed(dto.introduction, REQUIRED_FIELDS_MESSAGE)?,
            general_characteristics: optional_trimmed(
                dto.general_characteristics,
                REQUIRED_FIELDS_MESSAGE,
            )?,
            natural_resources: optional_trimmed(dto.natural_resources, REQUIRED_FIELDS_MESSAGE)?,
            environmental_problems: optional_trimmed(
                dto.environmental_problems,
                REQUIRED_FIELDS_MESSAGE,
            )?,
            conservation: optional_trimmed(dto.conservation, REQUIRED_FIELDS_MESSAGE)?,
        })
    }
}
