//! Biome image domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::biome_image::{BiomeImageDto, BiomeImageWithBiomeDto},
    server::{
        error::{upload::UploadError, AppError},
        model::biome::Biome,
        upload::{StoredUpload, UploadForm},
        util::parse::{optional_id, required_id},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct BiomeImage {
    pub id: Uuid,
    pub filename: String,
    pub description: Option<String>,
    pub biome_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl BiomeImage {
    pub fn from_entity(entity: entity::biome_image::Model) -> Self {
        Self {
            id: entity.id,
            filename: entity.filename,
            description: entity.description,
            biome_id: entity.biome_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> BiomeImageDto {
        BiomeImageDto {
            id: self.id,
            filename: self.filename,
            description: self.description,
            biome_id: self.biome_id,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BiomeImageWithBiome {
    pub image: BiomeImage,
    pub biome: Biome,
}

impl BiomeImageWithBiome {
    pub fn into_dto(self) -> BiomeImageWithBiomeDto {
        BiomeImageWithBiomeDto {
            image: self.image.into_dto(),
            biome: self.biome.into_dto(),
        }
    }
}

/// Trims a description; a blank description is stored as `None`.
fn description(value: Option<String>) -> Option<String> {
    value
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}

/// Input for creating a biome image. Owns the uploaded file until the row is written.
#[derive(Debug)]
pub struct CreateBiomeImageParams {
    pub biome_id: Uuid,
    pub description: Option<String>,
    pub file: StoredUpload,
}

impl CreateBiomeImageParams {
    /// Builds the params from a multipart form with `file`, `biomeId` and `description`.
    ///
    /// # Returns
    /// - `Ok(CreateBiomeImageParams)` - File present and biome id valid
    /// - `Err(AppError::UploadErr(MissingFile))` - No file was sent
    /// - `Err(AppError::BadRequest)` - Biome id missing or malformed
    pub fn from_form(mut form: UploadForm) -> Result<Self, AppError> {
        let file = form.take_file().ok_or(UploadError::MissingFile)?;
        let biome_id = required_id("ID do bioma", form.take_text("biomeId").as_deref())?;

        Ok(Self {
            biome_id,
            description: description(form.take_text("description")),
            file,
        })
    }
}

/// Input for updating a biome image. Absent fields stay unchanged.
#[derive(Debug)]
pub struct UpdateBiomeImageParams {
    pub id: Uuid,
    pub biome_id: Option<Uuid>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
    pub file: Option<StoredUpload>,
}

impl UpdateBiomeImageParams {
    pub fn from_form(mut form: UploadForm) -> Result<Self, AppError> {
        let id = required_id("ID", form.take_text("id").as_deref())?;
        let biome_id = optional_id("biomeId", form.take_text("biomeId").as_deref())?;

        Ok(Self {
            id,
            biome_id,
            description: form.take_text("description").map(|d| description(Some(d))),
            file: form.take_file(),
        })
    }
}

/// Columns to change on an existing image. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct BiomeImageChanges {
    pub filename: Option<String>,
    pub description: Option<Option<String>>,
    pub biome_id: Option<Uuid>,
}
