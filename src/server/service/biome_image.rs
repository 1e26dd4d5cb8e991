//! Biome image service.
//!
//! Every write that carries a file receives it as an uncommitted [`StoredUpload`]. The
//! upload is committed only after the row pointing at it was written, so any error on
//! the way drops the guard and removes the file again.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{biome::BiomeRepository, biome_image::BiomeImageRepository},
    error::AppError,
    model::biome_image::{
        BiomeImage, BiomeImageChanges, BiomeImageWithBiome, CreateBiomeImageParams,
        UpdateBiomeImageParams,
    },
    upload::UploadStore,
};

const NOT_FOUND_MESSAGE: &str = "Imagem não encontrada";

pub struct BiomeImageService<'a> {
    db: &'a DatabaseConnection,
    uploads: &'a UploadStore,
}

impl<'a> BiomeImageService<'a> {
    pub fn new(db: &'a DatabaseConnection, uploads: &'a UploadStore) -> Self {
        Self { db, uploads }
    }

    /// Creates an image for an existing biome.
    ///
    /// # Returns
    /// - `Ok(BiomeImage)` - The created image
    /// - `Err(AppError::NotFound)` - Unknown biome; the upload is discarded
    pub async fn create(&self, params: CreateBiomeImageParams) -> Result<BiomeImage, AppError> {
        self.ensure_biome_exists(params.biome_id).await?;

        let image = BiomeImageRepository::new(self.db)
            .create(
                params.biome_id,
                params.file.filename().to_string(),
                params.description,
            )
            .await?;
        params.file.commit();

        Ok(image)
    }

    /// Lists every image with its biome, newest first.
    pub async fn get_all(&self) -> Result<Vec<BiomeImageWithBiome>, AppError> {
        Ok(BiomeImageRepository::new(self.db)
            .get_all_with_biome()
            .await?)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<BiomeImageWithBiome, AppError> {
        BiomeImageRepository::new(self.db)
            .get_with_biome(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))
    }

    /// Updates an image, optionally replacing its file.
    ///
    /// When a new file is supplied the previous file is removed after the row points at
    /// the new one.
    ///
    /// # Returns
    /// - `Ok(BiomeImage)` - The updated image
    /// - `Err(AppError::NotFound)` - Unknown image or unknown target biome
    pub async fn update(&self, params: UpdateBiomeImageParams) -> Result<BiomeImage, AppError> {
        let repo = BiomeImageRepository::new(self.db);

        let existing = repo
            .find_by_id(params.id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))?;

        if let Some(biome_id) = params.biome_id {
            self.ensure_biome_exists(biome_id).await?;
        }

        let changes = BiomeImageChanges {
            filename: params.file.as_ref().map(|f| f.filename().to_string()),
            description: params.description,
            biome_id: params.biome_id,
        };

        let image = repo.update(existing.id, changes).await?;

        if let Some(file) = params.file {
            file.commit();
            self.uploads.remove(&existing.filename).await;
        }

        Ok(image)
    }

    /// Deletes an image row and then its file.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let repo = BiomeImageRepository::new(self.db);

        let image = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))?;

        repo.delete(image.id).await?;
        self.uploads.remove(&image.filename).await;

        Ok(())
    }

    async fn ensure_biome_exists(&self, biome_id: Uuid) -> Result<(), AppError> {
        match BiomeRepository::new(self.db).find_by_id(biome_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound("Bioma não encontrado".to_string())),
        }
    }
}

