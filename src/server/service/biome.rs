//! Biome service for business logic.
//!
//! Biome names are unique. Reads come in two depths: the listing and the name search
//! attach images and plain posts, the lookup by exact name expands posts down to
//! comment replies.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{biome::BiomeRepository, biome_image::BiomeImageRepository, post::PostRepository},
    error::AppError,
    model::biome::{Biome, BiomeDetails, BiomeWithContent, CreateBiomeParams, UpdateBiomeParams},
    upload::UploadStore,
};

const NAME_TAKEN_MESSAGE: &str = "Já existe um bioma com este nome";
const NOT_FOUND_MESSAGE: &str = "Bioma não encontrado";

pub struct BiomeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BiomeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a biome.
    ///
    /// # Returns
    /// - `Ok(Biome)` - The created biome
    /// - `Err(AppError::Conflict)` - A biome with this exact name exists
    pub async fn create(&self, params: CreateBiomeParams) -> Result<Biome, AppError> {
        let repo = BiomeRepository::new(self.db);

        if repo.name_taken(&params.name, None).await? {
            return Err(AppError::Conflict(NAME_TAKEN_MESSAGE.to_string()));
        }

        let biome = repo.create(params).await?;

        tracing::info!("Created biome {} ({})", biome.name, biome.id);

        Ok(biome)
    }

    /// Lists every biome, ordered by name, with its images and posts.
    pub async fn get_all(&self) -> Result<Vec<BiomeWithContent>, AppError> {
        let repo = BiomeRepository::new(self.db);

        let biomes = repo.get_all().await?;

        Ok(repo.with_content(biomes).await?)
    }

    /// Gets a biome by its exact name with images and fully expanded posts.
    ///
    /// # Returns
    /// - `Ok(BiomeDetails)` - Biome, images and posts with author and comment threads
    /// - `Err(AppError::NotFound)` - No biome has exactly this name
    pub async fn get_by_name(&self, name: &str) -> Result<BiomeDetails, AppError> {
        let biome = BiomeRepository::new(self.db)
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))?;

        let images = BiomeImageRepository::new(self.db)
            .get_by_biome_ids(&[biome.id])
            .await?;

        let post_repo = PostRepository::new(self.db);
        let posts = post_repo.get_by_biome_ids(&[biome.id]).await?;
        let posts = post_repo.load_details(posts).await?;

        Ok(BiomeDetails {
            biome,
            images,
            posts,
        })
    }

    /// Finds the first biome, by name, whose name contains `term` regardless of case.
    ///
    /// # Returns
    /// - `Ok(BiomeWithContent)` - The matching biome with images and posts
    /// - `Err(AppError::NotFound)` - Nothing matched
    pub async fn search(&self, term: &str) -> Result<BiomeWithContent, AppError> {
        let repo = BiomeRepository::new(self.db);

        let biome = repo
            .search_by_name(term)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))?;

        repo.with_content(vec![biome])
            .await?
            .pop()
            .ok_or_else(|| AppError::InternalError("Biome lost its content".to_string()))
    }

    /// Updates the supplied fields of a biome.
    ///
    /// # Returns
    /// - `Ok(Biome)` - The updated biome
    /// - `Err(AppError::NotFound)` - No biome with this ID
    /// - `Err(AppError::Conflict)` - The new name belongs to another biome
    pub async fn update(&self, params: UpdateBiomeParams) -> Result<Biome, AppError> {
        let repo = BiomeRepository::new(self.db);

        if repo.find_by_id(params.id).await?.is_none() {
            return Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }

        if let Some(name) = &params.name {
            if repo.name_taken(name, Some(params.id)).await? {
                return Err(AppError::Conflict(NAME_TAKEN_MESSAGE.to_string()));
            }
        }

        Ok(repo.update(params).await?)
    }

    /// Deletes a biome.
    ///
    /// Image rows go with it through the cascade; their files are removed once the
    /// delete went through. Posts stay, detached from the biome.
    pub async fn delete(&self, id: Uuid, uploads: &UploadStore) -> Result<(), AppError> {
        let repo = BiomeRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }

        let images = BiomeImageRepository::new(self.db)
            .get_by_biome_ids(&[id])
            .await?;

        repo.delete(id).await?;

        for image in images {
            uploads.remove(&image.filename).await;
        }

        tracing::info!("Deleted biome {}", id);

        Ok(())
    }
}
