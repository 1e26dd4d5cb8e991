//! Biome image data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::{
    biome::Biome,
    biome_image::{BiomeImage, BiomeImageChanges, BiomeImageWithBiome},
};

pub struct BiomeImageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BiomeImageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an image row for a file already present in the upload directory.
    pub async fn create(
        &self,
        biome_id: Uuid,
        filename: String,
        description: Option<String>,
    ) -> Result<BiomeImage, DbErr> {
        let entity = entity::biome_image::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            filename: ActiveValue::Set(filename),
            description: ActiveValue::Set(description),
            biome_id: ActiveValue::Set(biome_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(BiomeImage::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<BiomeImage>, DbErr> {
        let entity = entity::prelude::BiomeImage::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(BiomeImage::from_entity))
    }

    /// Gets an image together with its biome.
    pub async fn get_with_biome(&self, id: Uuid) -> Result<Option<BiomeImageWithBiome>, DbErr> {
        let row = entity::prelude::BiomeImage::find_by_id(id)
            .find_also_related(entity::prelude::Biome)
            .one(self.db)
            .await?;

        row.map(Self::with_biome).transpose()
    }

    /// Gets every image together with its biome, newest first.
    pub async fn get_all_with_biome(&self) -> Result<Vec<BiomeImageWithBiome>, DbErr> {
        let rows = entity::prelude::BiomeImage::find()
            .find_also_related(entity::prelude::Biome)
            .order_by_desc(entity::biome_image::Column::CreatedAt)
            .order_by_asc(entity::biome_image::Column::Id)
            .all(self.db)
            .await?;

        rows.into_iter().map(Self::with_biome).collect()
    }

    /// Gets the images of any of the given biomes, oldest first.
    pub async fn get_by_biome_ids(&self, biome_ids: &[Uuid]) -> Result<Vec<BiomeImage>, DbErr> {
        if biome_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::BiomeImage::find()
            .filter(entity::biome_image::Column::BiomeId.is_in(biome_ids.iter().copied()))
            .order_by_asc(entity::biome_image::Column::CreatedAt)
            .order_by_asc(entity::biome_image::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(BiomeImage::from_entity).collect())
    }

    /// Applies the supplied changes to an image row.
    ///
    /// # Returns
    /// - `Ok(BiomeImage)` - The updated image
    /// - `Err(DbErr::RecordNotFound)` - No image with this ID
    pub async fn update(&self, id: Uuid, changes: BiomeImageChanges) -> Result<BiomeImage, DbErr> {
        let image = entity::prelude::BiomeImage::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Biome image with id {} not found",
                id
            )))?;

        let mut active_model: entity::biome_image::ActiveModel = image.clone().into();
        if let Some(filename) = changes.filename {
            active_model.filename = ActiveValue::Set(filename);
        }
        if let Some(description) = changes.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(biome_id) = changes.biome_id {
            active_model.biome_id = ActiveValue::Set(biome_id);
        }

        if !active_model.is_changed() {
            return Ok(BiomeImage::from_entity(image));
        }

        let entity = active_model.update(self.db).await?;

        Ok(BiomeImage::from_entity(entity))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::BiomeImage::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    fn with_biome(
        (image, biome): (entity::biome_image::Model, Option<entity::biome::Model>),
    ) -> Result<BiomeImageWithBiome, DbErr> {
        let biome = biome.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Biome {} of image {} not found",
                image.biome_id, image.id
            ))
        })?;

        Ok(BiomeImageWithBiome {
            image: BiomeImage::from_entity(image),
            biome: Biome::from_entity(biome),
        })
    }
}
