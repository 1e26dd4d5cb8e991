//! Biome data repository.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    data::{biome_image::BiomeImageRepository, post::PostRepository},
    model::{
        biome::{Biome, BiomeWithContent, CreateBiomeParams, UpdateBiomeParams},
        biome_image::BiomeImage,
        post::Post,
    },
};

/// Repository providing database operations for biomes.
pub struct BiomeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BiomeRepository<'a> {
    /// Creates a new BiomeRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BiomeRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new biome.
    ///
    /// # Returns
    /// - `Ok(Biome)` - The created biome
    /// - `Err(DbErr)` - Database error, including a unique violation on the name
    pub async fn create(&self, params: CreateBiomeParams) -> Result<Biome, DbErr> {
        let entity = entity::biome::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(params.name),
            introduction: ActiveValue::Set(params.introduction),
            general_characteristics: ActiveValue::Set(params.general_characteristics),
            natural_resources: ActiveValue::Set(params.natural_resources),
            environmental_problems: ActiveValue::Set(params.environmental_problems),
            conservation: ActiveValue::Set(params.conservation),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Biome::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Biome>, DbErr> {
        let entity = entity::prelude::Biome::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Biome::from_entity))
    }

    /// Finds a biome by its exact, case-sensitive name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Biome>, DbErr> {
        let entity = entity::prelude::Biome::find()
            .filter(entity::biome::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Biome::from_entity))
    }

    /// Checks whether another biome already uses `name`.
    ///
    /// # Arguments
    /// - `name` - Name to look up
    /// - `exclude` - Biome to ignore, used when renaming
    pub async fn name_taken(&self, name: &str, exclude: Option<Uuid>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Biome::find().filter(entity::biome::Column::Name.eq(name));
        if let Some(id) = exclude {
            query = query.filter(entity::biome::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Finds the first biome, by name, whose name contains `term` ignoring case.
    ///
    /// Matching happens in memory so that case folding covers accented names on every
    /// backend; the biome table only ever holds a handful of rows.
    pub async fn search_by_name(&self, term: &str) -> Result<Option<Biome>, DbErr> {
        let needle = term.to_lowercase();

        let entity = entity::prelude::Biome::find()
            .order_by_asc(entity::biome::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .find(|b| b.name.to_lowercase().contains(&needle));

        Ok(entity.map(Biome::from_entity))
    }

    /// Gets all biomes ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Biome>, DbErr> {
        let entities = entity::prelude::Biome::find()
            .order_by_asc(entity::biome::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Biome::from_entity).collect())
    }

    /// Attaches images and posts to each biome, keeping the order of `biomes`.
    pub async fn with_content(&self, biomes: Vec<Biome>) -> Result<Vec<BiomeWithContent>, DbErr> {
        let biome_ids: Vec<Uuid> = biomes.iter().map(|b| b.id).collect();

        let mut images: HashMap<Uuid, Vec<BiomeImage>> = HashMap::new();
        for image in BiomeImageRepository::new(self.db)
            .get_by_biome_ids(&biome_ids)
            .await?
        {
            images.entry(image.biome_id).or_default().push(image);
        }

        let mut posts: HashMap<Uuid, Vec<Post>> = HashMap::new();
        for post in PostRepository::new(self.db)
            .get_by_biome_ids(&biome_ids)
            .await?
        {
            if let Some(biome_id) = post.biome_id {
                posts.entry(biome_id).or_default().push(post);
            }
        }

        Ok(biomes
            .into_iter()
            .map(|biome| BiomeWithContent {
                images: images.remove(&biome.id).unwrap_or_default(),
                posts: posts.remove(&biome.id).unwrap_or_default(),
                biome,
            })
            .collect())
    }

    /// Updates the supplied fields of a biome.
    ///
    /// # Returns
    /// - `Ok(Biome)` - The updated biome
    /// - `Err(DbErr::RecordNotFound)` - No biome with this ID
    pub async fn update(&self, params: UpdateBiomeParams) -> Result<Biome, DbErr> {
        let biome = entity::prelude::Biome::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Biome with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::biome::ActiveModel = biome.clone().into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(introduction) = params.introduction {
            active_model.introduction = ActiveValue::Set(introduction);
        }
        if let Some(general_characteristics) = params.general_characteristics {
            active_model.general_characteristics = ActiveValue::Set(general_characteristics);
        }
        if let Some(natural_resources) = params.natural_resources {
            active_model.natural_resources = ActiveValue::Set(natural_resources);
        }
        if let Some(environmental_problems) = params.environmental_problems {
            active_model.environmental_problems = ActiveValue::Set(environmental_problems);
        }
        if let Some(conservation) = params.conservation {
            active_model.conservation = ActiveValue::Set(conservation);
        }

        if !active_model.is_changed() {
            return Ok(Biome::from_entity(biome));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Biome::from_entity(entity))
    }

    /// Deletes a biome.
    ///
    /// Images are removed by the foreign key cascade; posts keep existing with
    /// `biome_id` set to NULL.
    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Biome::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
