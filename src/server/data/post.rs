//! Post data repository.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    data::comment::CommentRepository,
    model::{
        biome::Biome,
        post::{CreatePostParams, Post, PostDetails},
        user::Author,
    },
};

pub struct PostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostRepository<'a> {
    /// Creates a new PostRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PostRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new post
    ///
    /// # Arguments
    /// - `params`: Validated post fields; author and biome must exist
    ///
    /// # Returns
    /// - `Ok(Post)`: The created post
    /// - `Err(DbErr)`: Database error, including foreign key violations
    pub async fn create(&self, params: CreatePostParams) -> Result<Post, DbErr> {
        let entity = entity::post::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            author_id: ActiveValue::Set(params.author_id),
            biome_id: ActiveValue::Set(params.biome_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Post::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DbErr> {
        let entity = entity::prelude::Post::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Post::from_entity))
    }

    /// Gets all posts, newest first
    pub async fn get_all(&self) -> Result<Vec<Post>, DbErr> {
        let entities = entity::prelude::Post::find()
            .order_by_desc(entity::post::Column::CreatedAt)
            .order_by_asc(entity::post::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Post::from_entity).collect())
    }

    /// Gets posts by ID, in no particular order
    pub async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Post>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Post::find()
            .filter(entity::post::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Post::from_entity).collect())
    }

    /// Gets the posts filed under any of the given biomes, newest first
    pub async fn get_by_biome_ids(&self, biome_ids: &[Uuid]) -> Result<Vec<Post>, DbErr> {
        if biome_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Post::find()
            .filter(entity::post::Column::BiomeId.is_in(biome_ids.iter().copied()))
            .order_by_desc(entity::post::Column::CreatedAt)
            .order_by_asc(entity::post::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Post::from_entity).collect())
    }

    /// Gets the posts written by any of the given users, newest first
    pub async fn get_by_author_ids(&self, author_ids: &[Uuid]) -> Result<Vec<Post>, DbErr> {
        if author_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Post::find()
            .filter(entity::post::Column::AuthorId.is_in(author_ids.iter().copied()))
            .order_by_desc(entity::post::Column::CreatedAt)
            .order_by_asc(entity::post::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Post::from_entity).collect())
    }

    /// Updates the supplied fields of a post
    ///
    /// # Arguments
    /// - `id`: ID of the post to update
    /// - `title`, `content`, `biome_id`: New values; `None` leaves the column unchanged
    ///
    /// # Returns
    /// - `Ok(Post)`: The updated post
    /// - `Err(DbErr::RecordNotFound)`: No post with this ID
    pub async fn update(
        &self,
        id: Uuid,
        title: Option<String>,
        content: Option<String>,
        biome_id: Option<Uuid>,
    ) -> Result<Post, DbErr> {
        let post = entity::prelude::Post::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Post with id {} not found",
                id
            )))?;

        let mut active_model: entity::post::ActiveModel = post.clone().into();
        if let Some(title) = title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(content) = content {
            active_model.content = ActiveValue::Set(content);
        }
        if let Some(biome_id) = biome_id {
            active_model.biome_id = ActiveValue::Set(Some(biome_id));
        }

        if !active_model.is_changed() {
            return Ok(Post::from_entity(post));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Post::from_entity(entity))
    }

    /// Deletes a post. Its comments are removed by the foreign key cascade.
    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Post::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Expands posts with their author summary, biome and comment threads
    ///
    /// Runs one query per relation regardless of the number of posts and keeps the
    /// order of `posts`.
    ///
    /// # Returns
    /// - `Ok(Vec<PostDetails>)`: One entry per input post
    /// - `Err(DbErr)`: Query failed or a post references a missing author
    pub async fn load_details(&self, posts: Vec<Post>) -> Result<Vec<PostDetails>, DbErr> {
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let post_ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();
        let author_ids: Vec<Uuid> = posts.iter().map(|p| p.author_id).collect();
        let biome_ids: Vec<Uuid> = posts.iter().filter_map(|p| p.biome_id).collect();

        let authors: HashMap<Uuid, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(author_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let biomes: HashMap<Uuid, entity::biome::Model> = if !biome_ids.is_empty() {
            entity::prelude::Biome::find()
                .filter(entity::biome::Column::Id.is_in(biome_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|b| (b.id, b))
                .collect()
        } else {
            HashMap::new()
        };

        let mut threads = CommentRepository::new(self.db)
            .get_threads_by_post_ids(&post_ids)
            .await?;

        posts
            .into_iter()
            .map(|post| {
                let author = authors.get(&post.author_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Author {} of post {} not found",
                        post.author_id, post.id
                    ))
                })?;
                let biome = post
                    .biome_id
                    .and_then(|id| biomes.get(&id).cloned())
                    .map(Biome::from_entity);

                Ok(PostDetails {
                    comments: threads.remove(&post.id).unwrap_or_default(),
                    author: Author::from_entity(author),
                    biome,
                    post,
                })
            })
            .collect()
    }
}
