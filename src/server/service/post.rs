use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{biome::BiomeRepository, post::PostRepository, user::UserRepository},
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::post::{CreatePostParams, DeletePostParams, Post, PostDetails, UpdatePostParams},
};

pub struct PostService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every post, newest first, with author, biome and comment threads
    pub async fn get_all(&self) -> Result<Vec<PostDetails>, AppError> {
        let repo = PostRepository::new(self.db);

        let posts = repo.get_all().await?;

        Ok(repo.load_details(posts).await?)
    }

    /// Gets a single post with author, biome and comment threads
    pub async fn get_by_id(&self, id: Uuid) -> Result<PostDetails, AppError> {
        let repo = PostRepository::new(self.db);

        let post = self.find_post(id).await?;

        repo.load_details(vec![post])
            .await?
            .pop()
            .ok_or_else(|| AppError::InternalError(format!("Post {} lost its expansion", id)))
    }

    /// Gets the posts filed under a biome
    ///
    /// An existing biome without posts yields an empty list.
    ///
    /// # Returns
    /// - `Ok(Vec<PostDetails>)`: Expanded posts, newest first
    /// - `Err(AppError::NotFound)`: Unknown biome
    pub async fn get_by_biome(&self, biome_id: Uuid) -> Result<Vec<PostDetails>, AppError> {
        let repo = PostRepository::new(self.db);

        self.ensure_biome_exists(biome_id).await?;

        let posts = repo.get_by_biome_ids(&[biome_id]).await?;

        Ok(repo.load_details(posts).await?)
    }

    /// Creates a post
    ///
    /// # Returns
    /// - `Ok(PostDetails)`: The created post with its author, biome and no comments yet
    /// - `Err(AppError::NotFound)`: Unknown author or biome
    pub async fn create(&self, params: CreatePostParams) -> Result<PostDetails, AppError> {
        if !UserRepository::new(self.db)
            .exists(params.author_id)
            .await?
        {
            return Err(AppError::NotFound("Usuário não encontrado".to_string()));
        }

        if let Some(biome_id) = params.biome_id {
            self.ensure_biome_exists(biome_id).await?;
        }

        let repo = PostRepository::new(self.db);
        let post = repo.create(params).await?;

        repo.load_details(vec![post])
            .await?
            .pop()
            .ok_or_else(|| AppError::InternalError("Created post lost its details".to_string()))
    }

    /// Updates a post on behalf of its author
    ///
    /// # Returns
    /// - `Ok(Post)`: The updated post
    /// - `Err(AppError::NotFound)`: Unknown post or biome
    /// - `Err(AppError::AuthErr)`: The acting user isn't the author
    pub async fn update(&self, params: UpdatePostParams) -> Result<Post, AppError> {
        let post = self.find_post(params.id).await?;

        AuthGuard::new(self.db, params.user_id)
            .require(&[Permission::Author(post.author_id)])
            .await?;

        if let Some(biome_id) = params.biome_id {
            self.ensure_biome_exists(biome_id).await?;
        }

        let post = PostRepository::new(self.db)
            .update(params.id, params.title, params.content, params.biome_id)
            .await?;

        Ok(post)
    }

    /// Deletes a post on behalf of its author; its comments go with it
    pub async fn delete(&self, params: DeletePostParams) -> Result<(), AppError> {
        let post = self.find_post(params.id).await?;

        AuthGuard::new(self.db, params.user_id)
            .require(&[Permission::Author(post.author_id)])
            .await?;

        PostRepository::new(self.db).delete(post.id).await?;

        Ok(())
    }

    async fn find_post(&self, id: Uuid) -> Result<Post, AppError> {
        PostRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post não encontrado".to_string()))
    }

    async fn ensure_biome_exists(&self, biome_id: Uuid) -> Result<(), AppError> {
        match BiomeRepository::new(self.db).find_by_id(biome_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound("Bioma não encontrado".to_string())),
        }
    }
}
