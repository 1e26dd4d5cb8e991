use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{comment::CommentRepository, post::PostRepository, user::UserRepository},
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        comment::{
            Comment, CommentThread, CreateCommentParams, DeleteCommentParams, UpdateCommentParams,
        },
        user::Author,
    },
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the comment threads of a post
    ///
    /// Top-level comments come newest first, each with its direct replies oldest first.
    pub async fn get_for_post(&self, post_id: Uuid) -> Result<Vec<CommentThread>, AppError> {
        self.ensure_post_exists(post_id).await?;

        let threads = CommentRepository::new(self.db)
            .get_threads_for_post(post_id)
            .await?;

        Ok(threads)
    }

    /// Creates a top-level comment or a reply
    ///
    /// # Returns
    /// - `Ok(CommentThread)`: The created comment with its author and no replies yet
    /// - `Err(AppError::NotFound)`: Unknown post, author or parent comment
    /// - `Err(AppError::BadRequest)`: The parent comment belongs to another post
    pub async fn create(&self, params: CreateCommentParams) -> Result<CommentThread, AppError> {
        let repo = CommentRepository::new(self.db);

        self.ensure_post_exists(params.post_id).await?;

        let author = UserRepository::new(self.db)
            .find_by_id(params.author_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuário não encontrado".to_string()))?;

        if let Some(parent_id) = params.parent_comment_id {
            let parent = repo
                .find_by_id(parent_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Comentário pai não encontrado".to_string()))?;

            if parent.post_id != params.post_id {
                return Err(AppError::BadRequest(
                    "Comentário pai pertence a outro post".to_string(),
                ));
            }
        }

        let comment = repo.create(params).await?;

        Ok(CommentThread {
            comment,
            author: Author::from_user(author),
            replies: Vec::new(),
        })
    }

    /// Replaces the content of a comment on behalf of its author
    pub async fn update(&self, params: UpdateCommentParams) -> Result<Comment, AppError> {
        let comment = self.find_comment(params.id).await?;

        AuthGuard::new(self.db, params.author_id)
            .require(&[Permission::Author(comment.author_id)])
            .await?;

        let comment = CommentRepository::new(self.db)
            .update_content(comment.id, params.content)
            .await?;

        Ok(comment)
    }

    /// Deletes a comment on behalf of its author; replies go with it
    pub async fn delete(&self, params: DeleteCommentParams) -> Result<(), AppError> {
        let comment = self.find_comment(params.id).await?;

        AuthGuard::new(self.db, params.author_id)
            .require(&[Permission::Author(comment.author_id)])
            .await?;

        CommentRepository::new(self.db).delete(comment.id).await?;

        Ok(())
    }

    async fn find_comment(&self, id: Uuid) -> Result<Comment, AppError> {
        CommentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comentário não encontrado".to_string()))
    }

    async fn ensure_post_exists(&self, post_id: Uuid) -> Result<(), AppError> {
        match PostRepository::new(self.db).find_by_id(post_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound("Post não encontrado".to_string())),
        }
    }
}
