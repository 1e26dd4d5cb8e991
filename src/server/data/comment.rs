//! Comment data repository.
//!
//! Besides plain CRUD, this repository assembles the two-level comment tree shown under
//! posts: top-level comments newest first, each with its direct replies oldest first.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::{
    comment::{Comment, CommentThread, CommentWithAuthor, CreateCommentParams},
    user::Author,
};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a comment, or a reply when `parent_comment_id` is set.
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, DbErr> {
        let entity = entity::comment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            content: ActiveValue::Set(params.content),
            author_id: ActiveValue::Set(params.author_id),
            post_id: ActiveValue::Set(params.post_id),
            parent_comment_id: ActiveValue::Set(params.parent_comment_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, DbErr> {
        let entity = entity::prelude::Comment::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Comment::from_entity))
    }

    /// Gets every comment and reply on the given posts, oldest first.
    pub async fn get_by_post_ids(&self, post_ids: &[Uuid]) -> Result<Vec<Comment>, DbErr> {
        if post_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.is_in(post_ids.iter().copied()))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Comment::from_entity).collect())
    }

    /// Gets every comment written by the given users, newest first.
    pub async fn get_by_author_ids(&self, author_ids: &[Uuid]) -> Result<Vec<Comment>, DbErr> {
        if author_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Comment::find()
            .filter(entity::comment::Column::AuthorId.is_in(author_ids.iter().copied()))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Comment::from_entity).collect())
    }

    /// Gets the direct replies to the given comments, oldest first.
    pub async fn get_replies_to(&self, parent_ids: &[Uuid]) -> Result<Vec<Comment>, DbErr> {
        if parent_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ParentCommentId.is_in(parent_ids.iter().copied()))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Comment::from_entity).collect())
    }

    /// Gets the comment threads of a single post.
    pub async fn get_threads_for_post(&self, post_id: Uuid) -> Result<Vec<CommentThread>, DbErr> {
        let mut threads = self.get_threads_by_post_ids(&[post_id]).await?;

        Ok(threads.remove(&post_id).unwrap_or_default())
    }

    /// Builds the comment threads of several posts with one query.
    ///
    /// Top-level comments are ordered newest first and replies oldest first; ties on
    /// `created_at` are broken by id. Replies whose parent is itself a reply are not
    /// part of any thread.
    ///
    /// # Returns
    /// - `Ok(HashMap)` - Threads keyed by post id; posts without comments are absent
    /// - `Err(DbErr)` - Query failed or a comment references a missing author
    pub async fn get_threads_by_post_ids(
        &self,
        post_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<CommentThread>>, DbErr> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.is_in(post_ids.iter().copied()))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        let mut top_level = Vec::new();
        let mut replies: HashMap<Uuid, Vec<CommentWithAuthor>> = HashMap::new();

        for (comment, author) in rows {
            let author = author.ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "Author {} of comment {} not found",
                    comment.author_id, comment.id
                ))
            })?;
            let entry = CommentWithAuthor {
                comment: Comment::from_entity(comment),
                author: Author::from_entity(author),
            };

            match entry.comment.parent_comment_id {
                Some(parent_id) => replies.entry(parent_id).or_default().push(entry),
                None => top_level.push(entry),
            }
        }

        top_level.sort_by(|a, b| {
            b.comment
                .created_at
                .cmp(&a.comment.created_at)
                .then_with(|| a.comment.id.cmp(&b.comment.id))
        });

        let mut threads: HashMap<Uuid, Vec<CommentThread>> = HashMap::new();
        for root in top_level {
            let thread = CommentThread {
                replies: replies.remove(&root.comment.id).unwrap_or_default(),
                comment: root.comment,
                author: root.author,
            };
            threads
                .entry(thread.comment.post_id)
                .or_default()
                .push(thread);
        }

        Ok(threads)
    }

    /// Replaces the content of a comment.
    pub async fn update_content(&self, id: Uuid, content: String) -> Result<Comment, DbErr> {
        let comment = entity::prelude::Comment::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Comment with id {} not found",
                id
            )))?;

        let mut active_model: entity::comment::ActiveModel = comment.into();
        active_model.content = ActiveValue::Set(content);

        let entity = active_model.update(self.db).await?;

        Ok(Comment::from_entity(entity))
    }

    /// Deletes a comment. Replies are removed by the foreign key cascade.
    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Comment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
