//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, partial updates, lookups and the expansion of a user's posts
//! and comments, with conversion between entity models and domain models at the
//! infrastructure boundary. Password hashes are written here but never returned.

use std::collections::HashMap;

use crate::server::{
    data::{comment::CommentRepository, post::PostRepository},
    model::{
        biome::Biome,
        comment::Comment,
        post::Post,
        user::{AuthoredComment, AuthoredPost, NewUser, User, UserChanges, UserWithActivity},
    },
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// Generates the user ID and creation timestamp. The email must already be
    /// normalized and the password already hashed.
    ///
    /// # Arguments
    /// - `new_user` - Name, normalized email, password hash and admin flag
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on the email
    pub async fn create(&self, new_user: NewUser) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(new_user.name),
            email: ActiveValue::Set(new_user.email),
            password_hash: ActiveValue::Set(new_user.password_hash),
            is_admin: ActiveValue::Set(new_user.is_admin),
            profile_image: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Arguments
    /// - `id` - User ID
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user found with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks whether a user exists.
    ///
    /// # Arguments
    /// - `id` - User ID
    ///
    /// # Returns
    /// - `Ok(true)` - A user with this ID exists
    /// - `Ok(false)` - No such user
    /// - `Err(DbErr)` - Database error during count query
    pub async fn exists(&self, id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether an email address is already registered.
    ///
    /// The comparison is exact, so callers pass the normalized (trimmed, lower-cased)
    /// address, which is also how emails are stored.
    ///
    /// # Arguments
    /// - `email` - Normalized email address
    /// - `exclude` - User to ignore, used when a user changes their own email
    ///
    /// # Returns
    /// - `Ok(true)` - Another user already uses this email
    /// - `Ok(false)` - The email is free
    /// - `Err(DbErr)` - Database error during count query
    pub async fn email_taken(&self, email: &str, exclude: Option<Uuid>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));
        if let Some(id) = exclude {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets all users ordered alphabetically by name.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Expands users with the posts and comments they wrote.
    ///
    /// Each post carries its biome and every comment on it; each comment carries the
    /// post it belongs to and its direct replies. Posts and comments are listed newest
    /// first, comments under a post and replies oldest first. The number of queries does
    /// not depend on the number of users.
    ///
    /// # Arguments
    /// - `users` - Users to expand; their order is kept
    ///
    /// # Returns
    /// - `Ok(Vec<UserWithActivity>)` - One entry per input user
    /// - `Err(DbErr)` - Database error during any of the batch queries
    pub async fn with_activity(&self, users: Vec<User>) -> Result<Vec<UserWithActivity>, DbErr> {
        if users.is_empty() {
            return Ok(Vec::new());
        }

        let post_repo = PostRepository::new(self.db);
        let comment_repo = CommentRepository::new(self.db);
        let user_ids: Vec<Uuid> = users.iter().map(|u| u.id).collect();

        // Posts written by the users, with their biomes and comments
        let posts = post_repo.get_by_author_ids(&user_ids).await?;
        let post_ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();
        let biome_ids: Vec<Uuid> = posts.iter().filter_map(|p| p.biome_id).collect();

        let biomes: HashMap<Uuid, Biome> = if !biome_ids.is_empty() {
            entity::prelude::Biome::find()
                .filter(entity::biome::Column::Id.is_in(biome_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|b| (b.id, Biome::from_entity(b)))
                .collect()
        } else {
            HashMap::new()
        };

        let mut comments_by_post: HashMap<Uuid, Vec<Comment>> = HashMap::new();
        for comment in comment_repo.get_by_post_ids(&post_ids).await? {
            comments_by_post
                .entry(comment.post_id)
                .or_default()
                .push(comment);
        }

        // Comments written by the users, with their posts and replies
        let comments = comment_repo.get_by_author_ids(&user_ids).await?;
        let comment_ids: Vec<Uuid> = comments.iter().map(|c| c.id).collect();
        let commented_post_ids: Vec<Uuid> = comments.iter().map(|c| c.post_id).collect();

        let commented_posts: HashMap<Uuid, Post> = post_repo
            .get_by_ids(&commented_post_ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let mut replies_by_parent: HashMap<Uuid, Vec<Comment>> = HashMap::new();
        for reply in comment_repo.get_replies_to(&comment_ids).await? {
            if let Some(parent_id) = reply.parent_comment_id {
                replies_by_parent.entry(parent_id).or_default().push(reply);
            }
        }

        let mut posts_by_author: HashMap<Uuid, Vec<AuthoredPost>> = HashMap::new();
        for post in posts {
            let authored = AuthoredPost {
                biome: post.biome_id.and_then(|id| biomes.get(&id).cloned()),
                comments: comments_by_post.remove(&post.id).unwrap_or_default(),
                post,
            };
            posts_by_author
                .entry(authored.post.author_id)
                .or_default()
                .push(authored);
        }

        let mut comments_by_author: HashMap<Uuid, Vec<AuthoredComment>> = HashMap::new();
        for comment in comments {
            let Some(post) = commented_posts.get(&comment.post_id).cloned() else {
                return Err(DbErr::RecordNotFound(format!(
                    "Post {} of comment {} not found",
                    comment.post_id, comment.id
                )));
            };
            let authored = AuthoredComment {
                replies: replies_by_parent.remove(&comment.id).unwrap_or_default(),
                post,
                comment,
            };
            comments_by_author
                .entry(authored.comment.author_id)
                .or_default()
                .push(authored);
        }

        Ok(users
            .into_iter()
            .map(|user| UserWithActivity {
                posts: posts_by_author.remove(&user.id).unwrap_or_default(),
                comments: comments_by_author.remove(&user.id).unwrap_or_default(),
                user,
            })
            .collect())
    }

    /// Applies a partial update to a user.
    ///
    /// Only the columns set in `changes` are written.
    ///
    /// # Arguments
    /// - `id` - ID of the user to update
    /// - `changes` - New values for name, email, password hash and admin flag
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with this ID
    /// - `Err(DbErr)` - Database error, including a unique violation on the email
    pub async fn update(&self, id: Uuid, changes: UserChanges) -> Result<User, DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "User with id {} not found",
                id
            )))?;

        let mut active_model: entity::user::ActiveModel = user.clone().into();
        if let Some(name) = changes.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(email) = changes.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(password_hash) = changes.password_hash {
            active_model.password_hash = ActiveValue::Set(password_hash);
        }
        if let Some(is_admin) = changes.is_admin {
            active_model.is_admin = ActiveValue::Set(is_admin);
        }

        if !active_model.is_changed() {
            return Ok(User::from_entity(user));
        }

        let entity = active_model.update(self.db).await?;

        Ok(User::from_entity(entity))
    }

    /// Sets the profile image filename of a user.
    ///
    /// # Arguments
    /// - `id` - ID of the user
    /// - `filename` - Stored upload filename
    ///
    /// # Returns
    /// - `Ok((User, Option<String>))` - The updated user and the previous filename, if any
    /// - `Err(DbErr::RecordNotFound)` - No user with this ID
    pub async fn set_profile_image(
        &self,
        id: Uuid,
        filename: String,
    ) -> Result<(User, Option<String>), DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "User with id {} not found",
                id
            )))?;

        let previous = user.profile_image.clone();

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.profile_image = ActiveValue::Set(Some(filename));

        let entity = active_model.update(self.db).await?;

        Ok((User::from_entity(entity), previous))
    }

    /// Deletes a user.
    ///
    /// Posts and comments written by the user are removed by the foreign key cascade.
    ///
    /// # Arguments
    /// - `id` - ID of the user to delete
    ///
    /// # Returns
    /// - `Ok(())` - Delete executed (also when no row matched)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
