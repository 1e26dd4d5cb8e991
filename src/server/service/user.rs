//! User service for business logic.
//!
//! This module provides the `UserService` for managing user-related business logic.
//! It enforces email uniqueness, hashes passwords with Argon2id and keeps the stored
//! profile image files in step with the user rows.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::user::UserRepository,
    error::{internal::InternalError, AppError},
    model::user::{
        CreateUserParams, NewUser, UpdateUserParams, User, UserChanges, UserWithActivity,
    },
    upload::{StoredUpload, UploadStore},
};

/// Service providing business logic for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for registering, reading, updating and deleting users.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// # Arguments
    /// - `params` - Validated name, normalized email, plain password and admin flag
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - The email is already registered
    /// - `Err(AppError::InternalErr)` - Password hashing failed
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.email_taken(&params.email, None).await? {
            return Err(AppError::Conflict("Email já está em uso".to_string()));
        }

        let password_hash = hash_password(&params.password)?;

        let user = user_repo
            .create(NewUser {
                name: params.name,
                email: params.email,
                password_hash,
                is_admin: params.is_admin,
            })
            .await?;

        tracing::info!("Created user {}", user.id);

        Ok(user)
    }

    /// Retrieves a user with their posts and comments.
    ///
    /// # Returns
    /// - `Ok(UserWithActivity)` - The expanded user
    /// - `Err(AppError::NotFound)` - No user with this ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<UserWithActivity, AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuário não encontrado".to_string()))?;

        user_repo
            .with_activity(vec![user])
            .await?
            .pop()
            .ok_or_else(|| AppError::InternalError(format!("User {} lost its expansion", id)))
    }

    /// Retrieves every user, ordered by name, with their posts and comments.
    pub async fn get_all(&self) -> Result<Vec<UserWithActivity>, AppError> {
        let user_repo = UserRepository::new(self.db);

        let users = user_repo.get_all().await?;

        Ok(user_repo.with_activity(users).await?)
    }

    /// Applies a partial update.
    ///
    /// A new email must not belong to another user; a new password is re-hashed.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with this ID
    /// - `Err(AppError::Conflict)` - The new email belongs to another user
    pub async fn update(&self, params: UpdateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if !user_repo.exists(params.id).await? {
            return Err(AppError::NotFound("Usuário não encontrado".to_string()));
        }

        if let Some(email) = &params.email {
            if user_repo.email_taken(email, Some(params.id)).await? {
                return Err(AppError::Conflict("Email já está em uso".to_string()));
            }
        }

        let password_hash = params
            .password
            .as_deref()
            .map(hash_password)
            .transpose()?;

        let user = user_repo
            .update(
                params.id,
                UserChanges {
                    name: params.name,
                    email: params.email,
                    password_hash,
                    is_admin: params.is_admin,
                },
            )
            .await?;

        Ok(user)
    }

    /// Stores a new profile image for a user.
    ///
    /// The upload is committed once the row points at it; the previous image file is
    /// removed afterwards. When the user doesn't exist the upload is dropped, which
    /// deletes the file.
    ///
    /// # Arguments
    /// - `id` - ID of the user
    /// - `file` - Uncommitted upload
    /// - `uploads` - Upload directory holding the previous image
    ///
    /// # Returns
    /// - `Ok(User)` - The user with the new image filename
    /// - `Err(AppError::NotFound)` - No user with this ID
    pub async fn set_profile_image(
        &self,
        id: Uuid,
        file: StoredUpload,
        uploads: &UploadStore,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if !user_repo.exists(id).await? {
            return Err(AppError::NotFound("Usuário não encontrado".to_string()));
        }

        let (user, previous) = user_repo
            .set_profile_image(id, file.filename().to_string())
            .await?;
        file.commit();

        if let Some(previous) = previous {
            uploads.remove(&previous).await;
        }

        Ok(user)
    }

    /// Deletes a user along with their posts and comments.
    ///
    /// The profile image file, if any, is removed after the row is gone.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with this ID
    pub async fn delete(&self, id: Uuid, uploads: &UploadStore) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuário não encontrado".to_string()))?;

        user_repo.delete(id).await?;

        if let Some(filename) = user.profile_image {
            uploads.remove(&filename).await;
        }

        tracing::info!("Deleted user {}", id);

        Ok(())
    }
}

/// Hashes a password with Argon2id and a random salt.
fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| InternalError::PasswordHash(e.to_string()).into())
}
