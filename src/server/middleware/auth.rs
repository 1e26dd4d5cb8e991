use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
};

pub enum Permission {
    /// The acting user wrote the resource with this author id.
    Author(Uuid),
}

/// Checks what the acting user of a request may do.
///
/// There are no sessions; the acting user is the id sent in the request body.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid) -> Self {
        Self { db, user_id }
    }

    /// Loads the acting user and checks every permission.
    ///
    /// # Returns
    /// - `Ok(User)` - The acting user, holding all permissions
    /// - `Err(AppError::AuthErr)` - The user doesn't exist or lacks a permission
    /// - `Err(AppError::DbErr)` - Database error while loading the user
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(self.user_id).await? else {
            return Err(AuthError::UserNotInDatabase(self.user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Author(author_id) => {
                    if user.id != *author_id {
                        return Err(AuthError::NotAuthor {
                            user_id: user.id,
                            author_id: *author_id,
                        }
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
