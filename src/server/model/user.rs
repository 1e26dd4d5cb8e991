//! User domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::user::{
        AuthorDto, CreateUserDto, UpdateUserDto, UserCommentDto, UserDetailsDto,
        UserDto, UserPostDto,
    },
    server::{
        error::AppError,
        model::{biome::Biome, comment::Comment, post::Post},
        util::{
            parse::required_id,
            validate::{
                normalize_email, optional_trimmed, present, required, validate_email,
                validate_password,
            },
        },
    },
};

/// A user without credentials.
///
/// The password hash stays in the entity model and never reaches this type.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            is_admin: entity.is_admin,
            profile_image: entity.profile_image,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            is_admin: self.is_admin,
            profile_image: self.profile_image,
            created_at: self.created_at,
        }
    }
}

/// Author summary shown next to posts and comments.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    pub profile_image: Option<String>,
}

impl Author {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            profile_image: entity.profile_image,
        }
    }

    pub fn from_user(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            profile_image: user.profile_image,
        }
    }

    pub fn into_dto(self) -> AuthorDto {
        AuthorDto {
            id: self.id,
            name: self.name,
            profile_image: self.profile_image,
        }
    }
}

/// A user together with the posts and comments they wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithActivity {
    pub user: User,
    pub posts: Vec<AuthoredPost>,
    pub comments: Vec<AuthoredComment>,
}

impl UserWithActivity {
    pub fn into_dto(self) -> UserDetailsDto {
        UserDetailsDto {
            user: self.user.into_dto(),
            posts: self.posts.into_iter().map(AuthoredPost::into_dto).collect(),
            comments: self
                .comments
                .into_iter()
                .map(AuthoredComment::into_dto)
                .collect(),
        }
    }
}

/// Post written by a user, with its biome and every comment on it.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthoredPost {
    pub post: Post,
    pub biome: Option<Biome>,
    pub comments: Vec<Comment>,
}

impl AuthoredPost {
    pub fn into_dto(self) -> UserPostDto {
        UserPostDto {
            post: self.post.into_dto(),
            biome: self.biome.map(Biome::into_dto),
            comments: self.comments.into_iter().map(Comment::into_dto).collect(),
        }
    }
}

/// Comment written by a user, with its post and direct replies.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthoredComment {
    pub comment: Comment,
    pub post: Post,
    pub replies: Vec<Comment>,
}

impl AuthoredComment {
    pub fn into_dto(self) -> UserCommentDto {
        UserCommentDto {
            comment: self.comment.into_dto(),
            post: self.post.into_dto(),
            replies: self.replies.into_iter().map(Comment::into_dto).collect(),
        }
    }
}

const REQUIRED_FIELDS_MESSAGE: &str = "Nome, email e senha são obrigatórios";

/// Validated input for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    /// Trimmed display name.
    pub name: String,
    /// Trimmed, lower-cased email in a valid format.
    pub email: String,
    /// Plain password satisfying the password policy. Hashed by the service.
    pub password: String,
    pub is_admin: bool,
}

impl CreateUserParams {
    /// Validates a create request.
    ///
    /// # Returns
    /// - `Ok(CreateUserParams)` - All fields present and valid
    /// - `Err(AppError::BadRequest)` - Missing field, invalid email or weak password
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        let name = required(dto.name, REQUIRED_FIELDS_MESSAGE)?;
        let email = normalize_email(&required(dto.email, REQUIRED_FIELDS_MESSAGE)?);
        let password = present(dto.password, REQUIRED_FIELDS_MESSAGE)?;

        validate_email(&email)?;
        validate_password(&password)?;

        Ok(Self {
            name,
            email,
            password,
            is_admin: dto.adm.unwrap_or(false),
        })
    }
}

/// Validated input for a partial user update.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_admin: Option<bool>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Result<Self, AppError> {
        let id = required_id("ID", dto.id.as_deref())?;
        let name = optional_trimmed(dto.name, "Nome não pode ser vazio")?;

        let email = optional_trimmed(dto.email, "Email não pode ser vazio")?
            .map(|email| normalize_email(&email));
        if let Some(email) = &email {
            validate_email(email)?;
        }

        let password = dto
            .password
            .map(|p| present(Some(p), "Senha não pode ser vazia"))
            .transpose()?;
        if let Some(password) = &password {
            validate_password(password)?;
        }

        Ok(Self {
            id,
            name,
            email,
            password,
            is_admin: dto.adm,
        })
    }
}

/// Columns to write when creating a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
}

/// Columns to change on an existing user. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub is_admin: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_dto(password: &str) -> CreateUserDto {
        CreateUserDto {
            name: Some("  Maria ".to_string()),
            email: Some(" Maria@Example.COM ".to_string()),
            password: Some(password.to_string()),
            adm: None,
        }
    }

    #[test]
    fn normalizes_create_fields() {
        let params = CreateUserParams::from_dto(create_dto("Valid1Pass!")).unwrap();

        assert_eq!(params.name, "Maria");
        assert_eq!(params.email, "maria@example.com");
        assert_eq!(params.password, "Valid1Pass!");
        assert!(!params.is_admin);
    }

    #[test]
    fn rejects_weak_passwords() {
        for password in ["short1!", "alllowercase1!", "ALLUPPER1!", "NoDigits!!"] {
            let result = CreateUserParams::from_dto(create_dto(password));
            assert!(
                matches!(result, Err(AppError::BadRequest(_))),
                "{} should be rejected",
                password
            );
        }
    }

    #[test]
    fn rejects_missing_fields() {
        let dto = CreateUserDto {
            name: Some("Maria".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            CreateUserParams::from_dto(dto),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn update_leaves_absent_fields_unset() {
        let id = Uuid::new_v4();
        let params = UpdateUserParams::from_dto(UpdateUserDto {
            id: Some(id.to_string()),
            email: Some("NEW@Example.com".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(params.id, id);
        assert_eq!(params.email.as_deref(), Some("new@example.com"));
        assert!(params.name.is_none());
        assert!(params.password.is_none());
        assert!(params.is_admin.is_none());
    }

    #[test]
    fn update_validates_supplied_password() {
        let result = UpdateUserParams::from_dto(UpdateUserDto {
            id: Some(Uuid::new_v4().to_string()),
            password: Some("weak".to_string()),
            ..Default::default()
        });

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
