use chrono::{DateTime, Utc};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::{biome::BiomeDto, comment::CommentDto, post::PostDto};

/// Public representation of a user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Author summary embedded in posts and comments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub id: Uuid,
    pub name: String,
    pub profile_image: Option<String>,
}

/// A user together with everything they authored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailsDto {
    #[serde(flatten)]
    pub user: UserDto,
    pub posts: Vec<UserPostDto>,
    pub comments: Vec<UserCommentDto>,
}

/// Post authored by a user, with its biome and flat list of comments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPostDto {
    #[serde(flatten)]
    pub post: PostDto,
    pub biome: Option<BiomeDto>,
    pub comments: Vec<CommentDto>,
}

/// Comment authored by a user, with the post it belongs to and its direct replies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserCommentDto {
    #[serde(flatten)]
    pub comment: CommentDto,
    pub post: PostDto,
    pub replies: Vec<CommentDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    /// Grants admin rights; defaults to false.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub adm: Option<bool>,
}

/// Partial user update; only supplied fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub adm: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserDto {
    pub id: Option<String>,
}

/// Multipart form accepted by the profile image endpoint.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ProfileImageForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

/// Reads a flag sent as a JSON boolean, a number (non-zero is true) or the strings
/// `"true"`/`"false"`, as form-style clients do.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Number(i64),
        Text(String),
    }

    match Option::<Flag>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Flag::Bool(value)) => Ok(Some(value)),
        Some(Flag::Number(value)) => Ok(Some(value != 0)),
        Some(Flag::Text(text)) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(Some(true)),
            "false" | "0" | "" => Ok(Some(false)),
            other => Err(D::Error::custom(format!(
                "expected a boolean, got \"{}\"",
                other
            ))),
        },
    }
}
