use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The acting user id doesn't belong to any user.
    #[error("Acting user {0} not found")]
    UserNotInDatabase(Uuid),

    /// The acting user tried to modify a resource written by someone else.
    #[error("User {user_id} is not the author {author_id} of the resource")]
    NotAuthor {
        /// The acting user
        user_id: Uuid,
        /// Author of the resource
        author_id: Uuid,
    },
}

/// Converts authorization errors into HTTP responses.
///
/// Both variants map to 403 Forbidden with the same message, so a client cannot tell an
/// unknown acting user apart from a user who isn't the author. Details are logged at
/// debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::FORBIDDEN,
            Json(ErrorDto::new("Sem permissão para modificar este recurso")),
        )
            .into_response()
    }
}
