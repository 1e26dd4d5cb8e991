use std::path::PathBuf;

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum UploadError {
    /// The multipart body could not be read, for example because it exceeds the size limit.
    #[error(transparent)]
    Multipart(#[from] MultipartError),

    /// The request has no `file` field or the field is empty.
    #[error("Arquivo é obrigatório")]
    MissingFile,

    /// Writing or removing a file in the upload directory failed.
    #[error("Failed to access upload file {path}: {source}")]
    Io {
        /// File being written or removed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Converts upload errors into HTTP responses.
///
/// # Returns
/// - Status reported by the multipart parser - For `Multipart` (400, 413, ...)
/// - 400 Bad Request - For `MissingFile`
/// - 500 Internal Server Error - For `Io`
impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        match self {
            Self::Multipart(err) => {
                tracing::debug!("Rejected multipart body: {}", err);
                (err.status(), Json(ErrorDto::new(err.body_text()))).into_response()
            }
            Self::MissingFile => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new(Self::MissingFile.to_string())),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}
