//! Request extractors whose rejections are rendered as `AppError`.

use axum::{
    extract::FromRequest,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::server::error::AppError;

/// JSON body extractor and response.
///
/// Works like `axum::Json`, but a missing, malformed or mistyped body is rejected as
/// `AppError::BadRequest`, so clients get a 400 with the usual `{"error": ...}` body.
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
