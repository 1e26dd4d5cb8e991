//! Request-level tests running the full router against an in-memory database.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tempfile::TempDir;
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{router, state::AppState, upload::UploadStore};

mod biome;

/// Router with state attached, without the documentation and HTTP layers.
fn app(db: &DatabaseConnection, uploads: &TempDir) -> Router {
    router::router().with_state(AppState::new(db.clone(), UploadStore::new(uploads.path())))
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Boundary separating the parts of test multipart bodies.
const BOUNDARY: &str = "biomas-test-boundary";

/// One part of a multipart test body.
enum Part<'a> {
    Text(&'a str, &'a str),
    /// The `file` field, with the client filename and content.
    File(&'a str, &'a [u8]),
}

fn multipart_request(method: Method, uri: &str, parts: &[Part]) -> Request<Body> {
    let mut body = Vec::new();

    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                        name, value
                    )
                    .as_bytes(),
                );
            }
            Part::File(filename, bytes) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n",
                        filename
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
                body.extend_from_slice(b"\r\n");
            }
        }
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method(method)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Names of the files currently in the upload directory.
fn stored_files(uploads: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(uploads.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Whether `name` looks like a generated upload name with the given extension.
fn is_generated_name(name: &str, extension: &str) -> bool {
    name.len() == 32 + extension.len()
        && name.ends_with(extension)
        && name[..32].chars().all(|c| c.is_ascii_hexdigit())
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Sends a request and returns the status with the parsed JSON body.
///
/// An empty body is returned as `Value::Null`.
async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}
