use axum::{
    extract::{multipart::MultipartRejection, Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{
            CreateUserDto, DeleteUserDto, ProfileImageForm, UpdateUserDto, UserDetailsDto,
            UserDto,
        },
    },
    server::{
        error::{upload::UploadError, AppError},
        model::user::{CreateUserParams, UpdateUserParams, UserWithActivity},
        service::user::UserService,
        state::AppState,
        upload::UploadForm,
        util::{
            extract::Json,
            parse::{parse_id, required_id},
        },
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new user.
///
/// Validates name, email format and password policy, then stores the user with an
/// Argon2id password hash. The response never contains the password.
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Missing field, invalid email or weak password
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/usercreate",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let params = CreateUserParams::from_dto(payload)?;

    let user = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// List every user with their posts and comments.
///
/// # Returns
/// - `200 OK` - Users ordered by name
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDetailsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let users = service.get_all().await?;

    Ok(Json(
        users
            .into_iter()
            .map(UserWithActivity::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Get a user with their posts and comments.
///
/// # Returns
/// - `200 OK` - The user
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - No user with this id
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user", body = UserDetailsDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let id = parse_id("ID", &id)?;

    let user = service.get_by_id(id).await?;

    Ok(Json(user.into_dto()))
}

/// Update a user.
///
/// Only the supplied fields change. A new email is checked for format and
/// uniqueness, a new password against the password policy.
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Missing id or invalid field
/// - `404 Not Found` - No user with this id
/// - `409 Conflict` - Email used by another user
#[utoipa::path(
    put,
    path = "/userupdate/",
    tag = USER_TAG,
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let params = UpdateUserParams::from_dto(payload)?;

    let user = service.update(params).await?;

    Ok(Json(user.into_dto()))
}

/// Upload a profile image.
///
/// # Returns
/// - `200 OK` - The user with the new image filename
/// - `400 Bad Request` - Malformed id or no file sent
/// - `404 Not Found` - No user with this id
#[utoipa::path(
    put,
    path = "/userimage/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body(content = ProfileImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Profile image stored", body = UserDto),
        (status = 400, description = "Missing file or malformed id", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_profile_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let id = parse_id("ID", &id)?;
    let mut form = UploadForm::from_multipart(multipart?, &state.uploads).await?;
    let file = form.take_file().ok_or(UploadError::MissingFile)?;

    let user = service.set_profile_image(id, file, &state.uploads).await?;

    Ok(Json(user.into_dto()))
}

/// Delete a user along with their posts and comments.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `400 Bad Request` - Missing or malformed id
/// - `404 Not Found` - No user with this id
#[utoipa::path(
    delete,
    path = "/user/",
    tag = USER_TAG,
    request_body = DeleteUserDto,
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 400, description = "Missing or malformed id", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Json(payload): Json<DeleteUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let id = required_id("ID", payload.id.as_deref())?;

    service.delete(id, &state.uploads).await?;

    Ok(Json(MessageDto::new("Usuário deletado com sucesso")))
}
