//! Route table and OpenAPI document.

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{api, biome, biome_image, comment, post, user},
    server::{
        controller::{
            biome as biome_ctl, biome_image as image_ctl, comment as comment_ctl,
            post as post_ctl, root, user as user_ctl,
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API de Biomas Brasileiros",
        description = "Users, posts with nested comments, biomes and biome images."
    ),
    paths(
        root::index,
        user_ctl::create_user,
        user_ctl::get_users,
        user_ctl::get_user,
        user_ctl::update_user,
        user_ctl::set_profile_image,
        user_ctl::delete_user,
        post_ctl::create_post,
        post_ctl::get_posts,
        post_ctl::get_post,
        post_ctl::get_posts_by_biome,
        post_ctl::update_post,
        post_ctl::delete_post,
        comment_ctl::create_comment,
        comment_ctl::get_comments,
        comment_ctl::update_comment,
        comment_ctl::delete_comment,
        biome_ctl::create_biome,
        biome_ctl::get_biomes,
        biome_ctl::search_biome,
        biome_ctl::get_biome,
        biome_ctl::update_biome,
        biome_ctl::delete_biome,
        image_ctl::create_image,
        image_ctl::get_images,
        image_ctl::get_image,
        image_ctl::update_image,
        image_ctl::delete_image,
    ),
    components(schemas(
        api::ErrorDto,
        api::MessageDto,
        user::UserDto,
        user::AuthorDto,
        user::UserDetailsDto,
        user::UserPostDto,
        user::UserCommentDto,
        user::CreateUserDto,
        user::UpdateUserDto,
        user::DeleteUserDto,
        user::ProfileImageForm,
        post::PostDto,
        post::PostDetailsDto,
        post::CreatePostDto,
        post::UpdatePostDto,
        post::DeletePostDto,
        comment::CommentDto,
        comment::CommentWithAuthorDto,
        comment::CommentThreadDto,
        comment::CreateCommentDto,
        comment::UpdateCommentDto,
        comment::DeleteCommentDto,
        biome::BiomeDto,
        biome::BiomeWithContentDto,
        biome::BiomeDetailsDto,
        biome::CreateBiomeDto,
        biome::UpdateBiomeDto,
        biome::DeleteBiomeDto,
        biome::SearchBiomeDto,
        biome_image::BiomeImageDto,
        biome_image::BiomeImageWithBiomeDto,
        biome_image::DeleteBiomeImageDto,
        biome_image::CreateBiomeImageForm,
        biome_image::UpdateBiomeImageForm,
    )),
    tags(
        (name = "root", description = "API identification"),
        (name = "user", description = "User registration and profiles"),
        (name = "post", description = "Posts about biomes"),
        (name = "comment", description = "Comments and replies on posts"),
        (name = "biome", description = "Brazilian biomes"),
        (name = "biome image", description = "Images attached to biomes")
    )
)]
pub struct ApiDoc;

/// API routes without state, documentation or layers.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root::index))
        // Users
        .route("/usercreate", post(user_ctl::create_user))
        .route("/users", get(user_ctl::get_users))
        .route("/user/{id}", get(user_ctl::get_user))
        .route("/userupdate/", put(user_ctl::update_user))
        .route("/userimage/{id}", put(user_ctl::set_profile_image))
        .route("/user/", delete(user_ctl::delete_user))
        // Posts
        .route("/postcreate/", post(post_ctl::create_post))
        .route("/posts", get(post_ctl::get_posts))
        .route("/post/{id}", get(post_ctl::get_post))
        .route("/posts/{biome_id}", get(post_ctl::get_posts_by_biome))
        .route("/postupdate", put(post_ctl::update_post))
        .route("/postdelete", delete(post_ctl::delete_post))
        // Comments
        .route("/commentcreate", post(comment_ctl::create_comment))
        .route("/coments/", get(comment_ctl::get_comments))
        .route("/comment", put(comment_ctl::update_comment))
        .route("/comment/", delete(comment_ctl::delete_comment))
        // Biomes
        .route("/biome", post(biome_ctl::create_biome))
        .route("/biomes", get(biome_ctl::get_biomes))
        .route(
            "/biomes/",
            get(biome_ctl::search_biome).delete(biome_ctl::delete_biome),
        )
        .route("/biome/{name}", get(biome_ctl::get_biome))
        .route("/biome/", put(biome_ctl::update_biome))
        // Biome images
        .route("/createImage", post(image_ctl::create_image))
        .route("/imageslist", post(image_ctl::get_images))
        .route("/image/{id}", get(image_ctl::get_image))
        .route("/imageupdate", post(image_ctl::update_image))
        .route("/imagedelete", post(image_ctl::delete_image))
}

/// Builds the complete application.
///
/// Adds the Swagger UI, the static upload directory and the HTTP layers to the API
/// routes and attaches the state.
///
/// # Arguments
/// - `state` - Shared application state
/// - `body_limit` - Maximum accepted request body size in bytes
pub fn app(state: AppState, body_limit: usize) -> Router {
    let uploads = ServeDir::new(state.uploads.dir());

    router()
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .nest_service("/uploads", uploads)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
