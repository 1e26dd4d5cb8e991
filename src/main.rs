mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{
    config::Config,
    error::{expose_internal_detail, internal::InternalError, AppError},
    router, startup,
    state::AppState,
    upload::UploadStore,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    startup::init_tracing();

    let config = Config::from_env()?;
    expose_internal_detail(config.is_development());

    let db = startup::connect_to_database(&config).await?;

    let uploads = UploadStore::new(&config.upload_dir);
    uploads.prepare().await?;

    let state = AppState::new(db.clone(), uploads);
    let app = router::app(state, config.upload_max_bytes);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(InternalError::from)?;

    tracing::info!("Listening on http://{}", addr);
    tracing::info!("API documentation at http://{}/api/docs", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await
        .map_err(InternalError::from)?;

    db.close().await?;

    tracing::info!("Server stopped");

    Ok(())
}
