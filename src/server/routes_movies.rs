//! Movie routes.
//!
//! - `GET /movie/:name` - next clip for `intro`, `printing` or `counter`
//! - `GET /shot/:shot/:movie` - next `start` or `end` clip for a 1-based shot
//!
//! Each request may rotate, so responses are never cacheable.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
    routing::get,
    Router,
};
use movie_server_rotation::{Category, Error, Phase};
use tokio::fs::File;
use tokio_util::io::ReaderStream;

use super::{ApiError, AppContext};

pub fn movie_routes() -> Router<AppContext> {
    Router::new()
        .route("/movie/:name", get(serve_movie))
        .route("/shot/:shot/:movie", get(serve_shot))
}

/// Serve the next clip of a simple category.
pub async fn serve_movie(
    State(ctx): State<AppContext>,
    Path(name): Path<String>,
) -> Result<Response, ApiError> {
    tracing::debug!(category = %name, "Movie request");

    let category: Category = name.parse()?;
    let path = ctx.registry.next_movie(category)?.to_path_buf();

    movie_response(&path).await
}

/// Serve the next start or end clip of a shot.
pub async fn serve_shot(
    State(ctx): State<AppContext>,
    Path((shot, movie)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    tracing::debug!(shot = %shot, movie = %movie, "Shot request");

    let shot: u32 = shot
        .parse()
        .map_err(|_| Error::InvalidShotNumber(shot.clone()))?;
    let phase: Phase = movie.parse()?;
    let path = ctx.registry.next_shot(shot, phase)?.to_path_buf();

    movie_response(&path).await
}

/// Stream a movie file as the response body.
async fn movie_response(path: &std::path::Path) -> Result<Response, ApiError> {
    let file = File::open(path)
        .await
        .map_err(|e| Error::unreadable(path, e))?;
    let file_size = file
        .metadata()
        .await
        .map_err(|e| Error::unreadable(path, e))?
        .len();

    tracing::debug!("Serving {:?} ({} bytes)", path, file_size);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "video/mp4")
        .header(header::CONTENT_LENGTH, file_size.to_string())
        .header(header::CACHE_CONTROL, "no-store")
        .body(Body::from_stream(ReaderStream::new(file)))
        .map_err(|e| ApiError(Error::Internal(e.to_string())))
}
