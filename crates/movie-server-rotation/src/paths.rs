//! Directory scanning for movie files.
//!
//! Folders are listed once at startup, non-recursively. Only entries whose
//! extension is exactly `mp4` are kept, in the order the filesystem returns
//! them.

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Extension of servable movie files (case-sensitive).
pub const MOVIE_EXTENSION: &str = "mp4";

/// Check if a path has the movie extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use movie_server_rotation::paths::is_movie_file;
///
/// assert!(is_movie_file(Path::new("/movies/intro/hello.mp4")));
/// assert!(!is_movie_file(Path::new("hello.MP4")));
/// assert!(!is_movie_file(Path::new("notes.txt")));
/// ```
pub fn is_movie_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == MOVIE_EXTENSION)
        .unwrap_or(false)
}

/// List the movie files directly inside `dir`.
///
/// Subdirectories are skipped even when their name ends in `.mp4`.
pub fn scan_movies(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut movies = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = dir.join(entry.file_name());

        if !is_movie_file(&path) || !path.is_file() {
            continue;
        }

        movies.push(path);
    }

    debug!("Found {} movies in {:?}", movies.len(), dir);
    Ok(movies)
}

/// Like [`scan_movies`], but a missing or unreadable folder is logged and
/// treated as empty.
pub fn scan_movies_or_empty(dir: &Path) -> Vec<PathBuf> {
    match scan_movies(dir) {
        Ok(movies) => movies,
        Err(e) => {
            warn!("Failed to scan movie folder {:?}: {}", dir, e);
            Vec::new()
        }
    }
}
