//! Error type shared by the scanner, rotators, and registry.
//!
//! Every variant maps onto an HTTP status through [`Error::http_status`] so the
//! server can turn a failed lookup into a proper client or server error.

use std::path::PathBuf;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while discovering or selecting movies.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The category name is not one of intro, printing, counter.
    #[error("unknown movie category: {0}")]
    UnknownCategory(String),

    /// The shot phase is neither `start` nor `end`.
    #[error("unknown shot phase: {0} (expected 'start' or 'end')")]
    UnknownPhase(String),

    /// The shot segment could not be parsed as a number.
    #[error("invalid shot number: {0}")]
    InvalidShotNumber(String),

    /// The shot number has no slot.
    #[error("shot {shot} out of range (1..={slots})")]
    ShotOutOfRange { shot: u32, slots: usize },

    /// The rotation set is empty.
    #[error("no media available for {0}")]
    NoMedia(String),

    /// A shot filename does not follow `<prefix>_<n>_<start|end>.mp4`.
    #[error("malformed shot filename: {}", path.display())]
    MalformedShotName { path: PathBuf },

    /// A discovered movie could not be opened at serve time.
    #[error("failed to read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// HTTP status code for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            Error::UnknownCategory(_) => 404,
            Error::ShotOutOfRange { .. } => 404,
            Error::UnknownPhase(_) => 400,
            Error::InvalidShotNumber(_) => 400,
            Error::NoMedia(_) => 503,
            Error::MalformedShotName { .. } => 500,
            Error::Unreadable { .. } => 500,
            Error::Io(_) => 500,
            Error::Internal(_) => 500,
        }
    }

    /// Stable machine-readable code used in JSON error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Error::UnknownCategory(_) => "unknown_category",
            Error::ShotOutOfRange { .. } => "shot_out_of_range",
            Error::UnknownPhase(_) => "unknown_phase",
            Error::InvalidShotNumber(_) => "invalid_shot_number",
            Error::NoMedia(_) => "no_media",
            Error::MalformedShotName { .. } => "malformed_shot_name",
            Error::Unreadable { .. } => "unreadable_media",
            Error::Io(_) => "io_error",
            Error::Internal(_) => "internal_error",
        }
    }

    /// Create a no-media error for the named rotation set.
    pub fn no_media(label: impl Into<String>) -> Self {
        Self::NoMedia(label.into())
    }

    /// Create an unreadable-file error.
    pub fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Unreadable {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(Error::UnknownCategory("foo".into()).http_status(), 404);
        assert_eq!(Error::UnknownPhase("middle".into()).http_status(), 400);
        assert_eq!(Error::InvalidShotNumber("x".into()).http_status(), 400);
        assert_eq!(
            Error::ShotOutOfRange { shot: 5, slots: 4 }.http_status(),
            404
        );
    }

    #[test]
    fn server_errors_map_to_5xx() {
        assert_eq!(Error::no_media("intro").http_status(), 503);
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(Error::unreadable("/m/a.mp4", io).http_status(), 500);
        assert_eq!(Error::Internal("oops".into()).http_status(), 500);
    }

    #[test]
    fn messages_name_the_subject() {
        let err = Error::ShotOutOfRange { shot: 5, slots: 4 };
        assert_eq!(err.to_string(), "shot 5 out of range (1..=4)");
        assert_eq!(
            Error::no_media("shot 2 end").to_string(),
            "no media available for shot 2 end"
        );
    }
}
