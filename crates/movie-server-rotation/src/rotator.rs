//! Round-robin selection over a fixed list of movie files.
//!
//! A [`Rotator`] hands out the file at its cursor. Each read advances the
//! cursor by one (wrapping) unless the previous read happened within the
//! debounce window, in which case the same file is returned again. This keeps
//! a client that re-requests a clip in quick succession from skipping ahead.

use crate::error::{Error, Result};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Reads closer together than this return the same file.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(20);

#[derive(Debug, Default)]
struct Cursor {
    index: usize,
    /// `None` until the first read.
    last_access: Option<Instant>,
}

/// Thread-safe round-robin cursor over one set of movie files.
#[derive(Debug)]
pub struct Rotator {
    label: String,
    files: Vec<PathBuf>,
    debounce: Duration,
    cursor: Mutex<Cursor>,
}

impl Rotator {
    /// Create a rotator over `files`, in the given order.
    ///
    /// `label` names the set in logs and errors (e.g. `"intro"`, `"shot 2 end"`).
    pub fn new(label: impl Into<String>, files: Vec<PathBuf>, debounce: Duration) -> Self {
        Self {
            label: label.into(),
            files,
            debounce,
            cursor: Mutex::new(Cursor::default()),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Select the next file to serve.
    pub fn next(&self) -> Result<&Path> {
        self.next_at(Instant::now())
    }

    /// Select the next file as if the read happened at `now`.
    ///
    /// The first read returns the first file. Later reads advance only when
    /// more than the debounce window has elapsed since the previous read; the
    /// access time is refreshed either way.
    pub fn next_at(&self, now: Instant) -> Result<&Path> {
        if self.files.is_empty() {
            return Err(Error::no_media(&self.label));
        }

        let index = {
            let mut cursor = self.cursor.lock();
            if let Some(last) = cursor.last_access {
                if now.saturating_duration_since(last) > self.debounce {
                    cursor.index = if cursor.index < self.files.len() - 1 {
                        cursor.index + 1
                    } else {
                        0
                    };
                }
            }
            cursor.last_access = Some(now);
            cursor.index
        };

        Ok(&self.files[index])
    }
}
