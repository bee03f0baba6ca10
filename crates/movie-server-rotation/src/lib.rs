//! Movie-Server-Rotation: clip discovery and round-robin selection.
//!
//! This crate holds all of the stateful logic behind movie-server:
//!
//! - **Directory Scanner** ([`paths`]): non-recursive `.mp4` discovery
//! - **Rotator** ([`rotator`]): per-category cursor with a short debounce
//! - **Shot Grouper** ([`shots`]): `<prefix>_<n>_<start|end>.mp4` bucketing
//! - **Registry** ([`registry`]): the process-wide table built from a media root
//!
//! # Examples
//!
//! ```
//! use movie_server_rotation::{Rotator, DEFAULT_DEBOUNCE};
//! use std::path::{Path, PathBuf};
//!
//! let rotator = Rotator::new(
//!     "intro",
//!     vec![PathBuf::from("/m/a.mp4"), PathBuf::from("/m/b.mp4")],
//!     DEFAULT_DEBOUNCE,
//! );
//! assert_eq!(rotator.next().unwrap(), Path::new("/m/a.mp4"));
//! ```

pub mod error;
pub mod paths;
pub mod registry;
pub mod rotator;
pub mod shots;

pub use error::{Error, Result};
pub use registry::{Category, Inventory, MovieRegistry, ShotInventory};
pub use rotator::{Rotator, DEFAULT_DEBOUNCE};
pub use shots::{Phase, ShotFiles, ShotSet, SHOT_SLOTS};
