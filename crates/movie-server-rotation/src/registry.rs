//! The process-wide movie table.
//!
//! A [`MovieRegistry`] is built once from a media root laid out as:
//!
//! ```text
//! <root>/movies/intro/*.mp4
//! <root>/movies/printing/*.mp4
//! <root>/movies/counter/*.mp4
//! <root>/movies/shots/<prefix>_<shot>_<start|end>.mp4
//! ```
//!
//! Missing folders produce empty rotation sets rather than startup failures.
//! Files added after startup are not picked up.

use crate::error::{Error, Result};
use crate::paths::scan_movies_or_empty;
use crate::rotator::Rotator;
use crate::shots::{Phase, ShotSet};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Folder under the media root that holds every category.
pub const MOVIES_DIR: &str = "movies";

/// Folder under [`MOVIES_DIR`] that holds shot clips.
pub const SHOTS_DIR: &str = "shots";

/// A simple (non-shot) movie category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Intro,
    Printing,
    Counter,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Intro, Category::Printing, Category::Counter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Intro => "intro",
            Category::Printing => "printing",
            Category::Counter => "counter",
        }
    }

    /// Folder name under `<root>/movies`.
    pub fn folder(&self) -> &'static str {
        self.as_str()
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "intro" => Ok(Category::Intro),
            "printing" => Ok(Category::Printing),
            "counter" => Ok(Category::Counter),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// File counts for one shot slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShotInventory {
    pub shot: u32,
    pub start: usize,
    pub end: usize,
}

/// Summary of what the registry discovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inventory {
    pub root: PathBuf,
    pub intro: usize,
    pub printing: usize,
    pub counter: usize,
    pub shots: Vec<ShotInventory>,
}

impl Inventory {
    /// Total number of servable files.
    pub fn total(&self) -> usize {
        self.intro
            + self.printing
            + self.counter
            + self.shots.iter().map(|s| s.start + s.end).sum::<usize>()
    }
}

/// Rotation state for every category and shot.
#[derive(Debug)]
pub struct MovieRegistry {
    root: PathBuf,
    intro: Rotator,
    printing: Rotator,
    counter: Rotator,
    shots: ShotSet,
}

impl MovieRegistry {
    /// Scan `root` and build the registry.
    pub fn load(root: &Path, debounce: Duration) -> Self {
        let movies = root.join(MOVIES_DIR);
        let category = |c: Category| {
            Rotator::new(
                c.as_str(),
                scan_movies_or_empty(&movies.join(c.folder())),
                debounce,
            )
        };

        let registry = Self {
            root: root.to_path_buf(),
            intro: category(Category::Intro),
            printing: category(Category::Printing),
            counter: category(Category::Counter),
            shots: ShotSet::load(&movies.join(SHOTS_DIR), debounce),
        };

        info!(
            "Loaded {} movies from {:?}",
            registry.inventory().total(),
            root
        );
        registry
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn category(&self, category: Category) -> &Rotator {
        match category {
            Category::Intro => &self.intro,
            Category::Printing => &self.printing,
            Category::Counter => &self.counter,
        }
    }

    pub fn shots(&self) -> &ShotSet {
        &self.shots
    }

    /// Select the next movie for a category.
    pub fn next_movie(&self, category: Category) -> Result<&Path> {
        self.category(category).next()
    }

    /// Select the next clip for a 1-based shot number and phase.
    pub fn next_shot(&self, shot: u32, phase: Phase) -> Result<&Path> {
        self.shots.next(shot, phase)
    }

    pub fn inventory(&self) -> Inventory {
        Inventory {
            root: self.root.clone(),
            intro: self.intro.len(),
            printing: self.printing.len(),
            counter: self.counter.len(),
            shots: self
                .shots
                .slots()
                .iter()
                .zip(1..)
                .map(|(slot, shot)| ShotInventory {
                    shot,
                    start: slot.start.len(),
                    end: slot.end.len(),
                })
                .collect(),
        }
    }
}
