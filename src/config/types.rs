use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub media: MediaConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaConfig {
    /// Media root containing `movies/{intro,printing,counter,shots}`.
    /// A leading `~` is expanded.
    #[serde(default = "default_media_root")]
    pub root: PathBuf,

    /// Reads of the same category closer together than this repeat the
    /// previous clip (default: 20)
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_media_root() -> PathBuf {
    PathBuf::from("~/media")
}

fn default_debounce_ms() -> u64 {
    20
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            root: default_media_root(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl MediaConfig {
    /// Media root with `~` expanded to the home directory.
    pub fn resolved_root(&self) -> PathBuf {
        let root = self.root.to_string_lossy();
        PathBuf::from(shellexpand::tilde(root.as_ref()).as_ref())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
