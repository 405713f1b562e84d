//! Configuration loading and parsing.
//!
//! Parses `oxhex.toml` (or an override path provided by the binary):
//!
//! ```toml
//! [window]
//! width = 16   # bytes per row
//! height = 24  # rows used when the caller has no layout height of its own
//! ```
//!
//! Every key is optional. The width is clamped to `1..=MAX_WIDTH` and the
//! height to at least 1; the raw parsed values are kept next to the effective
//! ones. Unknown fields are ignored so older binaries accept newer files. A
//! file that fails to parse falls back to defaults with a warning.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub const DEFAULT_WIDTH: usize = 16;
pub const DEFAULT_HEIGHT: usize = 24;
pub const MAX_WIDTH: usize = 256;

#[derive(Debug, Deserialize, Clone)]
pub struct WindowConfig {
    #[serde(default = "WindowConfig::default_width")]
    pub width: usize,
    #[serde(default = "WindowConfig::default_height")]
    pub height: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            height: Self::default_height(),
        }
    }
}

impl WindowConfig {
    const fn default_width() -> usize {
        DEFAULT_WIDTH
    }
    const fn default_height() -> usize {
        DEFAULT_HEIGHT
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub window: WindowConfig,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub file: ConfigFile,    // parsed (or default) data
    effective_width: usize,
    effective_height: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_file(None, ConfigFile::default())
    }
}

/// Config path following platform conventions: working directory first, then
/// the XDG / AppData config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from("oxhex.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("oxhex").join("oxhex.toml");
    }
    PathBuf::from("oxhex.toml")
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => Ok(Config::from_file(Some(content), file)),
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed");
            Ok(Config::default())
        }
    }
}

impl Config {
    fn from_file(raw: Option<String>, file: ConfigFile) -> Self {
        let raw_width = file.window.width;
        let width = raw_width.clamp(1, MAX_WIDTH);
        if width != raw_width {
            info!(target: "config", raw = raw_width, clamped = width, max = MAX_WIDTH, "window_width_clamped");
        }
        let height = file.window.height.max(1);
        Self {
            raw,
            file,
            effective_width: width,
            effective_height: height,
        }
    }

    /// Bytes per row.
    pub fn width(&self) -> usize {
        self.effective_width
    }

    /// Visible rows when no layout height is supplied.
    pub fn height(&self) -> usize {
        self.effective_height
    }

    /// Apply command-line overrides; they pass through the same clamping as
    /// file values.
    pub fn with_overrides(self, width: Option<usize>, height: Option<usize>) -> Self {
        let mut file = self.file;
        if let Some(w) = width {
            file.window.width = w;
        }
        if let Some(h) = height {
            file.window.height = h;
        }
        Self::from_file(self.raw, file)
    }
}
