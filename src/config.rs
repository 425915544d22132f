use crate::driver::DEFAULT_TICK;
use crate::params;
use crate::surface::MAX_SIDE;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Startup settings. Read once; the app never writes it back.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Surface size in logical pixels.
    pub width: usize,
    pub height: usize,
    /// Initial slider position, degrees.
    pub hue_shift: f64,
    /// Initial spinner value.
    pub dots_per_frame: u32,
    pub tick_millis: u64,
    /// Fixed seed for a reproducible dot sequence.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
            hue_shift: params::HUE_SHIFT_MIN,
            dots_per_frame: params::DOTS_PER_FRAME_DEFAULT,
            tick_millis: DEFAULT_TICK.as_millis() as u64,
            seed: None,
        }
    }
}

impl Config {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    /// Pull every field back into its valid range.
    pub fn normalized(mut self) -> Self {
        self.width = self.width.clamp(1, MAX_SIDE);
        self.height = self.height.clamp(1, MAX_SIDE);
        self.hue_shift = params::clamp_hue_shift(self.hue_shift);
        self.dots_per_frame = params::clamp_dots(self.dots_per_frame);
        self.tick_millis = self.tick_millis.max(1);
        self
    }
}

/// `<config dir>/huedots/config.json`
pub fn config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("huedots").join("config.json")
}

/// Strict load: a missing file is `Ok(None)`.
pub fn read_config(path: &Path) -> Result<Option<Config>, ConfigError> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let config: Config = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(config.normalized()))
}

/// Load the config, falling back to defaults if the file is missing or bad.
pub fn load_config(path: &Path) -> Config {
    match read_config(path) {
        Ok(Some(config)) => {
            log::info!("loaded config from {}", path.display());
            config
        }
        Ok(None) => {
            log::debug!("no config at {}, using defaults", path.display());
            Config::default()
        }
        Err(e) => {
            log::warn!("{}; using defaults", e);
            Config::default()
        }
    }
}
