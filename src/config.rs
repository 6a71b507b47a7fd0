use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use voxbrick_grid::Axis;
use voxbrick_merge::Centering;
use voxbrick_parts::{ColorId, PartsConfig};

/// Application settings. Every key is optional; command-line flags override.
#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_color")]
    pub default_color: ColorId,
    #[serde(default = "default_merge_axis")]
    pub merge_axis: Axis,
    #[serde(default)]
    pub centering: Centering,
    #[serde(default)]
    pub parallel: bool,
    /// Relief pixels closer than this to white are treated as background.
    #[serde(default = "default_background_threshold")]
    pub background_threshold: f32,
    #[serde(flatten)]
    pub parts: PartsConfig,
}

fn default_color() -> ColorId {
    ColorId::RED
}
fn default_merge_axis() -> Axis {
    Axis::X
}
fn default_background_threshold() -> f32 {
    30.0
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            merge_axis: default_merge_axis(),
            centering: Centering::default(),
            parallel: false,
            background_threshold: default_background_threshold(),
            parts: PartsConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: AppConfig = toml::from_str(s)?;
        Ok(cfg)
    }

    /// Load `path`, or the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        match path {
            Some(p) => {
                let s = fs::read_to_string(p)?;
                let cfg = Self::from_toml_str(&s)?;
                log::info!("loaded config {:?}", p);
                Ok(cfg)
            }
            None => Ok(Self::default()),
        }
    }
}
