use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::{PartCatalog, PartSpec};
use crate::error::ConfigError;
use crate::palette::{Palette, PaletteEntry};
use crate::types::{BRICK_HEIGHT, ColorId, PLATE_HEIGHT, STUD_EDGE, Units};

/// Unit sizes, part tables, and palette as read from TOML. Empty tables fall
/// back to the built-in defaults.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PartsConfig {
    #[serde(default)]
    pub units: UnitsConfig,
    #[serde(default)]
    pub bricks: Vec<PartDef>,
    #[serde(default)]
    pub plates: Vec<PartDef>,
    #[serde(default)]
    pub palette: Vec<PaletteDef>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UnitsConfig {
    #[serde(default = "default_edge")]
    pub edge: f32,
    #[serde(default = "default_brick_height")]
    pub brick_height: f32,
    #[serde(default = "default_plate_height")]
    pub plate_height: f32,
}
fn default_edge() -> f32 {
    STUD_EDGE
}
fn default_brick_height() -> f32 {
    BRICK_HEIGHT
}
fn default_plate_height() -> f32 {
    PLATE_HEIGHT
}
impl Default for UnitsConfig {
    fn default() -> Self {
        Self {
            edge: STUD_EDGE,
            brick_height: BRICK_HEIGHT,
            plate_height: PLATE_HEIGHT,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct PartDef {
    pub length: usize,
    pub part: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PaletteDef {
    pub id: ColorId,
    pub rgb: [u8; 3],
    #[serde(default)]
    pub name: Option<String>,
}

impl PartsConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: PartsConfig = toml::from_str(toml_str)?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn brick_units(&self) -> Result<Units, ConfigError> {
        Units::new(self.units.edge, self.units.brick_height)
    }

    pub fn plate_units(&self) -> Result<Units, ConfigError> {
        Units::new(self.units.edge, self.units.plate_height)
    }

    pub fn brick_catalog(&self) -> Result<PartCatalog, ConfigError> {
        compile_catalog(&self.bricks, PartCatalog::bricks)
    }

    pub fn plate_catalog(&self) -> Result<PartCatalog, ConfigError> {
        compile_catalog(&self.plates, PartCatalog::plates)
    }

    pub fn palette(&self) -> Result<Palette, ConfigError> {
        if self.palette.is_empty() {
            return Ok(Palette::ldraw());
        }
        Palette::new(
            self.palette
                .iter()
                .map(|d| PaletteEntry {
                    id: d.id,
                    rgb: d.rgb,
                    name: d.name.clone().unwrap_or_else(|| format!("colour {}", d.id)),
                })
                .collect(),
        )
    }
}

fn compile_catalog(
    defs: &[PartDef],
    fallback: fn() -> PartCatalog,
) -> Result<PartCatalog, ConfigError> {
    if defs.is_empty() {
        return Ok(fallback());
    }
    PartCatalog::new(
        defs.iter()
            .map(|d| PartSpec::new(d.length, d.part.clone()))
            .collect(),
    )
}
