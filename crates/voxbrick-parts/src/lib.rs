//! Part catalog, colour palette, unit sizes, and their configuration.
#![forbid(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod palette;
pub mod types;

pub use catalog::{PartCatalog, PartSpec};
pub use config::PartsConfig;
pub use error::ConfigError;
pub use palette::{Palette, PaletteEntry};
pub use types::{ColorId, Units};
