//! LDraw model output, model reading and preview, and voxel grid files.
#![forbid(unsafe_code)]

mod error;
pub mod grid_file;
pub mod preview;
pub mod reader;
pub mod writer;

pub use error::LdrawError;
pub use grid_file::{GridFile, load_grid};
pub use preview::TopDownView;
pub use reader::{PartRef, parse_ldr, read_ldr};
pub use writer::{LdrawWriter, format_number, format_placement, write_model};
