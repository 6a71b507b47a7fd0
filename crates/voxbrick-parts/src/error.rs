/// Invalid catalog, palette, or unit configuration. Raised once at
/// construction time, never while scanning a grid.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    MissingUnitPart,
    ZeroLengthPart(String),
    DuplicateLength(usize),
    InvalidUnitSize { name: &'static str, value: f32 },
    UnmappableAxis(&'static str),
    EmptyPalette,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingUnitPart => {
                write!(f, "part catalog has no length-1 entry")
            }
            ConfigError::ZeroLengthPart(part) => {
                write!(f, "part {} has length 0", part)
            }
            ConfigError::DuplicateLength(len) => {
                write!(f, "part catalog lists length {} more than once", len)
            }
            ConfigError::InvalidUnitSize { name, value } => {
                write!(f, "unit {} must be positive and finite, got {}", name, value)
            }
            ConfigError::UnmappableAxis(axis) => {
                write!(f, "cannot merge along the {} axis", axis)
            }
            ConfigError::EmptyPalette => write!(f, "palette has no entries"),
        }
    }
}

impl std::error::Error for ConfigError {}
