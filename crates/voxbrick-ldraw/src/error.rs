use voxbrick_grid::GridError;

#[derive(Debug)]
pub enum LdrawError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Grid(GridError),
    GridFile(String),
}

impl std::fmt::Display for LdrawError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LdrawError::Io(e) => write!(f, "io error: {}", e),
            LdrawError::Toml(e) => write!(f, "grid file parse error: {}", e),
            LdrawError::Grid(e) => write!(f, "invalid grid: {}", e),
            LdrawError::GridFile(msg) => write!(f, "invalid grid file: {}", msg),
        }
    }
}

impl std::error::Error for LdrawError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LdrawError::Io(e) => Some(e),
            LdrawError::Toml(e) => Some(e),
            LdrawError::Grid(e) => Some(e),
            LdrawError::GridFile(_) => None,
        }
    }
}

impl From<std::io::Error> for LdrawError {
    fn from(e: std::io::Error) -> Self {
        LdrawError::Io(e)
    }
}

impl From<toml::de::Error> for LdrawError {
    fn from(e: toml::de::Error) -> Self {
        LdrawError::Toml(e)
    }
}

impl From<GridError> for LdrawError {
    fn from(e: GridError) -> Self {
        LdrawError::Grid(e)
    }
}
