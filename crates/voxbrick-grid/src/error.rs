use crate::axis::Axis;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    ZeroExtent(Axis),
    CellCountMismatch { expected: usize, actual: usize },
    ColorCountMismatch { expected: usize, actual: usize },
    TooLarge { nx: usize, ny: usize, nz: usize },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::ZeroExtent(axis) => write!(f, "grid extent along {} is zero", axis),
            GridError::CellCountMismatch { expected, actual } => {
                write!(f, "expected {} cells, got {}", expected, actual)
            }
            GridError::ColorCountMismatch { expected, actual } => {
                write!(f, "expected {} colours, got {}", expected, actual)
            }
            GridError::TooLarge { nx, ny, nz } => {
                write!(f, "grid of {}x{}x{} cells is too large", nx, ny, nz)
            }
        }
    }
}

impl std::error::Error for GridError {}
