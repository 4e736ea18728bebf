// error.rs - Errors returned by grid construction and cell access

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Negative dimensions, or a cell count that does not fit in memory.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
