// --- File: error.rs ---
use thiserror::Error;

/// Precondition violations raised by the simulation core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("buffer index {0} is not 0 or 1")]
    InvalidBufferIndex(usize),
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("alive probability {0} is not within [0, 1]")]
    InvalidProbability(f64),
}

pub type Result<T> = std::result::Result<T, LifeError>;

/// Failures while bringing up the GPU presenter.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no suitable graphics adapter found")]
    NoAdapter,
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("failed to create device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported texture formats")]
    NoSurfaceFormat,
}
