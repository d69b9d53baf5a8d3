use thiserror::Error;

pub type RenderResult<T> = Result<T, RenderError>;

/// Every error is fatal to the run: no retry, no partial image.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("transport failure for {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("protocol violation from {url}: {reason}")]
    Protocol { url: String, reason: String },

    #[error("dispatch task failed: {0}")]
    Dispatch(String),

    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("domain bounds must satisfy min < max on both axes")]
    InvalidBounds,

    #[error("resolution must be at least 2 pixels per axis")]
    InvalidResolution,

    #[error("tile dimension must be at least 2")]
    InvalidTileDim,

    #[error("tile dimension {dim} does not evenly divide resolution {nx}x{ny}")]
    UnevenTiling { dim: usize, nx: usize, ny: usize },

    #[error("server list must not be empty")]
    NoServers,
}
