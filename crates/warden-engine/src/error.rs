use thiserror::Error;

/// Errors raised while loading a [`GameConfig`](crate::GameConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("field bounds must be positive, got {width}x{height}")]
    InvalidBounds { width: f32, height: f32 },
    #[error("tile size must be positive, got {0}")]
    InvalidTileSize(f32),
    #[error("player speed must be positive, got {0}")]
    InvalidSpeed(f32),
    #[error("player size must be positive, got {0:?}")]
    InvalidPlayerSize([f32; 2]),
    #[error("player size {size:?} does not fit in a {width}x{height} field")]
    PlayerExceedsField { size: [f32; 2], width: f32, height: f32 },
    #[error("`{0}` key must not be empty")]
    EmptyKey(&'static str),
}
