use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid bounds: x [{min_x}, {max_x}], y [{min_y}, {max_y}]")]
    InvalidBounds {
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    },

    #[error("Invalid min_dist: {0}")]
    InvalidMinDist(f64),

    #[error("Allowed area has no points")]
    EmptyAllowedArea,

    #[error("Unknown constraint: {0}")]
    UnknownConstraint(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
