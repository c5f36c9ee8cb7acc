use thiserror::Error;

/// Errors raised when a pointer position cannot be mapped to a cell.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("position ({x}, {y}) is not finite")]
    NonFinitePosition { x: f32, y: f32 },
    #[error("cell size {0} must be finite and positive")]
    InvalidCellSize(f32),
    #[error("position ({x}, {y}) is outside the addressable grid")]
    OutOfRange { x: f64, y: f64 },
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key}: cannot parse {value:?}")]
    Unparsable { key: &'static str, value: String },
    #[error("{key} must be between {min} and {max}, got {value}")]
    OutOfBounds {
        key: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("min_zoom {min} must not exceed max_zoom {max}")]
    InvertedZoomBounds { min: f32, max: f32 },
    #[error("min_updates_per_second {min} must not exceed max_updates_per_second {max}")]
    InvertedSpeedBounds { min: f32, max: f32 },
}
