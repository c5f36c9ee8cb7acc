// Domain layer - sparse cell storage and the generation engine
pub mod domain;

// Application layer - simulation ownership, camera, configuration
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

pub mod error;
pub mod logging;

// Re-exports for convenience
pub use domain::{Cell, CellSet, Pattern, presets, Algorithm, advance_generation};
pub use application::{Simulation, RunState, Camera, Config};
pub use error::{InputError, ConfigError};
