mod camera;
mod config;
mod simulation;

pub use camera::Camera;
pub use config::Config;
pub use simulation::{RunState, Simulation};
