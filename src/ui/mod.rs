mod button;
mod dropdown;

pub use button::Button;
pub use dropdown::Dropdown;

// UI constants - now functions for responsive layout
use macroquad::prelude::{screen_width, screen_height};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Create UI buttons with standard layout.
/// Order matches the actions in `input::process_button_clicks`.
pub fn create_buttons(running: bool) -> Vec<Button> {
    let px = panel_x();
    let play_label = if running { "Pause" } else { "Start" };
    vec![
        Button::new(px, 420.0, PANEL_WIDTH, BUTTON_HEIGHT, play_label),
        Button::new(px, 470.0, PANEL_WIDTH, BUTTON_HEIGHT, "Step"),
        Button::new(px, 520.0, PANEL_WIDTH, BUTTON_HEIGHT, "Clear"),
        Button::new(px, 570.0, PANEL_WIDTH, BUTTON_HEIGHT, "Random"),
    ]
}
