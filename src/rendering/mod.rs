use macroquad::prelude::*;
use crate::domain::{Cell, CellSet, Pattern};
use crate::application::{Camera, Simulation};
use crate::ui::{Button, Dropdown, panel_x, grid_area_width, grid_area_height, PANEL_WIDTH};

/// Format large numbers with K/M/B suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000_000 {
        format!("{:.1}B", n as f64 / 1_000_000_000.0)
    } else if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Draw the live cells that fall inside the viewport.
/// Returns how many were drawn.
pub fn draw_cells(cells: &CellSet, camera: &Camera) -> usize {
    let cell_size = camera.scaled_cell_size();
    let area_width = grid_area_width();
    let area_height = grid_area_height();

    let Ok((min, max)) = camera.visible_cells(area_width, area_height) else {
        return 0;
    };

    let alive_color = Color::from_rgba(0, 255, 150, 255);
    let grid_line_color = Color::from_rgba(40, 40, 40, 255);

    // Grid lines only when zoomed in enough to be readable
    if cell_size >= 6.0 {
        let origin = camera.cell_to_screen(min);
        let mut x = origin.0;
        while x <= area_width {
            draw_line(x, 0.0, x, area_height, 1.0, grid_line_color);
            x += cell_size;
        }
        let mut y = origin.1;
        while y <= area_height {
            draw_line(0.0, y, area_width, y, 1.0, grid_line_color);
            y += cell_size;
        }
    }

    let mut drawn = 0;
    for cell in cells.within(min, max) {
        let (screen_x, screen_y) = camera.cell_to_screen(cell);
        draw_rectangle(screen_x, screen_y, cell_size, cell_size, alive_color);
        drawn += 1;
    }
    drawn
}

/// Draw a semi-transparent preview of a pattern centred on `centre`
pub fn draw_pattern_preview(pattern: &Pattern, camera: &Camera, centre: Cell) {
    let cell_size = camera.scaled_cell_size();

    for cell in pattern.cells_at(centre) {
        let (screen_x, screen_y) = camera.cell_to_screen(cell);
        draw_rectangle(
            screen_x, screen_y,
            cell_size, cell_size,
            Color::from_rgba(0, 255, 150, 120)  // 47% opacity
        );
        draw_rectangle_lines(
            screen_x, screen_y,
            cell_size, cell_size,
            1.5,
            Color::from_rgba(0, 255, 150, 200)
        );
    }

    // Bounding box around entire pattern
    let (box_x, box_y) = camera.cell_to_screen(pattern.origin_for(centre));
    draw_rectangle_lines(
        box_x, box_y,
        pattern.width as f32 * cell_size,
        pattern.height as f32 * cell_size,
        2.0,
        Color::from_rgba(255, 255, 0, 180)
    );
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255)
    );
}

/// Traffic-light colour for a duration against three thresholds (ms)
fn timing_color(ms: f32, thresholds: [f32; 3]) -> Color {
    if ms < thresholds[0] {
        Color::from_rgba(0, 255, 0, 255)
    } else if ms < thresholds[1] {
        Color::from_rgba(255, 255, 0, 255)
    } else if ms < thresholds[2] {
        Color::from_rgba(255, 165, 0, 255)
    } else {
        Color::from_rgba(255, 0, 0, 255)
    }
}

/// Draw the control panel with buttons, dropdowns, and info
pub fn draw_controls(
    state: &Simulation,
    camera: &Camera,
    buttons: &[Button],
    dropdowns: &[&Dropdown],
    hovered: Option<Cell>,
    drawn: usize,
    mouse_pos: (f32, f32)
) {
    draw_panel_background();

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x();

    draw_text(state.rule.description(), px, 165.0, 12.0, GRAY);

    let controls = [
        ("Controls:", 180.0, 14.0, WHITE),
        ("Click: Toggle cell", 195.0, 12.0, GRAY),
        ("Drag: Pan", 208.0, 12.0, GRAY),
        ("Wheel: Zoom", 221.0, 12.0, GRAY),
        ("Space: Play  N: Step", 234.0, 12.0, GRAY),
        ("C: Clear  R: Random", 247.0, 12.0, GRAY),
        ("H: Home  Up/Down: Speed", 260.0, 12.0, GRAY),
    ];
    for (text, y, size, color) in controls {
        draw_text(text, px, y, size, color);
    }

    let info = Color::from_rgba(150, 150, 150, 255);
    let population = state.cells().len();
    draw_text(&format!("Population: {}", format_number(population)), px, 290.0, 13.0, info);
    draw_text(&format!("On screen: {}", format_number(drawn)), px, 305.0, 13.0, info);
    if let Some(stats) = state.last_step {
        draw_text(&format!("Evaluated: {}", format_number(stats.candidates)), px, 320.0, 13.0, info);
    }
    if let Some(cell) = hovered {
        draw_text(&format!("Cursor: ({}, {})", cell.x, cell.y), px, 335.0, 13.0, info);
    }

    let evolve_ms = state.last_evolution_time_ms;
    let render_ms = state.last_render_time_ms;
    draw_text(&format!("Evolve: {:.1}ms", evolve_ms), px, 360.0, 13.0, timing_color(evolve_ms, [5.0, 33.0, 100.0]));
    draw_text(&format!("Render: {:.1}ms", render_ms), px, 375.0, 13.0, timing_color(render_ms, [5.0, 16.0, 50.0]));
    draw_text(&format!("{} | FPS: {}", state.algorithm.description(), get_fps()), px, 390.0, 12.0, GRAY);

    let status_color = if state.is_running() {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };
    let speed = format!("{:.0} gen/s", state.updates_per_second);
    let generation = format!("{}", state.generation);
    let zoom = format!("{:.1}x", camera.zoom);

    let labels = [
        ("Speed:", 640.0, 16.0, WHITE),
        (speed.as_str(), 658.0, 14.0, Color::from_rgba(180, 180, 180, 255)),
        ("Generation:", 685.0, 16.0, WHITE),
        (generation.as_str(), 705.0, 20.0, Color::from_rgba(0, 255, 150, 255)),
        ("Status:", 735.0, 16.0, WHITE),
        (state.run_state.label(), 755.0, 16.0, status_color),
        ("Zoom:", 780.0, 14.0, WHITE),
        (zoom.as_str(), 795.0, 14.0, Color::from_rgba(180, 180, 180, 255)),
    ];
    for (text, y, size, color) in labels {
        draw_text(text, px, y, size, color);
    }

    // Dropdowns last so they appear on top; the open one above the rest
    dropdowns.iter().filter(|d| !d.is_open()).for_each(|d| d.draw(mouse_pos));
    if let Some(open) = dropdowns.iter().find(|d| d.is_open()) {
        open.draw(mouse_pos);
    }
}
