use macroquad::prelude::*;
use tracing::{trace, warn};

use crate::application::{Camera, Config, Simulation};
use crate::domain::{Cell, Pattern};
use crate::ui::grid_area_width;

/// Primary-button press currently in progress
#[derive(Clone, Copy, Debug, PartialEq)]
struct Press {
    started_at: f64,
    origin: (f32, f32),
    last: (f32, f32),
    dragging: bool,
}

/// Tells clicks apart from drags for the primary button.
///
/// A press is a click when released within `click_max_secs` without having
/// travelled further than `click_max_drag_px`; anything else is a pan.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    press: Option<Press>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_press(&mut self, pos: (f32, f32), now: f64) {
        self.press = Some(Press {
            started_at: now,
            origin: pos,
            last: pos,
            dragging: false,
        });
    }

    /// Feed a pointer move while the button is held; returns the pan delta once dragging
    pub fn on_move(&mut self, pos: (f32, f32), config: &Config) -> Option<(f32, f32)> {
        let press = self.press.as_mut()?;

        if !press.dragging {
            let travel = (pos.0 - press.origin.0).hypot(pos.1 - press.origin.1);
            if travel <= config.click_max_drag_px {
                return None;
            }
            press.dragging = true;
        }

        let delta = (pos.0 - press.last.0, pos.1 - press.last.1);
        press.last = pos;
        Some(delta)
    }

    /// Finish the press; true when it qualifies as a click
    pub fn on_release(&mut self, now: f64, config: &Config) -> bool {
        match self.press.take() {
            Some(press) => !press.dragging && now - press.started_at <= config.click_max_secs,
            None => false,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.press.is_some_and(|p| p.dragging)
    }
}

/// Handle zoom with mouse wheel, anchored at the cursor
pub fn handle_zoom(camera: &mut Camera, config: &Config, mouse_pos: (f32, f32)) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_in(config.zoom_step, mouse_pos);
    } else if wheel < 0.0 {
        camera.zoom_out(config.zoom_step, mouse_pos);
    }
}

/// Handle primary-button drag (pan) and quick click (toggle a cell) on the grid area
pub fn handle_pointer(
    state: &mut Simulation,
    camera: &mut Camera,
    tracker: &mut PointerTracker,
    config: &Config,
    mouse_pos: (f32, f32),
) {
    let now = get_time();
    let over_grid = mouse_pos.0 < grid_area_width();

    if is_mouse_button_pressed(MouseButton::Left) && over_grid {
        tracker.on_press(mouse_pos, now);
    }

    if is_mouse_button_down(MouseButton::Left) {
        if let Some((dx, dy)) = tracker.on_move(mouse_pos, config) {
            camera.pan(dx, dy);
        }
    }

    if is_mouse_button_released(MouseButton::Left) && tracker.on_release(now, config) && over_grid {
        match camera.screen_to_cell(mouse_pos.0, mouse_pos.1) {
            Ok(cell) => state.toggle_cell(cell),
            Err(err) => warn!(%err, "ignoring click"),
        }
    }
}

/// Cell under the cursor, if it maps to one
pub fn hovered_cell(camera: &Camera, mouse_pos: (f32, f32)) -> Option<Cell> {
    camera
        .screen_to_cell(mouse_pos.0, mouse_pos.1)
        .inspect_err(|err| trace!(%err, "cursor outside addressable grid"))
        .ok()
}

/// Place the pending pattern on left-click, cancel on right-click or Escape
pub fn handle_pattern_placement(state: &mut Simulation, camera: &Camera, pattern: &Pattern, mouse_pos: (f32, f32)) {
    if is_mouse_button_pressed(MouseButton::Right) || is_key_pressed(KeyCode::Escape) {
        state.pending_pattern_index = None;
    } else if is_mouse_button_pressed(MouseButton::Left) && mouse_pos.0 < grid_area_width() {
        if let Some(centre) = hovered_cell(camera, mouse_pos) {
            state.place_pattern(pattern, centre);
        }
        state.pending_pattern_index = None;
    }
}

/// Replace the cells with random soup covering the visible window
pub fn randomize_visible(state: Simulation, camera: &Camera) -> Simulation {
    match camera.visible_cells(grid_area_width(), screen_height()) {
        Ok((min, max)) => state.randomize(min, max),
        Err(err) => {
            warn!(%err, "cannot randomize: viewport outside addressable grid");
            state
        }
    }
}

/// Cell halfway between two corners, computed without overflow
fn midpoint(min: Cell, max: Cell) -> Cell {
    let mid = |a: i64, b: i64| ((a as i128 + b as i128).div_euclid(2)) as i64;
    Cell::new(mid(min.x, max.x), mid(min.y, max.y))
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: Simulation, camera: &mut Camera) -> Simulation {
    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 5] = [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::N, Simulation::step_once),
        (KeyCode::C, Simulation::clear),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    let mut new_state = actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    if is_key_pressed(KeyCode::R) {
        new_state = randomize_visible(new_state, camera);
    }

    // 'H' (home) resets zoom and centres on the population, or the origin when empty
    if is_key_pressed(KeyCode::H) {
        camera.reset();
        let centre = new_state
            .cells()
            .bounding_box()
            .map_or(Cell::new(0, 0), |(min, max)| midpoint(min, max));
        camera.centre_on(centre, grid_area_width(), screen_height());
    }

    new_state
}

/// Process button clicks functionally
pub fn process_button_clicks(
    state: Simulation,
    camera: &Camera,
    buttons: &[crate::ui::Button],
    mouse_pos: (f32, f32)
) -> Simulation {
    buttons
        .iter()
        .enumerate()
        .fold(state, |s, (idx, btn)| {
            if !btn.is_clicked(mouse_pos) {
                return s;
            }
            match idx {
                0 => s.toggle_running(),
                1 => s.step_once(),
                2 => s.clear(),
                3 => randomize_visible(s, camera),
                _ => s,
            }
        })
}
