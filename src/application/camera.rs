use crate::domain::Cell;
use crate::error::InputError;

use super::Config;

/// Camera manages pan and zoom over the unbounded grid.
///
/// Screen position = world position * zoom + offset, where world units are
/// pixels at zoom 1.0 and one cell spans `cell_size` world units.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32,  // 1.0 = normal, 2.0 = 2x zoomed in
    cell_size: f32,
    min_zoom: f32,
    max_zoom: f32,
}

impl Camera {
    pub fn new(cell_size: f32) -> Self {
        let defaults = Config::default();
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
            cell_size,
            min_zoom: defaults.min_zoom,
            max_zoom: defaults.max_zoom,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut camera = Self {
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom.max(config.min_zoom),
            ..Self::new(config.cell_size)
        };
        camera.zoom = camera.home_zoom();
        camera
    }

    /// Zoom 1.0 pulled into the configured range
    fn home_zoom(&self) -> f32 {
        1.0_f32.max(self.min_zoom).min(self.max_zoom)
    }

    /// Edge length of one cell on screen
    pub fn scaled_cell_size(&self) -> f32 {
        self.cell_size * self.zoom
    }

    /// Multiply zoom by `factor`, keeping the world point under `anchor` fixed on screen
    pub fn zoom_at(&mut self, factor: f32, anchor: (f32, f32)) {
        let (world_x, world_y) = self.screen_to_world(anchor.0, anchor.1);
        self.zoom = (self.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        self.offset_x = anchor.0 - world_x * self.zoom;
        self.offset_y = anchor.1 - world_y * self.zoom;
    }

    /// Zoom in by factor around `anchor`
    pub fn zoom_in(&mut self, factor: f32, anchor: (f32, f32)) {
        self.zoom_at(factor, anchor);
    }

    /// Zoom out by factor around `anchor`
    pub fn zoom_out(&mut self, factor: f32, anchor: (f32, f32)) {
        self.zoom_at(1.0 / factor, anchor);
    }

    /// Pan camera by a screen-space delta
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Convert screen coordinates to world coordinates (pan and zoom removed)
    pub fn screen_to_world(&self, screen_x: f32, screen_y: f32) -> (f32, f32) {
        (
            (screen_x - self.offset_x) / self.zoom,
            (screen_y - self.offset_y) / self.zoom,
        )
    }

    /// Convert screen coordinates to the cell under them
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32) -> Result<Cell, InputError> {
        let (world_x, world_y) = self.screen_to_world(screen_x, screen_y);
        Cell::from_world(world_x, world_y, self.cell_size)
    }

    /// Convert a cell to the screen position of its top-left corner
    pub fn cell_to_screen(&self, cell: Cell) -> (f32, f32) {
        let size = self.scaled_cell_size();
        (
            cell.x as f32 * size + self.offset_x,
            cell.y as f32 * size + self.offset_y,
        )
    }

    /// Inclusive cell range covering a viewport, padded by one cell on each side
    pub fn visible_cells(&self, viewport_width: f32, viewport_height: f32) -> Result<(Cell, Cell), InputError> {
        let min = self.screen_to_cell(0.0, 0.0)?;
        let max = self.screen_to_cell(viewport_width, viewport_height)?;
        Ok((min.offset(-1, -1), max.offset(1, 1)))
    }

    /// Pan so that the centre of `cell` sits in the middle of the viewport
    pub fn centre_on(&mut self, cell: Cell, viewport_width: f32, viewport_height: f32) {
        let size = self.scaled_cell_size();
        self.offset_x = viewport_width / 2.0 - (cell.x as f32 + 0.5) * size;
        self.offset_y = viewport_height / 2.0 - (cell.y as f32 + 0.5) * size;
    }

    /// Reset camera to default
    pub fn reset(&mut self) {
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        self.zoom = self.home_zoom();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Config::default().cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_cell_at_origin() {
        let camera = Camera::new(10.0);
        assert_eq!(camera.screen_to_cell(0.0, 0.0), Ok(Cell::new(0, 0)));
        assert_eq!(camera.screen_to_cell(25.0, 9.9), Ok(Cell::new(2, 0)));
    }

    #[test]
    fn test_panned_click_maps_to_negative_cell() {
        let mut camera = Camera::new(10.0);
        camera.pan(100.0, 50.0);

        assert_eq!(camera.screen_to_cell(95.0, 45.0), Ok(Cell::new(-1, -1)));
        assert_eq!(camera.screen_to_cell(0.0, 0.0), Ok(Cell::new(-10, -5)));
    }

    #[test]
    fn test_cell_round_trip() {
        let mut camera = Camera::new(10.0);
        camera.pan(-33.0, 17.0);
        camera.zoom_at(2.0, (0.0, 0.0));

        let cell = Cell::new(-4, 9);
        let (sx, sy) = camera.cell_to_screen(cell);
        let size = camera.scaled_cell_size();
        // Centre of the cell on screen maps back to it
        assert_eq!(camera.screen_to_cell(sx + size / 2.0, sy + size / 2.0), Ok(cell));
    }

    #[test]
    fn test_zoom_keeps_anchor_fixed() {
        let mut camera = Camera::new(10.0);
        camera.pan(40.0, -20.0);
        let anchor = (300.0, 200.0);
        let before = camera.screen_to_world(anchor.0, anchor.1);

        camera.zoom_in(1.5, anchor);
        let after = camera.screen_to_world(anchor.0, anchor.1);

        assert!((before.0 - after.0).abs() < 1e-3);
        assert!((before.1 - after.1).abs() < 1e-3);
        assert!((camera.zoom - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_in_then_out_is_symmetric() {
        let mut camera = Camera::new(10.0);
        camera.zoom_in(1.1, (120.0, 80.0));
        camera.zoom_out(1.1, (120.0, 80.0));
        assert!((camera.zoom - 1.0).abs() < 1e-5);
        assert!(camera.offset_x.abs() < 1e-3);
        assert!(camera.offset_y.abs() < 1e-3);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let config = Config::default();
        let mut camera = Camera::from_config(&config);
        for _ in 0..200 {
            camera.zoom_in(1.1, (0.0, 0.0));
        }
        assert_eq!(camera.zoom, config.max_zoom);
        for _ in 0..400 {
            camera.zoom_out(1.1, (0.0, 0.0));
        }
        assert_eq!(camera.zoom, config.min_zoom);
    }

    #[test]
    fn test_visible_cells_padded() {
        let camera = Camera::new(10.0);
        let (min, max) = camera.visible_cells(100.0, 50.0).unwrap();
        assert_eq!(min, Cell::new(-1, -1));
        assert_eq!(max, Cell::new(11, 6));
    }

    #[test]
    fn test_centre_on() {
        let mut camera = Camera::new(10.0);
        camera.zoom_at(2.0, (0.0, 0.0));
        camera.centre_on(Cell::new(-7, 12), 800.0, 600.0);
        assert_eq!(camera.screen_to_cell(400.0, 300.0), Ok(Cell::new(-7, 12)));
    }

    #[test]
    fn test_starting_zoom_within_bounds() {
        let config = Config {
            min_zoom: 2.0,
            max_zoom: 8.0,
            ..Config::default()
        };
        let mut camera = Camera::from_config(&config);
        assert_eq!(camera.zoom, 2.0);

        // One notch out is already at the floor, so nothing jumps
        camera.zoom_out(1.1, (100.0, 100.0));
        assert_eq!(camera.zoom, 2.0);

        camera.zoom_in(1.5, (0.0, 0.0));
        camera.reset();
        assert_eq!(camera.zoom, 2.0);

        let config = Config {
            min_zoom: 0.1,
            max_zoom: 0.5,
            ..Config::default()
        };
        assert_eq!(Camera::from_config(&config).zoom, 0.5);
    }

    #[test]
    fn test_reset() {
        let mut camera = Camera::new(10.0);
        camera.pan(5.0, 5.0);
        camera.zoom_at(3.0, (10.0, 10.0));
        camera.reset();
        assert_eq!(camera, Camera::new(10.0));
    }
}
