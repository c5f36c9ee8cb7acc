use macroquad::prelude::*;

const FONT_SIZE: f32 = 16.0;

/// Shorten `text` with an ellipsis until it fits in `max_width` pixels
fn fit_text(text: &str, max_width: f32) -> String {
    let width = |s: &str| measure_text(s, None, FONT_SIZE as u16, 1.0).width;
    if width(text) <= max_width {
        return text.to_string();
    }
    let mut truncated = text.to_string();
    while !truncated.is_empty() && width(&format!("{}...", truncated)) > max_width {
        truncated.pop();
    }
    format!("{}...", truncated)
}

/// Dropdown selector UI component
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
    label: String,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            height: 30.0,
            items,
            selected: 0,
            is_open: false,
            label: label.into(),
        }
    }

    /// Get currently selected index
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Set selected index (ignored when out of range)
    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Draw dropdown without handling interaction
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let button_color = if self.is_hovered_main(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_rectangle(self.x, self.y, self.width, self.height, button_color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        // Leave space for the arrow
        let shown = fit_text(&self.items[self.selected], self.width - 30.0);
        draw_text(&shown, self.x + 5.0, self.y + 21.0, FONT_SIZE, WHITE);
        draw_text("v", self.x + self.width - 18.0, self.y + 21.0, 14.0, WHITE);

        if !self.is_open {
            return;
        }

        let menu_height = self.items.len() as f32 * self.height;
        draw_rectangle(
            self.x,
            self.y + self.height,
            self.width,
            menu_height,
            Color::from_rgba(30, 30, 30, 255)
        );

        let hovered = self.item_at(mouse_pos);
        for (i, item) in self.items.iter().enumerate() {
            let item_y = self.item_y(i);

            let item_color = if hovered == Some(i) {
                Color::from_rgba(100, 149, 237, 255)
            } else if i == self.selected {
                Color::from_rgba(50, 100, 150, 255)
            } else {
                Color::from_rgba(45, 45, 45, 255)
            };

            draw_rectangle(self.x, item_y, self.width, self.height, item_color);
            draw_rectangle_lines(self.x, item_y, self.width, self.height, 1.0, Color::from_rgba(80, 80, 80, 255));
            draw_text(&fit_text(item, self.width - 10.0), self.x + 5.0, item_y + 21.0, FONT_SIZE, WHITE);
        }

        draw_rectangle_lines(self.x, self.y + self.height, self.width, menu_height, 2.0, WHITE);
    }

    /// Handle interaction and return true if selection changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return false;
        }
        self.click(mouse_pos)
    }

    /// Apply a primary click at `mouse_pos`; true if the selection changed
    fn click(&mut self, mouse_pos: (f32, f32)) -> bool {
        if self.is_hovered_main(mouse_pos) {
            self.is_open = !self.is_open;
            return false;
        }
        if !self.is_open {
            return false;
        }

        self.is_open = false;
        match self.item_at(mouse_pos) {
            Some(i) if i != self.selected => {
                self.selected = i;
                true
            }
            _ => false,
        }
    }

    fn item_y(&self, index: usize) -> f32 {
        self.y + self.height + (index as f32 * self.height)
    }

    fn is_hovered_main(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Index of the menu item under the cursor
    fn item_at(&self, mouse_pos: (f32, f32)) -> Option<usize> {
        if mouse_pos.0 < self.x || mouse_pos.0 > self.x + self.width {
            return None;
        }
        let top = self.y + self.height;
        if mouse_pos.1 < top {
            return None;
        }
        let index = ((mouse_pos.1 - top) / self.height) as usize;
        (index < self.items.len()).then_some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dropdown() -> Dropdown {
        let items = ["Glider", "Blinker", "Block"].map(String::from).to_vec();
        Dropdown::new(0.0, 100.0, 150.0, "Pattern", items)
    }

    #[test]
    fn test_header_click_toggles_open() {
        let mut dd = dropdown();
        assert!(!dd.click((10.0, 110.0)));
        assert!(dd.is_open());
        assert!(!dd.click((10.0, 110.0)));
        assert!(!dd.is_open());
    }

    #[test]
    fn test_item_click_selects_and_closes() {
        let mut dd = dropdown();
        dd.click((10.0, 110.0));
        // Second item spans y 160..190
        assert!(dd.click((10.0, 170.0)));
        assert_eq!(dd.selected(), 1);
        assert!(!dd.is_open());
    }

    #[test]
    fn test_reselecting_current_is_not_a_change() {
        let mut dd = dropdown();
        dd.click((10.0, 110.0));
        assert!(!dd.click((10.0, 140.0)));
        assert_eq!(dd.selected(), 0);
    }

    #[test]
    fn test_click_outside_closes() {
        let mut dd = dropdown();
        dd.click((10.0, 110.0));
        assert!(!dd.click((400.0, 400.0)));
        assert!(!dd.is_open());
    }

    #[test]
    fn test_closed_menu_items_are_inert() {
        let mut dd = dropdown();
        assert!(!dd.click((10.0, 170.0)));
        assert_eq!(dd.selected(), 0);
        assert!(!dd.is_open());
    }

    #[test]
    fn test_set_selected_out_of_range_ignored() {
        let mut dd = dropdown();
        dd.set_selected(7);
        assert_eq!(dd.selected(), 0);
    }
}
