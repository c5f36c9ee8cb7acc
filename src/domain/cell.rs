use crate::error::InputError;

/// Cell is a coordinate on the unbounded integer grid.
/// Two cells are the same cell exactly when both coordinates match.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

/// Offsets of the 8 surrounding cells
const NEIGHBOUR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Translate by (dx, dy). Wraps at the i64 limits so the grid has no edge to fall off.
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// The 8 adjacent cells (diagonals included), excluding `self`
    pub fn neighbours(self) -> impl Iterator<Item = Cell> {
        NEIGHBOUR_OFFSETS
            .into_iter()
            .map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// The 3x3 block centred on `self`, `self` included
    pub fn neighbourhood(self) -> impl Iterator<Item = Cell> {
        (-1..=1).flat_map(move |dy| (-1..=1).map(move |dx| self.offset(dx, dy)))
    }

    /// Map a world-space position (pixels, pan and zoom already removed) to the cell
    /// containing it by floor division with the cell size.
    pub fn from_world(x: f32, y: f32, cell_size: f32) -> Result<Self, InputError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(InputError::NonFinitePosition { x, y });
        }
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(InputError::InvalidCellSize(cell_size));
        }

        let gx = (x as f64 / cell_size as f64).floor();
        let gy = (y as f64 / cell_size as f64).floor();

        // i64::MAX is not exactly representable; 2^63 itself is already out of range
        let in_range = |v: f64| v >= i64::MIN as f64 && v < i64::MAX as f64;
        if !in_range(gx) || !in_range(gy) {
            return Err(InputError::OutOfRange { x: gx, y: gy });
        }

        Ok(Self::new(gx as i64, gy as i64))
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}
