//! Sparse storage for the live cells of an unbounded grid.
//!
//! Only live cells are stored, so memory follows population rather than
//! grid area, and any signed coordinate is addressable.

use std::collections::HashSet;
use std::collections::hash_set;

use rand::Rng;

use super::Cell;

/// The set of currently live cells. Iteration order is unspecified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellSet {
    cells: HashSet<Cell>,
}

impl CellSet {
    /// Create an empty set (every cell dead)
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Mark `cell` alive. Returns false if it already was.
    pub fn insert(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    /// Mark `cell` dead. Returns false if it already was.
    pub fn remove(&mut self, cell: Cell) -> bool {
        self.cells.remove(&cell)
    }

    /// Flip a single cell and return its new state (true = alive)
    pub fn toggle(&mut self, cell: Cell) -> bool {
        if self.cells.remove(&cell) {
            false
        } else {
            self.cells.insert(cell);
            true
        }
    }

    /// Builder form of [`CellSet::toggle`]
    pub fn toggled(mut self, cell: Cell) -> Self {
        self.toggle(cell);
        self
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Count live cells among the 8 neighbours of `cell`
    pub fn live_neighbours(&self, cell: Cell) -> u8 {
        cell.neighbours().filter(|n| self.contains(*n)).count() as u8
    }

    /// Live cells inside the inclusive rectangle `min..=max` (used for viewport culling)
    pub fn within(&self, min: Cell, max: Cell) -> impl Iterator<Item = Cell> + '_ {
        self.iter()
            .filter(move |c| c.x >= min.x && c.x <= max.x && c.y >= min.y && c.y <= max.y)
    }

    /// Smallest inclusive rectangle holding every live cell, `None` when empty
    pub fn bounding_box(&self) -> Option<(Cell, Cell)> {
        let mut iter = self.iter();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(min, max), c| {
            (
                Cell::new(min.x.min(c.x), min.y.min(c.y)),
                Cell::new(max.x.max(c.x), max.y.max(c.y)),
            )
        }))
    }

    /// Fill the inclusive rectangle `min..=max`, each cell alive with probability `density`
    pub fn random_region<R: Rng + ?Sized>(rng: &mut R, min: Cell, max: Cell, density: f64) -> Self {
        let density = density.clamp(0.0, 1.0);
        let mut set = Self::new();
        for y in min.y..=max.y {
            for x in min.x..=max.x {
                if rng.random_bool(density) {
                    set.insert(Cell::new(x, y));
                }
            }
        }
        set
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Cell> for CellSet {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl From<HashSet<Cell>> for CellSet {
    fn from(cells: HashSet<Cell>) -> Self {
        Self { cells }
    }
}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = hash_set::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = &'a Cell;
    type IntoIter = hash_set::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn set_of(cells: &[(i64, i64)]) -> CellSet {
        cells.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn test_insert_has_no_duplicates() {
        let mut set = CellSet::new();
        assert!(set.insert(Cell::new(1, 2)));
        assert!(!set.insert(Cell::new(1, 2)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut set = set_of(&[(0, 0)]);
        assert!(!set.remove(Cell::new(9, 9)));
        assert_eq!(set, set_of(&[(0, 0)]));
    }

    #[test]
    fn test_negative_and_extreme_coordinates() {
        let mut set = CellSet::new();
        set.insert(Cell::new(-1, -1));
        set.insert(Cell::new(i64::MIN, i64::MAX));

        assert!(set.contains(Cell::new(-1, -1)));
        assert!(set.contains(Cell::new(i64::MIN, i64::MAX)));
        assert!(!set.contains(Cell::new(1, 1)));
    }

    #[test]
    fn test_toggle_flips_state() {
        let mut set = CellSet::new();
        assert!(set.toggle(Cell::new(3, -4)));
        assert!(set.contains(Cell::new(3, -4)));
        assert!(!set.toggle(Cell::new(3, -4)));
        assert!(set.is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_set() {
        let original = set_of(&[(0, 0), (1, 0), (-5, 7)]);

        for cell in [Cell::new(0, 0), Cell::new(2, 2), Cell::new(-5, 7)] {
            let round_trip = original.clone().toggled(cell).toggled(cell);
            assert_eq!(round_trip, original);
        }
    }

    #[test]
    fn test_live_neighbours() {
        let set = set_of(&[(0, 0), (1, 0), (0, 1), (5, 5)]);
        assert_eq!(set.live_neighbours(Cell::new(1, 1)), 3);
        assert_eq!(set.live_neighbours(Cell::new(0, 0)), 2);
        assert_eq!(set.live_neighbours(Cell::new(5, 5)), 0);
    }

    #[test]
    fn test_within_culls_outside_cells() {
        let set = set_of(&[(0, 0), (-3, 2), (10, 10)]);
        let mut visible: Vec<Cell> = set.within(Cell::new(-5, -5), Cell::new(5, 5)).collect();
        visible.sort();
        assert_eq!(visible, vec![Cell::new(-3, 2), Cell::new(0, 0)]);
    }

    #[test]
    fn test_bounding_box() {
        assert_eq!(CellSet::new().bounding_box(), None);

        let set = set_of(&[(2, -1), (-4, 3), (0, 0)]);
        assert_eq!(
            set.bounding_box(),
            Some((Cell::new(-4, -1), Cell::new(2, 3)))
        );
    }

    #[test]
    fn test_random_region_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let (min, max) = (Cell::new(-10, -10), Cell::new(9, 9));
        let set = CellSet::random_region(&mut rng, min, max, 0.3);

        assert!(!set.is_empty());
        assert!(set.len() < 400);
        assert_eq!(set.within(min, max).count(), set.len());
    }

    #[test]
    fn test_random_region_density_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        let (min, max) = (Cell::new(0, 0), Cell::new(4, 4));

        assert!(CellSet::random_region(&mut rng, min, max, 0.0).is_empty());
        assert_eq!(CellSet::random_region(&mut rng, min, max, 1.0).len(), 25);
        assert_eq!(CellSet::random_region(&mut rng, min, max, 3.0).len(), 25);
    }
}
