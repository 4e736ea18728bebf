// patterns.rs - Preset seeds and random fill for the grid

use conway::Grid;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],    // (x, y) from the pattern's top-left corner
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Mirrored half
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(2, 0), (1, 1), (2, 1), (0, 2), (1, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (24, 0), (22, 1), (24, 1), (12, 2), (13, 2), (20, 2), (21, 2),
            (34, 2), (35, 2), (11, 3), (15, 3), (20, 3), (21, 3), (34, 3),
            (35, 3), (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
            (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5),
            (24, 5), (10, 6), (16, 6), (24, 6), (11, 7), (15, 7), (12, 8),
            (13, 8),
        ],
    },
];

impl Pattern {
    /// Bounding box as (width, height).
    pub fn size(&self) -> (i32, i32) {
        self.cells
            .iter()
            .fold((0, 0), |(w, h), &(x, y)| (w.max(x + 1), h.max(y + 1)))
    }

    /// Clears the grid and draws the pattern centred on it.
    ///
    /// Cells that land outside the grid are dropped. Returns how many were
    /// placed.
    pub fn apply(&self, grid: &mut Grid) -> conway::Result<usize> {
        grid.clear();

        let (w, h) = self.size();
        let origin_x = (grid.width() as i32 - w) / 2;
        let origin_y = (grid.height() as i32 - h) / 2;

        let mut placed = 0;
        for &(x, y) in self.cells {
            let (x, y) = (origin_x + x, origin_y + y);
            if grid.contains(x, y) {
                grid.set(x, y, true)?;
                placed += 1;
            }
        }
        Ok(placed)
    }
}

/// Builds a grid where roughly a third of the cells start alive.
///
/// The same seed always gives the same grid.
pub fn random_grid(width: i32, height: i32, seed_value: u32) -> conway::Result<Grid> {
    let mut hasher = DefaultHasher::new();
    seed_value.hash(&mut hasher);
    let mut seed = hasher.finish();

    Grid::from_fn(width, height, |_, _| {
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        (seed >> 16) % 3 == 0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_names_are_unique() {
        for (i, a) in PATTERNS.iter().enumerate() {
            assert!(PATTERNS[i + 1..].iter().all(|b| b.name != a.name), "{}", a.name);
        }
    }

    #[test]
    fn patterns_are_normalised() {
        for pattern in PATTERNS {
            assert!(pattern.cells.iter().any(|&(x, _)| x == 0), "{}", pattern.name);
            assert!(pattern.cells.iter().any(|&(_, y)| y == 0), "{}", pattern.name);
        }
    }

    #[test]
    fn glider_is_centred() {
        let mut grid = Grid::from_fn(7, 7, |_, _| true).unwrap();
        let placed = PATTERNS[0].apply(&mut grid).unwrap();

        assert_eq!(placed, 5);
        assert_eq!(grid.population(), 5);
        for (x, y) in [(3, 2), (4, 3), (2, 4), (3, 4), (4, 4)] {
            assert_eq!(grid.get(x, y), Ok(true), "({x}, {y})");
        }
    }

    #[test]
    fn oversized_pattern_is_clipped() {
        let gun = PATTERNS.iter().find(|p| p.name == "Gosper Glider Gun").unwrap();
        assert_eq!(gun.size(), (36, 9));

        let mut grid = Grid::new(20, 20).unwrap();
        let placed = gun.apply(&mut grid).unwrap();

        assert!(placed > 0 && placed < gun.cells.len());
        assert_eq!(grid.population(), placed);
    }

    #[test]
    fn pulsar_has_period_three() {
        let pulsar = PATTERNS.iter().find(|p| p.name == "Pulsar").unwrap();
        let mut grid = Grid::new(17, 17).unwrap();
        pulsar.apply(&mut grid).unwrap();
        let start = grid.clone();

        grid.step();
        assert_ne!(grid, start);
        grid.step();
        grid.step();
        assert_eq!(grid, start);
    }

    #[test]
    fn random_grid_is_deterministic() {
        let a = random_grid(30, 20, 7).unwrap();
        let b = random_grid(30, 20, 7).unwrap();
        let c = random_grid(30, 20, 8).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.population() > 0 && a.population() < 600);
    }

    #[test]
    fn random_grid_rejects_bad_dimensions() {
        assert!(random_grid(-1, 10, 0).is_err());
    }
}
