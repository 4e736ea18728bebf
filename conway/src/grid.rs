// grid.rs - Bounded grid and generation step for Conway's Game of Life

use std::fmt;

use tracing::{debug, trace};

use crate::error::{Error, Result};

/// Moore neighbourhood as (dx, dy) offsets.
const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// A fixed-size field of alive/dead cells.
///
/// Coordinates are `(x, y)` with `0 <= x < width` and `0 <= y < height`.
/// Edges do not wrap: neighbours outside the grid count as dead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width  : usize,
    height : usize,
    cells  : Vec<bool>,    // row-major, index = y * width + x
}

impl Grid {
    /// Creates a grid with every cell dead.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        Self::from_fn(width, height, |_, _| false)
    }

    /// Creates a grid whose cell at `(x, y)` starts as `init(x, y)`.
    ///
    /// Either dimension may be zero, which gives a grid with no cells.
    pub fn from_fn<F>(width: i32, height: i32, mut init: F) -> Result<Self>
    where
        F: FnMut(i32, i32) -> bool,
    {
        let invalid = Error::InvalidDimensions { width, height };
        let w = usize::try_from(width).map_err(|_| invalid)?;
        let h = usize::try_from(height).map_err(|_| invalid)?;
        let len = w.checked_mul(h).ok_or(invalid)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| invalid)?;
        for y in 0..height {
            for x in 0..width {
                cells.push(init(x, y));
            }
        }

        debug!(width, height, "grid created");
        Ok(Self { width: w, height: h, cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `(x, y)` names a cell of this grid.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    pub fn get(&self, x: i32, y: i32) -> Result<bool> {
        let i = self.checked_index(x, y)?;
        Ok(self.cells[i])
    }

    pub fn set(&mut self, x: i32, y: i32, alive: bool) -> Result<()> {
        let i = self.checked_index(x, y)?;
        self.cells[i] = alive;
        trace!(x, y, alive, "cell set");
        Ok(())
    }

    /// Flips the cell and returns its new state.
    pub fn toggle(&mut self, x: i32, y: i32) -> Result<bool> {
        let i = self.checked_index(x, y)?;
        self.cells[i] = !self.cells[i];
        trace!(x, y, alive = self.cells[i], "cell toggled");
        Ok(self.cells[i])
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of live cells among the 8 surrounding `(x, y)`.
    ///
    /// Never fails: positions off the grid simply contribute nothing.
    pub fn count_live_neighbors(&self, x: i32, y: i32) -> u8 {
        NEIGHBORS
            .iter()
            .filter(|&&(dx, dy)| match (x.checked_add(dx), y.checked_add(dy)) {
                (Some(nx), Some(ny)) => self.is_alive(nx, ny),
                _ => false,
            })
            .count() as u8
    }

    /// Computes the following generation from a snapshot of this one.
    pub fn next_generation(&self) -> Grid {
        let cells = self
            .cells()
            .map(|(x, y, alive)| {
                match (alive, self.count_live_neighbors(x, y)) {
                    (true, 2) | (true, 3) => true,   // Survival
                    (false, 3)            => true,   // Birth
                    _                     => false,  // Death or stays dead
                }
            })
            .collect();

        Grid { width: self.width, height: self.height, cells }
    }

    /// Advances one generation. Every cell is evaluated against the old
    /// state before any cell is replaced.
    pub fn step(&mut self) {
        let next = self.next_generation();
        self.cells = next.cells;
        trace!(population = self.population(), "generation committed");
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Every cell as `(x, y, alive)`, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, bool)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &alive)| ((i % width) as i32, (i / width) as i32, alive))
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    fn checked_index(&self, x: i32, y: i32) -> Result<usize> {
        self.index(x, y).ok_or(Error::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    fn is_alive(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.cells[i])
    }
}

/// One text row per `y`, `#` for alive and `.` for dead.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
