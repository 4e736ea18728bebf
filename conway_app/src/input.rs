// input.rs - Pointer painting and the pan/zoom camera over the grid

use conway::Grid;
use egui::{Pos2, Rect, Vec2};

use crate::config::{MAX_CELL_SIZE, MIN_CELL_SIZE, ZOOM_SPEED};

/// Toggles cells under a held pointer, once per cell per stroke.
#[derive(Debug, Default)]
pub struct Brush {
    last_cell: Option<(i32, i32)>,
}

impl Brush {
    /// Toggles `(x, y)` unless it is the cell this stroke touched last.
    ///
    /// Positions off the grid are ignored. Returns whether a cell changed.
    pub fn paint(&mut self, grid: &mut Grid, x: i32, y: i32) -> conway::Result<bool> {
        if !grid.contains(x, y) || self.last_cell == Some((x, y)) {
            return Ok(false);
        }
        grid.toggle(x, y)?;
        self.last_cell = Some((x, y));
        Ok(true)
    }

    /// Ends the stroke; the next paint may touch any cell again.
    pub fn release(&mut self) {
        self.last_cell = None;
    }
}

/// Maps grid coordinates to screen space inside the canvas.
///
/// `offset` is where cell (0, 0) sits relative to the canvas' top-left
/// corner, in screen points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub offset    : Vec2,
    pub cell_size : f32,
}

impl Camera {
    /// Places the grid's centre in the middle of a `viewport`-sized canvas.
    pub fn centered(grid_width: usize, grid_height: usize, cell_size: f32, viewport: Vec2) -> Self {
        let cell_size = cell_size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE);
        let grid_size = Vec2::new(grid_width as f32, grid_height as f32) * cell_size;
        Self { offset: (viewport - grid_size) / 2.0, cell_size }
    }

    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Zooms by `scroll` points, keeping whatever is under `anchor` (canvas
    /// relative) in place.
    pub fn zoom(&mut self, scroll: f32, anchor: Vec2) {
        let new_size = (self.cell_size * (1.0 + scroll * ZOOM_SPEED))
            .clamp(MIN_CELL_SIZE, MAX_CELL_SIZE);
        let scale = new_size / self.cell_size;
        self.offset = anchor - (anchor - self.offset) * scale;
        self.cell_size = new_size;
    }

    /// The cell under a screen position. May lie outside the grid.
    pub fn cell_at(&self, canvas_min: Pos2, pos: Pos2) -> (i32, i32) {
        let local = (pos - canvas_min - self.offset) / self.cell_size;
        (local.x.floor() as i32, local.y.floor() as i32)
    }

    /// Screen rectangle of a cell, shrunk by `spacing` on its far edges.
    pub fn cell_rect(&self, canvas_min: Pos2, x: i32, y: i32, spacing: f32) -> Rect {
        let min = canvas_min + self.offset + Vec2::new(x as f32, y as f32) * self.cell_size;
        let side = (self.cell_size - spacing).max(1.0);
        Rect::from_min_size(min, Vec2::splat(side))
    }
}
