//! Sprite-sheet frame grid.
//!
//! A sheet is sliced into equally sized square frames laid out on a uniform
//! grid. Frames are numbered row-major: all columns of row 0, then row 1,
//! and so on. The grid descriptor is plain data so it can travel in JSON
//! next to the animation definitions.

use raylib::prelude::Vector2;
use serde::{Deserialize, Serialize};

/// Uniform grid layout of a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetGrid {
    /// Number of frame columns.
    pub cols: u32,
    /// Number of frame rows.
    pub rows: u32,
    /// Side length of one square frame, in pixels.
    pub frame_size: u32,
}

impl SheetGrid {
    pub fn new(cols: u32, rows: u32, frame_size: u32) -> Self {
        Self {
            cols,
            rows,
            frame_size,
        }
    }

    /// Total number of frames on the sheet.
    pub fn frame_count(&self) -> usize {
        (self.cols * self.rows) as usize
    }

    /// Pixel origin (top-left corner) of every frame, row-major.
    ///
    /// Frame `i` sits at column `i % cols`, row `i / cols`. A grid with zero
    /// columns or rows yields an empty sequence.
    pub fn frame_positions(&self) -> Vec<Vector2> {
        let mut positions = Vec::with_capacity(self.frame_count());
        for row in 0..self.rows {
            for col in 0..self.cols {
                positions.push(Vector2 {
                    x: (col * self.frame_size) as f32,
                    y: (row * self.frame_size) as f32,
                });
            }
        }
        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_positions_cover_the_whole_grid() {
        let grid = SheetGrid::new(10, 4, 80);
        let positions = grid.frame_positions();
        assert_eq!(positions.len(), 40);
        assert_eq!(positions.len(), grid.frame_count());
    }

    #[test]
    fn frame_positions_are_row_major() {
        let positions = SheetGrid::new(10, 4, 80).frame_positions();
        // First frame of row 0.
        assert_eq!(positions[0].x, 0.0);
        assert_eq!(positions[0].y, 0.0);
        // Index 10 wraps to the first column of row 1.
        assert_eq!(positions[10].x, 0.0);
        assert_eq!(positions[10].y, 80.0);
        // Last frame: column 9, row 3.
        assert_eq!(positions[39].x, 720.0);
        assert_eq!(positions[39].y, 240.0);
    }

    #[test]
    fn position_formula_holds_for_every_index() {
        let grid = SheetGrid::new(7, 3, 16);
        let positions = grid.frame_positions();
        for (i, pos) in positions.iter().enumerate() {
            assert_eq!(pos.x, ((i as u32 % grid.cols) * grid.frame_size) as f32);
            assert_eq!(pos.y, ((i as u32 / grid.cols) * grid.frame_size) as f32);
        }
    }

    #[test]
    fn degenerate_grid_is_empty() {
        assert!(SheetGrid::new(0, 4, 80).frame_positions().is_empty());
        assert!(SheetGrid::new(10, 0, 80).frame_positions().is_empty());
    }

    #[test]
    fn grid_round_trips_through_json() {
        let grid = SheetGrid::new(11, 4, 80);
        let json = serde_json::to_string(&grid).unwrap();
        let back: SheetGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }
}
