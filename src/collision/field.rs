//! Collision domain: the static per-room obstruction map.

use thiserror::Error;

/// Errors raised while building a [`CollisionField`] from raw room data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("field dimensions must be non-zero (got {width}x{height})")]
    EmptyDimensions { width: u32, height: u32 },

    #[error("expected {expected} alpha samples for the field, got {actual}")]
    SampleCountMismatch { expected: usize, actual: usize },

    #[error("row {row} has width {actual}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Immutable width x height grid of solid pixels for one room.
///
/// Queries accept any integer coordinate. Outside the grid, columns left of 0
/// or right of `width - 1` are walls, rows above 0 or below `height - 1` are
/// open air so bodies can leave through the top or fall out of the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionField {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl CollisionField {
    /// A field with no solid pixels.
    pub fn empty(width: u32, height: u32) -> Result<Self, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::EmptyDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        })
    }

    /// Build from a row-major alpha channel; samples at or above `threshold`
    /// are solid.
    pub fn from_alpha(
        width: u32,
        height: u32,
        alpha: &[u8],
        threshold: u8,
    ) -> Result<Self, FieldError> {
        let mut field = Self::empty(width, height)?;
        let expected = field.cells.len();
        if alpha.len() != expected {
            return Err(FieldError::SampleCountMismatch {
                expected,
                actual: alpha.len(),
            });
        }
        for (cell, &a) in field.cells.iter_mut().zip(alpha) {
            *cell = a >= threshold;
        }
        Ok(field)
    }

    /// Build from text rows where `#` marks a solid pixel.
    pub fn from_ascii(rows: &[&str]) -> Result<Self, FieldError> {
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut field = Self::empty(width as u32, rows.len() as u32)?;
        for (y, row) in rows.iter().enumerate() {
            let actual = row.chars().count();
            if actual != width {
                return Err(FieldError::RaggedRow {
                    row: y,
                    expected: width,
                    actual,
                });
            }
            for (x, c) in row.chars().enumerate() {
                field.cells[y * width + x] = c == '#';
            }
        }
        Ok(field)
    }

    /// Mark an inclusive pixel rectangle solid. Used while a room is being
    /// assembled, before it is handed to the resolver.
    pub fn fill_rect(&mut self, left: i32, top: i32, right: i32, bottom: i32) {
        let x0 = left.max(0);
        let y0 = top.max(0);
        let x1 = right.min(self.width as i32 - 1);
        let y1 = bottom.min(self.height as i32 - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let idx = self.index(x, y);
                self.cells[idx] = true;
            }
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Point query with the out-of-bounds policy applied.
    #[inline]
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= self.width as i32 {
            return true;
        }
        if y < 0 || y >= self.height as i32 {
            return false;
        }
        self.cells[self.index(x, y)]
    }

    /// True if any pixel of row `y` between `x0` and `x1` (inclusive) is solid.
    pub fn row_hits(&self, y: i32, x0: i32, x1: i32) -> bool {
        let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        (lo..=hi).any(|x| self.is_solid(x, y))
    }

    /// True if any pixel of column `x` between `y0` and `y1` (inclusive) is solid.
    pub fn column_hits(&self, x: i32, y0: i32, y1: i32) -> bool {
        let (lo, hi) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        (lo..=hi).any(|y| self.is_solid(x, y))
    }
}
