use error_chain::bail;
use smallvec::SmallVec;

use crate::cells::CompassPrimary;
use crate::errors::*;
use crate::units::{ColumnIndex, Height, RowIndex, Width};

pub type IndexSmallVec = SmallVec<[usize; 4]>;

/// Geometry of a rectangular maze whose cells are stored in row major order.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MazeDimensions {
    width: Width,
    height: Height,
    size: usize,
}

impl MazeDimensions {
    /// Fails with `InvalidDimensions` if either side is zero or the cell count overflows.
    pub fn new(width: Width, height: Height) -> Result<MazeDimensions> {
        let (Width(w), Height(h)) = (width, height);
        match w.checked_mul(h) {
            Some(size) if size > 0 => {
                Ok(MazeDimensions {
                    width,
                    height,
                    size,
                })
            }
            _ => bail!(ErrorKind::InvalidDimensions(w, h)),
        }
    }

    #[inline(always)]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> Height {
        self.height
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_valid_index(&self, index: usize) -> bool {
        index < self.size
    }

    #[inline]
    pub fn row_of(&self, index: usize) -> RowIndex {
        RowIndex(index / self.width.0)
    }

    #[inline]
    pub fn column_of(&self, index: usize) -> ColumnIndex {
        ColumnIndex(index % self.width.0)
    }

    /// Convert a row and column into a row major index.
    /// Returns None if the position lies outside the grid.
    pub fn index_of(&self, row: RowIndex, column: ColumnIndex) -> Option<usize> {
        let (RowIndex(r), ColumnIndex(c)) = (row, column);
        if r < self.height.0 && c < self.width.0 {
            Some(r * self.width.0 + c)
        } else {
            None
        }
    }

    /// The cell one step away in the given direction, if the grid has one there.
    pub fn neighbour_at_direction(&self, index: usize, direction: CompassPrimary) -> Option<usize> {
        if !self.is_valid_index(index) {
            return None;
        }

        let Width(w) = self.width;
        match direction {
            CompassPrimary::North => {
                if index >= w {
                    Some(index - w)
                } else {
                    None
                }
            }
            CompassPrimary::East => {
                if index % w != w - 1 {
                    Some(index + 1)
                } else {
                    None
                }
            }
            CompassPrimary::South => {
                let south = index + w;
                if south < self.size {
                    Some(south)
                } else {
                    None
                }
            }
            CompassPrimary::West => {
                if index % w != 0 {
                    Some(index - 1)
                } else {
                    None
                }
            }
        }
    }

    /// Cells to the North, East, South or West of a cell, not necessarily linked by a passage.
    pub fn neighbours(&self, index: usize) -> IndexSmallVec {
        CompassPrimary::ALL
            .iter()
            .filter_map(|dir| self.neighbour_at_direction(index, *dir))
            .collect()
    }

    /// Which direction leads from `a` to its neighbour `b`, if they are neighbours at all.
    pub fn direction_between(&self, a: usize, b: usize) -> Option<CompassPrimary> {
        CompassPrimary::ALL
            .iter()
            .cloned()
            .find(|dir| self.neighbour_at_direction(a, *dir) == Some(b))
    }

    #[inline]
    pub fn is_top_edge(&self, index: usize) -> bool {
        index < self.width.0
    }

    /// Note the bottom left corner is only a left edge under this rule.
    #[inline]
    pub fn is_bottom_edge(&self, index: usize) -> bool {
        index > self.size - self.width.0 && index < self.size
    }

    #[inline]
    pub fn is_left_edge(&self, index: usize) -> bool {
        index % self.width.0 == 0
    }

    #[inline]
    pub fn is_right_edge(&self, index: usize) -> bool {
        index % self.width.0 == self.width.0 - 1
    }

    pub fn is_edge(&self, index: usize) -> bool {
        self.is_top_edge(index) || self.is_right_edge(index) || self.is_bottom_edge(index) ||
        self.is_left_edge(index)
    }

    /// May the end of the maze sit on this cell? Only the right and bottom edges qualify.
    pub fn can_place_end(&self, index: usize) -> bool {
        self.is_right_edge(index) || self.is_bottom_edge(index)
    }
}
