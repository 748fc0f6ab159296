use ratatui::layout::{Position, Positions, Rect, Size};

/// The fixed playing field: `width` × `height` cells with the origin in the
/// top-left corner
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Grid {
    pub(super) width: u16,
    pub(super) height: u16,
}

impl Grid {
    /// Derive the number of cells along each axis from the size of the
    /// drawing surface and the size of a single cell, rounding down
    pub(super) const fn from_canvas(canvas: Size, cell_size: u16) -> Grid {
        Grid {
            width: canvas.width / cell_size,
            height: canvas.height / cell_size,
        }
    }

    pub(super) fn contains(self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub(super) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Iterate over every cell, row by row
    pub(super) fn positions(self) -> Positions {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }

    pub(super) fn cell_count(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}
