use super::direction::Direction;
use crate::consts;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// The snake: the cells it occupies and where it is going
///
/// All positions are relative to the top-left corner of the grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The cells occupied by the snake, head first
    pub(super) cells: VecDeque<Position>,

    /// The direction the snake moved in on the most recent tick
    pub(super) heading: Direction,

    /// The direction the snake will move in on the next tick
    pub(super) pending: Direction,
}

impl Snake {
    /// Create a snake occupying `cells` (head first) and moving in
    /// `heading`.
    ///
    /// # Panics
    ///
    /// Panics if `cells` is empty.
    pub(super) fn new<I: IntoIterator<Item = Position>>(cells: I, heading: Direction) -> Snake {
        let cells = VecDeque::from_iter(cells);
        assert!(!cells.is_empty(), "a snake must occupy at least one cell");
        Snake {
            cells,
            heading,
            pending: heading,
        }
    }

    /// Create the snake that every session starts with: three cells long and
    /// heading east
    pub(super) fn initial() -> Snake {
        Snake::new(consts::INITIAL_SNAKE, Direction::East)
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Position {
        self.cells[0]
    }

    pub(super) fn cells(&self) -> &VecDeque<Position> {
        &self.cells
    }

    pub(super) fn len(&self) -> usize {
        self.cells.len()
    }

    pub(super) fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    #[cfg(test)]
    pub(super) fn heading(&self) -> Direction {
        self.heading
    }

    /// Return the glyph to use for drawing the snake's head
    pub(super) fn head_symbol(&self) -> char {
        match self.heading {
            Direction::North => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Direction::South => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Direction::East => consts::SNAKE_HEAD_EAST_SYMBOL,
            Direction::West => consts::SNAKE_HEAD_WEST_SYMBOL,
        }
    }

    /// Request that the snake turn to `direction` on the next tick.  The
    /// request is refused if it would reverse the heading the snake last
    /// moved in; otherwise it replaces any earlier request.  Returns whether
    /// the request was accepted.
    pub(super) fn steer(&mut self, direction: Direction) -> bool {
        if direction == self.heading.reverse() {
            false
        } else {
            self.pending = direction;
            true
        }
    }

    /// Make the pending direction the snake's heading and return it
    pub(super) fn commit_heading(&mut self) -> Direction {
        self.heading = self.pending;
        self.heading
    }

    /// Move the head to `head`.  Unless `grow` is true, the last cell of the
    /// tail is vacated so that the length stays the same.
    pub(super) fn advance(&mut self, head: Position, grow: bool) {
        self.cells.push_front(head);
        if !grow {
            let _ = self.cells.pop_back();
        }
    }
}
