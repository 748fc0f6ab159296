use super::grid::Grid;
use ratatui::layout::Position;

/// A heading on the grid.  North is towards row 0.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Return the cell one step from `pos` in this direction, or `None` if
    /// that step would leave `grid`
    pub(super) fn advance(self, pos: Position, grid: Grid) -> Option<Position> {
        let Position { mut x, mut y } = pos;
        match self {
            Direction::North => y = y.checked_sub(1)?,
            Direction::East => x = x.checked_add(1)?,
            Direction::South => y = y.checked_add(1)?,
            Direction::West => x = x.checked_sub(1)?,
        }
        let pos = Position { x, y };
        grid.contains(pos).then_some(pos)
    }

    pub(super) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const GRID: Grid = Grid {
        width: 10,
        height: 15,
    };

    #[rstest]
    #[case(Direction::North, Position::new(2, 7), Some(Position::new(2, 6)))]
    #[case(Direction::South, Position::new(2, 7), Some(Position::new(2, 8)))]
    #[case(Direction::East, Position::new(2, 7), Some(Position::new(3, 7)))]
    #[case(Direction::West, Position::new(2, 7), Some(Position::new(1, 7)))]
    #[case(Direction::North, Position::new(2, 0), None)]
    #[case(Direction::South, Position::new(2, 14), None)]
    #[case(Direction::East, Position::new(9, 7), None)]
    #[case(Direction::West, Position::new(0, 7), None)]
    #[case(Direction::East, Position::new(u16::MAX, 7), None)]
    fn test_direction_advance(
        #[case] d: Direction,
        #[case] pos: Position,
        #[case] r: Option<Position>,
    ) {
        assert_eq!(d.advance(pos, GRID), r);
    }

    #[rstest]
    #[case(Direction::North, Direction::South)]
    #[case(Direction::East, Direction::West)]
    #[case(Direction::South, Direction::North)]
    #[case(Direction::West, Direction::East)]
    fn test_reverse(#[case] d: Direction, #[case] rev: Direction) {
        assert_eq!(d.reverse(), rev);
        assert_eq!(rev.reverse(), d);
    }
}
