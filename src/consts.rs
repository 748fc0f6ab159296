//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::{Position, Size},
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(120);

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Nominal size of the playing field, in the same units as [`CELL_SIZE`]
pub(crate) const CANVAS_SIZE: Size = Size {
    width: 400,
    height: 400,
};

/// Nominal size of one grid cell.  The number of cells along each axis is
/// `CANVAS_SIZE / CELL_SIZE`, rounded down.
pub(crate) const CELL_SIZE: u16 = 20;

/// Number of terminal columns used to draw one grid cell, so that cells come
/// out roughly square
pub(crate) const CELL_WIDTH: u16 = 2;

/// Points awarded for each piece of food eaten
pub(crate) const FOOD_POINTS: u32 = 10;

/// Cells occupied by the snake at the start of a session, head first
pub(crate) const INITIAL_SNAKE: [Position; 3] = [
    Position { x: 10, y: 10 },
    Position { x: 9, y: 10 },
    Position { x: 8, y: 10 },
];

/// Number of random cells tried when placing food before falling back to a
/// scan of the grid
pub(crate) const MAX_FOOD_ATTEMPTS: usize = 64;

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = '▲';

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = '▼';

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '▶';

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '◀';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '●';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '♥';

/// Glyph for the snake's head when it's collided with a wall or itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head
pub(crate) const HEAD_STYLE: Style = Style::new()
    .fg(Color::Rgb(0xFF, 0x5C, 0x8D))
    .add_modifier(Modifier::BOLD);

/// Style for the even-numbered cells of the snake's body, counting the head
/// as zero
pub(crate) const BODY_EVEN_STYLE: Style = Style::new().fg(Color::Rgb(0xFF, 0x8D, 0xA1));

/// Style for the odd-numbered cells of the snake's body
pub(crate) const BODY_ODD_STYLE: Style = Style::new().fg(Color::Rgb(0xFF, 0xB6, 0xC1));

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::Rgb(0xFF, 0x00, 0x55));

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);
