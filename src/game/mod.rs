mod direction;
mod food;
mod grid;
mod snake;
pub(crate) use self::direction::Direction;
use self::food::place_food;
use self::grid::Grid;
use self::snake::Snake;
use crate::consts;
use crate::ticker::Ticker;
use crate::util::center_rect;
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};
use std::time::{Duration, Instant};
use tracing::info;

/// A game session: the snake, its food, the score, and the timer that drives
/// them.  The high score also lives here so that it can be compared against
/// at the end of each game.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Session<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,
    state: SessionState,
    score: u32,
    high_score: u32,
    snake: Snake,
    food: Option<Position>,
    ticker: Ticker,
    last_game: Option<GameOver>,
}

impl<R> Session<R> {
    /// Create an idle session.  No game is in progress until
    /// [`Session::start()`] is called.
    pub(crate) fn new(high_score: u32, rng: R) -> Session<R> {
        Session {
            rng,
            grid: Grid::from_canvas(consts::CANVAS_SIZE, consts::CELL_SIZE),
            state: SessionState::Idle,
            score: 0,
            high_score,
            snake: Snake::initial(),
            food: None,
            ticker: Ticker::new(consts::TICK_PERIOD),
            last_game: None,
        }
    }

    pub(crate) fn state(&self) -> SessionState {
        self.state
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Return how the most recent game ended, if the session is over
    #[cfg(test)]
    pub(crate) fn last_game(&self) -> Option<GameOver> {
        self.last_game
    }

    /// Return how long until the next step is due, or `None` if no game is
    /// running
    pub(crate) fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.remaining(now)
    }

    /// Ask the snake to turn.  Ignored unless a game is running; refused if
    /// it would reverse the snake's current heading.  Returns whether the
    /// request was accepted.
    pub(crate) fn steer(&mut self, direction: Direction) -> bool {
        self.running() && self.snake.steer(direction)
    }

    fn running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// End the current game.  Does nothing (and returns `None`) if no game is
    /// running, so calling it again after a game has ended neither changes
    /// the state nor counts the score twice.
    fn stop(&mut self, ending: Ending) -> Option<GameOver> {
        self.ticker.cancel();
        if !self.running() {
            return None;
        }
        self.state = SessionState::Over;
        let new_record = self.score > self.high_score;
        if new_record {
            self.high_score = self.score;
        }
        let outcome = GameOver {
            score: self.score,
            new_record,
            ending,
        };
        self.last_game = Some(outcome);
        info!(
            score = self.score,
            new_record,
            ?ending,
            length = self.snake.len(),
            "Game over"
        );
        Some(outcome)
    }
}

impl<R: Rng> Session<R> {
    /// Start a new game, abandoning any game in progress
    pub(crate) fn start(&mut self) {
        self.ticker.cancel();
        self.score = 0;
        self.snake = Snake::initial();
        self.food = place_food(&mut self.rng, self.grid, &self.snake);
        self.last_game = None;
        self.state = SessionState::Running;
        self.ticker.start(Instant::now());
        info!(high_score = self.high_score, "Starting new game");
    }

    /// Called when the timer reaches its deadline: schedule the next deadline
    /// and advance the game by one step
    pub(crate) fn on_timer(&mut self, now: Instant) -> Option<Tick> {
        self.ticker.fire(now);
        self.tick()
    }

    /// Advance the game by one step.  Returns `None` if no game is running.
    pub(crate) fn tick(&mut self) -> Option<Tick> {
        if !self.running() {
            return None;
        }
        let heading = self.snake.commit_heading();
        let Some(head) = heading.advance(self.snake.head(), self.grid) else {
            return self.stop(Ending::Wall).map(Tick::Over);
        };
        // The tail has not moved out of the way yet, so running into it is
        // fatal too.
        if self.snake.contains(head) {
            return self.stop(Ending::SelfCollision).map(Tick::Over);
        }
        let ate = self.food == Some(head);
        self.snake.advance(head, ate);
        if ate {
            self.score = self.score.saturating_add(consts::FOOD_POINTS);
            self.food = place_food(&mut self.rng, self.grid, &self.snake);
            if self.food.is_none() {
                return self.stop(Ending::BoardFull).map(Tick::Over);
            }
            Some(Tick::Ate)
        } else {
            Some(Tick::Moved)
        }
    }
}

impl<R> Widget for &Session<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [score_area, board_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);
        buf.set_style(score_area, consts::SCORE_BAR_STYLE);
        Line::from(format!(" Score: {}", self.score)).render(score_area, buf);
        Line::from(format!("High Score: {} ", self.high_score))
            .right_aligned()
            .render(score_area, buf);

        let block_size = Size {
            width: self
                .grid
                .width
                .saturating_mul(consts::CELL_WIDTH)
                .saturating_add(2),
            height: self.grid.height.saturating_add(2),
        };
        let block_area = center_rect(board_area, block_size);
        Block::bordered().render(block_area, buf);

        let mut board = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        if let Some(pos) = self.food {
            board.draw_cell(pos, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        if self.state != SessionState::Idle {
            for (i, &pos) in self.snake.cells().iter().enumerate().skip(1) {
                let style = if i % 2 == 0 {
                    consts::BODY_EVEN_STYLE
                } else {
                    consts::BODY_ODD_STYLE
                };
                board.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, style);
            }
            // A crashed snake stays where it was, so mark its head
            let crashed = self
                .last_game
                .is_some_and(|g| g.ending != Ending::BoardFull);
            if crashed {
                board.draw_cell(
                    self.snake.head(),
                    consts::COLLISION_SYMBOL,
                    consts::COLLISION_STYLE,
                );
            } else {
                board.draw_cell(
                    self.snake.head(),
                    self.snake.head_symbol(),
                    consts::HEAD_STYLE,
                );
            }
        }

        Line::from_iter([
            Span::raw(" Move ("),
            Span::styled("← ↓ ↑ →", consts::KEY_STYLE),
            Span::raw(" / "),
            Span::styled("a s w d", consts::KEY_STYLE),
            Span::raw(" / "),
            Span::styled("h j k l", consts::KEY_STYLE),
            Span::raw(") — Quit ("),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(")"),
        ])
        .render(help_area, buf);
    }
}

/// A view of the grid inside a `Buffer`, with each cell
/// [`CELL_WIDTH`][consts::CELL_WIDTH] columns wide
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = pos
            .x
            .checked_mul(consts::CELL_WIDTH)
            .and_then(|x| self.area.x.checked_add(x))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SessionState {
    /// No game has been started yet
    Idle,
    Running,
    /// The most recent game has ended and no new one has been started
    Over,
}

/// The result of advancing a running game by one step
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Tick {
    /// The snake moved without eating
    Moved,
    /// The snake ate the food and grew
    Ate,
    /// The game ended
    Over(GameOver),
}

/// Summary of a finished game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GameOver {
    pub(crate) score: u32,
    /// Whether `score` beat the previous high score
    pub(crate) new_record: bool,
    pub(crate) ending: Ending,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Ending {
    /// The snake ran into the edge of the grid
    Wall,
    /// The snake ran into its own body
    SelfCollision,
    /// The snake filled the grid, leaving no room for more food
    BoardFull,
}
