use crate::command::Command;
use crate::consts;
use crate::game::GameOver;
use crate::util::{center_rect, get_display_area, EnumExt};
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// The pop-up menu shown over the board while no game is running
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Overlay {
    banner: Banner,

    /// The currently-selected item in the menu
    selection: MenuOpt,
}

impl Overlay {
    const WIDTH: u16 = 26;
    const HEIGHT: u16 = 6;

    pub(crate) fn new(banner: Banner) -> Overlay {
        Overlay {
            banner,
            selection: MenuOpt::min(),
        }
    }

    /// Handle a command.  Returns `Some` if the user made a choice.
    pub(crate) fn handle_command(&mut self, cmd: Command) -> Option<MenuOpt> {
        match cmd {
            Command::N | Command::R | Command::Space => return Some(MenuOpt::Play),
            Command::Q | Command::Quit => return Some(MenuOpt::Quit),
            Command::Enter => return Some(self.selection),
            Command::Up => {
                if let Some(opt) = self.selection.prev() {
                    self.selection = opt;
                }
            }
            Command::Down => {
                if let Some(opt) = self.selection.next() {
                    self.selection = opt;
                }
            }
            Command::Next => self.selection = self.selection.next().unwrap_or_else(MenuOpt::min),
            Command::Prev => self.selection = self.selection.prev().unwrap_or_else(MenuOpt::max),
            Command::Home => self.selection = MenuOpt::min(),
            Command::End => self.selection = MenuOpt::max(),
            _ => (),
        }
        None
    }
}

/// What the overlay announces
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Banner {
    /// No game has been played yet
    Welcome,
    GameOver { score: u32 },
    NewRecord { score: u32 },
}

impl Banner {
    fn title(self) -> &'static str {
        match self {
            Banner::Welcome => " HEART SNAKE ",
            Banner::GameOver { .. } => " GAME OVER ",
            Banner::NewRecord { .. } => " NEW RECORD! ",
        }
    }

    fn message(self) -> String {
        match self {
            Banner::Welcome => String::from("Collect the hearts!"),
            Banner::GameOver { score } | Banner::NewRecord { score } => {
                format!("Final score: {score}")
            }
        }
    }
}

impl From<GameOver> for Banner {
    fn from(outcome: GameOver) -> Banner {
        if outcome.new_record {
            Banner::NewRecord {
                score: outcome.score,
            }
        } else {
            Banner::GameOver {
                score: outcome.score,
            }
        }
    }
}

/// The choices in the overlay menu
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum MenuOpt {
    /// Start a new game
    Play,

    /// Quit the application
    Quit,
}

impl MenuOpt {
    /// Render the option as a `Line` for display in the overlay.  If
    /// `selected` is `true`, this option is the currently-selected one.
    fn to_line(self, banner: Banner, selected: bool) -> Line<'static> {
        let mut line = Line::default();
        if selected {
            line.push_span("» ");
        } else {
            line.push_span("  ");
        }
        let (label, key) = match (self, banner) {
            (MenuOpt::Play, Banner::Welcome) => ("Start (", "n"),
            (MenuOpt::Play, _) => ("Play Again (", "r"),
            (MenuOpt::Quit, _) => ("Quit (", "q"),
        };
        line.push_span(label);
        line.push_span(Span::styled(key, consts::KEY_STYLE));
        line.push_span(")");
        if selected {
            line = line.style(consts::MENU_SELECTION_STYLE);
        }
        line
    }
}

impl Widget for &Overlay {
    /*
     * ┌───── NEW RECORD! ──────┐
     * │    Final score: 130    │
     * │                        │
     * │ » Play Again (r)       │
     * │   Quit (q)             │
     * └────────────────────────┘
     */

    // `area` is the area of the entire display, as for `Warning`.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block_area = center_rect(
            get_display_area(area),
            Size {
                width: Overlay::WIDTH,
                height: Overlay::HEIGHT,
            },
        );
        let block = Block::bordered()
            .title(self.banner.title())
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(block_area);
        Clear.render(block_area, buf);
        block.render(block_area, buf);
        let mut rows = inner.rows();
        if let Some(row) = rows.next() {
            Line::from(self.banner.message()).centered().render(row, buf);
        }
        for (opt, row) in MenuOpt::iter().zip(rows.skip(1)) {
            opt.to_line(self.banner, self.selection == opt)
                .render(row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Ending;
    use rstest::rstest;

    #[test]
    fn banner_from_game_over() {
        let outcome = GameOver {
            score: 40,
            new_record: false,
            ending: Ending::Wall,
        };
        assert_eq!(Banner::from(outcome), Banner::GameOver { score: 40 });
        let outcome = GameOver {
            score: 50,
            new_record: true,
            ending: Ending::SelfCollision,
        };
        assert_eq!(Banner::from(outcome), Banner::NewRecord { score: 50 });
    }

    #[rstest]
    #[case(Command::Enter, Some(MenuOpt::Play))]
    #[case(Command::N, Some(MenuOpt::Play))]
    #[case(Command::R, Some(MenuOpt::Play))]
    #[case(Command::Space, Some(MenuOpt::Play))]
    #[case(Command::Q, Some(MenuOpt::Quit))]
    #[case(Command::Quit, Some(MenuOpt::Quit))]
    #[case(Command::Left, None)]
    #[case(Command::Up, None)]
    fn fresh_overlay_commands(#[case] cmd: Command, #[case] outcome: Option<MenuOpt>) {
        let mut overlay = Overlay::new(Banner::Welcome);
        assert_eq!(overlay.handle_command(cmd), outcome);
    }

    #[test]
    fn navigation() {
        let mut overlay = Overlay::new(Banner::GameOver { score: 0 });
        assert_eq!(overlay.handle_command(Command::Up), None);
        assert_eq!(overlay.selection, MenuOpt::Play);
        assert_eq!(overlay.handle_command(Command::Down), None);
        assert_eq!(overlay.selection, MenuOpt::Quit);
        assert_eq!(overlay.handle_command(Command::Down), None);
        assert_eq!(overlay.selection, MenuOpt::Quit);
        assert_eq!(overlay.handle_command(Command::Next), None);
        assert_eq!(overlay.selection, MenuOpt::Play);
        assert_eq!(overlay.handle_command(Command::Prev), None);
        assert_eq!(overlay.selection, MenuOpt::Quit);
        assert_eq!(overlay.handle_command(Command::Home), None);
        assert_eq!(overlay.selection, MenuOpt::Play);
        assert_eq!(overlay.handle_command(Command::End), None);
        assert_eq!(overlay.handle_command(Command::Enter), Some(MenuOpt::Quit));
    }

    #[test]
    fn render_new_record() {
        let overlay = Overlay::new(Banner::NewRecord { score: 130 });
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        overlay.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "                           ┌───── NEW RECORD! ──────┐                           ",
            "                           │    Final score: 130    │                           ",
            "                           │                        │                           ",
            "                           │ » Play Again (r)       │                           ",
            "                           │   Quit (q)             │                           ",
            "                           └────────────────────────┘                           ",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
        ]);
        expected.set_style(Rect::new(29, 12, 22, 1), consts::MENU_SELECTION_STYLE);
        expected.set_style(Rect::new(43, 12, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(37, 13, 1, 1), consts::KEY_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn render_welcome_quit_selected() {
        let mut overlay = Overlay::new(Banner::Welcome);
        let _ = overlay.handle_command(Command::End);
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        overlay.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "                           ┌───── HEART SNAKE ──────┐                           ",
            "                           │  Collect the hearts!   │                           ",
            "                           │                        │                           ",
            "                           │   Start (n)            │                           ",
            "                           │ » Quit (q)             │                           ",
            "                           └────────────────────────┘                           ",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
        ]);
        expected.set_style(Rect::new(29, 13, 22, 1), consts::MENU_SELECTION_STYLE);
        expected.set_style(Rect::new(38, 12, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(37, 13, 1, 1), consts::KEY_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }
}
