use crate::command::Command;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect, Size},
    text::{Line, Text},
    widgets::{
        block::{Block, Padding},
        Clear, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};
use std::borrow::Cow;

/// A pop-up describing an error, shown on top of the game until dismissed
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Warning {
    lines: Vec<String>,
    scroll_offset: usize,
    max_scroll: usize,
}

impl Warning {
    const MAX_LINES: u16 = 16;
    const TEXT_WIDTH: u16 = 48;
    const WIDTH: u16 = Self::TEXT_WIDTH + 4;

    pub(crate) fn handle_command(&mut self, cmd: Command) -> Option<WarningOutcome> {
        match (cmd, self.scrolling()) {
            (Command::Enter, _) => return Some(WarningOutcome::Dismissed),
            (Command::Quit, _) => return Some(WarningOutcome::Quit),
            (Command::Up, true) => {
                if self.scroll_offset > 0 {
                    self.scroll_offset -= 1;
                }
            }
            (Command::Down, true) => {
                if self.scroll_offset < self.max_scroll.saturating_sub(1) {
                    self.scroll_offset += 1;
                }
            }
            _ => (),
        }
        None
    }

    fn scrolling(&self) -> bool {
        self.lines.len() > usize::from(Self::MAX_LINES)
    }

    /// Build a warning from an error message followed by the messages of its
    /// chain of causes
    fn from_error_messages(msgs: Vec<String>) -> Self {
        let Some((first, causes)) = msgs.split_first() else {
            return Warning {
                lines: vec![String::from("Something went wrong.")],
                scroll_offset: 0,
                max_scroll: 0,
            };
        };
        let wrap = |text: &str, initial_indent: &str, subsequent_indent: &str| {
            let opts = textwrap::Options::new(usize::from(Warning::TEXT_WIDTH))
                .break_words(true)
                .initial_indent(initial_indent)
                .subsequent_indent(subsequent_indent);
            textwrap::wrap(text, opts)
                .into_iter()
                .map(Cow::into_owned)
                .collect::<Vec<_>>()
        };
        let mut lines = wrap(first, "", "");
        match causes {
            [] => (),
            [cause] => {
                lines.push(String::new());
                lines.push(String::from("Caused by:"));
                lines.extend(wrap(cause, "    ", "    "));
            }
            _ => {
                lines.push(String::new());
                lines.push(String::from("Caused by:"));
                for (i, m) in causes.iter().enumerate() {
                    let init_indent = format!("{i:>5}: ");
                    lines.extend(wrap(m, &init_indent, "       "));
                }
            }
        }
        let max_scroll = lines
            .len()
            .saturating_sub(usize::from(Warning::MAX_LINES) - 1);
        Warning {
            lines,
            scroll_offset: 0,
            max_scroll,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum WarningOutcome {
    Dismissed,
    Quit,
}

impl<E: std::error::Error> From<E> for Warning {
    fn from(e: E) -> Warning {
        let mut msgs = vec![e.to_string()];
        let mut source = e.source();
        while let Some(src) = source {
            msgs.push(src.to_string());
            source = src.source();
        }
        Warning::from_error_messages(msgs)
    }
}

impl Widget for &Warning {
    // `area` is here the area of the entire display in which the program is
    // drawing, not the area for just the widget proper.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = u16::try_from(self.lines.len())
            .unwrap_or(u16::MAX)
            .min(Warning::MAX_LINES)
            .saturating_add(4);
        let block_area = center_rect(
            area,
            Size {
                width: Warning::WIDTH.saturating_add(u16::from(self.scrolling()) * 2),
                height,
            },
        );
        let block = Block::bordered()
            .title(" WARNING ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));
        let [text_area, ok_area] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
            .flex(Flex::Start)
            .spacing(1)
            .areas(block.inner(block_area));
        Clear.render(block_area, buf);
        block.render(block_area, buf);
        if self.scrolling() {
            let [text_area, scrollbar_area] =
                Layout::horizontal([Constraint::Fill(1), Constraint::Length(1)])
                    .flex(Flex::Start)
                    .spacing(1)
                    .areas(text_area);
            Text::from_iter(
                self.lines
                    .iter()
                    .skip(self.scroll_offset)
                    .take(usize::from(Warning::MAX_LINES))
                    .map(String::as_str),
            )
            .render(text_area, buf);
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .track_symbol(Some(ratatui::symbols::shade::MEDIUM));
            let mut scroll_state =
                ScrollbarState::new(self.max_scroll).position(self.scroll_offset);
            scrollbar.render(scrollbar_area, buf, &mut scroll_state);
        } else {
            Text::from_iter(self.lines.iter().map(String::as_str)).render(text_area, buf);
        }

        Line::from("[OK]").centered().render(ok_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("Failed to read high score from disk")]
    struct Outer(#[source] Middle);

    #[derive(Debug, Error)]
    #[error("failed to read high score file")]
    struct Middle(#[source] std::io::Error);

    #[test]
    fn from_error_chain() {
        let e = Outer(Middle(std::io::Error::from(
            std::io::ErrorKind::PermissionDenied,
        )));
        let warning = Warning::from(e);
        assert_eq!(warning.lines[0], "Failed to read high score from disk");
        assert_eq!(warning.lines[2], "Caused by:");
        assert_eq!(warning.lines[3], "    0: failed to read high score file");
        assert!(warning.lines[4].starts_with("    1: "));
        assert_eq!(warning.lines.len(), 5);
        assert!(!warning.scrolling());
    }

    #[test]
    fn dismiss_and_quit() {
        let mut warning = Warning::from_error_messages(vec![String::from("Oops")]);
        assert_eq!(warning.handle_command(Command::Down), None);
        assert_eq!(warning.scroll_offset, 0);
        assert_eq!(
            warning.handle_command(Command::Enter),
            Some(WarningOutcome::Dismissed)
        );
        assert_eq!(
            warning.handle_command(Command::Quit),
            Some(WarningOutcome::Quit)
        );
    }

    #[test]
    fn scroll_long_warning() {
        let msgs = (0..20).map(|i| format!("cause number {i}")).collect::<Vec<_>>();
        let mut warning = Warning::from_error_messages(msgs);
        assert!(warning.scrolling());
        assert_eq!(warning.handle_command(Command::Up), None);
        assert_eq!(warning.scroll_offset, 0);
        for _ in 0..100 {
            let _ = warning.handle_command(Command::Down);
        }
        assert_eq!(warning.scroll_offset, warning.max_scroll - 1);
        let _ = warning.handle_command(Command::Up);
        assert_eq!(warning.scroll_offset, warning.max_scroll - 2);
    }

    #[test]
    fn render_no_cause() {
        let warning = Warning::from_error_messages(vec![String::from(
            "Failed to save high score to disk",
        )]);
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        warning.render(area, &mut buffer);
        let expected = Buffer::with_lines([
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "              ┌──────────────────── WARNING ─────────────────────┐              ",
            "              │ Failed to save high score to disk                │              ",
            "              │                                                  │              ",
            "              │                       [OK]                       │              ",
            "              └──────────────────────────────────────────────────┘              ",
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
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn render_one_cause() {
        let warning = Warning::from_error_messages(vec![
            String::from("Failed to read high score from disk"),
            String::from("failed to deserialize high score"),
        ]);
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        warning.render(area, &mut buffer);
        let expected = Buffer::with_lines([
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "              ┌──────────────────── WARNING ─────────────────────┐              ",
            "              │ Failed to read high score from disk              │              ",
            "              │                                                  │              ",
            "              │ Caused by:                                       │              ",
            "              │     failed to deserialize high score             │              ",
            "              │                                                  │              ",
            "              │                       [OK]                       │              ",
            "              └──────────────────────────────────────────────────┘              ",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
        ]);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn render_two_causes() {
        let warning = Warning::from_error_messages(vec![
            String::from("Failed to read high score from disk"),
            String::from("failed to read high score file"),
            String::from("Permission denied (os error 13)"),
        ]);
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        warning.render(area, &mut buffer);
        let expected = Buffer::with_lines([
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "              ┌──────────────────── WARNING ─────────────────────┐              ",
            "              │ Failed to read high score from disk              │              ",
            "              │                                                  │              ",
            "              │ Caused by:                                       │              ",
            "              │     0: failed to read high score file            │              ",
            "              │     1: Permission denied (os error 13)           │              ",
            "              │                                                  │              ",
            "              │                       [OK]                       │              ",
            "              └──────────────────────────────────────────────────┘              ",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
        ]);
        pretty_assertions::assert_eq!(buffer, expected);
    }
}
