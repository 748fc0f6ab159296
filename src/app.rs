use crate::audio::{Audio, AudioSink, Cue};
use crate::command::Command;
use crate::game::{GameOver, Session, SessionState, Tick};
use crate::highscore::HighScoreStore;
use crate::overlay::{Banner, MenuOpt, Overlay};
use crate::util::get_display_area;
use crate::warning::{Warning, WarningOutcome};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{backend::Backend, buffer::Buffer, layout::Rect, widgets::Widget, Terminal};
use std::io;
use std::time::Instant;
use tracing::{info, warn};

/// The whole program: a game session plus the collaborators that react to
/// it
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    session: Session<R>,
    overlay: Overlay,
    audio: Audio,
    store: HighScoreStore,
    warning: Option<Warning>,
    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(session: Session<R>, audio: Audio, store: HighScoreStore) -> App<R> {
        App {
            session,
            overlay: Overlay::new(Banner::Welcome),
            audio,
            store,
            warning: None,
            quitting: false,
        }
    }

    /// Show `warning` in a pop-up until the user dismisses it
    pub(crate) fn with_warning(mut self, warning: Warning) -> App<R> {
        self.warning = Some(warning);
        self
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        info!(
            score = self.session.score(),
            high_score = self.session.high_score(),
            state = ?self.session.state(),
            "Quitting"
        );
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    /// Wait for either an input event or the next tick of the game, and
    /// handle whichever comes first
    fn process_input(&mut self) -> io::Result<()> {
        match self.session.time_until_tick(Instant::now()) {
            Some(wait) => {
                if poll(wait)? {
                    self.handle_event(read()?);
                } else {
                    self.on_timer(Instant::now());
                }
            }
            None => self.handle_event(read()?),
        }
        Ok(())
    }

    fn on_timer(&mut self, now: Instant) {
        if let Some(tick) = self.session.on_timer(now) {
            self.handle_tick(tick);
        }
    }

    fn handle_tick(&mut self, tick: Tick) {
        match tick {
            Tick::Moved => (),
            Tick::Ate => self.audio.play(Cue::Eat),
            Tick::Over(outcome) => {
                self.audio.play(Cue::GameOver);
                self.game_over(outcome);
            }
        }
    }

    fn game_over(&mut self, outcome: GameOver) {
        self.overlay = Overlay::new(Banner::from(outcome));
        if outcome.new_record {
            info!(high_score = outcome.score, "Saving new high score");
            if let Err(e) = self.store.save(outcome.score) {
                warn!(error = ?e, "Failed to save high score");
                self.warning = Some(Warning::from(e));
            }
        }
    }

    fn handle_event(&mut self, event: Event) {
        let Some(cmd) = event
            .as_key_press_event()
            .and_then(Command::from_key_event)
        else {
            return;
        };
        if let Some(warning) = self.warning.as_mut() {
            match warning.handle_command(cmd) {
                Some(WarningOutcome::Dismissed) => self.warning = None,
                Some(WarningOutcome::Quit) => self.quitting = true,
                None => (),
            }
            return;
        }
        match self.session.state() {
            SessionState::Running => {
                if matches!(cmd, Command::Q | Command::Quit) {
                    self.quitting = true;
                } else if let Some(direction) = cmd.direction() {
                    let _ = self.session.steer(direction);
                }
            }
            SessionState::Idle | SessionState::Over => match self.overlay.handle_command(cmd) {
                Some(MenuOpt::Play) => self.session.start(),
                Some(MenuOpt::Quit) => self.quitting = true,
                None => (),
            },
        }
    }
}

impl<R> Widget for &App<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.session.render(get_display_area(area), buf);
        if self.session.state() != SessionState::Running {
            self.overlay.render(area, buf);
        }
        if let Some(ref warning) = self.warning {
            warning.render(area, buf);
        }
    }
}
