use enum_dispatch::enum_dispatch;
use std::io::{self, Write};
use tracing::{debug, trace};

/// A sound to play in response to something happening in the game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Cue {
    Eat,
    GameOver,
}

impl Cue {
    /// Number of terminal bells to ring for the cue
    fn bells(self) -> usize {
        match self {
            Cue::Eat => 1,
            Cue::GameOver => 2,
        }
    }
}

/// Something that can play [`Cue`]s.  Playing is fire-and-forget: failures
/// are logged and otherwise ignored.
#[enum_dispatch]
pub(crate) trait AudioSink {
    fn play(&mut self, cue: Cue);
}

#[enum_dispatch(AudioSink)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Audio {
    TerminalBell,
    Mute,
}

impl Audio {
    pub(crate) fn new(sound: bool) -> Audio {
        if sound {
            TerminalBell.into()
        } else {
            Mute.into()
        }
    }
}

/// Plays cues by writing BEL characters to standard output
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct TerminalBell;

impl AudioSink for TerminalBell {
    fn play(&mut self, cue: Cue) {
        trace!(?cue, "Ringing terminal bell");
        let mut stdout = io::stdout().lock();
        let r = stdout
            .write_all(&b"\x07".repeat(cue.bells()))
            .and_then(|()| stdout.flush());
        if let Err(e) = r {
            debug!("Failed to ring terminal bell: {e}");
        }
    }
}

/// Plays nothing
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Mute;

impl AudioSink for Mute {
    fn play(&mut self, cue: Cue) {
        trace!(?cue, "Sound is off; not playing cue");
    }
}
