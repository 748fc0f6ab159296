mod app;
mod audio;
mod command;
mod config;
mod consts;
mod game;
mod highscore;
mod logging;
mod overlay;
mod ticker;
mod util;
mod warning;
use crate::app::App;
use crate::audio::Audio;
use crate::config::Config;
use crate::game::Session;
use crate::warning::Warning;
use anyhow::Context;
use lexopt::{Arg, Parser};
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

const USAGE: &str = "\
Usage: heartsnake [-c|--config <file>] [--log-file <file>]

Play snake in the terminal, eating hearts.

Options:
  -c, --config <file>   Read configuration from the given file
      --log-file <file> Write log messages to the given file
  -h, --help            Show this help and exit
  -V, --version         Show the program version and exit
";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Arguments {
    Run {
        config: Option<PathBuf>,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Arguments {
    fn from_parser(mut parser: Parser) -> Result<Arguments, lexopt::Error> {
        let mut config = None;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Short('h') | Arg::Long("help") => return Ok(Arguments::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Arguments::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Arguments::Run { config, log_file })
    }
}

fn main() -> ExitCode {
    match Arguments::from_parser(Parser::from_env()) {
        Ok(Arguments::Run { config, log_file }) => match run(config, log_file) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("heartsnake: {e:?}");
                ExitCode::from(2)
            }
        },
        Ok(Arguments::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Arguments::Version) => {
            println!("heartsnake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("heartsnake: {e}\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn run(config_path: Option<PathBuf>, log_file: Option<PathBuf>) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => Config::load(&path, false)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => match Config::default_path() {
            Ok(path) => Config::load(&path, true).with_context(|| {
                format!("failed to load configuration from {}", path.display())
            })?,
            Err(_) => Config::default(),
        },
    };
    let log_file = log_file.or_else(|| config.files.log_file.clone());
    logging::init(log_file.as_deref())?;
    info!(version = env!("CARGO_PKG_VERSION"), "Starting heartsnake");

    let store = config.high_score_store();
    let (high_score, warning) = match store.load() {
        Ok(high_score) => (high_score, None),
        Err(e) => {
            warn!(error = ?e, "Failed to load high score");
            (0, Some(Warning::from(e)))
        }
    };
    let session = Session::new(high_score, rand::rng());
    let mut app = App::new(session, Audio::new(config.sound), store);
    if let Some(warning) = warning {
        app = app.with_warning(warning);
    }

    let terminal = ratatui::init();
    let r = app.run(terminal);
    ratatui::restore();
    r.context("terminal I/O failed")?;
    info!("Exiting");
    Ok(())
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.chain()
        .filter_map(|cause| cause.downcast_ref::<std::io::Error>())
        .any(|ioerr| ioerr.kind() == ErrorKind::BrokenPipe)
}
