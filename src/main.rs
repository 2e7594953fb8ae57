//! Stone Snake entry point
//!
//! Loads settings, sets up logging and the terminal, and runs the game loop.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use crossterm::event::{self, Event};

use stone_snake::platform::{Command, Pacer, map_key};
use stone_snake::renderer::{TerminalRenderer, TerminalSession};
use stone_snake::sim::{GameState, TickInput, TickReport, tick};
use stone_snake::{GlyphStyle, Result, ScoreBoard, ScoreLog, Settings};

#[derive(Parser)]
#[command(name = "stone-snake", version, about = "Snake with apples, inedible apples and stones")]
struct Args {
    /// Settings file (JSON)
    #[arg(long, default_value = "stone-snake.json")]
    settings: PathBuf,
    /// Fixed RNG seed
    #[arg(long)]
    seed: Option<u64>,
    /// Score log file
    #[arg(long)]
    score_log: Option<PathBuf>,
    /// Cell style: blocks or ascii
    #[arg(long)]
    glyphs: Option<String>,
    /// Write the effective settings back to the settings file
    #[arg(long)]
    save_settings: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (mut settings, settings_outcome) = Settings::load_or_default(&args.settings);
    if let Some(path) = args.score_log {
        settings.score_log = path;
    }
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    let unknown_glyphs = match args.glyphs.as_deref() {
        Some(name) => match GlyphStyle::from_str(name) {
            Some(style) => {
                settings.glyphs = style;
                None
            }
            None => Some(name.to_string()),
        },
        None => None,
    };

    init_logging(&settings.log_file)?;
    log::info!("Stone Snake starting...");
    settings_outcome.log(&args.settings);
    if let Some(name) = unknown_glyphs {
        log::warn!("Unknown glyph style {:?}, using {}", name, settings.glyphs.as_str());
    }
    if args.save_settings {
        settings.save(&args.settings)?;
    }

    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Game initialized with seed: {}", seed);

    let scores = run(&settings, seed)?;

    println!(
        "Rounds finished: {}  Best score: {}",
        scores.rounds(),
        scores.best().unwrap_or(0)
    );
    log::info!("Stone Snake exiting");
    Ok(())
}

/// Send log records to a file; the terminal belongs to the game
fn init_logging(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

/// Play until the player quits. Returns the session's scoreboard.
fn run(settings: &Settings, seed: u64) -> Result<ScoreBoard> {
    let score_log = ScoreLog::new(&settings.score_log);
    let mut scores = match score_log.read_scores() {
        Ok(history) => ScoreBoard::from_history(&history),
        Err(e) => {
            log::warn!("Could not read {}: {}", score_log.path().display(), e);
            ScoreBoard::new()
        }
    };

    let mut state = GameState::new(seed)?;

    let _session = TerminalSession::enter()?;
    let mut renderer = TerminalRenderer::new(io::stdout(), settings.glyphs, settings.show_hud);
    renderer.draw(&state, &TickReport::default(), &scores)?;

    let mut pacer = Pacer::new(Instant::now());
    pacer.schedule(Instant::now(), state.speed);
    let mut input = TickInput::default();

    loop {
        // Wait for input until the next tick is due
        if event::poll(pacer.time_until_tick(Instant::now()))? {
            match event::read()? {
                Event::Key(key) => match map_key(&key) {
                    Some(Command::Quit) => break,
                    Some(Command::Steer(dir)) => state.steer(dir),
                    Some(Command::TogglePause) => input.toggle_pause = !input.toggle_pause,
                    None => {}
                },
                Event::Resize(..) => renderer.invalidate(),
                _ => {}
            }
            continue;
        }

        let now = Instant::now();
        if !pacer.is_due(now) {
            continue;
        }

        let report = tick(&mut state, &input)?;
        input = TickInput::default();

        if let Some(summary) = report.round_over {
            score_log.record_round(&mut scores, summary.score);
        }

        renderer.draw(&state, &report, &scores)?;
        pacer.schedule(now, state.speed);
    }

    log::info!("Quit after {} ticks", state.time_ticks);
    Ok(scores)
}
