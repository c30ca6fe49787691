//! Terminal pipe puzzle runner (default binary).
//!
//! Plays the level pack, saving progress after every solved level, or with
//! `--editor` opens a blank board for authoring new levels. Numeric dumps
//! taken in the editor are printed once the terminal is restored.

use std::fs::File;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tracing_subscriber::EnvFilter;

use loopy::core::{
    BoardSnapshot, Editor, EditorEvent, FileStore, Game, GameEvent, LevelPack, Progress,
};
use loopy::input::{map_editor_key, map_play_key, should_quit};
use loopy::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};
use loopy::{Config, Mode};

fn main() -> Result<()> {
    let config = Config::from_env().with_mode(Mode::from_args(std::env::args().skip(1)));
    init_logging(&config)?;
    tracing::info!(?config, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = match config.mode {
        Mode::Play => run_play(&mut term, &config).map(|()| Vec::new()),
        Mode::Editor => run_editor(&mut term),
    };

    // Always try to restore terminal state.
    let _ = term.exit();

    for dump in result? {
        println!("{dump}");
    }
    Ok(())
}

/// Log to a file, if one is configured; the terminal is in raw mode.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {e}"))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

/// Block until the next key press; resizes force a full redraw.
fn next_key(term: &mut TerminalRenderer) -> Result<Option<KeyEvent>> {
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        Event::Resize(_, _) => {
            term.invalidate();
            Ok(None)
        }
        _ => Ok(None),
    }
}

fn draw(
    term: &mut TerminalRenderer,
    view: &BoardView,
    snap: &BoardSnapshot,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    view.render_into(snap, Viewport::new(w, h), fb);
    term.draw(fb)
}

fn run_play(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut store = FileStore::open(&config.save_path)?;
    let levels = match &config.levels_path {
        Some(path) => LevelPack::from_path(path)?,
        None => LevelPack::builtin(),
    };
    let seed = config.seed.unwrap_or_else(clock_seed);
    let mut game = Game::new(levels, Progress::load(&store), seed)?;

    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        draw(term, &view, &game.snapshot(), &mut fb)?;

        let Some(key) = next_key(term)? else {
            continue;
        };
        if should_quit(key) {
            return Ok(());
        }
        let Some(action) = map_play_key(key) else {
            continue;
        };
        if let GameEvent::Solved { .. } = game.apply_action(action)? {
            Progress::save(&mut store, game.next_level())?;
        }
    }
}

fn run_editor(term: &mut TerminalRenderer) -> Result<Vec<String>> {
    let mut editor = Editor::new()?;
    let mut dumps = Vec::new();

    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        draw(term, &view, &editor.snapshot(), &mut fb)?;

        let Some(key) = next_key(term)? else {
            continue;
        };
        if should_quit(key) {
            return Ok(dumps);
        }
        let Some(action) = map_editor_key(key) else {
            continue;
        };
        // Rejected edits are shown as the editor's status message.
        match editor.apply_action(action) {
            Ok(EditorEvent::Dumped(dump)) => dumps.push(dump),
            Ok(_) => {}
            Err(e) => tracing::debug!(error = %e, "edit rejected"),
        }
    }
}
