//! Terminal pairs runner (default binary).
//!
//! crossterm input, fixed-timestep game clock, framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};

use tui_pairs::core::{GameSnapshot, ScoreStore};
use tui_pairs::input::{handle_key_event, should_quit};
use tui_pairs::logging::init_tracing;
use tui_pairs::store::FileScoreStore;
use tui_pairs::term::{FrameBuffer, GameView, TerminalRenderer};
use tui_pairs::types::TICK_MS;
use tui_pairs::{App, GameConfig};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_tracing(&config.log_path);
    tracing::info!(
        seed = config.seed,
        score_path = %config.score_path.display(),
        "starting tui-pairs"
    );

    let store = FileScoreStore::new(&config.score_path);
    let mut app = App::new(config.seed, store).context("invalid tile palette")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        tracing::warn!(error = %e, "terminal restore failed");
    }
    if let Err(e) = &result {
        tracing::error!(error = %e, "game loop failed");
    }
    result
}

fn run<S: ScoreStore>(term: &mut TerminalRenderer, app: &mut App<S>) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let viewport = term.viewport()?;
        app.session().snapshot_into(&mut snap);
        view.render_into(
            &snap,
            app.hud(),
            Some(app.cursor().index()),
            viewport,
            &mut fb,
        );
        term.draw_swap(&mut fb)?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        tracing::info!("quit requested");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        app.apply(action);
                    }
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    let tiles = app.session().tiles().len();
                    if let Some(hit) = view.hit_test(viewport, tiles, mouse.column, mouse.row) {
                        app.click(hit);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Fixed timestep: catch up in whole ticks.
        while last_tick.elapsed() >= tick {
            app.tick(TICK_MS);
            last_tick += tick;
        }
    }
}
