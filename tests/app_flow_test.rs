//! Keyboard and mouse flows through `App`, the way the binary drives it.

use crossterm::event::{KeyCode, KeyEvent};
use tui_pairs::core::{MemoryScoreStore, SessionPhase};
use tui_pairs::input::handle_key_event;
use tui_pairs::term::{GameView, Hit, Viewport};
use tui_pairs::types::{TileId, PALETTE, RESOLVE_DELAY_MS, TICK_MS};
use tui_pairs::App;

fn press(app: &mut App<MemoryScoreStore>, code: KeyCode) {
    if let Some(action) = handle_key_event(KeyEvent::from(code)) {
        app.apply(action);
    }
}

/// Advance in game-loop sized steps.
fn run_for(app: &mut App<MemoryScoreStore>, ms: u32) {
    let mut left = ms;
    while left > 0 {
        let step = left.min(TICK_MS);
        app.tick(step);
        left -= step;
    }
}

#[test]
fn test_keyboard_game_to_completion() {
    let colors = &PALETTE[..2];
    let mut app = App::with_palette(colors, 21, MemoryScoreStore::new()).unwrap();
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.session().phase(), SessionPhase::Playing);

    for &color in colors {
        let ids: Vec<usize> = app
            .session()
            .tiles()
            .iter()
            .filter(|t| t.color == color)
            .map(|t| t.id.index())
            .collect();
        for target in ids {
            while app.cursor().index() > target {
                press(&mut app, KeyCode::Left);
            }
            while app.cursor().index() < target {
                press(&mut app, KeyCode::Right);
            }
            press(&mut app, KeyCode::Char(' '));
        }
        run_for(&mut app, RESOLVE_DELAY_MS);
    }

    assert_eq!(app.session().phase(), SessionPhase::Finished);
    assert_eq!(app.hud().guesses, "4");
    assert_eq!(app.hud().matches, "4");
    assert_eq!(app.hud().lowest, "4");
}

#[test]
fn test_mouse_clicks_through_view_hit_test() {
    let mut app = App::new(5, MemoryScoreStore::new()).unwrap();
    let view = GameView::default();
    let vp = Viewport::new(90, 30);

    let layout = view.layout(vp, app.session().tiles().len());
    let hit = view
        .hit_test(vp, app.session().tiles().len(), layout.control_x, layout.control_y)
        .unwrap();
    assert_eq!(hit, Hit::Control);
    app.click(hit);
    assert_eq!(app.session().tiles().len(), 24);

    let layout = view.layout(vp, 24);
    let hit = view
        .hit_test(vp, 24, layout.frame_x + 3, layout.frame_y + 2)
        .unwrap();
    app.click(hit);
    assert!(app.session().tiles()[0].visibility.is_face_up());
    assert_eq!(app.cursor().tile(), Some(TileId(0)));
}

#[test]
fn test_play_again_key_mid_resolution() {
    let mut app = App::new(5, MemoryScoreStore::new()).unwrap();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Char(' '));
    assert!(app.session().turn_state().is_resolving());

    press(&mut app, KeyCode::Char('r'));
    assert!(!app.session().turn_state().is_resolving());
    run_for(&mut app, RESOLVE_DELAY_MS * 2);
    assert!(app.session().tiles().iter().all(|t| t.is_hidden()));
    assert_eq!(app.hud().guesses, "0");
}
