use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::style::Color;

use crate::demo::{DemoKind, DemoOptions, TickContext};
use crate::editor::{Direction, KeyIntent};

use super::event_loop::{MAX_WAIT_MS, poll_timeout};
use super::{App, BACKGROUND_PALETTE, FOREGROUND_PALETTE, Message, Model, next_color, update};

fn create_test_model(kinds: &[DemoKind]) -> Model {
    let demos: Vec<_> = kinds.iter().copied().map(DemoOptions::new).collect();
    Model::with_demos(&demos, &TickContext::at(0))
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn type_keys(mut model: Model, text: &str) -> Model {
    for ch in text.chars() {
        model = update(model, Message::Key(KeyIntent::Char(ch)));
    }
    model
}

// --- Model setup ---

#[test]
fn test_with_demos_focuses_first_matrix() {
    let model = create_test_model(&[DemoKind::Typewriter, DemoKind::Clock]);
    assert_eq!(model.registry.len(), 2);
    assert_eq!(model.focused, model.registry.ids().first().copied());
    assert!(model.status_text().starts_with("matrix1 typewriter"));
}

#[test]
fn test_empty_model_has_no_focus() {
    let model = create_test_model(&[]);
    assert_eq!(model.focused, None);
    assert_eq!(model.status_text(), "no matrix");
}

// --- Keys and focus ---

#[test]
fn test_keys_reach_focused_typewriter() {
    let model = create_test_model(&[DemoKind::Typewriter]);
    let mut model = type_keys(model, "HI");
    model.dirty = false;
    let model = update(model, Message::Key(KeyIntent::Move(Direction::Left)));
    assert!(model.dirty);
    assert!(model.status_text().contains("cursor 1,2"));
}

#[test]
fn test_keys_to_non_editing_matrix_are_ignored() {
    let mut model = create_test_model(&[DemoKind::Clock]);
    model.dirty = false;
    let model = update(model, Message::Key(KeyIntent::Char('X')));
    assert!(!model.dirty);
}

#[test]
fn test_focus_next_wraps_around() {
    let model = create_test_model(&[DemoKind::Spinner, DemoKind::Typewriter, DemoKind::Clock]);
    let ids = model.registry.ids();
    let model = update(model, Message::FocusNext);
    assert_eq!(model.focused, Some(ids[1]));
    let model = update(model, Message::FocusNext);
    let model = update(model, Message::FocusNext);
    assert_eq!(model.focused, Some(ids[0]));
    let model = update(model, Message::FocusPrev);
    assert_eq!(model.focused, Some(ids[2]));
}

#[test]
fn test_focus_moves_blink_between_typewriters() {
    let model = create_test_model(&[DemoKind::Typewriter, DemoKind::Typewriter]);
    let ids = model.registry.ids();
    let first_deadline = model.registry.get(ids[0]).and_then(|a| a.next_deadline());
    assert!(first_deadline.is_some());

    let model = update(model, Message::FocusNext);
    assert_eq!(model.registry.get(ids[0]).and_then(|a| a.next_deadline()), None);
    assert!(model.registry.get(ids[1]).and_then(|a| a.next_deadline()).is_some());
}

#[test]
fn test_host_focus_suspends_and_resumes_blink() {
    let model = create_test_model(&[DemoKind::Typewriter]);
    let id = model.focused.unwrap();
    let model = update(model, Message::HostFocus(false));
    assert!(!model.host_focused);
    assert_eq!(model.registry.get(id).and_then(|a| a.next_deadline()), None);

    let model = update(model, Message::HostFocus(true));
    assert!(model.registry.get(id).and_then(|a| a.next_deadline()).is_some());
}

#[test]
fn test_focus_without_host_focus_does_not_blink() {
    let model = create_test_model(&[DemoKind::Typewriter, DemoKind::Typewriter]);
    let ids = model.registry.ids();
    let model = update(model, Message::HostFocus(false));
    let model = update(model, Message::FocusNext);
    assert_eq!(model.registry.get(ids[1]).and_then(|a| a.next_deadline()), None);
}

// --- Stopping ---

#[test]
fn test_stop_focused_moves_focus_and_drops_matrix() {
    let model = create_test_model(&[DemoKind::Spinner, DemoKind::Clock]);
    let ids = model.registry.ids();
    let model = update(model, Message::StopFocused);
    assert_eq!(model.registry.ids(), vec![ids[1]]);
    assert_eq!(model.focused, Some(ids[1]));
    assert!(!model.should_quit);
}

#[test]
fn test_stopping_last_matrix_quits() {
    let model = create_test_model(&[DemoKind::Spinner]);
    let model = update(model, Message::StopFocused);
    assert!(model.registry.is_empty());
    assert_eq!(model.focused, None);
    assert!(model.should_quit);
}

// --- Ticks ---

#[test]
fn test_tick_runs_due_timers() {
    let mut model = create_test_model(&[DemoKind::Spinner]);
    model.dirty = false;
    let model = update(model, Message::Tick(TickContext::at(100)));
    assert!(!model.dirty);
    assert_eq!(model.now_ms, 100);
    let model = update(model, Message::Tick(TickContext::at(125)));
    assert!(model.dirty);
}

// --- Colors ---

#[test]
fn test_cycle_colors_on_focused_grid() {
    let model = create_test_model(&[DemoKind::Clock]);
    let id = model.focused.unwrap();
    let model = update(model, Message::CycleForeground);
    let model = update(model, Message::CycleBackground);
    let grid = model.registry.get(id).unwrap().grid();
    assert_eq!(grid.foreground(), FOREGROUND_PALETTE[1]);
    assert_eq!(grid.background(), BACKGROUND_PALETTE[1]);
}

#[test]
fn test_next_color_wraps_and_restarts_for_unknown() {
    assert_eq!(next_color(&FOREGROUND_PALETTE, Color::White), Color::Red);
    assert_eq!(next_color(&FOREGROUND_PALETTE, Color::Rgb(1, 2, 3)), Color::Red);
    assert_eq!(next_color(&[], Color::Blue), Color::Blue);
}

#[test]
fn test_quit_sets_flag() {
    let model = update(create_test_model(&[]), Message::Quit);
    assert!(model.should_quit);
}

// --- Input mapping ---

#[test]
fn test_editing_keys_map_to_intents() {
    let cases = [
        (KeyCode::Char('a'), KeyIntent::Char('a')),
        (KeyCode::Backspace, KeyIntent::Backspace),
        (KeyCode::Delete, KeyIntent::Delete),
        (KeyCode::Enter, KeyIntent::Enter),
        (KeyCode::Up, KeyIntent::Move(Direction::Up)),
        (KeyCode::Right, KeyIntent::Move(Direction::Right)),
        (KeyCode::Home, KeyIntent::Home),
        (KeyCode::End, KeyIntent::End),
        (KeyCode::PageUp, KeyIntent::PageUp),
        (KeyCode::PageDown, KeyIntent::PageDown),
        (KeyCode::Insert, KeyIntent::ToggleInsert),
    ];
    for (code, intent) in cases {
        assert_eq!(App::handle_key(key(code)), Some(Message::Key(intent)), "{code:?}");
    }
}

#[test]
fn test_tab_is_focus_navigation_not_an_intent() {
    assert_eq!(App::handle_key(key(KeyCode::Tab)), Some(Message::FocusNext));
    assert_eq!(App::handle_key(key(KeyCode::BackTab)), Some(Message::FocusPrev));
}

#[test]
fn test_control_keys_map_to_host_actions() {
    assert_eq!(App::handle_key(ctrl('c')), Some(Message::Quit));
    assert_eq!(App::handle_key(ctrl('w')), Some(Message::StopFocused));
    assert_eq!(App::handle_key(ctrl('f')), Some(Message::CycleForeground));
    assert_eq!(App::handle_key(ctrl('b')), Some(Message::CycleBackground));
    assert_eq!(App::handle_key(ctrl('x')), None);
    assert_eq!(App::handle_key(key(KeyCode::Esc)), Some(Message::Quit));
}

#[test]
fn test_key_release_is_ignored() {
    let mut release = key(KeyCode::Char('a'));
    release.kind = KeyEventKind::Release;
    assert_eq!(App::handle_key(release), None);
}

#[test]
fn test_focus_events_map_to_host_focus() {
    assert_eq!(App::handle_event(&Event::FocusLost), Some(Message::HostFocus(false)));
    assert_eq!(App::handle_event(&Event::FocusGained), Some(Message::HostFocus(true)));
    assert_eq!(App::handle_event(&Event::Resize(80, 24)), Some(Message::Resize));
}

// --- Event loop timing ---

#[test]
fn test_poll_timeout_waits_until_deadline_capped() {
    assert_eq!(poll_timeout(None, 0), Duration::from_millis(MAX_WAIT_MS));
    assert_eq!(poll_timeout(Some(1_100), 1_000), Duration::from_millis(100));
    assert_eq!(poll_timeout(Some(10_000), 0), Duration::from_millis(MAX_WAIT_MS));
    assert_eq!(poll_timeout(Some(500), 900), Duration::ZERO);
}

#[test]
fn test_app_builder_collects_demos() {
    let app = App::new(Vec::new())
        .with_demo(DemoOptions::new(DemoKind::Clock))
        .with_demo(DemoOptions::new(DemoKind::Typewriter));
    let kinds: Vec<_> = app.demos().iter().map(|demo| demo.kind).collect();
    assert_eq!(kinds, vec![DemoKind::Clock, DemoKind::Typewriter]);
}
