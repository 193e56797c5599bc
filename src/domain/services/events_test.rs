use crossterm::event::Event as CrosstermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyEventState;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;
use tui_textarea::Key;

use super::translate;
use crate::domain::models::Event;

fn key(code: KeyCode, modifiers: KeyModifiers) -> CrosstermEvent {
    return CrosstermEvent::Key(KeyEvent::new(code, modifiers));
}

#[test]
fn it_maps_hotkeys() {
    assert!(matches!(
        translate(key(KeyCode::Char('o'), KeyModifiers::CONTROL)),
        Some(Event::KeyboardCTRLO())
    ));
    assert!(matches!(
        translate(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(Event::KeyboardCTRLC())
    ));
    assert!(matches!(
        translate(key(KeyCode::Esc, KeyModifiers::NONE)),
        Some(Event::KeyboardEsc())
    ));
    assert!(matches!(
        translate(key(KeyCode::Enter, KeyModifiers::NONE)),
        Some(Event::KeyboardEnter())
    ));
    assert!(matches!(
        translate(key(KeyCode::Char('u'), KeyModifiers::CONTROL)),
        Some(Event::UIScrollPageUp())
    ));
    assert!(matches!(
        translate(key(KeyCode::PageDown, KeyModifiers::NONE)),
        Some(Event::UIScrollPageDown())
    ));
}

#[test]
fn it_passes_plain_characters_to_the_input() {
    match translate(key(KeyCode::Char('o'), KeyModifiers::NONE)) {
        Some(Event::KeyboardCharInput(input)) => {
            assert_eq!(input.key, Key::Char('o'));
            assert!(!input.ctrl);
        }
        _ => panic!("Wrong enum"),
    }
}

#[test]
fn it_ignores_key_releases() {
    let release = KeyEvent {
        code: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };

    assert!(translate(CrosstermEvent::Key(release)).is_none());
}

#[test]
fn it_scrolls_with_the_mouse_wheel() {
    let wheel = |kind| {
        return CrosstermEvent::Mouse(MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
    };

    assert!(matches!(
        translate(wheel(MouseEventKind::ScrollDown)),
        Some(Event::UIScrollDown())
    ));
    assert!(matches!(
        translate(wheel(MouseEventKind::ScrollUp)),
        Some(Event::UIScrollUp())
    ));
    assert!(translate(wheel(MouseEventKind::Moved)).is_none());
}

#[test]
fn it_forwards_pastes() {
    match translate(CrosstermEvent::Paste("hello".to_string())) {
        Some(Event::KeyboardPaste(text)) => assert_eq!(text, "hello"),
        _ => panic!("Wrong enum"),
    }
}
