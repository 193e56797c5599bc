#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseEventKind;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time;

use crate::domain::models::Event;

const TICK: time::Duration = time::Duration::from_millis(250);

/// Hotkeys first, everything else is handed to the text input.
fn translate_key(key: KeyEvent) -> Option<Event> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let event = match (key.code, ctrl) {
        (KeyCode::Char('c'), true) => Event::KeyboardCTRLC(),
        (KeyCode::Char('o'), true) => Event::KeyboardCTRLO(),
        (KeyCode::Char('d'), true) | (KeyCode::PageDown, _) => Event::UIScrollPageDown(),
        (KeyCode::Char('u'), true) | (KeyCode::PageUp, _) => Event::UIScrollPageUp(),
        (KeyCode::Down, _) => Event::UIScrollDown(),
        (KeyCode::Up, _) => Event::UIScrollUp(),
        (KeyCode::Esc, _) => Event::KeyboardEsc(),
        (KeyCode::Enter, _) => Event::KeyboardEnter(),
        _ => Event::KeyboardCharInput(key.into()),
    };

    return Some(event);
}

pub fn translate(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) => return translate_key(key),
        CrosstermEvent::Paste(text) => return Some(Event::KeyboardPaste(text)),
        CrosstermEvent::Mouse(mouse) if mouse.kind == MouseEventKind::ScrollUp => {
            return Some(Event::UIScrollUp());
        }
        CrosstermEvent::Mouse(mouse) if mouse.kind == MouseEventKind::ScrollDown => {
            return Some(Event::UIScrollDown());
        }
        _ => return None,
    }
}

/// Single stream of everything the UI loop reacts to: terminal input,
/// results from the actions service and a redraw tick.
pub struct EventsService {
    terminal: EventStream,
    service: mpsc::UnboundedReceiver<Event>,
}

impl EventsService {
    pub fn new(service: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            terminal: EventStream::new(),
            service,
        };
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let next = tokio::select! {
                event = self.service.recv() => match event {
                    Some(event) => Some(event),
                    None => bail!("Actions service stopped unexpectedly"),
                },
                event = self.terminal.next() => match event {
                    Some(Ok(event)) => translate(event),
                    _ => None,
                },
                _ = time::sleep(TICK) => Some(Event::UITick()),
            };

            if let Some(event) = next {
                return Ok(event);
            }
        }
    }
}
