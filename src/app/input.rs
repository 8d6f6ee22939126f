use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Message};
use crate::editor::{Direction, KeyIntent};

impl App {
    /// Translate a terminal event into a message.
    pub(super) fn handle_event(event: &Event) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key),
            Event::FocusGained => Some(Message::HostFocus(true)),
            Event::FocusLost => Some(Message::HostFocus(false)),
            Event::Resize(_, _) => Some(Message::Resize),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent) -> Option<Message> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl {
            return match key.code {
                KeyCode::Char('c' | 'q') => Some(Message::Quit),
                KeyCode::Char('w') => Some(Message::StopFocused),
                KeyCode::Char('f') => Some(Message::CycleForeground),
                KeyCode::Char('b') => Some(Message::CycleBackground),
                _ => None,
            };
        }

        let intent = match key.code {
            KeyCode::Esc => return Some(Message::Quit),
            // Tab belongs to focus navigation, never to the editor.
            KeyCode::Tab => return Some(Message::FocusNext),
            KeyCode::BackTab => return Some(Message::FocusPrev),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::ALT) => {
                KeyIntent::Char(ch)
            }
            KeyCode::Backspace => KeyIntent::Backspace,
            KeyCode::Delete => KeyIntent::Delete,
            KeyCode::Enter => KeyIntent::Enter,
            KeyCode::Up => KeyIntent::Move(Direction::Up),
            KeyCode::Down => KeyIntent::Move(Direction::Down),
            KeyCode::Left => KeyIntent::Move(Direction::Left),
            KeyCode::Right => KeyIntent::Move(Direction::Right),
            KeyCode::Home => KeyIntent::Home,
            KeyCode::End => KeyIntent::End,
            KeyCode::PageUp => KeyIntent::PageUp,
            KeyCode::PageDown => KeyIntent::PageDown,
            KeyCode::Insert => KeyIntent::ToggleInsert,
            _ => return None,
        };
        Some(Message::Key(intent))
    }
}
