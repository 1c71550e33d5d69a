//! Key bindings.

use crate::input::{KeyCode, KeyEvent, KeyModifiers};
use crate::view::CursorMove;

/// What a key press asks the editor to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(CursorMove),
    Save,
    Quit,
    DeleteBackward,
    BreakLine,
    Insert(char),
}

/// Look up the command bound to `key`.
///
/// Unbound keys map to `None` and are ignored by the editor.
#[must_use]
pub fn command_for(key: &KeyEvent) -> Option<Command> {
    let ctrl = key.has_ctrl();
    let command = match key.code {
        KeyCode::Up => Command::Move(CursorMove::Up),
        KeyCode::Down => Command::Move(CursorMove::Down),
        KeyCode::Left => Command::Move(CursorMove::Left),
        KeyCode::Right => Command::Move(CursorMove::Right),
        KeyCode::PageUp => Command::Move(CursorMove::PageUp),
        KeyCode::PageDown => Command::Move(CursorMove::PageDown),
        KeyCode::Home => Command::Move(CursorMove::LineStart),
        KeyCode::End => Command::Move(CursorMove::LineEnd),
        KeyCode::Backspace => Command::DeleteBackward,
        KeyCode::Enter => Command::BreakLine,
        KeyCode::Tab => Command::Insert('\t'),
        KeyCode::Char('a') if ctrl => Command::Move(CursorMove::LineStart),
        KeyCode::Char('e') if ctrl => Command::Move(CursorMove::LineEnd),
        KeyCode::Char('h') if ctrl => Command::DeleteBackward,
        KeyCode::Char('s') if ctrl => Command::Save,
        KeyCode::Char('x') if ctrl => Command::Quit,
        KeyCode::Char(c) if is_insertable(key.modifiers, c) => Command::Insert(c),
        _ => return None,
    };
    Some(command)
}

fn is_insertable(modifiers: KeyModifiers, c: char) -> bool {
    (modifiers - KeyModifiers::SHIFT).is_empty() && !c.is_control()
}
