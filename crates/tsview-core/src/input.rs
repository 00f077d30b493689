// File: crates/tsview-core/src/input.rs
// Summary: Key-to-command mapping and the per-iteration input batch.

use crate::session::{Outcome, Session};

/// Semantic commands, one per discrete key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    PanLeft,
    PanRight,
    ZoomIn,
    ZoomOut,
    ToggleOverlay,
    Confirm,
    Quit,
}

/// Host-independent key identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Left,
    Right,
    Up,
    Down,
}

/// Vim-style bindings: h/l pan, j/k zoom (or move the overlay selection),
/// t toggles the theme picker, Enter confirms, q or Escape quits.
pub fn command_for_key(key: Key) -> Option<Command> {
    match key {
        Key::Char('h') | Key::Left => Some(Command::PanLeft),
        Key::Char('l') | Key::Right => Some(Command::PanRight),
        Key::Char('j') | Key::Down => Some(Command::ZoomIn),
        Key::Char('k') | Key::Up => Some(Command::ZoomOut),
        Key::Char('t') => Some(Command::ToggleOverlay),
        Key::Enter => Some(Command::Confirm),
        Key::Char('q') | Key::Escape => Some(Command::Quit),
        _ => None,
    }
}

/// Queue of commands gathered since the last frame.
#[derive(Debug, Default)]
pub struct InputController {
    pending: Vec<Command>,
}

impl InputController {
    pub fn new() -> Self { Self::default() }

    /// Queue the command bound to `key`; returns false for unbound keys.
    pub fn push_key(&mut self, key: Key) -> bool {
        match command_for_key(key) {
            Some(cmd) => {
                self.pending.push(cmd);
                true
            }
            None => false,
        }
    }

    pub fn push(&mut self, cmd: Command) { self.pending.push(cmd); }

    pub fn is_empty(&self) -> bool { self.pending.is_empty() }

    /// Apply every queued command in arrival order. Stops at the first `Quit`.
    /// Returns `Redraw` when any command changed visible state.
    pub fn drain_into(&mut self, session: &mut Session) -> Outcome {
        let mut outcome = Outcome::Unchanged;
        for cmd in self.pending.drain(..) {
            match session.apply(cmd) {
                Outcome::Quit => return Outcome::Quit,
                Outcome::Redraw => outcome = Outcome::Redraw,
                Outcome::Unchanged => {}
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bindings() {
        assert_eq!(command_for_key(Key::Char('h')), Some(Command::PanLeft));
        assert_eq!(command_for_key(Key::Char('j')), Some(Command::ZoomIn));
        assert_eq!(command_for_key(Key::Char('k')), Some(Command::ZoomOut));
        assert_eq!(command_for_key(Key::Enter), Some(Command::Confirm));
        assert_eq!(command_for_key(Key::Char('x')), None);
    }
}
