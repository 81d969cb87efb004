//! Event handling for the selector TUI
//!
//! Maps crossterm keyboard and mouse events to [`SelectorInput`] values. The
//! mapping depends on the session mode: while a delete is pending, only an
//! explicit yes confirms it.

use crate::selector::{Mode, SelectorInput};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// A terminal event after translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalEvent {
    /// Feed this input to the session
    Input(SelectorInput),
    /// Terminal was resized; the list height must be recomputed
    Resize,
    /// Nothing to do (poll timeout, key release, focus change, ...)
    Idle,
}

/// Handle keys while browsing
fn handle_browsing_mode(key: KeyEvent) -> SelectorInput {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => SelectorInput::Cancel,
        (KeyCode::Enter, _) => SelectorInput::Enter,

        (KeyCode::Up, _)
        | (KeyCode::Char('p' | 'k'), KeyModifiers::CONTROL) => SelectorInput::Up,
        (KeyCode::Down, _)
        | (KeyCode::Char('n' | 'j'), KeyModifiers::CONTROL) => SelectorInput::Down,

        (KeyCode::Char('d'), KeyModifiers::CONTROL) => SelectorInput::RequestDelete,

        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => SelectorInput::Char(c),
        (KeyCode::Backspace, _) => SelectorInput::Backspace,

        _ => SelectorInput::Other,
    }
}

/// Handle keys while the delete dialog is open
fn handle_confirm_mode(key: KeyEvent) -> SelectorInput {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => SelectorInput::Cancel,
        (KeyCode::Char('y' | 'Y'), KeyModifiers::NONE | KeyModifiers::SHIFT)
        | (KeyCode::Enter, _) => SelectorInput::Confirm,
        _ => SelectorInput::Other,
    }
}

/// Handle mouse events
fn handle_mouse(mouse: MouseEvent) -> TerminalEvent {
    match mouse.kind {
        MouseEventKind::ScrollUp => TerminalEvent::Input(SelectorInput::Up),
        MouseEventKind::ScrollDown => TerminalEvent::Input(SelectorInput::Down),
        _ => TerminalEvent::Idle,
    }
}

/// Translate a raw terminal event for the given mode
#[must_use]
pub fn translate(mode: &Mode, event: Event) -> TerminalEvent {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match mode {
            Mode::Browsing => TerminalEvent::Input(handle_browsing_mode(key)),
            Mode::ConfirmingDelete(_) => TerminalEvent::Input(handle_confirm_mode(key)),
            Mode::Exiting(_) => TerminalEvent::Idle,
        },
        Event::Mouse(mouse) if matches!(mode, Mode::Browsing) => handle_mouse(mouse),
        Event::Resize(_, _) => TerminalEvent::Resize,
        _ => TerminalEvent::Idle,
    }
}

/// Poll for one event and translate it
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll(mode: &Mode, timeout: Duration) -> std::io::Result<TerminalEvent> {
    if !event::poll(timeout)? {
        return Ok(TerminalEvent::Idle);
    }
    Ok(translate(mode, event::read()?))
}
