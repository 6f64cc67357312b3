//! Semantic application events: crossterm key events mapped to a
//! widget-agnostic vocabulary so widgets never touch crossterm directly.
//!
//! # Keybindings
//!
//! | Key(s)                    | Event               |
//! |---------------------------|---------------------|
//! | `q`, `Ctrl+c`             | `Quit`              |
//! | `Tab` / `Shift+Tab`       | `FocusNext` / `FocusPrev` |
//! | `/`                       | `QueryFocus`        |
//! | `p`, `[`, `PageUp`        | `PrevPage`          |
//! | `n`, `]`, `PageDown`      | `NextPage`          |
//! | `↑` / `k`, `↓` / `j`      | `Nav(Up)` / `Nav(Down)` |
//! | `←` / `h`, `→` / `l`      | `Nav(Left)` / `Nav(Right)` |
//! | printable char            | `Char(c)`           |
//! | `Backspace`               | `Backspace`         |
//! | `Enter`                   | `Enter`             |
//! | `Esc`                     | `Escape`            |
//! | terminal resize           | `Resize(w, h)`      |
//!
//! ## Insert mode
//!
//! While the query bar or command bar is focused the loop calls
//! [`to_app_event_insert`]: every printable character is forwarded as
//! `Char`, arrows still produce `Nav` for cursor movement, and `PageUp` /
//! `PageDown` keep paging so results can be flipped without leaving the input.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    /// Move focus forward around the ring.
    FocusNext,
    /// Move focus backward around the ring.
    FocusPrev,
    /// Jump straight to the query bar.
    QueryFocus,
    PrevPage,
    NextPage,
    /// Arrow keys / hjkl. Meaning depends on the focused widget.
    Nav(Direction),
    Char(char),
    Backspace,
    Enter,
    Resize(u16, u16),
    /// Dismiss the active modal or leave the text input.
    Escape,
}

/// Map a raw crossterm [`Event`] in normal (navigation) mode.
///
/// Returns `None` for mouse events and unbound keys.
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key),
        _ => None,
    }
}

/// Map a raw crossterm [`Event`] while a text input is focused.
pub fn to_app_event_insert(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key_insert(key),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('q') if key.modifiers == Mod::NONE => Some(AppEvent::Quit),
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),
        BackTab => Some(AppEvent::FocusPrev),

        Char('/') if key.modifiers == Mod::NONE => Some(AppEvent::QueryFocus),

        PageUp => Some(AppEvent::PrevPage),
        PageDown => Some(AppEvent::NextPage),
        Char('p') | Char('[') if key.modifiers == Mod::NONE => Some(AppEvent::PrevPage),
        Char('n') | Char(']') if key.modifiers == Mod::NONE => Some(AppEvent::NextPage),

        Up | Char('k') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Up)),
        Down | Char('j') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Down)),
        Left | Char('h') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Left)),
        Right | Char('l') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Right)),

        // Shifted characters too (`?`, `:` on most layouts)
        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

fn map_key_insert(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Up => Some(AppEvent::Nav(Direction::Up)),
        Down => Some(AppEvent::Nav(Direction::Down)),
        Left => Some(AppEvent::Nav(Direction::Left)),
        Right => Some(AppEvent::Nav(Direction::Right)),

        PageUp => Some(AppEvent::PrevPage),
        PageDown => Some(AppEvent::NextPage),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),
        BackTab => Some(AppEvent::FocusPrev),

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
