//! Query bar: the free-text search input.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Nav(Left)` / `Nav(Right)` move the cursor.
//!
//! [`QueryBarState::handle`] reports whether the text changed so the app can
//! forward it to the session, which debounces the request.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct QueryBarState {
    pub text: String,
    /// Byte offset of the cursor within `text`.
    pub cursor: usize,
}

impl QueryBarState {
    /// Apply an editing event. Returns `true` when `text` changed.
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::Char(c) => {
                self.text.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                tracing::debug!(text = %self.text, cursor = self.cursor, "query: char inserted");
                true
            }
            AppEvent::Backspace if self.cursor > 0 => {
                let prev = prev_boundary(&self.text, self.cursor);
                self.text.remove(prev);
                self.cursor = prev;
                tracing::debug!(text = %self.text, cursor = self.cursor, "query: backspace");
                true
            }
            AppEvent::Nav(Direction::Left) => {
                self.cursor = prev_boundary(&self.text, self.cursor);
                false
            }
            AppEvent::Nav(Direction::Right) => {
                self.cursor = next_boundary(&self.text, self.cursor);
                false
            }
            _ => false,
        }
    }
}

fn prev_boundary(s: &str, cursor: usize) -> usize {
    s[..cursor]
        .char_indices()
        .last()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_boundary(s: &str, cursor: usize) -> usize {
    s[cursor..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| cursor + i)
        .unwrap_or(s.len())
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct QueryBar<'a> {
    state: &'a QueryBarState,
    focused: bool,
    loading: bool,
    theme: &'a Theme,
}

impl<'a> QueryBar<'a> {
    pub fn new(state: &'a QueryBarState, focused: bool, loading: bool, theme: &'a Theme) -> Self {
        Self {
            state,
            focused,
            loading,
            theme,
        }
    }

    /// Absolute position of the text cursor inside `area`.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let col = self.state.text[..self.state.cursor].chars().count() as u16;
        let x = (area.x + 1 + col).min(area.right().saturating_sub(2));
        (x, area.y + 1)
    }
}

impl Widget for QueryBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::bordered()
            .title(" Search ")
            .border_style(self.theme.border(self.focused));
        if self.loading {
            block = block.title_bottom(Line::from(" searching… ").right_aligned());
        }

        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.state.text.is_empty() && !self.focused {
            Line::from(Span::styled(
                "press / to search",
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(self.state.text.as_str())
        };
        Paragraph::new(line).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn typed(s: &str) -> QueryBarState {
        let mut state = QueryBarState::default();
        for c in s.chars() {
            state.handle(&AppEvent::Char(c));
        }
        state
    }

    #[test]
    fn typing_reports_changes() {
        let mut state = QueryBarState::default();
        assert!(state.handle(&AppEvent::Char('s')));
        assert!(!state.handle(&AppEvent::Nav(Direction::Left)));
        assert!(!state.handle(&AppEvent::Enter));
        assert_eq!(state.text, "s");
    }

    #[test]
    fn backspace_at_start_is_not_a_change() {
        let mut state = QueryBarState::default();
        assert!(!state.handle(&AppEvent::Backspace));
    }

    #[test]
    fn edits_respect_multibyte_boundaries() {
        let mut state = typed("صبر");
        assert_eq!(state.cursor, state.text.len());
        state.handle(&AppEvent::Nav(Direction::Left));
        state.handle(&AppEvent::Backspace);
        assert_eq!(state.text, "صر");
        state.handle(&AppEvent::Nav(Direction::Right));
        assert_eq!(state.cursor, state.text.len());
    }

    #[test]
    fn insert_in_the_middle() {
        let mut state = typed("sbar");
        state.handle(&AppEvent::Nav(Direction::Left));
        state.handle(&AppEvent::Nav(Direction::Left));
        state.handle(&AppEvent::Nav(Direction::Left));
        state.handle(&AppEvent::Char('a'));
        assert_eq!(state.text, "sabar");
    }
}
