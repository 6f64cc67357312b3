//! Results list: one block of lines per hit, rebuilt from the current
//! [`ResultsView`] on every frame.
//!
//! Each item renders as
//!
//! ```text
//! bukhari #12  score: 3.2
//! <id text>
//!                                    <arab text, right-aligned>
//! ```
//!
//! followed by a blank separator row. `↑` / `↓` move the cursor one item;
//! the window scrolls to keep the cursor visible.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use hadith_core::{ItemView, ResultsView};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

/// Rows used by one item, separator included.
const ITEM_ROWS: usize = 4;

/// How item text is shortened for the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truncation {
    pub width: usize,
    pub full: bool,
}

impl Truncation {
    /// Collapse all whitespace runs to single spaces and, unless `full`, cut
    /// to `width` characters with a trailing ellipsis.
    pub fn apply(&self, text: &str) -> String {
        let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if self.full || flat.chars().count() <= self.width {
            return flat;
        }
        let mut cut: String = flat.chars().take(self.width).collect();
        cut.push('…');
        cut
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct ResultsListState {
    /// Index into the current page's items.
    pub cursor: usize,
    /// First item drawn.
    pub offset: usize,
    /// Controller revision the cursor belongs to.
    seen_revision: u64,
    /// Items that fit in the last rendered area.
    last_visible: Cell<usize>,
}

impl Default for ResultsListState {
    fn default() -> Self {
        Self {
            cursor: 0,
            offset: 0,
            seen_revision: 0,
            last_visible: Cell::new(5),
        }
    }
}

impl ResultsListState {
    /// Reset the cursor when a new result set has been applied. Returns
    /// `true` if it did.
    pub fn sync(&mut self, revision: u64) -> bool {
        if revision == self.seen_revision {
            return false;
        }
        self.seen_revision = revision;
        self.cursor = 0;
        self.offset = 0;
        true
    }

    fn visible(&self) -> usize {
        self.last_visible.get().max(1)
    }

    /// Move the cursor within `len` items.
    pub fn handle(&mut self, event: &AppEvent, len: usize) {
        if len == 0 {
            return;
        }
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
                if self.cursor < self.offset {
                    self.offset = self.cursor;
                }
            }
            AppEvent::Nav(Direction::Down) => {
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
                if self.cursor >= self.offset + self.visible() {
                    self.offset = self.cursor + 1 - self.visible();
                }
            }
            _ => return,
        }
        tracing::debug!(cursor = self.cursor, offset = self.offset, "results: cursor moved");
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ResultsList<'a> {
    view: &'a ResultsView,
    state: &'a ResultsListState,
    focused: bool,
    truncation: Truncation,
    theme: &'a Theme,
}

impl<'a> ResultsList<'a> {
    pub fn new(
        view: &'a ResultsView,
        state: &'a ResultsListState,
        focused: bool,
        truncation: Truncation,
        theme: &'a Theme,
    ) -> Self {
        Self {
            view,
            state,
            focused,
            truncation,
            theme,
        }
    }
}

impl Widget for ResultsList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" Results · page {}/{} ", self.view.page, self.view.last_page);
        let block = Block::bordered()
            .title(title)
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let items = &self.view.items;
        if items.is_empty() {
            let empty = Line::from(Span::styled(
                self.view.summary.as_str(),
                Style::default().add_modifier(Modifier::DIM),
            ))
            .centered();
            Paragraph::new(empty).render(inner, buf);
            return;
        }

        let visible = (inner.height as usize / ITEM_ROWS).max(1);
        self.state.last_visible.set(visible);

        let start = self.state.offset.min(items.len() - 1);
        let end = (start + visible).min(items.len());

        let text_area = Rect {
            width: inner.width.saturating_sub(1),
            ..inner
        };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        let lines: Vec<Line> = items[start..end]
            .iter()
            .enumerate()
            .flat_map(|(row, item)| {
                let selected = self.focused && start + row == self.state.cursor;
                render_item(item, selected, self.truncation, self.theme)
            })
            .collect();
        Paragraph::new(lines).render(text_area, buf);

        if items.len() > visible {
            let mut sb_state = ScrollbarState::new(items.len())
                .position(start)
                .viewport_content_length(visible);
            StatefulWidget::render(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None),
                sb_area,
                buf,
                &mut sb_state,
            );
        }
    }
}

fn render_item(
    item: &ItemView,
    selected: bool,
    truncation: Truncation,
    theme: &Theme,
) -> [Line<'static>; ITEM_ROWS] {
    let mut head = vec![
        Span::styled(item.book.clone(), theme.book_style(&item.book)),
        Span::raw(" "),
        Span::styled(item.number.clone(), theme.result_number),
    ];
    if let Some(score) = &item.score {
        head.push(Span::raw("  "));
        head.push(Span::styled(score.clone(), theme.result_score));
    }
    let mut head = Line::from(head);
    if selected {
        head = head.patch_style(theme.result_selected);
    }

    let id = Line::from(Span::styled(truncation.apply(&item.id), theme.result_id));
    let arab = Line::from(Span::styled(truncation.apply(&item.arab), theme.result_arab));
    let arab = if item.rtl { arab.right_aligned() } else { arab };

    [head, id, arab, Line::default()]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
