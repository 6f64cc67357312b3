//! Filter bar: the book selector and the page-size selector on one row.
//!
//! Both are cycled with `←` / `→` when focused; the app shell owns the actual
//! transitions, this widget only draws.

use crate::theme::Theme;
use hadith_core::PageSize;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

const ALL_BOOKS: &str = "all books";

pub struct FilterBar<'a> {
    book: Option<&'a str>,
    page_size: PageSize,
    book_focused: bool,
    size_focused: bool,
    theme: &'a Theme,
}

impl<'a> FilterBar<'a> {
    pub fn new(
        book: Option<&'a str>,
        page_size: PageSize,
        book_focused: bool,
        size_focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            book,
            page_size,
            book_focused,
            size_focused,
            theme,
        }
    }
}

fn selector<'a>(label: &'a str, value: String, focused: bool, style: Style) -> Vec<Span<'a>> {
    let dim = Style::default().add_modifier(Modifier::DIM);
    let (open, close, value_style) = if focused {
        ("‹ ", " ›", style.add_modifier(Modifier::REVERSED))
    } else {
        ("  ", "  ", style)
    };
    vec![
        Span::styled(label, dim),
        Span::raw(open),
        Span::styled(value, value_style),
        Span::raw(close),
    ]
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let book_style = match self.book {
            Some(book) => self.theme.book_style(book),
            None => Style::default(),
        };

        let mut spans = vec![Span::raw(" ")];
        spans.extend(selector(
            "Book:",
            self.book.unwrap_or(ALL_BOOKS).to_string(),
            self.book_focused,
            book_style,
        ));
        spans.push(Span::raw("   "));
        spans.extend(selector(
            "Page size:",
            self.page_size.to_string(),
            self.size_focused,
            Style::default(),
        ));

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
