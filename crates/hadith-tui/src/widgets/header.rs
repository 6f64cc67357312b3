//! Header row: title, catalog counters and key hints.

use crate::theme::Theme;
use hadith_core::Catalog;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Shown in place of a counter that has not loaded.
pub const PLACEHOLDER: &str = "–";

pub struct Header<'a> {
    catalog: &'a Catalog,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(catalog: &'a Catalog, theme: &'a Theme) -> Self {
        Self { catalog, theme }
    }
}

fn counter(value: Option<impl ToString>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| v.to_string())
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dim = Style::default().add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(" hadith ", self.theme.header_title),
            Span::styled("│ books ", dim),
            Span::styled(counter(self.catalog.book_count()), self.theme.header_stat),
            Span::styled(" · hadiths ", dim),
            Span::styled(counter(self.catalog.hadith_count), self.theme.header_stat),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);

        let hint = " /:search  ::cmd  ?:help  q:quit ";
        let hint_width = Line::from(hint).width() as u16;
        let hint_x = area.right().saturating_sub(hint_width);
        if hint_x > area.x + line.width() as u16 {
            buf.set_string(hint_x, area.y, hint, dim);
        }
    }
}
