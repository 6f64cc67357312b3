//! Pager line: summary on the left, prev / next buttons on the right.

use crate::theme::Theme;
use hadith_core::ResultsView;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

pub struct Pager<'a> {
    view: &'a ResultsView,
    theme: &'a Theme,
}

impl<'a> Pager<'a> {
    pub fn new(view: &'a ResultsView, theme: &'a Theme) -> Self {
        Self { view, theme }
    }
}

impl Widget for Pager<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let summary = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.view.summary.as_str(), self.theme.pager_summary),
        ]);
        buf.set_line(area.x, area.y, &summary, area.width);

        let button = |label: &'static str, enabled: bool| {
            let style = if enabled {
                self.theme.pager_enabled
            } else {
                self.theme.pager_disabled
            };
            Span::styled(label, style)
        };
        let buttons = Line::from(vec![
            button("◀ prev", self.view.prev_enabled),
            Span::raw(format!("  {}/{}  ", self.view.page, self.view.last_page)),
            button("next ▶", self.view.next_enabled),
            Span::raw(" "),
        ]);
        let width = buttons.width() as u16;
        let x = area.right().saturating_sub(width).max(area.x);
        buf.set_line(x, area.y, &buttons, area.width.min(width));
    }
}
