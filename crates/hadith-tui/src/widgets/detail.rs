//! Detail popup: the selected hadith with its full, wrapped text.
//!
//! Opened with `Enter` on a result; any of `Enter`, `Escape` or `q` closes it.

use crate::theme::Theme;
use crate::widgets::help::centered_rect;
use hadith_core::ItemView;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget, Wrap},
};

pub struct DetailPopup<'a> {
    item: &'a ItemView,
    theme: &'a Theme,
}

impl<'a> DetailPopup<'a> {
    pub fn new(item: &'a ItemView, theme: &'a Theme) -> Self {
        Self { item, theme }
    }
}

impl Widget for DetailPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width.saturating_sub(8).max(20);
        let height = area.height.saturating_sub(4).max(6);
        let popup = centered_rect(width, height, area);
        Clear.render(popup, buf);

        let mut title = vec![
            Span::raw(" "),
            Span::styled(self.item.book.as_str(), self.theme.book_style(&self.item.book)),
            Span::raw(" "),
            Span::styled(self.item.number.as_str(), self.theme.result_number),
        ];
        if let Some(score) = &self.item.score {
            title.push(Span::raw("  "));
            title.push(Span::styled(score.as_str(), self.theme.result_score));
        }
        title.push(Span::raw(" "));

        let block = Block::bordered()
            .title(Line::from(title))
            .title_bottom(Line::from(" Esc to close ").right_aligned())
            .border_style(self.theme.border_focused);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let [arab_area, id_area] =
            Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(inner);

        let arab = Line::from(Span::styled(self.item.arab.as_str(), self.theme.result_arab));
        let arab = if self.item.rtl { arab.right_aligned() } else { arab };
        Paragraph::new(arab)
            .wrap(Wrap { trim: true })
            .render(arab_area, buf);

        Paragraph::new(Line::from(Span::styled(
            self.item.id.as_str(),
            self.theme.result_id,
        )))
        .wrap(Wrap { trim: true })
        .render(id_area, buf);
    }
}
