//! Help popup: centred overlay listing keybindings and commands.
//!
//! Toggle with `?`; close with `?` or `Escape`.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("q  /  Ctrl+c", "Quit"),
    ("Tab / Shift+Tab", "Cycle focus: search → book → size → results"),
    ("/", "Focus the search input"),
    ("Escape", "Leave the search input / close popup"),
    ("Enter", "Search now, or open the selected hadith"),
    ("← h  /  → l", "Change the focused selector"),
    ("↑ k  /  ↓ j", "Move through results"),
    ("n  ]  PageDown", "Next page"),
    ("p  [  PageUp", "Previous page"),
    ("?", "Toggle this help"),
    ("", ""),
    (":book [name]", "Filter by book (no name clears)"),
    (":size <n>", "Page size: 10, 20, 50 or 100"),
    (":page <n>", "Jump to page"),
    (":next  :prev", "Change page"),
    (":full  :short", "Show full text / truncate"),
    (":width <n>", "Truncation width"),
    (":theme <name>", "default or gruvbox"),
];

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(72, BINDINGS.len() as u16 + 2, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" hadith: keys (? to close) ")
            .border_style(self.theme.border_focused);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<18}", key),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*desc),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

/// A `width` × `height` rectangle centred in `area`, clipped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
