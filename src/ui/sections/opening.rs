use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::ui::components::theme::{
    fade, fg, ACCENT_LAVENDER, ACCENT_PRIMARY, TEXT_MUTED, TEXT_PRIMARY,
};
use crate::ui::components::{centered, ButtonRow};

const HEART_ART: [&str; 6] = [
    "  ♥♥♥     ♥♥♥  ",
    " ♥♥♥♥♥   ♥♥♥♥♥ ",
    " ♥♥♥♥♥♥♥♥♥♥♥♥♥ ",
    "   ♥♥♥♥♥♥♥♥♥   ",
    "     ♥♥♥♥♥     ",
    "       ♥       ",
];

/// Opening section: title, a short note, and the start button
pub struct OpeningView;

impl OpeningView {
    pub fn render(&self, area: Rect, buf: &mut Buffer, opacity: f32) {
        let mut lines = Vec::new();
        for row in HEART_ART {
            lines.push(Line::styled(row, fg(ACCENT_PRIMARY, opacity)));
        }
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            " A LITTLE SOMETHING ",
            fg(TEXT_MUTED, opacity).bg(fade(ACCENT_LAVENDER, opacity)),
        ));
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "F O R   Y O U",
            fg(TEXT_PRIMARY, opacity).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::styled("────────", fg(TEXT_MUTED, opacity)));
        lines.push(Line::styled(
            "I've made something not so crazily special but yeah something that will surely add a smile to your face",
            fg(TEXT_MUTED, opacity),
        ));
        lines.push(Line::raw(""));
        lines.push(ButtonRow::new(&["wanna start? →"]).selected(0).opacity(opacity).line());

        let height = lines.len() as u16 + 2;
        let content = centered(area, 64, height);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(content, buf);
    }
}
