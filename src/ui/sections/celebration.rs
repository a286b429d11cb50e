use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::ui::components::theme::{fg, ACCENT_PRIMARY, TEXT_MUTED, TEXT_PRIMARY};
use crate::ui::components::{centered, FloatingHearts};

/// Terminal section: the greeting itself, over drifting hearts
pub struct CelebrationView {
    hearts: FloatingHearts,
}

impl CelebrationView {
    pub fn new() -> Self {
        Self {
            hearts: FloatingHearts::new(),
        }
    }

    pub fn tick(&mut self) {
        self.hearts.tick();
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, opacity: f32) {
        self.hearts.render(area, buf);

        let bold = Modifier::BOLD;
        let lines = vec![
            Line::styled("Happy", fg(TEXT_PRIMARY, opacity).add_modifier(bold)),
            Line::styled("Valentine's", fg(ACCENT_PRIMARY, opacity).add_modifier(bold)),
            Line::styled("Day", fg(TEXT_PRIMARY, opacity).add_modifier(bold)),
            Line::raw(""),
            Line::styled(
                "Aap mere liye bahut khaas hain. Har din aap ke saath special hai, \
                 lekin aaj ka din aur bhi zyada special hai.",
                fg(TEXT_MUTED, opacity),
            ),
            Line::raw(""),
            Line::styled("❤ With all my love ❤", fg(TEXT_PRIMARY, opacity)),
        ];

        let content = centered(area, 60, lines.len() as u16 + 2);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(content, buf);
    }
}

impl Default for CelebrationView {
    fn default() -> Self {
        Self::new()
    }
}
