use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::key_hints::{key_hints_line, render_key_hints, KeyHint};
use super::theme::{ACCENT_PRIMARY, FOOTER_BG, TEXT_MUTED};
use crate::flow::Section;

/// Bottom bar: dedication line on the left, key hints for the mounted
/// section on the right. The hints win when both do not fit.
pub struct GlobalFooter {
    year: i32,
    hints: Vec<KeyHint>,
}

impl GlobalFooter {
    pub fn for_section(year: i32, section: Section) -> Self {
        Self {
            year,
            hints: Self::hints_for(section),
        }
    }

    /// Key hints shown while `section` is mounted
    pub fn hints_for(section: Section) -> Vec<KeyHint> {
        let mut hints = match section {
            Section::Opening => vec![("enter", "start")],
            Section::Playful | Section::Proposal => vec![("←→", "choose"), ("enter", "answer")],
            Section::Affection => vec![("enter", "continue")],
            Section::Celebration => Vec::new(),
        };
        hints.push(("m", "music"));
        hints.push(("q", "quit"));
        hints
    }

    fn dedication(&self) -> Line<'static> {
        let bg = Style::default().bg(FOOTER_BG);
        Line::from(vec![
            Span::styled(" ♥ ", bg.fg(ACCENT_PRIMARY)),
            Span::styled("Made with love for someone very special", bg.fg(TEXT_MUTED)),
            Span::styled(" ♥ ", bg.fg(ACCENT_PRIMARY)),
            Span::styled(
                format!(" {} • A moment to cherish forever", self.year),
                bg.fg(TEXT_MUTED),
            ),
        ])
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let hints_width = (key_hints_line(&self.hints).width() as u16).min(area.width);
        let dedication_area = Rect {
            width: area.width - hints_width,
            ..area
        };
        let hints_area = Rect {
            x: area.x + dedication_area.width,
            width: hints_width,
            ..area
        };

        Paragraph::new(self.dedication())
            .alignment(Alignment::Left)
            .style(Style::default().bg(FOOTER_BG))
            .render(dedication_area, buf);
        render_key_hints(hints_area, buf, &self.hints);
    }
}
