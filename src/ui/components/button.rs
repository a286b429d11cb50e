use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::{fade, ACCENT_PRIMARY, BG_BASE, TEXT_MUTED, TEXT_PRIMARY};

/// A row of pill buttons, one of them highlighted.
pub struct ButtonRow<'a> {
    labels: &'a [&'a str],
    selected: Option<usize>,
    opacity: f32,
}

impl<'a> ButtonRow<'a> {
    pub fn new(labels: &'a [&'a str]) -> Self {
        Self {
            labels,
            selected: None,
            opacity: 1.0,
        }
    }

    pub fn selected(mut self, index: usize) -> Self {
        self.selected = Some(index);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    fn button_style(&self, active: bool) -> Style {
        if active {
            Style::default()
                .fg(fade(BG_BASE, self.opacity))
                .bg(fade(ACCENT_PRIMARY, self.opacity))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(fade(TEXT_PRIMARY, self.opacity))
        }
    }

    pub fn line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("    "));
            }
            let active = self.selected == Some(i);
            let (open, close) = if active { ("( ", " )") } else { ("  ", "  ") };
            spans.push(Span::styled(
                open,
                Style::default().fg(fade(TEXT_MUTED, self.opacity)),
            ));
            spans.push(Span::styled(label.to_string(), self.button_style(active)));
            spans.push(Span::styled(
                close,
                Style::default().fg(fade(TEXT_MUTED, self.opacity)),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for ButtonRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line())
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
