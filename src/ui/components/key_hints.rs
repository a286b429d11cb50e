//! Key hint chips for the footer.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::{FOOTER_BG, KEY_HINT_BG, TEXT_FAINT, TEXT_MUTED};

/// A key and what pressing it does
pub type KeyHint = (&'static str, &'static str);

/// The hints as one line: each key on a chip, followed by its action
pub fn key_hints_line(hints: &[KeyHint]) -> Line<'static> {
    let chip = Style::default().fg(TEXT_MUTED).bg(KEY_HINT_BG);
    let action = Style::default().fg(TEXT_MUTED).bg(FOOTER_BG);
    let gap = Style::default().fg(TEXT_FAINT).bg(FOOTER_BG);

    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", gap));
        }
        spans.push(Span::styled(format!(" {key} "), chip));
        spans.push(Span::styled(format!(" {label}"), action));
    }
    spans.push(Span::styled(" ", action));
    Line::from(spans)
}

/// Render the hints right-aligned in `area`
pub fn render_key_hints(area: Rect, buf: &mut Buffer, hints: &[KeyHint]) {
    Paragraph::new(key_hints_line(hints))
        .alignment(Alignment::Right)
        .style(Style::default().bg(FOOTER_BG))
        .render(area, buf);
}
