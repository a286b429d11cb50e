//! Fixed top bar: the greeting's title and the audio toggle state.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use super::theme::{ACCENT_PRIMARY, HEADER_BG, TEXT_MUTED, TEXT_PRIMARY};

pub const HEADER_TITLE: &str = "rFor";

pub struct Header {
    muted: bool,
    playing: bool,
}

impl Header {
    /// `playing` is what the player reports, which can be false while
    /// unmuted when playback was rejected.
    pub fn new(muted: bool, playing: bool) -> Self {
        Self { muted, playing }
    }

    fn audio_label(&self) -> &'static str {
        match (self.muted, self.playing) {
            (true, _) => "✕ muted",
            (false, true) => "♪ playing",
            (false, false) => "♪ no audio",
        }
    }
}

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let bg_style = Style::default().bg(HEADER_BG);
        buf.set_style(area, bg_style);

        let title = Line::from(vec![
            Span::raw("  "),
            Span::styled(
                HEADER_TITLE,
                bg_style.fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
            ),
        ]);
        buf.set_line(area.x, area.y, &title, area.width);

        let audio_color = if self.playing && !self.muted {
            ACCENT_PRIMARY
        } else {
            TEXT_MUTED
        };
        let audio = Line::from(vec![
            Span::styled(self.audio_label(), bg_style.fg(audio_color)),
            Span::styled(" [m]  ", bg_style.fg(TEXT_MUTED)),
        ]);
        let width = audio.width() as u16;
        if width < area.width {
            buf.set_line(area.x + area.width - width, area.y, &audio, width);
        }
    }
}
