use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};
use tokio::sync::mpsc;

use crate::content::{AffectionMessage, MessageFeed};
use crate::flow::{RevealProgress, RevealTick, RevealTimer};
use crate::ui::components::theme::{
    fade, fg, ACCENT_BLUSH, ACCENT_PRIMARY, BG_SURFACE, TEXT_MUTED, TEXT_PRIMARY,
};
use crate::ui::components::{ButtonRow, Spinner};

const CARD_HEIGHT: u16 = 7;
const CARD_MIN_WIDTH: u16 = 30;

/// Affection section: reveals the fetched messages one card at a time.
///
/// Owns the reveal timer; unmounting the view drops and cancels it.
pub struct AffectionView {
    feed: MessageFeed,
    progress: RevealProgress,
    timer: Option<RevealTimer>,
    interval: Duration,
    spinner: Spinner,
}

impl AffectionView {
    pub fn mount<E>(feed: MessageFeed, interval: Duration, tx: &mpsc::UnboundedSender<E>) -> Self
    where
        E: From<RevealTick> + Send + 'static,
    {
        let mut view = Self {
            feed: MessageFeed::pending(),
            progress: RevealProgress::default(),
            timer: None,
            interval,
            spinner: Spinner::heart(),
        };
        view.set_feed(feed, tx);
        view
    }

    /// Take the published feed. Starts the reveal timer once, when the feed
    /// is loaded and non-empty.
    pub fn set_feed<E>(&mut self, feed: MessageFeed, tx: &mpsc::UnboundedSender<E>)
    where
        E: From<RevealTick> + Send + 'static,
    {
        if !self.feed.is_loading() {
            tracing::debug!("Affection view already has its feed");
            return;
        }
        self.feed = feed;
        if self.feed.is_loading() {
            return;
        }

        self.progress = RevealProgress::new(self.feed.len());
        if !self.feed.is_empty() {
            self.timer = Some(RevealTimer::start(
                self.interval,
                self.progress.remaining(),
                tx.clone(),
            ));
        }
    }

    /// Reveal the next card
    pub fn reveal_next(&mut self) {
        self.progress.advance();
        if self.progress.is_complete() {
            self.timer = None;
        }
    }

    pub fn tick(&mut self) {
        self.spinner.tick();
    }

    pub fn is_loading(&self) -> bool {
        self.feed.is_loading()
    }

    pub fn visible_count(&self) -> usize {
        self.progress.visible()
    }

    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Whether the "continue" action is offered
    pub fn can_continue(&self) -> bool {
        !self.feed.is_loading() && self.progress.is_complete()
    }

    fn visible_messages(&self) -> &[AffectionMessage] {
        &self.feed.messages()[..self.progress.visible()]
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, opacity: f32) {
        let [title_area, cards_area, footer_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .areas(area);

        Paragraph::new(vec![
            Line::raw(""),
            Line::styled(
                "Kuch Baatein",
                fg(TEXT_PRIMARY, opacity).add_modifier(Modifier::BOLD),
            ),
            Line::styled("────", fg(ACCENT_BLUSH, opacity)),
        ])
        .alignment(Alignment::Center)
        .render(title_area, buf);

        if self.feed.is_loading() {
            Paragraph::new(Line::from(
                self.spinner.with_label("loading...", ACCENT_PRIMARY),
            ))
            .alignment(Alignment::Center)
            .render(cards_area, buf);
            return;
        }

        self.render_cards(cards_area, buf, opacity);

        if self.can_continue() {
            Paragraph::new(vec![
                Line::styled("Aur ab, ek aakhri baat...", fg(TEXT_MUTED, opacity)),
                Line::raw(""),
                ButtonRow::new(&["Aage Badhein"])
                    .selected(0)
                    .opacity(opacity)
                    .line(),
            ])
            .alignment(Alignment::Center)
            .render(footer_area, buf);
        }
    }

    fn render_cards(&self, area: Rect, buf: &mut Buffer, opacity: f32) {
        let messages = self.visible_messages();
        if messages.is_empty() || area.height < CARD_HEIGHT {
            return;
        }

        let columns = (area.width / CARD_MIN_WIDTH).clamp(1, 3) as usize;
        let rows_fit = (area.height / CARD_HEIGHT) as usize;
        let rows_needed = messages.len().div_ceil(columns);
        // Newest cards stay on screen when they no longer all fit
        let skip_rows = rows_needed.saturating_sub(rows_fit);

        let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); rows_fit]).split(area);
        for (row, chunk) in messages
            .chunks(columns)
            .skip(skip_rows)
            .enumerate()
            .take(rows_fit)
        {
            let cells =
                Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns]).split(row_areas[row]);
            for (cell, message) in cells.iter().zip(chunk) {
                render_card(message, *cell, buf, opacity);
            }
        }
    }
}

fn render_card(message: &AffectionMessage, area: Rect, buf: &mut Buffer, opacity: f32) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(fg(ACCENT_BLUSH, opacity))
        .style(Style::default().bg(fade(BG_SURFACE, opacity)));
    let inner = block.inner(area);
    block.render(area, buf);

    let mut lines = vec![
        Line::styled("✧", fg(ACCENT_PRIMARY, opacity)),
        Line::styled(format!("\"{}\"", message.text()), fg(TEXT_PRIMARY, opacity)),
    ];
    if let Some(sender) = message.attribution() {
        lines.push(
            Line::styled(
                format!("— {}", sender),
                fg(TEXT_MUTED, opacity).add_modifier(Modifier::ITALIC),
            )
            .alignment(Alignment::Right),
        );
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(inner, buf);
}
