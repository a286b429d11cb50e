//! Per-section views. Exactly one is mounted at a time.

mod affection;
mod celebration;
mod opening;
mod question;

use std::time::Duration;

use ratatui::{buffer::Buffer, layout::Rect};
use tokio::sync::mpsc;

pub use affection::AffectionView;
pub use celebration::CelebrationView;
pub use opening::OpeningView;
pub use question::{QuestionCopy, QuestionKind, QuestionView, PLAYFUL_COPY, PROPOSAL_COPY};

use crate::content::MessageFeed;
use crate::flow::{RevealTick, Section};

/// The mounted section and its local state
pub enum SectionView {
    Opening(OpeningView),
    Playful(QuestionView),
    Affection(AffectionView),
    Proposal(QuestionView),
    Celebration(CelebrationView),
}

impl SectionView {
    /// Build the view for `section`. The Affection view receives the
    /// current feed and the sender its reveal ticks go to.
    pub fn mount<E>(
        section: Section,
        feed: &MessageFeed,
        reveal_interval: Duration,
        tx: &mpsc::UnboundedSender<E>,
    ) -> Self
    where
        E: From<RevealTick> + Send + 'static,
    {
        match section {
            Section::Opening => SectionView::Opening(OpeningView),
            Section::Playful => SectionView::Playful(QuestionView::playful()),
            Section::Affection => {
                SectionView::Affection(AffectionView::mount(feed.clone(), reveal_interval, tx))
            }
            Section::Proposal => SectionView::Proposal(QuestionView::proposal()),
            Section::Celebration => SectionView::Celebration(CelebrationView::new()),
        }
    }

    pub fn section(&self) -> Section {
        match self {
            SectionView::Opening(_) => Section::Opening,
            SectionView::Playful(_) => Section::Playful,
            SectionView::Affection(_) => Section::Affection,
            SectionView::Proposal(_) => Section::Proposal,
            SectionView::Celebration(_) => Section::Celebration,
        }
    }

    pub fn question_mut(&mut self) -> Option<&mut QuestionView> {
        match self {
            SectionView::Playful(view) | SectionView::Proposal(view) => Some(view),
            _ => None,
        }
    }

    pub fn affection_mut(&mut self) -> Option<&mut AffectionView> {
        match self {
            SectionView::Affection(view) => Some(view),
            _ => None,
        }
    }

    pub fn affection(&self) -> Option<&AffectionView> {
        match self {
            SectionView::Affection(view) => Some(view),
            _ => None,
        }
    }

    /// Advance per-frame animations
    pub fn tick(&mut self) {
        match self {
            SectionView::Affection(view) => view.tick(),
            SectionView::Celebration(view) => view.tick(),
            _ => {}
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, opacity: f32) {
        match self {
            SectionView::Opening(view) => view.render(area, buf, opacity),
            SectionView::Playful(view) | SectionView::Proposal(view) => {
                view.render(area, buf, opacity)
            }
            SectionView::Affection(view) => view.render(area, buf, opacity),
            SectionView::Celebration(view) => view.render(area, buf, opacity),
        }
    }
}
