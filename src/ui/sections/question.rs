//! Shared view for the two question sections.
//!
//! The view answers locally first: the first choice flips it to its
//! acknowledgement right away, while the sequencer's section change follows
//! after its own delay.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::flow::{Answer, Trigger, PLAYFUL_ANSWERS, PROPOSAL_ANSWERS};
use crate::ui::components::theme::{fg, ACCENT_PRIMARY, TEXT_MUTED, TEXT_PRIMARY};
use crate::ui::components::{centered, ButtonRow};

/// Copy for one question screen
#[derive(Debug, Clone, Copy)]
pub struct QuestionCopy {
    pub title: &'static str,
    pub body: &'static [&'static str],
    pub thanks_title: &'static str,
    pub thanks_body: &'static str,
}

pub const PLAYFUL_COPY: QuestionCopy = QuestionCopy {
    title: "Ek Chhota Sa Sawal",
    body: &[
        "Aap mujhe kabhi kabhi pyaar se \"bandar\" bulate hain...",
        "Kya aap sochte hain main cute bandar hoon?",
    ],
    thanks_title: "Shukriya ❤",
    thanks_body: "Dil khush kar diya aapne...",
};

pub const PROPOSAL_COPY: QuestionCopy = QuestionCopy {
    title: "Kya aap meri Valentine banogi?",
    body: &[],
    thanks_title: "Mera Naseeb ❤",
    thanks_body: "",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Playful,
    Proposal,
}

pub struct QuestionView {
    kind: QuestionKind,
    choices: &'static [Answer],
    copy: QuestionCopy,
    selected: usize,
    answered: Option<Answer>,
}

impl QuestionView {
    pub fn playful() -> Self {
        Self::new(QuestionKind::Playful, PLAYFUL_ANSWERS, PLAYFUL_COPY)
    }

    pub fn proposal() -> Self {
        Self::new(QuestionKind::Proposal, PROPOSAL_ANSWERS, PROPOSAL_COPY)
    }

    fn new(kind: QuestionKind, choices: &'static [Answer], copy: QuestionCopy) -> Self {
        Self {
            kind,
            choices,
            copy,
            selected: 0,
            answered: None,
        }
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    pub fn choices(&self) -> &'static [Answer] {
        self.choices
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn has_answered(&self) -> bool {
        self.answered.is_some()
    }

    pub fn answer(&self) -> Option<Answer> {
        self.answered
    }

    pub fn select_next(&mut self) {
        if !self.has_answered() {
            self.selected = (self.selected + 1) % self.choices.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.has_answered() {
            self.selected = (self.selected + self.choices.len() - 1) % self.choices.len();
        }
    }

    /// Answer with the highlighted choice
    pub fn confirm(&mut self) -> Option<Trigger> {
        self.choose(self.selected)
    }

    /// Answer with choice `index`. Only the first answer counts; returns the
    /// trigger to hand to the sequencer.
    pub fn choose(&mut self, index: usize) -> Option<Trigger> {
        if self.has_answered() {
            return None;
        }
        let answer = *self.choices.get(index)?;
        self.selected = index;
        self.answered = Some(answer);
        Some(match self.kind {
            QuestionKind::Playful => Trigger::PlayfulAnswered(answer),
            QuestionKind::Proposal => Trigger::ProposalAnswered(answer),
        })
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, opacity: f32) {
        let lines = if self.has_answered() {
            self.answered_lines(opacity)
        } else {
            self.question_lines(opacity)
        };

        let height = lines.len() as u16 + 2;
        let content = centered(area, 72, height);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(content, buf);
    }

    fn question_lines(&self, opacity: f32) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::styled("✦", fg(ACCENT_PRIMARY, opacity)),
            Line::raw(""),
            Line::styled(
                self.copy.title,
                fg(TEXT_PRIMARY, opacity).add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
        ];
        for body in self.copy.body {
            lines.push(Line::styled(*body, fg(TEXT_MUTED, opacity)));
        }
        lines.push(Line::raw(""));

        let labels: Vec<&str> = self.choices.iter().map(|a| a.label).collect();
        lines.push(
            ButtonRow::new(&labels)
                .selected(self.selected)
                .opacity(opacity)
                .line(),
        );
        lines
    }

    fn answered_lines(&self, opacity: f32) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::styled("♥", fg(ACCENT_PRIMARY, opacity).add_modifier(Modifier::BOLD)),
            Line::raw(""),
            Line::styled(
                self.copy.thanks_title,
                fg(TEXT_PRIMARY, opacity).add_modifier(Modifier::BOLD),
            ),
        ];
        if !self.copy.thanks_body.is_empty() {
            lines.push(Line::raw(""));
            lines.push(Line::styled(self.copy.thanks_body, fg(TEXT_MUTED, opacity)));
        }
        lines
    }
}
