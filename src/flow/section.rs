//! The five sections of the greeting and the forward-only transition table.

use serde::{Deserialize, Serialize};

/// Which full-screen section is mounted.
///
/// The discriminants are the sequencer's numeric state. Sections only ever
/// move forward; `Celebration` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Opening = 0,
    Playful = 1,
    Affection = 2,
    Proposal = 3,
    Celebration = 4,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Opening,
        Section::Playful,
        Section::Affection,
        Section::Proposal,
        Section::Celebration,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// The section that follows this one, if any
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn is_terminal(self) -> bool {
        self == Section::Celebration
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Opening => "opening",
            Section::Playful => "playful",
            Section::Affection => "affection",
            Section::Proposal => "proposal",
            Section::Celebration => "celebration",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selectable answer on a question section.
///
/// `token` is what gets recorded; it never influences the next section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Answer {
    pub token: &'static str,
    pub label: &'static str,
}

impl Answer {
    pub const fn new(token: &'static str, label: &'static str) -> Self {
        Self { token, label }
    }
}

pub const PLAYFUL_ANSWERS: &[Answer] = &[
    Answer::new("yes", "Haan, bilkul"),
    Answer::new("very", "Bahut cute"),
];

pub const PROPOSAL_ANSWERS: &[Answer] = &[
    Answer::new("yes", "Haan"),
    Answer::new("absolutely", "Bilkul Haan"),
    Answer::new("ofcourse", "Zaroor"),
];

/// User requests that can move the sequencer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Begin,
    PlayfulAnswered(Answer),
    MessagesComplete,
    ProposalAnswered(Answer),
}

/// Pure transition function: where `trigger` leads from `section`, or
/// `None` if the trigger does not apply there.
pub fn transition(section: Section, trigger: &Trigger) -> Option<Section> {
    match (section, trigger) {
        (Section::Opening, Trigger::Begin) => Some(Section::Playful),
        (Section::Playful, Trigger::PlayfulAnswered(_)) => Some(Section::Affection),
        (Section::Affection, Trigger::MessagesComplete) => Some(Section::Proposal),
        (Section::Proposal, Trigger::ProposalAnswered(_)) => Some(Section::Celebration),
        _ => None,
    }
}
