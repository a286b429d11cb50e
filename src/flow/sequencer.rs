//! Forward-only sequencing of the greeting's sections, including the
//! delayed steps that follow an answer.

use std::time::Duration;

use super::section::{transition, Answer, Section, Trigger};

/// Pauses between an answer and the section change it causes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequencerDelays {
    /// Playful answer → Affection
    pub playful: Duration,
    /// Proposal answer → Celebration
    pub proposal: Duration,
}

impl Default for SequencerDelays {
    fn default() -> Self {
        Self {
            playful: Duration::from_millis(1500),
            proposal: Duration::from_millis(800),
        }
    }
}

/// Answers recorded during the session. Kept for the record only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Answers {
    pub playful: Option<Answer>,
    pub proposal: Option<Answer>,
}

/// A committed section change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    pub from: Section,
    pub to: Section,
    /// Set on Playful → Affection: background audio should start if muted
    pub unmute_audio: bool,
}

impl Advance {
    fn new(from: Section, to: Section) -> Self {
        Self {
            from,
            to,
            unmute_audio: from == Section::Playful && to == Section::Affection,
        }
    }
}

/// Outcome of [`Sequencer::request`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Committed immediately
    Now(Advance),
    /// Held as pending; call [`Sequencer::fire`] with `to` after `delay`
    After { to: Section, delay: Duration },
    /// Trigger does not apply to the current section, or a change is pending
    Ignored,
}

/// Forward-only state machine over the five sections.
#[derive(Debug, Clone, Default)]
pub struct Sequencer {
    current: Section,
    pending: Option<Section>,
    answers: Answers,
    delays: SequencerDelays,
}

impl Sequencer {
    pub fn new(delays: SequencerDelays) -> Self {
        Self {
            delays,
            ..Self::default()
        }
    }

    pub fn current(&self) -> Section {
        self.current
    }

    pub fn pending(&self) -> Option<Section> {
        self.pending
    }

    pub fn answers(&self) -> Answers {
        self.answers
    }

    pub fn is_finished(&self) -> bool {
        self.current.is_terminal()
    }

    /// Ask to leave the current section
    pub fn request(&mut self, trigger: Trigger) -> Step {
        if self.pending.is_some() {
            return Step::Ignored;
        }
        let Some(to) = transition(self.current, &trigger) else {
            tracing::debug!(section = %self.current, ?trigger, "Ignoring trigger");
            return Step::Ignored;
        };

        let delay = match trigger {
            Trigger::PlayfulAnswered(answer) => {
                self.answers.playful = Some(answer);
                self.delays.playful
            }
            Trigger::ProposalAnswered(answer) => {
                self.answers.proposal = Some(answer);
                self.delays.proposal
            }
            Trigger::Begin | Trigger::MessagesComplete => Duration::ZERO,
        };

        if delay.is_zero() {
            Step::Now(self.commit(to))
        } else {
            self.pending = Some(to);
            Step::After { to, delay }
        }
    }

    /// Commit a pending delayed change. Stale or repeated fires are ignored.
    pub fn fire(&mut self, to: Section) -> Option<Advance> {
        if self.pending != Some(to) {
            tracing::debug!(section = %self.current, target = %to, "Ignoring stale transition");
            return None;
        }
        self.pending = None;
        Some(self.commit(to))
    }

    fn commit(&mut self, to: Section) -> Advance {
        let advance = Advance::new(self.current, to);
        tracing::info!(from = %advance.from, to = %advance.to, "Section changed");
        self.current = to;
        advance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::section::{PLAYFUL_ANSWERS, PROPOSAL_ANSWERS};

    fn walk_to(sequencer: &mut Sequencer, target: Section) {
        while sequencer.current() < target {
            let trigger = match sequencer.current() {
                Section::Opening => Trigger::Begin,
                Section::Playful => Trigger::PlayfulAnswered(PLAYFUL_ANSWERS[0]),
                Section::Affection => Trigger::MessagesComplete,
                Section::Proposal => Trigger::ProposalAnswered(PROPOSAL_ANSWERS[0]),
                Section::Celebration => unreachable!(),
            };
            if let Step::After { to, .. } = sequencer.request(trigger) {
                sequencer.fire(to);
            }
        }
    }

    #[test]
    fn test_starts_at_opening() {
        let sequencer = Sequencer::default();
        assert_eq!(sequencer.current(), Section::Opening);
        assert_eq!(sequencer.pending(), None);
        assert_eq!(sequencer.answers(), Answers::default());
    }

    #[test]
    fn test_begin_is_immediate() {
        let mut sequencer = Sequencer::default();
        let step = sequencer.request(Trigger::Begin);
        assert_eq!(
            step,
            Step::Now(Advance {
                from: Section::Opening,
                to: Section::Playful,
                unmute_audio: false,
            })
        );
        assert_eq!(sequencer.current(), Section::Playful);
    }

    #[test]
    fn test_playful_answer_is_delayed_and_unmutes() {
        let mut sequencer = Sequencer::default();
        walk_to(&mut sequencer, Section::Playful);

        let step = sequencer.request(Trigger::PlayfulAnswered(PLAYFUL_ANSWERS[1]));
        assert_eq!(
            step,
            Step::After {
                to: Section::Affection,
                delay: Duration::from_millis(1500),
            }
        );
        // Still mounted until the delay fires
        assert_eq!(sequencer.current(), Section::Playful);
        assert_eq!(sequencer.answers().playful, Some(PLAYFUL_ANSWERS[1]));

        let advance = sequencer.fire(Section::Affection).unwrap();
        assert!(advance.unmute_audio);
        assert_eq!(sequencer.current(), Section::Affection);
    }

    #[test]
    fn test_requests_while_pending_are_ignored() {
        let mut sequencer = Sequencer::default();
        walk_to(&mut sequencer, Section::Playful);

        sequencer.request(Trigger::PlayfulAnswered(PLAYFUL_ANSWERS[0]));
        let second = sequencer.request(Trigger::PlayfulAnswered(PLAYFUL_ANSWERS[1]));
        assert_eq!(second, Step::Ignored);
        assert_eq!(sequencer.answers().playful, Some(PLAYFUL_ANSWERS[0]));
    }

    #[test]
    fn test_duplicate_fire_is_ignored() {
        let mut sequencer = Sequencer::default();
        walk_to(&mut sequencer, Section::Proposal);

        let step = sequencer.request(Trigger::ProposalAnswered(PROPOSAL_ANSWERS[2]));
        assert_eq!(
            step,
            Step::After {
                to: Section::Celebration,
                delay: Duration::from_millis(800),
            }
        );
        assert!(sequencer.fire(Section::Celebration).is_some());
        assert!(sequencer.fire(Section::Celebration).is_none());
        assert!(sequencer.is_finished());
    }

    #[test]
    fn test_fire_without_pending_is_ignored() {
        let mut sequencer = Sequencer::default();
        assert!(sequencer.fire(Section::Playful).is_none());
        assert_eq!(sequencer.current(), Section::Opening);
    }

    #[test]
    fn test_answer_token_does_not_change_destination() {
        for answer in PROPOSAL_ANSWERS {
            let mut sequencer = Sequencer::default();
            walk_to(&mut sequencer, Section::Proposal);
            match sequencer.request(Trigger::ProposalAnswered(*answer)) {
                Step::After { to, .. } => assert_eq!(to, Section::Celebration),
                other => panic!("expected delayed step, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_zero_delay_commits_immediately() {
        let mut sequencer = Sequencer::new(SequencerDelays {
            playful: Duration::ZERO,
            proposal: Duration::ZERO,
        });
        walk_to(&mut sequencer, Section::Playful);
        let step = sequencer.request(Trigger::PlayfulAnswered(PLAYFUL_ANSWERS[0]));
        assert!(matches!(step, Step::Now(a) if a.unmute_audio));
    }

    #[test]
    fn test_state_is_monotonic_under_arbitrary_requests() {
        let triggers = [
            Trigger::MessagesComplete,
            Trigger::Begin,
            Trigger::Begin,
            Trigger::ProposalAnswered(PROPOSAL_ANSWERS[0]),
            Trigger::PlayfulAnswered(PLAYFUL_ANSWERS[0]),
            Trigger::MessagesComplete,
            Trigger::Begin,
            Trigger::ProposalAnswered(PROPOSAL_ANSWERS[1]),
            Trigger::MessagesComplete,
            Trigger::Begin,
        ];

        let mut sequencer = Sequencer::default();
        let mut last = sequencer.current();
        for trigger in triggers {
            if let Step::After { to, .. } = sequencer.request(trigger) {
                sequencer.fire(to);
            }
            assert!(sequencer.current() >= last);
            assert!(sequencer.current().index() <= 4);
            last = sequencer.current();
        }
        assert_eq!(sequencer.current(), Section::Celebration);
    }
}
