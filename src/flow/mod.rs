//! Section sequencing and the message reveal cadence.

pub mod reveal;
pub mod section;
pub mod sequencer;

pub use reveal::{RevealProgress, RevealTick, RevealTimer, DEFAULT_REVEAL_INTERVAL};
pub use section::{transition, Answer, Section, Trigger, PLAYFUL_ANSWERS, PROPOSAL_ANSWERS};
pub use sequencer::{Advance, Answers, Sequencer, SequencerDelays, Step};
