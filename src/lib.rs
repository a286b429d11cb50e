pub mod audio;
pub mod config;
pub mod content;
pub mod flow;
pub mod ui;
pub mod util;

pub use audio::{AudioError, AudioPlayer, AudioToggle};
pub use config::Config;
pub use content::{AffectionMessage, ContentError, ContentStore, MessageFeed};
pub use flow::{Section, Sequencer, Trigger};
pub use ui::App;
