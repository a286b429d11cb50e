mod settings;

pub use settings::{AudioConfig, Config, ContentConfig, ContentSource, TimingConfig};
