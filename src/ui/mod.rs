pub mod action;
pub mod app;
pub mod components;
pub mod events;
pub mod sections;
pub mod terminal_guard;

pub use action::Action;
pub use app::App;
pub use events::AppEvent;
pub use sections::SectionView;
