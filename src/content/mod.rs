//! Affection messages: the record type, the stores that serve them, and the
//! one-shot fetch that orders them for display.

pub mod fetcher;
pub mod message;
pub mod store;

pub use fetcher::{load_feed, spawn_fetch, MessageFeed, DEFAULT_COLLECTION};
pub use message::AffectionMessage;
pub use store::{
    parse_collection, ContentError, ContentStore, FileContentStore, HttpContentStore,
    StaticContentStore,
};
