//! Shared test utilities: app fixtures and TestBackend rendering helpers.

pub mod fixtures;
pub mod terminal;
