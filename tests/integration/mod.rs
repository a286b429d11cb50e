//! Integration tests for the greeting flow
//!
//! These drive a full `App` through its event channel with an in-memory
//! content store and a recording audio player.

#[path = "../common/mod.rs"]
pub mod common;

pub mod greeting_flow;
pub mod rendering;
