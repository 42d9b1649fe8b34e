//! Jail Escape: two rooms on top of `warden-engine`.
//!
//! Take the cell key, open the cell door, walk out through the east exit into
//! the tunnel. Spikes in the tunnel kill; press R to start over.

pub mod items;
pub mod flags;
pub mod behaviors;
pub mod scenes;
pub mod game;

pub use game::JailEscape;
