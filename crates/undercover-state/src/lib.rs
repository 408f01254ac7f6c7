//! The authoritative game state machine for Undercover.
//!
//! One [`GameState`] per room. Every mutation is a synchronous, single-pass
//! method, with no I/O and no suspension points, so whoever owns the state (the
//! room actor) can treat each operation as atomic.
//!
//! The operations never panic on "normal" game conditions: hung votes,
//! empty ballot boxes, and over-subscribed impostor counts are encoded in
//! return values (`None`, silent clamping). Only genuine precondition
//! violations (starting a game without enough players, or outside the
//! lobby) surface as [`StateError`].
//!
//! # Key types
//!
//! - [`GameState`] — the root aggregate and its operations
//! - [`Player`] / [`Vote`] — per-room records
//! - [`WinCondition`] / [`VoteResolution`] — resolution results
//! - [`RoomConfig`] — tunables (minimum players, default impostor count)

mod config;
mod error;
mod game;
mod player;

pub use config::RoomConfig;
pub use error::StateError;
pub use game::{GameState, VoteResolution, WinCondition};
pub use player::{Player, RoleVisibility, Vote};
