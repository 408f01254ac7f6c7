//! Room lifecycle and command coordination for Undercover.
//!
//! Each room runs as an isolated Tokio task (actor model) owning its
//! [`GameState`](undercover_state::GameState), its session bindings, and the
//! outbound event channel of every player. Commands for a room are handled
//! strictly one at a time, including any auto-triggered phase transition,
//! so the state machine never observes interleaved mutation.
//!
//! The actor is also where caller authority lives: host-only actions,
//! alive-only voting, and phase gating are checked in one guard before any
//! state is touched, and violations of fire-and-forget actions are silent
//! no-ops, mirroring the permissive "untrusted client" stance of the game.
//!
//! # Key types
//!
//! - [`RoomRegistry`] — creates/destroys rooms, routes commands by room id
//! - [`RoomHandle`] — send commands to a running room actor
//! - [`GameAction`] — the fire-and-forget game command vocabulary
//! - [`RoomError`] — rejections reported back to a single caller

mod error;
mod registry;
mod room;

pub use error::RoomError;
pub use registry::RoomRegistry;
pub use room::{EventSender, GameAction, RoomHandle, RoomInfo};
