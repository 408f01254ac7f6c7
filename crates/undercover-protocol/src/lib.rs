//! Wire protocol for Undercover.
//!
//! This crate defines the "language" that clients and the game server speak:
//!
//! - **Identity types** ([`SessionId`], [`PlayerId`], [`RoomId`]) — who is
//!   talking, and about which room.
//! - **Commands and events** ([`ClientCommand`], [`ServerEvent`]) — the
//!   inbound/outbound message surface of the room coordinator.
//! - **Public views** ([`PlayerSnapshot`], [`RoomSnapshot`]) — what a room
//!   looks like from the outside. Secret roles and the secret word never
//!   appear in these unless explicitly revealed.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how messages are converted
//!   to and from bytes.
//!
//! # Architecture
//!
//! The protocol layer sits below everything else. It doesn't know about
//! connections, rooms, or game rules; it only knows the shape of messages.
//!
//! ```text
//! Transport (bytes) → Protocol (commands/events) → Rooms (game state)
//! ```

mod codec;
mod error;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ProtocolError;
pub use types::{
    ClientCommand, GamePhase, PlayerId, PlayerSnapshot, Recipient, Rejection,
    RoomId, RoomSnapshot, ServerEvent, SessionId,
};
