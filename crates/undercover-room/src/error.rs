//! Error types for the room layer.

use undercover_protocol::{Rejection, RoomId};

/// Rejections produced while routing a caller into a room.
///
/// These go back to the single offending caller and never mutate state.
/// Authority and phase violations on fire-and-forget game actions are not
/// errors at all; the actor drops them silently.
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    /// No room with that code exists.
    #[error("room {0} not found")]
    RoomNotFound(RoomId),

    /// The password didn't match, byte for byte.
    #[error("incorrect password for room {0}")]
    WrongPassword(RoomId),

    /// The room has left the lobby; nobody new can join mid-game.
    #[error("game already in progress in room {0}")]
    GameInProgress(RoomId),

    /// Reconnection presented a session the room doesn't know: either it
    /// never existed or another reconnect already claimed it.
    #[error("no player bound to that session in room {0}")]
    PlayerNotFound(RoomId),

    /// The room's command channel is closed or full.
    #[error("room {0} is unavailable")]
    Unavailable(RoomId),
}

impl RoomError {
    /// The wire-level rejection reason reported to the caller.
    pub fn rejection(&self) -> Rejection {
        match self {
            Self::RoomNotFound(_) | Self::Unavailable(_) => Rejection::RoomNotFound,
            Self::WrongPassword(_) => Rejection::WrongPassword,
            Self::GameInProgress(_) => Rejection::GameInProgress,
            Self::PlayerNotFound(_) => Rejection::PlayerNotFound,
        }
    }
}
