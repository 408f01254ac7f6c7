//! Error types for the state machine.

use undercover_protocol::GamePhase;

/// Precondition violations on state-machine operations.
///
/// Deliberately small: ordinary game outcomes (ties, clamped impostor
/// counts, votes for unknown players) are not errors. These variants only
/// fire when a caller asks for a transition the game loop does not allow.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// `begin_game` was called with fewer players than the configured
    /// minimum.
    #[error("need at least {need} players to start, have {have}")]
    NotEnoughPlayers { have: usize, need: usize },

    /// `begin_game` was called while a game was already running.
    #[error("a game can only start from the lobby, not from {0}")]
    NotInLobby(GamePhase),
}
