//! Player and vote records.

use undercover_protocol::{PlayerId, PlayerSnapshot};

/// Controls whether a snapshot carries the player's secret role.
///
/// `Public` is the default for every broadcast while a game is running;
/// `Revealed` is only used once a game is over and roles are common
/// knowledge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleVisibility {
    /// Hide `is_impostor` — the field is absent from the wire entirely.
    Public,
    /// Include `is_impostor`.
    Revealed,
}

/// One participant of a room.
///
/// The id is durable: it is allocated at join time and survives
/// reconnection (the session binding changes, the player does not).
/// `score` persists across games within the room; everything else is reset
/// by the round/game reset operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Exactly one player per room, always the one with `join_order == 0`.
    pub is_host: bool,
    pub is_impostor: bool,
    pub is_alive: bool,
    pub score: u32,
    pub has_voted: bool,
    /// Set once the player has seen their word/clue ("ready" flag).
    pub ready: bool,
    /// Position in the join sequence; never changes, drives display order.
    pub join_order: u32,
}

impl Player {
    /// The player's public view, with the role included or withheld
    /// according to `visibility`.
    pub fn snapshot(&self, visibility: RoleVisibility) -> PlayerSnapshot {
        PlayerSnapshot {
            id: self.id,
            name: self.name.clone(),
            is_host: self.is_host,
            is_alive: self.is_alive,
            score: self.score,
            has_voted: self.has_voted,
            join_order: self.join_order,
            is_impostor: match visibility {
                RoleVisibility::Public => None,
                RoleVisibility::Revealed => Some(self.is_impostor),
            },
        }
    }
}

/// A single ballot. Ephemeral — cleared every round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vote {
    pub voter: PlayerId,
    pub target: PlayerId,
}
