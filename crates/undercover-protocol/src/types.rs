//! Core wire types for Undercover.
//!
//! Everything in this module either travels on the wire or describes where a
//! message should be delivered. The serde attributes are load-bearing: client
//! SDKs parse these exact JSON shapes.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A transport session: one live connection to the server.
///
/// Allocated by the transport adapter when a connection is accepted. A
/// session is *not* a player: a player who drops and reconnects comes back
/// on a fresh session, presenting the old one to reclaim their seat.
///
/// `#[serde(transparent)]` serializes this as the bare number, so
/// `SessionId(42)` is just `42` in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S-{}", self.0)
    }
}

/// A player's durable identity within a room.
///
/// Allocated by the room when the player joins and never changed afterwards
/// (reconnection rebinds a session to this id, it does not mint a new one).
/// Vote targets and roster entries use this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P-{}", self.0)
    }
}

/// A room code, chosen by whoever creates the room.
///
/// Opaque to the protocol: compared byte-for-byte, case-sensitive, no
/// normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub String);

impl RoomId {
    /// Creates a room id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// GamePhase — the per-room state machine
// ---------------------------------------------------------------------------

/// The stage a room's game loop is in.
///
/// Transitions are strictly ordered; no skipping:
///
/// ```text
/// lobby → reveal → discussion ⇄ voting → results
///   ↑                             ↓
///   └────────── gameOver ←────────┘
/// ```
///
/// - **Lobby**: accepting players; the only joinable phase.
/// - **Reveal**: each player privately learns their word (or clue).
/// - **Discussion**: free-form talk; the host decides when to vote.
/// - **Voting**: alive players each cast one ballot.
/// - **Results**: an elimination (or hung vote) was announced; the game
///   continues into another discussion round.
/// - **GameOver**: a win condition fired. The host can loop back to Lobby
///   with scores intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
    Lobby,
    Reveal,
    Discussion,
    Voting,
    Results,
    GameOver,
}

impl GamePhase {
    /// Returns `true` if the room is accepting new players.
    pub fn is_joinable(&self) -> bool {
        matches!(self, Self::Lobby)
    }

    /// Returns `true` if moving from `self` to `target` is a legal
    /// transition of the game loop.
    pub fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Lobby, Self::Reveal)
                | (Self::Reveal, Self::Discussion)
                | (Self::Discussion, Self::Voting)
                | (Self::Voting, Self::Results)
                | (Self::Voting, Self::GameOver)
                | (Self::Results, Self::Discussion)
                | (Self::GameOver, Self::Lobby)
        )
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lobby => write!(f, "lobby"),
            Self::Reveal => write!(f, "reveal"),
            Self::Discussion => write!(f, "discussion"),
            Self::Voting => write!(f, "voting"),
            Self::Results => write!(f, "results"),
            Self::GameOver => write!(f, "gameOver"),
        }
    }
}

// ---------------------------------------------------------------------------
// Public views
// ---------------------------------------------------------------------------

/// A player as everyone is allowed to see them.
///
/// `is_impostor` is only populated when roles are public knowledge, i.e.
/// after a game ends. While a game is running the field is absent from the
/// JSON entirely, so a snooping client learns nothing from the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub name: String,
    pub is_host: bool,
    pub is_alive: bool,
    pub score: u32,
    pub has_voted: bool,
    pub join_order: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_impostor: Option<bool>,
}

/// The public state of a room: everything *except* the secret word and
/// player roles. Player lists are always sorted by join order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub room_id: RoomId,
    pub phase: GamePhase,
    pub players: Vec<PlayerSnapshot>,
    pub impostor_count: usize,
    pub category: Option<String>,
    pub round_number: u32,
    pub game_number: u32,
}

// ---------------------------------------------------------------------------
// Recipient — who should receive an event?
// ---------------------------------------------------------------------------

/// Specifies who an outbound event is for.
///
/// The room actor produces `(Recipient, ServerEvent)` pairs; the dispatch
/// layer fans them out. Role payloads use `Player` so the secret word is
/// only ever written to the one connection entitled to see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recipient {
    /// Every player in the room.
    All,
    /// One specific player.
    Player(PlayerId),
}

// ---------------------------------------------------------------------------
// Rejection — the user-facing error taxonomy
// ---------------------------------------------------------------------------

/// Why a command was rejected.
///
/// Rejections are reported to the single offending caller and never mutate
/// room state. Fire-and-forget authority violations (a non-host calling
/// `startGame`, a dead player voting) are not rejections; they are silent
/// no-ops and produce no event at all.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error,
)]
pub enum Rejection {
    #[error("room not found")]
    RoomNotFound,
    #[error("incorrect password")]
    WrongPassword,
    #[error("game already in progress")]
    GameInProgress,
    #[error("player not found")]
    PlayerNotFound,
    #[error("only the host can do that")]
    NotHost,
    #[error("that action is not valid in the current phase")]
    InvalidPhaseForAction,
}

// ---------------------------------------------------------------------------
// ClientCommand — inbound
// ---------------------------------------------------------------------------

/// Everything a client can ask the server to do.
///
/// `#[serde(tag = "type")]` produces internally tagged JSON:
/// `{ "type": "JoinRoom", "room_id": "attic", "name": "Ana", "password": "x" }`.
/// Every command names the room it is about; the caller's identity is the
/// session the command arrived on, never a field a client could forge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientCommand {
    /// Create a room with the given code and shared password.
    CreateRoom { room_id: RoomId, password: String },

    /// Join an existing room. Only valid while the room is in the lobby.
    JoinRoom {
        room_id: RoomId,
        name: String,
        password: String,
    },

    /// Reclaim a seat after a dropped connection. The caller presents the
    /// session id it previously held; the password is re-checked.
    Reconnect {
        room_id: RoomId,
        old_session: SessionId,
        password: String,
    },

    /// Host only: how many impostors the *next* game should have.
    SetImpostorCount { room_id: RoomId, count: usize },

    /// Host only: pick a word, assign roles, move to the reveal phase.
    StartGame { room_id: RoomId },

    /// The caller has seen their word/clue and is ready to talk.
    PlayerReady { room_id: RoomId },

    /// Host only: close discussion and open the ballot box.
    StartVoting { room_id: RoomId },

    /// Cast a ballot against a player. One per round, alive players only.
    Vote { room_id: RoomId, target: PlayerId },

    /// Host only: resolve the vote now, however many ballots are in.
    ForceEndVoting { room_id: RoomId },

    /// Host only: after results, go another round of discussion.
    NextRound { room_id: RoomId },

    /// Host only: after game over, return the room to the lobby with
    /// scores intact.
    PlayAgain { room_id: RoomId },
}

impl ClientCommand {
    /// The room this command is addressed to.
    pub fn room_id(&self) -> &RoomId {
        match self {
            Self::CreateRoom { room_id, .. }
            | Self::JoinRoom { room_id, .. }
            | Self::Reconnect { room_id, .. }
            | Self::SetImpostorCount { room_id, .. }
            | Self::StartGame { room_id }
            | Self::PlayerReady { room_id }
            | Self::StartVoting { room_id }
            | Self::Vote { room_id, .. }
            | Self::ForceEndVoting { room_id }
            | Self::NextRound { room_id }
            | Self::PlayAgain { room_id } => room_id,
        }
    }
}

// ---------------------------------------------------------------------------
// ServerEvent — outbound
// ---------------------------------------------------------------------------

/// Everything the server can tell a client.
///
/// Most events are broadcast to the whole room; `Connected`, `JoinedRoom`,
/// `Reconnected`, `GameStarted`, and `Error` go to a single recipient.
/// `GameStarted` is the confidentiality-critical one: each player receives
/// their own filtered copy, and no copy ever contains both the word and the
/// clue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerEvent {
    /// Greeting sent once per connection, carrying the session id the
    /// client will need if it ever has to reconnect.
    Connected { session: SessionId },

    /// The room was created. Sent to the creator only.
    RoomCreated { room_id: RoomId },

    /// Sent to a joining player: their seat and the current room state.
    JoinedRoom {
        player_id: PlayerId,
        room: RoomSnapshot,
    },

    /// Broadcast when anyone joins: the newcomer plus the full roster.
    PlayerJoined {
        player: PlayerSnapshot,
        players: Vec<PlayerSnapshot>,
    },

    /// Sent to a player who successfully reclaimed their seat.
    Reconnected {
        player_id: PlayerId,
        room: RoomSnapshot,
    },

    /// Broadcast when the host changes the impostor count for the next game.
    ImpostorCountUpdated { count: usize },

    /// Per-player role payload at game start. Impostors get the clue and
    /// never the word; everyone else gets the word and never the clue.
    GameStarted {
        phase: GamePhase,
        category: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        word: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        word_es: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        clue: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        clue_es: Option<String>,
        is_impostor: bool,
    },

    /// Broadcast on every phase advance that isn't covered by a richer
    /// event (reveal→discussion, discussion→voting, results→discussion).
    PhaseChanged {
        phase: GamePhase,
        round_number: u32,
    },

    /// Broadcast after each accepted ballot. The roster shows who has
    /// voted; it never shows who they voted for.
    PlayerVoted {
        voter: PlayerId,
        players: Vec<PlayerSnapshot>,
    },

    /// Broadcast when a vote resolves, either because everyone voted or the host
    /// forced it. `impostors_win` is only present when the game ended, and
    /// only then does the roster reveal who the impostors were.
    VotingComplete {
        eliminated: Option<PlayerSnapshot>,
        game_over: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        impostors_win: Option<bool>,
        players: Vec<PlayerSnapshot>,
    },

    /// Broadcast when the host starts a fresh game in the same room.
    GameReset { room: RoomSnapshot },

    /// A command was rejected. Sent to the offending caller only.
    Error { reason: Rejection, message: String },
}

// =========================================================================
// Tests
// =========================================================================
