//! Room actor: an isolated Tokio task that owns one game.
//!
//! Each room runs in its own task and talks to the outside world through an
//! mpsc channel: no shared mutable state, just message passing. The actor
//! owns three things: the authoritative [`GameState`], the binding table
//! from live sessions to durable player ids, and an outbound event sender
//! per player.

use std::collections::HashMap;

use tokio::sync::{mpsc, oneshot};
use undercover_protocol::{
    GamePhase, PlayerId, Recipient, RoomId, ServerEvent, SessionId,
};
use undercover_state::{GameState, RoleVisibility, RoomConfig};
use undercover_words::WordBank;

use crate::RoomError;

/// Channel for delivering outbound events to one player's connection.
pub type EventSender = mpsc::UnboundedSender<ServerEvent>;

/// The fire-and-forget game actions a bound player can take.
///
/// Join, reconnect, and room creation are not here; those need replies and
/// are routed by the [`RoomRegistry`](crate::RoomRegistry). Everything in
/// this enum follows the silent-no-op contract: an unauthorized or
/// mistimed action is dropped without touching state or producing events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    SetImpostorCount(usize),
    StartGame,
    PlayerReady,
    StartVoting,
    Vote(PlayerId),
    ForceEndVoting,
    NextRound,
    PlayAgain,
}

/// Commands sent to a room actor through its channel.
pub(crate) enum RoomCommand {
    /// Admit a new player into the lobby.
    Join {
        session: SessionId,
        name: String,
        password: String,
        sender: EventSender,
        reply: oneshot::Sender<Result<PlayerId, RoomError>>,
    },

    /// Rebind a previously held session to a fresh one.
    Reconnect {
        session: SessionId,
        old_session: SessionId,
        password: String,
        sender: EventSender,
        reply: oneshot::Sender<Result<PlayerId, RoomError>>,
    },

    /// A game action from a bound session.
    Action {
        session: SessionId,
        action: GameAction,
    },

    /// Request room metadata.
    Info {
        reply: oneshot::Sender<RoomInfo>,
    },

    /// Shut the room down.
    Shutdown,
}

/// A snapshot of room metadata (not the game state itself).
#[derive(Debug, Clone, PartialEq)]
pub struct RoomInfo {
    pub room_id: RoomId,
    pub phase: GamePhase,
    pub player_count: usize,
    pub round_number: u32,
    pub game_number: u32,
}

/// Handle to a running room actor. Cheap to clone, since it wraps an
/// `mpsc::Sender`. The registry holds one per room.
#[derive(Clone)]
pub struct RoomHandle {
    room_id: RoomId,
    sender: mpsc::Sender<RoomCommand>,
}

impl RoomHandle {
    /// The room this handle talks to.
    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    /// Asks the room to admit a player. The returned id is durable for the
    /// life of the room.
    pub async fn join(
        &self,
        session: SessionId,
        name: String,
        password: String,
        sender: EventSender,
    ) -> Result<PlayerId, RoomError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(RoomCommand::Join {
                session,
                name,
                password,
                sender,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RoomError::Unavailable(self.room_id.clone()))?;
        reply_rx
            .await
            .map_err(|_| RoomError::Unavailable(self.room_id.clone()))?
    }

    /// Asks the room to rebind `old_session`'s seat to `session`.
    pub async fn reconnect(
        &self,
        session: SessionId,
        old_session: SessionId,
        password: String,
        sender: EventSender,
    ) -> Result<PlayerId, RoomError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(RoomCommand::Reconnect {
                session,
                old_session,
                password,
                sender,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RoomError::Unavailable(self.room_id.clone()))?;
        reply_rx
            .await
            .map_err(|_| RoomError::Unavailable(self.room_id.clone()))?
    }

    /// Sends a game action (fire-and-forget).
    pub async fn action(
        &self,
        session: SessionId,
        action: GameAction,
    ) -> Result<(), RoomError> {
        self.sender
            .send(RoomCommand::Action { session, action })
            .await
            .map_err(|_| RoomError::Unavailable(self.room_id.clone()))
    }

    /// Requests the current room metadata.
    pub async fn info(&self) -> Result<RoomInfo, RoomError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(RoomCommand::Info { reply: reply_tx })
            .await
            .map_err(|_| RoomError::Unavailable(self.room_id.clone()))?;
        reply_rx
            .await
            .map_err(|_| RoomError::Unavailable(self.room_id.clone()))
    }

    /// Tells the room to shut down.
    pub async fn shutdown(&self) -> Result<(), RoomError> {
        self.sender
            .send(RoomCommand::Shutdown)
            .await
            .map_err(|_| RoomError::Unavailable(self.room_id.clone()))
    }
}

/// What a game action requires of its caller. Checked in exactly one place
/// ([`RoomActor::authorize`]) so the no-op-on-violation contract holds
/// uniformly instead of being re-derived per command.
#[derive(Debug, Clone, Copy)]
enum Authority {
    /// Caller must be the host.
    Host,
    /// Caller must be the host and the room must be in the given phase.
    HostIn(GamePhase),
}

/// The internal room actor state. Runs inside a Tokio task.
struct RoomActor {
    state: GameState,
    bank: WordBank,
    /// Live transport sessions → durable player ids. Reconnection is a
    /// remove-and-reinsert here; the player records never move.
    bindings: HashMap<SessionId, PlayerId>,
    /// Per-player outbound channels, keyed by durable id.
    senders: HashMap<PlayerId, EventSender>,
    receiver: mpsc::Receiver<RoomCommand>,
}

impl RoomActor {
    /// Runs the actor loop, processing commands until shutdown. Each
    /// command, including any phase transition it triggers, completes
    /// before the next is received.
    async fn run(mut self) {
        tracing::info!(room = %self.state.room_id(), "room actor started");

        while let Some(cmd) = self.receiver.recv().await {
            match cmd {
                RoomCommand::Join {
                    session,
                    name,
                    password,
                    sender,
                    reply,
                } => {
                    let result = self.handle_join(session, name, password, sender);
                    let _ = reply.send(result);
                }
                RoomCommand::Reconnect {
                    session,
                    old_session,
                    password,
                    sender,
                    reply,
                } => {
                    let result =
                        self.handle_reconnect(session, old_session, password, sender);
                    let _ = reply.send(result);
                }
                RoomCommand::Action { session, action } => {
                    self.handle_action(session, action);
                }
                RoomCommand::Info { reply } => {
                    let _ = reply.send(self.info());
                }
                RoomCommand::Shutdown => {
                    tracing::info!(room = %self.state.room_id(), "room shutting down");
                    break;
                }
            }
        }

        tracing::info!(room = %self.state.room_id(), "room actor stopped");
    }

    fn handle_join(
        &mut self,
        session: SessionId,
        name: String,
        password: String,
        sender: EventSender,
    ) -> Result<PlayerId, RoomError> {
        let room_id = self.state.room_id().clone();
        if !self.state.password_matches(&password) {
            return Err(RoomError::WrongPassword(room_id));
        }
        if !self.state.phase.is_joinable() {
            return Err(RoomError::GameInProgress(room_id));
        }

        let player_id = self.state.add_player(name);
        self.bindings.insert(session, player_id);
        self.senders.insert(player_id, sender);

        tracing::info!(
            room = %room_id,
            %session,
            player = %player_id,
            players = self.state.players.len(),
            "player joined"
        );

        let player = self
            .state
            .player(player_id)
            .map(|p| p.snapshot(RoleVisibility::Public));
        let mut events = vec![(
            Recipient::Player(player_id),
            ServerEvent::JoinedRoom {
                player_id,
                room: self.state.snapshot(),
            },
        )];
        if let Some(player) = player {
            events.push((
                Recipient::All,
                ServerEvent::PlayerJoined {
                    player,
                    players: self.state.roster(RoleVisibility::Public),
                },
            ));
        }
        self.dispatch(events);

        Ok(player_id)
    }

    fn handle_reconnect(
        &mut self,
        session: SessionId,
        old_session: SessionId,
        password: String,
        sender: EventSender,
    ) -> Result<PlayerId, RoomError> {
        let room_id = self.state.room_id().clone();
        if !self.state.password_matches(&password) {
            return Err(RoomError::WrongPassword(room_id));
        }

        // Consume the stale binding. If two reconnects race for the same
        // old session, the first to be processed wins it and the second
        // finds nothing here.
        let Some(player_id) = self.bindings.remove(&old_session) else {
            return Err(RoomError::PlayerNotFound(room_id));
        };
        self.bindings.insert(session, player_id);
        self.senders.insert(player_id, sender);

        tracing::info!(
            room = %room_id,
            old = %old_session,
            new = %session,
            player = %player_id,
            "player reconnected"
        );

        self.dispatch(vec![(
            Recipient::Player(player_id),
            ServerEvent::Reconnected {
                player_id,
                room: self.state.snapshot(),
            },
        )]);

        Ok(player_id)
    }

    fn handle_action(&mut self, session: SessionId, action: GameAction) {
        let Some(&player_id) = self.bindings.get(&session) else {
            tracing::debug!(%session, "action from unbound session, ignoring");
            return;
        };

        let events = match action {
            GameAction::SetImpostorCount(count) => {
                self.set_impostor_count(player_id, count)
            }
            GameAction::StartGame => self.start_game(player_id),
            GameAction::PlayerReady => self.player_ready(player_id),
            GameAction::StartVoting => self.start_voting(player_id),
            GameAction::Vote(target) => self.vote(player_id, target),
            GameAction::ForceEndVoting => self.force_end_voting(player_id),
            GameAction::NextRound => self.next_round(player_id),
            GameAction::PlayAgain => self.play_again(player_id),
        };
        self.dispatch(events);
    }

    // -- Game actions -----------------------------------------------------

    fn set_impostor_count(
        &mut self,
        caller: PlayerId,
        count: usize,
    ) -> Vec<(Recipient, ServerEvent)> {
        if !self.authorize(caller, Authority::Host) {
            return Vec::new();
        }
        if count == 0 {
            tracing::debug!(room = %self.state.room_id(), "ignoring zero impostor count");
            return Vec::new();
        }
        // Not validated against the roster here: the count is clamped at
        // game start, when the roster is final.
        self.state.impostor_count = count;
        vec![(Recipient::All, ServerEvent::ImpostorCountUpdated { count })]
    }

    fn start_game(&mut self, caller: PlayerId) -> Vec<(Recipient, ServerEvent)> {
        if !self.authorize(caller, Authority::Host) {
            return Vec::new();
        }
        match self.state.begin_game(&self.bank, &mut rand::rng()) {
            Ok(()) => {
                tracing::info!(
                    room = %self.state.room_id(),
                    players = self.state.players.len(),
                    impostors = self.state.impostor_count,
                    game = self.state.game_number,
                    "game started"
                );
                self.role_payloads()
            }
            Err(error) => {
                tracing::debug!(
                    room = %self.state.room_id(),
                    %error,
                    "start game rejected"
                );
                Vec::new()
            }
        }
    }

    fn player_ready(&mut self, caller: PlayerId) -> Vec<(Recipient, ServerEvent)> {
        if self.state.phase != GamePhase::Reveal {
            tracing::debug!(room = %self.state.room_id(), "ready outside reveal, ignoring");
            return Vec::new();
        }
        if !self.state.mark_ready(caller) {
            return Vec::new();
        }
        self.set_phase(GamePhase::Discussion);
        vec![(
            Recipient::All,
            ServerEvent::PhaseChanged {
                phase: GamePhase::Discussion,
                round_number: self.state.round_number,
            },
        )]
    }

    fn start_voting(&mut self, caller: PlayerId) -> Vec<(Recipient, ServerEvent)> {
        if !self.authorize(caller, Authority::HostIn(GamePhase::Discussion)) {
            return Vec::new();
        }
        self.state.open_voting();
        vec![(
            Recipient::All,
            ServerEvent::PhaseChanged {
                phase: GamePhase::Voting,
                round_number: self.state.round_number,
            },
        )]
    }

    fn vote(
        &mut self,
        caller: PlayerId,
        target: PlayerId,
    ) -> Vec<(Recipient, ServerEvent)> {
        if !self.state.cast_vote(caller, target) {
            // Dead, duplicate, or mistimed: the ballot simply never
            // happened.
            return Vec::new();
        }

        let mut events = vec![(
            Recipient::All,
            ServerEvent::PlayerVoted {
                voter: caller,
                players: self.state.roster(RoleVisibility::Public),
            },
        )];
        if self.state.all_alive_voted() {
            events.extend(self.finish_voting());
        }
        events
    }

    fn force_end_voting(&mut self, caller: PlayerId) -> Vec<(Recipient, ServerEvent)> {
        if !self.authorize(caller, Authority::HostIn(GamePhase::Voting)) {
            return Vec::new();
        }
        self.finish_voting()
    }

    fn next_round(&mut self, caller: PlayerId) -> Vec<(Recipient, ServerEvent)> {
        if !self.authorize(caller, Authority::HostIn(GamePhase::Results)) {
            return Vec::new();
        }
        self.state.reset_for_next_round();
        self.set_phase(GamePhase::Discussion);
        vec![(
            Recipient::All,
            ServerEvent::PhaseChanged {
                phase: GamePhase::Discussion,
                round_number: self.state.round_number,
            },
        )]
    }

    fn play_again(&mut self, caller: PlayerId) -> Vec<(Recipient, ServerEvent)> {
        if !self.authorize(caller, Authority::HostIn(GamePhase::GameOver)) {
            return Vec::new();
        }
        self.state.reset_for_next_game();
        tracing::info!(
            room = %self.state.room_id(),
            game = self.state.game_number,
            "room reset for next game"
        );
        vec![(
            Recipient::All,
            ServerEvent::GameReset {
                room: self.state.snapshot(),
            },
        )]
    }

    // -- Shared pieces ----------------------------------------------------

    /// The single authority/phase guard for game actions. A `false` here
    /// means the whole action is dropped before any state changes.
    fn authorize(&self, caller: PlayerId, authority: Authority) -> bool {
        let Some(player) = self.state.player(caller) else {
            return false;
        };
        let allowed = match authority {
            Authority::Host => player.is_host,
            Authority::HostIn(phase) => {
                player.is_host && self.state.phase == phase
            }
        };
        if !allowed {
            tracing::debug!(
                room = %self.state.room_id(),
                player = %caller,
                phase = %self.state.phase,
                "unauthorized action ignored"
            );
        }
        allowed
    }

    /// Resolves the vote. This is the identical path whether the last ballot
    /// arrived or the host forced the box closed. Roles are revealed in
    /// the payload only when the game actually ended.
    fn finish_voting(&mut self) -> Vec<(Recipient, ServerEvent)> {
        let resolution = self.state.resolve_voting();
        let visibility = if resolution.verdict.game_over {
            RoleVisibility::Revealed
        } else {
            RoleVisibility::Public
        };
        let eliminated = resolution
            .eliminated
            .and_then(|id| self.state.player(id))
            .map(|p| p.snapshot(visibility));

        tracing::info!(
            room = %self.state.room_id(),
            eliminated = ?resolution.eliminated,
            game_over = resolution.verdict.game_over,
            "voting resolved"
        );

        vec![(
            Recipient::All,
            ServerEvent::VotingComplete {
                eliminated,
                game_over: resolution.verdict.game_over,
                impostors_win: resolution
                    .verdict
                    .game_over
                    .then_some(resolution.verdict.impostors_win),
                players: self.state.roster(visibility),
            },
        )]
    }

    /// One `GameStarted` per player: impostors get the clue and never the
    /// word, everyone else the word and never the clue.
    fn role_payloads(&self) -> Vec<(Recipient, ServerEvent)> {
        let (Some(category), Some(word)) = (self.state.category, self.state.word)
        else {
            return Vec::new();
        };

        self.state
            .players
            .values()
            .map(|player| {
                let event = if player.is_impostor {
                    ServerEvent::GameStarted {
                        phase: GamePhase::Reveal,
                        category: category.name.to_string(),
                        word: None,
                        word_es: None,
                        clue: Some(word.clue.to_string()),
                        clue_es: word.clue_es.map(str::to_string),
                        is_impostor: true,
                    }
                } else {
                    ServerEvent::GameStarted {
                        phase: GamePhase::Reveal,
                        category: category.name.to_string(),
                        word: Some(word.text.to_string()),
                        word_es: word.text_es.map(str::to_string),
                        clue: None,
                        clue_es: None,
                        is_impostor: false,
                    }
                };
                (Recipient::Player(player.id), event)
            })
            .collect()
    }

    fn set_phase(&mut self, to: GamePhase) {
        debug_assert!(
            self.state.phase.can_transition_to(to),
            "illegal transition {} -> {}",
            self.state.phase,
            to
        );
        self.state.phase = to;
    }

    /// Fans events out to their recipients. Sends to players whose
    /// connection is gone are silently dropped; they can reconnect and
    /// request a snapshot.
    fn dispatch(&self, events: Vec<(Recipient, ServerEvent)>) {
        for (recipient, event) in events {
            match recipient {
                Recipient::All => {
                    for sender in self.senders.values() {
                        let _ = sender.send(event.clone());
                    }
                }
                Recipient::Player(id) => self.send_to(id, event),
            }
        }
    }

    fn send_to(&self, player_id: PlayerId, event: ServerEvent) {
        if let Some(sender) = self.senders.get(&player_id) {
            let _ = sender.send(event);
        }
    }

    fn info(&self) -> RoomInfo {
        RoomInfo {
            room_id: self.state.room_id().clone(),
            phase: self.state.phase,
            player_count: self.state.players.len(),
            round_number: self.state.round_number,
            game_number: self.state.game_number,
        }
    }
}

/// Spawns a new room actor task and returns a handle to it.
///
/// `channel_size` bounds the command channel; if it fills up, senders
/// wait.
pub(crate) fn spawn_room(
    room_id: RoomId,
    password: String,
    config: RoomConfig,
    bank: WordBank,
    channel_size: usize,
) -> RoomHandle {
    let (tx, rx) = mpsc::channel(channel_size);

    let actor = RoomActor {
        state: GameState::new(room_id.clone(), password, config),
        bank,
        bindings: HashMap::new(),
        senders: HashMap::new(),
        receiver: rx,
    };

    tokio::spawn(actor.run());

    RoomHandle {
        room_id,
        sender: tx,
    }
}
