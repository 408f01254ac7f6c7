//! Room registry: creates, tracks, and routes commands to rooms.

use std::collections::HashMap;

use undercover_protocol::{PlayerId, RoomId, SessionId};
use undercover_state::RoomConfig;
use undercover_words::WordBank;

use crate::room::{EventSender, GameAction, RoomHandle, RoomInfo, spawn_room};
use crate::RoomError;

/// Default command channel size for room actors.
const DEFAULT_CHANNEL_SIZE: usize = 64;

/// Owns every active room and routes callers to them by room id.
///
/// An explicit object rather than a module-level map: whoever drives the
/// engine (a server, a test, a demo) constructs its own registry, and two
/// registries never share state.
pub struct RoomRegistry {
    rooms: HashMap<RoomId, RoomHandle>,
    config: RoomConfig,
    bank: WordBank,
}

impl RoomRegistry {
    /// A registry with default room configuration.
    pub fn new(bank: WordBank) -> Self {
        Self::with_config(bank, RoomConfig::default())
    }

    /// A registry whose rooms use the given configuration.
    pub fn with_config(bank: WordBank, config: RoomConfig) -> Self {
        Self {
            rooms: HashMap::new(),
            config,
            bank,
        }
    }

    /// Creates a room. Always succeeds; a room that already holds this
    /// code is replaced and its actor shut down.
    pub fn create_room(&mut self, room_id: RoomId, password: impl Into<String>) {
        let handle = spawn_room(
            room_id.clone(),
            password.into(),
            self.config,
            self.bank,
            DEFAULT_CHANNEL_SIZE,
        );
        if let Some(old) = self.rooms.insert(room_id.clone(), handle) {
            tracing::warn!(room = %room_id, "replacing existing room");
            tokio::spawn(async move {
                let _ = old.shutdown().await;
            });
        }
        tracing::info!(room = %room_id, "room created");
    }

    /// Routes a join request. The sender is stored by the room and carries
    /// every event the new player will receive.
    pub async fn join_room(
        &self,
        session: SessionId,
        room_id: &RoomId,
        name: String,
        password: String,
        sender: EventSender,
    ) -> Result<PlayerId, RoomError> {
        self.handle(room_id)?
            .join(session, name, password, sender)
            .await
    }

    /// Routes a reconnection request: `old_session`'s seat moves to
    /// `session` if the password checks out and the seat is still bound.
    pub async fn reconnect(
        &self,
        session: SessionId,
        room_id: &RoomId,
        old_session: SessionId,
        password: String,
        sender: EventSender,
    ) -> Result<PlayerId, RoomError> {
        self.handle(room_id)?
            .reconnect(session, old_session, password, sender)
            .await
    }

    /// Routes a fire-and-forget game action.
    pub async fn action(
        &self,
        session: SessionId,
        room_id: &RoomId,
        action: GameAction,
    ) -> Result<(), RoomError> {
        self.handle(room_id)?.action(session, action).await
    }

    /// Returns metadata about a room.
    pub async fn room_info(&self, room_id: &RoomId) -> Result<RoomInfo, RoomError> {
        self.handle(room_id)?.info().await
    }

    /// Shuts a room down and forgets it. The idle-sweeping policy deciding
    /// *when* to do this belongs to the caller.
    pub async fn destroy_room(&mut self, room_id: &RoomId) -> Result<(), RoomError> {
        let handle = self
            .rooms
            .remove(room_id)
            .ok_or_else(|| RoomError::RoomNotFound(room_id.clone()))?;
        let _ = handle.shutdown().await;
        tracing::info!(room = %room_id, "room destroyed");
        Ok(())
    }

    /// The number of active rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// All active room ids.
    pub fn room_ids(&self) -> Vec<RoomId> {
        self.rooms.keys().cloned().collect()
    }

    fn handle(&self, room_id: &RoomId) -> Result<&RoomHandle, RoomError> {
        self.rooms
            .get(room_id)
            .ok_or_else(|| RoomError::RoomNotFound(room_id.clone()))
    }
}
