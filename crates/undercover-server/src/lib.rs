//! WebSocket transport for Undercover.
//!
//! A deliberately thin layer: accept connections, allocate a session id per
//! connection, decode [`ClientCommand`]s, route them into the
//! [`RoomRegistry`], and pump the room's [`ServerEvent`]s back out. All
//! game rules, authority checks, and phase gating live behind the registry;
//! nothing here inspects game state.
//!
//! The flow per connection:
//!   1. Accept the WebSocket and allocate a fresh [`SessionId`]
//!   2. Send a `Connected` greeting carrying that id (clients keep it for
//!      reconnection)
//!   3. Loop: decode commands → dispatch → rejections go back to this
//!      client only
//!
//! A writer task per connection drains the player's event channel into the
//! socket. When the socket dies the channel backs up harmlessly and the
//! seat stays bound until the player reconnects from a new session.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{Mutex, mpsc};
use tokio_tungstenite::tungstenite::Message;
use undercover_protocol::{
    ClientCommand, Codec, JsonCodec, ServerEvent, SessionId,
};
use undercover_room::{GameAction, RoomError, RoomRegistry};
use undercover_words::WordBank;

mod error;

pub use error::ServerError;

/// Counter for allocating unique session ids across all connections.
static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// A running Undercover server: a TCP listener plus the shared room
/// registry every connection handler routes into.
pub struct UndercoverServer {
    listener: TcpListener,
    registry: Arc<Mutex<RoomRegistry>>,
}

impl UndercoverServer {
    /// Binds the server to `addr` with the given word catalog.
    pub async fn bind(addr: &str, bank: WordBank) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(addr).await?;
        tracing::info!(addr, "Undercover server listening");
        Ok(Self {
            listener,
            registry: Arc::new(Mutex::new(RoomRegistry::new(bank))),
        })
    }

    /// The address the server actually bound to (useful with port 0).
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.listener.local_addr()
    }

    /// Runs the accept loop until the process is terminated.
    pub async fn run(self) -> Result<(), ServerError> {
        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    let registry = Arc::clone(&self.registry);
                    tokio::spawn(async move {
                        if let Err(error) =
                            handle_connection(stream, registry).await
                        {
                            tracing::debug!(
                                %addr,
                                %error,
                                "connection ended with error"
                            );
                        }
                    });
                }
                Err(error) => {
                    tracing::error!(%error, "accept failed");
                }
            }
        }
    }
}

/// Handles one connection from accept to close.
async fn handle_connection(
    stream: TcpStream,
    registry: Arc<Mutex<RoomRegistry>>,
) -> Result<(), ServerError> {
    let ws = tokio_tungstenite::accept_async(stream).await?;
    let session = SessionId(NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed));
    let codec = JsonCodec;

    let (mut sink, mut stream) = ws.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerEvent>();

    // Writer task: everything the room (or the dispatcher) sends this
    // player goes out through here, in order.
    let writer = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            let bytes = match codec.encode(&event) {
                Ok(bytes) => bytes,
                Err(error) => {
                    tracing::error!(%error, "failed to encode event");
                    continue;
                }
            };
            if sink.send(Message::Binary(bytes.into())).await.is_err() {
                break;
            }
        }
    });

    let _ = tx.send(ServerEvent::Connected { session });
    tracing::info!(%session, "client connected");

    while let Some(msg) = stream.next().await {
        let data = match msg {
            Ok(Message::Binary(data)) => data.to_vec(),
            Ok(Message::Text(text)) => text.as_bytes().to_vec(),
            Ok(Message::Close(_)) => break,
            Ok(_) => continue, // ping/pong/frame
            Err(error) => {
                tracing::debug!(%session, %error, "recv error");
                break;
            }
        };

        let command: ClientCommand = match codec.decode(&data) {
            Ok(command) => command,
            Err(error) => {
                tracing::debug!(%session, %error, "undecodable command, ignoring");
                continue;
            }
        };

        if let Err(error) = dispatch(session, command, &registry, &tx).await {
            let _ = tx.send(ServerEvent::Error {
                reason: error.rejection(),
                message: error.to_string(),
            });
        }
    }

    // The socket is gone; stop writing to it. The room may still hold the
    // event sender — the seat stays bound for reconnection, and anything
    // sent meanwhile is dropped with the channel.
    writer.abort();
    tracing::info!(%session, "client disconnected");
    Ok(())
}

/// Routes one decoded command into the registry.
async fn dispatch(
    session: SessionId,
    command: ClientCommand,
    registry: &Arc<Mutex<RoomRegistry>>,
    tx: &mpsc::UnboundedSender<ServerEvent>,
) -> Result<(), RoomError> {
    match command {
        ClientCommand::CreateRoom { room_id, password } => {
            registry
                .lock()
                .await
                .create_room(room_id.clone(), password);
            let _ = tx.send(ServerEvent::RoomCreated { room_id });
            Ok(())
        }
        ClientCommand::JoinRoom {
            room_id,
            name,
            password,
        } => registry
            .lock()
            .await
            .join_room(session, &room_id, name, password, tx.clone())
            .await
            .map(|_| ()),
        ClientCommand::Reconnect {
            room_id,
            old_session,
            password,
        } => registry
            .lock()
            .await
            .reconnect(session, &room_id, old_session, password, tx.clone())
            .await
            .map(|_| ()),
        ClientCommand::SetImpostorCount { room_id, count } => {
            registry
                .lock()
                .await
                .action(session, &room_id, GameAction::SetImpostorCount(count))
                .await
        }
        ClientCommand::StartGame { room_id } => {
            registry
                .lock()
                .await
                .action(session, &room_id, GameAction::StartGame)
                .await
        }
        ClientCommand::PlayerReady { room_id } => {
            registry
                .lock()
                .await
                .action(session, &room_id, GameAction::PlayerReady)
                .await
        }
        ClientCommand::StartVoting { room_id } => {
            registry
                .lock()
                .await
                .action(session, &room_id, GameAction::StartVoting)
                .await
        }
        ClientCommand::Vote { room_id, target } => {
            registry
                .lock()
                .await
                .action(session, &room_id, GameAction::Vote(target))
                .await
        }
        ClientCommand::ForceEndVoting { room_id } => {
            registry
                .lock()
                .await
                .action(session, &room_id, GameAction::ForceEndVoting)
                .await
        }
        ClientCommand::NextRound { room_id } => {
            registry
                .lock()
                .await
                .action(session, &room_id, GameAction::NextRound)
                .await
        }
        ClientCommand::PlayAgain { room_id } => {
            registry
                .lock()
                .await
                .action(session, &room_id, GameAction::PlayAgain)
                .await
        }
    }
}
