//! Error types for the server layer.

/// Errors that can end a connection or prevent the server from starting.
///
/// Game-level rejections never appear here — they travel to the offending
/// client as [`ServerEvent::Error`](undercover_protocol::ServerEvent::Error)
/// events and the connection lives on.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Binding, accepting, or raw socket I/O failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The WebSocket handshake or framing failed.
    #[error("websocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),
}
