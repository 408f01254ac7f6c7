//! Error types for the protocol layer.

/// Errors that can occur while encoding or decoding messages.
///
/// A `ProtocolError` always means "the bytes were wrong", never "the game
/// rejected you" — rejections travel as ordinary
/// [`ServerEvent::Error`](crate::ServerEvent::Error) events.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed.
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed: malformed JSON, missing fields, or a type
    /// mismatch.
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// The message parsed but is invalid at the protocol level.
    #[error("invalid message: {0}")]
    InvalidMessage(String),
}
