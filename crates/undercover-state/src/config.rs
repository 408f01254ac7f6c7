//! Room configuration.

use serde::{Deserialize, Serialize};

/// Tunables applied to every room a registry creates.
///
/// Defaults: three players minimum (one impostor and at least two normals
/// to argue with each other), one impostor unless the host asks for more.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Minimum players required before a game can start.
    pub min_players: usize,

    /// Impostor count a fresh room starts with. The host can change it
    /// between games; it is clamped against the roster at game start.
    pub default_impostor_count: usize,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            min_players: 3,
            default_impostor_count: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_config_default() {
        let config = RoomConfig::default();
        assert_eq!(config.min_players, 3);
        assert_eq!(config.default_impostor_count, 1);
    }
}
