//! The per-room game state and its operations.

use std::collections::HashMap;

use rand::Rng;
use rand::seq::SliceRandom;
use undercover_protocol::{GamePhase, PlayerId, PlayerSnapshot, RoomId, RoomSnapshot};
use undercover_words::{Category, WordBank, WordEntry};

use crate::{Player, RoleVisibility, RoomConfig, StateError, Vote};

/// The outcome of a win-condition check.
///
/// Exactly one of three shapes: game continues (`game_over == false`),
/// normals won (all impostors eliminated), or impostors won (they equal or
/// outnumber the remaining normals). The `>=` tie-break is deliberate: two
/// impostors against two normals is an impostor win, and in the
/// single-impostor game it ends the round decisively once only one normal
/// remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinCondition {
    pub game_over: bool,
    pub impostors_win: bool,
}

/// What a vote resolution produced: who (if anyone) was eliminated, and
/// the win check that followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteResolution {
    pub eliminated: Option<PlayerId>,
    pub verdict: WinCondition,
}

/// The root aggregate: everything the server knows about one room.
///
/// Mutated exclusively through the methods below; each method is a single
/// synchronous pass with no partial states observable from outside.
#[derive(Debug, Clone)]
pub struct GameState {
    room_id: RoomId,
    password: String,
    pub config: RoomConfig,
    pub phase: GamePhase,
    pub players: HashMap<PlayerId, Player>,
    /// Target impostor count for the next game; clamped at game start.
    pub impostor_count: usize,
    pub category: Option<Category>,
    pub word: Option<WordEntry>,
    pub votes: Vec<Vote>,
    /// Last round's elimination, if any. Cleared on round reset.
    pub eliminated: Option<PlayerId>,
    /// 0 in the lobby, 1 from game start, +1 per round.
    pub round_number: u32,
    /// Starts at 1, +1 on every score-preserving game reset.
    pub game_number: u32,
    next_player: u64,
}

impl GameState {
    /// A fresh room: empty, in the lobby, waiting for its first (host)
    /// player.
    pub fn new(room_id: RoomId, password: impl Into<String>, config: RoomConfig) -> Self {
        Self {
            room_id,
            password: password.into(),
            config,
            phase: GamePhase::Lobby,
            players: HashMap::new(),
            impostor_count: config.default_impostor_count,
            category: None,
            word: None,
            votes: Vec::new(),
            eliminated: None,
            round_number: 0,
            game_number: 1,
            next_player: 0,
        }
    }

    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    /// Byte-for-byte, case-sensitive password check.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    /// Appends a new player. The first player ever to join is the host and
    /// stays the host for the life of the room.
    ///
    /// Phase gating is the caller's responsibility: the room layer rejects
    /// joins outside the lobby, but the operation itself stays unguarded so
    /// tests can assemble arbitrary states.
    pub fn add_player(&mut self, name: impl Into<String>) -> PlayerId {
        let id = PlayerId(self.next_player);
        self.next_player += 1;
        let join_order = self.players.len() as u32;
        self.players.insert(
            id,
            Player {
                id,
                name: name.into(),
                is_host: join_order == 0,
                is_impostor: false,
                is_alive: true,
                score: 0,
                has_voted: false,
                ready: false,
                join_order,
            },
        );
        id
    }

    /// Re-deals roles: clears every `is_impostor`, then marks
    /// `min(count, players - 1)` non-host players, chosen by shuffling the
    /// candidates. The host is never an impostor. Asking for more impostors
    /// than there are candidates clamps silently rather than failing.
    pub fn select_impostors(&mut self, count: usize, rng: &mut impl Rng) {
        for player in self.players.values_mut() {
            player.is_impostor = false;
        }

        let mut candidates: Vec<PlayerId> = self
            .players
            .values()
            .filter(|p| !p.is_host)
            .map(|p| p.id)
            .collect();
        // Stable base order before the shuffle, so a seeded rng picks the
        // same players regardless of map iteration order.
        candidates.sort_unstable_by_key(|id| id.0);
        candidates.shuffle(rng);

        let picked = count.min(candidates.len());
        if picked < count {
            tracing::debug!(
                requested = count,
                picked,
                "impostor count clamped to available candidates"
            );
        }
        for id in candidates.into_iter().take(picked) {
            if let Some(player) = self.players.get_mut(&id) {
                player.is_impostor = true;
            }
        }
        self.impostor_count = count;
    }

    /// Starts a game: picks a category and word, deals roles, and moves to
    /// the reveal phase.
    ///
    /// Hard preconditions: the room must be in the lobby and hold at least
    /// `config.min_players` players.
    pub fn begin_game(
        &mut self,
        bank: &WordBank,
        rng: &mut impl Rng,
    ) -> Result<(), StateError> {
        if self.phase != GamePhase::Lobby {
            return Err(StateError::NotInLobby(self.phase));
        }
        if self.players.len() < self.config.min_players {
            return Err(StateError::NotEnoughPlayers {
                have: self.players.len(),
                need: self.config.min_players,
            });
        }

        let category = bank.pick_category(rng);
        let word = bank.pick_word(&category, rng);
        self.category = Some(category);
        self.word = Some(word);
        self.select_impostors(self.impostor_count, rng);
        self.phase = GamePhase::Reveal;
        self.round_number = 1;
        Ok(())
    }

    /// Computes the win condition from alive players only.
    pub fn check_win_condition(&self) -> WinCondition {
        let alive_impostors = self
            .players
            .values()
            .filter(|p| p.is_alive && p.is_impostor)
            .count();
        let alive_normals = self
            .players
            .values()
            .filter(|p| p.is_alive && !p.is_impostor)
            .count();

        if alive_impostors == 0 {
            WinCondition {
                game_over: true,
                impostors_win: false,
            }
        } else if alive_impostors >= alive_normals {
            // Equal counts go to the impostors.
            WinCondition {
                game_over: true,
                impostors_win: true,
            }
        } else {
            WinCondition {
                game_over: false,
                impostors_win: false,
            }
        }
    }

    /// Counts ballots per target and returns the unique maximum, or `None`
    /// on a hung vote (shared maximum) or an empty ballot box. Ballots
    /// naming a player who is no longer in the room are excluded rather
    /// than tripping anything downstream.
    pub fn tally_votes(&self) -> Option<PlayerId> {
        let mut counts: HashMap<PlayerId, usize> = HashMap::new();
        for vote in &self.votes {
            if self.players.contains_key(&vote.target) {
                *counts.entry(vote.target).or_insert(0) += 1;
            }
        }

        let mut top: Option<(PlayerId, usize)> = None;
        let mut tied = false;
        for (target, count) in counts {
            match top {
                None => top = Some((target, count)),
                Some((_, best)) if count > best => {
                    top = Some((target, count));
                    tied = false;
                }
                Some((_, best)) if count == best => tied = true,
                Some(_) => {}
            }
        }

        if tied { None } else { top.map(|(target, _)| target) }
    }

    /// Marks a player dead and records them as this round's elimination.
    /// Unknown ids are ignored; the previous elimination record is left
    /// alone, not cleared.
    pub fn eliminate(&mut self, id: PlayerId) {
        match self.players.get_mut(&id) {
            Some(player) => {
                player.is_alive = false;
                self.eliminated = Some(id);
            }
            None => {
                tracing::debug!(player = %id, "eliminate ignored unknown player");
            }
        }
    }

    /// Applies end-of-game scoring: alive impostors +2 on an impostor win,
    /// alive normals +1 on a normal win. The dead earn nothing either way,
    /// and scores only ever grow. They outlive games, dying with the room.
    pub fn update_scores(&mut self, impostors_won: bool) {
        for player in self.players.values_mut() {
            if !player.is_alive {
                continue;
            }
            if impostors_won && player.is_impostor {
                player.score += 2;
            } else if !impostors_won && !player.is_impostor {
                player.score += 1;
            }
        }
    }

    /// Opens the ballot box: clears any stale votes and `has_voted` flags
    /// and enters the voting phase.
    pub fn open_voting(&mut self) {
        self.votes.clear();
        for player in self.players.values_mut() {
            player.has_voted = false;
        }
        self.phase = GamePhase::Voting;
    }

    /// Records a ballot, if the voter may cast one: they must exist, be
    /// alive, not have voted this round, and the room must actually be
    /// voting. Returns whether the ballot was accepted; a `false` is a
    /// silent no-op with no state touched.
    pub fn cast_vote(&mut self, voter: PlayerId, target: PlayerId) -> bool {
        if self.phase != GamePhase::Voting {
            return false;
        }
        let Some(player) = self.players.get_mut(&voter) else {
            return false;
        };
        if !player.is_alive || player.has_voted {
            return false;
        }
        player.has_voted = true;
        self.votes.push(Vote { voter, target });
        true
    }

    /// Returns `true` once every alive player has voted this round.
    pub fn all_alive_voted(&self) -> bool {
        self.players
            .values()
            .filter(|p| p.is_alive)
            .all(|p| p.has_voted)
    }

    /// Marks a player as having seen their word. Returns `true` when every
    /// alive player is ready, the cue to advance from reveal to discussion.
    pub fn mark_ready(&mut self, id: PlayerId) -> bool {
        let Some(player) = self.players.get_mut(&id) else {
            return false;
        };
        player.ready = true;
        self.players
            .values()
            .filter(|p| p.is_alive)
            .all(|p| p.ready)
    }

    /// The one and only vote-resolution path, used both when the last
    /// ballot arrives and when the host forces the vote closed: tally,
    /// eliminate on a unique maximum, check the win condition, advance to
    /// `Results` or `GameOver`, and apply scoring only when the game ended.
    pub fn resolve_voting(&mut self) -> VoteResolution {
        let eliminated = self.tally_votes();
        if let Some(id) = eliminated {
            self.eliminate(id);
        }

        let verdict = self.check_win_condition();
        self.phase = if verdict.game_over {
            GamePhase::GameOver
        } else {
            GamePhase::Results
        };
        if verdict.game_over {
            self.update_scores(verdict.impostors_win);
        }

        VoteResolution {
            eliminated,
            verdict,
        }
    }

    /// Clears the ephemeral per-round state (ballots, elimination record,
    /// `has_voted` flags) and advances the round counter. Scores, roles,
    /// and aliveness are untouched.
    pub fn reset_for_next_round(&mut self) {
        self.votes.clear();
        self.eliminated = None;
        self.round_number += 1;
        for player in self.players.values_mut() {
            player.has_voted = false;
        }
    }

    /// Returns the room to the lobby for a fresh game: word and roles
    /// cleared, everyone alive again, round counter zeroed, game counter
    /// bumped. Scores are explicitly preserved.
    pub fn reset_for_next_game(&mut self) {
        self.phase = GamePhase::Lobby;
        self.category = None;
        self.word = None;
        self.votes.clear();
        self.eliminated = None;
        self.round_number = 0;
        self.game_number += 1;
        for player in self.players.values_mut() {
            player.is_impostor = false;
            player.is_alive = true;
            player.has_voted = false;
            player.ready = false;
        }
    }

    /// The roster, sorted by join order, with roles shown or hidden per
    /// `visibility`.
    pub fn roster(&self, visibility: RoleVisibility) -> Vec<PlayerSnapshot> {
        let mut players: Vec<&Player> = self.players.values().collect();
        players.sort_by_key(|p| p.join_order);
        players.into_iter().map(|p| p.snapshot(visibility)).collect()
    }

    /// The public room snapshot: never the word, never the roles.
    pub fn snapshot(&self) -> RoomSnapshot {
        RoomSnapshot {
            room_id: self.room_id.clone(),
            phase: self.phase,
            players: self.roster(RoleVisibility::Public),
            impostor_count: self.impostor_count,
            category: self.category.map(|c| c.name.to_string()),
            round_number: self.round_number,
            game_number: self.game_number,
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
