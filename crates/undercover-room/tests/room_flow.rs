//! Integration tests driving the registry and room actors end to end:
//! join/reconnect routing, authority gating, per-player role payloads,
//! vote resolution, and the score-preserving game reset.

use std::time::Duration;

use tokio::sync::mpsc;
use undercover_protocol::{
    GamePhase, PlayerId, RoomId, ServerEvent, SessionId,
};
use undercover_room::{GameAction, RoomError, RoomRegistry};
use undercover_words::WordBank;

// =========================================================================
// Helpers
// =========================================================================

fn registry() -> RoomRegistry {
    RoomRegistry::new(WordBank::builtin())
}

fn sid(n: u64) -> SessionId {
    SessionId(n)
}

/// One simulated connection: its session, its seat, and its event stream.
struct Client {
    session: SessionId,
    player: PlayerId,
    rx: mpsc::UnboundedReceiver<ServerEvent>,
}

async fn recv(client: &mut Client) -> ServerEvent {
    tokio::time::timeout(Duration::from_secs(5), client.rx.recv())
        .await
        .expect("timed out waiting for event")
        .expect("event channel closed")
}

/// Receives events until one matches, discarding the rest.
async fn recv_until(
    client: &mut Client,
    accept: impl Fn(&ServerEvent) -> bool,
) -> ServerEvent {
    loop {
        let event = recv(client).await;
        if accept(&event) {
            return event;
        }
    }
}

/// Discards everything currently queued for the client.
fn drain(client: &mut Client) {
    while client.rx.try_recv().is_ok() {}
}

/// Asserts that nothing arrives for the client. The short sleep gives the
/// room actor time to have processed whatever was sent before the check.
async fn assert_silent(client: &mut Client, context: &str) {
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(
        client.rx.try_recv().is_err(),
        "expected silence after {context}"
    );
}

/// Creates a room and joins the named players, draining the join chatter.
async fn setup(
    reg: &mut RoomRegistry,
    room: &RoomId,
    password: &str,
    names: &[&str],
) -> Vec<Client> {
    reg.create_room(room.clone(), password);
    let mut clients = Vec::new();
    for (i, name) in names.iter().enumerate() {
        let (tx, rx) = mpsc::unbounded_channel();
        let session = sid(i as u64 + 1);
        let player = reg
            .join_room(session, room, name.to_string(), password.to_string(), tx)
            .await
            .expect("join should succeed");
        clients.push(Client {
            session,
            player,
            rx,
        });
    }
    for client in &mut clients {
        drain(client);
    }
    clients
}

/// What each player privately learned at game start.
struct RoleInfo {
    player: PlayerId,
    is_impostor: bool,
    word: Option<String>,
    clue: Option<String>,
    category: String,
}

/// Host starts the game; collects every player's `GameStarted` payload.
async fn start_game(
    reg: &RoomRegistry,
    room: &RoomId,
    clients: &mut [Client],
) -> Vec<RoleInfo> {
    let host = clients[0].session;
    reg.action(host, room, GameAction::StartGame).await.unwrap();

    let mut infos = Vec::new();
    for client in clients.iter_mut() {
        let event = recv_until(client, |e| {
            matches!(e, ServerEvent::GameStarted { .. })
        })
        .await;
        let ServerEvent::GameStarted {
            word,
            clue,
            is_impostor,
            category,
            ..
        } = event
        else {
            unreachable!()
        };
        infos.push(RoleInfo {
            player: client.player,
            is_impostor,
            word,
            clue,
            category,
        });
    }
    infos
}

fn impostor_of(infos: &[RoleInfo]) -> PlayerId {
    infos
        .iter()
        .find(|i| i.is_impostor)
        .map(|i| i.player)
        .expect("exactly one impostor expected")
}

/// Everyone readies up; waits for the discussion transition everywhere.
async fn ready_all(reg: &RoomRegistry, room: &RoomId, clients: &mut [Client]) {
    for i in 0..clients.len() {
        let session = clients[i].session;
        reg.action(session, room, GameAction::PlayerReady)
            .await
            .unwrap();
    }
    for client in clients.iter_mut() {
        recv_until(client, |e| {
            matches!(
                e,
                ServerEvent::PhaseChanged {
                    phase: GamePhase::Discussion,
                    ..
                }
            )
        })
        .await;
    }
}

/// Host opens voting; waits for the phase change everywhere.
async fn open_voting(reg: &RoomRegistry, room: &RoomId, clients: &mut [Client]) {
    let host = clients[0].session;
    reg.action(host, room, GameAction::StartVoting)
        .await
        .unwrap();
    for client in clients.iter_mut() {
        recv_until(client, |e| {
            matches!(
                e,
                ServerEvent::PhaseChanged {
                    phase: GamePhase::Voting,
                    ..
                }
            )
        })
        .await;
    }
}

// =========================================================================
// Joining
// =========================================================================

#[tokio::test]
async fn test_join_assigns_seats_in_join_order() {
    let mut reg = registry();
    let room = RoomId::new("attic");
    reg.create_room(room.clone(), "hunter2");

    let mut clients = Vec::new();
    for (i, name) in ["Ana", "Bruno", "Carla"].iter().enumerate() {
        let (tx, rx) = mpsc::unbounded_channel();
        let session = sid(i as u64 + 1);
        let player = reg
            .join_room(session, &room, name.to_string(), "hunter2".into(), tx)
            .await
            .unwrap();
        clients.push(Client {
            session,
            player,
            rx,
        });
    }

    // The last joiner's private event shows the full, ordered roster.
    let event = recv_until(&mut clients[2], |e| {
        matches!(e, ServerEvent::JoinedRoom { .. })
    })
    .await;
    let ServerEvent::JoinedRoom { player_id, room } = event else {
        unreachable!()
    };
    assert_eq!(player_id, clients[2].player);
    assert_eq!(room.phase, GamePhase::Lobby);
    let orders: Vec<u32> = room.players.iter().map(|p| p.join_order).collect();
    assert_eq!(orders, vec![0, 1, 2]);
    assert!(room.players[0].is_host);
    assert!(!room.players[1].is_host);
    assert!(!room.players[2].is_host);

    // The host saw both later arrivals broadcast.
    let event = recv_until(&mut clients[0], |e| {
        matches!(e, ServerEvent::PlayerJoined { player, .. } if player.name == "Carla")
    })
    .await;
    let ServerEvent::PlayerJoined { players, .. } = event else {
        unreachable!()
    };
    assert_eq!(players.len(), 3);
}

#[tokio::test]
async fn test_join_unknown_room_rejected() {
    let reg = registry();
    let (tx, _rx) = mpsc::unbounded_channel();
    let result = reg
        .join_room(
            sid(1),
            &RoomId::new("nowhere"),
            "Ana".into(),
            "pw".into(),
            tx,
        )
        .await;
    assert!(matches!(result, Err(RoomError::RoomNotFound(_))));
}

#[tokio::test]
async fn test_join_password_is_case_sensitive() {
    let mut reg = registry();
    let room = RoomId::new("attic");
    reg.create_room(room.clone(), "Password123");

    let (tx, _rx) = mpsc::unbounded_channel();
    let result = reg
        .join_room(sid(1), &room, "Ana".into(), "password123".into(), tx)
        .await;
    assert!(matches!(result, Err(RoomError::WrongPassword(_))));

    let (tx, _rx) = mpsc::unbounded_channel();
    let result = reg
        .join_room(sid(1), &room, "Ana".into(), "Password123".into(), tx)
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_join_rejected_once_game_started() {
    let mut reg = registry();
    let room = RoomId::new("attic");
    let mut clients = setup(&mut reg, &room, "pw", &["Ana", "Bruno", "Carla"]).await;
    start_game(&reg, &room, &mut clients).await;

    let (tx, _rx) = mpsc::unbounded_channel();
    let result = reg
        .join_room(sid(9), &room, "Diego".into(), "pw".into(), tx)
        .await;
    assert!(matches!(result, Err(RoomError::GameInProgress(_))));
}

#[tokio::test]
async fn test_create_room_replaces_existing() {
    let mut reg = registry();
    let room = RoomId::new("attic");
    reg.create_room(room.clone(), "first");
    reg.create_room(room.clone(), "second");
    assert_eq!(reg.room_count(), 1);

    let (tx, _rx) = mpsc::unbounded_channel();
    let result = reg
        .join_room(sid(1), &room, "Ana".into(), "first".into(), tx)
        .await;
    assert!(matches!(result, Err(RoomError::WrongPassword(_))));

    let (tx, _rx) = mpsc::unbounded_channel();
    let result = reg
        .join_room(sid(1), &room, "Ana".into(), "second".into(), tx)
        .await;
    assert!(result.is_ok());
}

// =========================================================================
// Host authority and phase gating
// =========================================================================

#[tokio::test]
async fn test_set_impostor_count_is_host_only() {
    let mut reg = registry();
    let room = RoomId::new("attic");
    let mut clients = setup(&mut reg, &room, "pw", &["Ana", "Bruno", "Carla"]).await;

    // Non-host: silently ignored.
    reg.action(clients[1].session, &room, GameAction::SetImpostorCount(2))
        .await
        .unwrap();
    assert_silent(&mut clients[0], "non-host set_impostor_count").await;

    // Host: broadcast to everyone.
    reg.action(clients[0].session, &room, GameAction::SetImpostorCount(2))
        .await
        .unwrap();
    for client in &mut clients {
        let event = recv(client).await;
        assert_eq!(event, ServerEvent::ImpostorCountUpdated { count: 2 });
    }
}

#[tokio::test]
async fn test_set_impostor_count_ignores_zero() {
    let mut reg = registry();
    let room = RoomId::new("attic");
    let mut clients = setup(&mut reg, &room, "pw", &["Ana", "Bruno", "Carla"]).await;

    reg.action(clients[0].session, &room, GameAction::SetImpostorCount(0))
        .await
        .unwrap();
    assert_silent(&mut clients[1], "zero impostor count").await;
}

#[tokio::test]
async fn test_start_game_requires_host_and_quorum() {
    let mut reg = registry();
    let room = RoomId::new("attic");
    let mut clients = setup(&mut reg, &room, "pw", &["Ana", "Bruno"]).await;

    // Host, but only two players: ignored.
    reg.action(clients[0].session, &room, GameAction::StartGame)
        .await
        .unwrap();
    assert_silent(&mut clients[0], "start with two players").await;

    // Third player arrives; a non-host still can't start.
    let (tx, rx) = mpsc::unbounded_channel();
    let player = reg
        .join_room(sid(3), &room, "Carla".into(), "pw".into(), tx)
        .await
        .unwrap();
    clients.push(Client {
        session: sid(3),
        player,
        rx,
    });
    for client in &mut clients {
        drain(client);
    }
    reg.action(clients[1].session, &room, GameAction::StartGame)
        .await
        .unwrap();
    assert_silent(&mut clients[1], "non-host start").await;

    // Host with quorum: the game begins.
    let infos = start_game(&reg, &room, &mut clients).await;
    assert_eq!(infos.len(), 3);
}

// =========================================================================
// Role payload confidentiality
// =========================================================================

#[tokio::test]
async fn test_game_started_payloads_keep_secrets_apart() {
    let mut reg = registry();
    let room = RoomId::new("attic");
    let mut clients =
        setup(&mut reg, &room, "pw", &["Ana", "Bruno", "Carla", "Diego"]).await;

    let infos = start_game(&reg, &room, &mut clients).await;

    let impostors: Vec<&RoleInfo> =
        infos.iter().filter(|i| i.is_impostor).collect();
    assert_eq!(impostors.len(), 1, "default game has one impostor");
    assert_ne!(
        impostors[0].player, clients[0].player,
        "the host never draws the impostor role"
    );

    for info in &infos {
        if info.is_impostor {
            assert!(info.word.is_none(), "impostor must not see the word");
            assert!(info.clue.is_some(), "impostor gets the clue");
        } else {
            assert!(info.word.is_some(), "normal gets the word");
            assert!(info.clue.is_none(), "normal must not see the clue");
        }
    }

    // Everyone hears the same category.
    assert!(infos.iter().all(|i| i.category == infos[0].category));
}

// =========================================================================
// Reveal → discussion
// =========================================================================

#[tokio::test]
async fn test_all_ready_advances_to_discussion() {
    let mut reg = registry();
    let room = RoomId::new("attic");
    let mut clients = setup(&mut reg, &room, "pw", &["Ana", "Bruno", "Carla"]).await;
    start_game(&reg, &room, &mut clients).await;

    // Two of three ready: nothing happens yet.
    reg.action(clients[0].session, &room, GameAction::PlayerReady)
        .await
        .unwrap();
    reg.action(clients[1].session, &room, GameAction::PlayerReady)
        .await
        .unwrap();
    assert_silent(&mut clients[2], "partial readiness").await;

    // The last ready triggers the broadcast with the round number.
    reg.action(clients[2].session, &room, GameAction::PlayerReady)
        .await
        .unwrap();
    for client in &mut clients {
        let event = recv(client).await;
        assert_eq!(
            event,
            ServerEvent::PhaseChanged {
                phase: GamePhase::Discussion,
                round_number: 1
            }
        );
    }
}

// =========================================================================
// Voting
// =========================================================================

#[tokio::test]
async fn test_unmasking_the_impostor_ends_the_game_with_scores() {
    let mut reg = registry();
    let room = RoomId::new("attic");
    let mut clients =
        setup(&mut reg, &room, "pw", &["Ana", "Bruno", "Carla", "Diego"]).await;

    let infos = start_game(&reg, &room, &mut clients).await;
    let impostor = impostor_of(&infos);
    ready_all(&reg, &room, &mut clients).await;
    open_voting(&reg, &room, &mut clients).await;

    for i in 0..clients.len() {
        let session = clients[i].session;
        reg.action(session, &room, GameAction::Vote(impostor))
            .await
            .unwrap();
    }

    for client in &mut clients {
        let event = recv_until(client, |e| {
            matches!(e, ServerEvent::VotingComplete { .. })
        })
        .await;
        let ServerEvent::VotingComplete {
            eliminated,
            game_over,
            impostors_win,
            players,
        } = event
        else {
            unreachable!()
        };

        assert!(game_over);
        assert_eq!(impostors_win, Some(false));
        let eliminated = eliminated.expect("someone was voted out");
        assert_eq!(eliminated.id, impostor);
        assert_eq!(eliminated.is_impostor, Some(true));

        // Roles are public knowledge now, and the survivors got paid.
        for snapshot in &players {
            assert!(snapshot.is_impostor.is_some());
            let expected = if snapshot.id == impostor { 0 } else { 1 };
            assert_eq!(snapshot.score, expected, "{}", snapshot.name);
        }
    }
}

#[tokio::test]
async fn test_hung_vote_eliminates_nobody_and_hides_roles() {
    let mut reg = registry();
    let room = RoomId::new("attic");
    let mut clients =
        setup(&mut reg, &room, "pw", &["Ana", "Bruno", "Carla", "Diego"]).await;

    start_game(&reg, &room, &mut clients).await;
    ready_all(&reg, &room, &mut clients).await;
    open_voting(&reg, &room, &mut clients).await;

    // Two against two: a hung vote.
    let (a, b) = (clients[1].player, clients[2].player);
    let votes = [(0, a), (1, b), (2, a), (3, b)];
    for (i, target) in votes {
        let session = clients[i].session;
        reg.action(session, &room, GameAction::Vote(target))
            .await
            .unwrap();
    }

    let event = recv_until(&mut clients[0], |e| {
        matches!(e, ServerEvent::VotingComplete { .. })
    })
    .await;
    let ServerEvent::VotingComplete {
        eliminated,
        game_over,
        impostors_win,
        players,
    } = event
    else {
        unreachable!()
    };
    assert_eq!(eliminated, None);
    assert!(!game_over);
    assert_eq!(impostors_win, None);
    assert!(
        players.iter().all(|p| p.is_impostor.is_none()),
        "roles stay hidden while the game runs"
    );

    // The host can start the next round of discussion.
    for client in &mut clients {
        drain(client);
    }
    reg.action(clients[0].session, &room, GameAction::NextRound)
        .await
        .unwrap();
    let event = recv(&mut clients[1]).await;
    assert_eq!(
        event,
        ServerEvent::PhaseChanged {
            phase: GamePhase::Discussion,
            round_number: 2
        }
    );
}

#[tokio::test]
async fn test_eliminated_player_cannot_vote_next_round() {
    let mut reg = registry();
    let room = RoomId::new("attic");
    let mut clients =
        setup(&mut reg, &room, "pw", &["Ana", "Bruno", "Carla", "Diego"]).await;

    let infos = start_game(&reg, &room, &mut clients).await;
    let impostor = impostor_of(&infos);
    ready_all(&reg, &room, &mut clients).await;
    open_voting(&reg, &room, &mut clients).await;

    // Everyone piles onto a normal player who isn't the host.
    let victim_index = (1..clients.len())
        .find(|&i| clients[i].player != impostor)
        .unwrap();
    let victim = clients[victim_index].player;
    for i in 0..clients.len() {
        let session = clients[i].session;
        reg.action(session, &room, GameAction::Vote(victim))
            .await
            .unwrap();
    }
    let event = recv_until(&mut clients[0], |e| {
        matches!(e, ServerEvent::VotingComplete { .. })
    })
    .await;
    let ServerEvent::VotingComplete { game_over, .. } = event else {
        unreachable!()
    };
    assert!(!game_over, "one impostor vs two normals keeps playing");

    for client in &mut clients {
        drain(client);
    }
    reg.action(clients[0].session, &room, GameAction::NextRound)
        .await
        .unwrap();
    reg.action(clients[0].session, &room, GameAction::StartVoting)
        .await
        .unwrap();

    // The ghost's ballot is a silent no-op.
    let ghost_session = clients[victim_index].session;
    reg.action(ghost_session, &room, GameAction::Vote(impostor))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(20)).await;
    for client in &mut clients {
        drain(client);
    }

    // The three survivors vote; only their ballots count, and the vote
    // resolves after the third one.
    for i in 0..clients.len() {
        if i == victim_index {
            continue;
        }
        let session = clients[i].session;
        reg.action(session, &room, GameAction::Vote(impostor))
            .await
            .unwrap();
    }
    let event = recv_until(&mut clients[0], |e| {
        matches!(e, ServerEvent::VotingComplete { .. })
    })
    .await;
    let ServerEvent::VotingComplete {
        eliminated,
        game_over,
        ..
    } = event
    else {
        unreachable!()
    };
    assert_eq!(eliminated.unwrap().id, impostor);
    assert!(game_over);
}

#[tokio::test]
async fn test_force_end_voting_resolves_partial_ballots() {
    let mut reg = registry();
    let room = RoomId::new("attic");
    let mut clients =
        setup(&mut reg, &room, "pw", &["Ana", "Bruno", "Carla", "Diego"]).await;

    let infos = start_game(&reg, &room, &mut clients).await;
    let impostor = impostor_of(&infos);
    ready_all(&reg, &room, &mut clients).await;
    open_voting(&reg, &room, &mut clients).await;

    // Only the host votes.
    reg.action(clients[0].session, &room, GameAction::Vote(impostor))
        .await
        .unwrap();
    for client in &mut clients {
        recv_until(client, |e| matches!(e, ServerEvent::PlayerVoted { .. })).await;
    }

    // A non-host can't force the resolution.
    reg.action(clients[1].session, &room, GameAction::ForceEndVoting)
        .await
        .unwrap();
    assert_silent(&mut clients[1], "non-host force end").await;

    // The host can; the single ballot is a unique maximum.
    reg.action(clients[0].session, &room, GameAction::ForceEndVoting)
        .await
        .unwrap();
    let event = recv_until(&mut clients[2], |e| {
        matches!(e, ServerEvent::VotingComplete { .. })
    })
    .await;
    let ServerEvent::VotingComplete {
        eliminated,
        game_over,
        impostors_win,
        ..
    } = event
    else {
        unreachable!()
    };
    assert_eq!(eliminated.unwrap().id, impostor);
    assert!(game_over);
    assert_eq!(impostors_win, Some(false));
}

// =========================================================================
// Play again
// =========================================================================

#[tokio::test]
async fn test_play_again_returns_to_lobby_with_scores() {
    let mut reg = registry();
    let room = RoomId::new("attic");
    let mut clients =
        setup(&mut reg, &room, "pw", &["Ana", "Bruno", "Carla", "Diego"]).await;

    let infos = start_game(&reg, &room, &mut clients).await;
    let impostor = impostor_of(&infos);
    ready_all(&reg, &room, &mut clients).await;
    open_voting(&reg, &room, &mut clients).await;
    for i in 0..clients.len() {
        let session = clients[i].session;
        reg.action(session, &room, GameAction::Vote(impostor))
            .await
            .unwrap();
    }
    for client in &mut clients {
        recv_until(client, |e| matches!(e, ServerEvent::VotingComplete { .. })).await;
    }

    reg.action(clients[0].session, &room, GameAction::PlayAgain)
        .await
        .unwrap();

    let event = recv(&mut clients[3]).await;
    let ServerEvent::GameReset { room: snapshot } = event else {
        panic!("expected GameReset, got {event:?}");
    };
    assert_eq!(snapshot.phase, GamePhase::Lobby);
    assert_eq!(snapshot.game_number, 2);
    assert_eq!(snapshot.round_number, 0);
    assert_eq!(snapshot.category, None);
    for player in &snapshot.players {
        assert!(player.is_alive, "everyone returns alive");
        assert!(player.is_impostor.is_none(), "roles hidden again");
        let expected = if player.id == impostor { 0 } else { 1 };
        assert_eq!(player.score, expected, "scores survive the reset");
    }
}

// =========================================================================
// Reconnection
// =========================================================================

#[tokio::test]
async fn test_reconnect_preserves_player_identity() {
    let mut reg = registry();
    let room = RoomId::new("attic");
    let mut clients = setup(&mut reg, &room, "pw", &["Ana", "Bruno", "Carla"]).await;

    let before = reg.room_info(&room).await.unwrap();
    let old_session = clients[1].session;
    let old_player = clients[1].player;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let player = reg
        .reconnect(sid(99), &room, old_session, "pw".into(), tx)
        .await
        .expect("reconnect should succeed");
    assert_eq!(player, old_player, "the durable id never changes");

    let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .unwrap()
        .unwrap();
    let ServerEvent::Reconnected { player_id, room: snapshot } = event else {
        panic!("expected Reconnected, got {event:?}");
    };
    assert_eq!(player_id, old_player);

    // Same seat: name, host flag, join order, score all intact.
    let seat = snapshot
        .players
        .iter()
        .find(|p| p.id == old_player)
        .unwrap();
    assert_eq!(seat.name, "Bruno");
    assert!(!seat.is_host);
    assert_eq!(seat.join_order, 1);
    assert_eq!(seat.score, 0);
    assert_eq!(snapshot.players.len(), before.player_count);
}

#[tokio::test]
async fn test_duplicate_reconnect_loses_the_race() {
    let mut reg = registry();
    let room = RoomId::new("attic");
    let clients = setup(&mut reg, &room, "pw", &["Ana", "Bruno", "Carla"]).await;
    let old_session = clients[2].session;

    let (tx, _rx) = mpsc::unbounded_channel();
    reg.reconnect(sid(50), &room, old_session, "pw".into(), tx)
        .await
        .expect("first reconnect wins");

    // The stale session was consumed by the first rebind.
    let (tx, _rx) = mpsc::unbounded_channel();
    let result = reg
        .reconnect(sid(51), &room, old_session, "pw".into(), tx)
        .await;
    assert!(matches!(result, Err(RoomError::PlayerNotFound(_))));
}

#[tokio::test]
async fn test_reconnect_rechecks_password() {
    let mut reg = registry();
    let room = RoomId::new("attic");
    let clients = setup(&mut reg, &room, "pw", &["Ana", "Bruno", "Carla"]).await;

    let (tx, _rx) = mpsc::unbounded_channel();
    let result = reg
        .reconnect(sid(50), &room, clients[1].session, "wrong".into(), tx)
        .await;
    assert!(matches!(result, Err(RoomError::WrongPassword(_))));
}

// =========================================================================
// Registry bookkeeping
// =========================================================================

#[tokio::test]
async fn test_destroy_room_forgets_it() {
    let mut reg = registry();
    let room = RoomId::new("attic");
    setup(&mut reg, &room, "pw", &["Ana"]).await;
    assert_eq!(reg.room_count(), 1);

    reg.destroy_room(&room).await.unwrap();
    assert_eq!(reg.room_count(), 0);

    let (tx, _rx) = mpsc::unbounded_channel();
    let result = reg
        .join_room(sid(5), &room, "Bruno".into(), "pw".into(), tx)
        .await;
    assert!(matches!(result, Err(RoomError::RoomNotFound(_))));
}

#[tokio::test]
async fn test_destroy_unknown_room_errors() {
    let mut reg = registry();
    let result = reg.destroy_room(&RoomId::new("nowhere")).await;
    assert!(matches!(result, Err(RoomError::RoomNotFound(_))));
}

#[tokio::test]
async fn test_room_info_tracks_phase_and_count() {
    let mut reg = registry();
    let room = RoomId::new("attic");
    let mut clients = setup(&mut reg, &room, "pw", &["Ana", "Bruno", "Carla"]).await;

    let info = reg.room_info(&room).await.unwrap();
    assert_eq!(info.phase, GamePhase::Lobby);
    assert_eq!(info.player_count, 3);
    assert_eq!(info.game_number, 1);

    start_game(&reg, &room, &mut clients).await;
    let info = reg.room_info(&room).await.unwrap();
    assert_eq!(info.phase, GamePhase::Reveal);
    assert_eq!(info.round_number, 1);
}
