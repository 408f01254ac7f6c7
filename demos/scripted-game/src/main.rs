//! A scripted match driven entirely in-process: four players join a room,
//! a game starts, everyone votes the impostor out, and the room resets for
//! another game. Prints every event each player receives.
//!
//! Run with `cargo run -p scripted-game` (add `RUST_LOG=debug` to watch the
//! room actor's logging alongside the events).

use tokio::sync::mpsc;
use undercover_protocol::{PlayerId, RoomId, ServerEvent, SessionId};
use undercover_room::{GameAction, RoomRegistry};
use undercover_words::WordBank;

struct Seat {
    name: &'static str,
    session: SessionId,
    player: PlayerId,
    rx: mpsc::UnboundedReceiver<ServerEvent>,
}

fn print_events(seats: &mut [Seat]) {
    for seat in seats.iter_mut() {
        while let Ok(event) = seat.rx.try_recv() {
            println!(
                "  {:<6} <- {}",
                seat.name,
                serde_json::to_string(&event).unwrap()
            );
        }
    }
    println!();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let mut registry = RoomRegistry::new(WordBank::builtin());
    let room = RoomId::new("demo");
    registry.create_room(room.clone(), "secret");

    println!("== four players join ==");
    let mut seats = Vec::new();
    for (i, name) in ["Ana", "Bruno", "Carla", "Diego"].iter().enumerate() {
        let (tx, rx) = mpsc::unbounded_channel();
        let session = SessionId(i as u64 + 1);
        let player = registry
            .join_room(session, &room, name.to_string(), "secret".into(), tx)
            .await?;
        seats.push(Seat {
            name,
            session,
            player,
            rx,
        });
    }
    print_events(&mut seats);

    println!("== the host starts the game ==");
    let host = seats[0].session;
    registry.action(host, &room, GameAction::StartGame).await?;

    // Each seat privately learns its role; remember who drew impostor.
    let mut impostor = None;
    for seat in &mut seats {
        if let Some(ServerEvent::GameStarted { is_impostor: true, .. }) =
            seat.rx.recv().await.map(|event| {
                println!(
                    "  {:<6} <- {}",
                    seat.name,
                    serde_json::to_string(&event).unwrap()
                );
                event
            })
        {
            impostor = Some(seat.player);
        }
    }
    println!();
    let impostor = impostor.expect("one seat drew the impostor role");

    println!("== everyone reads their word and readies up ==");
    for i in 0..seats.len() {
        let session = seats[i].session;
        registry.action(session, &room, GameAction::PlayerReady).await?;
    }
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    print_events(&mut seats);

    println!("== the host opens voting; the table has found its suspect ==");
    registry.action(host, &room, GameAction::StartVoting).await?;
    for i in 0..seats.len() {
        let session = seats[i].session;
        registry
            .action(session, &room, GameAction::Vote(impostor))
            .await?;
    }
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    print_events(&mut seats);

    println!("== one more game, scores carried over ==");
    registry.action(host, &room, GameAction::PlayAgain).await?;
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    print_events(&mut seats);

    registry.destroy_room(&room).await?;
    Ok(())
}
