//! End-to-end tests for the `Town` facade, including the byte-level
//! command boundary.

use shoreline::prelude::*;
use tokio::sync::mpsc;

fn definitions() -> Vec<AreaDefinition> {
    vec![
        AreaDefinition::Trading {
            id: AreaId::new("Market"),
            bounds: BoundingBox::new(0.0, 0.0, 100.0, 100.0),
        },
        AreaDefinition::Fishing {
            id: AreaId::new("Pier"),
            bounds: BoundingBox::new(200.0, 0.0, 60.0, 40.0),
        },
    ]
}

fn player(id: u64, name: &str) -> PlayerInfo {
    PlayerInfo::new(PlayerId(id), name)
}

fn request(command_id: u64, area: &str, command: AreaCommand) -> CommandRequest {
    CommandRequest {
        command_id: CommandId(command_id),
        interactable_id: AreaId::new(area),
        command,
    }
}

#[tokio::test]
async fn test_town_spawns_every_definition() {
    let town = Town::new(definitions()).unwrap();
    assert_eq!(town.area_count(), 2);
    assert_eq!(town.snapshot_all().await.len(), 2);
}

#[test]
fn test_malformed_definition_fails_construction() {
    let result = Town::new([AreaDefinition::Trading {
        id: AreaId::new("Flat"),
        bounds: BoundingBox::new(0.0, 0.0, 100.0, 0.0),
    }]);
    match result {
        Err(ShorelineError::Area(err)) => {
            assert!(err.to_string().contains("Flat"));
        }
        other => panic!("expected area error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_full_trading_round_through_the_facade() {
    let town = Town::new(definitions()).unwrap();
    let ada = player(1, "ada");
    let grace = player(2, "grace");

    let response = town
        .handle_command(&ada, request(1, "Market", AreaCommand::JoinGame))
        .await;
    let game_id = match response.outcome {
        CommandOutcome::Payload(Some(ResponsePayload::GameJoined { game_id })) => game_id,
        other => panic!("expected GameJoined, got {other:?}"),
    };
    town.handle_command(&grace, request(2, "Market", AreaCommand::JoinGame))
        .await;

    let response = town
        .handle_command(
            &grace,
            request(
                3,
                "Market",
                AreaCommand::TradeCommand {
                    game_id,
                    offer: TradeOffer {
                        fish: vec![],
                        accept: true,
                    },
                },
            ),
        )
        .await;
    assert!(!response.outcome.is_error());

    match town.snapshot(&AreaId::new("Market")).await.unwrap() {
        AreaModel::TradingArea { game, history, .. } => {
            assert_eq!(game.unwrap().state.status, GameStatus::Over);
            assert_eq!(history.len(), 1);
            assert_eq!(history[0].game_id, game_id);
        }
        other => panic!("wrong model: {other:?}"),
    }
}

#[tokio::test]
async fn test_handle_raw_round_trips_the_codec() {
    let town = Town::new(definitions()).unwrap();
    let ada = player(1, "ada");

    let bytes =
        serde_json::to_vec(&request(7, "Pier", AreaCommand::CastLine)).unwrap();
    let reply = town.handle_raw(&ada, &bytes).await.unwrap();
    let response: CommandResponse = serde_json::from_slice(&reply).unwrap();

    assert_eq!(response.command_id, CommandId(7));
    assert_eq!(response.interactable_id, AreaId::new("Pier"));
    match response.outcome {
        CommandOutcome::Payload(Some(ResponsePayload::FishCaught { fish })) => {
            assert!(!fish.name.is_empty());
        }
        other => panic!("expected FishCaught, got {other:?}"),
    }
}

#[tokio::test]
async fn test_handle_raw_rejects_garbage() {
    let town = Town::new(definitions()).unwrap();
    let ada = player(1, "ada");

    let result = town.handle_raw(&ada, b"definitely not json").await;
    assert!(matches!(result, Err(ShorelineError::Protocol(_))));
}

#[tokio::test]
async fn test_area_errors_travel_inside_raw_responses() {
    let town = Town::new(definitions()).unwrap();
    let ada = player(1, "ada");

    // Dispatch failures never escape as Err; they ride in the response.
    let bytes = serde_json::to_vec(&request(9, "Nowhere", AreaCommand::JoinGame)).unwrap();
    let reply = town.handle_raw(&ada, &bytes).await.unwrap();
    let response: CommandResponse = serde_json::from_slice(&reply).unwrap();
    assert!(response.outcome.is_error());
    assert_eq!(response.command_id, CommandId(9));
}

#[tokio::test]
async fn test_enter_exit_and_subscription() {
    let town = Town::new(definitions()).unwrap();
    let ada = player(1, "ada");
    let market = AreaId::new("Market");

    let (tx, mut rx) = mpsc::unbounded_channel();
    let model = town.enter_area(&market, ada.clone(), tx).await.unwrap();
    assert_eq!(model.occupants(), &[PlayerId(1)]);

    // The entry itself is broadcast first, then the join.
    rx.try_recv().expect("entry should broadcast");
    town.handle_command(&ada, request(4, "Market", AreaCommand::JoinGame))
        .await;
    let update = rx.try_recv().expect("join should broadcast");
    match update {
        AreaModel::TradingArea { game, .. } => assert!(game.is_some()),
        other => panic!("wrong model: {other:?}"),
    }

    town.exit_area(&market, ada.id).await.unwrap();
    match town.snapshot(&market).await.unwrap() {
        AreaModel::TradingArea { occupants, .. } => assert!(occupants.is_empty()),
        other => panic!("wrong model: {other:?}"),
    }
}

#[tokio::test]
async fn test_registering_a_custom_area() {
    let mut town = Town::new(definitions()).unwrap();
    let cove = FishingArea::new(
        AreaId::new("Cove"),
        BoundingBox::new(300.0, 0.0, 20.0, 20.0),
    )
    .unwrap();
    town.register(cove);
    assert_eq!(town.area_count(), 3);

    let ada = player(1, "ada");
    let response = town
        .handle_command(&ada, request(5, "Cove", AreaCommand::CastLine))
        .await;
    assert!(!response.outcome.is_error());
}

#[tokio::test]
async fn test_shutdown_stops_dispatch() {
    let town = Town::new(definitions()).unwrap();
    let ada = player(1, "ada");

    town.shutdown().await;
    tokio::task::yield_now().await;

    let response = town
        .handle_command(&ada, request(6, "Market", AreaCommand::JoinGame))
        .await;
    assert!(response.outcome.is_error());
}
