//! Unit tests for command handlers

use super::*;
use crate::{
    cli::{LiveCli, SummonerArg},
    LiveClientConfig,
};
use clap::Parser;
use serde_json::json;
use std::time::Duration;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn client_for(server: &MockServer) -> LiveClient {
    let config = LiveClientConfig::new(
        &format!("{}/liveclientdata", server.uri()),
        Duration::from_secs(1),
    )
    .unwrap();
    LiveClient::with_config(config).unwrap()
}

#[cfg(test)]
mod command_tests {
    use super::*;

    #[test]
    fn test_render_pretty_and_compact() {
        let value = json!({"kills": 1});
        assert_eq!(render(&value, true).unwrap(), "{\"kills\":1}");
        assert_eq!(render(&value, false).unwrap(), "{\n  \"kills\": 1\n}");
    }

    #[tokio::test]
    async fn test_fetch_endpoint_requires_summoner() {
        let server = MockServer::start().await;
        let client = client_for(&server);

        let err = fetch_endpoint(&client, Endpoint::PlayerItems, None)
            .await
            .unwrap_err();
        match err {
            LiveClientError::MissingSummonerName { endpoint } => {
                assert_eq!(endpoint, "playeritems")
            }
            other => panic!("Expected MissingSummonerName error, got {other:?}"),
        }

        // Nothing was sent
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_endpoint_gates_on_needs_summoner() {
        let server = MockServer::start().await;
        let client = client_for(&server);

        let mut rejected = Vec::new();
        for endpoint in Endpoint::ALL.iter().filter(|e| e.needs_summoner()) {
            match fetch_endpoint(&client, *endpoint, None).await {
                Err(LiveClientError::MissingSummonerName { endpoint }) => rejected.push(endpoint),
                other => panic!("Expected MissingSummonerName error, got {other:?}"),
            }
        }

        assert_eq!(
            rejected,
            vec![
                "playerscores",
                "playersummonerspells",
                "playermainrunes",
                "playeritems"
            ]
        );
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_endpoint_active_player_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/liveclientdata/activeplayername"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!("Riot Tuxedo")))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let value = fetch_endpoint(&client, Endpoint::ActivePlayerName, None)
            .await
            .unwrap();
        assert_eq!(value, json!("Riot Tuxedo"));
    }

    #[tokio::test]
    async fn test_fetch_endpoint_drops_unknown_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/liveclientdata/gamestats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "gameMode": "ARAM",
                "gameTime": 61.0,
                "mapName": "Map12",
                "mapNumber": 12,
                "mapTerrain": "Default",
                "somethingNew": true
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let value = fetch_endpoint(&client, Endpoint::GameStats, None)
            .await
            .unwrap();
        assert_eq!(value["gameMode"], "ARAM");
        assert_eq!(value["mapNumber"], 12);
        assert!(value.get("somethingNew").is_none());
    }

    #[tokio::test]
    async fn test_handle_command_player_scores() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/liveclientdata/playerscores"))
            .and(query_param("summonerName", "Riot Tuxedo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "assists": 2,
                "creepScore": 60,
                "deaths": 1,
                "kills": 3,
                "wardScore": 4.5
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let command = Commands::PlayerScores {
            summoner: SummonerArg {
                summoner_name: "Riot Tuxedo".to_string(),
            },
        };

        let output = handle_command(&client, &command, true).await.unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["kills"], 3);
        assert_eq!(parsed["creepScore"], 60);
        assert_eq!(parsed["wardScore"], 4.5);
    }

    #[tokio::test]
    async fn test_handle_command_events_unwraps_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/liveclientdata/eventdata"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Events": [
                    { "EventID": 0, "EventName": "GameStart", "EventTime": 0.02 }
                ]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let cli = LiveCli::try_parse_from(["liveclientdata", "events", "--compact"]).unwrap();

        let output = handle_command(&client, &cli.command, cli.compact)
            .await
            .unwrap();
        assert_eq!(
            output,
            r#"[{"EventID":0,"EventName":"GameStart","EventTime":0.02}]"#
        );
    }

    #[tokio::test]
    async fn test_handle_command_propagates_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "errorCode": "RESOURCE_NOT_FOUND",
                "httpStatus": 404,
                "message": "Invalid URI format"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = handle_command(&client, &Commands::ActivePlayer, false)
            .await
            .unwrap_err();
        assert_eq!(err.api_message(), Some("Invalid URI format"));
    }
}
