//! Integration tests driving the façade and accessors against a mock server

use espn_client::{
    AthleteListParams, ClientConfig, Domain, EspnClient, EspnError, League, NewsParams,
    ScoreboardParams, Season, SeasonType, TeamId, Week,
};
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

/// Client with the Site and Core domains pointed at the mock server.
fn client_for(server: &MockServer) -> EspnClient {
    let config = ClientConfig::new()
        .with_base_url(Domain::Site, server.uri())
        .with_base_url(Domain::Core, server.uri());
    EspnClient::with_config(config).unwrap()
}

#[tokio::test]
async fn test_news_accessor_returns_typed_articles() {
    let mock_server = MockServer::start().await;

    let mock_response = json!({
        "articles": [
            {
                "headline": "Test Article",
                "published": "2025-01-01"
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/sports/football/nfl/news"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&mock_response))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let news = client
        .news()
        .latest(&League::nfl(), NewsParams::default())
        .await
        .unwrap();

    assert_eq!(news.articles.len(), 1);
    assert_eq!(news.articles[0].headline, "Test Article");
    assert_eq!(news.articles[0].published.as_deref(), Some("2025-01-01"));
}

#[tokio::test]
async fn test_news_params_are_sent_as_query_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sports/basketball/nba/news"))
        .and(query_param("limit", "5"))
        .and(query_param("team", "13"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "articles": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let params = NewsParams {
        limit: Some(5),
        team: Some(TeamId::new(13)),
    };
    let news = client.news().latest(&League::nba(), params).await.unwrap();
    assert!(news.articles.is_empty());
}

#[tokio::test]
async fn test_rate_limited_response_yields_rate_limited_error_without_retry() {
    let mock_server = MockServer::start().await;

    // expect(1) fails the test on teardown if the client retried
    Mock::given(method("GET"))
        .and(path("/sports/football/nfl/scoreboard"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .scoreboard()
        .current(&League::nfl())
        .await
        .unwrap_err();

    assert!(err.is_rate_limited());
    assert_eq!(err.status(), Some(429));
    match err {
        EspnError::RateLimited { body, .. } => assert_eq!(body.as_deref(), Some("slow down")),
        other => panic!("expected RateLimited, got {other:?}"),
    }
}

#[tokio::test]
async fn test_not_found_error_records_requested_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .teams()
        .get(&League::nfl(), TeamId::new(999))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.endpoint(), Some("/sports/football/nfl/teams/999"));
}

#[tokio::test]
async fn test_other_non_success_statuses_yield_generic_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream sad"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .news()
        .latest(&League::mlb(), NewsParams::default())
        .await
        .unwrap_err();

    match err {
        EspnError::Api {
            status,
            endpoint,
            body,
        } => {
            assert_eq!(status, Some(503));
            assert_eq!(endpoint, "/sports/baseball/mlb/news");
            assert_eq!(body.as_deref(), Some("upstream sad"));
        }
        other => panic!("expected Api, got {other:?}"),
    }
}

#[tokio::test]
async fn test_transport_failure_yields_api_error_without_status() {
    // Nothing listens on port 1; connection is refused before any HTTP status
    let config = ClientConfig::new().with_base_url(Domain::Site, "http://127.0.0.1:1");
    let client = EspnClient::with_config(config).unwrap();

    let err = client
        .news()
        .latest(&League::nfl(), NewsParams::default())
        .await
        .unwrap_err();

    match err {
        EspnError::Api { status, .. } => assert_eq!(status, None),
        other => panic!("expected Api, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_body_propagates_as_json_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .news()
        .latest(&League::nfl(), NewsParams::default())
        .await
        .unwrap_err();

    assert!(matches!(err, EspnError::Json(_)));
}

#[tokio::test]
async fn test_teams_list_flattens_envelope() {
    let mock_server = MockServer::start().await;

    let mock_response = json!({
        "sports": [{
            "leagues": [{
                "teams": [
                    { "team": { "id": "2", "abbreviation": "BUF", "displayName": "Buffalo Bills" } },
                    { "team": { "id": "15", "abbreviation": "MIA", "displayName": "Miami Dolphins" } }
                ]
            }]
        }]
    });

    Mock::given(method("GET"))
        .and(path("/sports/football/nfl/teams"))
        .and(query_param("limit", "40"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&mock_response))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let teams = client.teams().list(&League::nfl(), Some(40)).await.unwrap();

    let abbreviations: Vec<_> = teams
        .teams()
        .filter_map(|t| t.abbreviation.as_deref())
        .collect();
    assert_eq!(abbreviations, ["BUF", "MIA"]);
    assert_eq!(teams.teams().next().unwrap().id, TeamId::new(2));
}

#[tokio::test]
async fn test_team_roster_groups() {
    let mock_server = MockServer::start().await;

    let mock_response = json!({
        "athletes": [{
            "position": "offense",
            "items": [
                { "id": 3918298, "fullName": "Josh Allen", "jersey": "17" }
            ]
        }]
    });

    Mock::given(method("GET"))
        .and(path("/sports/football/nfl/teams/2/roster"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&mock_response))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let roster = client
        .teams()
        .roster(&League::nfl(), TeamId::new(2))
        .await
        .unwrap();

    assert_eq!(roster.athletes.len(), 1);
    assert_eq!(roster.athletes[0].position.as_deref(), Some("offense"));
    assert_eq!(
        roster.athletes[0].items[0].full_name.as_deref(),
        Some("Josh Allen")
    );
}

#[tokio::test]
async fn test_scoreboard_week_and_season_type_params() {
    let mock_server = MockServer::start().await;

    let mock_response = json!({
        "events": [{
            "id": "401547417",
            "shortName": "BUF @ MIA",
            "competitions": [{
                "id": "401547417",
                "competitors": [
                    { "id": "2", "homeAway": "away", "score": "31", "winner": true },
                    { "id": "15", "homeAway": "home", "score": "10" }
                ]
            }],
            "status": { "type": { "name": "STATUS_FINAL", "completed": true } }
        }]
    });

    Mock::given(method("GET"))
        .and(path("/sports/football/nfl/scoreboard"))
        .and(query_param("week", "4"))
        .and(query_param("seasontype", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&mock_response))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let params = ScoreboardParams {
        week: Some(Week::new(4)),
        season_type: Some(SeasonType::Regular),
        ..Default::default()
    };
    let scoreboard = client
        .scoreboard()
        .get(&League::nfl(), params)
        .await
        .unwrap();

    let event = &scoreboard.events[0];
    assert_eq!(event.short_name.as_deref(), Some("BUF @ MIA"));
    let winner = event.competitions[0]
        .competitors
        .iter()
        .find(|c| c.winner == Some(true))
        .unwrap();
    assert_eq!(winner.score.as_deref(), Some("31"));
}

#[tokio::test]
async fn test_athletes_list_uses_core_api_path() {
    let mock_server = MockServer::start().await;

    let mock_response = json!({
        "count": 11057,
        "pageIndex": 1,
        "pageSize": 2,
        "pageCount": 5529,
        "items": [
            { "$ref": "http://sports.core.api.espn.com/v2/sports/football/leagues/nfl/athletes/14856" },
            { "$ref": "http://sports.core.api.espn.com/v2/sports/football/leagues/nfl/athletes/14857" }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/sports/football/leagues/nfl/athletes"))
        .and(query_param("limit", "2"))
        .and(query_param("active", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&mock_response))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let params = AthleteListParams {
        limit: Some(2),
        active: Some(true),
        ..Default::default()
    };
    let list = client
        .athletes()
        .list(&League::nfl(), params)
        .await
        .unwrap();

    assert_eq!(list.count, 11057);
    assert_eq!(list.items.len(), 2);
    assert!(list.items[0].href.ends_with("/athletes/14856"));
}

#[tokio::test]
async fn test_athletes_list_with_season_addresses_that_season() {
    let mock_server = MockServer::start().await;

    let mock_response = json!({
        "count": 0,
        "pageIndex": 1,
        "pageSize": 25,
        "pageCount": 0,
        "items": []
    });

    Mock::given(method("GET"))
        .and(path("/sports/hockey/leagues/nhl/seasons/2024/athletes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&mock_response))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let params = AthleteListParams {
        season: Some(Season::new(2024)),
        ..Default::default()
    };
    let list = client
        .athletes()
        .list(&League::nhl(), params)
        .await
        .unwrap();
    assert_eq!(list.count, 0);
}

#[tokio::test]
async fn test_raw_request_returns_body_unchanged() {
    let mock_server = MockServer::start().await;

    let mock_response = json!({ "anything": { "goes": [1, 2, 3] } });

    Mock::given(method("GET"))
        .and(path("/some/unmodeled/endpoint"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&mock_response))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let value = client
        .request(Domain::Site, "/some/unmodeled/endpoint", &[])
        .await
        .unwrap();

    assert_eq!(value, mock_response);
}
