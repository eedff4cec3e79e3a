use chrono::{Duration, Utc};
use reqwest::Client;
use serde_json::Value;
use uuid::Uuid;

mod common;
use common::utils::{insert_match, insert_team, spawn_app};

async fn get_json(url: &str) -> (u16, Value) {
    let response = Client::new().get(url).send().await.expect("Failed to execute request.");
    let status = response.status().as_u16();
    let body = response.json().await.unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn standings_are_ordered_by_position() {
    let test_app = spawn_app().await;
    insert_team(&test_app.db_pool, "Newcastle", 3).await;
    insert_team(&test_app.db_pool, "Tottenham", 1).await;
    insert_team(&test_app.db_pool, "Brighton", 2).await;

    let (status, body) = get_json(&format!("{}/standings", &test_app.address)).await;

    assert_eq!(status, 200);
    let names: Vec<&str> = body
        .as_array()
        .expect("standings array")
        .iter()
        .map(|entry| entry["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Tottenham", "Brighton", "Newcastle"]);
}

#[tokio::test]
async fn matches_default_to_next_gameweek_with_future_kickoff() {
    let test_app = spawn_app().await;
    let home = insert_team(&test_app.db_pool, "Wolves", 0).await;
    let away = insert_team(&test_app.db_pool, "Burnley", 0).await;
    let now = Utc::now();
    insert_match(&test_app.db_pool, home, away, Some(now - Duration::days(7)), Some(1)).await;
    insert_match(&test_app.db_pool, away, home, Some(now + Duration::days(7)), Some(2)).await;
    insert_match(&test_app.db_pool, home, away, Some(now + Duration::days(14)), Some(3)).await;

    let (status, body) = get_json(&format!("{}/matches", &test_app.address)).await;

    assert_eq!(status, 200);
    assert_eq!(body["gameweeks"], serde_json::json!([1, 2, 3]));
    assert_eq!(body["selected_gameweek"], 2);
    let matches = body["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["home_team_name"], "Burnley");
    assert_eq!(matches[0]["away_team_name"], "Wolves");
}

#[tokio::test]
async fn finished_season_shows_the_last_gameweek() {
    let test_app = spawn_app().await;
    let home = insert_team(&test_app.db_pool, "Wolves", 0).await;
    let away = insert_team(&test_app.db_pool, "Burnley", 0).await;
    let now = Utc::now();
    insert_match(&test_app.db_pool, home, away, Some(now - Duration::days(14)), Some(37)).await;
    insert_match(&test_app.db_pool, away, home, Some(now - Duration::days(7)), Some(38)).await;

    let (_, body) = get_json(&format!("{}/matches", &test_app.address)).await;

    assert_eq!(body["selected_gameweek"], 38);
    assert_eq!(body["matches"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn explicit_gameweek_filters_matches() {
    let test_app = spawn_app().await;
    let home = insert_team(&test_app.db_pool, "Wolves", 0).await;
    let away = insert_team(&test_app.db_pool, "Burnley", 0).await;
    let now = Utc::now();
    insert_match(&test_app.db_pool, home, away, Some(now + Duration::days(1)), Some(1)).await;
    insert_match(&test_app.db_pool, away, home, Some(now + Duration::days(8)), Some(2)).await;

    let (_, body) = get_json(&format!("{}/matches?gameweek=2", &test_app.address)).await;

    assert_eq!(body["selected_gameweek"], 2);
    let matches = body["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["gameweek"], 2);
}

#[tokio::test]
async fn no_gameweeks_lists_every_match() {
    let test_app = spawn_app().await;
    let home = insert_team(&test_app.db_pool, "Wolves", 0).await;
    let away = insert_team(&test_app.db_pool, "Burnley", 0).await;
    insert_match(&test_app.db_pool, home, away, None, None).await;
    insert_match(&test_app.db_pool, away, home, None, None).await;

    let (_, body) = get_json(&format!("{}/matches", &test_app.address)).await;

    assert_eq!(body["gameweeks"], serde_json::json!([]));
    assert!(body["selected_gameweek"].is_null());
    assert_eq!(body["matches"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_match_is_not_found() {
    let test_app = spawn_app().await;

    let (status, _) = get_json(&format!("{}/matches/{}", &test_app.address, Uuid::new_v4())).await;

    assert_eq!(status, 404);
}
