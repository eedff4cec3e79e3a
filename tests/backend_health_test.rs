use reqwest::Client;

mod common;
use common::utils::spawn_app;

#[tokio::test]
async fn backend_health_working() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/backend_health", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());

    let body = response.text().await.expect("Cannot read response body.");
    let json_response: serde_json::Value = serde_json::from_str(&body).expect("Cannot turn into a json.");

    assert_eq!(json_response, serde_json::json!({
        "status": "UP"
    }));
}

#[tokio::test]
async fn database_health_reports_connected() {
    let test_app = spawn_app().await;

    let response = Client::new()
        .get(&format!("{}/api/v1/health", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 200);
    let json_response: serde_json::Value = response.json().await.expect("Cannot turn into a json.");
    assert_eq!(json_response, serde_json::json!({
        "status": "healthy",
        "database": "connected"
    }));
}

#[tokio::test]
async fn database_health_reports_unhealthy_when_pool_is_closed() {
    let test_app = spawn_app().await;
    test_app.db_pool.close().await;

    let response = Client::new()
        .get(&format!("{}/api/v1/health", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 500);
    let json_response: serde_json::Value = response.json().await.expect("Cannot turn into a json.");
    assert_eq!(json_response["status"], "unhealthy");
    assert!(json_response["error"].is_string());
}
