use super::*;
use crate::request::MockHttpClient;
use serde_json::json;

const HOST: &str = "http://api.test";

fn api(client: &MockHttpClient) -> GamePassApi<&MockHttpClient> {
    GamePassApi::new(ApiConfig::new(HOST), client)
}

// =========================================================
// request 基础行为
// =========================================================

#[tokio::test]
async fn test_request_without_token_sends_only_content_type() {
    let client = MockHttpClient::new();
    client.mock_response(&format!("{HOST}/api/ping"), 200, json!({ "ok": true }));

    let value = api(&client)
        .request("/api/ping", HttpMethod::Get, None, None)
        .await
        .unwrap();
    assert_eq!(value, json!({ "ok": true }));

    let reqs = client.requests.borrow();
    let (url, method, headers, body) = &reqs[0];
    assert_eq!(url, "http://api.test/api/ping");
    assert_eq!(*method, HttpMethod::Get);
    assert_eq!(headers.get("Content-Type").map(String::as_str), Some("application/json"));
    assert!(!headers.contains_key("Authorization"));
    assert!(body.is_none());
}

#[tokio::test]
async fn test_request_with_token_adds_bearer_header() {
    let client = MockHttpClient::new();
    client.mock_response(&format!("{HOST}/api/ping"), 200, json!({}));

    api(&client)
        .request("/api/ping", HttpMethod::Get, None, Some("abc"))
        .await
        .unwrap();

    let reqs = client.requests.borrow();
    assert_eq!(reqs[0].2.get("Authorization").map(String::as_str), Some("Bearer abc"));
}

#[tokio::test]
async fn test_empty_token_is_treated_as_absent() {
    let client = MockHttpClient::new();
    client.mock_response(&format!("{HOST}/api/ping"), 200, json!({}));

    api(&client)
        .request("/api/ping", HttpMethod::Get, None, Some(""))
        .await
        .unwrap();

    assert!(!client.requests.borrow()[0].2.contains_key("Authorization"));
}

#[tokio::test]
async fn test_non_success_uses_server_message() {
    let client = MockHttpClient::new();
    client.mock_response(
        &format!("{HOST}/api/auth/login"),
        401,
        json!({ "message": "Invalid credentials" }),
    );

    let err = api(&client)
        .request("/api/auth/login", HttpMethod::Post, Some(&json!({})), None)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_non_success_without_message_falls_back() {
    let client = MockHttpClient::new();
    client.mock_raw(&format!("{HOST}/api/broken"), 502, "<html>Bad Gateway</html>");
    client.mock_response(&format!("{HOST}/api/empty"), 500, json!({ "message": "" }));

    let err = api(&client)
        .request("/api/broken", HttpMethod::Get, None, None)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Request failed");

    let err = api(&client)
        .request("/api/empty", HttpMethod::Get, None, None)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Request failed");
}

#[tokio::test]
async fn test_transport_failure_is_reported_once() {
    let client = MockHttpClient::new();
    client.mock_transport_error(&format!("{HOST}/api/ping"), "Failed to fetch");

    let err = api(&client)
        .request("/api/ping", HttpMethod::Get, None, None)
        .await
        .unwrap_err();

    assert_eq!(err, RequestError::Transport("Failed to fetch".into()));
    // 不重试
    assert_eq!(client.request_count(), 1);
}

#[tokio::test]
async fn test_success_with_invalid_json_is_decode_error() {
    let client = MockHttpClient::new();
    client.mock_raw(&format!("{HOST}/api/ping"), 200, "not json");

    let err = api(&client)
        .request("/api/ping", HttpMethod::Get, None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, RequestError::Decode(_)));
}

// =========================================================
// 端点
// =========================================================

#[tokio::test]
async fn test_login_posts_credentials_as_json() {
    let client = MockHttpClient::new();
    client.mock_response(
        &format!("{HOST}/api/auth/login"),
        200,
        json!({ "token": "t1", "user": { "id": "u1" } }),
    );

    let resp = api(&client)
        .login(&LoginRequest {
            email: "a@b.c".into(),
            password: "pw".into(),
        })
        .await
        .unwrap();
    assert_eq!(resp.token, "t1");
    assert_eq!(resp.user.id, "u1");

    let reqs = client.requests.borrow();
    let body: Value = serde_json::from_str(reqs[0].3.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({ "email": "a@b.c", "password": "pw" }));
    assert_eq!(reqs[0].1, HttpMethod::Post);
}

#[tokio::test]
async fn test_leaderboard_is_scoped_and_authenticated() {
    let client = MockHttpClient::new();
    client.mock_response(
        &format!("{HOST}/api/game-activities/leaderboard?game=batak-pro"),
        200,
        json!({
            "success": true,
            "leaderboard": [
                { "id": "e1", "username": "ada", "buttonHits": 42, "attempts": 3, "createdAt": "2024-01-01T10:00:00Z" },
                { "id": "e2", "username": "bob", "buttonHits": 40, "attempts": 1, "createdAt": "2024-01-02T10:00:00Z" }
            ]
        }),
    );

    let entries = api(&client)
        .leaderboard(GameSlug::BatakPro, "tok")
        .await
        .unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].username, "ada");

    let reqs = client.requests.borrow();
    assert_eq!(reqs[0].2.get("Authorization").map(String::as_str), Some("Bearer tok"));
    assert!(reqs[0].3.is_none());
}

#[tokio::test]
async fn test_leaderboard_success_false_is_empty_not_error() {
    let client = MockHttpClient::new();
    client.mock_response(
        &format!("{HOST}/api/game-activities/leaderboard?game=arrow-game"),
        200,
        json!({ "success": false }),
    );

    let entries = api(&client)
        .leaderboard(GameSlug::ArrowGame, "tok")
        .await
        .unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_game_activities_reads_data_array() {
    let client = MockHttpClient::new();
    client.mock_response(
        &format!("{HOST}/api/game-activities?game=purple-game"),
        200,
        json!({ "data": [ { "score": 12, "metadata": { "bonus": true }, "createdAt": "2024-05-01T08:00:00Z" } ] }),
    );

    let records = api(&client)
        .game_activities(GameSlug::PurpleGame, "tok")
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].score.as_ref().map(|n| n.to_string()), Some("12".into()));
}

#[tokio::test]
async fn test_overall_leaderboard_keeps_max_score() {
    let client = MockHttpClient::new();
    client.mock_response(
        &format!("{HOST}/api/game-activities/leaderboard/overall"),
        200,
        json!({
            "success": true,
            "maxOverallScore": 640,
            "leaderboard": [
                { "rank": 1, "userId": "u1", "username": "ada", "userEmail": "ada@x", "games": { "batak-pro": 50 }, "overallScore": 98.456 }
            ]
        }),
    );

    let resp = api(&client).overall_leaderboard("tok").await.unwrap();
    assert_eq!(resp.max_score(), Some(640.0));
    assert_eq!(resp.into_entries()[0].overall_score, 98.456);
}
