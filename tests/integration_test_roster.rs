mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::{json, Value};

async fn create(app: &TestApp, cookie: &str, name: &str, guest_type: &str, national_id: Option<&str>) -> Value {
    let body = json!({
        "full_name": name,
        "guest_type": guest_type,
        "national_id": national_id,
    });

    let (status, body) = app.send("POST", "/api/v1/invitees", Some(cookie), Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    body
}

#[tokio::test]
async fn test_add_invitee_defaults() {
    let app = TestApp::new();
    let cookie = app.login().await;

    let body = create(&app, &cookie, "Carla Mendoza", "INVITED", None).await;
    let invitee = &body["invitee"];

    assert!(invitee["id"].as_str().unwrap().starts_with("id_"));
    assert_eq!(invitee["full_name"], "Carla Mendoza");
    assert_eq!(invitee["guest_type"], "INVITED");
    assert_eq!(invitee["admitted"], false);
    assert!(invitee["admitted_at"].is_null());
    assert!(invitee["qr_payload"].is_null());

    // The mutation response carries a fresh listing.
    assert_eq!(body["invitees"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_invitee_rejects_blank_name() {
    let app = TestApp::new();
    let cookie = app.login().await;

    for name in ["", "   ", "\t\n"] {
        let body = json!({ "full_name": name, "guest_type": "INVITED" });
        let (status, body) = app.send("POST", "/api/v1/invitees", Some(&cookie), Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("blank"));
    }

    let (_, listing) = app.send("GET", "/api/v1/invitees", Some(&cookie), None).await;
    assert!(listing.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_ids_are_unique() {
    let app = TestApp::new();
    let cookie = app.login().await;

    let mut ids = std::collections::HashSet::new();
    for n in 0..8 {
        let body = create(&app, &cookie, &format!("Guest {}", n), "INVITED", None).await;
        ids.insert(body["invitee"]["id"].as_str().unwrap().to_string());
    }

    assert_eq!(ids.len(), 8);
}

#[tokio::test]
async fn test_listing_is_sorted_by_name() {
    let app = TestApp::new();
    let cookie = app.login().await;

    create(&app, &cookie, "zulema Torres", "INVITED", None).await;
    create(&app, &cookie, "Ana Paredes", "PROMOTED", None).await;
    create(&app, &cookie, "Mario Rojas", "INVITED", None).await;

    let (_, listing) = app.send("GET", "/api/v1/invitees", Some(&cookie), None).await;
    let names: Vec<&str> = listing
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["full_name"].as_str().unwrap())
        .collect();

    assert_eq!(names, vec!["Ana Paredes", "Mario Rojas", "zulema Torres"]);
}

#[tokio::test]
async fn test_generate_qr_is_idempotent() {
    let app = TestApp::new();
    let cookie = app.login().await;

    let body = create(&app, &cookie, "Carla Mendoza", "INVITED", None).await;
    let id = body["invitee"]["id"].as_str().unwrap().to_string();

    let (status, first) = app
        .send("POST", &format!("/api/v1/invitees/{}/qr", id), Some(&cookie), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let payload = first["invitee"]["qr_payload"].as_str().unwrap().to_string();
    let decoded: Value = serde_json::from_str(&payload).unwrap();
    assert_eq!(decoded, json!({ "id": id }));

    let (status, second) = app
        .send("POST", &format!("/api/v1/invitees/{}/qr", id), Some(&cookie), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["invitee"]["qr_payload"].as_str().unwrap(), payload);
}

#[tokio::test]
async fn test_generate_qr_unknown_invitee() {
    let app = TestApp::new();
    let cookie = app.login().await;

    let (status, _) = app
        .send("POST", "/api/v1/invitees/id_missing/qr", Some(&cookie), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admission_is_one_way() {
    let app = TestApp::new();
    let cookie = app.login().await;

    let body = create(&app, &cookie, "Carla Mendoza", "INVITED", None).await;
    let id = body["invitee"]["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .send("POST", &format!("/api/v1/invitees/{}/admit", id), Some(&cookie), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["invitee"]["admitted"], true);

    let admitted_at = body["invitee"]["admitted_at"].as_str().unwrap().to_string();

    // Re-marking is rejected and must not move the timestamp.
    let (status, _) = app
        .send("POST", &format!("/api/v1/invitees/{}/admit", id), Some(&cookie), None)
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, listing) = app.send("GET", "/api/v1/invitees", Some(&cookie), None).await;
    let stored = &listing.as_array().unwrap()[0];
    assert_eq!(stored["admitted_at"].as_str().unwrap(), admitted_at);
}

#[tokio::test]
async fn test_search_by_name_is_case_insensitive() {
    let app = TestApp::new();
    let cookie = app.login().await;

    create(&app, &cookie, "Jesús Andres Andía Zambrano", "INVITED", Some("70551234")).await;
    create(&app, &cookie, "María Quispe", "PROMOTED", None).await;

    let (status, hits) = app
        .send("GET", "/api/v1/invitees?q=zambrano", Some(&cookie), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let hits = hits.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["full_name"], "Jesús Andres Andía Zambrano");
}

#[tokio::test]
async fn test_search_by_national_id() {
    let app = TestApp::new();
    let cookie = app.login().await;

    create(&app, &cookie, "Jesús Andres Andía Zambrano", "INVITED", Some("70551234")).await;
    create(&app, &cookie, "María Quispe", "PROMOTED", Some("40887766")).await;

    // Substring query across name or national id.
    let (_, hits) = app.send("GET", "/api/v1/invitees?q=7055", Some(&cookie), None).await;
    assert_eq!(hits.as_array().unwrap().len(), 1);

    // Exact national-id filter intersects the query.
    let (_, hits) = app
        .send("GET", "/api/v1/invitees?national_id=40887766", Some(&cookie), None)
        .await;
    let hits = hits.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["full_name"], "María Quispe");

    let (_, hits) = app
        .send("GET", "/api/v1/invitees?q=zambrano&national_id=40887766", Some(&cookie), None)
        .await;
    assert!(hits.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_badge_renders_invitee_card() {
    let app = TestApp::new();
    let cookie = app.login().await;

    let body = create(&app, &cookie, "Carla Mendoza", "PROMOTED", None).await;
    let id = body["invitee"]["id"].as_str().unwrap().to_string();

    app.send("POST", &format!("/api/v1/invitees/{}/qr", id), Some(&cookie), None)
        .await;

    let (status, html) = app
        .send("GET", &format!("/api/v1/invitees/{}/badge", id), Some(&cookie), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let html = html.as_str().unwrap();
    assert!(html.contains("Carla Mendoza"));
    assert!(html.contains("PROMOTED"));
    assert!(html.contains(&id));
}
