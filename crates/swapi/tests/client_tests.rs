//! Integration tests for [`SwapiClient`] against an in-process stub of the
//! catalog API.

use std::time::Duration;

use assert_matches::assert_matches;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use starport_swapi::{FetchState, SwapiClient, SwapiConfig, SwapiError};

// ---------------------------------------------------------------------------
// Stub server
// ---------------------------------------------------------------------------

async fn planet(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "4" => Json(json!({
            "name": "Hoth",
            "climate": "frozen",
            "terrain": "tundra, ice caves, mountain ranges",
            "population": "unknown",
            "diameter": "7200",
            "gravity": "1.1 standard",
            "orbital_period": "549",
            "rotation_period": "23",
            "surface_water": "100",
            "films": ["https://swapi.info/api/films/2"]
        }))
        .into_response(),
        "13" => (StatusCode::OK, "<html>not json</html>").into_response(),
        "slow" => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "name": "Too late" })).into_response()
        }
        _ => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}

async fn starship(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "10" => Json(json!({
            "name": "Millennium Falcon",
            "model": "YT-1300 light freighter",
            "manufacturer": "Corellian Engineering Corporation",
            "passengers": "6",
            "crew": "4",
            "starship_class": "Light freighter",
            "length": "34.37",
            "max_atmosphering_speed": "1050",
            "cargo_capacity": "100000",
            "hyperdrive_rating": "0.5"
        }))
        .into_response(),
        _ => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}

/// Serve the stub on an ephemeral port and return its API base URL.
async fn spawn_stub() -> String {
    let app = Router::new()
        .route("/api/planets/{id}", get(planet))
        .route("/api/starships/{id}", get(starship));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });

    format!("http://{addr}/api")
}

fn client(base_url: String, timeout: Duration) -> SwapiClient {
    SwapiClient::new(&SwapiConfig { base_url, timeout }).expect("client builds")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetches_planet_detail() {
    let client = client(spawn_stub().await, Duration::from_secs(5));

    let hoth = client.planet(&"4".into()).await.unwrap();
    assert_eq!(hoth.name, "Hoth");
    assert_eq!(hoth.climate, "frozen");
    assert_eq!(hoth.population, "unknown");
}

#[tokio::test]
async fn fetches_starship_detail() {
    let client = client(spawn_stub().await, Duration::from_secs(5));

    let falcon = client.starship(&"10".into()).await.unwrap();
    assert_eq!(falcon.model, "YT-1300 light freighter");
    assert_eq!(falcon.hyperdrive_rating, "0.5");
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_ignored() {
    let base = format!("{}/", spawn_stub().await);
    let client = client(base, Duration::from_secs(5));
    assert!(!client.base_url().ends_with('/'));
    assert!(client.planet(&"4".into()).await.is_ok());
}

#[tokio::test]
async fn not_found_is_a_status_error() {
    let client = client(spawn_stub().await, Duration::from_secs(5));

    let result = client.starship(&"custom-1".into()).await;
    assert_matches!(result, Err(SwapiError::Status { status: 404, .. }));
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let client = client(spawn_stub().await, Duration::from_secs(5));

    let result = client.planet(&"13".into()).await;
    assert_matches!(result, Err(SwapiError::Decode(_)));
}

#[tokio::test]
async fn slow_response_times_out_without_retry() {
    let client = client(spawn_stub().await, Duration::from_millis(200));

    let result = client.planet(&"slow".into()).await;
    assert_matches!(result, Err(SwapiError::Request(e)) if e.is_timeout());
}

#[tokio::test]
async fn unreachable_host_becomes_failed_state() {
    // Bind then drop a listener so the port is known to be closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client(format!("http://{addr}/api"), Duration::from_secs(2));
    let state: FetchState<_> = client.planet(&"1".into()).await.into();
    assert_matches!(state, FetchState::Failed(msg) if msg.starts_with("HTTP request failed"));
}
