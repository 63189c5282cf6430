//! End-to-end tests for the lookup endpoint
//!
//! A stub upstream server stands in for the geocoding, weather and catalog
//! providers; the real application router is pointed at it and driven
//! in-process, so every branch of the pipeline is exercised without touching
//! the network.

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{Request, StatusCode};
use axum::response::Json;
use axum::routing::get;
use serde_json::{Value, json};
use tower::ServiceExt;

use climadex::api::AppState;
use climadex::rand_source::RandomSource;
use climadex::{AppConfig, web};

/// Deterministic random source for tests
struct Fixed(usize);

impl RandomSource for Fixed {
    fn pick(&self, upper: usize) -> usize {
        self.0 % upper
    }
}

// ---------------------------------------------------------------------------
// Stub upstream providers
// ---------------------------------------------------------------------------

async fn stub_search(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let body = match params.get("q").map(String::as_str) {
        Some("Lisbon, PT") => json!([{
            "lat": "38.7077507",
            "lon": "-9.1365919",
            "display_name": "Lisboa, Portugal"
        }]),
        Some("Calm Town") => json!([{
            "lat": "10.0",
            "lon": "20.0",
            "display_name": "Calm Town"
        }]),
        Some("Barren City") => json!([{
            "lat": "55.0",
            "lon": "12.0",
            "display_name": "Barren City"
        }]),
        // "Broken Town" exists but its coordinates are garbage
        Some("Broken Town") => json!([{
            "lat": "not-a-number",
            "lon": "0.0",
            "display_name": "Broken Town"
        }]),
        _ => json!([]),
    };
    Json(body)
}

async fn stub_forecast(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let lat = params.get("latitude").map(String::as_str).unwrap_or("");
    let body = if lat.starts_with("38.7") {
        // Lisbon: light rain
        json!({
            "latitude": 38.7,
            "longitude": -9.1,
            "current_weather": {
                "temperature": 21.5,
                "windspeed": 12.3,
                "winddirection": 230.0,
                "weathercode": 61
            }
        })
    } else if lat.starts_with("55") {
        // Barren City: snow, whose catalog listing is empty
        json!({
            "latitude": 55.0,
            "longitude": 12.0,
            "current_weather": {
                "temperature": -3.0,
                "windspeed": 7.0,
                "winddirection": 10.0,
                "weathercode": 71
            }
        })
    } else {
        // Calm Town: provider returns no current-conditions block
        json!({ "latitude": 10.0, "longitude": 20.0 })
    };
    Json(body)
}

async fn stub_type(State(base): State<String>, Path(kind): Path<String>) -> Json<Value> {
    let body = if kind == "water" {
        json!({
            "pokemon": [
                { "pokemon": { "name": "squirtle", "url": format!("{base}/pokemon/squirtle") } },
                { "pokemon": { "name": "totodile", "url": format!("{base}/pokemon/totodile") } }
            ]
        })
    } else {
        json!({ "pokemon": [] })
    };
    Json(body)
}

async fn stub_detail(Path(name): Path<String>) -> Json<Value> {
    Json(json!({
        "name": name,
        "sprites": { "front_default": format!("https://sprites.test/{name}.png") }
    }))
}

/// Bind the stub providers to an ephemeral port and return their base URL.
async fn spawn_stub_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let base = format!("http://{}", listener.local_addr().expect("stub addr"));

    let router = Router::new()
        .route("/search", get(stub_search))
        .route("/forecast", get(stub_forecast))
        .route("/type/{kind}/", get(stub_type))
        .route("/pokemon/{name}", get(stub_detail))
        .with_state(base.clone());

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server");
    });

    base
}

/// Build the application router with every provider pointed at the stub.
async fn test_app(rand_pick: usize) -> Router {
    let base = spawn_stub_upstream().await;
    let config = AppConfig {
        geocoding_url: base.clone(),
        weather_url: base.clone(),
        catalog_url: base,
        ..AppConfig::default()
    };
    let state = AppState {
        http: reqwest::Client::new(),
        config: Arc::new(config),
        rand: Arc::new(Fixed(rand_pick)),
    };
    web::app(state)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_city_is_rejected_with_400() {
    let app = test_app(0).await;

    for uri in ["/api/weather-item", "/api/weather-item?city=", "/api/weather-item?city=%20%20"] {
        let (status, body) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri {uri}");
        assert!(!body["error"].as_str().expect("error field").is_empty());
    }
}

#[tokio::test]
async fn unknown_city_returns_404() {
    let app = test_app(0).await;

    let (status, body) = get_json(&app, "/api/weather-item?city=Atlantis").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let message = body["error"].as_str().expect("error field");
    assert!(message.contains("Atlantis"));
}

#[tokio::test]
async fn rainy_city_gets_a_water_creature() {
    let app = test_app(0).await;

    let (status, body) = get_json(&app, "/api/weather-item?city=Lisbon%2C%20PT").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["city"], "Lisboa, Portugal");
    assert!((body["latitude"].as_f64().unwrap() - 38.7077507).abs() < 1e-6);
    assert_eq!(body["weather"]["weathercode"], 61);
    assert_eq!(body["weather"]["temperature"], 21.5);
    // code 61 is in the rain range, so the element is deterministic
    assert_eq!(body["item"]["type"], "water");
    assert_eq!(body["item"]["name"], "squirtle");
    assert_eq!(body["item"]["imageUrl"], "https://sprites.test/squirtle.png");
}

#[tokio::test]
async fn item_pick_follows_the_random_source() {
    let app = test_app(1).await;

    let (status, body) = get_json(&app, "/api/weather-item?city=Lisbon%2C%20PT").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["item"]["name"], "totodile");
}

#[tokio::test]
async fn missing_weather_block_yields_null_weather_and_default_item() {
    let app = test_app(0).await;

    let (status, body) = get_json(&app, "/api/weather-item?city=Calm%20Town").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["weather"].is_null());
    assert_eq!(body["item"]["type"], "normal");
    assert_eq!(body["item"]["name"], "");
    assert_eq!(body["item"]["imageUrl"], "");
}

#[tokio::test]
async fn empty_catalog_listing_degrades_to_an_empty_item() {
    let app = test_app(0).await;

    let (status, body) = get_json(&app, "/api/weather-item?city=Barren%20City").await;
    assert_eq!(status, StatusCode::OK);
    // weather survives even though the catalog had nothing to offer
    assert_eq!(body["weather"]["weathercode"], 71);
    assert_eq!(body["item"]["type"], "ice");
    assert_eq!(body["item"]["name"], "");
    assert_eq!(body["item"]["imageUrl"], "");
}

#[tokio::test]
async fn corrupt_geocoding_payload_is_a_server_error() {
    let app = test_app(0).await;

    let (status, body) = get_json(&app, "/api/weather-item?city=Broken%20Town").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body["error"].as_str().expect("error field").is_empty());
    assert!(!body["details"].as_str().expect("details field").is_empty());
}

#[tokio::test]
async fn repeated_requests_agree_on_deterministic_fields() {
    let app = test_app(0).await;

    let (_, first) = get_json(&app, "/api/weather-item?city=Lisbon%2C%20PT").await;
    let (_, second) = get_json(&app, "/api/weather-item?city=Lisbon%2C%20PT").await;
    assert_eq!(first["city"], second["city"]);
    assert_eq!(first["latitude"], second["latitude"]);
    assert_eq!(first["longitude"], second["longitude"]);
    assert_eq!(first["weather"], second["weather"]);
    assert_eq!(first["item"]["type"], second["item"]["type"]);
}

#[tokio::test]
async fn static_frontend_is_served() {
    let app = test_app(0).await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/index.html").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let html = String::from_utf8_lossy(&bytes);
    assert!(html.contains("Climadex"));
}
