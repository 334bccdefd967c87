#![allow(dead_code)]

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use holocron::db::models::{Person, Planet, User};
use holocron::db::store::CatalogStore;
use holocron::{HolocronState, holocron_app};
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};
use tower::ServiceExt;

pub fn planets() -> Vec<Planet> {
    vec![
        Planet {
            id: 1,
            name: "Tatooine".to_string(),
            climate: "arid".to_string(),
            surface_water: 1.0,
            diameter: 10465,
            rotation_period: 23,
            terrain: "desert".to_string(),
            gravity: "1 standard".to_string(),
            orbital_period: 304,
            population: 200000,
        },
        Planet {
            id: 2,
            name: "Alderaan".to_string(),
            climate: "temperate".to_string(),
            surface_water: 40.0,
            diameter: 12500,
            rotation_period: 24,
            terrain: "grasslands, mountains".to_string(),
            gravity: "1 standard".to_string(),
            orbital_period: 364,
            population: 2000000000,
        },
    ]
}

pub fn people() -> Vec<Person> {
    vec![
        Person {
            id: 1,
            name: "Luke Skywalker".to_string(),
            gender: "male".to_string(),
            skin_color: "fair".to_string(),
            hair_color: "blond".to_string(),
            height: 172.0,
            eye_color: "blue".to_string(),
            mass: 77.0,
            birth_year: "19BBY".to_string(),
        },
        Person {
            id: 2,
            name: "C-3PO".to_string(),
            gender: "n/a".to_string(),
            skin_color: "gold".to_string(),
            hair_color: "n/a".to_string(),
            height: 167.0,
            eye_color: "yellow".to_string(),
            mass: 75.0,
            birth_year: "112BBY".to_string(),
        },
    ]
}

pub fn users() -> Vec<User> {
    vec![User {
        id: 1,
        user_name: "leia".to_string(),
        first_name: "Leia".to_string(),
        last_name: "Organa".to_string(),
        email: "leia@alderaan.gov".to_string(),
        password: "help-me-obi-wan".to_string(),
        is_active: true,
    }]
}

pub async fn seed(store: &dyn CatalogStore) {
    store.upsert_planets(planets()).await.expect("seed planets");
    store.upsert_people(people()).await.expect("seed people");
    store.upsert_users(users()).await.expect("seed users");
}

/// A fresh SQLite file under the system temp dir.
pub fn temp_database_url(label: &str) -> (String, std::path::PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "holocron-{label}-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));
    (format!("sqlite:{}", temp_path.display()), temp_path)
}

/// Send one request through the full app and decode the JSON body
/// (`Value::Null` for an empty body).
pub async fn call(
    state: &HolocronState,
    method: &str,
    uri: &str,
) -> (StatusCode, Value) {
    let resp = holocron_app(state.clone())
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("response body was not json")
    };
    (status, value)
}
