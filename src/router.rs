use crate::db::store::CatalogStore;
use crate::handlers::{catalog, favorites, sitemap};
use crate::middleware::access_log;

use axum::{
    Router,
    http::StatusCode,
    middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Every (method, path) pair the router serves, in sitemap order.
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/people"),
    ("GET", "/people/{id}"),
    ("GET", "/planets"),
    ("GET", "/planets/{id}"),
    ("GET", "/users"),
    ("GET", "/user/{id}/favorites"),
    ("POST", "/favorite/user/{user_id}/planet/{planet_id}"),
    ("DELETE", "/favorite/user/{user_id}/planet/{planet_id}"),
    ("POST", "/favorite/user/{user_id}/people/{people_id}"),
    ("DELETE", "/favorite/user/{user_id}/people/{people_id}"),
];

#[derive(Clone)]
pub struct HolocronState {
    pub store: Arc<dyn CatalogStore>,
}

impl HolocronState {
    pub fn new(store: impl CatalogStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

async fn not_found_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}

pub fn holocron_router(state: HolocronState) -> Router {
    let catalog_routes = Router::new()
        .route("/people", get(catalog::list_people))
        .route("/people/{id}", get(catalog::get_person))
        .route("/planets", get(catalog::list_planets))
        .route("/planets/{id}", get(catalog::get_planet))
        .route("/users", get(catalog::list_users))
        .route("/user/{id}/favorites", get(catalog::get_user_favorites));

    let favorite_routes = Router::new()
        .route(
            "/favorite/user/{user_id}/planet/{planet_id}",
            post(favorites::create_favorite_planet).delete(favorites::delete_favorite_planet),
        )
        .route(
            "/favorite/user/{user_id}/people/{people_id}",
            post(favorites::create_favorite_people).delete(favorites::delete_favorite_people),
        );

    Router::new()
        .route("/", get(sitemap::sitemap))
        .merge(catalog_routes)
        .merge(favorite_routes)
        .fallback(not_found_handler)
        .with_state(state)
        .layer(middleware::from_fn(access_log))
}

/// The router with trailing slashes trimmed before routing, so `/people/`
/// and `/people` reach the same handler.
pub fn holocron_app(state: HolocronState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(holocron_router(state))
}
