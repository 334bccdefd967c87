use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::db::models::FavoriteTarget;
use crate::error::HolocronError;
use crate::middleware::Ids;
use crate::router::HolocronState;
use crate::service::favorites;

fn message(text: &str) -> Json<Value> {
    Json(json!({ "message": text }))
}

/// POST /favorite/user/{user_id}/planet/{planet_id}
pub async fn create_favorite_planet(
    State(state): State<HolocronState>,
    Ids((user_id, planet_id)): Ids<(i64, i64)>,
) -> Result<Json<Value>, HolocronError> {
    favorites::add_favorite(
        state.store.as_ref(),
        user_id,
        FavoriteTarget::Planet(planet_id),
    )
    .await?;
    Ok(message("Favorite Planet created successfully"))
}

/// POST /favorite/user/{user_id}/people/{people_id}
pub async fn create_favorite_people(
    State(state): State<HolocronState>,
    Ids((user_id, people_id)): Ids<(i64, i64)>,
) -> Result<Json<Value>, HolocronError> {
    favorites::add_favorite(
        state.store.as_ref(),
        user_id,
        FavoriteTarget::People(people_id),
    )
    .await?;
    Ok(message("Favorite People created successfully"))
}

/// DELETE /favorite/user/{user_id}/planet/{planet_id}
pub async fn delete_favorite_planet(
    State(state): State<HolocronState>,
    Ids((user_id, planet_id)): Ids<(i64, i64)>,
) -> Result<Json<Value>, HolocronError> {
    favorites::remove_favorite(
        state.store.as_ref(),
        user_id,
        FavoriteTarget::Planet(planet_id),
    )
    .await?;
    Ok(message("Favorite deleted successfully"))
}

/// DELETE /favorite/user/{user_id}/people/{people_id}
pub async fn delete_favorite_people(
    State(state): State<HolocronState>,
    Ids((user_id, people_id)): Ids<(i64, i64)>,
) -> Result<Json<Value>, HolocronError> {
    favorites::remove_favorite(
        state.store.as_ref(),
        user_id,
        FavoriteTarget::People(people_id),
    )
    .await?;
    Ok(message("Favorite People deleted successfully"))
}
