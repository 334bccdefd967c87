use axum::{Json, extract::State};

use crate::db::models::{Person, Planet, User, UserWithFavorites};
use crate::error::{HolocronError, Resource};
use crate::middleware::Ids;
use crate::router::HolocronState;
use crate::service::favorites;

/// GET /people
pub async fn list_people(
    State(state): State<HolocronState>,
) -> Result<Json<Vec<Person>>, HolocronError> {
    Ok(Json(state.store.list_people().await?))
}

/// GET /people/{id}
pub async fn get_person(
    State(state): State<HolocronState>,
    Ids(id): Ids<i64>,
) -> Result<Json<Person>, HolocronError> {
    state
        .store
        .find_person(id)
        .await?
        .map(Json)
        .ok_or(HolocronError::NotFound(Resource::People))
}

/// GET /planets
pub async fn list_planets(
    State(state): State<HolocronState>,
) -> Result<Json<Vec<Planet>>, HolocronError> {
    Ok(Json(state.store.list_planets().await?))
}

/// GET /planets/{id}
pub async fn get_planet(
    State(state): State<HolocronState>,
    Ids(id): Ids<i64>,
) -> Result<Json<Planet>, HolocronError> {
    state
        .store
        .find_planet(id)
        .await?
        .map(Json)
        .ok_or(HolocronError::NotFound(Resource::Planet))
}

/// GET /users
pub async fn list_users(
    State(state): State<HolocronState>,
) -> Result<Json<Vec<User>>, HolocronError> {
    Ok(Json(state.store.list_users().await?))
}

/// GET /user/{id}/favorites
pub async fn get_user_favorites(
    State(state): State<HolocronState>,
    Ids(user_id): Ids<i64>,
) -> Result<Json<UserWithFavorites>, HolocronError> {
    let aggregate = favorites::user_with_favorites(state.store.as_ref(), user_id).await?;
    Ok(Json(aggregate))
}
