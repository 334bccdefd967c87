use crate::db::models::{Favorite, FavoriteTarget, FavoriteView, UserWithFavorites};
use crate::db::store::CatalogStore;
use crate::error::{HolocronError, Resource};
use axum::http::StatusCode;
use futures::future::try_join_all;
use tracing::{info, warn};

/// Load a user together with every favorite they own.
pub async fn user_with_favorites(
    store: &dyn CatalogStore,
    user_id: i64,
) -> Result<UserWithFavorites, HolocronError> {
    let user = store
        .find_user(user_id)
        .await?
        .ok_or(HolocronError::NotFound(Resource::User))?;

    let favorites = store.list_favorites(user_id).await?;
    let favorites = try_join_all(favorites.iter().map(|fav| resolve_view(store, fav))).await?;

    Ok(UserWithFavorites { user, favorites })
}

async fn resolve_view(
    store: &dyn CatalogStore,
    favorite: &Favorite,
) -> Result<FavoriteView, HolocronError> {
    let view = match favorite.target {
        FavoriteTarget::Planet(id) => FavoriteView::Planet(store.find_planet(id).await?),
        FavoriteTarget::People(id) => FavoriteView::People(store.find_person(id).await?),
    };
    Ok(view)
}

/// Create a favorite after checking that the user and then the target exist.
/// Returns the new favorite id.
pub async fn add_favorite(
    store: &dyn CatalogStore,
    user_id: i64,
    target: FavoriteTarget,
) -> Result<i64, HolocronError> {
    ensure_references(store, user_id, target).await?;

    if let Some(id) = store.insert_favorite(user_id, target).await? {
        info!(favorite_id = id, user_id, target = ?target, "favorite created");
        return Ok(id);
    }

    // A referenced row disappeared between the checks and the insert.
    warn!(user_id, target = ?target, "favorite insert matched no rows");
    ensure_references(store, user_id, target).await?;
    Err(HolocronError::api(
        StatusCode::CONFLICT,
        "Favorite could not be created",
    ))
}

/// Remove one favorite matching `(user_id, target)`.
pub async fn remove_favorite(
    store: &dyn CatalogStore,
    user_id: i64,
    target: FavoriteTarget,
) -> Result<(), HolocronError> {
    if !store.delete_favorite(user_id, target).await? {
        return Err(HolocronError::NotFound(Resource::Favorite));
    }
    info!(user_id, target = ?target, "favorite deleted");
    Ok(())
}

async fn ensure_references(
    store: &dyn CatalogStore,
    user_id: i64,
    target: FavoriteTarget,
) -> Result<(), HolocronError> {
    if store.find_user(user_id).await?.is_none() {
        return Err(HolocronError::NotFound(Resource::User));
    }
    let exists = match target {
        FavoriteTarget::Planet(id) => store.find_planet(id).await?.is_some(),
        FavoriteTarget::People(id) => store.find_person(id).await?.is_some(),
    };
    if !exists {
        return Err(HolocronError::NotFound(target.resource()));
    }
    Ok(())
}
