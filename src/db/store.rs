//! Repository traits for the catalog.
//!
//! Each entity gets its own repository; `CatalogStore` is the union the HTTP
//! layer depends on. Implementations: [`SqliteStore`](super::SqliteStore) and
//! [`MemoryStore`](super::MemoryStore).

use crate::db::models::{Favorite, FavoriteTarget, Person, Planet, User};
use crate::error::HolocronError;
use async_trait::async_trait;

#[async_trait]
pub trait PeopleRepository: Send + Sync {
    /// All people in ascending id order.
    async fn list_people(&self) -> Result<Vec<Person>, HolocronError>;

    async fn find_person(&self, id: i64) -> Result<Option<Person>, HolocronError>;

    /// Insert or replace people by id. Returns the number of rows written.
    async fn upsert_people(&self, people: Vec<Person>) -> Result<usize, HolocronError>;
}

#[async_trait]
pub trait PlanetRepository: Send + Sync {
    /// All planets in ascending id order.
    async fn list_planets(&self) -> Result<Vec<Planet>, HolocronError>;

    async fn find_planet(&self, id: i64) -> Result<Option<Planet>, HolocronError>;

    /// Insert or replace planets by id. Returns the number of rows written.
    async fn upsert_planets(&self, planets: Vec<Planet>) -> Result<usize, HolocronError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in ascending id order.
    async fn list_users(&self) -> Result<Vec<User>, HolocronError>;

    async fn find_user(&self, id: i64) -> Result<Option<User>, HolocronError>;

    /// Insert or replace users by id. Returns the number of rows written.
    async fn upsert_users(&self, users: Vec<User>) -> Result<usize, HolocronError>;
}

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Favorites owned by `user_id`, in ascending id order.
    async fn list_favorites(&self, user_id: i64) -> Result<Vec<Favorite>, HolocronError>;

    /// Insert a favorite only if both the user and the target exist at the
    /// moment of insertion. Returns the new id, or `None` if nothing was
    /// inserted.
    async fn insert_favorite(
        &self,
        user_id: i64,
        target: FavoriteTarget,
    ) -> Result<Option<i64>, HolocronError>;

    /// Delete the lowest-id favorite matching `(user_id, target)`.
    /// Returns `false` if no row matched.
    async fn delete_favorite(
        &self,
        user_id: i64,
        target: FavoriteTarget,
    ) -> Result<bool, HolocronError>;
}

pub trait CatalogStore:
    PeopleRepository + PlanetRepository + UserRepository + FavoriteRepository
{
}

impl<T> CatalogStore for T where
    T: PeopleRepository + PlanetRepository + UserRepository + FavoriteRepository
{
}
