use crate::db::models::{Favorite, FavoriteTarget, Person, Planet, User};
use crate::db::store::{FavoriteRepository, PeopleRepository, PlanetRepository, UserRepository};
use crate::error::HolocronError;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    people: BTreeMap<i64, Person>,
    planets: BTreeMap<i64, Planet>,
    users: BTreeMap<i64, User>,
    favorites: BTreeMap<i64, Favorite>,
    next_favorite_id: i64,
}

/// In-process store backed by ordered maps. Every operation takes the table
/// lock once, so favorite checks and mutations are atomic.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of favorite rows across all users.
    pub async fn favorite_count(&self) -> usize {
        self.tables.read().await.favorites.len()
    }
}

#[async_trait]
impl PeopleRepository for MemoryStore {
    async fn list_people(&self) -> Result<Vec<Person>, HolocronError> {
        Ok(self.tables.read().await.people.values().cloned().collect())
    }

    async fn find_person(&self, id: i64) -> Result<Option<Person>, HolocronError> {
        Ok(self.tables.read().await.people.get(&id).cloned())
    }

    async fn upsert_people(&self, people: Vec<Person>) -> Result<usize, HolocronError> {
        let mut tables = self.tables.write().await;
        let count = people.len();
        tables.people.extend(people.into_iter().map(|p| (p.id, p)));
        Ok(count)
    }
}

#[async_trait]
impl PlanetRepository for MemoryStore {
    async fn list_planets(&self) -> Result<Vec<Planet>, HolocronError> {
        Ok(self.tables.read().await.planets.values().cloned().collect())
    }

    async fn find_planet(&self, id: i64) -> Result<Option<Planet>, HolocronError> {
        Ok(self.tables.read().await.planets.get(&id).cloned())
    }

    async fn upsert_planets(&self, planets: Vec<Planet>) -> Result<usize, HolocronError> {
        let mut tables = self.tables.write().await;
        let count = planets.len();
        tables.planets.extend(planets.into_iter().map(|p| (p.id, p)));
        Ok(count)
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn list_users(&self) -> Result<Vec<User>, HolocronError> {
        Ok(self.tables.read().await.users.values().cloned().collect())
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, HolocronError> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn upsert_users(&self, users: Vec<User>) -> Result<usize, HolocronError> {
        let mut tables = self.tables.write().await;
        let count = users.len();
        tables.users.extend(users.into_iter().map(|u| (u.id, u)));
        Ok(count)
    }
}

#[async_trait]
impl FavoriteRepository for MemoryStore {
    async fn list_favorites(&self, user_id: i64) -> Result<Vec<Favorite>, HolocronError> {
        Ok(self
            .tables
            .read()
            .await
            .favorites
            .values()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn insert_favorite(
        &self,
        user_id: i64,
        target: FavoriteTarget,
    ) -> Result<Option<i64>, HolocronError> {
        let mut tables = self.tables.write().await;
        let target_exists = match target {
            FavoriteTarget::People(id) => tables.people.contains_key(&id),
            FavoriteTarget::Planet(id) => tables.planets.contains_key(&id),
        };
        if !tables.users.contains_key(&user_id) || !target_exists {
            return Ok(None);
        }

        tables.next_favorite_id += 1;
        let id = tables.next_favorite_id;
        tables.favorites.insert(
            id,
            Favorite {
                id,
                user_id,
                target,
            },
        );
        Ok(Some(id))
    }

    async fn delete_favorite(
        &self,
        user_id: i64,
        target: FavoriteTarget,
    ) -> Result<bool, HolocronError> {
        let mut tables = self.tables.write().await;
        let found = tables
            .favorites
            .values()
            .find(|f| f.user_id == user_id && f.target == target)
            .map(|f| f.id);
        match found {
            Some(id) => {
                tables.favorites.remove(&id);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
