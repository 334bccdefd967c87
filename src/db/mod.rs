//! Database module: models, schema and stores for the catalog.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and their public JSON shape
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `store.rs`: repository traits the HTTP layer depends on
//! - `sqlite.rs` / `memory.rs`: the two store implementations

pub mod memory;
pub mod models;
pub mod schema;
pub mod sqlite;
pub mod store;

pub use memory::MemoryStore;
pub use models::{
    Favorite, FavoriteTarget, FavoriteView, Person, Planet, User, UserWithFavorites,
};
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, SqliteStore};
pub use store::{
    CatalogStore, FavoriteRepository, PeopleRepository, PlanetRepository, UserRepository,
};
