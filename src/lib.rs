pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod service;

pub use config::Config;
pub use db::{CatalogStore, MemoryStore, SqliteStore};
pub use error::{HolocronError, Resource};
pub use router::{HolocronState, holocron_app, holocron_router};
