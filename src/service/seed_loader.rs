use crate::db::models::{Person, Planet, User};
use crate::db::store::CatalogStore;
use crate::error::HolocronError;
use serde::Deserialize;
use std::{fs, path::Path};
use tracing::{info, warn};

/// Catalog rows read from one seed file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
pub struct SeedBundle {
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub planets: Vec<Planet>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl SeedBundle {
    pub fn is_empty(&self) -> bool {
        self.people.is_empty() && self.planets.is_empty() && self.users.is_empty()
    }

    fn merge(&mut self, other: SeedBundle) {
        self.people.extend(other.people);
        self.planets.extend(other.planets);
        self.users.extend(other.users);
    }
}

/// Load every JSON seed file in a directory into one bundle.
pub fn load_from_dir(dir: &Path) -> Result<SeedBundle, HolocronError> {
    if !dir.exists() {
        info!(path = %dir.display(), "seed directory not found; skipping load");
        return Ok(SeedBundle::default());
    }

    let mut paths: Vec<_> = fs::read_dir(dir)?
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                let err: HolocronError = e.into();
                warn!(error = %err, "failed to read seed dir entry");
                None
            }
        })
        .filter(|path| is_json_file(path))
        .collect();
    paths.sort();

    let bundle = paths
        .iter()
        .filter_map(|path| {
            load_bundle(path)
                .inspect_err(|e| {
                    warn!(path = %path.display(), error = %e, "failed to load seed file");
                })
                .ok()
        })
        .fold(SeedBundle::default(), |mut acc, next| {
            acc.merge(next);
            acc
        });

    Ok(bundle)
}

/// Upsert a bundle into the store. People and planets go in before users.
pub async fn apply(store: &dyn CatalogStore, bundle: SeedBundle) -> Result<(), HolocronError> {
    let people = store.upsert_people(bundle.people).await?;
    let planets = store.upsert_planets(bundle.planets).await?;
    let users = store.upsert_users(bundle.users).await?;
    info!(people, planets, users, "seed data applied");
    Ok(())
}

fn is_json_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        == Some(true)
}

fn load_bundle(path: &Path) -> Result<SeedBundle, HolocronError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::db::store::{PlanetRepository, UserRepository};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir(label: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "holocron-seed-{label}-{}-{nanos}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    const PLANETS: &str = r#"{
        "planets": [{
            "id": 2, "name": "Alderaan", "climate": "temperate",
            "surface_water": 40.0, "diameter": 12500, "rotation_period": 24,
            "terrain": "grasslands, mountains", "gravity": "1 standard",
            "orbital_period": 364, "population": 2000000000
        }]
    }"#;

    const USERS: &str = r#"{
        "users": [{
            "id": 1, "user_name": "leia", "first_name": "Leia",
            "last_name": "Organa", "email": "leia@alderaan.gov",
            "password": "hope", "is_active": true
        }]
    }"#;

    #[test]
    fn missing_directory_yields_empty_bundle() {
        let dir = std::env::temp_dir().join("holocron-seed-does-not-exist");
        let bundle = load_from_dir(&dir).unwrap();
        assert!(bundle.is_empty());
    }

    #[test]
    fn merges_json_files_and_skips_the_rest() {
        let dir = temp_dir("merge");
        fs::write(dir.join("planets.json"), PLANETS).unwrap();
        fs::write(dir.join("users.JSON"), USERS).unwrap();
        fs::write(dir.join("notes.txt"), "not a seed").unwrap();
        fs::write(dir.join("broken.json"), "{ nope").unwrap();

        let bundle = load_from_dir(&dir).unwrap();
        assert_eq!(bundle.planets.len(), 1);
        assert_eq!(bundle.planets[0].name, "Alderaan");
        assert_eq!(bundle.users.len(), 1);
        assert_eq!(bundle.users[0].password, "hope");
        assert!(bundle.people.is_empty());

        let _ = fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn applying_twice_does_not_duplicate_rows() {
        let dir = temp_dir("apply");
        fs::write(dir.join("planets.json"), PLANETS).unwrap();
        fs::write(dir.join("users.json"), USERS).unwrap();

        let store = MemoryStore::new();
        apply(&store, load_from_dir(&dir).unwrap()).await.unwrap();
        apply(&store, load_from_dir(&dir).unwrap()).await.unwrap();

        assert_eq!(store.list_planets().await.unwrap().len(), 1);
        assert_eq!(store.list_users().await.unwrap().len(), 1);

        let _ = fs::remove_dir_all(&dir);
    }
}
