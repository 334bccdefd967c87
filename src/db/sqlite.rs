use crate::db::models::{Favorite, FavoriteRow, FavoriteTarget, Person, Planet, User};
use crate::db::schema::SQLITE_INIT;
use crate::db::store::{FavoriteRepository, PeopleRepository, PlanetRepository, UserRepository};
use crate::error::HolocronError;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `database_url` and
    /// initialize the schema.
    pub async fn connect(database_url: &str) -> Result<Self, HolocronError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        let store = Self::new(pool);
        store.init_schema().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), HolocronError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl PeopleRepository for SqliteStore {
    async fn list_people(&self) -> Result<Vec<Person>, HolocronError> {
        let rows = sqlx::query_as::<_, Person>(
            r#"SELECT id, name, gender, skin_color, hair_color, height,
               eye_color, mass, birth_year
               FROM people ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_person(&self, id: i64) -> Result<Option<Person>, HolocronError> {
        let row = sqlx::query_as::<_, Person>(
            r#"SELECT id, name, gender, skin_color, hair_color, height,
               eye_color, mass, birth_year
               FROM people WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Batch upsert using a single transaction.
    async fn upsert_people(&self, people: Vec<Person>) -> Result<usize, HolocronError> {
        let mut tx = self.pool.begin().await?;
        let count = people.len();

        for person in people {
            sqlx::query(
                r#"
                INSERT INTO people (
                    id, name, gender, skin_color, hair_color, height,
                    eye_color, mass, birth_year
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    name=excluded.name,
                    gender=excluded.gender,
                    skin_color=excluded.skin_color,
                    hair_color=excluded.hair_color,
                    height=excluded.height,
                    eye_color=excluded.eye_color,
                    mass=excluded.mass,
                    birth_year=excluded.birth_year
                "#,
            )
            .bind(person.id)
            .bind(person.name)
            .bind(person.gender)
            .bind(person.skin_color)
            .bind(person.hair_color)
            .bind(person.height)
            .bind(person.eye_color)
            .bind(person.mass)
            .bind(person.birth_year)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(count)
    }
}

#[async_trait]
impl PlanetRepository for SqliteStore {
    async fn list_planets(&self) -> Result<Vec<Planet>, HolocronError> {
        let rows = sqlx::query_as::<_, Planet>(
            r#"SELECT id, name, climate, surface_water, diameter, rotation_period,
               terrain, gravity, orbital_period, population
               FROM planets ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_planet(&self, id: i64) -> Result<Option<Planet>, HolocronError> {
        let row = sqlx::query_as::<_, Planet>(
            r#"SELECT id, name, climate, surface_water, diameter, rotation_period,
               terrain, gravity, orbital_period, population
               FROM planets WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn upsert_planets(&self, planets: Vec<Planet>) -> Result<usize, HolocronError> {
        let mut tx = self.pool.begin().await?;
        let count = planets.len();

        for planet in planets {
            sqlx::query(
                r#"
                INSERT INTO planets (
                    id, name, climate, surface_water, diameter, rotation_period,
                    terrain, gravity, orbital_period, population
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    name=excluded.name,
                    climate=excluded.climate,
                    surface_water=excluded.surface_water,
                    diameter=excluded.diameter,
                    rotation_period=excluded.rotation_period,
                    terrain=excluded.terrain,
                    gravity=excluded.gravity,
                    orbital_period=excluded.orbital_period,
                    population=excluded.population
                "#,
            )
            .bind(planet.id)
            .bind(planet.name)
            .bind(planet.climate)
            .bind(planet.surface_water)
            .bind(planet.diameter)
            .bind(planet.rotation_period)
            .bind(planet.terrain)
            .bind(planet.gravity)
            .bind(planet.orbital_period)
            .bind(planet.population)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(count)
    }
}

#[async_trait]
impl UserRepository for SqliteStore {
    async fn list_users(&self) -> Result<Vec<User>, HolocronError> {
        let rows = sqlx::query_as::<_, User>(
            r#"SELECT id, user_name, first_name, last_name, email, password, is_active
               FROM "user" ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, HolocronError> {
        let row = sqlx::query_as::<_, User>(
            r#"SELECT id, user_name, first_name, last_name, email, password, is_active
               FROM "user" WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn upsert_users(&self, users: Vec<User>) -> Result<usize, HolocronError> {
        let mut tx = self.pool.begin().await?;
        let count = users.len();

        for user in users {
            sqlx::query(
                r#"
                INSERT INTO "user" (
                    id, user_name, first_name, last_name, email, password, is_active
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    user_name=excluded.user_name,
                    first_name=excluded.first_name,
                    last_name=excluded.last_name,
                    email=excluded.email,
                    password=excluded.password,
                    is_active=excluded.is_active
                "#,
            )
            .bind(user.id)
            .bind(user.user_name)
            .bind(user.first_name)
            .bind(user.last_name)
            .bind(user.email)
            .bind(user.password)
            .bind(user.is_active)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(count)
    }
}

#[async_trait]
impl FavoriteRepository for SqliteStore {
    async fn list_favorites(&self, user_id: i64) -> Result<Vec<Favorite>, HolocronError> {
        let rows = sqlx::query_as::<_, FavoriteRow>(
            r#"SELECT id, user_id, people_id, planet_id
               FROM favorite WHERE user_id = ? ORDER BY id"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Favorite::try_from).collect()
    }

    /// Existence checks and the insert run as one statement.
    async fn insert_favorite(
        &self,
        user_id: i64,
        target: FavoriteTarget,
    ) -> Result<Option<i64>, HolocronError> {
        let sql = match target {
            FavoriteTarget::People(_) => {
                r#"INSERT INTO favorite (user_id, people_id)
                   SELECT ?, ?
                   WHERE EXISTS (SELECT 1 FROM "user" WHERE id = ?)
                     AND EXISTS (SELECT 1 FROM people WHERE id = ?)"#
            }
            FavoriteTarget::Planet(_) => {
                r#"INSERT INTO favorite (user_id, planet_id)
                   SELECT ?, ?
                   WHERE EXISTS (SELECT 1 FROM "user" WHERE id = ?)
                     AND EXISTS (SELECT 1 FROM planets WHERE id = ?)"#
            }
        };
        let result = sqlx::query(sql)
            .bind(user_id)
            .bind(target.id())
            .bind(user_id)
            .bind(target.id())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(result.last_insert_rowid()))
    }

    async fn delete_favorite(
        &self,
        user_id: i64,
        target: FavoriteTarget,
    ) -> Result<bool, HolocronError> {
        let sql = match target {
            FavoriteTarget::People(_) => {
                r#"DELETE FROM favorite WHERE id = (
                       SELECT id FROM favorite
                       WHERE user_id = ? AND people_id = ?
                       ORDER BY id LIMIT 1
                   )"#
            }
            FavoriteTarget::Planet(_) => {
                r#"DELETE FROM favorite WHERE id = (
                       SELECT id FROM favorite
                       WHERE user_id = ? AND planet_id = ?
                       ORDER BY id LIMIT 1
                   )"#
            }
        };
        let result = sqlx::query(sql)
            .bind(user_id)
            .bind(target.id())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
