//! SQL DDL for initializing the catalog storage.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `user`, `people`, `planets` catalog tables keyed by INTEGER PRIMARY KEY
/// - `favorite` linking a user to exactly one of a person or a planet
///   (enforced by the CHECK constraint)
/// - an index on `favorite(user_id)` for the per-user lookups
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS "user" (
    id INTEGER PRIMARY KEY NOT NULL,
    user_name TEXT NOT NULL UNIQUE,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL,
    is_active INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS people (
    id INTEGER PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    gender TEXT NOT NULL,
    skin_color TEXT NOT NULL,
    hair_color TEXT NOT NULL,
    height REAL NOT NULL,
    eye_color TEXT NOT NULL,
    mass REAL NOT NULL,
    birth_year TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS planets (
    id INTEGER PRIMARY KEY NOT NULL,
    name TEXT NOT NULL UNIQUE,
    climate TEXT NOT NULL,
    surface_water REAL NOT NULL,
    diameter INTEGER NOT NULL,
    rotation_period INTEGER NOT NULL,
    terrain TEXT NOT NULL,
    gravity TEXT NOT NULL,
    orbital_period INTEGER NOT NULL,
    population INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS favorite (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL REFERENCES "user"(id),
    people_id INTEGER NULL REFERENCES people(id),
    planet_id INTEGER NULL REFERENCES planets(id),
    CHECK ((people_id IS NULL) <> (planet_id IS NULL))
);

CREATE INDEX IF NOT EXISTS idx_favorite_user_id ON favorite(user_id);
"#;
