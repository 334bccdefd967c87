use crate::error::{HolocronError, Resource};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct User {
    pub id: i64,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Accepted from seed bundles, never written to responses.
    #[serde(skip_serializing)]
    pub password: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub gender: String,
    pub skin_color: String,
    pub hair_color: String,
    pub height: f64,
    pub eye_color: String,
    pub mass: f64,
    pub birth_year: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub climate: String,
    pub surface_water: f64,
    pub diameter: i64,
    pub rotation_period: i64,
    pub terrain: String,
    pub gravity: String,
    pub orbital_period: i64,
    pub population: i64,
}

/// What a favorite points at. A favorite always has exactly one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    People(i64),
    Planet(i64),
}

impl FavoriteTarget {
    pub fn resource(&self) -> Resource {
        match self {
            FavoriteTarget::People(_) => Resource::People,
            FavoriteTarget::Planet(_) => Resource::Planet,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            FavoriteTarget::People(id) | FavoriteTarget::Planet(id) => *id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub target: FavoriteTarget,
}

/// Raw `favorite` row with its two nullable link columns.
#[derive(Debug, Clone, FromRow)]
pub struct FavoriteRow {
    pub id: i64,
    pub user_id: i64,
    pub people_id: Option<i64>,
    pub planet_id: Option<i64>,
}

impl TryFrom<FavoriteRow> for Favorite {
    type Error = HolocronError;

    fn try_from(row: FavoriteRow) -> Result<Self, Self::Error> {
        let target = match (row.people_id, row.planet_id) {
            (Some(people_id), None) => FavoriteTarget::People(people_id),
            (None, Some(planet_id)) => FavoriteTarget::Planet(planet_id),
            _ => return Err(HolocronError::CorruptFavorite { id: row.id }),
        };
        Ok(Favorite {
            id: row.id,
            user_id: row.user_id,
            target,
        })
    }
}

/// Public shape of a favorite: `{"planet": {...}}` or `{"people": {...}}`.
/// The inner value is `null` when the target row could not be resolved.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteView {
    Planet(Option<Planet>),
    People(Option<Person>),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserWithFavorites {
    #[serde(flatten)]
    pub user: User,
    pub favorites: Vec<FavoriteView>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tatooine() -> Planet {
        Planet {
            id: 1,
            name: "Tatooine".to_string(),
            climate: "arid".to_string(),
            surface_water: 1.0,
            diameter: 10465,
            rotation_period: 23,
            terrain: "desert".to_string(),
            gravity: "1 standard".to_string(),
            orbital_period: 304,
            population: 200000,
        }
    }

    fn luke() -> Person {
        Person {
            id: 1,
            name: "Luke Skywalker".to_string(),
            gender: "male".to_string(),
            skin_color: "fair".to_string(),
            hair_color: "blond".to_string(),
            height: 172.0,
            eye_color: "blue".to_string(),
            mass: 77.0,
            birth_year: "19BBY".to_string(),
        }
    }

    fn row(people_id: Option<i64>, planet_id: Option<i64>) -> FavoriteRow {
        FavoriteRow {
            id: 3,
            user_id: 1,
            people_id,
            planet_id,
        }
    }

    #[test]
    fn user_password_is_never_serialized() {
        let user = User {
            id: 1,
            user_name: "leia".to_string(),
            first_name: "Leia".to_string(),
            last_name: "Organa".to_string(),
            email: "leia@alderaan.gov".to_string(),
            password: "help-me-obi-wan".to_string(),
            is_active: true,
        };
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["user_name"], "leia");
        assert_eq!(value["is_active"], true);
    }

    #[test]
    fn user_password_is_read_from_seed_json() {
        let user: User = serde_json::from_value(json!({
            "id": 2,
            "user_name": "han",
            "first_name": "Han",
            "last_name": "Solo",
            "email": "han@falcon.net",
            "password": "kessel",
            "is_active": false
        }))
        .unwrap();
        assert_eq!(user.password, "kessel");
    }

    #[test]
    fn favorite_views_are_keyed_by_target_kind() {
        let planet = serde_json::to_value(FavoriteView::Planet(Some(tatooine()))).unwrap();
        assert_eq!(planet["planet"]["name"], "Tatooine");
        assert!(planet.get("people").is_none());

        let people = serde_json::to_value(FavoriteView::People(Some(luke()))).unwrap();
        assert_eq!(people["people"]["birth_year"], "19BBY");
        assert!(people.get("planet").is_none());

        let dangling = serde_json::to_value(FavoriteView::Planet(None)).unwrap();
        assert_eq!(dangling, json!({ "planet": null }));
    }

    #[test]
    fn user_with_favorites_flattens_user_fields() {
        let aggregate = UserWithFavorites {
            user: User {
                id: 5,
                user_name: "rey".to_string(),
                first_name: "Rey".to_string(),
                last_name: "Skywalker".to_string(),
                email: "rey@jakku.net".to_string(),
                password: "bb8".to_string(),
                is_active: true,
            },
            favorites: vec![FavoriteView::Planet(Some(tatooine()))],
        };
        let value = serde_json::to_value(&aggregate).unwrap();
        assert_eq!(value["id"], 5);
        assert!(value.get("password").is_none());
        assert_eq!(value["favorites"].as_array().unwrap().len(), 1);
        assert_eq!(value["favorites"][0]["planet"]["id"], 1);
    }

    #[test]
    fn favorite_row_requires_exactly_one_link() {
        let planet = Favorite::try_from(row(None, Some(9))).unwrap();
        assert_eq!(planet.target, FavoriteTarget::Planet(9));

        let people = Favorite::try_from(row(Some(4), None)).unwrap();
        assert_eq!(people.target, FavoriteTarget::People(4));

        assert!(matches!(
            Favorite::try_from(row(Some(4), Some(9))),
            Err(HolocronError::CorruptFavorite { id: 3 })
        ));
        assert!(matches!(
            Favorite::try_from(row(None, None)),
            Err(HolocronError::CorruptFavorite { id: 3 })
        ));
    }
}
