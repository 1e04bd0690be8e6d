//! Decoded shape of the archive's `AllFilms` response.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch drift between the two crates. Every field is
//! required, so a film either decodes completely or the whole response fails.
//! `__typename` and other unknown fields are ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level `{"data": ...}` envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AllFilmsResponse {
    pub data: AllFilmsData,
}

impl AllFilmsResponse {
    /// Unwrap `data.allFilms.films`.
    pub fn into_films(self) -> Vec<Film> {
        self.data.all_films.films
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AllFilmsData {
    #[serde(rename = "allFilms")]
    pub all_films: FilmConnection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilmConnection {
    pub films: Vec<Film>,
}

/// A single film record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    pub id: String,
    pub director: String,
    #[serde(rename = "episodeID")]
    pub episode_id: i32,
    pub title: String,
    /// Sent on the wire as seconds since the Unix epoch.
    #[serde(with = "epoch_seconds")]
    pub release_date: DateTime<Utc>,
    pub character_connection: CharacterConnection,
}

impl Film {
    pub fn characters(&self) -> &[Character] {
        &self.character_connection.characters
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CharacterConnection {
    pub characters: Vec<Character>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: String,
    pub name: String,
    pub birth_year: String,
    pub eye_color: String,
    pub hair_color: String,
    pub homeworld: Homeworld,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Homeworld {
    pub name: String,
}

/// Seconds since the Unix epoch. Integers and floats are both accepted on
/// input; output is always whole seconds.
mod epoch_seconds {
    use std::fmt;

    use chrono::{DateTime, Utc};
    use serde::de::{self, Unexpected, Visitor};
    use serde::{Deserializer, Serializer};

    const NANOS_PER_SEC: f64 = 1_000_000_000.0;

    pub fn serialize<S: Serializer>(
        date: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        chrono::serde::ts_seconds::serialize(date, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        deserializer.deserialize_any(SecondsVisitor)
    }

    struct SecondsVisitor;

    impl<'de> Visitor<'de> for SecondsVisitor {
        type Value = DateTime<Utc>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a unix timestamp in seconds")
        }

        fn visit_i64<E: de::Error>(self, secs: i64) -> Result<Self::Value, E> {
            DateTime::from_timestamp(secs, 0)
                .ok_or_else(|| E::invalid_value(Unexpected::Signed(secs), &self))
        }

        fn visit_u64<E: de::Error>(self, secs: u64) -> Result<Self::Value, E> {
            let signed = i64::try_from(secs)
                .map_err(|_| E::invalid_value(Unexpected::Unsigned(secs), &self))?;
            self.visit_i64(signed)
        }

        fn visit_f64<E: de::Error>(self, secs: f64) -> Result<Self::Value, E> {
            let invalid = || E::invalid_value(Unexpected::Float(secs), &SecondsVisitor);
            if !secs.is_finite() {
                return Err(invalid());
            }
            let whole = secs.floor();
            let nanos = (((secs - whole) * NANOS_PER_SEC).round() as u32).min(999_999_999);
            DateTime::from_timestamp(whole as i64, nanos).ok_or_else(invalid)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const FILM: &str = r#"{
        "__typename": "Film",
        "id": "ZmlsbXM6MQ==",
        "director": "George Lucas",
        "episodeID": 4,
        "title": "A New Hope",
        "releaseDate": 233366400,
        "characterConnection": {
            "__typename": "FilmCharactersConnection",
            "characters": [{
                "__typename": "Person",
                "id": "cGVvcGxlOjE=",
                "name": "Luke Skywalker",
                "birthYear": "19BBY",
                "eyeColor": "blue",
                "hairColor": "blond",
                "homeworld": {"__typename": "Planet", "name": "Tatooine"}
            }]
        }
    }"#;

    #[test]
    fn film_decodes_wire_names_and_ignores_typename() {
        let film: Film = serde_json::from_str(FILM).unwrap();
        assert_eq!(film.episode_id, 4);
        assert_eq!(film.title, "A New Hope");
        assert_eq!(film.characters().len(), 1);
        assert_eq!(film.characters()[0].birth_year, "19BBY");
        assert_eq!(film.characters()[0].homeworld.name, "Tatooine");
    }

    #[test]
    fn release_date_is_epoch_seconds() {
        let film: Film = serde_json::from_str(FILM).unwrap();
        assert_eq!(film.release_date, Utc.with_ymd_and_hms(1977, 5, 25, 0, 0, 0).unwrap());
    }

    #[test]
    fn film_serializes_release_date_back_to_seconds() {
        let film: Film = serde_json::from_str(FILM).unwrap();
        let json = serde_json::to_value(&film).unwrap();
        assert_eq!(json["releaseDate"], 233366400);
        assert_eq!(json["episodeID"], 4);
    }

    #[test]
    fn release_date_accepts_float_seconds() {
        let json = FILM.replace("233366400", "233366400.0");
        let film: Film = serde_json::from_str(&json).unwrap();
        assert_eq!(film.release_date, Utc.with_ymd_and_hms(1977, 5, 25, 0, 0, 0).unwrap());

        let json = FILM.replace("233366400", "2.333664e8");
        let film: Film = serde_json::from_str(&json).unwrap();
        assert_eq!(film.release_date.timestamp(), 233366400);
    }

    #[test]
    fn release_date_keeps_fractional_seconds() {
        let json = FILM.replace("233366400", "233366400.5");
        let film: Film = serde_json::from_str(&json).unwrap();
        assert_eq!(film.release_date.timestamp(), 233366400);
        assert_eq!(film.release_date.timestamp_subsec_millis(), 500);

        let json = serde_json::to_value(&film).unwrap();
        assert_eq!(json["releaseDate"], 233366400);
    }

    #[test]
    fn release_date_before_epoch() {
        let json = FILM.replace("233366400", "-1.5");
        let film: Film = serde_json::from_str(&json).unwrap();
        assert_eq!(film.release_date.timestamp(), -2);
        assert_eq!(film.release_date.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn character_missing_homeworld_is_rejected() {
        let json =
            r#"{"id":"1","name":"R2-D2","birthYear":"33BBY","eyeColor":"red","hairColor":"n/a"}"#;
        let result: Result<Character, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn release_date_as_string_is_rejected() {
        let json = FILM.replace("233366400", r#""1977-05-25""#);
        let result: Result<Film, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }
}
