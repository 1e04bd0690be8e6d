use std::{sync::Arc, time::Duration};

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;

mod archive;

pub use archive::saga_films;
pub use axum::http::StatusCode;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    pub id: String,
    pub director: String,
    #[serde(rename = "episodeID")]
    pub episode_id: i32,
    pub title: String,
    /// Seconds since the Unix epoch.
    pub release_date: i64,
    pub character_connection: CharacterConnection,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CharacterConnection {
    pub characters: Vec<Character>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: String,
    pub name: String,
    pub birth_year: String,
    pub eye_color: String,
    pub hair_color: String,
    pub homeworld: Homeworld,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Homeworld {
    pub name: String,
}

#[derive(Deserialize)]
pub struct GraphQLRequest {
    pub query: String,
}

/// Server state: the films to serve plus knobs for failure-path tests.
#[derive(Clone, Debug)]
pub struct Archive {
    films: Arc<Vec<Film>>,
    latency: Option<Duration>,
    forced_status: Option<StatusCode>,
}

impl Archive {
    pub fn saga() -> Self {
        Self::with_films(saga_films())
    }

    pub fn with_films(films: Vec<Film>) -> Self {
        Self {
            films: Arc::new(films),
            latency: None,
            forced_status: None,
        }
    }

    /// Delay every response by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Answer every request with `status` and a plain-text body.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.forced_status = Some(status);
        self
    }

    pub fn films(&self) -> &[Film] {
        &self.films
    }
}

impl Default for Archive {
    fn default() -> Self {
        Self::saga()
    }
}

pub fn app() -> Router {
    app_with(Archive::saga())
}

pub fn app_with(archive: Archive) -> Router {
    Router::new().route("/", post(graphql)).with_state(archive)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, archive: Archive) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(archive)).await
}

async fn graphql(State(archive): State<Archive>, Json(request): Json<GraphQLRequest>) -> Response {
    if let Some(latency) = archive.latency {
        tokio::time::sleep(latency).await;
    }
    if let Some(status) = archive.forced_status {
        tracing::info!(%status, "forced status");
        return (status, "archive unavailable").into_response();
    }
    if !request.query.contains("allFilms") {
        tracing::warn!(query = %request.query, "unsupported query");
        let errors = json!({ "errors": [{ "message": "only allFilms is supported" }] });
        return (StatusCode::BAD_REQUEST, Json(errors)).into_response();
    }

    tracing::info!(films = archive.films.len(), "serving allFilms");
    Json(json!({ "data": { "allFilms": { "films": &*archive.films } } })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn film_serializes_wire_names() {
        let film = &saga_films()[0];
        let json = serde_json::to_value(film).unwrap();
        assert_eq!(json["episodeID"], 4);
        assert_eq!(json["releaseDate"], 233366400);
        assert!(json["characterConnection"]["characters"].is_array());
        assert!(json["characterConnection"]["characters"][0]["birthYear"].is_string());
        assert!(json["characterConnection"]["characters"][0]["homeworld"]["name"].is_string());
    }

    #[test]
    fn saga_has_six_films_with_at_most_ten_characters() {
        let films = saga_films();
        assert_eq!(films.len(), 6);
        for film in &films {
            assert!(film.character_connection.characters.len() <= 10, "{}", film.title);
        }
    }

    #[test]
    fn saga_ids_are_unique() {
        let films = saga_films();
        let mut ids: Vec<_> = films.iter().map(|f| f.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), films.len());
    }

    #[test]
    fn graphql_request_rejects_missing_query() {
        let result: Result<GraphQLRequest, _> = serde_json::from_str(r#"{"variables":{}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn archive_knobs() {
        let archive = Archive::with_films(Vec::new())
            .with_latency(Duration::from_millis(10))
            .with_status(StatusCode::SERVICE_UNAVAILABLE);
        assert!(archive.films().is_empty());
        assert_eq!(archive.latency, Some(Duration::from_millis(10)));
        assert_eq!(archive.forced_status, Some(StatusCode::SERVICE_UNAVAILABLE));
    }
}
