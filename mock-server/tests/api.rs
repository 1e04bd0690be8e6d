use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, saga_films, Archive, Film};
use tower::ServiceExt;

const ALL_FILMS: &str = r#"{"query":"query AllFilms { allFilms { films { id title } } }"}"#;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- allFilms ---

#[tokio::test]
async fn all_films_returns_saga() {
    let resp = app().oneshot(json_request(ALL_FILMS)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    let films: Vec<Film> =
        serde_json::from_value(body["data"]["allFilms"]["films"].clone()).unwrap();
    assert_eq!(films, saga_films());
    assert_eq!(films[0].title, "A New Hope");
}

#[tokio::test]
async fn all_films_from_custom_archive() {
    let archive = Archive::with_films(Vec::new());
    let resp = app_with(archive).oneshot(json_request(ALL_FILMS)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["data"]["allFilms"]["films"], serde_json::json!([]));
}

// --- rejected requests ---

#[tokio::test]
async fn unsupported_query_returns_graphql_errors() {
    let resp = app()
        .oneshot(json_request(r#"{"query":"{ allPlanets { planets { name } } }"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = body_json(resp).await;
    assert!(body["errors"][0]["message"].is_string());
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn missing_query_returns_422() {
    let resp = app().oneshot(json_request(r#"{"variables":{}}"#)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn missing_content_type_returns_415() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .body(ALL_FILMS.to_string())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn get_is_not_allowed() {
    let resp = app()
        .oneshot(Request::builder().uri("/").body(String::new()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// --- failure knobs ---

#[tokio::test]
async fn forced_status_overrides_response() {
    let archive = Archive::saga().with_status(StatusCode::SERVICE_UNAVAILABLE);
    let resp = app_with(archive).oneshot(json_request(ALL_FILMS)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], b"archive unavailable");
}

#[tokio::test]
async fn latency_delays_response() {
    let archive = Archive::saga().with_latency(std::time::Duration::from_millis(50));
    let started = std::time::Instant::now();
    let resp = app_with(archive).oneshot(json_request(ALL_FILMS)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(started.elapsed() >= std::time::Duration::from_millis(50));
}
