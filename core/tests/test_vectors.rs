//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! The vector file describes the expected request shape, simulated responses,
//! and the expected parse result or error for each. Comparing parsed JSON (not
//! raw strings) avoids false negatives from field-ordering differences.

use archives_core::{ApiError, Film, FilmClient, HttpMethod, HttpResponse};

const BASE_URL: &str = "http://localhost:64428";

fn client() -> FilmClient {
    FilmClient::new(BASE_URL).unwrap()
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        other => panic!("unknown method: {other}"),
    }
}

fn vectors() -> serde_json::Value {
    let raw = include_str!("../../test-vectors/all_films.json");
    serde_json::from_str(raw).unwrap()
}

#[test]
fn all_films_request_vector() {
    let vectors = vectors();
    let expected = &vectors["expected_request"];
    let req = client().build_all_films().unwrap();

    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()));
    assert_eq!(req.url, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()));

    let expected_headers: Vec<(String, String)> = expected["headers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let arr = h.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect();
    assert_eq!(req.headers, expected_headers);

    let body: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
    let keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
    let expected_keys: Vec<&str> = expected["body_keys"]
        .as_array()
        .unwrap()
        .iter()
        .map(|k| k.as_str().unwrap())
        .collect();
    assert_eq!(keys, expected_keys);

    let query = body["query"].as_str().unwrap();
    for needle in expected["query_contains"].as_array().unwrap() {
        let needle = needle.as_str().unwrap();
        assert!(query.contains(needle), "query lacks {needle}");
    }
}

#[test]
fn all_films_response_vectors() {
    let vectors = vectors();
    let c = client();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let sim = &case["simulated_response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: sim["body"].as_str().unwrap().as_bytes().to_vec(),
        };
        let result = c.parse_all_films(response);

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "Decode" => assert!(
                    matches!(err, ApiError::Decode(_)),
                    "{name}: expected Decode, got {err:?}"
                ),
                "Status" => {
                    let expected_status = case["expected_status"].as_u64().unwrap() as u16;
                    match err {
                        ApiError::Status { status, body } => {
                            assert_eq!(status, expected_status, "{name}: status");
                            assert_eq!(
                                body,
                                sim["body"].as_str().unwrap().as_bytes(),
                                "{name}: body"
                            );
                        }
                        other => panic!("{name}: expected Status, got {other:?}"),
                    }
                }
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            let films = result.unwrap().into_films();
            let expected: Vec<Film> =
                serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(films, expected, "{name}: parsed result");
        }
    }
}
