//! Stateless HTTP request builder and response parser for the film archive.
//!
//! # Design
//! `FilmClient` holds only a validated `base_url` and carries no mutable
//! state between calls. Each query is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. `MovieService` drives the pair through a `Transport`; FFI
//! hosts drive it with their own HTTP stack.

use url::Url;

use crate::decode::{check_status, decode};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::query::{self, Query};
use crate::types::AllFilmsResponse;

/// Synchronous, stateless client for the archive's GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct FilmClient {
    base_url: String,
}

impl FilmClient {
    /// Bind to `base_url`, which must be an absolute http(s) URL with a host.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host().is_none() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST `query` to the base URL with an empty path.
    pub fn build_request(&self, query: Query) -> Result<HttpRequest, ApiError> {
        let body = query::build(query)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.base_url.clone(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body,
        })
    }

    pub fn build_all_films(&self) -> Result<HttpRequest, ApiError> {
        self.build_request(Query::AllFilms)
    }

    pub fn parse_all_films(&self, response: HttpResponse) -> Result<AllFilmsResponse, ApiError> {
        decode(&response)
    }

    /// Status gate only, for calls whose payload is not needed.
    pub fn parse_empty(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}
