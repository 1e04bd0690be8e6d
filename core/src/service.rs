//! Asynchronous film service: build, send, gate, decode.
//!
//! # Design
//! `MovieService` composes a `FilmClient` with a `Transport`. Every entry
//! point shares `execute`, which runs the stages strictly in order and holds
//! an activity slot only while the request is on the wire. Typed and
//! payload-free calls differ only in what they do with the gated response.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::activity::ActivityCounter;
use crate::client::FilmClient;
use crate::config::ServiceConfig;
use crate::decode::{check_status, decode};
use crate::error::ApiError;
use crate::http::HttpResponse;
use crate::pending::PendingRequest;
use crate::query::Query;
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{AllFilmsResponse, Film};

/// Fetches films from the archive endpoint.
///
/// Cloning is cheap and clones share the transport and activity counter.
pub struct MovieService<T = ReqwestTransport> {
    client: FilmClient,
    transport: Arc<T>,
    activity: ActivityCounter,
}

impl MovieService<ReqwestTransport> {
    pub fn new(config: ServiceConfig) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(&config, transport)
    }
}

impl<T: Transport> MovieService<T> {
    pub fn with_transport(config: &ServiceConfig, transport: T) -> Result<Self, ApiError> {
        Ok(Self {
            client: FilmClient::new(&config.base_url)?,
            transport: Arc::new(transport),
            activity: ActivityCounter::new(),
        })
    }

    pub fn activity(&self) -> &ActivityCounter {
        &self.activity
    }

    pub async fn get_movies(&self) -> Result<AllFilmsResponse, ApiError> {
        self.request(Query::AllFilms).await
    }

    /// `get_movies` projected to the film list.
    pub async fn get_films(&self) -> Result<Vec<Film>, ApiError> {
        self.get_movies().await.map(AllFilmsResponse::into_films)
    }

    /// Run `query` and decode the response body into `R`.
    pub async fn request<R: DeserializeOwned>(&self, query: Query) -> Result<R, ApiError> {
        let response = self.execute(query).await?;
        let decoded = decode(&response).inspect_err(|err| {
            tracing::warn!(
                operation = query.operation_name(),
                error = %err,
                "response body rejected"
            );
        })?;
        tracing::debug!(operation = query.operation_name(), "response decoded");
        Ok(decoded)
    }

    /// Run `query` for its side effect; the body is not decoded.
    pub async fn request_unit(&self, query: Query) -> Result<(), ApiError> {
        self.execute(query).await.map(|_| ())
    }

    async fn execute(&self, query: Query) -> Result<HttpResponse, ApiError> {
        let operation = query.operation_name();
        let request = self.client.build_request(query)?;
        tracing::debug!(operation, url = %request.url, "sending request");

        let response = {
            let _activity = self.activity.begin();
            self.transport.send(request).await
        };
        let response = response.inspect_err(|err| {
            tracing::warn!(operation, error = %err, "request failed");
        })?;

        tracing::debug!(
            operation,
            status = response.status,
            bytes = response.body.len(),
            "response received"
        );
        check_status(&response).inspect_err(|err| {
            tracing::warn!(operation, error = %err, "response rejected");
        })?;
        Ok(response)
    }
}

impl<T: Transport + 'static> MovieService<T> {
    /// `get_movies` on a spawned task; see `PendingRequest` for cancellation.
    pub fn spawn_get_movies(&self) -> PendingRequest<AllFilmsResponse> {
        self.spawn_request(Query::AllFilms)
    }

    pub fn spawn_request<R>(&self, query: Query) -> PendingRequest<R>
    where
        R: DeserializeOwned + Send + 'static,
    {
        let service = self.clone();
        PendingRequest::spawn(async move { service.request(query).await })
    }
}

impl<T> Clone for MovieService<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            transport: Arc::clone(&self.transport),
            activity: self.activity.clone(),
        }
    }
}
