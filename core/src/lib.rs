//! API client core for the film archive's GraphQL endpoint.
//!
//! # Overview
//! Builds the `AllFilms` GraphQL request, sends it over HTTP, gates on the
//! response status, and decodes the JSON body into typed film records.
//!
//! # Design
//! - `FilmClient` is stateless and does no I/O: `build_*` produces an
//!   `HttpRequest`, `parse_*` consumes an `HttpResponse`. FFI hosts use this
//!   pair directly and perform the round trip themselves.
//! - `MovieService` drives the same pair through a `Transport` (reqwest by
//!   default) and yields one `Result` per call, either as a plain future or
//!   as a cancellable `PendingRequest`.
//! - The only shared state is the `ActivityCounter`, an atomic count of
//!   requests on the wire.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod activity;
pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod http;
pub mod pending;
pub mod query;
pub mod service;
pub mod transport;
pub mod types;

pub use activity::{ActivityCounter, ActivityGuard};
pub use client::FilmClient;
pub use config::{ServiceConfig, DEFAULT_BASE_URL};
pub use decode::{check_status, decode, ACCEPTED_STATUS};
pub use error::{ApiError, TransportFailure};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use pending::PendingRequest;
pub use query::Query;
pub use service::MovieService;
pub use transport::{ReqwestTransport, Transport};
pub use types::{
    AllFilmsData, AllFilmsResponse, Character, CharacterConnection, Film, FilmConnection, Homeworld,
};
