//! `DatabaseProxy` - typed proxy over the database microservice API.
#![allow(clippy::future_not_send)]

use anyhow::Result;

use super::api::LocalDatabaseApi;
use super::error::ProxyError;
use super::types::{Movie, Outcome, TitleVectors};

/// Proxy to the database microservice.
///
/// Wraps an implementation of the API contract (injected at construction)
/// and translates each raw exchange [`Outcome`] into either the decoded
/// payload or a [`ProxyError`]. Every method awaits exactly one exchange
/// to completion: no timeout, no retry, no fan-out. The proxy holds no
/// cross-call state, so one instance can serve concurrent callers.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct DatabaseProxy<A> {
    /// API contract implementation, read-only after construction.
    api: A,
}

/// Translates one completed-or-failed exchange into the proxy's public
/// contract: payload on success, `RequestFailed` on a completed non-2xx
/// exchange, `Transport` (unchanged fault) when the exchange never
/// completed.
fn unwrap_outcome<T>(exchange: Result<Outcome<T>>) -> Result<T, ProxyError> {
    match exchange? {
        Outcome::Success(payload) => Ok(payload),
        Outcome::Failure { status, .. } => Err(ProxyError::RequestFailed { status }),
    }
}

impl<A: LocalDatabaseApi> DatabaseProxy<A> {
    /// Creates a proxy around the given API implementation.
    pub const fn new(api: A) -> Self {
        Self { api }
    }

    /// Gets every [`Movie`] known to the service at `route`.
    ///
    /// # Errors
    ///
    /// [`ProxyError::RequestFailed`] if the service answered with a
    /// non-success status, [`ProxyError::Transport`] if the exchange could
    /// not be completed.
    pub async fn get_movies(&self, route: &str) -> Result<Vec<Movie>, ProxyError> {
        unwrap_outcome(self.api.get_movies(route).await)
    }

    /// Gets a map associating each movie title with its feature vector.
    ///
    /// # Errors
    ///
    /// [`ProxyError::RequestFailed`] if the service answered with a
    /// non-success status, [`ProxyError::Transport`] if the exchange could
    /// not be completed.
    pub async fn get_movies_map(&self, route: &str) -> Result<TitleVectors, ProxyError> {
        unwrap_outcome(self.api.get_movies_map(route).await)
    }

    /// Searches for movies whose title contains the given query.
    ///
    /// # Errors
    ///
    /// [`ProxyError::RequestFailed`] if the service answered with a
    /// non-success status, [`ProxyError::Transport`] if the exchange could
    /// not be completed.
    pub async fn search_movies(&self, route: &str, query: &str) -> Result<Vec<Movie>, ProxyError> {
        unwrap_outcome(self.api.search_movies(route, query).await)
    }

    /// Searches for movies whose title contains any of the given queries.
    ///
    /// # Errors
    ///
    /// [`ProxyError::RequestFailed`] if the service answered with a
    /// non-success status, [`ProxyError::Transport`] if the exchange could
    /// not be completed.
    pub async fn search_movies_any(
        &self,
        route: &str,
        queries: &[String],
    ) -> Result<Vec<Movie>, ProxyError> {
        unwrap_outcome(self.api.search_movies_any(route, queries).await)
    }

    /// Searches for movies whose title contains every one of the given
    /// queries.
    ///
    /// # Errors
    ///
    /// [`ProxyError::RequestFailed`] if the service answered with a
    /// non-success status, [`ProxyError::Transport`] if the exchange could
    /// not be completed.
    pub async fn search_movies_all(
        &self,
        route: &str,
        queries: &[String],
    ) -> Result<Vec<Movie>, ProxyError> {
        unwrap_outcome(self.api.search_movies_all(route, queries).await)
    }

    /// Gets every [`Movie`]; the service also records the call duration
    /// with its timer collaborator.
    ///
    /// # Errors
    ///
    /// [`ProxyError::RequestFailed`] if the service answered with a
    /// non-success status, [`ProxyError::Transport`] if the exchange could
    /// not be completed.
    pub async fn get_movies_timed(&self, route: &str) -> Result<Vec<Movie>, ProxyError> {
        unwrap_outcome(self.api.get_movies_timed(route).await)
    }

    /// Gets the title-to-vector map; the service also records the call
    /// duration.
    ///
    /// # Errors
    ///
    /// [`ProxyError::RequestFailed`] if the service answered with a
    /// non-success status, [`ProxyError::Transport`] if the exchange could
    /// not be completed.
    pub async fn get_movies_map_timed(&self, route: &str) -> Result<TitleVectors, ProxyError> {
        unwrap_outcome(self.api.get_movies_map_timed(route).await)
    }

    /// Searches by a single query; the service also records the call
    /// duration.
    ///
    /// # Errors
    ///
    /// [`ProxyError::RequestFailed`] if the service answered with a
    /// non-success status, [`ProxyError::Transport`] if the exchange could
    /// not be completed.
    pub async fn search_movies_timed(
        &self,
        route: &str,
        query: &str,
    ) -> Result<Vec<Movie>, ProxyError> {
        unwrap_outcome(self.api.search_movies_timed(route, query).await)
    }

    /// Searches for titles containing any query; the service also records
    /// the call duration.
    ///
    /// # Errors
    ///
    /// [`ProxyError::RequestFailed`] if the service answered with a
    /// non-success status, [`ProxyError::Transport`] if the exchange could
    /// not be completed.
    pub async fn search_movies_any_timed(
        &self,
        route: &str,
        queries: &[String],
    ) -> Result<Vec<Movie>, ProxyError> {
        unwrap_outcome(self.api.search_movies_any_timed(route, queries).await)
    }

    /// Searches for titles containing every query; the service also
    /// records the call duration.
    ///
    /// # Errors
    ///
    /// [`ProxyError::RequestFailed`] if the service answered with a
    /// non-success status, [`ProxyError::Transport`] if the exchange could
    /// not be completed.
    pub async fn search_movies_all_timed(
        &self,
        route: &str,
        queries: &[String],
    ) -> Result<Vec<Movie>, ProxyError> {
        unwrap_outcome(self.api.search_movies_all_timed(route, queries).await)
    }
}
