//! `DatabaseApi` trait definition.
#![allow(clippy::future_not_send)]

use anyhow::Result;

use super::types::{Movie, Outcome, TitleVectors};

/// Database microservice API trait.
///
/// One method per remote operation, each targeting the backend instance
/// named by `route`. A method resolves to `Ok` whenever an HTTP exchange
/// completed, carrying the raw [`Outcome`]; it resolves to `Err` only when
/// the exchange could not be completed at all (connection failure, body
/// read failure, payload decode failure).
///
/// The `*_timed` operations are identical to their plain counterparts
/// except that the service additionally records the call duration with its
/// timer collaborator.
///
/// Abstracts API operations for stub substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(DatabaseApi: Send)]
pub trait LocalDatabaseApi {
    /// Fetches every movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP exchange cannot be completed.
    async fn get_movies(&self, route: &str) -> Result<Outcome<Vec<Movie>>>;

    /// Fetches every movie as a title-to-vector map.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP exchange cannot be completed.
    async fn get_movies_map(&self, route: &str) -> Result<Outcome<TitleVectors>>;

    /// Searches for movies whose title contains `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP exchange cannot be completed.
    async fn search_movies(&self, route: &str, query: &str) -> Result<Outcome<Vec<Movie>>>;

    /// Searches for movies whose title contains any of `queries`.
    ///
    /// An empty `queries` list means "no filter" on the service side.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP exchange cannot be completed.
    async fn search_movies_any(
        &self,
        route: &str,
        queries: &[String],
    ) -> Result<Outcome<Vec<Movie>>>;

    /// Searches for movies whose title contains every one of `queries`.
    ///
    /// An empty `queries` list means "no filter" on the service side.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP exchange cannot be completed.
    async fn search_movies_all(
        &self,
        route: &str,
        queries: &[String],
    ) -> Result<Outcome<Vec<Movie>>>;

    /// Fetches every movie; the service also records the call duration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP exchange cannot be completed.
    async fn get_movies_timed(&self, route: &str) -> Result<Outcome<Vec<Movie>>>;

    /// Fetches every movie as a title-to-vector map; the service also
    /// records the call duration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP exchange cannot be completed.
    async fn get_movies_map_timed(&self, route: &str) -> Result<Outcome<TitleVectors>>;

    /// Searches for movies whose title contains `query`; the service also
    /// records the call duration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP exchange cannot be completed.
    async fn search_movies_timed(&self, route: &str, query: &str) -> Result<Outcome<Vec<Movie>>>;

    /// Searches for movies whose title contains any of `queries`; the
    /// service also records the call duration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP exchange cannot be completed.
    async fn search_movies_any_timed(
        &self,
        route: &str,
        queries: &[String],
    ) -> Result<Outcome<Vec<Movie>>>;

    /// Searches for movies whose title contains every one of `queries`;
    /// the service also records the call duration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP exchange cannot be completed.
    async fn search_movies_all_timed(
        &self,
        route: &str,
        queries: &[String],
    ) -> Result<Outcome<Vec<Movie>>>;
}
