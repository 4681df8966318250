//! `DatabaseClient` - database microservice client implementation.

use anyhow::{Context, Result, bail};
use reqwest::Client;
use tracing::instrument;
use url::Url;

use super::api::LocalDatabaseApi;
use super::types::{Movie, Outcome, TitleVectors};

/// Default base URL of the gateway fronting the database microservice.
const DEFAULT_BASE_URL: &str = "http://localhost:8080/";

/// Default User-Agent.
const DEFAULT_USER_AGENT: &str = concat!("movrec-client/", env!("CARGO_PKG_VERSION"));

/// Path for the fetch-all endpoint, relative to `{route}/`.
const ALL_MOVIES_PATH: &str = "movies";

/// Path for the fetch-all-as-map endpoint.
const MOVIES_MAP_PATH: &str = "movies/map";

/// Path for the single-term search endpoint.
const SEARCH_PATH: &str = "movies/search";

/// Path for the match-any search endpoint.
const SEARCH_ANY_PATH: &str = "movies/search/any";

/// Path for the match-all search endpoint.
const SEARCH_ALL_PATH: &str = "movies/search/all";

/// Path segment prefixed to an operation so the service records its
/// duration with the timer collaborator.
const TIMED_PREFIX: &str = "timed";

/// Database microservice API client.
///
/// Immutable after construction; a single instance can serve concurrent
/// calls without synchronization. Every operation is a single-attempt
/// exchange: no retries, no caching.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct DatabaseClient {
    /// HTTP client (reqwest, gzip enabled).
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
}

/// Builder for `DatabaseClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct DatabaseClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
}

impl DatabaseClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Overrides the User-Agent (default: `movrec-client/<version>`).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - the default base URL fails to parse.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<DatabaseClient> {
        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| String::from(DEFAULT_USER_AGENT));

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(DatabaseClient {
            http_client,
            base_url,
        })
    }
}

impl DatabaseClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> DatabaseClientBuilder {
        DatabaseClientBuilder::new()
    }

    /// Performs one GET exchange against `{base_url}{route}/{path}`.
    ///
    /// A completed exchange always yields `Ok`: non-2xx statuses become
    /// `Outcome::Failure` with the raw body as message. Only failures to
    /// complete the exchange (connection, body read, JSON decode) are
    /// `Err`.
    #[instrument(skip_all)]
    async fn get_outcome<T: serde::de::DeserializeOwned>(
        &self,
        route: &str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Outcome<T>> {
        if route.is_empty() {
            bail!("route must not be empty");
        }

        let url = self
            .base_url
            .join(&format!("{route}/{path}"))
            .with_context(|| format!("failed to join URL path: {route}/{path}"))?;

        let request = self
            .http_client
            .get(url)
            .query(query)
            .build()
            .with_context(|| format!("failed to build request: {path}"))?;

        tracing::debug!(url = %request.url(), "database API request");

        let result = self.http_client.execute(request).await;
        let response = result.with_context(|| format!("request failed: {path}"))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<failed to read body>"));
            return Ok(Outcome::Failure {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("failed to read response body: {path}"))?;
        let raw_result: std::result::Result<T, _> = serde_json::from_str(&body);
        let payload =
            raw_result.with_context(|| format!("failed to decode JSON response: {path}"))?;
        Ok(Outcome::Success(payload))
    }
}

/// One repeated `query` pair per search term.
fn term_pairs(queries: &[String]) -> Vec<(&'static str, String)> {
    queries.iter().map(|q| ("query", q.clone())).collect()
}

/// `{path}` routed through the duration-recording variant.
fn timed(path: &str) -> String {
    format!("{TIMED_PREFIX}/{path}")
}

impl LocalDatabaseApi for DatabaseClient {
    #[instrument(skip_all)]
    async fn get_movies(&self, route: &str) -> Result<Outcome<Vec<Movie>>> {
        self.get_outcome(route, ALL_MOVIES_PATH, &[]).await
    }

    #[instrument(skip_all)]
    async fn get_movies_map(&self, route: &str) -> Result<Outcome<TitleVectors>> {
        self.get_outcome(route, MOVIES_MAP_PATH, &[]).await
    }

    #[instrument(skip_all)]
    async fn search_movies(&self, route: &str, query: &str) -> Result<Outcome<Vec<Movie>>> {
        let query = [("query", String::from(query))];
        self.get_outcome(route, SEARCH_PATH, &query).await
    }

    #[instrument(skip_all)]
    async fn search_movies_any(
        &self,
        route: &str,
        queries: &[String],
    ) -> Result<Outcome<Vec<Movie>>> {
        self.get_outcome(route, SEARCH_ANY_PATH, &term_pairs(queries))
            .await
    }

    #[instrument(skip_all)]
    async fn search_movies_all(
        &self,
        route: &str,
        queries: &[String],
    ) -> Result<Outcome<Vec<Movie>>> {
        self.get_outcome(route, SEARCH_ALL_PATH, &term_pairs(queries))
            .await
    }

    #[instrument(skip_all)]
    async fn get_movies_timed(&self, route: &str) -> Result<Outcome<Vec<Movie>>> {
        self.get_outcome(route, &timed(ALL_MOVIES_PATH), &[]).await
    }

    #[instrument(skip_all)]
    async fn get_movies_map_timed(&self, route: &str) -> Result<Outcome<TitleVectors>> {
        self.get_outcome(route, &timed(MOVIES_MAP_PATH), &[]).await
    }

    #[instrument(skip_all)]
    async fn search_movies_timed(&self, route: &str, query: &str) -> Result<Outcome<Vec<Movie>>> {
        let query = [("query", String::from(query))];
        self.get_outcome(route, &timed(SEARCH_PATH), &query).await
    }

    #[instrument(skip_all)]
    async fn search_movies_any_timed(
        &self,
        route: &str,
        queries: &[String],
    ) -> Result<Outcome<Vec<Movie>>> {
        self.get_outcome(route, &timed(SEARCH_ANY_PATH), &term_pairs(queries))
            .await
    }

    #[instrument(skip_all)]
    async fn search_movies_all_timed(
        &self,
        route: &str,
        queries: &[String],
    ) -> Result<Outcome<Vec<Movie>>> {
        self.get_outcome(route, &timed(SEARCH_ALL_PATH), &term_pairs(queries))
            .await
    }
}
