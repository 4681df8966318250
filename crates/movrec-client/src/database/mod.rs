//! Database microservice client module.
//!
//! Handles HTTP requests to the database microservice behind the gateway
//! and translates each exchange into typed movie data or a typed failure.

mod api;
mod client;
mod error;
mod proxy;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{DatabaseApi, LocalDatabaseApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{DatabaseClient, DatabaseClientBuilder};
pub use error::ProxyError;
#[allow(clippy::module_name_repetitions)]
pub use proxy::DatabaseProxy;
pub use types::{Movie, Outcome, TitleVectors};
