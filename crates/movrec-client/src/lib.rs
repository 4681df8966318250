//! Client library for the movrec recommender database microservice.
//!
//! Provides a typed proxy over the database service's HTTP endpoints:
//! movie lookup, title search, and the timed counterparts of each.

/// Database microservice client.
pub mod database;
